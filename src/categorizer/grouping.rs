use crate::model::{CategoryEntry, ProductRecord, ProductRef};
use crate::normalizer::{canonicalize, Standardizer};
use std::collections::HashMap;
use tracing::debug;

/// Trait defining the interface for a product categorizer.
pub trait Categorizer {
    /// Groups records by standardized key, preserving first-seen order.
    fn categorize(&self, records: &[ProductRecord]) -> Vec<CategoryEntry>;
}

/// Categorizer backed by a substitution rule list.
#[derive(Debug, Clone, Default)]
pub struct CategorizerImpl {
    standardizer: Standardizer,
}

impl CategorizerImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standardizer(standardizer: Standardizer) -> Self {
        Self { standardizer }
    }

    /// Grouping key of a raw title under this categorizer's rules.
    pub fn key_for(&self, title: &str) -> String {
        self.standardizer.standardize(&canonicalize(title))
    }
}

impl Categorizer for CategorizerImpl {
    fn categorize(&self, records: &[ProductRecord]) -> Vec<CategoryEntry> {
        let mut index = CategoryIndex::default();
        for record in records {
            let normalized = canonicalize(&record.title);
            let key = self.standardizer.standardize(&normalized);
            index.entry(key, normalized).push(ProductRef::from(record));
        }
        index.into_entries()
    }
}

/// Groups records with the built-in rules.
pub fn group(records: &[ProductRecord]) -> Vec<CategoryEntry> {
    CategorizerImpl::new().categorize(records)
}

/// Insertion-ordered map from key to entry: slots live in `entries` in the
/// order their keys were first seen.
#[derive(Debug, Default)]
struct CategoryIndex {
    slots: HashMap<String, usize>,
    entries: Vec<CategoryEntry>,
}

impl CategoryIndex {
    /// Existing entry for `key`, or a new one labelled `label`.
    fn entry(&mut self, key: String, label: String) -> &mut CategoryEntry {
        let entries = &mut self.entries;
        let slot = *self.slots.entry(key).or_insert_with_key(|key| {
            debug!("New category {:?} (key {:?})", label, key);
            entries.push(CategoryEntry::new(label));
            entries.len() - 1
        });
        &mut self.entries[slot]
    }

    fn into_entries(self) -> Vec<CategoryEntry> {
        self.entries
    }
}
