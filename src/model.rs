// Core structs: ProductRecord, CategoryEntry, boundary errors
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// One input row. `title` and `supermarket` are always present strings;
/// anything malformed is rejected by the source before it gets here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub supermarket: String,
    pub price: f64,
}

/// Raw member data kept inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub title: String,
    pub supermarket: String,
}

impl From<&ProductRecord> for ProductRef {
    fn from(record: &ProductRecord) -> Self {
        Self {
            title: record.title.clone(),
            supermarket: record.supermarket.clone(),
        }
    }
}

/// One group of records sharing a standardized key.
///
/// `category` is the canonical title of the first record seen for the key.
/// `count` always equals `products.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    pub count: usize,
    pub products: Vec<ProductRef>,
}

impl CategoryEntry {
    pub fn new(category: String) -> Self {
        Self {
            category,
            count: 0,
            products: Vec::new(),
        }
    }

    pub fn push(&mut self, product: ProductRef) {
        self.count += 1;
        self.products.push(product);
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read products from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed product data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize categories: {0}")]
    Serialize(#[from] serde_json::Error),
}
