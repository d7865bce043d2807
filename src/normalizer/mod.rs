// Normalizer module: title canonicalization and key standardization.

pub mod canonical;
pub mod rules;

pub use canonical::canonicalize;
pub use rules::{standardize, Standardizer, SubstitutionRule};

/// Grouping key of a raw title: canonical form with the default rules applied.
pub fn category_key(title: &str) -> String {
    standardize(&canonicalize(title))
}
