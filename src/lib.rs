//! Groups supermarket product listings into categories of the same product.
//!
//! Titles are canonicalized (lowercase, accent and punctuation free, words
//! sorted), rewritten with a table of unit and product synonyms, and records
//! sharing the resulting key are collected into one [`model::CategoryEntry`].

pub mod categorizer;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod source;
pub mod storage;

pub use categorizer::{group, summarize, Categorizer, CategorizerImpl};
pub use normalizer::{canonicalize, standardize};
