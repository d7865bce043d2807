// Categorizer module: key-based grouping and run summaries.

pub mod grouping;
pub mod summary;

// Re-export the main Categorizer implementation for ease of use.
pub use grouping::{group, Categorizer, CategorizerImpl};
pub use summary::{summarize, CategorizationSummary};
