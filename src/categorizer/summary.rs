use crate::model::CategoryEntry;

/// Aggregate figures of one categorization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizationSummary {
    pub total_products: usize,
    pub categories: usize,
    /// Categories holding more than one product.
    pub grouped_categories: usize,
    /// Label and size of the biggest category; earliest wins on ties.
    pub largest: Option<(String, usize)>,
}

pub fn summarize(entries: &[CategoryEntry]) -> CategorizationSummary {
    let mut largest: Option<&CategoryEntry> = None;
    for entry in entries {
        if largest.is_none_or(|best| entry.count > best.count) {
            largest = Some(entry);
        }
    }

    CategorizationSummary {
        total_products: entries.iter().map(|e| e.count).sum(),
        categories: entries.len(),
        grouped_categories: entries.iter().filter(|e| e.count > 1).count(),
        largest: largest.map(|e| (e.category.clone(), e.count)),
    }
}
