//! Apps per category

use crate::dataset::Record;
use std::collections::BTreeMap;
use tracing::debug;

/// Category name to number of apps. Ordered by name so output is stable.
pub type CategoryCounts = BTreeMap<String, u64>;

/// Count records per trimmed category. Records without a category are skipped.
pub fn count_categories(records: &[Record]) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    let mut skipped = 0usize;

    for record in records {
        let category = record.category.trim();
        if category.is_empty() {
            skipped += 1;
            continue;
        }
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }

    debug!(
        "Counted {} categories ({} records without category)",
        counts.len(),
        skipped
    );
    counts
}
