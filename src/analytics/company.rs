//! Apps per company, derived from reverse-domain app identifiers

use super::rank_descending;
use crate::dataset::Record;
use std::collections::HashMap;
use tracing::debug;

pub type CompanyCounts = HashMap<String, u64>;

/// Company key for an app identifier: the first two dot-separated parts
/// (`com.example.app` becomes `com.example`), or the whole identifier when it
/// has no dot.
pub fn company_key(app_id: &str) -> String {
    let mut parts = app_id.split('.');
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => format!("{first}.{second}"),
        _ => app_id.to_string(),
    }
}

/// Count records per company key. Records with an empty app id are skipped.
pub fn count_companies(records: &[Record]) -> CompanyCounts {
    let mut counts = CompanyCounts::new();

    for record in records {
        let app_id = record.app_id.trim();
        if app_id.is_empty() {
            continue;
        }
        *counts.entry(company_key(app_id)).or_insert(0) += 1;
    }

    debug!("Counted {} distinct companies", counts.len());
    counts
}

/// Companies ordered by app count (descending, ties by name), at most `limit`.
pub fn top_companies(counts: &CompanyCounts, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(company, count)| (company.clone(), *count))
        .collect();

    rank_descending(&mut entries, |(_, count)| *count, |a, b| a.0.cmp(&b.0));
    entries.truncate(limit);
    entries
}
