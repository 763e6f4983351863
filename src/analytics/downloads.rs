//! Install volume of free versus paid apps

use crate::dataset::Record;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadTotals {
    pub free_downloads: i64,
    pub paid_downloads: i64,
}

impl DownloadTotals {
    pub fn total(&self) -> i64 {
        self.free_downloads.saturating_add(self.paid_downloads)
    }
}

/// Parse an install count such as `"1,000,000+"`.
///
/// Surrounding quotes, commas and dots are removed, then a single trailing `+`.
/// Dots are grouping noise in this export, not decimal points. A `+` anywhere
/// else makes the value unparseable.
pub fn parse_installs(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);

    let digits: String = unquoted
        .chars()
        .filter(|c| !matches!(c, ',' | '.'))
        .collect();
    let digits = digits.trim();

    digits
        .strip_suffix('+')
        .unwrap_or(digits)
        .parse::<i64>()
        .ok()
}

/// Sum parsed installs into the free or paid bucket. Unparseable counts are
/// skipped.
pub fn sum_downloads(records: &[Record]) -> DownloadTotals {
    let mut totals = DownloadTotals::default();
    let mut skipped = 0usize;

    for record in records {
        let Some(installs) = parse_installs(&record.installs_raw) else {
            skipped += 1;
            continue;
        };

        if record.is_free() {
            totals.free_downloads = totals.free_downloads.saturating_add(installs);
        } else {
            totals.paid_downloads = totals.paid_downloads.saturating_add(installs);
        }
    }

    debug!(
        "Summed downloads: free={} paid={} ({} records skipped)",
        totals.free_downloads, totals.paid_downloads, skipped
    );
    totals
}
