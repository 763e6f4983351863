//! Aggregation passes over the catalogue
//!
//! Each pass is a pure function of the record slice. Passes share nothing and
//! can run in any order.

pub mod budget;
pub mod category;
pub mod company;
pub mod developers;
pub mod downloads;

pub use budget::{apps_within_budget, BudgetResult};
pub use category::{count_categories, CategoryCounts};
pub use company::{count_companies, top_companies, CompanyCounts};
pub use developers::{top_developers, Developer};
pub use downloads::{sum_downloads, DownloadTotals};

use std::cmp::Ordering;

/// Sort by `count` descending, breaking ties with `tie` so output is stable.
pub(crate) fn rank_descending<T>(
    items: &mut [T],
    count: impl Fn(&T) -> u64,
    tie: impl Fn(&T, &T) -> Ordering,
) {
    items.sort_by(|a, b| count(b).cmp(&count(a)).then_with(|| tie(a, b)));
}
