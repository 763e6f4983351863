//! How many apps a fixed budget buys, cheapest first

use crate::dataset::Record;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetResult {
    pub budget: f64,
    pub apps: usize,
}

/// Parse a price cell such as `$4.99`, `1,299.00` or `0`.
///
/// `$`, the letter `M` and commas are stripped first. Values that do not parse,
/// or are negative or non-finite, are rejected.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | 'M' | ','))
        .collect();

    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Greedy count over prices: buy in ascending order while the remaining
/// budget covers the next price. Unaffordable items are skipped, not fatal.
pub fn greedy_purchase_count(mut prices: Vec<f64>, budget: f64) -> usize {
    prices.sort_by(f64::total_cmp);

    let mut remaining = budget;
    let mut bought = 0;
    for price in prices {
        if remaining >= price {
            remaining -= price;
            bought += 1;
        }
    }
    bought
}

/// Apply the greedy selection to every record with a parseable price.
/// Negative prices never refund the budget; those records are skipped.
pub fn apps_within_budget(records: &[Record], budget: f64) -> BudgetResult {
    let prices: Vec<f64> = records
        .iter()
        .filter_map(|record| parse_price(&record.price_raw))
        .collect();

    debug!(
        "Budget {}: {} of {} records have a usable price",
        budget,
        prices.len(),
        records.len()
    );

    BudgetResult {
        budget,
        apps: greedy_purchase_count(prices, budget),
    }
}
