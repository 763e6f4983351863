//! Developer ranking by number of published apps
//!
//! Developers are identified by email address. Each one carries an employee
//! flag, a guess at whether the address belongs to the company that owns the
//! app: the app's company key must appear inside the email domain. The flag
//! is decided at first sighting and only reported, never used to filter.

use super::company::company_key;
use super::rank_descending;
use crate::dataset::Record;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub email: String,
    /// Developer id from the first record seen with this email.
    pub developer_id: String,
    pub app_count: u64,
    pub is_employee: bool,
}

impl Developer {
    fn first_sighting(email: &str, developer_id: &str, is_employee: bool) -> Self {
        Self {
            email: email.to_string(),
            developer_id: developer_id.to_string(),
            app_count: 1,
            is_employee,
        }
    }
}

/// Domain part of an email with exactly one `@` and a non-empty domain. The
/// local part may be empty.
pub fn email_domain(email: &str) -> Option<&str> {
    let (_, domain) = email.split_once('@')?;
    if domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(domain)
}

/// Employee heuristic: the lower-cased company key is contained in the
/// lower-cased email domain. An empty company key never matches.
pub fn is_employee(email_domain: &str, app_id: &str) -> bool {
    let company = company_key(app_id.trim()).to_lowercase();
    !company.is_empty() && email_domain.to_lowercase().contains(&company)
}

/// Build the per-email developer map. Records without a usable email are
/// skipped.
pub fn collect_developers(records: &[Record]) -> HashMap<String, Developer> {
    let mut developers: HashMap<String, Developer> = HashMap::new();
    let mut skipped = 0usize;

    for record in records {
        let email = record.developer_email.trim();
        let Some(domain) = email_domain(email) else {
            skipped += 1;
            continue;
        };

        developers
            .entry(email.to_string())
            .and_modify(|developer| developer.app_count += 1)
            .or_insert_with(|| {
                Developer::first_sighting(
                    email,
                    record.developer_id.trim(),
                    is_employee(domain, &record.app_id),
                )
            });
    }

    debug!(
        "Collected {} developers ({} records without a valid email)",
        developers.len(),
        skipped
    );
    developers
}

/// Developers with the most apps (descending, ties by email), at most `limit`.
pub fn top_developers(records: &[Record], limit: usize) -> Vec<Developer> {
    let mut ranked: Vec<Developer> = collect_developers(records).into_values().collect();
    rank_descending(
        &mut ranked,
        |developer| developer.app_count,
        |a, b| a.email.cmp(&b.email),
    );
    ranked.truncate(limit);
    ranked
}
