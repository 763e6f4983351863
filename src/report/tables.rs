use super::Table;
use crate::analytics::{BudgetResult, CategoryCounts, Developer, DownloadTotals};

pub const CATEGORY_FILE: &str = "AppsPerCategory.csv";
pub const COMPANY_FILE: &str = "Top100Companies.csv";
pub const DEVELOPER_FILE: &str = "Top3DevelopersThatDontWorkForCompany.csv";
pub const DOWNLOADS_FILE: &str = "FreeAppsVSPaidAppsInDownloads.csv";

pub fn category_table(counts: &CategoryCounts) -> Table {
    let mut table = Table::new(CATEGORY_FILE, &["Category", "NumberOfApps"]);
    for (category, count) in counts {
        table.push_row([category.clone(), count.to_string()]);
    }
    table
}

pub fn company_table(ranked: &[(String, u64)]) -> Table {
    let mut table = Table::new(COMPANY_FILE, &["Company", "NumberOfApps"]);
    for (company, count) in ranked {
        table.push_row([company.clone(), count.to_string()]);
    }
    table
}

pub fn developer_table(ranked: &[Developer]) -> Table {
    let mut table = Table::new(
        DEVELOPER_FILE,
        &[
            "DeveloperID",
            "DeveloperEmail",
            "NumberOfApps",
            "EmployeeOfTheCompany",
        ],
    );
    for developer in ranked {
        table.push_row([
            developer.developer_id.clone(),
            developer.email.clone(),
            developer.app_count.to_string(),
            developer.is_employee.to_string(),
        ]);
    }
    table
}

pub fn budget_table(result: &BudgetResult) -> Table {
    let mut table = Table::new(
        budget_file_name(result.budget),
        &["Budget", "NumberOfApps"],
    );
    table.push_row([format_budget(result.budget), result.apps.to_string()]);
    table
}

pub fn downloads_table(totals: &DownloadTotals) -> Table {
    let mut table = Table::new(DOWNLOADS_FILE, &["Category", "NumberOfDownloads"]);
    table.push_row(["Free Downloads".to_string(), totals.free_downloads.to_string()]);
    table.push_row(["Paid Downloads".to_string(), totals.paid_downloads.to_string()]);
    table
}

/// `NumberOfAppsFor1000Dollars.csv`; fractional budgets keep their decimals.
pub fn budget_file_name(budget: f64) -> String {
    let amount = if budget.fract() == 0.0 {
        format!("{budget:.0}")
    } else {
        budget.to_string()
    };
    format!("NumberOfAppsFor{amount}Dollars.csv")
}

/// Budget cell value, always with a decimal part (`1000.0`, `12.5`).
pub fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("{budget:.1}")
    } else {
        budget.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_rows_in_key_order() {
        let mut counts = CategoryCounts::new();
        counts.insert("Tools".to_string(), 2);
        counts.insert("Art".to_string(), 5);

        let table = category_table(&counts);
        assert_eq!(
            table.to_csv_string(),
            "Category,NumberOfApps\nArt,5\nTools,2\n"
        );
    }

    #[test]
    fn test_developer_table_columns() {
        let developers = vec![Developer {
            email: "dev@acme.com".to_string(),
            developer_id: "acme-dev".to_string(),
            app_count: 4,
            is_employee: true,
        }];
        let table = developer_table(&developers);
        assert_eq!(table.name, DEVELOPER_FILE);
        assert_eq!(table.rows, vec![vec!["acme-dev", "dev@acme.com", "4", "true"]]);
    }

    #[test]
    fn test_budget_naming_and_value() {
        let table = budget_table(&BudgetResult {
            budget: 1000.0,
            apps: 17,
        });
        assert_eq!(table.name, "NumberOfAppsFor1000Dollars.csv");
        assert_eq!(table.to_csv_string(), "Budget,NumberOfApps\n1000.0,17\n");

        assert_eq!(budget_file_name(12.5), "NumberOfAppsFor12.5Dollars.csv");
        assert_eq!(format_budget(12.5), "12.5");
    }

    #[test]
    fn test_downloads_table_always_has_both_rows() {
        let table = downloads_table(&DownloadTotals::default());
        assert_eq!(
            table.to_csv_string(),
            "Category,NumberOfDownloads\nFree Downloads,0\nPaid Downloads,0\n"
        );
    }
}
