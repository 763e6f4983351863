//! End-to-end run: load the catalogue, aggregate, write every table
//!
//! Loading failures abort the run. Table write failures are logged and the
//! remaining tables are still written; the summary lists what failed.

use crate::abstractions::{CsvFileSink, TableSink};
use crate::analytics::{
    apps_within_budget, count_categories, count_companies, sum_downloads, top_companies,
    top_developers,
};
use crate::config::Config;
use crate::dataset::{Dataset, Record};
use crate::report::{
    budget_table, category_table, company_table, developer_table, downloads_table, Table,
};
use anyhow::Context;
use tracing::{error, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub tables_written: usize,
    pub failed_tables: Vec<String>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed_tables.is_empty()
    }
}

/// Run every aggregation over `records` and render the output tables.
pub fn build_tables(records: &[Record], config: &Config) -> Vec<Table> {
    let mut tables = vec![
        category_table(&count_categories(records)),
        company_table(&top_companies(
            &count_companies(records),
            config.top_companies,
        )),
        developer_table(&top_developers(records, config.top_developers)),
    ];

    tables.extend(
        config
            .budgets
            .iter()
            .map(|budget| budget_table(&apps_within_budget(records, *budget))),
    );

    tables.push(downloads_table(&sum_downloads(records)));
    tables
}

/// Aggregate `dataset` and hand each table to `sink`.
pub fn run_with_sink(dataset: &Dataset, config: &Config, sink: &dyn TableSink) -> RunSummary {
    let tables = build_tables(dataset.records(), config);
    let mut summary = RunSummary {
        records: dataset.len(),
        ..Default::default()
    };

    for table in &tables {
        match sink.write_table(table) {
            Ok(()) => summary.tables_written += 1,
            Err(e) => {
                error!("Failed to write {}: {}", table.name, e);
                summary.failed_tables.push(table.name.clone());
            }
        }
    }

    info!(
        "Wrote {}/{} tables from {} records",
        summary.tables_written,
        tables.len(),
        summary.records
    );
    summary
}

/// Load the configured input and write all tables to the output directory.
pub fn run(config: &Config) -> anyhow::Result<RunSummary> {
    let dataset = Dataset::load(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    let sink = CsvFileSink::new(&config.output_dir).with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            config.output_dir.display()
        )
    })?;

    Ok(run_with_sink(&dataset, config, &sink))
}
