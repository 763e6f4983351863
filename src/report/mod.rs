//! Output tables
//!
//! Every aggregation result is rendered into a [`Table`]: a file name, a
//! header row and string cells. Persisting a table is the job of a
//! [`crate::abstractions::TableSink`].

pub mod tables;

pub use tables::{
    budget_table, category_table, company_table, developer_table, downloads_table,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// File name the table is written to, e.g. `AppsPerCategory.csv`.
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, header: &[&str]) -> Self {
        Self {
            name: name.into(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(cells.into_iter().map(|c| c.to_string()).collect());
    }

    /// Render as `\n`-terminated comma-separated text without quoting.
    pub fn to_csv_string(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| format!("{}\n", row.join(",")))
            .collect()
    }
}
