//! Where rendered tables go
//!
//! The pipeline only knows about [`TableSink`]. The real implementation writes
//! one CSV file per table into a directory; the mock records tables in memory
//! and can be told to fail specific writes.

use crate::error::{Error, Result};
use crate::report::Table;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Trait for persisting output tables
pub trait TableSink: Send + Sync {
    /// Persist a single table. A failure affects only this table.
    fn write_table(&self, table: &Table) -> Result<()>;
}

/// Writes each table to `<dir>/<table.name>` as unquoted CSV
pub struct CsvFileSink {
    dir: PathBuf,
}

impl CsvFileSink {
    /// Create a sink rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, table: &Table) -> PathBuf {
        self.dir.join(&table.name)
    }
}

impl TableSink for CsvFileSink {
    fn write_table(&self, table: &Table) -> Result<()> {
        let path = self.path_for(table);
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .flexible(false)
            .from_path(&path)
            .map_err(|e| Error::output(&table.name, e))?;

        writer
            .write_record(&table.header)
            .map_err(|e| Error::output(&table.name, e))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| Error::output(&table.name, e))?;
        }
        writer.flush().map_err(|e| Error::output(&table.name, e))?;

        debug!("Wrote {} rows to {}", table.rows.len(), path.display());
        Ok(())
    }
}

/// Mock implementation of TableSink for testing
#[derive(Default, Clone)]
pub struct MockTableSink {
    /// Tables successfully written, in order
    pub written: Arc<Mutex<Vec<Table>>>,
    /// Table names whose write should fail
    pub failing: HashSet<String>,
}

impl MockTableSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes of the named table fail
    pub fn fail_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn written(&self) -> Vec<Table> {
        self.written
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn written_names(&self) -> Vec<String> {
        self.written().into_iter().map(|t| t.name).collect()
    }
}

impl TableSink for MockTableSink {
    fn write_table(&self, table: &Table) -> Result<()> {
        if self.failing.contains(&table.name) {
            return Err(Error::output(&table.name, "mock failure"));
        }
        self.written
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(table.clone());
        Ok(())
    }
}
