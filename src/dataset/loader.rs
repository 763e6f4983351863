//! Loading the catalogue export into memory

use super::record::Record;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// The fully materialized catalogue. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Open `path` and load every record after the header line.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Io(source) => Error::Input {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        info!(
            "Loaded {} records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Read records from any buffered source. The first line is the header.
    ///
    /// Lines are decoded lossily so a stray invalid byte only affects its own
    /// field. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        let mut blank = 0usize;

        for (index, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            if index == 0 {
                continue;
            }

            let text = String::from_utf8_lossy(&bytes);
            let text = text.strip_suffix('\r').unwrap_or(&text);
            if text.trim().is_empty() {
                blank += 1;
                continue;
            }

            records.push(Record::parse(text));
        }

        if blank > 0 {
            debug!("Skipped {} blank lines", blank);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
