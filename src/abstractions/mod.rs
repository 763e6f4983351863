//! Abstraction layers for external side effects
//!
//! Output persistence sits behind a trait so the pipeline can be exercised
//! without touching the filesystem.

pub mod table_sink;

pub use table_sink::{CsvFileSink, MockTableSink, TableSink};
