//! # playstats
//!
//! Batch summaries over a Google Play app catalogue export.
//!
//! ## Usage
//!
//! ```bash
//! playstats [-i "Google Play Store Apps.csv"] [-o out/] [-b 1000 -b 10000]
//! ```
//!
//! ## Modules
//!
//! - `dataset` - Quote-aware tokenizer, fixed-column records and loading
//! - `analytics` - The aggregation passes (categories, companies, developers, budget, downloads)
//! - `report` - Rendering results into output tables
//! - `abstractions` - Trait seam for persisting tables, with a CSV and a mock implementation
//! - `pipeline` - Running every pass and writing every table
//! - `config` - Layered run configuration
//! - `cli` - Command-line arguments
pub mod abstractions;
pub mod analytics;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};
