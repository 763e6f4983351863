//! Catalogue ingestion
//!
//! Raw lines are split by the [`tokenizer`], mapped onto fixed columns by
//! [`record::Record`] and collected into an in-memory [`Dataset`].

pub mod loader;
pub mod record;
pub mod tokenizer;

pub use loader::Dataset;
pub use record::Record;
pub use tokenizer::tokenize;
