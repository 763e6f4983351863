//! Command-line interface
//!
//! Argument parsing and the log-level mapping used by the binary.

pub mod args;

pub use args::Cli;

/// Get the log filter based on verbosity, falling back to the configured level
pub fn get_log_level(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured.unwrap_or("info").to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
