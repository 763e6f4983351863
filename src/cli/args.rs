//! CLI argument structures

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Summarize a Google Play catalogue export into CSV tables
#[derive(Parser, Debug)]
#[command(name = "playstats")]
#[command(about = "playstats - Summary tables for a Google Play app catalogue", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Catalogue export to read (default: "Google Play Store Apps.csv")
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Directory for the output tables (default: current directory)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Budget to spend on apps; repeat for several tables (default: 1000 and 10000)
    #[arg(short = 'b', long = "budget", value_name = "AMOUNT")]
    pub budgets: Vec<f64>,
}

impl Cli {
    /// Overlay explicitly given flags onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if !self.budgets.is_empty() {
            config.budgets = self.budgets.clone();
        }
    }
}
