//! Run configuration
//!
//! Values are layered, lowest precedence first: built-in defaults, an optional
//! TOML file, `PLAYSTATS_*` environment variables, then command-line flags
//! (applied by the binary).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_INPUT: &str = "Google Play Store Apps.csv";
pub const DEFAULT_BUDGETS: [f64; 2] = [1000.0, 10000.0];
pub const DEFAULT_TOP_COMPANIES: usize = 100;
pub const DEFAULT_TOP_DEVELOPERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalogue export to read.
    pub input: PathBuf,
    /// Directory receiving the output tables.
    pub output_dir: PathBuf,
    /// One purchase-count table is produced per budget.
    pub budgets: Vec<f64>,
    pub top_companies: usize,
    pub top_developers: usize,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            budgets: DEFAULT_BUDGETS.to_vec(),
            top_companies: DEFAULT_TOP_COMPANIES,
            top_developers: DEFAULT_TOP_DEVELOPERS,
            log_level: None,
        }
    }
}

impl Config {
    /// Defaults, overlaid with `path` when given, then with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.merge_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `PLAYSTATS_*` overrides read through `lookup`.
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup("PLAYSTATS_INPUT") {
            self.input = PathBuf::from(input);
        }

        if let Some(output_dir) = lookup("PLAYSTATS_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(budgets) = lookup("PLAYSTATS_BUDGETS") {
            self.budgets = parse_budget_list(&budgets)?;
        }

        if let Some(log_level) = lookup("PLAYSTATS_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.budgets.iter().find(|b| !b.is_finite() || **b < 0.0) {
            return Err(Error::Config(format!(
                "budget must be a non-negative number, got {bad}"
            )));
        }
        if self.top_companies == 0 {
            return Err(Error::Config("top_companies must be at least 1".into()));
        }
        if self.top_developers == 0 {
            return Err(Error::Config("top_developers must be at least 1".into()));
        }
        Ok(())
    }
}

/// Parse a comma-separated budget list such as `1000,10000`.
pub fn parse_budget_list(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| Error::Config(format!("invalid budget value: {s}")))
        })
        .collect()
}

#[cfg(test)]
mod tests;
