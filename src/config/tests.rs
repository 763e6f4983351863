use super::*;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_test_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("playstats.toml");
    fs::write(&path, content).unwrap();
    path
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_default_config_matches_fixed_run() {
    let config = Config::default();
    assert_eq!(config.input, PathBuf::from("Google Play Store Apps.csv"));
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.budgets, vec![1000.0, 10000.0]);
    assert_eq!(config.top_companies, 100);
    assert_eq!(config.top_developers, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_partial_toml_keeps_defaults() {
    let temp_dir = setup_test_dir();
    let path = write_test_config(
        &temp_dir,
        r#"
input = "data/apps.csv"
budgets = [50.0]
"#,
    );

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.input, PathBuf::from("data/apps.csv"));
    assert_eq!(config.budgets, vec![50.0]);
    assert_eq!(config.top_companies, 100);
}

#[test]
fn test_unknown_key_rejected() {
    let temp_dir = setup_test_dir();
    let path = write_test_config(&temp_dir, "bogus = 1\n");
    assert!(matches!(Config::from_file(&path), Err(Error::Toml(_))));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = setup_test_dir();
    let result = Config::from_file(&temp_dir.path().join("nope.toml"));
    assert!(matches!(result, Err(Error::Input { .. })));
}

#[test]
fn test_env_overrides_file_values() {
    let mut config = Config {
        input: PathBuf::from("from-file.csv"),
        ..Config::default()
    };

    config
        .merge_env_from(env(&[
            ("PLAYSTATS_INPUT", "from-env.csv"),
            ("PLAYSTATS_OUTPUT_DIR", "reports"),
            ("PLAYSTATS_BUDGETS", "5, 25.5"),
            ("PLAYSTATS_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

    assert_eq!(config.input, PathBuf::from("from-env.csv"));
    assert_eq!(config.output_dir, PathBuf::from("reports"));
    assert_eq!(config.budgets, vec![5.0, 25.5]);
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_env_invalid_budget_is_config_error() {
    let mut config = Config::default();
    let err = config
        .merge_env_from(env(&[("PLAYSTATS_BUDGETS", "10,lots")]))
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_validate_rejects_bad_values() {
    let negative = Config {
        budgets: vec![-1.0],
        ..Config::default()
    };
    assert!(negative.validate().is_err());

    let no_companies = Config {
        top_companies: 0,
        ..Config::default()
    };
    assert!(no_companies.validate().is_err());
}

#[test]
fn test_parse_budget_list_skips_empty_entries() {
    assert_eq!(parse_budget_list("1000,,10000,").unwrap(), vec![1000.0, 10000.0]);
}
