//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional `decision-matrix`
//! file (TOML, YAML or JSON) overridden by environment variables with the
//! `DECISION_MATRIX` prefix, where nested values use double underscores.
//!
//! # Example
//!
//! ```no_run
//! use decision_matrix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading problems from {}", config.analysis.problems_dir);
//! ```

mod analysis;
mod error;
mod logging;
mod output;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "decision-matrix";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tracing filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Analysis defaults (Hurwicz alpha, probability tolerance, problems dir)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report serialization
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from the default file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `decision-matrix.{toml,yaml,json}` from the working directory if present
    /// 3. Reads environment variables with `DECISION_MATRIX` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_MATRIX__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `DECISION_MATRIX__ANALYSIS__DEFAULT_HURWICZ_ALPHA=0.3` -> `analysis.default_hurwicz_alpha = 0.3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration using `file` as the optional config file base name
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_MATRIX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ReportFormat;
    use std::env;
    use std::fs;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DECISION_MATRIX__LOGGING__LEVEL",
        "DECISION_MATRIX__LOGGING__FORMAT",
        "DECISION_MATRIX__ANALYSIS__DEFAULT_HURWICZ_ALPHA",
        "DECISION_MATRIX__ANALYSIS__PROBABILITY_TOLERANCE",
        "DECISION_MATRIX__ANALYSIS__PROBLEMS_DIR",
        "DECISION_MATRIX__OUTPUT__FORMAT",
        "DECISION_MATRIX__OUTPUT__PRETTY",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn missing_file() -> String {
        let dir = tempfile::tempdir().unwrap();
        dir.path().join("absent").display().to_string()
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_from(&missing_file());

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.analysis.default_hurwicz_alpha, 0.5);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DECISION_MATRIX__LOGGING__FORMAT", "json");
        env::set_var("DECISION_MATRIX__ANALYSIS__DEFAULT_HURWICZ_ALPHA", "0.25");
        env::set_var("DECISION_MATRIX__ANALYSIS__PROBLEMS_DIR", "/srv/problems");
        env::set_var("DECISION_MATRIX__OUTPUT__FORMAT", "yaml");
        env::set_var("DECISION_MATRIX__OUTPUT__PRETTY", "false");
        let result = AppConfig::load_from(&missing_file());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.analysis.default_hurwicz_alpha, 0.25);
        assert_eq!(config.analysis.problems_dir, "/srv/problems");
        assert_eq!(config.output.format, ReportFormat::Yaml);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[analysis]\ndefault_hurwicz_alpha = 0.7\nprobability_tolerance = 0.000001\n",
        )
        .unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.analysis.default_hurwicz_alpha, 0.7);
        assert_eq!(config.analysis.probability_tolerance, 1e-6);
        assert_eq!(config.analysis.problems_dir, "problems");
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[analysis]\ndefault_hurwicz_alpha = 0.7\n").unwrap();
        env::set_var("DECISION_MATRIX__ANALYSIS__DEFAULT_HURWICZ_ALPHA", "0.1");

        let result = AppConfig::load_from(path.to_str().unwrap());
        clear_env();

        assert_eq!(result.unwrap().analysis.default_hurwicz_alpha, 0.1);
    }

    #[test]
    fn test_validate_rejects_bad_alpha() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DECISION_MATRIX__ANALYSIS__DEFAULT_HURWICZ_ALPHA", "1.5");
        let result = AppConfig::load_from(&missing_file());
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidHurwiczAlpha(1.5))
        );
    }
}
