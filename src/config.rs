//! Configuration module for wikiscrape
//!
//! Configuration comes from the process environment rather than a config
//! file: `INPUT_FILE` names the tab-delimited URL list, and `OUTPUT_DIR`
//! and `LOG_DIR` optionally override where the run artifacts land. A
//! `.env` file in the working directory is loaded first, if present.

use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;

/// Main configuration structure for a scrape run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the tab-delimited input file
    pub input_file: PathBuf,

    /// Directory for the scraped-links text file
    pub output_dir: PathBuf,

    /// Directory for the error file and CSV log
    pub log_dir: PathBuf,

    /// Percent-encode request URLs before fetching (off by default)
    pub encode_urls: bool,
}

impl Config {
    /// Builds a configuration from the environment.
    ///
    /// `input_override` takes precedence over the `INPUT_FILE` variable;
    /// one of the two must be present. `OUTPUT_DIR` defaults to `output`
    /// and `LOG_DIR` to `logs`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if no input file is named, and
    /// `ConfigError::Validation` if the resulting configuration is invalid.
    pub fn from_env(input_override: Option<PathBuf>, encode_urls: bool) -> ConfigResult<Config> {
        // A missing .env file is fine; a malformed one is worth a warning.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Unable to load .env file: {}", e);
            }
        }

        let input_file = match input_override {
            Some(path) => path,
            None => std::env::var("INPUT_FILE")
                .map(PathBuf::from)
                .map_err(|_| ConfigError::MissingVar("INPUT_FILE".to_string()))?,
        };

        let output_dir = std::env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("output"));

        let log_dir = std::env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        let config = Config {
            input_file,
            output_dir,
            log_dir,
            encode_urls,
        };

        validate(&config)?;

        Ok(config)
    }
}

/// Validates a configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    if config.input_file.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "input file path cannot be empty".to_string(),
        ));
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.log_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "log directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            input_file: PathBuf::from("urls.tsv"),
            output_dir: PathBuf::from("output"),
            log_dir: PathBuf::from("logs"),
            encode_urls: false,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate(&base_config()).is_ok());
    }

    #[test]
    fn test_validate_empty_input_file() {
        let mut config = base_config();
        config.input_file = PathBuf::new();
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_empty_output_dir() {
        let mut config = base_config();
        config.output_dir = PathBuf::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_empty_log_dir() {
        let mut config = base_config();
        config.log_dir = PathBuf::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_input_override_wins() {
        // The override path bypasses the environment entirely.
        let config = Config::from_env(Some(PathBuf::from("/tmp/list.tsv")), true).unwrap();
        assert_eq!(config.input_file, PathBuf::from("/tmp/list.tsv"));
        assert!(config.encode_urls);
    }
}
