//! Wikiscrape: a batch official-website link scraper
//!
//! This crate implements a linear batch job that fetches a list of
//! MediaWiki-style pages, extracts the "official website" link from known
//! infobox markup, and writes a scraped-links file, an error file, and a
//! CSV audit log at the end of the run.

pub mod config;
pub mod encode;
pub mod input;
pub mod report;
pub mod scrape;

use thiserror::Error;

/// Main error type for wikiscrape operations
///
/// Configuration problems surface as [`ConfigError`] before a run starts
/// and never reach this type.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Input file error: {0}")]
    Input(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for wikiscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use report::{OutputPaths, RunReport, ScrapeRecord};
pub use scrape::{run_scrape, ScrapeOutcome};
