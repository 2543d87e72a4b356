//! Scraper module: the per-row fetch-and-extract loop
//!
//! This module owns the core batch loop. Each input row gets exactly one
//! GET request, issued sequentially in row order, and is classified as
//! exactly one of success (page fetched and link found) or error
//! (fetch failed, or page fetched but no link found).

mod extract;
mod fetcher;

pub use extract::extract_official_site;
pub use fetcher::{build_http_client, fetch_page, FetchResult};

use crate::config::Config;
use crate::encode::encode_url;
use crate::report::RunReport;
use crate::Result;
use reqwest::Client;

/// Classification of one processed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Page fetched and an official-site link extracted
    LinkFound(String),

    /// Page fetched but no matching span held a link
    LinkNotFound,

    /// Fetch returned a non-200 status
    FetchFailed(u16),
}

/// Runs the scrape loop over all input rows.
///
/// Rows are processed strictly in order, one request at a time. Non-200
/// responses and missing links are recorded in the report and the loop
/// continues; transport-level faults propagate and abort the run.
///
/// # Arguments
///
/// * `client` - The HTTP client for the run
/// * `config` - The run configuration
/// * `rows` - Input URLs, in file order
///
/// # Returns
///
/// The accumulated run report, ready to be written to disk.
pub async fn run_scrape(client: &Client, config: &Config, rows: &[String]) -> Result<RunReport> {
    let mut report = RunReport::new();

    for raw_url in rows {
        let raw_url = raw_url.trim();

        let requested_url = if config.encode_urls {
            encode_url(raw_url)
        } else {
            raw_url.to_string()
        };

        let outcome = scrape_one(client, &requested_url).await?;

        match &outcome {
            ScrapeOutcome::LinkFound(site_url) => {
                println!("Scraped webpage: {}", requested_url);
                println!("Official Site URL: {}", site_url);
            }
            ScrapeOutcome::LinkNotFound => {
                println!("Scraped webpage: {}", requested_url);
                println!("Official Site URL not found on {}", requested_url);
            }
            ScrapeOutcome::FetchFailed(status) => {
                println!(
                    "Failed to retrieve the webpage {}. Status code: {}",
                    requested_url, status
                );
            }
        }

        report.record(raw_url, &requested_url, outcome);
    }

    Ok(report)
}

/// Fetches one page and classifies the result
async fn scrape_one(client: &Client, url: &str) -> Result<ScrapeOutcome> {
    match fetch_page(client, url).await? {
        FetchResult::Success { body } => match extract_official_site(&body) {
            Some(site_url) => Ok(ScrapeOutcome::LinkFound(site_url)),
            None => Ok(ScrapeOutcome::LinkNotFound),
        },
        FetchResult::HttpError { status_code } => Ok(ScrapeOutcome::FetchFailed(status_code)),
    }
}
