//! HTTP fetcher implementation
//!
//! One plain GET per input row. The run model is deliberately simple:
//! no retries, no redirect policy overrides, and no request timeout —
//! a row either yields a response or the transport error aborts the run.

use crate::ScrapeError;
use reqwest::Client;

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchResult {
    /// 200 response with the page body
    Success {
        /// The HTML body
        body: String,
    },

    /// Any non-200 status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },
}

/// Builds the HTTP client used for the whole run
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page with one GET request.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchResult::Success)` - 200 response with its body
/// * `Ok(FetchResult::HttpError)` - any other status
/// * `Err(ScrapeError)` - transport-level fault; aborts the run
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchResult, ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();

    // Anything other than a plain 200 is treated as a failed fetch,
    // including other 2xx codes.
    if status.as_u16() != 200 {
        return Ok(FetchResult::HttpError {
            status_code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchResult::Success { body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    // Fetch behavior against live responses is covered by the wiremock
    // scenarios in tests/scrape_tests.rs.
}
