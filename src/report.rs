//! Run accumulators and output writing
//!
//! This module handles:
//! - Accumulating per-row results over a run
//! - Deriving timestamped output paths from the caller's prefix
//! - Writing the scraped-links file, error file, and CSV log
//! - The end-of-run console summary

use crate::scrape::ScrapeOutcome;
use crate::Result;
use serde::Serialize;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// One row of the CSV audit log
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRecord {
    /// The raw URL as read from the input file
    #[serde(rename = "Input URL")]
    pub input_url: String,

    /// The URL actually requested (differs only when encoding is on)
    #[serde(rename = "Requested URL")]
    pub requested_url: String,

    /// The extracted official-site URL, empty field when absent
    #[serde(rename = "Scraped URL")]
    pub scraped_url: Option<String>,
}

/// Accumulated results of one scrape run
///
/// Owned by the run loop, written to disk once at the end, then discarded.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Extracted link per fetched row, in row order; `None` when the page
    /// was fetched but held no link
    pub scraped: Vec<Option<String>>,

    /// Requested URLs that failed or yielded no link, in row order
    pub error_urls: Vec<String>,

    /// CSV rows, one per fetched (200) input, in row order
    pub records: Vec<ScrapeRecord>,

    /// Rows where the fetch succeeded and a link was found
    pub success_count: u64,

    /// Rows where the fetch failed or no link was found
    pub error_count: u64,
}

impl RunReport {
    pub fn new() -> RunReport {
        RunReport::default()
    }

    /// Records one classified row.
    ///
    /// Every row lands in exactly one of the success or error counters.
    /// Fetched rows always get a CSV record, link or not; failed fetches
    /// get none.
    pub fn record(&mut self, input_url: &str, requested_url: &str, outcome: ScrapeOutcome) {
        match outcome {
            ScrapeOutcome::LinkFound(site_url) => {
                self.scraped.push(Some(site_url.clone()));
                self.records.push(ScrapeRecord {
                    input_url: input_url.to_string(),
                    requested_url: requested_url.to_string(),
                    scraped_url: Some(site_url),
                });
                self.success_count += 1;
            }
            ScrapeOutcome::LinkNotFound => {
                self.scraped.push(None);
                self.records.push(ScrapeRecord {
                    input_url: input_url.to_string(),
                    requested_url: requested_url.to_string(),
                    scraped_url: None,
                });
                self.error_urls.push(requested_url.to_string());
                self.error_count += 1;
            }
            ScrapeOutcome::FetchFailed(_) => {
                self.error_urls.push(requested_url.to_string());
                self.error_count += 1;
            }
        }
    }
}

/// The three artifact paths for one run
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Scraped link targets, one per line
    pub scraped_txt: PathBuf,

    /// Error URLs, one per line
    pub errors_txt: PathBuf,

    /// Full audit trail with header row
    pub log_csv: PathBuf,
}

impl OutputPaths {
    /// Derives the artifact paths from the output directories, the
    /// caller-supplied prefix, and the current local time.
    pub fn new(output_dir: &Path, log_dir: &Path, prefix: &str) -> OutputPaths {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        OutputPaths::with_timestamp(output_dir, log_dir, prefix, &timestamp.to_string())
    }

    /// Same as `new` but with an explicit timestamp string
    pub fn with_timestamp(
        output_dir: &Path,
        log_dir: &Path,
        prefix: &str,
        timestamp: &str,
    ) -> OutputPaths {
        OutputPaths {
            scraped_txt: output_dir.join(format!("{}_{}.txt", prefix, timestamp)),
            errors_txt: log_dir.join(format!("{}_{}_errors.txt", prefix, timestamp)),
            log_csv: log_dir.join(format!("{}_{}_log.csv", prefix, timestamp)),
        }
    }
}

/// Writes all three run artifacts.
///
/// Parent directories are created if missing. Nothing is written before
/// this point, so an aborted run leaves no partial artifacts behind.
pub fn write_reports(report: &RunReport, paths: &OutputPaths) -> Result<()> {
    for path in [&paths.scraped_txt, &paths.errors_txt, &paths.log_csv] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
    }

    write_csv_log(report, &paths.log_csv)?;
    write_scraped_urls(report, &paths.scraped_txt)?;
    write_error_urls(report, &paths.errors_txt)?;

    tracing::info!(
        "Wrote {} CSV rows, {} scraped links, {} error URLs",
        report.records.len(),
        report.scraped.iter().flatten().count(),
        report.error_urls.len()
    );

    Ok(())
}

/// Writes the CSV audit log with its header row
fn write_csv_log(report: &RunReport, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    // Written explicitly so an empty run still gets a header row.
    writer.write_record(["Input URL", "Requested URL", "Scraped URL"])?;

    for record in &report.records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the non-empty scraped link targets, one per line
fn write_scraped_urls(report: &RunReport, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)?;

    for url in report.scraped.iter().flatten() {
        writeln!(file, "{}", url)?;
    }

    Ok(())
}

/// Writes the error URLs, one per line
fn write_error_urls(report: &RunReport, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)?;

    for url in &report.error_urls {
        writeln!(file, "{}", url)?;
    }

    Ok(())
}

/// Reads back the scraped-links file and counts its lines
pub fn count_output_lines(path: &Path) -> Result<usize> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut count = 0;
    for line in reader.lines() {
        line?;
        count += 1;
    }
    Ok(count)
}

/// Prints the end-of-run summary block
pub fn print_summary(report: &RunReport, paths: &OutputPaths, output_line_count: usize) {
    println!("------------------");
    println!(
        "Scraping completed. URLs saved to {}",
        paths.scraped_txt.display()
    );
    println!(
        "URLs with errors saved to {}",
        paths.errors_txt.display()
    );
    println!("------------------");
    println!("Total URLs scraped: {}", report.success_count);
    println!("Total URLs with errors: {}", report.error_count);
    println!("Total lines in output file: {}", output_line_count);
}
