//! Wikiscrape main entry point
//!
//! This is the command-line interface for the wikiscrape batch scraper.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wikiscrape::config::Config;
use wikiscrape::input::read_input_rows;
use wikiscrape::report::{count_output_lines, print_summary, write_reports, OutputPaths};
use wikiscrape::scrape::{build_http_client, run_scrape};

/// Wikiscrape: batch official-website link scraper
///
/// Reads a tab-delimited list of MediaWiki-style page URLs (named by the
/// INPUT_FILE environment variable or --input), fetches each page once,
/// extracts the official-website link from known infobox markup, and
/// writes a scraped-links file, an error file, and a CSV audit log.
#[derive(Parser, Debug)]
#[command(name = "wikiscrape")]
#[command(version = "1.0.0")]
#[command(about = "Batch official-website link scraper", long_about = None)]
struct Cli {
    /// Prefix for the timestamped output filenames
    #[arg(value_name = "OUTPUT_PREFIX")]
    output_prefix: String,

    /// Path to the input file (overrides the INPUT_FILE variable)
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Percent-encode request URLs before fetching
    #[arg(long)]
    encode_urls: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = Config::from_env(cli.input, cli.encode_urls)
        .context("Failed to load configuration")?;

    tracing::info!("Input file: {}", config.input_file.display());
    if config.encode_urls {
        tracing::info!("URL percent-encoding enabled");
    }

    // Read the input rows up front; a bad input file fails the run before
    // any network traffic.
    let rows = read_input_rows(&config.input_file).with_context(|| {
        format!(
            "Failed to read input file {}",
            config.input_file.display()
        )
    })?;
    tracing::info!("Processing {} input rows", rows.len());

    // Build the HTTP client for the whole run
    let client = build_http_client().context("Failed to build HTTP client")?;

    // Run the scrape loop; any transport fault aborts here with no
    // artifacts written.
    let report = run_scrape(&client, &config, &rows).await?;

    // Write the three artifacts
    let paths = OutputPaths::new(&config.output_dir, &config.log_dir, &cli.output_prefix);
    write_reports(&report, &paths)?;

    // Read back the scraped-links file for the reported line count
    let line_count = count_output_lines(&paths.scraped_txt)?;

    print_summary(&report, &paths, line_count);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikiscrape=info,warn"),
            1 => EnvFilter::new("wikiscrape=debug,info"),
            2 => EnvFilter::new("wikiscrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
