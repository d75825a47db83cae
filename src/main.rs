//! Contact-Sweep main entry point
//!
//! Command-line interface for the domain-scoped contact crawler.

use anyhow::Context;
use clap::Parser;
use contact_sweep::config::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_WORKERS};
use contact_sweep::state::CrawlState;
use contact_sweep::storage::{load_state, state_file_path};
use contact_sweep::url::root_domain;
use contact_sweep::{scan_site, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Contact-Sweep: extract emails, phone numbers, and social links from a website
///
/// Crawls one website, staying on its domain, and records every contact
/// artifact it finds into a per-domain JSON file that other tools can poll
/// while the crawl runs.
#[derive(Parser, Debug)]
#[command(name = "contact-sweep")]
#[command(version = "1.0.0")]
#[command(about = "Domain-scoped contact crawler", long_about = None)]
struct Cli {
    /// Seed URL of the website to scan
    #[arg(value_name = "URL")]
    website_url: String,

    /// Number of concurrent crawl workers
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Per-request fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Directory for the per-domain results file
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Show the stats recorded for this domain and exit without crawling
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config {
        workers: cli.workers,
        fetch_timeout_secs: cli.timeout,
        output_dir: cli.output_dir,
    };
    config.validate()?;

    if cli.stats {
        return handle_stats(&config, &cli.website_url);
    }

    tracing::info!("Scanning {}", cli.website_url);
    let state = scan_site(&config, &cli.website_url).await?;
    print_summary(&state);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_sweep=info,warn"),
            1 => EnvFilter::new("contact_sweep=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Handles the --stats mode: prints the recorded stats for the seed's domain
fn handle_stats(config: &Config, seed_url: &str) -> anyhow::Result<()> {
    let seed = url::Url::parse(seed_url).with_context(|| format!("invalid URL: {seed_url}"))?;
    let domain = root_domain(&seed)
        .with_context(|| format!("URL has no host: {seed_url}"))?;

    let path = state_file_path(&config.output_dir, &domain);
    let state = load_state(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    println!("Record: {}\n", path.display());
    print_summary(&state);
    Ok(())
}

/// Prints the summary counters of a crawl state
fn print_summary(state: &CrawlState) {
    println!("=== Crawl Summary ===\n");
    println!("  Pages scraped:      {}", state.stats.total_pages_scraped);
    println!("  Emails:             {}", state.stats.extracted_emails);
    println!(
        "  Phone numbers:      {}",
        state.stats.extracted_phone_numbers
    );
    println!(
        "  Social media links: {}",
        state.stats.total_social_media_links
    );
    println!(
        "  Time taken:         {:.2}s",
        state.stats.time_taken_to_scrape
    );
}
