use anyhow::{Context, Result};
use clap::Parser;
use joke_search::{
    HttpJokeFetcher, InteractiveSearch, SearchOptions,
    fetch::{DEFAULT_DEBOUNCE_MS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS},
    logging,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "joke-search",
    version,
    about = "Search dad jokes as you type and pick one from the dropdown",
    long_about = None
)]
struct Cli {
    /// Query typed into the search bar on startup
    query: Option<String>,

    /// Search endpoint, queried as `<endpoint>?term=<query>`
    #[arg(long, env = "JOKE_SEARCH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Quiet interval after the last keystroke before searching
    #[arg(long, env = "JOKE_SEARCH_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Request timeout
    #[arg(long, env = "JOKE_SEARCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log file (default: <cache dir>/joke-search/joke-search.log)
    #[arg(long, env = "JOKE_SEARCH_LOG")]
    log_file: Option<PathBuf>,

    /// Exit after the first pick
    #[arg(long)]
    once: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path, cli.verbose)?;

    let options = SearchOptions {
        endpoint: cli.endpoint,
        timeout: Duration::from_secs(cli.timeout_secs),
        debounce: Duration::from_millis(cli.debounce_ms),
    };
    tracing::info!(endpoint = %options.endpoint, "starting joke search");

    let fetcher = HttpJokeFetcher::new(&options).context("Failed to build HTTP client")?;

    let mut app = InteractiveSearch::new(options, Arc::new(fetcher))
        .with_on_select(|joke| tracing::debug!(joke = %joke, "host received selection"))
        .with_exit_after_selection(cli.once);
    if let Some(query) = cli.query {
        app = app.with_initial_query(query);
    }

    if let Some(joke) = app.run()? {
        println!("{joke}");
    }
    Ok(())
}
