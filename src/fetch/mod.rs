pub mod error;
pub mod fetcher;


use std::time::Duration;

pub use error::FetchError;
pub use fetcher::{HttpJokeFetcher, Joke, JokeSource, SearchPage};

pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/search";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Options shared by the fetcher and the interactive front end
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub endpoint: String,
    pub timeout: Duration,
    /// Quiet interval before a typed query is sent
    pub debounce: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}
