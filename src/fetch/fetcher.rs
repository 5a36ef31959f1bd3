use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

use super::{FetchError, SearchOptions};

const USER_AGENT: &str = concat!("joke-search/", env!("CARGO_PKG_VERSION"));

/// A single search hit. Only `joke` is required; the API's other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    #[serde(default)]
    pub id: Option<String>,
    pub joke: String,
}

impl Joke {
    pub fn new(joke: impl Into<String>) -> Self {
        Self {
            id: None,
            joke: joke.into(),
        }
    }
}

/// Body shape of the search endpoint: `{ "results": [{ "joke": "..." }, ...] }`
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub results: Vec<Joke>,
}

/// Anything that can turn a query into an ordered list of jokes.
pub trait JokeSource: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<Joke>, FetchError>;
}

/// Issues one GET per search against the configured endpoint. Never retries.
pub struct HttpJokeFetcher {
    client: Client,
    endpoint: String,
}

impl HttpJokeFetcher {
    pub fn new(options: &SearchOptions) -> Result<Self, FetchError> {
        Self::with_timeout(options.endpoint.clone(), options.timeout)
    }

    pub fn with_timeout(endpoint: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl JokeSource for HttpJokeFetcher {
    fn search(&self, query: &str) -> Result<Vec<Joke>, FetchError> {
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("term", query)])
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Request(format!("timed out: {e}"))
                } else {
                    FetchError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let page: SearchPage =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(page.results)
    }
}
