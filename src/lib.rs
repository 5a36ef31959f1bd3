pub mod fetch;
pub mod interactive_ratatui;
pub mod logging;

pub use fetch::{FetchError, HttpJokeFetcher, Joke, JokeSource, SearchOptions};
pub use interactive_ratatui::InteractiveSearch;
