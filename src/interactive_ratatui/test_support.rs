use crate::fetch::{FetchError, Joke, JokeSource};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory joke source that records every query it receives
#[derive(Default)]
pub struct StaticJokeSource {
    answers: HashMap<String, Result<Vec<Joke>, FetchError>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl StaticJokeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jokes(mut self, query: &str, jokes: &[&str]) -> Self {
        self.answers.insert(
            query.to_string(),
            Ok(jokes.iter().map(|j| Joke::new(*j)).collect()),
        );
        self
    }

    pub fn with_error(mut self, query: &str, error: FetchError) -> Self {
        self.answers.insert(query.to_string(), Err(error));
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl JokeSource for StaticJokeSource {
    fn search(&self, query: &str) -> Result<Vec<Joke>, FetchError> {
        self.calls.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            std::thread::sleep(*delay);
        }
        self.answers
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn jokes(texts: &[&str]) -> Vec<Joke> {
    texts.iter().map(|t| Joke::new(*t)).collect()
}

pub fn create_key_event(code: KeyCode) -> KeyEvent {
    create_key_event_with_modifiers(code, KeyModifiers::empty())
}

pub fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
