use crate::fetch::JokeSource;
use crate::interactive_ratatui::domain::models::{SearchRequest, SearchResponse};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub struct SearchService {
    source: Arc<dyn JokeSource>,
}

impl SearchService {
    pub fn new(source: Arc<dyn JokeSource>) -> Self {
        Self { source }
    }

    /// Run one request to completion. Failures are logged and carried in the
    /// response so the caller always gets an answer for every id it issued.
    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        let outcome = self.source.search(&request.query);

        match &outcome {
            Ok(jokes) => tracing::debug!(
                id = request.id,
                query = %request.query,
                count = jokes.len(),
                "search completed"
            ),
            Err(e) if e.is_transport() => tracing::error!(
                id = request.id,
                query = %request.query,
                error = %e,
                "Error fetching jokes"
            ),
            Err(e) => tracing::error!(
                id = request.id,
                query = %request.query,
                error = %e,
                "Joke search returned an unusable response"
            ),
        }

        SearchResponse {
            id: request.id,
            query: request.query,
            outcome,
        }
    }
}

/// Channels and thread handle of a running search worker.
///
/// Dropping the sender ends the worker loop.
pub struct SearchWorker {
    pub sender: Sender<SearchRequest>,
    pub receiver: Receiver<SearchResponse>,
    pub handle: JoinHandle<()>,
}

pub fn start_search_worker(service: Arc<SearchService>) -> SearchWorker {
    let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
    let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();

    let handle = thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let response = service.search(request);
            if response_tx.send(response).is_err() {
                break;
            }
        }
        tracing::debug!("search worker stopped");
    });

    SearchWorker {
        sender: request_tx,
        receiver: response_rx,
        handle,
    }
}
