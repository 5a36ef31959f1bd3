use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind, poll,
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crate::fetch::{FetchError, JokeSource, SearchOptions};

pub mod application;
pub mod constants;
pub mod domain;
pub mod terminal;
pub mod ui;

#[cfg(test)]
mod test_support;

use self::application::{
    debouncer::Debouncer,
    search_service::{SearchService, start_search_worker},
};
use self::constants::*;
use self::domain::models::{Focus, IndicatorState, SearchRequest, SearchResponse};
use self::terminal::TerminalSession;
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

type SelectCallback = Box<dyn FnMut(&str)>;

/// The search widget together with its host page.
///
/// Owns the dropdown controller, the debounce timer and the search worker,
/// and hands every picked joke to the host callback.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    search_sender: Option<Sender<SearchRequest>>,
    search_receiver: Option<Receiver<SearchResponse>>,
    debouncer: Debouncer<String>,
    initial_query: Option<String>,
    selected_joke: Option<String>,
    on_select: Option<SelectCallback>,
    exit_after_selection: bool,
    should_quit: bool,
    last_ctrl_c_press: Option<Instant>,
    notice_timer: Option<Instant>,
    notice_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(options: SearchOptions, source: Arc<dyn JokeSource>) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            search_service: Arc::new(SearchService::new(source)),
            search_sender: None,
            search_receiver: None,
            debouncer: Debouncer::new(options.debounce),
            initial_query: None,
            selected_joke: None,
            on_select: None,
            exit_after_selection: false,
            should_quit: false,
            last_ctrl_c_press: None,
            notice_timer: None,
            notice_clear_delay: NOTICE_CLEAR_DELAY_MS,
        }
    }

    /// Host hook invoked with the text of every picked joke
    pub fn with_on_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = Some(query.into()).filter(|q| !q.is_empty());
        self
    }

    pub fn with_exit_after_selection(mut self, exit: bool) -> Self {
        self.exit_after_selection = exit;
        self
    }

    pub fn selected_joke(&self) -> Option<&str> {
        self.selected_joke.as_deref()
    }

    /// Run the widget until the user exits. Returns the last picked joke.
    pub fn run(&mut self) -> Result<Option<String>> {
        // Declared before the terminal so it is dropped after it
        let _session = TerminalSession::start()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        self.start_worker();
        if let Some(query) = self.initial_query.take() {
            self.handle_message(Message::QueryChanged(query));
        }

        self.run_app(&mut terminal)?;
        Ok(self.selected_joke.clone())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            self.drain_responses();
            self.tick(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }
        Ok(())
    }

    pub(crate) fn start_worker(&mut self) {
        let worker = start_search_worker(self.search_service.clone());
        self.search_sender = Some(worker.sender);
        self.search_receiver = Some(worker.receiver);
    }

    pub(crate) fn draw(&mut self, f: &mut Frame) {
        self.renderer
            .render(f, &self.state, self.selected_joke.as_deref());
    }

    /// Feed every finished search back into the controller
    pub(crate) fn drain_responses(&mut self) {
        let responses: Vec<SearchResponse> = match &self.search_receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => return,
        };
        for response in responses {
            self.handle_message(Message::FetchCompleted(response));
        }
    }

    /// Fire timers that are due at `now`
    pub(crate) fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.poll(now) {
            self.handle_message(Message::DebounceElapsed(query));
        }

        if let Some(timer) = self.notice_timer {
            if now.saturating_duration_since(timer) >= Duration::from_millis(self.notice_clear_delay)
            {
                self.notice_timer = None;
                self.handle_message(Message::NoticeExpired);
            }
        }
    }

    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_input(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(_),
                column,
                row,
                ..
            }) => {
                let target = self.renderer.hit_test(column, row);
                self.handle_message(Message::PointerDown(target));
            }
            // The input keeps its focus while the terminal window is in the
            // background and receives it again when the window comes back.
            Event::FocusGained if self.state.search.focus == Focus::Input => {
                self.handle_message(Message::InputFocused);
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::ShowNotice(EXIT_PROMPT.to_string()));
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Esc => {
                self.handle_message(Message::EscapePressed);
                return;
            }
            KeyCode::Tab => {
                let message = match self.state.search.focus {
                    Focus::Input => Message::InputBlurred,
                    Focus::Elsewhere => Message::InputFocused,
                };
                self.handle_message(message);
                return;
            }
            _ => {}
        }

        if self.state.indicator() == IndicatorState::Opened {
            if let Some(message) = self.renderer.get_dropdown_mut().handle_key(key) {
                self.handle_message(message);
                return;
            }
        }

        if self.state.search.focus == Focus::Input {
            let search_bar = self.renderer.get_search_bar_mut();
            if search_bar.get_query() != self.state.search.query {
                search_bar.set_query(self.state.search.query.clone());
            }
            if let Some(message) = search_bar.handle_key(key) {
                self.handle_message(message);
            }
        }
    }

    pub(crate) fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleFetch(query) => {
                self.debouncer.schedule(query, Instant::now());
            }
            Command::CancelFetch => {
                if let Some(query) = self.debouncer.cancel() {
                    tracing::debug!(query = %query, "cancelled pending search");
                }
            }
            Command::ExecuteFetch(request) => self.execute_search(request),
            Command::EmitSelection(joke) => {
                tracing::info!(joke = %joke, "joke selected");
                if let Some(callback) = self.on_select.as_mut() {
                    callback(&joke);
                }
                self.selected_joke = Some(joke);
                if self.exit_after_selection {
                    self.should_quit = true;
                }
            }
            Command::ScheduleClearNotice(delay) => {
                self.notice_timer = Some(Instant::now());
                self.notice_clear_delay = delay;
            }
        }
    }

    fn execute_search(&mut self, request: SearchRequest) {
        let Some(sender) = &self.search_sender else {
            tracing::error!(query = %request.query, "search worker is not running");
            return self.fail_request(request, "search worker is not running");
        };

        if let Err(e) = sender.send(request) {
            tracing::error!("search worker stopped: {e}");
            self.fail_request(e.0, "search worker stopped");
        }
    }

    fn fail_request(&mut self, request: SearchRequest, reason: &str) {
        self.handle_message(Message::FetchCompleted(SearchResponse {
            id: request.id,
            query: request.query,
            outcome: Err(FetchError::Request(reason.to_string())),
        }));
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Block until one response arrives and apply it
    #[cfg(test)]
    pub(crate) fn wait_for_response(&mut self, timeout: Duration) -> bool {
        let response = match &self.search_receiver {
            Some(receiver) => receiver.recv_timeout(timeout).ok(),
            None => None,
        };
        match response {
            Some(response) => {
                self.handle_message(Message::FetchCompleted(response));
                true
            }
            None => false,
        }
    }
}
