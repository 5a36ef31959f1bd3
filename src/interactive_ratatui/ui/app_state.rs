use crate::fetch::Joke;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{PointerTarget, SearchRequest, SearchResponse};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;

pub use crate::interactive_ratatui::domain::models::{Focus, IndicatorState};

/// Dropdown controller: owns the query, the result set and the indicator
/// state. Every input arrives as a `Message`; side effects leave as a `Command`.
pub struct AppState {
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<Joke>,
    pub selected_index: usize,
    pub indicator: IndicatorState,
    pub focus: Focus,
    /// Id of the most recently issued request; responses with any other id are stale
    pub current_search_id: u64,
}

pub struct UiState {
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                indicator: IndicatorState::Collapsed,
                focus: Focus::Input,
                current_search_id: 0,
            },
            ui: UiState { notice: None },
        }
    }

    pub fn indicator(&self) -> IndicatorState {
        self.search.indicator
    }

    /// Results are only drawn while the dropdown is open
    pub fn visible_results(&self) -> &[Joke] {
        if self.search.indicator == IndicatorState::Opened {
            &self.search.results
        } else {
            &[]
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                self.search.focus = Focus::Input;
                if self.search.query.is_empty() {
                    self.discard_results();
                    // Anything still in flight now answers a query that no longer exists
                    self.search.current_search_id += 1;
                    self.set_indicator(IndicatorState::Collapsed);
                    Command::CancelFetch
                } else {
                    // A response for the previous text must not land while this one is pending
                    self.search.current_search_id += 1;
                    self.set_indicator(IndicatorState::Loading);
                    Command::ScheduleFetch(self.search.query.clone())
                }
            }
            Message::DebounceElapsed(q) => {
                if q.is_empty() || q != self.search.query {
                    tracing::debug!(query = %q, "dropping debounced query that is no longer current");
                    return Command::None;
                }
                self.search.current_search_id += 1;
                tracing::info!(id = self.search.current_search_id, query = %q, "issuing search");
                Command::ExecuteFetch(SearchRequest {
                    id: self.search.current_search_id,
                    query: q,
                })
            }
            Message::FetchCompleted(response) => self.apply_response(response),
            Message::SelectResult(index) => {
                if self.search.indicator != IndicatorState::Opened {
                    return Command::None;
                }
                match self.search.results.get(index) {
                    Some(joke) => {
                        let text = joke.joke.clone();
                        self.search.selected_index = index;
                        self.set_indicator(IndicatorState::Collapsed);
                        Command::EmitSelection(text)
                    }
                    None => Command::None,
                }
            }
            Message::SelectHighlighted => self.update(Message::SelectResult(self.search.selected_index)),
            Message::MoveSelectionUp => {
                if self.search.indicator == IndicatorState::Opened {
                    self.search.selected_index = self.search.selected_index.saturating_sub(1);
                }
                Command::None
            }
            Message::MoveSelectionDown => {
                if self.search.indicator == IndicatorState::Opened
                    && self.search.selected_index + 1 < self.search.results.len()
                {
                    self.search.selected_index += 1;
                }
                Command::None
            }
            Message::MoveSelectionStart => {
                if self.search.indicator == IndicatorState::Opened {
                    self.search.selected_index = 0;
                }
                Command::None
            }
            Message::MoveSelectionEnd => {
                if self.search.indicator == IndicatorState::Opened {
                    self.search.selected_index = self.search.results.len().saturating_sub(1);
                }
                Command::None
            }
            Message::InputFocused => {
                self.search.focus = Focus::Input;
                if self.search.indicator == IndicatorState::Collapsed
                    && !self.search.results.is_empty()
                {
                    self.set_indicator(IndicatorState::Opened);
                }
                Command::None
            }
            Message::InputBlurred => {
                self.search.focus = Focus::Elsewhere;
                Command::None
            }
            Message::PointerDown(target) => match target {
                PointerTarget::Input => {
                    if self.search.focus == Focus::Input {
                        Command::None
                    } else {
                        self.update(Message::InputFocused)
                    }
                }
                PointerTarget::DropdownRow(index) => self.update(Message::SelectResult(index)),
                PointerTarget::Dropdown => Command::None,
                PointerTarget::Outside => {
                    self.search.focus = Focus::Elsewhere;
                    self.dismiss();
                    Command::None
                }
            },
            Message::EscapePressed => {
                self.dismiss();
                Command::None
            }
            Message::ShowNotice(text) => {
                self.ui.notice = Some(text);
                Command::ScheduleClearNotice(NOTICE_CLEAR_DELAY_MS)
            }
            Message::NoticeExpired => {
                self.ui.notice = None;
                Command::None
            }
        }
    }

    fn apply_response(&mut self, response: SearchResponse) -> Command {
        if response.id != self.search.current_search_id {
            tracing::debug!(
                id = response.id,
                current = self.search.current_search_id,
                query = %response.query,
                "ignoring stale search response"
            );
            return Command::None;
        }

        // The user may have dismissed the dropdown while the request was in flight;
        // the result set is still refreshed so focusing the input can reopen it.
        let active = self.search.indicator.is_active();

        match response.outcome {
            Ok(jokes) if !jokes.is_empty() => {
                self.search.results = jokes;
                self.search.selected_index = 0;
                if active {
                    self.set_indicator(IndicatorState::Opened);
                }
                Command::None
            }
            Ok(_) => {
                self.discard_results();
                if active && !self.search.query.is_empty() {
                    self.set_indicator(IndicatorState::Collapsed);
                    return self.update(Message::ShowNotice(NO_RESULTS_NOTICE.to_string()));
                }
                Command::None
            }
            Err(e) => {
                tracing::error!(query = %response.query, error = %e, "search failed, collapsing dropdown");
                self.discard_results();
                if active {
                    self.set_indicator(IndicatorState::Collapsed);
                }
                Command::None
            }
        }
    }

    fn dismiss(&mut self) {
        if self.search.indicator.is_active() {
            self.set_indicator(IndicatorState::Collapsed);
        }
    }

    fn discard_results(&mut self) {
        self.search.results.clear();
        self.search.selected_index = 0;
    }

    fn set_indicator(&mut self, next: IndicatorState) {
        if self.search.indicator != next {
            tracing::debug!(from = ?self.search.indicator, to = ?next, "indicator transition");
            self.search.indicator = next;
        }
    }
}
