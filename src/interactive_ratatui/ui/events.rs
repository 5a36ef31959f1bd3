use crate::interactive_ratatui::domain::models::{PointerTarget, SearchResponse};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    DebounceElapsed(String),
    FetchCompleted(SearchResponse),

    // Dropdown navigation
    SelectResult(usize),
    SelectHighlighted,
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionStart,
    MoveSelectionEnd,

    // Focus and dismissal
    InputFocused,
    InputBlurred,
    PointerDown(PointerTarget),
    EscapePressed,

    // UI events
    ShowNotice(String),
    NoticeExpired,
}
