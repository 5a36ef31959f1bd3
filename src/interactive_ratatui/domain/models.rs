use crate::fetch::{FetchError, Joke};

/// Visibility mode of the dropdown. Exactly one is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IndicatorState {
    #[default]
    Collapsed,
    Opened,
    Loading,
}

impl IndicatorState {
    /// Opened and Loading are the states an outside click or Escape dismisses
    pub fn is_active(self) -> bool {
        matches!(self, IndicatorState::Opened | IndicatorState::Loading)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Input,
    Elsewhere,
}

/// Where a pointer-down landed, resolved against the last drawn frame
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerTarget {
    Input,
    /// Inside the dropdown panel but not on a row (border, padding)
    Dropdown,
    DropdownRow(usize),
    Outside,
}

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub id: u64,
    pub query: String,
    pub outcome: Result<Vec<Joke>, FetchError>,
}
