use crate::interactive_ratatui::domain::models::SearchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleFetch(String), // debounced
    CancelFetch,
    ExecuteFetch(SearchRequest),
    EmitSelection(String),
    ScheduleClearNotice(u64), // delay in milliseconds
}
