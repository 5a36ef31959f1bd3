//! Constants for the interactive TUI module

// Timing constants
/// Notice auto-clear delay in milliseconds
pub const NOTICE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Notices
pub const NO_RESULTS_NOTICE: &str = "No results!";

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// UI Layout constants
/// Height of the host header (title + selected joke)
pub const HEADER_HEIGHT: u16 = 6;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Rows shown in the dropdown before it scrolls
pub const DROPDOWN_MAX_ROWS: u16 = 10;

/// Height of the key hint line
pub const STATUS_BAR_HEIGHT: u16 = 1;

pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Frames of the loading indicator, advanced once per draw
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub const ARROW_DOWN: &str = "▼";

pub const ARROW_UP: &str = "▲";
