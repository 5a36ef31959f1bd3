pub mod dropdown;
pub mod header;
pub mod search_bar;
pub mod styles;
pub mod text_input;

#[cfg(test)]
mod text_input_test;

use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a notice is the exit prompt
pub fn is_exit_prompt(notice: &Option<String>) -> bool {
    notice
        .as_deref()
        .is_some_and(|msg| msg == crate::interactive_ratatui::constants::EXIT_PROMPT)
}
