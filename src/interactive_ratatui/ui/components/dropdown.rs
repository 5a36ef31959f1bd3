use crate::fetch::Joke;
use crate::interactive_ratatui::ui::components::{Component, styles::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Result panel drawn under the search bar while the dropdown is open.
///
/// Each joke occupies exactly one terminal row so pointer positions map
/// directly onto result indices.
#[derive(Default)]
pub struct Dropdown {
    results: Vec<Joke>,
    selected_index: usize,
    scroll_offset: usize,
    area: Option<Rect>,
    rows_area: Option<Rect>,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_results(&mut self, results: &[Joke]) {
        if self.results != results {
            self.results = results.to_vec();
            self.scroll_offset = 0;
        }
        if self.selected_index >= self.results.len() {
            self.selected_index = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Forget the drawn geometry; called when the panel is hidden
    pub fn clear_area(&mut self) {
        self.area = None;
        self.rows_area = None;
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Result index under a pointer position, if the position is on a row
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let rows = self.rows_area?;
        if !rows.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - rows.y);
        (index < self.results.len()).then_some(index)
    }

    fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index + 1 - visible_rows;
        }
    }
}

impl Component for Dropdown {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Results ({})", self.results.len()))
            .borders(Borders::ALL)
            .border_style(Styles::dimmed());
        let inner = block.inner(area);
        f.render_widget(block, area);

        self.adjust_scroll(usize::from(inner.height));

        let lines: Vec<Line> = self
            .results
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(usize::from(inner.height))
            .map(|(index, joke)| {
                let style = if index == self.selected_index {
                    Styles::selected()
                } else {
                    Styles::normal()
                };
                Line::from(Span::styled(joke.joke.as_str(), style))
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);

        self.area = Some(area);
        self.rows_area = Some(inner);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::MoveSelectionUp),
            KeyCode::Down => Some(Message::MoveSelectionDown),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::MoveSelectionUp)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::MoveSelectionDown)
            }
            KeyCode::PageUp => Some(Message::MoveSelectionStart),
            KeyCode::PageDown => Some(Message::MoveSelectionEnd),
            KeyCode::Enter => Some(Message::SelectHighlighted),
            _ => None,
        }
    }
}
