use crate::interactive_ratatui::constants::{
    ARROW_DOWN, ARROW_UP, SEARCH_PLACEHOLDER, SPINNER_FRAMES,
};
use crate::interactive_ratatui::domain::models::{Focus, IndicatorState};
use crate::interactive_ratatui::ui::components::{
    Component, is_exit_prompt, styles::Styles, text_input::TextInput,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    indicator: IndicatorState,
    focus: Focus,
    notice: Option<String>,
    spinner_frame: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        self.input.set_text(query);
    }

    pub fn set_indicator(&mut self, indicator: IndicatorState) {
        self.indicator = indicator;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    pub fn set_spinner_frame(&mut self, frame: usize) {
        self.spinner_frame = frame;
    }

    pub fn get_query(&self) -> &str {
        self.input.text()
    }

    /// Glyph shown at the right edge: an arrow while idle, a spinner while loading
    pub fn indicator_symbol(&self) -> &'static str {
        match self.indicator {
            IndicatorState::Collapsed => ARROW_DOWN,
            IndicatorState::Opened => ARROW_UP,
            IndicatorState::Loading => SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
        }
    }

    fn input_line(&self) -> Line<'_> {
        let focused = self.focus == Focus::Input;
        if self.input.text().is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.extend(self.input.render_cursor_spans());
            }
            spans.push(Span::styled(SEARCH_PLACEHOLDER, Styles::dimmed()));
            Line::from(spans)
        } else if focused {
            Line::from(self.input.render_cursor_spans())
        } else {
            Line::from(Span::raw(self.input.text()))
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut title = vec![Span::raw("Search")];
        if let Some(notice) = &self.notice {
            let style = if is_exit_prompt(&self.notice) {
                Styles::dimmed()
            } else {
                Styles::warning()
            };
            title.push(Span::raw(" - "));
            title.push(Span::styled(notice.as_str(), style));
        }

        let style = if self.focus == Focus::Input {
            Styles::input_focused()
        } else {
            Styles::normal()
        };
        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        f.render_widget(Paragraph::new(self.input_line()).style(style), chunks[0]);
        f.render_widget(
            Paragraph::new(self.indicator_symbol()).style(Styles::title()),
            chunks[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.input.handle_key(key) {
            Some(Message::QueryChanged(self.input.text().to_string()))
        } else {
            None
        }
    }
}
