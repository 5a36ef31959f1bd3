use crate::interactive_ratatui::ui::components::styles::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Host area above the search bar: page title and the last picked joke
#[derive(Default)]
pub struct Header {
    selected_joke: Option<String>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected_joke(&mut self, joke: Option<String>) {
        self.selected_joke = joke;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let body = match &self.selected_joke {
            Some(joke) => Line::from(Span::styled(joke.as_str(), Styles::normal())),
            None => Line::from(Span::styled(
                "Type to search, pick a joke to show it here.",
                Styles::dimmed(),
            )),
        };

        let lines = vec![
            Line::from(Span::styled("Search jokes", Styles::title())),
            Line::default(),
            body,
        ];

        let header = Paragraph::new(lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .wrap(Wrap { trim: true });
        f.render_widget(header, area);
    }
}
