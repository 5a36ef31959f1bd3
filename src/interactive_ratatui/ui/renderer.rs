use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{IndicatorState, PointerTarget};
use crate::interactive_ratatui::ui::app_state::AppState;
use crate::interactive_ratatui::ui::components::{
    Component, dropdown::Dropdown, header::Header, search_bar::SearchBar, styles::Styles,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::Paragraph,
};

const STATUS_TEXT: &str =
    "↑/↓: Navigate | Enter/click: Pick | Esc: Close | Tab: Focus | Ctrl+C twice: Exit";

pub struct Renderer {
    header: Header,
    search_bar: SearchBar,
    dropdown: Dropdown,
    input_area: Option<Rect>,
    frame_count: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            header: Header::new(),
            search_bar: SearchBar::new(),
            dropdown: Dropdown::new(),
            input_area: None,
            frame_count: 0,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, selected_joke: Option<&str>) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let opened = state.indicator() == IndicatorState::Opened;
        let dropdown_height = if opened {
            let rows = u16::try_from(state.search.results.len()).unwrap_or(u16::MAX);
            rows.min(DROPDOWN_MAX_ROWS) + 2
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(dropdown_height),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.set_selected_joke(selected_joke.map(str::to_string));
        self.header.render(f, chunks[0]);

        // Only resync the editor when the controller's query differs so the cursor survives
        if self.search_bar.get_query() != state.search.query {
            self.search_bar.set_query(state.search.query.clone());
        }
        self.search_bar.set_indicator(state.indicator());
        self.search_bar.set_focus(state.search.focus);
        self.search_bar.set_notice(state.ui.notice.clone());
        self.search_bar.set_spinner_frame(self.frame_count);
        self.search_bar.render(f, chunks[1]);
        self.input_area = Some(chunks[1]);

        if opened && chunks[2].height > 0 {
            self.dropdown.set_results(state.visible_results());
            self.dropdown.set_selected_index(state.search.selected_index);
            self.dropdown.render(f, chunks[2]);
        } else {
            self.dropdown.clear_area();
        }

        let status_bar = Paragraph::new(STATUS_TEXT)
            .style(Styles::dimmed())
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(status_bar, chunks[4]);
    }

    /// Resolve a pointer position against the regions drawn in the last frame
    pub fn hit_test(&self, column: u16, row: u16) -> PointerTarget {
        if self
            .input_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
        {
            return PointerTarget::Input;
        }
        if let Some(index) = self.dropdown.row_at(column, row) {
            return PointerTarget::DropdownRow(index);
        }
        if self.dropdown.contains(column, row) {
            return PointerTarget::Dropdown;
        }
        PointerTarget::Outside
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }
}
