//! # Detail Modal Component
//!
//! Centered overlay showing the selected record as pretty-printed JSON.
//! Closed with Esc/Enter, a click on `[x]`, or any click outside the modal.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailModalState` lives in `TuiState`
//! - `DetailModal` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::record::Record;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const CLOSE_LABEL: &str = "[x]";

/// What a click means while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Close,
    Inside,
}

#[derive(Default)]
pub struct DetailModalState {
    pub scroll_state: ScrollViewState,
}

impl DetailModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll keys; returns true if the event was consumed.
    pub fn handle_scroll(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

/// The modal's outer area within the full frame.
pub fn modal_area(outer: Rect) -> Rect {
    centered_rect(60, 80, outer)
}

/// The close control, right-aligned on the top border.
pub fn close_area(modal: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect::new(modal.right().saturating_sub(width + 1), modal.y, width, 1)
}

/// Classifies a click made while the modal covering `outer` is open.
pub fn classify_click(outer: Rect, column: u16, row: u16) -> ModalClick {
    let modal = modal_area(outer);
    let pos = Position::new(column, row);
    if close_area(modal).contains(pos) || !modal.contains(pos) {
        ModalClick::Close
    } else {
        ModalClick::Inside
    }
}

pub struct DetailModal<'a> {
    record: &'a Record,
    state: &'a mut DetailModalState,
}

impl<'a> DetailModal<'a> {
    pub fn new(record: &'a Record, state: &'a mut DetailModalState) -> Self {
        Self { record, state }
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = modal_area(area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Item Details ")
            .title_top(Line::from(CLOSE_LABEL).right_aligned())
            .title_bottom(Line::from(" Esc Close  ↑↓ Scroll ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.record.pretty_json())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endpoint::EndpointKey;
    use crate::test_support::sample_records;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_modal_shows_full_record() {
        let record = sample_records(EndpointKey::Users).remove(0);
        let mut state = DetailModalState::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                DetailModal::new(&record, &mut state).render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Item Details"));
        assert!(text.contains("[x]"));
        assert!(text.contains("\"username\": \"Bret\""));
        assert!(text.contains("\"name\": \"Romaguera-Crona\""));
    }

    #[test]
    fn test_click_outside_closes() {
        let outer = Rect::new(0, 0, 100, 40);
        assert_eq!(classify_click(outer, 0, 0), ModalClick::Close);
        assert_eq!(classify_click(outer, 50, 20), ModalClick::Inside);
    }

    #[test]
    fn test_click_on_close_control_closes() {
        let outer = Rect::new(0, 0, 100, 40);
        let close = close_area(modal_area(outer));
        assert_eq!(classify_click(outer, close.x + 1, close.y), ModalClick::Close);
        // The border just left of the control is still inside
        assert_eq!(classify_click(outer, close.x - 1, close.y), ModalClick::Inside);
    }

    #[test]
    fn test_scroll_keys_are_consumed() {
        let mut state = DetailModalState::new();
        assert!(state.handle_scroll(&TuiEvent::CursorDown));
        assert!(state.handle_scroll(&TuiEvent::Home));
        assert!(!state.handle_scroll(&TuiEvent::InputChar('a')));
    }
}
