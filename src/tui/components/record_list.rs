//! # RecordList Component
//!
//! Renders the active endpoint's `ListView`: a loading indicator, an empty
//! state, a "no matches" message, or the filtered rows under a
//! "Showing X of Y items" header.
//!
//! ## Architecture
//!
//! `RecordList` is a transient component (created each frame) that wraps
//! `&'a mut RecordListState` (persistent state) and the view (props).
//! Rendering records the screen area of every visible row so mouse clicks
//! can be mapped back to a record.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, HighlightSpacing, List, ListItem, ListState, Paragraph};

use crate::core::filter::ListView;
use crate::tui::component::Component;
use crate::tui::components::record_row::row_lines;

const HIGHLIGHT_SYMBOL: &str = "▌ ";

/// Selection and layout state for the record list.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct RecordListState {
    pub list_state: ListState,
    /// Index into the currently shown (filtered) records
    pub selected: usize,
    /// Visible rows from the last render: screen area → shown index
    pub row_areas: Vec<(Rect, usize)>,
}

impl RecordListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. after a tab switch or a new search term.
    /// Row areas describe the old list, so clicks miss until the next draw.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        self.row_areas.clear();
    }

    fn page_size(&self) -> usize {
        self.row_areas.len().max(1)
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + self.page_size()).min(len - 1);
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size());
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Which shown record (if any) is drawn at the given screen cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.row_areas
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, index)| *index)
    }
}

pub struct RecordList<'a> {
    view: &'a ListView<'a>,
    /// Endpoint label, used in the empty message
    label: &'a str,
    term: &'a str,
    spinner: &'a str,
    state: &'a mut RecordListState,
}

impl<'a> RecordList<'a> {
    pub fn new(
        view: &'a ListView<'a>,
        label: &'a str,
        term: &'a str,
        spinner: &'a str,
        state: &'a mut RecordListState,
    ) -> Self {
        Self {
            view,
            label,
            term,
            spinner,
            state,
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, text: Line, bordered: bool) {
        let mut paragraph = Paragraph::new(text).alignment(Alignment::Center);
        if bordered {
            paragraph = paragraph.block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        }
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(if bordered { 3 } else { 1 }),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(paragraph, middle);
    }
}

impl Component for RecordList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.row_areas.clear();

        let (shown, total) = match self.view {
            ListView::Loading => {
                let line = Line::from(vec![
                    Span::styled(self.spinner, Style::default().fg(Color::Blue)),
                    Span::raw(" Loading items..."),
                ]);
                Self::render_message(frame, area, line, false);
                return;
            }
            ListView::Empty => {
                let line = Line::styled(
                    format!("No {} found", self.label.to_lowercase()),
                    Style::default().fg(Color::Gray),
                );
                Self::render_message(frame, area, line, true);
                return;
            }
            ListView::NoMatches => {
                let line = Line::styled(
                    format!("No items match your search: \"{}\"", self.term),
                    Style::default().fg(Color::Gray),
                );
                Self::render_message(frame, area, line, false);
                return;
            }
            ListView::Items { shown, total } => (shown, *total),
        };

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            Line::styled(
                format!("Showing {} of {} items", shown.len(), total),
                Style::default().fg(Color::DarkGray),
            ),
            header_area,
        );

        let row_width = list_area.width.saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16) as usize;
        let mut heights = Vec::with_capacity(shown.len());
        let items: Vec<ListItem> = shown
            .iter()
            .map(|record| {
                let mut lines = row_lines(record, row_width);
                lines.push(Line::default()); // spacing between rows
                heights.push(lines.len() as u16);
                ListItem::new(Text::from(lines))
            })
            .collect();

        self.state.selected = self.state.selected.min(shown.len().saturating_sub(1));
        self.state.list_state.select(Some(self.state.selected));

        let list = List::new(items)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

        // Record where each visible row landed
        let bottom = list_area.bottom();
        let mut y = list_area.y;
        for (index, height) in heights.iter().enumerate().skip(self.state.list_state.offset()) {
            if y >= bottom {
                break;
            }
            let visible = (*height).min(bottom - y);
            self.state
                .row_areas
                .push((Rect::new(list_area.x, y, list_area.width, visible), index));
            y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endpoint::EndpointKey;
    use crate::core::filter::classify;
    use crate::test_support::sample_records;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(view: &ListView, term: &str, state: &mut RecordListState, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                RecordList::new(view, "Blog Posts", term, "⠋", state).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_view() {
        let mut state = RecordListState::new();
        let text = render(&ListView::Loading, "", &mut state, 10);
        assert!(text.contains("Loading items..."));
        assert!(state.row_areas.is_empty());
    }

    #[test]
    fn test_empty_view_uses_label() {
        let mut state = RecordListState::new();
        let text = render(&ListView::Empty, "", &mut state, 10);
        assert!(text.contains("No blog posts found"));
    }

    #[test]
    fn test_no_matches_view_quotes_term() {
        let mut state = RecordListState::new();
        let text = render(&ListView::NoMatches, "xyz", &mut state, 10);
        assert!(text.contains("No items match your search: \"xyz\""));
        assert!(!text.contains("No blog posts found"));
    }

    #[test]
    fn test_items_view_shows_count_header() {
        let records = sample_records(EndpointKey::Posts);
        let view = classify(Some(records.as_slice()), false, "esse");
        let mut state = RecordListState::new();
        let text = render(&view, "esse", &mut state, 30);
        assert!(text.contains("Showing 1 of 3 items"));
        assert!(text.contains("qui est esse"));
        assert!(!text.contains("ea molestias quasi"));
    }

    #[test]
    fn test_items_view_matches_title_or_body() {
        // "qui" is in post 2's title and post 1's body ("quia et suscipit")
        let records = sample_records(EndpointKey::Posts);
        let view = classify(Some(records.as_slice()), false, "qui");
        let mut state = RecordListState::new();
        let text = render(&view, "qui", &mut state, 30);
        assert!(text.contains("Showing 2 of 3 items"));
        assert!(text.contains("sunt aut facere"));
        assert!(text.contains("qui est esse"));
        assert!(!text.contains("ea molestias quasi"));
    }

    #[test]
    fn test_row_areas_map_clicks_to_records() {
        let records = sample_records(EndpointKey::Albums);
        let view = classify(Some(records.as_slice()), false, "");
        let mut state = RecordListState::new();
        render(&view, "", &mut state, 20);

        // Header on row 0, each album row is 1 line + 1 spacer
        assert_eq!(state.row_areas.len(), 3);
        assert_eq!(state.hit_test(5, 1), Some(0));
        assert_eq!(state.hit_test(5, 3), Some(1));
        assert_eq!(state.hit_test(5, 6), Some(2));
        assert_eq!(state.hit_test(5, 0), None);
        assert_eq!(state.hit_test(5, 15), None);
    }

    #[test]
    fn test_selection_is_clamped_to_shown_rows() {
        let records = sample_records(EndpointKey::Todos);
        let view = classify(Some(records.as_slice()), false, "");
        let mut state = RecordListState::new();
        state.selected = 42;
        render(&view, "", &mut state, 20);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_reset_forgets_drawn_rows() {
        let records = sample_records(EndpointKey::Albums);
        let view = classify(Some(records.as_slice()), false, "");
        let mut state = RecordListState::new();
        render(&view, "", &mut state, 20);
        assert_eq!(state.hit_test(5, 1), Some(0));

        state.reset();
        assert_eq!(state.hit_test(5, 1), None);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = RecordListState::new();
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);
        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last(3);
        assert_eq!(state.selected, 2);
        state.select_next(0);
        assert_eq!(state.selected, 2);
    }
}
