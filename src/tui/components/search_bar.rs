//! # SearchBar Component
//!
//! Single-line text input for the list filter.
//!
//! The bar owns no text of its own: the term lives in `App` and is passed in
//! as a prop. Every keystroke produces the full new value, which the caller
//! forwards as `Action::SearchChanged`. There is no debouncing.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct SearchBar<'a> {
    /// Current search term (Prop)
    pub term: &'a str,
    pub placeholder: String,
    /// Draw the terminal cursor at the end of the term.
    pub show_cursor: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a str, label: &str) -> Self {
        Self {
            term,
            placeholder: format!("Search {}...", label.to_lowercase()),
            show_cursor: true,
        }
    }
}

impl EventHandler for SearchBar<'_> {
    /// The full new value of the input.
    type Event = String;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<String> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut next = self.term.to_string();
                next.push(*c);
                Some(next)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines become spaces
                let cleaned: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                Some(format!("{}{}", self.term, cleaned))
            }
            TuiEvent::Backspace => {
                if self.term.is_empty() {
                    return None;
                }
                let mut next = self.term.to_string();
                next.pop();
                Some(next)
            }
            TuiEvent::ClearInput if !self.term.is_empty() => Some(String::new()),
            _ => None,
        }
    }
}

impl Component for SearchBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let line = if self.term.is_empty() {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.term)
        };

        // Keep the end of a long term visible
        let text_width = self.term.width() as u16;
        let scroll = text_width.saturating_sub(inner.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(line).scroll((0, scroll)).block(block), area);

        if self.show_cursor && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (text_width - scroll).min(inner.width - 1);
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
