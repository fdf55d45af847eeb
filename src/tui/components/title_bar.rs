//! # TitleBar Component
//!
//! Top status line showing the backend base URL and fetch status.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"API Explorer (backend: http://...) | Loading 2 endpoints..."`
//! 2. **Default**: `"API Explorer (backend: http://...)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `base_url`: Backend the endpoints are fetched from
/// - `status_message`: Aggregate fetch status (e.g. "Ready", "1 endpoint failed")
pub struct TitleBar {
    pub base_url: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(base_url: String, status_message: String) -> Self {
        Self {
            base_url,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "API Explorer",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" (backend: {})", self.base_url),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.clone()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
