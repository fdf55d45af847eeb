//! # ErrorBanner Component
//!
//! Inline error for the active endpoint with a manual retry control.
//! Retry is triggered with Ctrl+R or by clicking the `[ Retry ]` label,
//! whose position comes from [`ErrorBanner::retry_area`].

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

const RETRY_LABEL: &str = "[ Retry ]";

pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Where the retry control is drawn: right-aligned on the inner line.
    pub fn retry_area(area: Rect) -> Rect {
        let inner = Block::bordered().inner(area);
        let width = (RETRY_LABEL.len() as u16).min(inner.width);
        Rect::new(inner.right().saturating_sub(width), inner.y, width, inner.height.min(1))
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red);
        let block = Block::bordered().border_style(style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let retry = Self::retry_area(area);
        let message_area = Rect {
            width: inner.width.saturating_sub(retry.width + 1),
            ..inner
        };

        let message = Paragraph::new(Line::from(vec![
            Span::styled("Error: ", style.add_modifier(Modifier::BOLD)),
            Span::styled(self.message, style),
        ]));
        frame.render_widget(message, message_area);

        let button = Span::styled(
            RETRY_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(button, retry);
    }
}
