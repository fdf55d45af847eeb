//! # StatsFooter Component
//!
//! Bottom panel with one entry per endpoint: record count, label and the
//! time of the last successful fetch.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

#[derive(Debug, Clone)]
pub struct StatEntry {
    pub count: usize,
    pub label: &'static str,
    pub fetched_at: Option<DateTime<Local>>,
}

pub struct StatsFooter {
    pub entries: Vec<StatEntry>,
}

impl StatsFooter {
    pub fn new(entries: Vec<StatEntry>) -> Self {
        Self { entries }
    }
}

impl Component for StatsFooter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Data Statistics ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.entries.is_empty() {
            return;
        }

        let columns = Layout::horizontal(self.entries.iter().map(|_| Constraint::Fill(1)))
            .split(inner);

        for (entry, column) in self.entries.iter().zip(columns.iter()) {
            let mut spans = vec![
                Span::styled(
                    entry.count.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(entry.label),
            ];
            if let Some(at) = entry.fetched_at {
                spans.push(Span::styled(
                    format!(" @ {}", at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
            frame.render_widget(paragraph, *column);
        }
    }
}
