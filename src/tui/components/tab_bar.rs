//! # TabBar Component
//!
//! One tab per endpoint, labelled `<label> (<count>)`. Stateless: the active
//! tab comes from `App`, and clicks are resolved against the areas computed
//! by [`TabBar::tab_areas`].

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::endpoint::EndpointKey;
use crate::tui::component::Component;

const SEPARATOR: &str = "│";

#[derive(Debug, Clone, PartialEq)]
pub struct TabInfo {
    pub key: EndpointKey,
    pub label: &'static str,
    pub count: usize,
}

impl TabInfo {
    fn title(&self) -> String {
        format!(" {} ({}) ", self.label, self.count)
    }
}

pub struct TabBar {
    pub tabs: Vec<TabInfo>,
    pub active: EndpointKey,
}

impl TabBar {
    pub fn new(tabs: Vec<TabInfo>, active: EndpointKey) -> Self {
        Self { tabs, active }
    }

    /// Screen area of each tab title within `area`, clipped to its width.
    pub fn tab_areas(&self, area: Rect) -> Vec<(Rect, EndpointKey)> {
        let mut areas = Vec::with_capacity(self.tabs.len());
        let mut x = area.x;
        let right = area.x.saturating_add(area.width);
        for tab in &self.tabs {
            if x >= right {
                break;
            }
            let width = (tab.title().width() as u16).min(right - x);
            areas.push((Rect::new(x, area.y, width, 1), tab.key));
            x = x.saturating_add(width + SEPARATOR.width() as u16);
        }
        areas
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (i, tab) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let style = if tab.key == self.active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(tab.title(), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
