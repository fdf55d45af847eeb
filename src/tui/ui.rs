use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    DetailModal, ErrorBanner, RecordList, SearchBar, StatEntry, StatsFooter, TabBar, TabInfo,
    TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Braille spinner shown while the active endpoint is loading.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub tabs: Rect,
    pub search: Rect,
    /// Only present when the active endpoint has an error.
    pub banner: Option<Rect>,
    pub list: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect, has_error: bool) -> ScreenLayout {
    use Constraint::{Length, Min};
    let banner_height = if has_error { 3 } else { 0 };
    let [title, tabs, search, banner, list, footer] = Layout::vertical([
        Length(1),
        Length(1),
        Length(3),
        Length(banner_height),
        Min(0),
        Length(3),
    ])
    .areas(area);
    ScreenLayout {
        title,
        tabs,
        search,
        banner: has_error.then_some(banner),
        list,
        footer,
    }
}

fn tab_infos(app: &App) -> Vec<TabInfo> {
    app.endpoints
        .iter()
        .map(|d| TabInfo {
            key: d.key,
            label: d.label,
            count: app.count(d.key),
        })
        .collect()
}

fn stat_entries(app: &App) -> Vec<StatEntry> {
    app.endpoints
        .iter()
        .map(|d| StatEntry {
            count: app.count(d.key),
            label: d.label,
            fetched_at: app.endpoint_state(d.key).and_then(|s| s.fetched_at),
        })
        .collect()
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();
    let error = app.active_state().and_then(|s| s.error.as_deref());
    let layout = screen_layout(area, error.is_some());
    let label = app.active_label();

    TitleBar::new(app.base_url.clone(), app.status_message.clone()).render(frame, layout.title);

    let mut tab_bar = TabBar::new(tab_infos(app), app.active_tab);
    tui.hits.tabs = tab_bar.tab_areas(layout.tabs);
    tab_bar.render(frame, layout.tabs);

    let mut search = SearchBar::new(&app.search_term, label);
    search.show_cursor = app.selected.is_none();
    search.render(frame, layout.search);

    tui.hits.retry = None;
    if let (Some(message), Some(banner)) = (error, layout.banner) {
        ErrorBanner::new(message).render(frame, banner);
        tui.hits.retry = Some(ErrorBanner::retry_area(banner));
    }

    let view = app.active_view();
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    RecordList::new(&view, label, &app.search_term, spinner, &mut tui.record_list)
        .render(frame, layout.list);

    StatsFooter::new(stat_entries(app)).render(frame, layout.footer);

    tui.hits.frame = area;
    if let Some(record) = &app.selected {
        DetailModal::new(record, &mut tui.detail).render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::endpoint::EndpointKey;
    use crate::test_support::{sample_records, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_screen_layout_banner_only_on_error() {
        let area = Rect::new(0, 0, 80, 30);
        let plain = screen_layout(area, false);
        assert!(plain.banner.is_none());
        let errored = screen_layout(area, true);
        assert_eq!(errored.banner.map(|b| b.height), Some(3));
        assert_eq!(plain.list.height, errored.list.height + 3);
        assert_eq!(plain.footer.bottom(), 30);
    }

    #[test]
    fn test_draw_ui_startup_is_loading() {
        let mut app = test_app();
        for key in EndpointKey::ALL {
            update(&mut app, Action::Fetch(key));
        }
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Loading items..."));
        assert!(text.contains("Blog Posts (0)"));
        assert!(text.contains("Loading 4 endpoints..."));
        assert_eq!(tui.hits.tabs.len(), 4);
    }

    #[test]
    fn test_draw_ui_populated_with_counts() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FetchSucceeded {
                key: EndpointKey::Posts,
                records: sample_records(EndpointKey::Posts),
            },
        );
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Blog Posts (3)"));
        assert!(text.contains("Showing 3 of 3 items"));
        assert!(text.contains("3 Blog Posts"));
        assert!(tui.hits.retry.is_none());
    }

    #[test]
    fn test_draw_ui_error_banner_with_retry() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FetchFailed {
                key: EndpointKey::Posts,
                message: "Failed to fetch posts: 500".into(),
            },
        );
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Error: Failed to fetch posts: 500"));
        assert!(text.contains("No blog posts found"));
        assert!(tui.hits.retry.is_some());
    }

    #[test]
    fn test_draw_ui_detail_overlay() {
        let mut app = test_app();
        let record = sample_records(EndpointKey::Todos).remove(1);
        update(&mut app, Action::OpenDetail(record));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Item Details"));
        assert!(text.contains("\"completed\": true"));
    }
}
