//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (any endpoint in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize or a
//!   completed fetch.
//!
//! ## Fetching
//!
//! `update()` returns `Effect::SpawnFetch(key)`; the loop spawns one tokio
//! task per fetch. Each task sends its result back as an `Action` over a
//! channel. Tasks are never cancelled: a result arriving after the loop has
//! exited is dropped with a warning.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::backend::{DataSource, HttpDataSource};
use crate::core::action::{Action, Effect, startup_actions, update};
use crate::core::config::ResolvedConfig;
use crate::core::endpoint::{EndpointDescriptor, EndpointKey};
use crate::core::filter::ListView;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::detail_modal::classify_click;
use crate::tui::components::{DetailModalState, ModalClick, RecordListState, SearchBar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Clickable regions recorded during the last draw.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub frame: Rect,
    pub tabs: Vec<(Rect, EndpointKey)>,
    pub retry: Option<Rect>,
}

impl HitAreas {
    fn tab_at(&self, pos: Position) -> Option<EndpointKey> {
        self.tabs
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, key)| *key)
    }

    fn is_retry(&self, pos: Position) -> bool {
        self.retry.is_some_and(|r| r.contains(pos))
    }
}

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub record_list: RecordListState,
    pub detail: DetailModalState,
    pub hits: HitAreas,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Number of records currently shown for the active tab.
fn shown_len(app: &App) -> usize {
    match app.active_view() {
        ListView::Items { shown, .. } => shown.len(),
        _ => 0,
    }
}

fn open_shown(app: &App, index: usize) -> Option<Action> {
    match app.active_view() {
        ListView::Items { shown, .. } => shown
            .get(index)
            .map(|record| Action::OpenDetail((*record).clone())),
        _ => None,
    }
}

/// Translates a terminal event into a core action, applying TUI-local
/// changes (list cursor, modal scroll) directly to `tui`.
pub fn translate_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // While the detail modal is open it captures all input
    if app.selected.is_some() {
        return match event {
            TuiEvent::Escape | TuiEvent::Submit => Some(Action::CloseDetail),
            TuiEvent::MouseClick(col, row) => match classify_click(tui.hits.frame, col, row) {
                ModalClick::Close => Some(Action::CloseDetail),
                ModalClick::Inside => None,
            },
            other => {
                if !tui.detail.handle_scroll(&other) {
                    debug!("Ignoring {:?} while detail is open", other);
                }
                None
            }
        };
    }

    match event {
        TuiEvent::Retry => Some(Action::Retry),
        TuiEvent::NextTab => {
            tui.record_list.reset();
            Some(Action::NextTab)
        }
        TuiEvent::PrevTab => {
            tui.record_list.reset();
            Some(Action::PrevTab)
        }
        TuiEvent::SelectTab(key) => {
            tui.record_list.reset();
            Some(Action::SelectTab(key))
        }
        TuiEvent::InputChar(_)
        | TuiEvent::Paste(_)
        | TuiEvent::Backspace
        | TuiEvent::ClearInput => {
            let mut search = SearchBar::new(&app.search_term, app.active_label());
            let term = search.handle_event(&event)?;
            tui.record_list.reset();
            Some(Action::SearchChanged(term))
        }
        TuiEvent::Escape => {
            if app.search_term.is_empty() {
                Some(Action::Quit)
            } else {
                tui.record_list.reset();
                Some(Action::SearchChanged(String::new()))
            }
        }
        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
            tui.record_list.select_prev();
            None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
            tui.record_list.select_next(shown_len(app));
            None
        }
        TuiEvent::PageUp => {
            tui.record_list.page_up();
            None
        }
        TuiEvent::PageDown => {
            tui.record_list.page_down(shown_len(app));
            None
        }
        TuiEvent::Home => {
            tui.record_list.select_first();
            None
        }
        TuiEvent::End => {
            tui.record_list.select_last(shown_len(app));
            None
        }
        TuiEvent::Submit => open_shown(app, tui.record_list.selected),
        TuiEvent::MouseClick(col, row) => {
            let pos = Position::new(col, row);
            if let Some(key) = tui.hits.tab_at(pos) {
                tui.record_list.reset();
                return Some(Action::SelectTab(key));
            }
            if tui.hits.is_retry(pos) {
                return Some(Action::Retry);
            }
            let index = tui.record_list.hit_test(col, row)?;
            tui.record_list.selected = index;
            open_shown(app, index)
        }
        TuiEvent::ForceQuit | TuiEvent::Resize => None,
    }
}

/// Applies an action and carries out its effect. Returns true on quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    source: &Arc<dyn DataSource>,
    tx: &mpsc::Sender<Action>,
    action: Action,
) -> bool {
    if matches!(action, Action::OpenDetail(_)) {
        tui.detail = DetailModalState::new();
    }
    match update(app, action) {
        Effect::Quit => return true,
        Effect::SpawnFetch(key) => match app.descriptor(key) {
            Some(descriptor) => spawn_fetch(source.clone(), descriptor.clone(), tx.clone()),
            None => warn!("No descriptor for {}", key),
        },
        Effect::None => {}
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::new());
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    info!("Fetching {} endpoints from {}", app.endpoints.len(), app.base_url);
    for action in startup_actions(&app) {
        dispatch(&mut app, &mut tui, &source, &tx, action);
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = translate_event(&app, &mut tui, event)
                && dispatch(&mut app, &mut tui, &source, &tx, action)
            {
                break 'main;
            }
        }

        // Handle fetch completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, &source, &tx, action) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    info!("API Explorer shutting down");
    Ok(())
}

/// Fetches one endpoint in the background and reports back over `tx`.
fn spawn_fetch(source: Arc<dyn DataSource>, descriptor: EndpointDescriptor, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning fetch: {} via {} ({})",
        descriptor.key,
        source.name(),
        descriptor.url
    );
    tokio::spawn(async move {
        let started = Instant::now();
        let key = descriptor.key;
        let action = match source.fetch(&descriptor).await {
            Ok(records) => Action::FetchSucceeded { key, records },
            Err(e) => Action::FetchFailed {
                key,
                message: e.to_string(),
            },
        };
        debug!("{} finished in {}ms", key, started.elapsed().as_millis());
        if tx.send(action).is_err() {
            warn!("Dropping {} result: receiver dropped", key);
        }
    });
}
