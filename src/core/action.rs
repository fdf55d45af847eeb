//! # Actions
//!
//! Everything that can happen in the explorer becomes an `Action`.
//! User switches tabs? That's `Action::SelectTab(key)`.
//! A fetch completes? That's `Action::FetchSucceeded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the event loop
//! should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::core::endpoint::EndpointKey;
use crate::core::record::Record;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start fetching one endpoint (startup or retry).
    Fetch(EndpointKey),
    /// Re-fetch the active endpoint after a failure.
    Retry,
    FetchSucceeded {
        key: EndpointKey,
        records: Vec<Record>,
    },
    FetchFailed {
        key: EndpointKey,
        message: String,
    },
    SelectTab(EndpointKey),
    NextTab,
    PrevTab,
    /// Full current value of the search input.
    SearchChanged(String),
    OpenDetail(Record),
    CloseDetail,
    Quit,
}

/// I/O requested by `update()`, carried out by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch(EndpointKey),
    Quit,
}

/// Actions issued at startup: one fetch per endpoint.
pub fn startup_actions(app: &App) -> Vec<Action> {
    app.endpoints.iter().map(|d| Action::Fetch(d.key)).collect()
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let effect = match action {
        Action::Fetch(key) => begin_fetch(app, key),
        Action::Retry => {
            let key = app.active_tab;
            match app.endpoint_state(key) {
                Some(state) if state.error.is_some() && !state.loading => {
                    info!("Retrying {}", key);
                    begin_fetch(app, key)
                }
                _ => {
                    debug!("Ignoring retry for {}: no error to recover from", key);
                    Effect::None
                }
            }
        }
        Action::FetchSucceeded { key, records } => {
            match app.endpoint_state_mut(key) {
                Some(state) => {
                    info!("Fetched {} records for {}", records.len(), key);
                    state.items = Some(records);
                    state.error = None;
                    state.loading = false;
                    state.fetched_at = Some(Local::now());
                }
                None => warn!("Fetch result for unknown endpoint {}", key),
            }
            Effect::None
        }
        Action::FetchFailed { key, message } => {
            match app.endpoint_state_mut(key) {
                Some(state) => {
                    warn!("Fetch failed for {}: {}", key, message);
                    state.error = Some(message);
                    state.loading = false;
                }
                None => warn!("Fetch error for unknown endpoint {}", key),
            }
            Effect::None
        }
        Action::SelectTab(key) => {
            if app.descriptor(key).is_some() && app.active_tab != key {
                debug!("Switching tab {} -> {}", app.active_tab, key);
                app.active_tab = key;
            }
            Effect::None
        }
        Action::NextTab => {
            let next = app.active_tab.next();
            update(app, Action::SelectTab(next))
        }
        Action::PrevTab => {
            let prev = app.active_tab.prev();
            update(app, Action::SelectTab(prev))
        }
        Action::SearchChanged(term) => {
            app.search_term = term;
            Effect::None
        }
        Action::OpenDetail(record) => {
            app.selected = Some(record);
            Effect::None
        }
        Action::CloseDetail => {
            app.selected = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    };
    app.refresh_status();
    effect
}

fn begin_fetch(app: &mut App, key: EndpointKey) -> Effect {
    match app.endpoint_state_mut(key) {
        Some(state) => {
            state.loading = true;
            state.error = None;
            Effect::SpawnFetch(key)
        }
        None => {
            warn!("Cannot fetch unknown endpoint {}", key);
            Effect::None
        }
    }
}
