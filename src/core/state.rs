//! # Application State
//!
//! Core business state for the explorer. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── base_url: String                 // shown in the title bar
//! ├── endpoints: Vec<EndpointDescriptor> // fixed set of four, display order
//! ├── states: HashMap<EndpointKey, EndpointState>
//! ├── active_tab: EndpointKey          // exactly one at a time
//! ├── search_term: String              // shared across tabs
//! ├── selected: Option<Record>         // detail modal content
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Every fetch-related change is scoped to one endpoint key.

use chrono::{DateTime, Local};
use std::collections::HashMap;

use crate::core::config::ResolvedConfig;
use crate::core::endpoint::{EndpointDescriptor, EndpointKey, build_endpoints};
use crate::core::filter::{ListView, classify};
use crate::core::record::Record;

/// Fetch lifecycle state for one endpoint. Lives for the whole session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointState {
    /// `None` until the first successful fetch.
    pub items: Option<Vec<Record>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Local time of the last successful fetch.
    pub fetched_at: Option<DateTime<Local>>,
}

impl EndpointState {
    /// Number of stored records, 0 when nothing has loaded.
    pub fn count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }
}

pub struct App {
    pub base_url: String,
    pub endpoints: Vec<EndpointDescriptor>,
    pub states: HashMap<EndpointKey, EndpointState>,
    pub active_tab: EndpointKey,
    pub search_term: String,
    pub selected: Option<Record>,
    pub status_message: String,
}

impl App {
    pub fn new(base_url: String, endpoints: Vec<EndpointDescriptor>, active_tab: EndpointKey) -> Self {
        let states = endpoints
            .iter()
            .map(|d| (d.key, EndpointState::default()))
            .collect();
        Self {
            base_url,
            endpoints,
            states,
            active_tab,
            search_term: String::new(),
            selected: None,
            status_message: String::from("Welcome to API Explorer!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let endpoints = build_endpoints(&config.base_url, |key| config.limit_for(key));
        Self::new(config.base_url.clone(), endpoints, config.default_tab)
    }

    pub fn descriptor(&self, key: EndpointKey) -> Option<&EndpointDescriptor> {
        self.endpoints.iter().find(|d| d.key == key)
    }

    pub fn endpoint_state(&self, key: EndpointKey) -> Option<&EndpointState> {
        self.states.get(&key)
    }

    pub fn endpoint_state_mut(&mut self, key: EndpointKey) -> Option<&mut EndpointState> {
        self.states.get_mut(&key)
    }

    pub fn active_state(&self) -> Option<&EndpointState> {
        self.endpoint_state(self.active_tab)
    }

    pub fn active_label(&self) -> &'static str {
        self.descriptor(self.active_tab)
            .map_or(self.active_tab.label(), |d| d.label)
    }

    pub fn count(&self, key: EndpointKey) -> usize {
        self.endpoint_state(key).map_or(0, EndpointState::count)
    }

    /// What the list area shows for the active tab.
    pub fn active_view(&self) -> ListView<'_> {
        match self.active_state() {
            Some(state) => classify(state.items.as_deref(), state.loading, &self.search_term),
            None => ListView::Empty,
        }
    }

    pub fn loading_count(&self) -> usize {
        self.states.values().filter(|s| s.loading).count()
    }

    pub fn is_loading(&self) -> bool {
        self.loading_count() > 0
    }

    /// Recomputes the title bar status from the fetch states.
    pub fn refresh_status(&mut self) {
        let loading = self.loading_count();
        let failed = self.states.values().filter(|s| s.error.is_some()).count();
        self.status_message = match (loading, failed) {
            (0, 0) => String::from("Ready"),
            (0, 1) => String::from("1 endpoint failed"),
            (0, n) => format!("{n} endpoints failed"),
            (1, _) => String::from("Loading 1 endpoint..."),
            (n, _) => format!("Loading {n} endpoints..."),
        };
    }
}
