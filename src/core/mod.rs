//! # Core Application Logic
//!
//! This module contains the explorer's business logic.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Backend   │
//!          │  Adapter   │                │  (HTTP)    │
//!          │ (ratatui)  │                │ (reqwest)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`endpoint`]: The four fixed endpoint descriptors
//! - [`record`]: The `Record` sum type
//! - [`filter`]: Search matching and list view selection
//! - [`config`]: Config file + env + CLI resolution

pub mod action;
pub mod config;
pub mod endpoint;
pub mod filter;
pub mod record;
pub mod state;
