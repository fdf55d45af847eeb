//! # Endpoints
//!
//! The four fixed data sources the explorer knows about. Descriptors are
//! built once at startup from the resolved base URL and never change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the four endpoints. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKey {
    #[default]
    Posts,
    Users,
    Albums,
    Todos,
}

impl EndpointKey {
    pub const ALL: [EndpointKey; 4] = [
        EndpointKey::Posts,
        EndpointKey::Users,
        EndpointKey::Albums,
        EndpointKey::Todos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EndpointKey::Posts => "posts",
            EndpointKey::Users => "users",
            EndpointKey::Albums => "albums",
            EndpointKey::Todos => "todos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EndpointKey::Posts => "Blog Posts",
            EndpointKey::Users => "Users",
            EndpointKey::Albums => "Photo Albums",
            EndpointKey::Todos => "Todo Items",
        }
    }

    pub fn default_limit(self) -> usize {
        match self {
            EndpointKey::Posts => 15,
            EndpointKey::Users => 10,
            EndpointKey::Albums => 20,
            EndpointKey::Todos => 25,
        }
    }

    /// Position in the tab strip.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub key: EndpointKey,
    pub url: String,
    pub label: &'static str,
    /// Maximum number of records kept from a response.
    pub limit: usize,
}

impl EndpointDescriptor {
    pub fn new(key: EndpointKey, base_url: &str, limit: usize) -> Self {
        Self {
            key,
            url: format!("{}/{}", base_url.trim_end_matches('/'), key.as_str()),
            label: key.label(),
            limit,
        }
    }
}

/// Builds the fixed descriptor set, in display order.
///
/// `limit_for` supplies the per-endpoint slice limit (usually from config).
pub fn build_endpoints(
    base_url: &str,
    limit_for: impl Fn(EndpointKey) -> usize,
) -> Vec<EndpointDescriptor> {
    EndpointKey::ALL
        .into_iter()
        .map(|key| EndpointDescriptor::new(key, base_url, limit_for(key)))
        .collect()
}
