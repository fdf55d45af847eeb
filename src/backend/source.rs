use std::fmt;

use async_trait::async_trait;

use crate::core::endpoint::{EndpointDescriptor, EndpointKey};
use crate::core::record::Record;

/// Errors that can occur while fetching an endpoint.
/// All of them end up as a single message string on the endpoint's state.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status { endpoint: EndpointKey, status: u16 },
    /// The body was not valid JSON.
    Parse(String),
    /// The body was JSON but not a list of records.
    Shape { endpoint: EndpointKey, found: &'static str },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { endpoint, status } => {
                write!(f, "Failed to fetch {endpoint}: {status}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::Shape { endpoint, found } => {
                write!(f, "unexpected response for {endpoint}: expected a list, got {found}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the name of the data source.
    fn name(&self) -> &str;

    /// Fetches one endpoint, already unwrapped and truncated to its limit.
    async fn fetch(&self, endpoint: &EndpointDescriptor) -> Result<Vec<Record>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_banner_text() {
        let err = FetchError::Status {
            endpoint: EndpointKey::Posts,
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to fetch posts: 500");
    }

    #[test]
    fn test_shape_message_names_endpoint() {
        let err = FetchError::Shape {
            endpoint: EndpointKey::Todos,
            found: "an object",
        };
        assert_eq!(
            err.to_string(),
            "unexpected response for todos: expected a list, got an object"
        );
    }
}
