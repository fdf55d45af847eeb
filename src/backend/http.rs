//! HTTP data source backed by reqwest.
//!
//! One plain GET per endpoint. No timeout is configured: a stalled request
//! keeps the endpoint loading until the connection fails.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::backend::{DataSource, FetchError, extract_records};
use crate::core::endpoint::EndpointDescriptor;
use crate::core::record::Record;

pub struct HttpDataSource {
    client: reqwest::Client,
}

impl Default for HttpDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpDataSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, endpoint: &EndpointDescriptor) -> Result<Vec<Record>, FetchError> {
        info!("GET {} (limit={})", endpoint.url, endpoint.limit);

        let response = self
            .client
            .get(&endpoint.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} response status: {}", endpoint.key, status);

        if !status.is_success() {
            warn!("{} returned HTTP {}", endpoint.url, status.as_u16());
            return Err(FetchError::Status {
                endpoint: endpoint.key,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

        let records = extract_records(endpoint, body)?;
        debug!("{}: {} records after limit", endpoint.key, records.len());
        Ok(records)
    }
}
