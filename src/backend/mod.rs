//! # Backend
//!
//! Fetches endpoint data. The event loop only sees the `DataSource` trait;
//! `HttpDataSource` is the reqwest-backed implementation used at runtime.

pub mod http;
pub mod payload;
pub mod source;

pub use http::HttpDataSource;
pub use payload::extract_records;
pub use source::{DataSource, FetchError};
