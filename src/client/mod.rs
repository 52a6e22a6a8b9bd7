//! Backend abstraction over the hosted REST query API, plus the two client
//! configurations the rest of the crate uses.

use crate::config::Config;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub mod mock;
pub mod query;
pub mod rest;

pub use mock::MockBackend;
pub use query::{Filter, Order, Query};
pub use rest::RestClient;

/// Row-level access to the remote tables.
///
/// Implementations do not retry; each call is one request whose outcome is
/// either the rows or an error.
#[async_trait]
pub trait Backend: Send + Sync + fmt::Debug {
    /// Run a query and return every matching row.
    async fn fetch(&self, query: &Query) -> Result<Vec<Value>, BackendError>;

    /// Run a query that must match exactly one row.
    ///
    /// # Errors
    /// Returns `BackendError::NotSingle` (or the remote equivalent) when zero
    /// or several rows match.
    async fn fetch_single(&self, query: &Query) -> Result<Value, BackendError>;

    /// Insert one row into `table` and return the stored representation.
    async fn insert_single(&self, table: &str, row: Value) -> Result<Value, BackendError>;
}

/// Error type for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Connection failure, timeout, DNS failure.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success status from the remote service.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    /// Response body was not the expected JSON shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// A single-row query matched some other number of rows.
    #[error("Expected exactly one row, got {0}")]
    NotSingle(usize),
    #[error("Error: {0}")]
    Other(String),
}

/// Which side of the application a client is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientScope {
    Browser,
    Server,
}

/// Session options carried by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub scope: ClientScope,
    pub auto_refresh_token: bool,
    pub persist_session: bool,
}

impl ClientOptions {
    pub fn browser() -> Self {
        Self {
            scope: ClientScope::Browser,
            auto_refresh_token: true,
            persist_session: true,
        }
    }

    pub fn server() -> Self {
        Self {
            scope: ClientScope::Server,
            auto_refresh_token: false,
            persist_session: false,
        }
    }
}

/// Client for browser-side use: anonymous key, session persistence on.
pub fn browser_client(config: &Config) -> RestClient {
    RestClient::new(
        config.url.clone(),
        config.anon_key.clone(),
        config.schema.clone(),
        ClientOptions::browser(),
    )
}

/// Client for server-side use: service-role key when configured, otherwise
/// the anonymous key. No token refresh, no session persistence.
pub fn server_client(config: &Config) -> RestClient {
    let key = config
        .service_role_key
        .clone()
        .unwrap_or_else(|| config.anon_key.clone());

    RestClient::new(
        config.url.clone(),
        key,
        config.schema.clone(),
        ClientOptions::server(),
    )
}
