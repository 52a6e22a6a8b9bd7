//! HTTP client for the hosted REST query API.

use super::{Backend, BackendError, ClientOptions, Query};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const REST_PATH: &str = "rest/v1";
const OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// Error body returned by the REST layer on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Remote service client backed by reqwest.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    api_key: String,
    schema: String,
    options: ClientOptions,
}

impl RestClient {
    /// Create a client for `base_url` (without the `/rest/v1` suffix).
    pub fn new(base_url: String, api_key: String, schema: String, options: ClientOptions) -> Self {
        Self::with_http_client(Client::new(), base_url, api_key, schema, options)
    }

    /// Create a client reusing an existing reqwest client (timeouts, proxies).
    pub fn with_http_client(
        client: Client,
        base_url: String,
        api_key: String,
        schema: String,
        options: ClientOptions,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            schema,
            options,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn options(&self) -> ClientOptions {
        self.options
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    fn get(&self, query: &Query) -> RequestBuilder {
        self.client
            .get(self.table_url(query.table()))
            .query(&query.to_params())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept-Profile", &self.schema)
    }

    async fn send(request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Status alone still makes a usable error if the body can't be read.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read error body for status {}: {}", status, e);
                String::new()
            }
        };
        let parsed = serde_json::from_str::<ErrorBody>(&body).ok();
        let message = match parsed {
            Some(ErrorBody {
                message: Some(message),
                code: Some(code),
            }) => format!("{} ({})", message, code),
            Some(ErrorBody {
                message: Some(message),
                code: None,
            }) => message,
            _ if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string(),
            _ => body,
        };

        Err(BackendError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Backend for RestClient {
    async fn fetch(&self, query: &Query) -> Result<Vec<Value>, BackendError> {
        if query.is_single() {
            return self.fetch_single(query).await.map(|row| vec![row]);
        }

        debug!("Fetching rows: table={}, params={:?}", query.table(), query.to_params());

        let response = Self::send(self.get(query).header("Accept", "application/json")).await?;
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn fetch_single(&self, query: &Query) -> Result<Value, BackendError> {
        debug!(
            "Fetching single row: table={}, params={:?}",
            query.table(),
            query.to_params()
        );

        let response = Self::send(self.get(query).header("Accept", OBJECT_MEDIA_TYPE)).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn insert_single(&self, table: &str, row: Value) -> Result<Value, BackendError> {
        debug!("Inserting row: table={}", table);

        let request = self
            .client
            .post(self.table_url(table))
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Content-Profile", &self.schema)
            .header("Prefer", "return=representation")
            .header("Accept", OBJECT_MEDIA_TYPE)
            .json(&row);

        let response = Self::send(request).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}
