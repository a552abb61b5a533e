// SPDX-License-Identifier: Apache-2.0

use crate::token::{TokenStore, AUTH_TOKEN_KEY};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use trove_model::{Item, ItemPage, StatsSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientError {
    /// The server answered with an error envelope (or a bare error status).
    Api(String),
    /// The request never produced a usable response.
    Network(String),
    /// The request was cancelled before completing. Callers treat this as
    /// silence, not failure.
    Aborted,
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(message) => f.write_str(message),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Aborted => f.write_str("request aborted"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Per-request knobs. Token attachment is opt-in: `secure: true` sends the
/// stored bearer token, the default sends none. `cancel` aborts the request
/// when the token fires.
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
    pub secure: bool,
    pub cancel: Option<CancellationToken>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            params: Vec::new(),
            body: None,
            secure: false,
            cancel: None,
        }
    }
}

/// Thin JSON client for the catalog API. Errors are normalized to a single
/// message string regardless of how the server phrased them.
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            http: reqwest::Client::new(),
            tokens,
        }
    }

    /// Base URL from `TROVE_API_BASE`, falling back to the local server's
    /// default bind.
    #[must_use]
    pub fn from_env(tokens: Arc<dyn TokenStore>) -> Self {
        let base = std::env::var("TROVE_API_BASE")
            .unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());
        Self::new(base, tokens)
    }

    pub async fn request(&self, path: &str, opts: RequestOptions) -> Result<Value, ClientError> {
        let cancel = opts.cancel.clone();
        let exchange = self.exchange(path, opts);
        match cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(ClientError::Aborted),
                result = exchange => result,
            },
            None => exchange.await,
        }
    }

    async fn exchange(&self, path: &str, opts: RequestOptions) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base, path);
        let mut headers = opts.headers;
        headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        if opts.secure {
            if let Some(token) = self.tokens.get(AUTH_TOKEN_KEY) {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                    headers.insert(AUTHORIZATION, value);
                }
            }
        }

        let mut builder = self.http.request(opts.method.clone(), &url).headers(headers);
        if !opts.params.is_empty() {
            builder = builder.query(&opts.params);
        }
        if opts.method != Method::GET {
            if let Some(body) = &opts.body {
                builder = builder.json(body);
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(Value::Null);
            }
            return response
                .json()
                .await
                .map_err(|e| ClientError::Network(e.to_string()));
        }
        Err(ClientError::Api(normalize_error(status, response).await))
    }

    pub async fn get_items(
        &self,
        page: u32,
        limit: u32,
        query: &str,
        cancel: Option<CancellationToken>,
    ) -> Result<ItemPage, ClientError> {
        let mut params = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        if !query.is_empty() {
            params.push(("q".to_string(), query.to_string()));
        }
        let value = self
            .request(
                "/api/items",
                RequestOptions {
                    params,
                    cancel,
                    ..RequestOptions::default()
                },
            )
            .await?;
        decode(value)
    }

    pub async fn get_item(&self, id: u64) -> Result<Item, ClientError> {
        let value = self
            .request(&format!("/api/items/{id}"), RequestOptions::default())
            .await?;
        decode(value)
    }

    pub async fn create_item(&self, body: Value) -> Result<Item, ClientError> {
        let value = self
            .request(
                "/api/items",
                RequestOptions {
                    method: Method::POST,
                    body: Some(body),
                    ..RequestOptions::default()
                },
            )
            .await?;
        decode(value)
    }

    pub async fn get_stats(&self) -> Result<StatsSnapshot, ClientError> {
        let value = self.request("/api/stats", RequestOptions::default()).await?;
        decode(value)
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Network(format!("bad payload: {e}")))
}

/// Pulls the message out of the `{"error":{"message",...}}` envelope, with a
/// generic fallback for responses that carry anything else.
async fn normalize_error(status: StatusCode, response: reqwest::Response) -> String {
    let fallback = format!("Server error: {}", status.as_u16());
    let payload: Value = match response.json().await {
        Ok(value) => value,
        Err(_) => return fallback,
    };
    payload["error"]["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or(fallback)
}
