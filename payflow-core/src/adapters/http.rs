//! HTTP transport over reqwest
//!
//! Blocking JSON client for the wallet API. Transport-level failures map to
//! the fixed connectivity messages; non-2xx responses are returned intact so
//! the dispatcher can normalize the payload.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::normalize::{MSG_NETWORK, MSG_TIMEOUT};
use crate::ports::{ApiRequest, ApiResponse, Transport};
use crate::registry::Method;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport backed by a blocking reqwest client
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    auth_token: Mutex<Option<String>>,
}

impl HttpTransport {
    /// Create a transport for the given API base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a transport with an explicit request timeout
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|_| Error::config(format!("Invalid API base URL: {}", base_url)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::config(
                "API base URL must use http or https".to_string(),
            ));
        }
        if parsed.host_str().is_none() {
            return Err(Error::config("API base URL must include a host".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: Mutex::new(None),
        })
    }

    /// Set or clear the bearer token sent with every request
    pub fn set_auth_token(&self, token: Option<String>) {
        *self
            .auth_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn current_token(&self) -> Option<String> {
        self.auth_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Map reqwest errors to the fixed connectivity messages
    fn map_request_error(error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::transport(MSG_TIMEOUT)
        } else if error.is_connect() {
            Error::transport(MSG_NETWORK)
        } else {
            Error::transport(format!("Request failed: {}", error))
        }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if let Some(token) = self.current_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(Self::map_request_error)?;
        let status = response.status().as_u16();

        // Non-JSON bodies (empty 204s, HTML error pages) become Null rather
        // than a parse failure
        let text = response
            .text()
            .map_err(|e| Error::transport(format!("Failed to read response: {}", e)))?;
        let body: JsonValue = serde_json::from_str(&text).unwrap_or(JsonValue::Null);

        Ok(ApiResponse { status, body })
    }
}
