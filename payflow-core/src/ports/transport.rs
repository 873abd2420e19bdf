//! HTTP transport port
//!
//! The dispatcher talks to the wire through this trait. The real
//! implementation wraps reqwest; tests script responses through a mock.

use serde_json::Value as JsonValue;

use crate::domain::result::Result;
use crate::registry::Method;

/// A rendered API request, ready for the wire
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, placeholders already filled
    pub path: String,
    /// JSON body, passed through without transformation
    pub body: Option<JsonValue>,
}

/// A raw API response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: JsonValue,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait
///
/// `execute` returns `Err` only for transport-level failures (no response at
/// all); a non-2xx response comes back as `Ok` with the status preserved so
/// error normalization can read the payload.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
