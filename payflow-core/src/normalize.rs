//! Error normalization
//!
//! One pure function from the library error type to a stable, displayable
//! `{ error_message }`. Whatever went wrong on the wire, the user sees a
//! single message string; the taxonomy never leaks into the UI.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::result::Error;

/// Message shown when the server could not be reached at all
pub const MSG_NETWORK: &str = "Unable to reach the server. Please check your connection.";
/// Message shown when the request timed out
pub const MSG_TIMEOUT: &str = "The request timed out. Please try again.";
/// Fallback when a failed response carries no usable payload
pub const MSG_FALLBACK: &str = "Something went wrong. Please try again.";

/// A normalized, user-facing error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedError {
    pub error_message: String,
}

impl NormalizedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

/// Pull a display message out of a structured error payload
///
/// Servers disagree on the field name; check the usual suspects in order,
/// including the nested `{ "error": { "message": ... } }` shape.
pub fn extract_message(body: &JsonValue) -> Option<String> {
    let map = body.as_object()?;

    for key in ["message", "errorMessage", "error"] {
        match map.get(key) {
            Some(JsonValue::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(JsonValue::Object(inner)) => {
                if let Some(JsonValue::String(s)) = inner.get("message") {
                    if !s.is_empty() {
                        return Some(s.clone());
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Normalize a raw error into a stable user-facing message
///
/// Total over the error type and never empty: every variant maps to a
/// non-empty message, falling back to a generic template.
pub fn parse_error(error: &Error) -> NormalizedError {
    let message = match error {
        Error::Transport(msg) if !msg.is_empty() => msg.clone(),
        Error::Transport(_) => MSG_NETWORK.to_string(),
        Error::Api { message, .. } if !message.is_empty() => message.clone(),
        Error::Api { status, .. } => format!("Request failed (HTTP {})", status),
        Error::Validation(msg) if !msg.is_empty() => msg.clone(),
        _ => MSG_FALLBACK.to_string(),
    };

    NormalizedError::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_passes_through() {
        let err = Error::transport(MSG_TIMEOUT);
        assert_eq!(parse_error(&err).error_message, MSG_TIMEOUT);
    }

    #[test]
    fn test_empty_transport_error_gets_network_template() {
        let err = Error::transport("");
        assert_eq!(parse_error(&err).error_message, MSG_NETWORK);
    }

    #[test]
    fn test_api_error_uses_payload_message() {
        let err = Error::api(400, "insufficient funds");
        assert_eq!(parse_error(&err).error_message, "insufficient funds");
    }

    #[test]
    fn test_api_error_without_message_uses_status() {
        let err = Error::api(502, "");
        assert_eq!(parse_error(&err).error_message, "Request failed (HTTP 502)");
    }

    #[test]
    fn test_message_is_never_empty() {
        let errors = [
            Error::transport(""),
            Error::api(500, ""),
            Error::Validation(String::new()),
            Error::Other(String::new()),
        ];
        for err in &errors {
            assert!(!parse_error(err).error_message.is_empty());
        }
    }

    #[test]
    fn test_extract_message_field_priority() {
        let body = serde_json::json!({"message": "from message", "error": "from error"});
        assert_eq!(extract_message(&body).as_deref(), Some("from message"));

        let body = serde_json::json!({"error": "from error"});
        assert_eq!(extract_message(&body).as_deref(), Some("from error"));

        let body = serde_json::json!({"error": {"message": "nested"}});
        assert_eq!(extract_message(&body).as_deref(), Some("nested"));

        let body = serde_json::json!({"code": 42});
        assert!(extract_message(&body).is_none());

        assert!(extract_message(&serde_json::json!("plain string")).is_none());
    }

    #[test]
    fn test_normalized_error_serializes_camel_case() {
        let normalized = NormalizedError::new("nope");
        let json = serde_json::to_value(&normalized).unwrap();
        assert_eq!(json["errorMessage"], "nope");
    }
}
