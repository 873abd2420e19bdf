//! Mock transport and collecting notifier for tests
//!
//! Scripts responses at the trait level so dispatcher behavior can be
//! exercised without a real server: queue up responses, dispatch, then
//! inspect the recorded calls and notifications.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use serde_json::Value as JsonValue;

use crate::domain::result::{Error, Result};
use crate::ports::{ApiRequest, ApiResponse, Notifier, Transport};

/// One scripted transport result
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Respond with this status and body
    Respond { status: u16, body: JsonValue },
    /// Fail at the transport level with this message
    TransportFailure(String),
}

impl ScriptedResponse {
    pub fn ok(body: JsonValue) -> Self {
        Self::Respond { status: 200, body }
    }

    pub fn status(status: u16, body: JsonValue) -> Self {
        Self::Respond { status, body }
    }
}

/// Transport that replays scripted responses and records every call
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<ScriptedResponse>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response
    pub fn push(&self, response: ScriptedResponse) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    /// Every request executed so far, in order
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            // An exhausted script answers 200 {} so happy-path tests don't
            // have to queue a response per call
            None => Ok(ApiResponse {
                status: 200,
                body: JsonValue::Object(serde_json::Map::new()),
            }),
            Some(ScriptedResponse::Respond { status, body }) => Ok(ApiResponse { status, body }),
            Some(ScriptedResponse::TransportFailure(msg)) => Err(Error::transport(msg)),
        }
    }
}

/// Notifier that records every message for later assertions
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for CollectingNotifier {
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
