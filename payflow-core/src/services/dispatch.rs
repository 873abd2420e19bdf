//! Generic operation dispatcher
//!
//! Executes any operation from the registry: renders the path, consults the
//! response cache for queries, runs the transport call, normalizes failures,
//! fires the descriptor's completion hook exactly once, and keeps the cache
//! tags honest. Callers always get a completed outcome envelope back;
//! nothing here panics or propagates a raw error.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::cache::ResponseCache;
use crate::domain::result::{Error, OperationOutcome, Result};
use crate::normalize::{extract_message, parse_error};
use crate::ports::{ApiRequest, Notifier, Transport};
use crate::registry::{render_path, CompletionHook, Method, OperationId, OperationKind, Tag};

pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    cache: ResponseCache,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            transport,
            notifier,
            cache: ResponseCache::new(),
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Invalidate a tag, marking every query result carrying it stale
    pub fn invalidate(&self, tag: Tag) -> usize {
        self.cache.invalidate(tag)
    }

    /// Dispatch one operation
    ///
    /// `args` fill the path template positionally and scope the cache key;
    /// `body` is forwarded as-is. Queries are served from cache when a fresh
    /// entry exists; the completion hook only fires for calls that reached
    /// the wire.
    pub fn dispatch(
        &self,
        operation: OperationId,
        args: &[String],
        body: Option<JsonValue>,
    ) -> OperationOutcome<JsonValue> {
        let descriptor = operation.descriptor();

        if descriptor.kind == OperationKind::Query {
            if let Some(value) = self.cache.get(descriptor, args) {
                tracing::debug!(operation = descriptor.name, "serving from cache");
                return OperationOutcome::cached(value);
            }
        }

        tracing::debug!(
            operation = descriptor.name,
            method = descriptor.method.as_str(),
            "dispatching"
        );

        let result = self.execute(descriptor.method, descriptor.path_template, args, body);

        match result {
            Ok(payload) => {
                match descriptor.kind {
                    OperationKind::Query => {
                        self.cache.store(descriptor, args, payload.clone());
                    }
                    OperationKind::Mutation => {
                        for tag in descriptor.invalidates {
                            let stale = self.cache.invalidate(*tag);
                            tracing::debug!(
                                operation = descriptor.name,
                                tag = tag.as_str(),
                                stale,
                                "invalidated tag"
                            );
                        }
                    }
                }

                if let CompletionHook::NotifyBoth { success_message } = descriptor.hook {
                    self.notifier.success(success_message);
                }

                OperationOutcome::fulfilled(payload)
            }
            Err(error) => {
                let normalized = parse_error(&error);
                tracing::warn!(
                    operation = descriptor.name,
                    error = %normalized.error_message,
                    "operation rejected"
                );

                match descriptor.hook {
                    CompletionHook::NotifyError | CompletionHook::NotifyBoth { .. } => {
                        self.notifier.error(&normalized.error_message);
                    }
                    CompletionHook::Silent => {}
                }

                OperationOutcome::rejected(normalized.error_message)
            }
        }
    }

    fn execute(
        &self,
        method: Method,
        path_template: &str,
        args: &[String],
        body: Option<JsonValue>,
    ) -> Result<JsonValue> {
        let path = render_path(path_template, args)?;
        let request = ApiRequest { method, path, body };

        let response = self.transport.execute(&request)?;
        if response.is_success() {
            Ok(response.body)
        } else {
            let message = extract_message(&response.body).unwrap_or_default();
            Err(Error::api(response.status, message))
        }
    }
}
