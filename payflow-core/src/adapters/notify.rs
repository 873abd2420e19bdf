//! Tracing-backed notifier
//!
//! Default notification sink for non-interactive use: user-facing messages
//! go to the structured log instead of a toast.

use crate::ports::Notifier;

pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "payflow::notify", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "payflow::notify", "{}", message);
    }
}
