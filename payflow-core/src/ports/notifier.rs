//! User-notification port
//!
//! The toast sink of the original UI, reduced to its contract: operations
//! funnel their user-facing messages here instead of propagating errors to
//! the caller. Rendering is whoever implements the trait.

/// Notification sink trait
pub trait Notifier: Send + Sync {
    /// Surface a success message to the user
    fn success(&self, message: &str);

    /// Surface an error message to the user
    fn error(&self, message: &str);
}

/// Notifier that drops everything, for callers that want silence
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
