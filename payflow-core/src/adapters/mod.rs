//! Concrete implementations of the ports

pub mod http;
pub mod mock;
pub mod notify;

pub use http::HttpTransport;
pub use mock::{CollectingNotifier, MockTransport, ScriptedResponse};
pub use notify::TracingNotifier;
