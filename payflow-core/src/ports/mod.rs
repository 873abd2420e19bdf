//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The dispatcher
//! depends only on these traits, not on concrete implementations, so tests
//! can mock the network and the notification sink at the trait level.

mod notifier;
mod transport;

pub use notifier::Notifier;
pub use transport::{ApiRequest, ApiResponse, Transport};
