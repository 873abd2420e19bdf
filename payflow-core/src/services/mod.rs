//! Client services
//!
//! The generic dispatcher plus one typed wrapper per API area. Services
//! hold an `Arc<Dispatcher>` and translate between domain DTOs and the
//! opaque JSON the dispatcher moves around.

pub mod auth;
pub mod dispatch;
pub mod fund;
pub mod transaction;

pub use auth::AuthService;
pub use dispatch::Dispatcher;
pub use fund::FundService;
pub use transaction::TransactionService;
