//! Payflow Core - client logic for the Payflow wallet API
//!
//! This crate implements the API client layer following hexagonal
//! architecture:
//!
//! - **domain**: Request/response DTOs and the signup validation schema
//! - **registry**: The static table of named API operations
//! - **cache**: Tag-invalidated response cache keyed by (operation, args)
//! - **ports**: Trait definitions for external dependencies (Transport, Notifier)
//! - **services**: The generic dispatcher and typed operation wrappers
//! - **adapters**: Concrete implementations (reqwest transport, mocks)

pub mod adapters;
pub mod cache;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod ports;
pub mod registry;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use adapters::{HttpTransport, TracingNotifier};
use config::Config;
use ports::Notifier;
use services::{AuthService, Dispatcher, FundService, TransactionService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationOutcome};
pub use domain::{
    Balance, Credentials, FundRequest, Session, SignupForm, SignupRequest, Transaction,
};
pub use normalize::{parse_error, NormalizedError};
pub use registry::{OperationId, Tag};

/// Main context for Payflow operations
///
/// The primary entry point for front-ends. Holds the configuration, the
/// shared transport, and the operation services, all wired to one
/// dispatcher and one response cache.
pub struct PayflowContext {
    pub config: Config,
    pub transport: Arc<HttpTransport>,
    pub dispatcher: Arc<Dispatcher>,
    pub auth_service: AuthService,
    pub fund_service: FundService,
    pub transaction_service: TransactionService,
    payflow_dir: PathBuf,
}

impl PayflowContext {
    /// Create a context with the default tracing notifier
    pub fn new(payflow_dir: &Path) -> Result<Self> {
        Self::with_notifier(payflow_dir, Arc::new(TracingNotifier))
    }

    /// Create a context with a caller-supplied notification sink
    pub fn with_notifier(payflow_dir: &Path, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let config = Config::load(payflow_dir)?;

        let transport = Arc::new(HttpTransport::with_timeout(
            &config.api_base_url,
            config.timeout_secs,
        )?);
        transport.set_auth_token(config.token.clone());

        let dispatcher = Arc::new(Dispatcher::new(transport.clone(), notifier));

        let auth_service = AuthService::new(Arc::clone(&dispatcher));
        let fund_service = FundService::new(Arc::clone(&dispatcher));
        let transaction_service = TransactionService::new(Arc::clone(&dispatcher));

        Ok(Self {
            config,
            transport,
            dispatcher,
            auth_service,
            fund_service,
            transaction_service,
            payflow_dir: payflow_dir.to_path_buf(),
        })
    }

    /// Persist a logged-in session and start sending its token
    pub fn save_session(&mut self, session: &Session) -> Result<()> {
        self.config
            .set_session(session.token.clone(), session.user_id.clone());
        self.config.save(&self.payflow_dir)?;
        self.transport.set_auth_token(session.token.clone());
        Ok(())
    }

    /// Forget the session and drop every cached response
    pub fn logout(&mut self) -> Result<()> {
        self.config.clear_session();
        self.config.save(&self.payflow_dir)?;
        self.transport.set_auth_token(None);
        self.dispatcher.cache().clear();
        Ok(())
    }
}
