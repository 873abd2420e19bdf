//! CLI command implementations

pub mod balance;
pub mod fund;
pub mod login;
pub mod logout;
pub mod signup;
pub mod transactions;
pub mod verify;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use payflow_core::PayflowContext;

use crate::output::ToastNotifier;

/// Get the payflow directory from environment or default
pub fn get_payflow_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAYFLOW_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".payflow")
    }
}

/// Get or create a payflow context wired to the terminal toast sink
pub fn get_context() -> Result<PayflowContext> {
    let payflow_dir = get_payflow_dir();

    std::fs::create_dir_all(&payflow_dir)
        .with_context(|| format!("Failed to create payflow directory: {:?}", payflow_dir))?;

    PayflowContext::with_notifier(&payflow_dir, Arc::new(ToastNotifier))
        .context("Failed to initialize payflow context")
}

/// Resolve the user id: explicit flag first, stored session second
pub fn resolve_user_id(ctx: &PayflowContext, user: Option<String>) -> Result<String> {
    if let Some(user) = user {
        return Ok(user);
    }
    match &ctx.config.user_id {
        Some(id) => Ok(id.clone()),
        None => bail!("Not logged in. Run `pf login` or pass --user."),
    }
}
