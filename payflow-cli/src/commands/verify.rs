//! Forgot-password and OTP verification commands

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run_forgot_password(email: &str) -> Result<()> {
    let ctx = get_context()?;

    let outcome = ctx.auth_service.forgot_password(email);
    if outcome.success {
        output::success("If that address exists, a reset email is on its way.");
        Ok(())
    } else {
        anyhow::bail!(
            "Request failed: {}",
            outcome.error.unwrap_or_else(|| "unknown error".to_string())
        )
    }
}

pub fn run_verify_otp(otp: &str) -> Result<()> {
    let ctx = get_context()?;

    let outcome = ctx.auth_service.verify_otp(otp);
    if outcome.success {
        output::success("Code verified.");
        Ok(())
    } else {
        anyhow::bail!(
            "Verification failed: {}",
            outcome.error.unwrap_or_else(|| "unknown error".to_string())
        )
    }
}
