//! Login command

use anyhow::Result;
use dialoguer::{Input, Password};
use payflow_core::Credentials;

use super::get_context;
use crate::output;

pub fn run(email: Option<String>, password: Option<String>) -> Result<()> {
    let mut ctx = get_context()?;

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let outcome = ctx.auth_service.login(&Credentials::new(email, password));
    if !outcome.success {
        // The error toast already fired from the completion hook
        anyhow::bail!("Login failed");
    }

    let session = outcome.data.unwrap_or_default();
    if session.token.is_none() {
        anyhow::bail!("Login response did not include a token");
    }
    ctx.save_session(&session)?;

    output::success("Logged in.");
    Ok(())
}
