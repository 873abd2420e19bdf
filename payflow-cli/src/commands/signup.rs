//! Signup command - interactive account creation form
//!
//! Prompts for each field, runs the validation schema, and shows the
//! per-field errors next to the field names on failure. Only a valid form
//! is handed to the signup operation.

use anyhow::Result;
use dialoguer::{Input, Password};
use payflow_core::{SignupForm, SignupRequest};

use super::get_context;
use crate::output;

fn prompt_form() -> Result<SignupRequest> {
    let first_name: String = Input::new()
        .with_prompt("First name")
        .allow_empty(true)
        .interact_text()?;
    let last_name: String = Input::new()
        .with_prompt("Last name")
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::new()
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let phone_number: String = Input::new()
        .with_prompt("Phone number")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Password (5-12 characters)")
        .allow_empty_password(true)
        .interact()?;
    let confirm_password = Password::new()
        .with_prompt("Confirm password")
        .allow_empty_password(true)
        .interact()?;

    Ok(SignupRequest {
        first_name,
        last_name,
        email,
        phone_number,
        password,
        confirm_password,
    })
}

pub fn run() -> Result<()> {
    let ctx = get_context()?;

    let data = prompt_form()?;

    let mut form = SignupForm::new();
    let outcome = form.submit(data, |data| ctx.auth_service.signup(&data));

    match outcome {
        Some(result) if result.success => {
            output::success("Account created. Check your email for a verification code.");
            output::info("Verify with: pf verify-otp <code>");
            Ok(())
        }
        Some(result) => {
            // Signup has no notification hook; surface the message here
            anyhow::bail!(
                "Signup failed: {}",
                result.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
        None => {
            for err in form.field_errors() {
                output::error(&format!("  {}: {}", err.field.as_str(), err.message));
            }
            anyhow::bail!("Please fix the fields above and try again");
        }
    }
}
