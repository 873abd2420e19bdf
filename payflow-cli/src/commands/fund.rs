//! Fund deposit command

use std::str::FromStr;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use payflow_core::FundRequest;
use rust_decimal::Decimal;

use super::get_context;

pub fn run(amount: &str, note: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let amount = Decimal::from_str(amount)
        .map_err(|_| anyhow::anyhow!("Invalid amount: {} (expected e.g. 25.00)", amount))?;
    if amount <= Decimal::ZERO {
        anyhow::bail!("Amount must be positive");
    }

    let mut request = FundRequest::new(amount);
    if let Some(note) = note {
        request = request.with_metadata("note", serde_json::json!(note));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Submitting funding request...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = ctx.fund_service.add_fund(&request);

    spinner.finish_and_clear();

    // Success and error toasts both come from the completion hook
    if outcome.success {
        Ok(())
    } else {
        anyhow::bail!("Funding request was not accepted")
    }
}
