//! Balance command

use anyhow::Result;
use colored::Colorize;

use super::{get_context, resolve_user_id};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user_id = resolve_user_id(&ctx, None)?;

    let outcome = ctx.transaction_service.get_balance(&user_id);
    if !outcome.success {
        anyhow::bail!("Balance lookup failed");
    }
    let balance = outcome.data.unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&balance)?);
        return Ok(());
    }

    let amount = balance
        .balance
        .map(|b| b.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let currency = balance.currency.unwrap_or_default();

    println!("{} {} {}", "Balance:".bold(), amount, currency);
    if outcome.from_cache {
        output::info("(cached)");
    }

    Ok(())
}
