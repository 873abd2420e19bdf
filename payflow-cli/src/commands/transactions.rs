//! Transactions command - list or look up wallet transactions

use anyhow::Result;
use colored::Colorize;
use payflow_core::Transaction;

use super::{get_context, resolve_user_id};
use crate::output;

pub fn run(id: Option<String>, user: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user_id = resolve_user_id(&ctx, user)?;

    if let Some(tran_id) = id {
        let outcome = ctx.transaction_service.get_transaction(&user_id, &tran_id);
        if !outcome.success {
            anyhow::bail!("Lookup failed");
        }
        let body = outcome.data.unwrap_or(serde_json::Value::Null);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let outcome = ctx.transaction_service.get_user_transactions(&user_id);
    if !outcome.success {
        anyhow::bail!("Lookup failed");
    }
    let transactions = outcome.data.unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    if transactions.is_empty() {
        output::info("No transactions.");
        return Ok(());
    }

    println!("{}", "Transactions".bold());
    println!();
    println!("{}", render_table(&transactions));
    if outcome.from_cache {
        output::info("(cached)");
    }

    Ok(())
}

fn render_table(transactions: &[Transaction]) -> comfy_table::Table {
    let mut table = output::create_table();
    table.set_header(vec!["Id", "Amount", "Status", "Description", "Date"]);

    for tx in transactions {
        table.add_row(vec![
            tx.id.clone().unwrap_or_default(),
            tx.amount.map(|a| a.to_string()).unwrap_or_default(),
            tx.status.clone().unwrap_or_default(),
            tx.description.clone().unwrap_or_default(),
            tx.created_at
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ]);
    }

    table
}
