//! Logout command

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run() -> Result<()> {
    let mut ctx = get_context()?;
    ctx.logout()?;
    output::success("Logged out.");
    Ok(())
}
