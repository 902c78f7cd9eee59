use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::{CalculatorId, Status};
use crate::store::CalculatorStore;

async fn set_status(store: &dyn CalculatorStore, id: CalculatorId, status: Status) -> Result<()> {
    info!("Setting calculator {} to {}", id, status);

    if !store.set_status(id, status).await? {
        anyhow::bail!("Calculator '{}' not found", id);
    }
    println!("{} Calculator {} is now {}", "✓".bright_green().bold(), id, status.as_str().bold());
    Ok(())
}

/// Mark a calculator as published
pub async fn publish_command(store: &dyn CalculatorStore, id: CalculatorId) -> Result<()> {
    set_status(store, id, Status::Published).await
}

/// Move a calculator back to draft
pub async fn unpublish_command(store: &dyn CalculatorStore, id: CalculatorId) -> Result<()> {
    set_status(store, id, Status::Draft).await
}
