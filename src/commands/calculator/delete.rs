use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::fetch;
use crate::store::CalculatorStore;
use crate::ui::prompts::prompt_delete_confirmation;

/// Delete a saved calculator
///
/// # Arguments
/// * `id` - Calculator id
/// * `force` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(true)` - Calculator deleted
/// * `Ok(false)` - User cancelled
/// * `Err(anyhow::Error)` - Unknown calculator or storage error
pub async fn delete_command(store: &dyn CalculatorStore, id: CalculatorId, force: bool) -> Result<bool> {
    info!("Deleting calculator {}", id);

    let calculator = fetch(store, id).await?;

    if !force && !prompt_delete_confirmation(&calculator.name)? {
        println!("Operation cancelled.");
        return Ok(false);
    }

    store.delete(id).await?;
    println!("{} Deleted calculator '{}'", "✓".bright_green().bold(), calculator.name);
    Ok(true)
}
