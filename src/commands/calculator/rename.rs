use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::store::CalculatorStore;

/// Rename a calculator and optionally replace its description
///
/// # Returns
/// * `Ok(())` - Calculator renamed
/// * `Err(anyhow::Error)` - Unknown calculator, blank name or storage error
pub async fn rename_command(
    store: &dyn CalculatorStore,
    id: CalculatorId,
    name: String,
    description: Option<String>,
) -> Result<()> {
    info!("Renaming calculator {} to {}", id, name);

    let mut session = load_session(store, id).await?;
    session.set_name(name);
    if let Some(description) = description {
        session.set_description(description);
    }
    save_session(store, &mut session).await?;

    println!("{} Calculator {} is now '{}'", "✓".bright_green().bold(), id, session.name());
    Ok(())
}
