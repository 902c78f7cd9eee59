use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::save_session;
use crate::session::EditorSession;
use crate::store::CalculatorStore;

/// Create and save an empty calculator
///
/// # Arguments
/// * `name` - Calculator name
/// * `description` - Short description
///
/// # Returns
/// * `Ok(CalculatorId)` - Id of the new calculator
/// * `Err(anyhow::Error)` - Blank name or storage error
pub async fn new_command(store: &dyn CalculatorStore, name: String, description: String) -> Result<CalculatorId> {
    info!("Creating calculator: {}", name);

    let mut session = EditorSession::new();
    session.set_name(name);
    session.set_description(description);
    let id = save_session(store, &mut session).await?;

    println!("{} Created calculator '{}' with id {}", "✓".bright_green().bold(), session.name(), id.to_string().bold());
    Ok(id)
}
