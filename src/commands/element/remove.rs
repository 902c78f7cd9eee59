use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::model::ElementId;
use crate::store::CalculatorStore;
use crate::tree;

/// Remove an element together with everything nested in it
///
/// # Returns
/// * `Ok(())` - Element removed
/// * `Err(anyhow::Error)` - Unknown calculator or element, or storage error
pub async fn remove_command(store: &dyn CalculatorStore, id: CalculatorId, element: ElementId) -> Result<()> {
    info!("Removing element {} from calculator {}", element, id);

    let mut session = load_session(store, id).await?;
    let Some(target) = session.find(element) else {
        anyhow::bail!("Element '{}' not found", element);
    };
    let removed = tree::count(std::slice::from_ref(target));

    session.delete_element(element);
    save_session(store, &mut session).await?;

    println!("{} Removed {} element(s)", "✓".bright_green().bold(), removed);
    Ok(())
}
