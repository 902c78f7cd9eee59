use anyhow::Result;
use colored::*;
use log::info;

use super::choice_of;
use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::model::ElementId;
use crate::store::CalculatorStore;

/// Append a "New Option" (cost 0) to a selection element
///
/// # Returns
/// * `Ok(usize)` - Index of the new option
/// * `Err(anyhow::Error)` - Unknown calculator or element, element without options, or storage error
pub async fn add_command(store: &dyn CalculatorStore, id: CalculatorId, element: ElementId) -> Result<usize> {
    info!("Adding option to element {} of calculator {}", element, id);

    let mut session = load_session(store, id).await?;
    choice_of(&session, element)?;
    session.add_option(element);
    let index = choice_of(&session, element)?.options.len() - 1;
    save_session(store, &mut session).await?;

    println!("{} Added option {} to element {}", "✓".bright_green().bold(), index, element);
    Ok(index)
}
