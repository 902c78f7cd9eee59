use anyhow::Result;
use colored::*;
use log::{info, warn};

use super::{check_index, choice_of};
use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::model::ElementId;
use crate::store::CalculatorStore;

/// Remove one option from a selection element
///
/// # Returns
/// * `Ok(())` - Option removed
/// * `Err(anyhow::Error)` - Unknown calculator, element or option, or storage error
pub async fn remove_command(store: &dyn CalculatorStore, id: CalculatorId, element: ElementId, index: usize) -> Result<()> {
    info!("Removing option {} from element {} of calculator {}", index, element, id);

    let mut session = load_session(store, id).await?;
    check_index(&session, element, index)?;
    let choice = choice_of(&session, element)?;
    let was_selected = choice.options[index].value == choice.value;

    session.remove_option(element, index);
    save_session(store, &mut session).await?;

    println!("{} Removed option {} from element {}", "✓".bright_green().bold(), index, element);
    if was_selected {
        warn!("Removed the selected option of element {}", element);
        println!("  {} it was the selected answer; the element now prices at 0", "⚠".bright_yellow());
    }
    Ok(())
}
