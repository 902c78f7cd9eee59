use anyhow::Result;
use colored::*;
use log::info;

use super::check_index;
use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::model::ElementId;
use crate::store::CalculatorStore;

/// Change the label, cost or imageUrl of one option
///
/// A cost that is not a number is stored as 0.
///
/// # Returns
/// * `Ok(())` - Option updated
/// * `Err(anyhow::Error)` - Unknown calculator, element, option or property, or storage error
pub async fn set_command(
    store: &dyn CalculatorStore,
    id: CalculatorId,
    element: ElementId,
    index: usize,
    key: String,
    value: String,
) -> Result<()> {
    info!("Setting {} of option {} on element {} in calculator {}", key, index, element, id);

    let mut session = load_session(store, id).await?;
    check_index(&session, element, index)?;
    session.update_option(element, index, &key, &value)?;
    save_session(store, &mut session).await?;

    println!("{} Set {} of option {} on element {}", "✓".bright_green().bold(), key, index, element);
    Ok(())
}
