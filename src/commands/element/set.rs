use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::model::{ElementId, ElementPatch};
use crate::store::CalculatorStore;

/// Set one property of an element
///
/// Properties that do not exist on the element's type (cost on a text
/// field, for instance) are reported and leave the calculator unchanged.
/// Selecting a value that is not an option, or duplicating option values,
/// is an error.
///
/// # Returns
/// * `Ok(())` - Property updated
/// * `Err(anyhow::Error)` - Unknown calculator, element or property, bad value, broken options, or storage error
pub async fn set_command(
    store: &dyn CalculatorStore,
    id: CalculatorId,
    element: ElementId,
    key: String,
    value: String,
) -> Result<()> {
    info!("Setting {} of element {} in calculator {}", key, element, id);

    let patch = ElementPatch::parse(&key, &value)?;
    let mut session = load_session(store, id).await?;
    let Some(element_type) = session.find(element).map(|target| target.element_type()) else {
        anyhow::bail!("Element '{}' not found", element);
    };
    if !session.edit_element(element, patch)? {
        println!("Element {} ({}) has no '{}' to change.", element, element_type, key);
        return Ok(());
    }

    save_session(store, &mut session).await?;

    println!("{} Set {} of element {}", "✓".bright_green().bold(), key, element);
    Ok(())
}
