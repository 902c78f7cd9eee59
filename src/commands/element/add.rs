use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::{load_session, parse_assignment, save_session};
use crate::drag::DropZone;
use crate::model::{ElementId, ElementPatch, ElementType};
use crate::store::CalculatorStore;

/// Drop a new element from the palette into the root or a group
///
/// # Arguments
/// * `element_type` - Palette entry to materialize
/// * `group` - Target group, root when `None`
/// * `label` - Label override
/// * `properties` - Initial `key=value` properties
///
/// # Returns
/// * `Ok(ElementId)` - Id of the new element
/// * `Err(anyhow::Error)` - Unknown calculator or group, bad property, or storage error
pub async fn add_command(
    store: &dyn CalculatorStore,
    id: CalculatorId,
    element_type: ElementType,
    group: Option<ElementId>,
    label: Option<String>,
    properties: Vec<String>,
) -> Result<ElementId> {
    info!("Adding {} to calculator {}", element_type, id);

    let patches = properties
        .iter()
        .map(|raw| {
            let (key, value) = parse_assignment(raw)?;
            ElementPatch::parse(key, value)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = load_session(store, id).await?;
    if let Some(group_id) = group {
        match session.find(group_id) {
            Some(target) if target.is_group() => {}
            Some(target) => anyhow::bail!("Element {} is a {}, not a group", group_id, target.element_type()),
            None => anyhow::bail!("Group '{}' not found", group_id),
        }
    }

    let zone = DropZone::from(group);
    let dropped = match session.add_element(element_type, zone) {
        Some(dropped) if dropped.landed => dropped,
        _ => anyhow::bail!("Could not drop {} into {:?}", element_type, zone),
    };

    if let Some(label) = label {
        session.update_element(dropped.id, ElementPatch::Label(label));
    }
    for patch in patches {
        session.edit_element(dropped.id, patch)?;
    }
    save_session(store, &mut session).await?;

    println!("{} Added {} element {}", "✓".bright_green().bold(), element_type, dropped.id.to_string().bold());
    Ok(dropped.id)
}
