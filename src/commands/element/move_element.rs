use anyhow::Result;
use colored::*;
use log::{info, warn};

use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::drag::DropZone;
use crate::model::ElementId;
use crate::store::CalculatorStore;
use crate::tree;

/// Drag an existing element to the root or into a group
///
/// Moving a group into itself or one of its own descendants is refused here;
/// the reducer on its own would drop the subtree.
///
/// # Returns
/// * `Ok(())` - Element moved
/// * `Err(anyhow::Error)` - Unknown calculator, element or group, or storage error
pub async fn move_command(
    store: &dyn CalculatorStore,
    id: CalculatorId,
    element: ElementId,
    group: Option<ElementId>,
) -> Result<()> {
    info!("Moving element {} of calculator {} to {:?}", element, id, group);

    let mut session = load_session(store, id).await?;
    if session.find(element).is_none() {
        anyhow::bail!("Element '{}' not found", element);
    }
    if let Some(group_id) = group {
        match session.find(group_id) {
            None => anyhow::bail!("Group '{}' not found", group_id),
            Some(target) if !target.is_group() => {
                anyhow::bail!("Element {} is a {}, not a group", group_id, target.element_type())
            }
            Some(_) if group_id == element || tree::is_descendant(session.elements(), element, group_id) => {
                warn!("Refused to move element {} into its own subtree", element);
                anyhow::bail!("Cannot move element {} into itself", element);
            }
            Some(_) => {}
        }
    }

    session.move_element(element, DropZone::from(group));
    save_session(store, &mut session).await?;

    let destination = match group {
        Some(group_id) => format!("group {}", group_id),
        None => "the root".to_string(),
    };
    println!("{} Moved element {} to {}", "✓".bright_green().bold(), element, destination);
    Ok(())
}
