use anyhow::Result;
use colored::*;
use log::info;
use std::path::PathBuf;

use super::check_index;
use crate::calculator::CalculatorId;
use crate::commands::{load_session, save_session};
use crate::model::ElementId;
use crate::store::CalculatorStore;
use crate::upload::file_to_data_url;

/// Embed an image file into an option as a data URL
///
/// # Returns
/// * `Ok(())` - Image attached
/// * `Err(anyhow::Error)` - Unreadable file, unknown calculator, element or option, or storage error
pub async fn image_command(
    store: &dyn CalculatorStore,
    id: CalculatorId,
    element: ElementId,
    index: usize,
    file: PathBuf,
) -> Result<()> {
    info!("Attaching {} to option {} of element {}", file.display(), index, element);

    let mut session = load_session(store, id).await?;
    check_index(&session, element, index)?;
    let url = file_to_data_url(&file)?;
    session.update_option(element, index, "imageUrl", &url)?;
    save_session(store, &mut session).await?;

    println!("{} Attached {} to option {}", "✓".bright_green().bold(), file.display(), index);
    Ok(())
}
