use anyhow::Result;
use log::info;

use crate::config::{BrandSettings, Config};

/// Set a brand setting
///
/// # Arguments
/// * `name` - company-name, primary-color or secondary-color
/// * `value` - New value
///
/// # Returns
/// * `Ok(())` - Brand updated
/// * `Err(anyhow::Error)` - Configuration error or invalid name/value
pub async fn set_command(name: String, value: String) -> Result<()> {
    info!("Setting brand {} to {}", name, value);

    if !BrandSettings::NAMES.contains(&name.as_str()) {
        anyhow::bail!("Unknown brand setting: {} (expected one of {})", name, BrandSettings::NAMES.join(", "));
    }

    let mut config = Config::load()?;
    config.update_brand(&name, &value)?;
    println!("Set {} to {}", name, value);
    Ok(())
}
