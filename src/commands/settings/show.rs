use anyhow::Result;
use log::info;

use crate::config::{Config, Settings};

/// Show all settings with their current values
///
/// # Returns
/// * `Ok(())` - Settings displayed successfully
/// * `Err(anyhow::Error)` - Configuration error
pub async fn show_command() -> Result<()> {
    info!("Showing settings");

    let config = Config::load()?;
    let settings = config.get_settings();

    println!("Settings:");
    for name in Settings::NAMES {
        let value = settings.get(name)?;
        let value = if value.is_empty() { "(default)".to_string() } else { value };
        println!("  {:<22} {}", name, value);
    }
    println!("\nDatabase: {}", config.database_path()?.display());
    Ok(())
}
