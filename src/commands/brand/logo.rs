use anyhow::Result;
use colored::*;
use log::info;
use std::path::PathBuf;

use crate::config::Config;
use crate::upload::file_to_data_url;

/// Use an image file as the company logo
///
/// # Returns
/// * `Ok(())` - Logo stored in the config file
/// * `Err(anyhow::Error)` - Unreadable file or configuration error
pub async fn logo_command(file: PathBuf) -> Result<()> {
    info!("Setting company logo from {}", file.display());

    let url = file_to_data_url(&file)?;
    let mut config = Config::load()?;
    config.set_company_logo(Some(url))?;

    println!("{} Company logo set from {}", "✓".bright_green().bold(), file.display());
    Ok(())
}

/// Remove the company logo; estimates fall back to the company name
pub async fn clear_logo_command() -> Result<()> {
    info!("Clearing company logo");

    let mut config = Config::load()?;
    config.set_company_logo(None)?;
    println!("Company logo removed.");
    Ok(())
}
