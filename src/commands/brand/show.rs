use anyhow::Result;
use log::info;

use crate::config::Config;

/// Show the brand settings used on exported estimates
pub async fn show_command() -> Result<()> {
    info!("Showing brand settings");

    let config = Config::load()?;
    let brand = &config.brand;

    println!("Brand:");
    println!("  {:<16} {}", "company-name", brand.company_name);
    println!("  {:<16} {}", "primary-color", brand.primary_color);
    println!("  {:<16} {}", "secondary-color", brand.secondary_color);
    let logo = match &brand.company_logo {
        Some(url) => format!("set ({} bytes)", url.len()),
        None => "none".to_string(),
    };
    println!("  {:<16} {}", "logo", logo);
    Ok(())
}
