use anyhow::Result;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::fetch;
use crate::config::Config;
use crate::routing::share_link;
use crate::store::CalculatorStore;

/// Print the public link of a calculator
///
/// # Returns
/// * `Ok(String)` - The link that was printed
/// * `Err(anyhow::Error)` - Unknown calculator or storage error
pub async fn share_command(store: &dyn CalculatorStore, config: &Config, id: CalculatorId) -> Result<String> {
    info!("Sharing calculator {}", id);

    let calculator = fetch(store, id).await?;
    let link = share_link(&config.settings.share_base_url, calculator.id);
    println!("{}", link);
    Ok(link)
}
