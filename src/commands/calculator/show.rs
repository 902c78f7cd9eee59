use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::fetch;
use crate::config::Config;
use crate::pagination;
use crate::pricing;
use crate::store::CalculatorStore;
use crate::ui::outline::render_outline;

/// Show a calculator's element tree, page count and current total
///
/// # Arguments
/// * `id` - Calculator id
///
/// # Returns
/// * `Ok(())` - Calculator displayed successfully
/// * `Err(anyhow::Error)` - Unknown calculator or storage error
pub async fn show_command(store: &dyn CalculatorStore, config: &Config, id: CalculatorId) -> Result<()> {
    info!("Showing calculator {}", id);

    let calculator = fetch(store, id).await?;
    let currency = &config.settings.currency_symbol;

    println!("{} ({})", calculator.name.bold(), calculator.status);
    if !calculator.description.is_empty() {
        println!("{}", calculator.description.dimmed());
    }
    println!();
    print!("{}", render_outline(&calculator.elements, currency));
    println!();

    let pages = pagination::page_count(&calculator.elements);
    println!("Pages: {}", pages);

    let total = pricing::total(&calculator.elements);
    println!("Total: {}", format!("{}{:.2}", currency, total).bold());
    for id in pricing::non_numeric_inputs(&calculator.elements) {
        println!("  {} element {} has a value that is not a number", "⚠".bright_yellow(), id);
    }

    Ok(())
}
