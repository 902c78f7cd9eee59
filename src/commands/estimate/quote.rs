use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::{apply_answers, load_session};
use crate::config::Config;
use crate::pricing::{self, Quote};
use crate::store::CalculatorStore;

/// Price a calculator with the given answers; nothing is saved
///
/// # Arguments
/// * `values` - Answers as `element-id=value`
///
/// # Returns
/// * `Ok(Quote)` - Total and summary lines
/// * `Err(anyhow::Error)` - Unknown calculator or element, malformed answer, or storage error
pub async fn quote_command(
    store: &dyn CalculatorStore,
    config: &Config,
    id: CalculatorId,
    values: Vec<String>,
) -> Result<Quote> {
    info!("Quoting calculator {} with {} answer(s)", id, values.len());

    let mut session = load_session(store, id).await?;
    apply_answers(&mut session, &values)?;
    let quote = session.quote();
    let currency = &config.settings.currency_symbol;

    if quote.is_empty() {
        println!("Your estimate will appear here.");
    } else {
        for item in &quote.items {
            println!("{:<32} {}", item.label, item.display_amount(currency));
        }
    }
    println!("{}", "-".repeat(44));
    println!("{:<32} {}", "Total".bold(), format!("{}{:.2}", currency, quote.total).bold());

    for element in pricing::non_numeric_inputs(session.elements()) {
        println!("  {} element {} has a value that is not a number", "⚠".bright_yellow(), element);
    }
    Ok(quote)
}
