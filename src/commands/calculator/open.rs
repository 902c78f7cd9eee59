use anyhow::Result;
use colored::*;
use log::info;

use crate::config::Config;
use crate::export::{EstimateDocument, text};
use crate::pagination::{self, Pager};
use crate::pricing;
use crate::routing;
use crate::store::CalculatorStore;
use crate::ui::outline::render_page;

/// Resolve a public path (`/calc/<id>` or a full share link) and show the form
///
/// # Returns
/// * `Ok(())` - Form displayed successfully
/// * `Err(anyhow::Error)` - No calculator at that path, or storage error
pub async fn open_command(store: &dyn CalculatorStore, config: &Config, path: String) -> Result<()> {
    info!("Opening {}", path);

    let route = strip_origin(&path);
    let Some(calculator) = routing::resolve(store, route).await? else {
        anyhow::bail!("Calculator not found.");
    };

    let currency = &config.settings.currency_symbol;
    let pages = pagination::paginate(&calculator.elements);
    let pager = Pager::new();

    println!("{}", calculator.name.bold());
    if !calculator.description.is_empty() {
        println!("{}", calculator.description.dimmed());
    }
    if pages.len() > 1 {
        println!("{}", pager.progress_label(pages.len()).dimmed());
    }
    println!();
    print!("{}", render_page(&pages[pager.current(pages.len())], currency));
    println!();

    let quote = pricing::quote(&calculator.elements);
    let document = EstimateDocument::new(
        &quote,
        &config.brand,
        currency,
        chrono::Local::now().date_naive(),
        config.settings.estimate_valid_days,
    );
    print!("{}", text::render_summary(&document));
    Ok(())
}

/// `https://host/calc/1` -> `/calc/1`
fn strip_origin(path: &str) -> &str {
    match path.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or("/"),
        None => path,
    }
}
