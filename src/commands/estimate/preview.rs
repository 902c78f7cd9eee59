use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::CalculatorId;
use crate::commands::{apply_answers, load_session};
use crate::config::Config;
use crate::store::CalculatorStore;
use crate::ui::outline::render_page;

/// Show one page of the form the way an end user steps through it
///
/// # Arguments
/// * `page` - 1-based page number, clamped to the available pages
/// * `values` - Answers as `element-id=value`
///
/// # Returns
/// * `Ok(())` - Page displayed successfully
/// * `Err(anyhow::Error)` - Unknown calculator or element, malformed answer, or storage error
pub async fn preview_command(
    store: &dyn CalculatorStore,
    config: &Config,
    id: CalculatorId,
    page: usize,
    values: Vec<String>,
) -> Result<()> {
    info!("Previewing page {} of calculator {}", page, id);

    let mut session = load_session(store, id).await?;
    apply_answers(&mut session, &values)?;
    session.go_to_page(page.saturating_sub(1));

    let pages = session.pages();
    let current = session.current_page();
    let pager = session.pager();

    println!("{}", session.name().bold());
    println!(
        "{} ({:.0}%)",
        pager.progress_label(pages.len()).dimmed(),
        pager.progress_percent(pages.len())
    );
    println!();
    print!("{}", render_page(&pages[current], &config.settings.currency_symbol));
    println!();

    let mut nav = Vec::new();
    if pager.has_previous(pages.len()) {
        nav.push(format!("--page {} for Previous", current));
    }
    if pager.has_next(pages.len()) {
        nav.push(format!("--page {} for Next", current + 2));
    }
    if !nav.is_empty() {
        println!("{}", nav.join(", ").dimmed());
    }
    println!(
        "Total: {}",
        format!("{}{:.2}", config.settings.currency_symbol, session.total()).bold()
    );
    Ok(())
}
