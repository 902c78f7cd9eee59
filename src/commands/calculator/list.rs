use anyhow::Result;
use colored::*;
use log::info;

use crate::calculator::Status;
use crate::store::CalculatorStore;

/// List all saved calculators
///
/// # Returns
/// * `Ok(())` - List displayed successfully
/// * `Err(anyhow::Error)` - Storage error
pub async fn list_command(store: &dyn CalculatorStore) -> Result<()> {
    info!("Listing calculators");

    let calculators = store.load_all().await?;
    if calculators.is_empty() {
        println!("No calculators yet. Create one with 'calc-builder new <name>'.");
        return Ok(());
    }

    println!("{:<16} {:<36} {:<11} {:>11}  Created", "ID", "Name", "Status", "Submissions");
    println!("{}", "-".repeat(92));

    for calculator in &calculators {
        let status = match calculator.status {
            Status::Published => calculator.status.as_str().bright_green(),
            Status::Draft => calculator.status.as_str().yellow(),
        };
        println!(
            "{:<16} {:<36} {:<11} {:>11}  {}",
            calculator.id, calculator.name, status, calculator.submissions, calculator.created_at
        );
    }

    println!("\nTotal calculators: {}", calculators.len());
    Ok(())
}
