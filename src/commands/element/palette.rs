use anyhow::Result;
use colored::*;

use crate::model::PALETTE;

/// Print the element palette grouped by category
pub async fn palette_command() -> Result<()> {
    for category in PALETTE {
        println!("{}", category.name.bold());
        for entry in category.entries {
            println!("  {:<16} {}", entry.element_type.as_str(), entry.label.dimmed());
        }
    }
    Ok(())
}
