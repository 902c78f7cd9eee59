use anyhow::Result;
use colored::*;
use log::info;

use crate::config::Config;
use crate::config::db::get_db_info;
use crate::store::SqliteStore;

/// Show where calculators are stored and the state of the database
///
/// # Returns
/// * `Ok(())` - Details displayed
/// * `Err(anyhow::Error)` - Database error
pub async fn info_command(store: &SqliteStore, config: &Config) -> Result<()> {
    info!("Showing database info");

    let db = get_db_info(store.pool()).await?;
    println!("{}", "Database".bold());
    println!("  {:<16} {}", "path", config.database_path()?.display());
    println!("  {:<16} {}", "sqlite", db.sqlite_version);
    println!("  {:<16} {}", "schema version", db.schema_version);
    println!("  {:<16} {}", "journal mode", db.journal_mode);
    println!("  {:<16} {}", "calculators", db.calculator_count);
    Ok(())
}
