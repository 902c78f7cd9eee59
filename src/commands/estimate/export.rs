use anyhow::Result;
use colored::*;
use log::info;
use std::path::PathBuf;

use crate::calculator::CalculatorId;
use crate::commands::{apply_answers, load_session};
use crate::config::Config;
use crate::export::{EstimateDocument, ExportFormat, Exporter};
use crate::store::CalculatorStore;

/// Export an estimate for a calculator
///
/// # Arguments
/// * `format` - html, xlsx, jpg or text
/// * `output` - Destination file, `estimate-<timestamp>.<ext>` when `None`
/// * `values` - Answers as `element-id=value`
///
/// # Returns
/// * `Ok(PathBuf)` - File that was written
/// * `Err(anyhow::Error)` - Unknown format, missing rasterizer, unknown calculator or I/O error
pub async fn export_command(
    store: &dyn CalculatorStore,
    config: &Config,
    exporter: &Exporter,
    id: CalculatorId,
    format: String,
    output: Option<PathBuf>,
    values: Vec<String>,
) -> Result<PathBuf> {
    let format: ExportFormat = format.parse()?;
    info!("Exporting calculator {} as {}", id, format);

    let mut session = load_session(store, id).await?;
    apply_answers(&mut session, &values)?;

    let document = EstimateDocument::new(
        &session.quote(),
        &config.brand,
        &config.settings.currency_symbol,
        chrono::Local::now().date_naive(),
        config.settings.estimate_valid_days,
    );
    let path = output.unwrap_or_else(|| format.default_file_name());
    exporter.export(&document, format, &path)?;

    println!("{} Estimate {} written to {}", "✓".bright_green().bold(), document.number, path.display().to_string().bold());
    Ok(path)
}
