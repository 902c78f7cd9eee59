//! Estimate export: a resolved document plus one renderer per output format.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::BrandSettings;
use crate::model::now_millis;
use crate::pricing::{Quote, SummaryItem};

pub mod html;
pub mod text;
pub mod xlsx;

/// Everything a rendered estimate shows, resolved once
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateDocument {
    pub brand: BrandSettings,
    pub currency: String,
    pub number: String,
    pub date: NaiveDate,
    pub valid_until: NaiveDate,
    pub items: Vec<SummaryItem>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl EstimateDocument {
    pub fn new(quote: &Quote, brand: &BrandSettings, currency: &str, date: NaiveDate, valid_days: u32) -> Self {
        Self {
            brand: brand.clone(),
            currency: currency.to_string(),
            number: estimate_number(now_millis()),
            date,
            valid_until: date
                .checked_add_days(Days::new(u64::from(valid_days)))
                .unwrap_or(date),
            items: quote.items.clone(),
            subtotal: quote.total,
            tax_rate: 0.0,
            tax: 0.0,
            total: quote.total,
        }
    }

    /// `$12.50` style amount in the document currency
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }

    /// Dates as printed on the estimate (`6/21/2025`)
    pub fn format_date(date: NaiveDate) -> String {
        date.format("%-m/%-d/%Y").to_string()
    }
}

/// `EST-` followed by the last four digits of a millisecond timestamp
pub fn estimate_number(timestamp_ms: u64) -> String {
    let digits = timestamp_ms.to_string();
    let tail = &digits[digits.len().saturating_sub(4)..];
    format!("EST-{}", tail)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Xlsx,
    Jpg,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Text => "txt",
        }
    }

    /// `estimate-<timestamp>.<ext>`
    pub fn default_file_name(&self) -> PathBuf {
        PathBuf::from(format!("estimate-{}.{}", now_millis(), self.extension()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "pdf" => Ok(ExportFormat::Html),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => anyhow::bail!("Unknown export format: '{}' (expected html, xlsx, jpg or text)", other),
        }
    }
}

/// Turns the printable HTML estimate into JPEG bytes
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, html: &str) -> Result<Vec<u8>>;
}

pub const RASTERIZER_MISSING: &str =
    "JPG generation library is not loaded. Please wait a moment and try again.";

/// Writes estimates to disk in any supported format
#[derive(Default)]
pub struct Exporter {
    rasterizer: Option<Box<dyn Rasterizer>>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rasterizer(mut self, rasterizer: Box<dyn Rasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    /// Render `document` into the bytes of `format`
    pub fn render(&self, document: &EstimateDocument, format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Html => Ok(html::render(document).into_bytes()),
            ExportFormat::Text => Ok(text::render_summary(document).into_bytes()),
            ExportFormat::Xlsx => xlsx::write_to_buffer(document),
            ExportFormat::Jpg => {
                let Some(rasterizer) = &self.rasterizer else {
                    anyhow::bail!(RASTERIZER_MISSING);
                };
                rasterizer
                    .rasterize(&html::render(document))
                    .context("Sorry, there was an error generating the JPG image.")
            }
        }
    }

    /// Render and write to `path`; nothing is written when rendering fails
    pub fn export(&self, document: &EstimateDocument, format: ExportFormat, path: &Path) -> Result<()> {
        let bytes = self.render(document, format)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write estimate: {}", path.display()))?;
        info!("Exported {} estimate to {}", format, path.display());
        Ok(())
    }
}

/// Minimal escaping for text interpolated into HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
