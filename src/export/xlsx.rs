//! Spreadsheet estimate: one "Estimate" worksheet

use anyhow::{Context, Result};
use rust_xlsxwriter::*;
use std::path::Path;

use super::EstimateDocument;

pub fn write(doc: &EstimateDocument, path: &Path) -> Result<()> {
    let mut workbook = build(doc)?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
    Ok(())
}

pub fn write_to_buffer(doc: &EstimateDocument) -> Result<Vec<u8>> {
    let mut workbook = build(doc)?;
    workbook
        .save_to_buffer()
        .context("Failed to build Excel workbook")
}

fn build(doc: &EstimateDocument) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Estimate")?;

    let accent = Color::RGB(hex_color(&doc.brand.primary_color).unwrap_or(0x6366F1));
    let money = format!("\"{}\"#,##0.00", doc.currency.replace('"', ""));

    let title_format = Format::new().set_bold().set_font_size(16);
    let label_format = Format::new().set_bold().set_font_color(Color::RGB(0x6B7280));
    let header_format = Format::new()
        .set_bold()
        .set_background_color(accent)
        .set_font_color(Color::White);
    let money_format = Format::new().set_num_format(&money);
    let total_format = Format::new().set_bold().set_num_format(&money);
    let desc_format = Format::new().set_font_color(Color::RGB(0x6B7280));

    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(1, 10)?;
    sheet.set_column_width(2, 14)?;
    sheet.set_column_width(3, 14)?;

    sheet.write_string_with_format(0, 0, &doc.brand.company_name, &title_format)?;
    sheet.write_string_with_format(0, 3, "ESTIMATE", &title_format)?;
    sheet.write_string(1, 3, &format!("#{}", doc.number))?;

    sheet.write_string_with_format(3, 0, "Estimate Date", &label_format)?;
    sheet.write_string(3, 1, &EstimateDocument::format_date(doc.date))?;
    sheet.write_string_with_format(4, 0, "Valid Until", &label_format)?;
    sheet.write_string(4, 1, &EstimateDocument::format_date(doc.valid_until))?;

    let header_row = 6;
    for (col, title) in ["Description", "Qty", "Rate", "Amount"].iter().enumerate() {
        sheet.write_string_with_format(header_row, col as u16, *title, &header_format)?;
    }

    let mut row = header_row + 1;
    for item in &doc.items {
        sheet.write_string(row, 0, &item.label)?;
        sheet.write_string(row, 1, &item.qty)?;
        write_money(sheet, row, 2, item.rate, &money_format)?;
        write_money(sheet, row, 3, item.amount, &money_format)?;
        row += 1;
        if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
            sheet.write_string_with_format(row, 0, description, &desc_format)?;
            row += 1;
        }
    }

    row += 1;
    sheet.write_string(row, 2, "Subtotal")?;
    write_money(sheet, row, 3, doc.subtotal, &money_format)?;
    row += 1;
    sheet.write_string(row, 2, &format!("Tax ({}%)", doc.tax_rate))?;
    write_money(sheet, row, 3, doc.tax, &money_format)?;
    row += 1;
    sheet.write_string_with_format(row, 2, "Total", &label_format)?;
    write_money(sheet, row, 3, doc.total, &total_format)?;

    Ok(workbook)
}

/// Non-finite amounts (a non-numeric quantity) are written as text
fn write_money(sheet: &mut Worksheet, row: u32, col: u16, amount: f64, format: &Format) -> Result<()> {
    if amount.is_finite() {
        sheet.write_number_with_format(row, col, amount, format)?;
    } else {
        sheet.write_string(row, col, &amount.to_string())?;
    }
    Ok(())
}

fn hex_color(color: &str) -> Option<u32> {
    let hex = color.trim().trim_start_matches('#');
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok(),
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok()
        }
        _ => None,
    }
}
