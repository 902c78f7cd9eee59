use super::EstimateDocument;

/// Plain-text estimate summary, as shown next to the calculator preview
pub fn render_summary(doc: &EstimateDocument) -> String {
    let mut out = String::new();
    out.push_str("Estimate Summary\n");
    out.push_str(&format!("{} / {}\n", doc.brand.company_name, doc.number));
    out.push('\n');

    if doc.items.is_empty() {
        out.push_str("Your estimate will appear here.\n");
        return out;
    }

    let width = doc
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .chain(["Subtotal".len()])
        .max()
        .unwrap_or(0);

    for item in &doc.items {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            item.label,
            item.display_amount(&doc.currency),
            width = width
        ));
    }

    out.push('\n');
    out.push_str(&format!("{:<width$}  {}\n", "Subtotal", doc.money(doc.subtotal), width = width));
    out.push_str(&format!(
        "{:<width$}  {}\n",
        format!("Tax ({}%)", doc.tax_rate),
        doc.money(doc.tax),
        width = width
    ));
    out.push_str(&format!("{:<width$}  {}\n", "Total", doc.money(doc.total), width = width));
    out
}
