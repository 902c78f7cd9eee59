//! Printable A4 estimate; opening it in a browser triggers the print dialog.

use super::{EstimateDocument, escape_html};

const STYLE: &str = r#"
      @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');
      @page { size: A4; margin: 0; }
      body { font-family: 'Inter', sans-serif; margin: 0; color: #111827; background-color: #ffffff; -webkit-print-color-adjust: exact; }
      .page { width: 210mm; min-height: 297mm; padding: 40px; box-sizing: border-box; }
      .header { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 40px; }
      .header-left .logo { height: 30px; width: auto; margin-bottom: 20px; }
      .header-left h1 { font-size: 16px; font-weight: 600; margin: 0 0 5px 0; }
      .header-left p, .header-right p { margin: 0; font-size: 14px; color: #6B7280; }
      .header-right { text-align: right; }
      .header-right h2 { font-size: 28px; font-weight: 700; margin: 0 0 5px 0; letter-spacing: 0.025em; }
      .details { display: flex; justify-content: space-between; margin-bottom: 40px; }
      .details .section h3, .notes h3 { font-size: 12px; color: #6B7280; font-weight: 600; margin: 0 0 10px 0; text-transform: uppercase; letter-spacing: 0.05em; }
      .details .section p { margin: 0; font-size: 14px; font-weight: 500; line-height: 1.6; }
      .items-table { width: 100%; border-collapse: collapse; }
      .items-table th { padding: 10px 0; text-align: left; font-size: 12px; font-weight: 600; color: #6B7280; text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid #e5e7eb; }
      .items-table td { padding: 15px 0; font-size: 14px; border-bottom: 1px solid #e5e7eb; }
      .items-table .item-name { font-weight: 600; color: #111827; }
      .items-table .item-desc { font-size: 13px; color: #6B7280; }
      .items-table .align-right { text-align: right; }
      .summary { display: flex; justify-content: flex-end; margin-top: 20px; }
      .summary-box { width: 280px; }
      .summary-row { display: flex; justify-content: space-between; padding: 8px 0; font-size: 14px; }
      .summary-row.total { font-weight: 600; border-top: 1px solid #e5e7eb; padding-top: 15px; margin-top: 5px; }
      .amount-due { background-color: #F3F4F6; border: 1px solid #E5E7EB; border-radius: 8px; padding: 15px; margin-top: 20px; display: flex; justify-content: space-between; align-items: center; }
      .amount-due span { font-size: 16px; font-weight: 600; }
      .notes { margin-top: 40px; }
      .notes p { margin: 0; font-size: 14px; color: #6B7280; }
"#;

pub fn render(doc: &EstimateDocument) -> String {
    let company = escape_html(&doc.brand.company_name);
    let brand_block = match &doc.brand.company_logo {
        Some(logo) => format!(r#"<img src="{}" alt="Logo" class="logo">"#, escape_html(logo)),
        None => format!("<h1>{}</h1>", company),
    };

    let rows: String = doc
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<tr><td><div class="item-name">{}</div><div class="item-desc">{}</div></td><td class="align-right">{}</td><td class="align-right">{}</td><td class="align-right">{}</td></tr>"#,
                escape_html(&item.label),
                escape_html(item.description.as_deref().unwrap_or_default()),
                escape_html(&item.qty),
                escape_html(&doc.money(item.rate)),
                escape_html(&doc.money(item.amount)),
            )
        })
        .collect();

    let subtotal = escape_html(&doc.money(doc.subtotal));
    let tax = escape_html(&doc.money(doc.tax));
    let total = escape_html(&doc.money(doc.total));

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Estimate - {company}</title>
    <style>{style}
      .amount-due .total-price {{ font-size: 20px; font-weight: 700; color: {primary}; }}
    </style>
  </head>
  <body>
    <div class="page">
      <div class="header">
        <div class="header-left">
          {brand_block}
        </div>
        <div class="header-right">
          <h2>ESTIMATE</h2>
          <p>#{number}</p>
        </div>
      </div>
      <div class="details">
        <div class="section"><h3>Bill To</h3><p>Your Client's Name</p><p>Client's Address</p><p>client@email.com</p></div>
        <div class="section" style="text-align: right;"><h3>Estimate Date</h3><p>{date}</p><h3 style="margin-top: 20px;">Valid Until</h3><p>{valid_until}</p></div>
      </div>
      <table class="items-table">
        <thead><tr><th>Description</th><th class="align-right">Qty</th><th class="align-right">Rate</th><th class="align-right">Amount</th></tr></thead>
        <tbody>{rows}</tbody>
      </table>
      <div class="summary"><div class="summary-box"><div class="summary-row"><span>Subtotal</span><span>{subtotal}</span></div><div class="summary-row"><span>Tax ({tax_rate}%)</span><span>{tax}</span></div><div class="summary-row total"><span>Total</span><span>{total}</span></div><div class="amount-due"><span>Amount Due</span><span class="total-price">{total}</span></div></div></div>
      <div class="notes"><h3>Notes</h3><p>Thank you for your business! We appreciate your prompt payment.</p></div>
    </div>
    <script>window.onload = () => window.print();</script>
  </body>
</html>
"#,
        company = company,
        style = STYLE,
        primary = escape_html(&doc.brand.primary_color),
        brand_block = brand_block,
        number = escape_html(&doc.number),
        date = EstimateDocument::format_date(doc.date),
        valid_until = EstimateDocument::format_date(doc.valid_until),
        rows = rows,
        subtotal = subtotal,
        tax_rate = doc.tax_rate,
        tax = tax,
        total = total,
    )
}
