//! Pricing engine: one depth-first fold producing the running total and the
//! summary lines of an estimate.
//!
//! The result is recomputed from the whole tree on every call; nothing is cached.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::model::{Element, ElementId, ElementKind, ElementType};

/// One row of the estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryItem {
    pub element_id: ElementId,
    pub element_type: ElementType,
    pub label: String,
    /// Raw element value, shown when the line carries no amount
    pub value: String,
    pub description: Option<String>,
    pub qty: String,
    pub rate: f64,
    pub amount: f64,
}

impl SummaryItem {
    /// Right-hand column of the summary panel: the amount when positive, otherwise the raw value
    pub fn display_amount(&self, currency: &str) -> String {
        if self.amount > 0.0 {
            format!("{}{:.2}", currency, self.amount)
        } else {
            self.value.clone()
        }
    }
}

/// Total plus summary lines, both in tree order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Quote {
    pub total: f64,
    pub items: Vec<SummaryItem>,
}

impl Quote {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// False when a non-numeric quantity turned the total into NaN
    pub fn is_valid(&self) -> bool {
        !self.total.is_nan()
    }
}

/// Price the whole tree
pub fn quote(tree: &[Element]) -> Quote {
    let mut quote = Quote::default();
    fold(tree, &mut quote);
    quote
}

/// Total cost only
pub fn total(tree: &[Element]) -> f64 {
    quote(tree).total
}

fn fold(list: &[Element], quote: &mut Quote) {
    for element in list {
        let (contribution, item) = price(element);
        quote.total += contribution;
        if let Some(item) = item {
            quote.items.push(item);
        }
        if let Some(children) = element.children() {
            fold(children, quote);
        }
    }
}

/// Contribution of a single node (children excluded) and its summary line, if any
fn price(element: &Element) -> (f64, Option<SummaryItem>) {
    let line = |value: &str, description: Option<String>, qty: String, rate: f64, amount: f64| SummaryItem {
        element_id: element.id,
        element_type: element.element_type(),
        label: element.label.clone(),
        value: value.to_string(),
        description,
        qty,
        rate,
        amount,
    };

    match &element.kind {
        ElementKind::Number { value, cost } if !value.is_empty() => {
            let amount = parse_float(value) * cost;
            (amount, Some(line(value.as_str(), None, value.clone(), *cost, amount)))
        }
        ElementKind::Slider(slider) if !slider.value.is_empty() => {
            (parse_float(&slider.value) * slider.cost, None)
        }
        ElementKind::Select(choice) | ElementKind::ImageSelect(choice) | ElementKind::Radio(choice) => {
            match choice.selected() {
                Some(option) => (
                    option.cost,
                    Some(line(
                        choice.value.as_str(),
                        Some(option.label.clone()),
                        "1".to_string(),
                        option.cost,
                        option.cost,
                    )),
                ),
                None => (0.0, None),
            }
        }
        ElementKind::Text { value } | ElementKind::ValidatedInput { value, .. } if !value.is_empty() => {
            (0.0, Some(line(value.as_str(), Some(value.clone()), "1".to_string(), 0.0, 0.0)))
        }
        _ => (0.0, None),
    }
}

/// Ids of number and slider elements whose value is set but does not parse as a number
pub fn non_numeric_inputs(tree: &[Element]) -> Vec<ElementId> {
    fn collect(list: &[Element], out: &mut Vec<ElementId>) {
        for element in list {
            let raw = match &element.kind {
                ElementKind::Number { value, .. } => Some(value.as_str()),
                ElementKind::Slider(slider) => Some(slider.value.as_str()),
                _ => None,
            };
            if let Some(raw) = raw {
                if !raw.is_empty() && parse_float(raw).is_nan() {
                    out.push(element.id);
                }
            }
            if let Some(children) = element.children() {
                collect(children, out);
            }
        }
    }

    let mut out = Vec::new();
    collect(tree, &mut out);
    out
}

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)").expect("valid numeric prefix pattern")
});

/// Lenient number parsing: leading whitespace is skipped and the longest numeric
/// prefix wins (`"3 pages"` is 3). Input without a numeric prefix yields NaN.
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let Some(found) = NUMERIC_PREFIX.find(trimmed) else {
        return f64::NAN;
    };
    let text = found.as_str();
    match text.trim_start_matches(['+', '-']) {
        "Infinity" => {
            if text.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
        _ => text.parse().unwrap_or(f64::NAN),
    }
}
