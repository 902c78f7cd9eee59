//! Plain-text views of an element tree: the editor outline and the form preview.

use crate::model::{Choice, Element, ElementKind};

const INDENT: &str = "    ";

/// Editor view: every node with its id, type and editable state
pub fn render_outline(tree: &[Element], currency: &str) -> String {
    let mut out = String::new();
    if tree.is_empty() {
        out.push_str("Drag and drop elements here\n");
        return out;
    }
    outline_into(&mut out, tree, 0, currency);
    out
}

fn outline_into(out: &mut String, list: &[Element], depth: usize, currency: &str) {
    let pad = INDENT.repeat(depth);
    for element in list {
        out.push_str(&format!("{}[{}] {} \"{}\"", pad, element.id, element.element_type(), element.label));
        match &element.kind {
            ElementKind::Number { value, cost } => {
                out.push_str(&format!(" = {} x {}{:.2}", display(value), currency, cost));
            }
            ElementKind::Slider(slider) => {
                out.push_str(&format!(
                    " = {} ({}..{} step {}) x {}{:.2}",
                    slider.display_value(),
                    slider.min,
                    slider.max,
                    slider.step,
                    currency,
                    slider.cost
                ));
            }
            ElementKind::ValidatedInput { value, validation_type } => {
                out.push_str(&format!(" ({}) = {}", validation_type.as_str(), display(value)));
            }
            ElementKind::Html { html_content } => {
                out.push_str(&format!(" = {} chars", html_content.chars().count()));
            }
            _ => {
                if let Some(value) = element.value().filter(|_| element.choice().is_none()) {
                    out.push_str(&format!(" = {}", display(value)));
                }
            }
        }
        out.push('\n');

        if let Some(choice) = element.choice() {
            options_into(out, choice, &format!("{}{}", pad, INDENT), currency, true);
        }
        if let Some(children) = element.children() {
            outline_into(out, children, depth + 1, currency);
        }
    }
}

fn options_into(out: &mut String, choice: &Choice, pad: &str, currency: &str, show_values: bool) {
    for (index, option) in choice.options.iter().enumerate() {
        let marker = if !choice.value.is_empty() && option.value == choice.value {
            "(*)"
        } else {
            "( )"
        };
        out.push_str(&format!("{}{} ", pad, marker));
        if show_values {
            out.push_str(&format!("{}. {} [{}]", index, option.label, option.value));
        } else {
            out.push_str(&option.label);
        }
        if option.cost != 0.0 {
            out.push_str(&format!(" {}{:.2}", currency, option.cost));
        }
        if show_values && option.image_url.is_some() {
            out.push_str(" +image");
        }
        out.push('\n');
    }
}

/// End-user view of one page of the form
pub fn render_page(page: &[&Element], currency: &str) -> String {
    let mut out = String::new();
    if page.is_empty() {
        out.push_str("This page is empty.\n");
        return out;
    }
    for element in page {
        preview_into(&mut out, element, 0, currency);
    }
    out
}

fn preview_into(out: &mut String, element: &Element, depth: usize, currency: &str) {
    let pad = INDENT.repeat(depth);
    match &element.kind {
        ElementKind::Divider => out.push_str(&format!("{}{}\n", pad, "-".repeat(40))),
        ElementKind::Section => out.push('\n'),
        ElementKind::PageBreak => {}
        ElementKind::Html { html_content } => {
            for line in html_content.lines() {
                out.push_str(&format!("{}{}\n", pad, line));
            }
        }
        ElementKind::Group { children } => {
            out.push_str(&format!("{}{}\n", pad, element.label));
            for child in children {
                preview_into(out, child, depth + 1, currency);
            }
        }
        ElementKind::Select(choice) | ElementKind::ImageSelect(choice) | ElementKind::Radio(choice) => {
            out.push_str(&format!("{}{}\n", pad, element.label));
            options_into(out, choice, &format!("{}{}", pad, INDENT), currency, false);
        }
        ElementKind::Slider(slider) => {
            out.push_str(&format!(
                "{}{}: {} [{} - {}]\n",
                pad,
                element.label,
                slider.display_value(),
                slider.min,
                slider.max
            ));
        }
        ElementKind::ValidatedInput { value, validation_type } => {
            out.push_str(&format!("{}{} ({}): {}\n", pad, element.label, validation_type.as_str(), display(value)));
            if let Some(error) = element.validation_error() {
                out.push_str(&format!("{}! {}\n", pad, error));
            }
        }
        _ => {
            let value = element.value().unwrap_or_default();
            out.push_str(&format!("{}{}: {}\n", pad, element.label, display(value)));
        }
    }
}

fn display(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}
