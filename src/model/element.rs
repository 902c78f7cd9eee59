use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::palette;
use crate::pricing::parse_float;

/// Identity of a node, unique across every nesting level of a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ElementId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(ElementId)
            .with_context(|| format!("Invalid element id: '{}'", s))
    }
}

/// One node of the form tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub kind: ElementKind,
}

/// Variant payloads, tagged by `type` in serialized form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    Text {
        #[serde(default, deserialize_with = "de::string_or_number")]
        value: String,
    },
    Number {
        #[serde(default, deserialize_with = "de::string_or_number")]
        value: String,
        #[serde(default, deserialize_with = "de::number_or_zero")]
        cost: f64,
    },
    ValidatedInput {
        #[serde(default, deserialize_with = "de::string_or_number")]
        value: String,
        #[serde(default, rename = "validationType")]
        validation_type: ValidationType,
    },
    Select(Choice),
    ImageSelect(Choice),
    Radio(Choice),
    Slider(Slider),
    Date {
        #[serde(default, deserialize_with = "de::string_or_number")]
        value: String,
    },
    Time {
        #[serde(default, deserialize_with = "de::string_or_number")]
        value: String,
    },
    File {
        #[serde(default, deserialize_with = "de::string_or_number")]
        value: String,
    },
    Html {
        #[serde(default, rename = "htmlContent")]
        html_content: String,
    },
    Divider,
    Section,
    #[serde(rename = "pagebreak")]
    PageBreak,
    Group {
        #[serde(default)]
        children: Vec<Element>,
    },
}

/// Selected value plus option list shared by select, radio and image-select
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub value: String,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl Choice {
    /// Option whose value matches the current selection
    pub fn selected(&self) -> Option<&SelectOption> {
        if self.value.is_empty() {
            return None;
        }
        self.options.iter().find(|opt| opt.value == self.value)
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub value: String,
    #[serde(default, deserialize_with = "de::number_or_zero")]
    pub cost: f64,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, cost: f64) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            cost,
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub value: String,
    #[serde(default, deserialize_with = "de::number_or_zero")]
    pub cost: f64,
    #[serde(default, deserialize_with = "de::number_or_zero")]
    pub min: f64,
    #[serde(default = "default_slider_max", deserialize_with = "de::slider_max")]
    pub max: f64,
    #[serde(default = "default_slider_step", deserialize_with = "de::slider_step")]
    pub step: f64,
}

pub(crate) fn default_slider_max() -> f64 {
    100.0
}

pub(crate) fn default_slider_step() -> f64 {
    1.0
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            value: String::new(),
            cost: 0.0,
            min: 0.0,
            max: default_slider_max(),
            step: default_slider_step(),
        }
    }
}

impl Slider {
    /// Value shown to the user: the explicit value, or `min` until the slider is moved
    pub fn display_value(&self) -> String {
        if self.value.is_empty() {
            self.min.to_string()
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    #[default]
    Text,
    Email,
    Tel,
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static TEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s\-().]{4,}$").expect("valid phone pattern"));

impl ValidationType {
    /// Whether `input` is acceptable for this kind of field; empty input is always accepted
    pub fn accepts(&self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return true;
        }
        match self {
            ValidationType::Text => true,
            ValidationType::Email => EMAIL_PATTERN.is_match(input),
            ValidationType::Tel => TEL_PATTERN.is_match(input),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::Text => "text",
            ValidationType::Email => "email",
            ValidationType::Tel => "tel",
        }
    }
}

impl FromStr for ValidationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ValidationType::Text),
            "email" => Ok(ValidationType::Email),
            "tel" | "phone" => Ok(ValidationType::Tel),
            other => anyhow::bail!("Unknown validation type: '{}' (expected text, email or tel)", other),
        }
    }
}

/// Payload-free discriminant of [`ElementKind`], used by the palette and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    Text,
    Number,
    ValidatedInput,
    Select,
    ImageSelect,
    Radio,
    Slider,
    Date,
    Time,
    File,
    Html,
    Divider,
    Section,
    #[serde(rename = "pagebreak")]
    PageBreak,
    Group,
}

impl ElementType {
    pub const ALL: [ElementType; 15] = [
        ElementType::Text,
        ElementType::Number,
        ElementType::ValidatedInput,
        ElementType::Select,
        ElementType::ImageSelect,
        ElementType::Radio,
        ElementType::Slider,
        ElementType::Date,
        ElementType::Time,
        ElementType::File,
        ElementType::Html,
        ElementType::Divider,
        ElementType::Section,
        ElementType::PageBreak,
        ElementType::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Number => "number",
            ElementType::ValidatedInput => "validated-input",
            ElementType::Select => "select",
            ElementType::ImageSelect => "image-select",
            ElementType::Radio => "radio",
            ElementType::Slider => "slider",
            ElementType::Date => "date",
            ElementType::Time => "time",
            ElementType::File => "file",
            ElementType::Html => "html",
            ElementType::Divider => "divider",
            ElementType::Section => "section",
            ElementType::PageBreak => "pagebreak",
            ElementType::Group => "group",
        }
    }

    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            ElementType::Select | ElementType::ImageSelect | ElementType::Radio
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| anyhow::anyhow!("Unknown element type: '{}'", s))
    }
}

impl Element {
    /// Fresh element as dropped from the palette, with per-type defaults
    pub fn new(id: ElementId, element_type: ElementType) -> Self {
        let kind = match element_type {
            ElementType::Text => ElementKind::Text { value: String::new() },
            ElementType::Number => ElementKind::Number {
                value: String::new(),
                cost: 0.0,
            },
            ElementType::ValidatedInput => ElementKind::ValidatedInput {
                value: String::new(),
                validation_type: ValidationType::Text,
            },
            ElementType::Select => ElementKind::Select(seeded_choice()),
            ElementType::ImageSelect => ElementKind::ImageSelect(seeded_choice()),
            ElementType::Radio => ElementKind::Radio(seeded_choice()),
            ElementType::Slider => ElementKind::Slider(Slider::default()),
            ElementType::Date => ElementKind::Date { value: String::new() },
            ElementType::Time => ElementKind::Time { value: String::new() },
            ElementType::File => ElementKind::File { value: String::new() },
            ElementType::Html => ElementKind::Html {
                html_content: String::new(),
            },
            ElementType::Divider => ElementKind::Divider,
            ElementType::Section => ElementKind::Section,
            ElementType::PageBreak => ElementKind::PageBreak,
            ElementType::Group => ElementKind::Group { children: Vec::new() },
        };

        Self {
            id,
            label: palette::label_for(element_type).to_string(),
            kind,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ElementKind::Group { .. })
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self.kind, ElementKind::PageBreak)
    }

    /// Child list; `None` for every variant that cannot hold children
    pub fn children(&self) -> Option<&[Element]> {
        match &self.kind {
            ElementKind::Group { children } => Some(children),
            _ => None,
        }
    }

    /// Current input value; `None` for display-only variants
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { value }
            | ElementKind::Number { value, .. }
            | ElementKind::ValidatedInput { value, .. }
            | ElementKind::Date { value }
            | ElementKind::Time { value }
            | ElementKind::File { value } => Some(value),
            ElementKind::Select(choice)
            | ElementKind::ImageSelect(choice)
            | ElementKind::Radio(choice) => Some(&choice.value),
            ElementKind::Slider(slider) => Some(&slider.value),
            ElementKind::Html { .. }
            | ElementKind::Divider
            | ElementKind::Section
            | ElementKind::PageBreak
            | ElementKind::Group { .. } => None,
        }
    }

    pub fn choice(&self) -> Option<&Choice> {
        match &self.kind {
            ElementKind::Select(choice)
            | ElementKind::ImageSelect(choice)
            | ElementKind::Radio(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn choice_mut(&mut self) -> Option<&mut Choice> {
        match &mut self.kind {
            ElementKind::Select(choice)
            | ElementKind::ImageSelect(choice)
            | ElementKind::Radio(choice) => Some(choice),
            _ => None,
        }
    }

    /// Apply a field patch; returns false when the patch does not fit this variant
    pub fn apply(&mut self, patch: ElementPatch) -> bool {
        match (patch, &mut self.kind) {
            (ElementPatch::Label(label), _) => {
                self.label = label;
                true
            }
            (ElementPatch::Value(new_value), kind) => match kind {
                ElementKind::Text { value }
                | ElementKind::Number { value, .. }
                | ElementKind::ValidatedInput { value, .. }
                | ElementKind::Date { value }
                | ElementKind::Time { value }
                | ElementKind::File { value } => {
                    *value = new_value;
                    true
                }
                ElementKind::Select(choice)
                | ElementKind::ImageSelect(choice)
                | ElementKind::Radio(choice) => {
                    choice.value = new_value;
                    true
                }
                ElementKind::Slider(slider) => {
                    slider.value = new_value;
                    true
                }
                _ => false,
            },
            (ElementPatch::Cost(new_cost), ElementKind::Number { cost, .. }) => {
                *cost = new_cost;
                true
            }
            (ElementPatch::Cost(new_cost), ElementKind::Slider(slider)) => {
                slider.cost = new_cost;
                true
            }
            (ElementPatch::Min(min), ElementKind::Slider(slider)) => {
                slider.min = min;
                true
            }
            (ElementPatch::Max(max), ElementKind::Slider(slider)) => {
                slider.max = max;
                true
            }
            (ElementPatch::Step(step), ElementKind::Slider(slider)) => {
                slider.step = step;
                true
            }
            (
                ElementPatch::ValidationType(new_type),
                ElementKind::ValidatedInput {
                    validation_type, ..
                },
            ) => {
                *validation_type = new_type;
                true
            }
            (ElementPatch::HtmlContent(content), ElementKind::Html { html_content }) => {
                *html_content = content;
                true
            }
            (ElementPatch::Options(options), kind) => match kind {
                ElementKind::Select(choice)
                | ElementKind::ImageSelect(choice)
                | ElementKind::Radio(choice) => {
                    choice.options = options;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Like [`Element::apply`], but refuses edits that would break a selection's options.
    ///
    /// A selected value must name one of the options, and option values must
    /// be unique. Replacing the options clears a selection they no longer contain.
    pub fn try_apply(&mut self, patch: ElementPatch) -> Result<bool> {
        let replaces_options = matches!(patch, ElementPatch::Options(_));
        match (&patch, self.choice()) {
            (ElementPatch::Value(value), Some(choice)) if !value.is_empty() && !choice.has_option(value) => {
                anyhow::bail!("Element {} has no option with value '{}'", self.id, value);
            }
            (ElementPatch::Options(options), _) => check_unique_values(options)?,
            _ => {}
        }

        if !self.apply(patch) {
            return Ok(false);
        }
        if replaces_options {
            if let Some(choice) = self.choice_mut() {
                if !choice.value.is_empty() && !choice.has_option(&choice.value) {
                    choice.value.clear();
                }
            }
        }
        Ok(true)
    }

    /// Validation message for a validated input whose value does not match its type
    pub fn validation_error(&self) -> Option<String> {
        match &self.kind {
            ElementKind::ValidatedInput {
                value,
                validation_type,
            } if !validation_type.accepts(value) => Some(format!(
                "'{}' is not a valid {} for '{}'",
                value,
                validation_type.as_str(),
                self.label
            )),
            _ => None,
        }
    }
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Text { .. } => ElementType::Text,
            ElementKind::Number { .. } => ElementType::Number,
            ElementKind::ValidatedInput { .. } => ElementType::ValidatedInput,
            ElementKind::Select(_) => ElementType::Select,
            ElementKind::ImageSelect(_) => ElementType::ImageSelect,
            ElementKind::Radio(_) => ElementType::Radio,
            ElementKind::Slider(_) => ElementType::Slider,
            ElementKind::Date { .. } => ElementType::Date,
            ElementKind::Time { .. } => ElementType::Time,
            ElementKind::File { .. } => ElementType::File,
            ElementKind::Html { .. } => ElementType::Html,
            ElementKind::Divider => ElementType::Divider,
            ElementKind::Section => ElementType::Section,
            ElementKind::PageBreak => ElementType::PageBreak,
            ElementKind::Group { .. } => ElementType::Group,
        }
    }
}

fn seeded_choice() -> Choice {
    Choice {
        value: String::new(),
        options: vec![SelectOption::new("Option 1", "opt1", 10.0)],
    }
}

/// A single field edit, the typed form of `update(tree, id, key, value)`
#[derive(Debug, Clone, PartialEq)]
pub enum ElementPatch {
    Label(String),
    Value(String),
    Cost(f64),
    Min(f64),
    Max(f64),
    Step(f64),
    ValidationType(ValidationType),
    HtmlContent(String),
    Options(Vec<SelectOption>),
}

impl ElementPatch {
    /// Build a patch from a property name and its raw text
    pub fn parse(key: &str, raw: &str) -> Result<Self> {
        let patch = match key {
            "label" => ElementPatch::Label(raw.to_string()),
            "value" => ElementPatch::Value(raw.to_string()),
            "cost" | "price" => ElementPatch::Cost(parse_cost(raw)?),
            "min" => ElementPatch::Min(parse_setting(key, raw)?),
            "max" => ElementPatch::Max(parse_setting(key, raw)?),
            "step" => ElementPatch::Step(parse_setting(key, raw)?),
            "validationType" | "validation-type" => ElementPatch::ValidationType(raw.parse()?),
            "htmlContent" | "html-content" | "html" => ElementPatch::HtmlContent(raw.to_string()),
            "options" => {
                let options: Vec<SelectOption> = serde_json::from_str(raw)
                    .context("Options must be a JSON array of {label, value, cost, imageUrl}")?;
                check_unique_values(&options)?;
                if let Some(option) = options.iter().find(|o| !o.cost.is_finite()) {
                    anyhow::bail!("Option '{}' has a cost that is not a finite number", option.value);
                }
                ElementPatch::Options(options)
            }
            _ => anyhow::bail!("Unknown element property: '{}'", key),
        };
        Ok(patch)
    }
}

fn parse_setting(key: &str, raw: &str) -> Result<f64> {
    let value = parse_float(raw);
    if !value.is_finite() {
        anyhow::bail!("Invalid number for '{}': '{}'", key, raw);
    }
    Ok(value)
}

/// Unparsable costs become 0; infinite ones cannot be stored and are refused
pub fn parse_cost(raw: &str) -> Result<f64> {
    let cost = parse_float(raw);
    if cost.is_nan() {
        return Ok(0.0);
    }
    if cost.is_infinite() {
        anyhow::bail!("Invalid cost: '{}'. Must be a finite number.", raw);
    }
    Ok(cost)
}

/// Option values identify the answer, so they must differ within one element
pub fn check_unique_values(options: &[SelectOption]) -> Result<()> {
    for (index, option) in options.iter().enumerate() {
        if options[..index].iter().any(|earlier| earlier.value == option.value) {
            anyhow::bail!("Duplicate option value '{}'", option.value);
        }
    }
    Ok(())
}

mod de {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    /// Accepts a string, a number or null; saved records may hold quantities as numbers
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumber;

        impl<'de> Visitor<'de> for StringOrNumber {
            type Value = String;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, a number or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
                Ok(if v { "true".to_string() } else { String::new() })
            }

            fn visit_none<E: de::Error>(self) -> Result<String, E> {
                Ok(String::new())
            }

            fn visit_unit<E: de::Error>(self) -> Result<String, E> {
                Ok(String::new())
            }
        }

        deserializer.deserialize_any(StringOrNumber)
    }

    /// Accepts a number, a numeric string or null (null and garbage become 0)
    pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(finite_number(deserializer)?.unwrap_or(0.0))
    }

    pub fn slider_max<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(finite_number(deserializer)?.unwrap_or_else(super::default_slider_max))
    }

    pub fn slider_step<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(finite_number(deserializer)?.unwrap_or_else(super::default_slider_step))
    }

    /// `None` for null, garbage and non-finite numbers
    fn finite_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FiniteNumber;

        impl<'de> Visitor<'de> for FiniteNumber {
            type Value = Option<f64>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, a numeric string or null")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<f64>, E> {
                Ok(Some(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<f64>, E> {
                Ok(Some(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<f64>, E> {
                Ok(Some(v).filter(|v| v.is_finite()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<f64>, E> {
                Ok(Some(crate::pricing::parse_float(v)).filter(|v| v.is_finite()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Option<f64>, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Option<f64>, E> {
                Ok(None)
            }
        }

        deserializer.deserialize_any(FiniteNumber)
    }
}
