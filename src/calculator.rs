use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Choice, Element, ElementId, ElementKind, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatorId(pub u64);

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalculatorId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(CalculatorId)
            .with_context(|| format!("Invalid calculator id: '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Draft,
    Published,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Published => "Published",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Draft" => Ok(Status::Draft),
            "Published" => Ok(Status::Published),
            other => anyhow::bail!("Unknown calculator status: '{}'", other),
        }
    }
}

/// A named, saved form: the unit of persistence and sharing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    pub id: CalculatorId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub submissions: u32,
    #[serde(default)]
    pub status: Status,
}

/// What the editor hands to the store; `id` is `None` for a calculator never saved
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorDraft {
    pub id: Option<CalculatorId>,
    pub name: String,
    pub description: String,
    pub elements: Vec<Element>,
}

impl CalculatorDraft {
    /// Materialize the stored record, carrying over bookkeeping from `existing`
    pub fn into_record(self, id: CalculatorId, existing: Option<&Calculator>, today: NaiveDate) -> Calculator {
        Calculator {
            id,
            name: self.name,
            description: self.description,
            elements: self.elements,
            created_at: existing.map(|c| c.created_at).unwrap_or(today),
            submissions: existing.map(|c| c.submissions).unwrap_or(0),
            status: Status::Draft,
        }
    }
}

/// The example calculator a fresh store starts with
pub fn seed_calculator() -> Calculator {
    Calculator {
        id: CalculatorId(1),
        name: "Website Development Calculator".to_string(),
        description: "Calculate costs for web development projects.".to_string(),
        elements: vec![
            Element {
                id: ElementId(1625100000001),
                label: "Type of Website".to_string(),
                kind: ElementKind::Select(Choice {
                    value: "brochure".to_string(),
                    options: vec![
                        SelectOption::new("Brochure", "brochure", 500.0),
                        SelectOption::new("E-commerce", "e-commerce", 2000.0),
                    ],
                }),
            },
            Element {
                id: ElementId(1625100000002),
                label: "Number of Pages".to_string(),
                kind: ElementKind::Number {
                    value: "5".to_string(),
                    cost: 150.0,
                },
            },
        ],
        created_at: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap_or_default(),
        submissions: 45,
        status: Status::Published,
    }
}
