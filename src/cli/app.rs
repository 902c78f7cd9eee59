use super::commands::{BrandCommands, OptionCommands, SettingsCommands};
use crate::calculator::CalculatorId;
use crate::model::{ElementId, ElementType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc-builder")]
#[command(about = "Build cost calculator forms, price them and export estimates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List saved calculators
    List,
    /// Create an empty calculator
    New {
        /// Calculator name (prompted for when omitted)
        name: Option<String>,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Show a calculator's element tree and current total
    Show {
        /// Calculator id
        id: CalculatorId,
    },
    /// List the element types that can be added
    Palette,
    /// Add an element from the palette
    Add {
        /// Calculator id
        id: CalculatorId,
        /// Element type (text, number, select, group, pagebreak, ...)
        element_type: ElementType,
        /// Group to drop into (root when omitted)
        #[arg(short, long)]
        group: Option<ElementId>,
        /// Label (defaults to the palette label)
        #[arg(short, long)]
        label: Option<String>,
        /// Initial properties, as key=value
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },
    /// Move an element to the root or into a group
    Move {
        /// Calculator id
        id: CalculatorId,
        /// Element to move
        element: ElementId,
        /// Destination group (root when omitted)
        #[arg(short, long)]
        group: Option<ElementId>,
    },
    /// Remove an element and everything nested in it
    Remove {
        /// Calculator id
        id: CalculatorId,
        /// Element to remove
        element: ElementId,
    },
    /// Set one element property
    Set {
        /// Calculator id
        id: CalculatorId,
        /// Element to edit
        element: ElementId,
        /// Property (label, value, cost, min, max, step, validationType, htmlContent, options)
        key: String,
        /// New value
        value: String,
    },
    /// Edit the options of a select, radio or image select element
    Option(OptionCommands),
    /// Rename a calculator
    Rename {
        /// Calculator id
        id: CalculatorId,
        /// New name
        name: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Price a calculator with the given answers
    Quote {
        /// Calculator id
        id: CalculatorId,
        /// Answers, as element-id=value
        #[arg(short, long = "value", value_name = "ELEMENT=VALUE")]
        values: Vec<String>,
    },
    /// Preview one page of the form as an end user sees it
    Preview {
        /// Calculator id
        id: CalculatorId,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Answers, as element-id=value
        #[arg(short, long = "value", value_name = "ELEMENT=VALUE")]
        values: Vec<String>,
    },
    /// Export an estimate document
    Export {
        /// Calculator id
        id: CalculatorId,
        /// Output format: html, xlsx, jpg or text
        #[arg(short, long, default_value = "html")]
        format: String,
        /// Output file (estimate-<timestamp>.<ext> when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Answers, as element-id=value
        #[arg(short, long = "value", value_name = "ELEMENT=VALUE")]
        values: Vec<String>,
    },
    /// Publish a calculator
    Publish {
        /// Calculator id
        id: CalculatorId,
    },
    /// Move a calculator back to draft
    Unpublish {
        /// Calculator id
        id: CalculatorId,
    },
    /// Print the public link of a calculator
    Share {
        /// Calculator id
        id: CalculatorId,
    },
    /// Open a public calculator path such as /calc/1
    Open {
        /// Path or full share link
        path: String,
    },
    /// Delete a calculator
    Delete {
        /// Calculator id
        id: CalculatorId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show database location, schema version and calculator count
    Info,
    /// Application settings management
    Settings(SettingsCommands),
    /// Company branding used on exported estimates
    Brand(BrandCommands),
}
