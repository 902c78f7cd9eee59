use crate::calculator::CalculatorId;
use crate::model::ElementId;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct OptionCommands {
    #[command(subcommand)]
    pub command: OptionSubcommands,
}

#[derive(Subcommand)]
pub enum OptionSubcommands {
    /// Append a "New Option" to the element
    Add {
        /// Calculator id
        id: CalculatorId,
        /// Selection element
        element: ElementId,
    },
    /// Change an option's label, cost or imageUrl
    Set {
        /// Calculator id
        id: CalculatorId,
        /// Selection element
        element: ElementId,
        /// Option index, starting at 0
        index: usize,
        /// Property: label, cost or imageUrl
        key: String,
        /// New value
        value: String,
    },
    /// Remove an option
    Remove {
        /// Calculator id
        id: CalculatorId,
        /// Selection element
        element: ElementId,
        /// Option index, starting at 0
        index: usize,
    },
    /// Attach an image file to an option
    Image {
        /// Calculator id
        id: CalculatorId,
        /// Selection element
        element: ElementId,
        /// Option index, starting at 0
        index: usize,
        /// Image file
        file: PathBuf,
    },
}
