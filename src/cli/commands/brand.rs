use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct BrandCommands {
    #[command(subcommand)]
    pub command: BrandSubcommands,
}

#[derive(Subcommand)]
pub enum BrandSubcommands {
    /// Show brand settings
    Show,
    /// Set company-name, primary-color or secondary-color
    Set {
        /// Brand setting name
        name: String,
        /// New value
        value: String,
    },
    /// Use an image file as the company logo
    Logo {
        /// Image file
        file: PathBuf,
    },
    /// Remove the company logo
    ClearLogo,
}
