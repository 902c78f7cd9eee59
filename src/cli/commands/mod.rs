pub mod brand;
pub mod option;
pub mod settings;

pub use brand::{BrandCommands, BrandSubcommands};
pub use option::{OptionCommands, OptionSubcommands};
pub use settings::{SettingsCommands, SettingsSubcommands};
