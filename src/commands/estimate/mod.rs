pub mod export;
pub mod preview;
pub mod quote;

pub use export::export_command;
pub use preview::preview_command;
pub use quote::quote_command;
