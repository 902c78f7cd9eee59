pub mod logo;
pub mod set;
pub mod show;

pub use logo::{clear_logo_command, logo_command};
pub use set::set_command;
pub use show::show_command;
