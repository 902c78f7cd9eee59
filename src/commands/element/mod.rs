pub mod add;
pub mod move_element;
pub mod palette;
pub mod remove;
pub mod set;

pub use add::add_command;
pub use move_element::move_command;
pub use palette::palette_command;
pub use remove::remove_command;
pub use set::set_command;
