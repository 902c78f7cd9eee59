pub mod delete;
pub mod info;
pub mod list;
pub mod new;
pub mod open;
pub mod publish;
pub mod rename;
pub mod share;
pub mod show;

pub use delete::delete_command;
pub use info::info_command;
pub use list::list_command;
pub use new::new_command;
pub use open::open_command;
pub use publish::{publish_command, unpublish_command};
pub use rename::rename_command;
pub use share::share_command;
pub use show::show_command;
