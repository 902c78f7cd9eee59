//! Option editing for select, radio and image select elements

use anyhow::Result;

use crate::model::{Choice, ElementId};
use crate::session::EditorSession;

pub mod add;
pub mod image;
pub mod remove;
pub mod set;

pub use add::add_command;
pub use image::image_command;
pub use remove::remove_command;
pub use set::set_command;

fn choice_of(session: &EditorSession, element: ElementId) -> Result<&Choice> {
    let Some(target) = session.find(element) else {
        anyhow::bail!("Element '{}' not found", element);
    };
    match target.choice() {
        Some(choice) => Ok(choice),
        None => anyhow::bail!("Element {} is a {}, which has no options", element, target.element_type()),
    }
}

fn check_index(session: &EditorSession, element: ElementId, index: usize) -> Result<()> {
    let count = choice_of(session, element)?.options.len();
    if index >= count {
        anyhow::bail!("Element {} has no option {} ({} option(s))", element, index, count);
    }
    Ok(())
}
