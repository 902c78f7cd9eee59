//! Form element model: element variants, palette and id generation

mod element;
mod id;
mod palette;

pub use element::{
    Choice, Element, ElementId, ElementKind, ElementPatch, ElementType, SelectOption, Slider,
    ValidationType, check_unique_values, parse_cost,
};
pub use id::{IdGenerator, now_millis};
pub use palette::{PALETTE, PaletteCategory, PaletteEntry, label_for};
