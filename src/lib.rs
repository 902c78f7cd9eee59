//! Cost calculator builder: a typed form-element tree, a drag-and-drop
//! reducer over it, page derivation and a pricing engine, plus persistence
//! and estimate export around them.

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod drag;
pub mod export;
pub mod model;
pub mod pagination;
pub mod pricing;
pub mod routing;
pub mod session;
pub mod store;
pub mod tree;
pub mod ui;
pub mod upload;

pub use calculator::{Calculator, CalculatorDraft, CalculatorId, Status};
pub use drag::{DragDrop, DragEvent, DropZone};
pub use model::{Element, ElementId, ElementKind, ElementPatch, ElementType};
pub use pricing::{Quote, SummaryItem};
pub use session::EditorSession;
pub use store::{CalculatorStore, MemoryStore, SqliteStore};
