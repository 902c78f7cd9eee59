//! Persistence boundary for saved calculators.
//!
//! The editor only ever talks to [`CalculatorStore`]; whatever sits behind it
//! treats the element tree as an opaque JSON payload.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::calculator::{Calculator, CalculatorDraft, CalculatorId, Status};
use crate::model::now_millis;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait CalculatorStore: Send + Sync {
    /// Insert or replace; returns the id the record is stored under.
    ///
    /// Drafts without an id get a fresh timestamp-derived one. An existing
    /// record keeps its creation date and submission count, and every save
    /// leaves the record in `Draft` status.
    async fn save(&self, draft: CalculatorDraft) -> Result<CalculatorId>;

    /// Every stored calculator, ordered by id
    async fn load_all(&self) -> Result<Vec<Calculator>>;

    async fn get(&self, id: CalculatorId) -> Result<Option<Calculator>>;

    /// Returns false when nothing was stored under `id`
    async fn delete(&self, id: CalculatorId) -> Result<bool>;

    /// Returns false when nothing was stored under `id`
    async fn set_status(&self, id: CalculatorId, status: Status) -> Result<bool>;
}

/// Millisecond timestamp, bumped past the largest id already taken
pub fn new_calculator_id(largest: Option<CalculatorId>) -> CalculatorId {
    let floor = largest.map(|id| id.0.saturating_add(1)).unwrap_or(1);
    CalculatorId(floor.max(now_millis()))
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
