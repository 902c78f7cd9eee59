use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{CalculatorStore, new_calculator_id, today};
use crate::calculator::{Calculator, CalculatorDraft, CalculatorId, Status, seed_calculator};

/// Process-local store, used by tests and one-shot sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<CalculatorId, Calculator>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the example calculator, like a first launch
    pub fn seeded() -> Self {
        Self::from_records([seed_calculator()])
    }

    pub fn from_records(records: impl IntoIterator<Item = Calculator>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|c| (c.id, c)).collect()),
        }
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("Calculator store lock poisoned")
}

#[async_trait]
impl CalculatorStore for MemoryStore {
    async fn save(&self, draft: CalculatorDraft) -> Result<CalculatorId> {
        let mut records = self.records.write().map_err(poisoned)?;
        let id = match draft.id {
            Some(id) => id,
            None => new_calculator_id(records.keys().next_back().copied()),
        };
        let record = draft.into_record(id, records.get(&id), today());
        info!("Saved calculator {} ('{}')", id, record.name);
        records.insert(id, record);
        Ok(id)
    }

    async fn load_all(&self) -> Result<Vec<Calculator>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: CalculatorId) -> Result<Option<Calculator>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&id).cloned())
    }

    async fn delete(&self, id: CalculatorId) -> Result<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        let removed = records.remove(&id).is_some();
        debug!("Delete calculator {}: {}", id, removed);
        Ok(removed)
    }

    async fn set_status(&self, id: CalculatorId, status: Status) -> Result<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        match records.get_mut(&id) {
            Some(record) => {
                record.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
