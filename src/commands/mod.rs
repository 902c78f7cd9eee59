//! Command handlers. Editing commands load a calculator into an
//! [`EditorSession`], apply one edit and save it back through the store.

use anyhow::{Context, Result};
use log::debug;

use crate::calculator::{Calculator, CalculatorId};
use crate::model::{ElementId, ElementPatch};
use crate::session::EditorSession;
use crate::store::CalculatorStore;

pub mod brand;
pub mod calculator;
pub mod element;
pub mod estimate;
pub mod option;
pub mod settings;

pub(crate) async fn fetch(store: &dyn CalculatorStore, id: CalculatorId) -> Result<Calculator> {
    store
        .get(id)
        .await?
        .with_context(|| format!("Calculator '{}' not found", id))
}

pub(crate) async fn load_session(store: &dyn CalculatorStore, id: CalculatorId) -> Result<EditorSession> {
    Ok(EditorSession::load(&fetch(store, id).await?))
}

pub(crate) async fn save_session(store: &dyn CalculatorStore, session: &mut EditorSession) -> Result<CalculatorId> {
    let id = store.save(session.to_draft()?).await?;
    session.mark_saved(id);
    debug!("Session saved as calculator {}", id);
    Ok(id)
}

/// Split `key=value`; the value may itself contain `=`
pub fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => anyhow::bail!("Invalid assignment '{}'. Expected KEY=VALUE.", raw),
    }
}

/// Fill in answers (`element-id=value`) without touching the stored calculator
pub(crate) fn apply_answers(session: &mut EditorSession, answers: &[String]) -> Result<()> {
    for raw in answers {
        let (key, value) = parse_assignment(raw)?;
        let id: ElementId = key.parse()?;
        if session.find(id).is_none() {
            anyhow::bail!("Element '{}' not found", id);
        }
        session.update_element(id, ElementPatch::Value(value.to_string()));
    }
    Ok(())
}
