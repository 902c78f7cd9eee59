/// Persistence tests: every store honours the same contract

pub mod routing;
pub mod store_contract;

use calc_builder::calculator::{CalculatorDraft, CalculatorId};
use calc_builder::model::{Element, ElementId, ElementType};

pub fn draft(id: Option<CalculatorId>, name: &str) -> CalculatorDraft {
    CalculatorDraft {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        elements: vec![
            Element::new(ElementId(1), ElementType::Number),
            Element::new(ElementId(2), ElementType::Radio),
        ],
    }
}
