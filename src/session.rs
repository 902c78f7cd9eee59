//! The editing session: sole owner of the element tree being built.
//!
//! All edits go through this type. Totals, pages and summary lines are
//! derived from the current tree on request and never stored.

use anyhow::Result;
use log::{debug, info};

use crate::calculator::{Calculator, CalculatorDraft, CalculatorId};
use crate::drag::{DragDrop, DragEvent, DropZone, Dropped};
use crate::model::{
    Element, ElementId, ElementPatch, ElementType, IdGenerator, SelectOption, now_millis, parse_cost,
};
use crate::pagination::{self, Pager};
use crate::pricing::{self, Quote};
use crate::tree;

#[derive(Debug, Clone)]
pub struct EditorSession {
    current_calculator_id: Option<CalculatorId>,
    name: String,
    description: String,
    elements: Vec<Element>,
    selected: Option<ElementId>,
    drag: DragDrop,
    ids: IdGenerator,
    pager: Pager,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Blank, unsaved calculator
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            current_calculator_id: None,
            name: "Untitled Calculator".to_string(),
            description: String::new(),
            elements: Vec::new(),
            selected: None,
            drag: DragDrop::new(),
            ids,
            pager: Pager::new(),
        }
    }

    /// Start editing a saved calculator
    pub fn load(calculator: &Calculator) -> Self {
        Self::load_with_ids(calculator, IdGenerator::new())
    }

    pub fn load_with_ids(calculator: &Calculator, mut ids: IdGenerator) -> Self {
        for id in tree::ids(&calculator.elements) {
            ids.observe(id);
        }
        info!("Loaded calculator {} ('{}') into editor", calculator.id, calculator.name);
        Self {
            current_calculator_id: Some(calculator.id),
            name: calculator.name.clone(),
            description: calculator.description.clone(),
            elements: calculator.elements.clone(),
            selected: None,
            drag: DragDrop::new(),
            ids,
            pager: Pager::new(),
        }
    }

    pub fn current_calculator_id(&self) -> Option<CalculatorId> {
        self.current_calculator_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        tree::find(&self.elements, id)
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id.filter(|id| tree::contains(&self.elements, *id));
    }

    pub fn drag(&self) -> &DragDrop {
        &self.drag
    }

    // Mutations

    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        self.elements = tree::update(&self.elements, id, patch);
    }

    /// Checked edit for the property panel: `Ok(false)` when the patch does not
    /// fit the element's type, an error when it would break a selection's options
    pub fn edit_element(&mut self, id: ElementId, patch: ElementPatch) -> Result<bool> {
        let Some(mut edited) = self.find(id).cloned() else {
            anyhow::bail!("Element '{}' not found", id);
        };
        if !edited.try_apply(patch)? {
            return Ok(false);
        }
        self.elements = tree::update_with(&self.elements, id, |element| *element = edited);
        Ok(true)
    }

    pub fn delete_element(&mut self, id: ElementId) {
        self.elements = tree::remove(&self.elements, id);
        if self.selected == Some(id) || self.selected.is_some_and(|s| !tree::contains(&self.elements, s)) {
            self.selected = None;
        }
    }

    pub fn dispatch(&mut self, event: DragEvent) {
        self.elements = self.drag.dispatch(&self.elements, event, &mut self.ids);
    }

    /// Drag a new element from the palette and drop it into `zone`
    pub fn add_element(&mut self, element_type: ElementType, zone: DropZone) -> Option<Dropped> {
        self.dispatch(DragEvent::StartFromPalette(element_type));
        self.dispatch(DragEvent::Over(zone));
        self.dispatch(DragEvent::Drop(zone));
        self.drag.last_drop()
    }

    /// Drag an existing element to `zone`; unknown ids leave the tree untouched
    pub fn move_element(&mut self, id: ElementId, zone: DropZone) -> Option<Dropped> {
        let element = self.find(id)?.clone();
        let source_parent = tree::parent_of(&self.elements, id).flatten();
        self.dispatch(DragEvent::StartFromCanvas {
            element,
            source_parent,
        });
        self.dispatch(DragEvent::Over(zone));
        self.dispatch(DragEvent::Drop(zone));
        self.drag.last_drop()
    }

    /// Append `{New Option, new-option-<timestamp>, 0}` to a selection element
    pub fn add_option(&mut self, id: ElementId) {
        let stamp = now_millis();
        self.elements = tree::update_with(&self.elements, id, |element| {
            if let Some(choice) = element.choice_mut() {
                let mut suffix = stamp;
                while choice.has_option(&format!("new-option-{}", suffix)) {
                    suffix += 1;
                }
                choice
                    .options
                    .push(SelectOption::new("New Option", format!("new-option-{}", suffix), 0.0));
            }
        });
    }

    /// Edit one option property (`label`, `cost` or `imageUrl`); out-of-range indices are ignored.
    /// A cost that is not a number is stored as 0, an infinite one is refused.
    pub fn update_option(&mut self, id: ElementId, index: usize, key: &str, raw: &str) -> Result<()> {
        enum OptionField {
            Label(String),
            Cost(f64),
            ImageUrl(Option<String>),
        }

        let field = match key {
            "label" => OptionField::Label(raw.to_string()),
            "cost" | "price" => OptionField::Cost(parse_cost(raw)?),
            "imageUrl" | "image-url" | "image" => {
                OptionField::ImageUrl(if raw.is_empty() { None } else { Some(raw.to_string()) })
            }
            _ => anyhow::bail!("Unknown option property: '{}'", key),
        };

        self.elements = tree::update_with(&self.elements, id, |element| {
            let Some(option) = element.choice_mut().and_then(|c| c.options.get_mut(index)) else {
                debug!("Option {} of element {} not found", index, id);
                return;
            };
            match field {
                OptionField::Label(label) => option.label = label,
                OptionField::Cost(cost) => option.cost = cost,
                OptionField::ImageUrl(url) => option.image_url = url,
            }
        });
        Ok(())
    }

    pub fn remove_option(&mut self, id: ElementId, index: usize) {
        self.elements = tree::update_with(&self.elements, id, |element| {
            if let Some(choice) = element.choice_mut() {
                if index < choice.options.len() {
                    choice.options.remove(index);
                }
            }
        });
    }

    // Derived values

    pub fn quote(&self) -> Quote {
        pricing::quote(&self.elements)
    }

    pub fn total(&self) -> f64 {
        pricing::total(&self.elements)
    }

    pub fn pages(&self) -> Vec<Vec<&Element>> {
        pagination::paginate(&self.elements)
    }

    pub fn current_page(&self) -> usize {
        self.pager.current(pagination::page_count(&self.elements))
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn next_page(&mut self) {
        self.pager.next(pagination::page_count(&self.elements));
    }

    pub fn previous_page(&mut self) {
        self.pager.previous(pagination::page_count(&self.elements));
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, pagination::page_count(&self.elements));
    }

    // Persistence boundary

    /// Snapshot for the store; fails when the name is blank
    pub fn to_draft(&self) -> Result<CalculatorDraft> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Please enter a calculator name.");
        }
        Ok(CalculatorDraft {
            id: self.current_calculator_id,
            name: self.name.clone(),
            description: self.description.clone(),
            elements: self.elements.clone(),
        })
    }

    /// Record the id the store assigned on save
    pub fn mark_saved(&mut self, id: CalculatorId) {
        self.current_calculator_id = Some(id);
    }
}
