//! Drag-and-drop reducer.
//!
//! Translates palette and canvas gestures into tree operations. Only one drag
//! is in flight at a time and the tree is only touched on `Drop`.

use log::{debug, warn};

use crate::model::{Element, ElementId, ElementType, IdGenerator};
use crate::tree;

/// Where a dragged element lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    Root,
    Group(ElementId),
}

impl DropZone {
    pub fn parent(&self) -> Option<ElementId> {
        match self {
            DropZone::Root => None,
            DropZone::Group(id) => Some(*id),
        }
    }
}

impl From<Option<ElementId>> for DropZone {
    fn from(parent: Option<ElementId>) -> Self {
        match parent {
            Some(id) => DropZone::Group(id),
            None => DropZone::Root,
        }
    }
}

/// What is being dragged
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A new element from the palette
    New(ElementType),
    /// An element already on the canvas; it stays in the tree until dropped
    Existing {
        element: Element,
        source_parent: Option<ElementId>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        payload: DragPayload,
        /// Zone currently hovered, for highlighting
        drop_target: Option<DropZone>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    StartFromPalette(ElementType),
    StartFromCanvas {
        element: Element,
        source_parent: Option<ElementId>,
    },
    Over(DropZone),
    Leave,
    Drop(DropZone),
    Cancel,
}

/// Outcome of a drop, for callers that want to select or report the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropped {
    pub id: ElementId,
    pub zone: DropZone,
    /// False when the target vanished and the element was discarded
    pub landed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DragDrop {
    state: DragState,
    last_drop: Option<Dropped>,
}

impl DragDrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn drop_target(&self) -> Option<DropZone> {
        match &self.state {
            DragState::Dragging { drop_target, .. } => *drop_target,
            DragState::Idle => None,
        }
    }

    /// Result of the most recent drop
    pub fn last_drop(&self) -> Option<Dropped> {
        self.last_drop
    }

    /// Feed one gesture; returns the tree to use from now on
    pub fn dispatch(&mut self, tree: &[Element], event: DragEvent, ids: &mut IdGenerator) -> Vec<Element> {
        match event {
            DragEvent::StartFromPalette(element_type) => {
                debug!("Drag started from palette: {}", element_type);
                self.start(DragPayload::New(element_type));
                tree.to_vec()
            }
            DragEvent::StartFromCanvas {
                element,
                source_parent,
            } => {
                debug!("Drag started from canvas: element {}", element.id);
                self.start(DragPayload::Existing {
                    element,
                    source_parent,
                });
                tree.to_vec()
            }
            DragEvent::Over(zone) => {
                if let DragState::Dragging { drop_target, .. } = &mut self.state {
                    *drop_target = Some(zone);
                }
                tree.to_vec()
            }
            DragEvent::Leave => {
                if let DragState::Dragging { drop_target, .. } = &mut self.state {
                    *drop_target = None;
                }
                tree.to_vec()
            }
            DragEvent::Cancel => {
                if self.is_dragging() {
                    debug!("Drag cancelled");
                }
                self.state = DragState::Idle;
                tree.to_vec()
            }
            DragEvent::Drop(zone) => self.drop_on(tree, zone, ids),
        }
    }

    fn start(&mut self, payload: DragPayload) {
        if self.is_dragging() {
            debug!("Drag replaced before drop");
        }
        self.state = DragState::Dragging {
            payload,
            drop_target: None,
        };
    }

    fn drop_on(&mut self, tree: &[Element], zone: DropZone, ids: &mut IdGenerator) -> Vec<Element> {
        let payload = match std::mem::take(&mut self.state) {
            DragState::Dragging { payload, .. } => payload,
            DragState::Idle => {
                debug!("Drop received with no drag in flight");
                return tree.to_vec();
            }
        };

        let (detached, element) = match payload {
            DragPayload::Existing { element, .. } => (tree::remove(tree, element.id), element),
            DragPayload::New(element_type) => {
                for id in tree::ids(tree) {
                    ids.observe(id);
                }
                (tree.to_vec(), Element::new(ids.next_id(), element_type))
            }
        };

        let id = element.id;
        let next = tree::insert(&detached, zone.parent(), element);
        let landed = tree::contains(&next, id);
        if landed {
            debug!("Dropped element {} into {:?}", id, zone);
        } else {
            warn!(
                "Drop target {:?} does not exist (or was inside the dragged element); element {} discarded",
                zone, id
            );
        }

        self.last_drop = Some(Dropped { id, zone, landed });
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn start_tree() -> (Vec<Element>, IdGenerator) {
        let mut ids = IdGenerator::sequential(1);
        let mut dnd = DragDrop::new();
        let mut tree = Vec::new();
        for element_type in [ElementType::Number, ElementType::Group, ElementType::Group] {
            tree = dnd.dispatch(&tree, DragEvent::StartFromPalette(element_type), &mut ids);
            tree = dnd.dispatch(&tree, DragEvent::Drop(DropZone::Root), &mut ids);
        }
        (tree, ids)
    }

    #[test]
    fn test_palette_drop_materializes_defaults() {
        let (tree, _) = start_tree();
        assert_eq!(tree::ids(&tree), vec![ElementId(1), ElementId(2), ElementId(3)]);
        assert_eq!(tree[0].label, "Quantity field");
        assert_eq!(tree[1].kind, ElementKind::Group { children: vec![] });
    }

    #[test]
    fn test_hover_highlights_without_touching_tree() {
        let (tree, mut ids) = start_tree();
        let mut dnd = DragDrop::new();
        let after = dnd.dispatch(&tree, DragEvent::StartFromPalette(ElementType::Text), &mut ids);
        let after = dnd.dispatch(&after, DragEvent::Over(DropZone::Group(ElementId(2))), &mut ids);
        assert_eq!(after, tree);
        assert_eq!(dnd.drop_target(), Some(DropZone::Group(ElementId(2))));
        dnd.dispatch(&after, DragEvent::Leave, &mut ids);
        assert_eq!(dnd.drop_target(), None);
        assert!(dnd.is_dragging());
    }

    #[test]
    fn test_move_existing_element_into_group() {
        let (tree, mut ids) = start_tree();
        let mut dnd = DragDrop::new();
        let number = tree[0].clone();
        let tree = dnd.dispatch(
            &tree,
            DragEvent::StartFromCanvas {
                element: number,
                source_parent: None,
            },
            &mut ids,
        );
        // still in place until dropped
        assert_eq!(tree[0].id, ElementId(1));

        let tree = dnd.dispatch(&tree, DragEvent::Drop(DropZone::Group(ElementId(3))), &mut ids);
        assert_eq!(tree::parent_of(&tree, ElementId(1)), Some(Some(ElementId(3))));
        assert_eq!(tree::count(&tree), 3);
        assert_eq!(*dnd.state(), DragState::Idle);
        assert!(dnd.last_drop().unwrap().landed);
    }

    #[test]
    fn test_cancel_leaves_tree_untouched() {
        let (tree, mut ids) = start_tree();
        let mut dnd = DragDrop::new();
        let after = dnd.dispatch(&tree, DragEvent::StartFromPalette(ElementType::Slider), &mut ids);
        let after = dnd.dispatch(&after, DragEvent::Cancel, &mut ids);
        assert_eq!(after, tree);
        let after = dnd.dispatch(&after, DragEvent::Drop(DropZone::Root), &mut ids);
        assert_eq!(after, tree);
    }

    #[test]
    fn test_drop_into_own_descendant_discards_subtree() {
        let (tree, mut ids) = start_tree();
        let mut dnd = DragDrop::new();
        // group 3 goes inside group 2
        let outer = tree::find(&tree, ElementId(3)).unwrap().clone();
        let tree = dnd.dispatch(&tree, DragEvent::StartFromCanvas { element: outer, source_parent: None }, &mut ids);
        let tree = dnd.dispatch(&tree, DragEvent::Drop(DropZone::Group(ElementId(2))), &mut ids);
        assert_eq!(tree::parent_of(&tree, ElementId(3)), Some(Some(ElementId(2))));

        // now drag group 2 into its own child 3
        let group = tree::find(&tree, ElementId(2)).unwrap().clone();
        let tree = dnd.dispatch(&tree, DragEvent::StartFromCanvas { element: group, source_parent: None }, &mut ids);
        let tree = dnd.dispatch(&tree, DragEvent::Drop(DropZone::Group(ElementId(3))), &mut ids);
        assert_eq!(tree::ids(&tree), vec![ElementId(1)]);
        assert!(!dnd.last_drop().unwrap().landed);
    }

    #[test]
    fn test_new_ids_never_collide_with_existing_tree() {
        let existing = vec![Element::new(ElementId(50), ElementType::Text)];
        let mut ids = IdGenerator::sequential(1);
        let mut dnd = DragDrop::new();
        let tree = dnd.dispatch(&existing, DragEvent::StartFromPalette(ElementType::Text), &mut ids);
        let tree = dnd.dispatch(&tree, DragEvent::Drop(DropZone::Root), &mut ids);
        assert_eq!(tree[1].id, ElementId(51));
    }
}
