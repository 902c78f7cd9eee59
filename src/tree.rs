//! Identity-based operations over the element forest.
//!
//! Every operation takes the tree by reference and returns a new tree, so a
//! reader holding the previous value never observes a half-applied change.
//! Targets are addressed by id, never by position. Operations whose target
//! does not exist return an unchanged copy of the input.

use log::debug;

use crate::model::{Element, ElementId, ElementKind, ElementPatch};

/// Apply `patch` to the node with `id`, wherever it is nested
pub fn update(tree: &[Element], id: ElementId, patch: ElementPatch) -> Vec<Element> {
    update_with(tree, id, |element| {
        if !element.apply(patch) {
            debug!(
                "Patch does not apply to {} element {}, left unchanged",
                element.element_type(),
                id
            );
        }
    })
}

/// Run `edit` against the node with `id` in a copy of the tree
pub fn update_with<F>(tree: &[Element], id: ElementId, edit: F) -> Vec<Element>
where
    F: FnOnce(&mut Element),
{
    let mut next = tree.to_vec();
    match find_mut(&mut next, id) {
        Some(element) => edit(element),
        None => debug!("Update target {} not found", id),
    }
    next
}

/// Remove the node with `id` (and its subtree) from whichever list holds it
pub fn remove(tree: &[Element], id: ElementId) -> Vec<Element> {
    let mut next = tree.to_vec();
    if !remove_in_place(&mut next, id) {
        debug!("Remove target {} not found", id);
    }
    next
}

/// Append `element` to group `parent`, or to the root sequence when `parent` is `None`
pub fn insert(tree: &[Element], parent: Option<ElementId>, element: Element) -> Vec<Element> {
    let mut next = tree.to_vec();
    match parent {
        None => next.push(element),
        Some(parent_id) => match find_mut(&mut next, parent_id).map(|node| &mut node.kind) {
            Some(ElementKind::Group { children }) => children.push(element),
            Some(_) => debug!("Insert target {} is not a group", parent_id),
            None => debug!("Insert target {} not found", parent_id),
        },
    }
    next
}

/// Depth-first search for the node with `id`
pub fn find(tree: &[Element], id: ElementId) -> Option<&Element> {
    for element in tree {
        if element.id == id {
            return Some(element);
        }
        if let Some(children) = element.children() {
            if let Some(found) = find(children, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn contains(tree: &[Element], id: ElementId) -> bool {
    find(tree, id).is_some()
}

/// Parent of the node with `id`: `Some(None)` for root nodes, `None` when absent
pub fn parent_of(tree: &[Element], id: ElementId) -> Option<Option<ElementId>> {
    fn search(list: &[Element], parent: Option<ElementId>, id: ElementId) -> Option<Option<ElementId>> {
        for element in list {
            if element.id == id {
                return Some(parent);
            }
            if let Some(children) = element.children() {
                if let Some(found) = search(children, Some(element.id), id) {
                    return Some(found);
                }
            }
        }
        None
    }

    search(tree, None, id)
}

/// Whether `id` sits somewhere below `ancestor`
pub fn is_descendant(tree: &[Element], ancestor: ElementId, id: ElementId) -> bool {
    find(tree, ancestor)
        .and_then(|node| node.children())
        .map(|children| contains(children, id))
        .unwrap_or(false)
}

/// All ids, parent before children, in tree order
pub fn ids(tree: &[Element]) -> Vec<ElementId> {
    fn collect(list: &[Element], out: &mut Vec<ElementId>) {
        for element in list {
            out.push(element.id);
            if let Some(children) = element.children() {
                collect(children, out);
            }
        }
    }

    let mut out = Vec::new();
    collect(tree, &mut out);
    out
}

pub fn max_id(tree: &[Element]) -> Option<ElementId> {
    ids(tree).into_iter().max()
}

/// Number of nodes at every depth
pub fn count(tree: &[Element]) -> usize {
    tree.iter()
        .map(|element| 1 + element.children().map(count).unwrap_or(0))
        .sum()
}

pub(crate) fn find_mut(tree: &mut [Element], id: ElementId) -> Option<&mut Element> {
    for element in tree.iter_mut() {
        if element.id == id {
            return Some(element);
        }
        if let ElementKind::Group { children } = &mut element.kind {
            if let Some(found) = find_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_in_place(list: &mut Vec<Element>, id: ElementId) -> bool {
    let before = list.len();
    list.retain(|element| element.id != id);
    if list.len() != before {
        return true;
    }
    list.iter_mut().any(|element| match &mut element.kind {
        ElementKind::Group { children } => remove_in_place(children, id),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;

    fn el(id: u64, element_type: ElementType) -> Element {
        Element::new(ElementId(id), element_type)
    }

    fn group(id: u64, children: Vec<Element>) -> Element {
        let mut group = el(id, ElementType::Group);
        group.kind = ElementKind::Group { children };
        group
    }

    /// text(1), group(2)[number(3), group(4)[select(5)]], pagebreak(6)
    fn sample() -> Vec<Element> {
        vec![
            el(1, ElementType::Text),
            group(
                2,
                vec![
                    el(3, ElementType::Number),
                    group(4, vec![el(5, ElementType::Select)]),
                ],
            ),
            el(6, ElementType::PageBreak),
        ]
    }

    #[test]
    fn test_missing_ids_leave_tree_unchanged() {
        let tree = sample();
        let missing = ElementId(99);
        assert_eq!(update(&tree, missing, ElementPatch::Label("x".into())), tree);
        assert_eq!(remove(&tree, missing), tree);
        assert_eq!(insert(&tree, Some(missing), el(100, ElementType::Text)), tree);
    }

    #[test]
    fn test_insert_into_non_group_is_noop() {
        let tree = sample();
        assert_eq!(insert(&tree, Some(ElementId(3)), el(100, ElementType::Text)), tree);
    }

    #[test]
    fn test_update_reaches_nested_nodes() {
        let tree = update(&sample(), ElementId(5), ElementPatch::Value("opt1".into()));
        assert_eq!(find(&tree, ElementId(5)).unwrap().value(), Some("opt1"));
        // the input tree is untouched
        assert_eq!(find(&sample(), ElementId(5)).unwrap().value(), Some(""));
    }

    #[test]
    fn test_remove_group_discards_descendants() {
        let tree = remove(&sample(), ElementId(2));
        assert_eq!(ids(&tree), vec![ElementId(1), ElementId(6)]);
        assert!(find(&tree, ElementId(5)).is_none());
    }

    #[test]
    fn test_removed_node_cannot_be_found_and_remove_is_idempotent() {
        let tree = sample();
        for id in ids(&tree) {
            let once = remove(&tree, id);
            assert!(find(&once, id).is_none());
            assert_eq!(remove(&once, id), once);
        }
    }

    #[test]
    fn test_insert_appends_to_group_end() {
        let tree = insert(&sample(), Some(ElementId(4)), el(7, ElementType::Radio));
        let inner = find(&tree, ElementId(4)).unwrap().children().unwrap();
        assert_eq!(inner.iter().map(|e| e.id).collect::<Vec<_>>(), vec![ElementId(5), ElementId(7)]);
    }

    #[test]
    fn test_remove_then_reinsert_keeps_id_multiset() {
        let tree = sample();
        let node = find(&tree, ElementId(1)).unwrap().clone();
        let moved = insert(&remove(&tree, node.id), None, node);

        let mut before = ids(&tree);
        let mut after = ids(&moved);
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(moved.last().unwrap().id, ElementId(1));
    }

    #[test]
    fn test_parent_and_descendant_queries() {
        let tree = sample();
        assert_eq!(parent_of(&tree, ElementId(1)), Some(None));
        assert_eq!(parent_of(&tree, ElementId(5)), Some(Some(ElementId(4))));
        assert_eq!(parent_of(&tree, ElementId(42)), None);
        assert!(is_descendant(&tree, ElementId(2), ElementId(5)));
        assert!(!is_descendant(&tree, ElementId(4), ElementId(3)));
        assert_eq!(count(&tree), 6);
        assert_eq!(max_id(&tree), Some(ElementId(6)));
    }
}
