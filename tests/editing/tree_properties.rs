use calc_builder::model::{Element, ElementId, ElementPatch, ElementType};
use calc_builder::tree;

use super::sample_tree;

fn sorted_ids(elements: &[Element]) -> Vec<ElementId> {
    let mut ids = tree::ids(elements);
    ids.sort();
    ids
}

#[test]
fn test_missing_targets_leave_tree_unchanged() {
    let t = sample_tree();
    let missing = ElementId(404);
    assert_eq!(tree::update(&t, missing, ElementPatch::Label("x".into())), t);
    assert_eq!(tree::remove(&t, missing), t);
    assert_eq!(tree::insert(&t, Some(missing), Element::new(ElementId(99), ElementType::Text)), t);
}

#[test]
fn test_insert_into_non_group_is_ignored() {
    let t = sample_tree();
    let after = tree::insert(&t, Some(ElementId(2)), Element::new(ElementId(99), ElementType::Text));
    assert_eq!(after, t);
}

#[test]
fn test_removed_nodes_are_gone_at_every_depth() {
    let t = sample_tree();
    for id in tree::ids(&t) {
        let after = tree::remove(&t, id);
        assert!(tree::find(&after, id).is_none(), "{} still present", id);
        assert_eq!(tree::remove(&after, id), after, "remove is not idempotent for {}", id);
    }
}

#[test]
fn test_removing_a_group_takes_its_subtree() {
    let after = tree::remove(&sample_tree(), ElementId(4));
    assert_eq!(tree::ids(&after), vec![ElementId(1), ElementId(2), ElementId(3), ElementId(9), ElementId(10)]);
}

#[test]
fn test_reinserting_a_root_child_keeps_the_id_multiset() {
    let t = sample_tree();
    for node in t.iter() {
        let after = tree::insert(&tree::remove(&t, node.id), None, node.clone());
        assert_eq!(sorted_ids(&after), sorted_ids(&t));
        assert_eq!(after.last().map(|e| e.id), Some(node.id));
    }
}

#[test]
fn test_update_reaches_deeply_nested_nodes() {
    let t = sample_tree();
    let after = tree::update(&t, ElementId(8), ElementPatch::Value("basic".into()));
    assert_eq!(tree::find(&after, ElementId(8)).and_then(|e| e.value()), Some("basic"));
    // previous value untouched
    assert_eq!(tree::find(&t, ElementId(8)).and_then(|e| e.value()), Some(""));
}

#[test]
fn test_patch_for_another_variant_is_ignored() {
    let t = sample_tree();
    let after = tree::update(&t, ElementId(1), ElementPatch::Cost(99.0));
    assert_eq!(after, t);
}

#[test]
fn test_string_keyed_updates() {
    let t = sample_tree();
    let patch = ElementPatch::parse("cost", "abc").unwrap();
    let after = tree::update(&t, ElementId(2), patch);
    let json = serde_json::to_value(tree::find(&after, ElementId(2)).unwrap()).unwrap();
    assert_eq!(json["cost"], 0.0);
    assert!(ElementPatch::parse("min", "abc").is_err());
    assert!(ElementPatch::parse("colour", "red").is_err());
}

#[test]
fn test_json_round_trip_keeps_shape() {
    let t = sample_tree();
    let json = serde_json::to_string(&t).unwrap();
    let back: Vec<Element> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[1]["value"], "5");
    assert_eq!(value[2]["type"], "pagebreak");
    assert!(value[0].get("children").is_none());
}
