use calc_builder::model::{ElementId, ElementPatch, ElementType};
use calc_builder::pagination::paginate;
use calc_builder::pricing::{non_numeric_inputs, quote};
use calc_builder::tree;

use super::sample_tree;

#[test]
fn test_sample_tree_total_and_line_order() {
    let q = quote(&sample_tree());
    // 5 * 150 + 2 * 5 + 40; untouched slider and unanswered radio add nothing
    assert_eq!(q.total, 800.0);
    let ids: Vec<u64> = q.items.iter().map(|i| i.element_id.0).collect();
    assert_eq!(ids, vec![1, 2, 5, 6]);
    assert_eq!(q.items[0].amount, 0.0);
    assert_eq!(q.items[3].description.as_deref(), Some("VPS"));
    assert!(q.items.iter().all(|i| i.element_type != ElementType::Group));
}

#[test]
fn test_moved_slider_counts_without_a_line() {
    let t = tree::update(&sample_tree(), ElementId(9), ElementPatch::Value("4".into()));
    let q = quote(&t);
    assert_eq!(q.total, 812.0);
    assert_eq!(q.items.len(), 4);
}

#[test]
fn test_quantity_with_text_suffix_uses_numeric_prefix() {
    let t = tree::update(&sample_tree(), ElementId(2), ElementPatch::Value("3 pages".into()));
    assert_eq!(quote(&t).total, 500.0);
}

#[test]
fn test_non_numeric_quantity_is_reported() {
    let t = tree::update(&sample_tree(), ElementId(5), ElementPatch::Value("a few".into()));
    assert!(quote(&t).total.is_nan());
    assert_eq!(non_numeric_inputs(&t), vec![ElementId(5)]);
}

#[test]
fn test_pages_of_sample_tree() {
    let t = sample_tree();
    let pages = paginate(&t);
    let ids: Vec<Vec<u64>> = pages.iter().map(|p| p.iter().map(|e| e.id.0).collect()).collect();
    assert_eq!(ids, vec![vec![1, 2], vec![4, 9]]);
}
