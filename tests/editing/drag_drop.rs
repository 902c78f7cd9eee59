use calc_builder::drag::{DragDrop, DragEvent, DropZone};
use calc_builder::model::{ElementId, ElementKind, ElementType, IdGenerator};
use calc_builder::session::EditorSession;
use calc_builder::tree;

use super::sample_tree;

#[test]
fn test_palette_drop_into_nested_group() {
    let mut ids = IdGenerator::sequential(1);
    let mut dnd = DragDrop::new();
    let t = sample_tree();

    let t = dnd.dispatch(&t, DragEvent::StartFromPalette(ElementType::ImageSelect), &mut ids);
    let t = dnd.dispatch(&t, DragEvent::Over(DropZone::Group(ElementId(7))), &mut ids);
    let t = dnd.dispatch(&t, DragEvent::Drop(DropZone::Group(ElementId(7))), &mut ids);

    let dropped = dnd.last_drop().unwrap();
    assert_eq!(dropped.id, ElementId(11));
    assert!(dropped.landed);
    assert_eq!(tree::parent_of(&t, dropped.id), Some(Some(ElementId(7))));

    let element = tree::find(&t, dropped.id).unwrap();
    assert_eq!(element.label, "Image dropdown");
    match &element.kind {
        ElementKind::ImageSelect(choice) => {
            assert_eq!(choice.options.len(), 1);
            assert_eq!(choice.options[0].value, "opt1");
            assert_eq!(choice.options[0].cost, 10.0);
            assert_eq!(choice.value, "");
        }
        other => panic!("unexpected kind {:?}", other),
    }
}

#[test]
fn test_move_between_groups_keeps_id_and_subtree() {
    let mut session = EditorSession::load_with_ids(
        &calc_builder::Calculator {
            id: calc_builder::CalculatorId(5),
            name: "Sample".into(),
            description: String::new(),
            elements: sample_tree(),
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            submissions: 0,
            status: calc_builder::Status::Draft,
        },
        IdGenerator::sequential(1),
    );
    let before = tree::count(session.elements());

    session.move_element(ElementId(7), DropZone::Root);
    assert_eq!(tree::parent_of(session.elements(), ElementId(7)), Some(None));
    assert_eq!(tree::parent_of(session.elements(), ElementId(8)), Some(Some(ElementId(7))));
    assert_eq!(tree::count(session.elements()), before);

    session.move_element(ElementId(2), DropZone::Group(ElementId(4)));
    assert_eq!(tree::parent_of(session.elements(), ElementId(2)), Some(Some(ElementId(4))));
}

#[test]
fn test_dropping_a_group_into_its_descendant_discards_it() {
    let mut ids = IdGenerator::sequential(100);
    let mut dnd = DragDrop::new();
    let t = sample_tree();
    let group = tree::find(&t, ElementId(4)).unwrap().clone();

    let t = dnd.dispatch(
        &t,
        DragEvent::StartFromCanvas {
            element: group,
            source_parent: None,
        },
        &mut ids,
    );
    let t = dnd.dispatch(&t, DragEvent::Drop(DropZone::Group(ElementId(7))), &mut ids);

    assert!(!dnd.last_drop().unwrap().landed);
    for gone in [4, 5, 6, 7, 8] {
        assert!(!tree::contains(&t, ElementId(gone)));
    }
    assert!(!dnd.is_dragging());
}

#[test]
fn test_drop_into_missing_zone_discards_new_element() {
    let mut ids = IdGenerator::sequential(100);
    let mut dnd = DragDrop::new();
    let t = sample_tree();
    let after = dnd.dispatch(&t, DragEvent::StartFromPalette(ElementType::Text), &mut ids);
    let after = dnd.dispatch(&after, DragEvent::Drop(DropZone::Group(ElementId(404))), &mut ids);
    assert_eq!(after, t);
    assert!(!dnd.last_drop().unwrap().landed);
}

#[test]
fn test_second_start_replaces_payload() {
    let mut ids = IdGenerator::sequential(100);
    let mut dnd = DragDrop::new();
    let t = Vec::new();
    let t = dnd.dispatch(&t, DragEvent::StartFromPalette(ElementType::Text), &mut ids);
    let t = dnd.dispatch(&t, DragEvent::StartFromPalette(ElementType::Divider), &mut ids);
    let t = dnd.dispatch(&t, DragEvent::Drop(DropZone::Root), &mut ids);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].element_type(), ElementType::Divider);
}
