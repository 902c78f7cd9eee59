use calc_builder::commands::{element, option};
use calc_builder::model::{ElementId, ElementKind, ElementType};
use calc_builder::commands::calculator::new_command;
use calc_builder::store::{CalculatorStore, SqliteStore};
use calc_builder::tree;

use super::store_with_blank;

#[tokio::test]
async fn test_add_into_group_and_move_back_to_root() {
    let (store, id) = store_with_blank().await;
    let group = element::add_command(&store, id, ElementType::Group, None, Some("Extras".into()), vec![])
        .await
        .unwrap();
    let hours = element::add_command(
        &store,
        id,
        ElementType::Number,
        Some(group),
        None,
        vec!["value=3".into(), "cost=20".into()],
    )
    .await
    .unwrap();

    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(tree::parent_of(&record.elements, hours), Some(Some(group)));
    assert_eq!(tree::find(&record.elements, group).unwrap().label, "Extras");

    element::move_command(&store, id, hours, None).await.unwrap();
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(tree::parent_of(&record.elements, hours), Some(None));
    assert_eq!(calc_builder::pricing::total(&record.elements), 60.0);
}

#[tokio::test]
async fn test_add_rejects_non_group_targets_and_bad_properties() {
    let (store, id) = store_with_blank().await;
    let text = element::add_command(&store, id, ElementType::Text, None, None, vec![]).await.unwrap();
    assert!(element::add_command(&store, id, ElementType::Text, Some(text), None, vec![]).await.is_err());
    assert!(element::add_command(&store, id, ElementType::Text, Some(ElementId(1)), None, vec![]).await.is_err());
    assert!(element::add_command(&store, id, ElementType::Text, None, None, vec!["colour=red".into()]).await.is_err());
    assert_eq!(store.get(id).await.unwrap().unwrap().elements.len(), 1);
}

#[tokio::test]
async fn test_move_into_own_subtree_is_refused() {
    let (store, id) = store_with_blank().await;
    let outer = element::add_command(&store, id, ElementType::Group, None, None, vec![]).await.unwrap();
    let inner = element::add_command(&store, id, ElementType::Group, Some(outer), None, vec![]).await.unwrap();

    assert!(element::move_command(&store, id, outer, Some(inner)).await.is_err());
    assert!(element::move_command(&store, id, outer, Some(outer)).await.is_err());
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(tree::count(&record.elements), 2);
}

#[tokio::test]
async fn test_set_ignores_properties_the_type_lacks() {
    let (store, id) = store_with_blank().await;
    let text = element::add_command(&store, id, ElementType::Text, None, None, vec![]).await.unwrap();
    let before = store.get(id).await.unwrap().unwrap();

    element::set_command(&store, id, text, "cost".into(), "99".into()).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().unwrap().elements, before.elements);

    element::set_command(&store, id, text, "label".into(), "Company".into()).await.unwrap();
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(tree::find(&record.elements, text).unwrap().label, "Company");
    assert!(element::set_command(&store, id, ElementId(5), "label".into(), "x".into()).await.is_err());
}

#[tokio::test]
async fn test_remove_deletes_whole_subtree() {
    let (store, id) = store_with_blank().await;
    let group = element::add_command(&store, id, ElementType::Group, None, None, vec![]).await.unwrap();
    element::add_command(&store, id, ElementType::Slider, Some(group), None, vec![]).await.unwrap();
    element::remove_command(&store, id, group).await.unwrap();
    assert!(store.get(id).await.unwrap().unwrap().elements.is_empty());
}

#[tokio::test]
async fn test_option_lifecycle() {
    let (store, id) = store_with_blank().await;
    let radio = element::add_command(&store, id, ElementType::Radio, None, None, vec![]).await.unwrap();

    let index = option::add_command(&store, id, radio).await.unwrap();
    assert_eq!(index, 1);
    option::set_command(&store, id, radio, index, "label".into(), "Premium".into()).await.unwrap();
    option::set_command(&store, id, radio, index, "cost".into(), "abc".into()).await.unwrap();
    assert!(option::set_command(&store, id, radio, 9, "label".into(), "x".into()).await.is_err());
    assert!(option::set_command(&store, id, radio, 0, "colour".into(), "x".into()).await.is_err());

    let record = store.get(id).await.unwrap().unwrap();
    let choice = tree::find(&record.elements, radio).unwrap().choice().unwrap().clone();
    assert_eq!(choice.options[1].label, "Premium");
    assert_eq!(choice.options[1].cost, 0.0);

    option::remove_command(&store, id, radio, 0).await.unwrap();
    let record = store.get(id).await.unwrap().unwrap();
    match &tree::find(&record.elements, radio).unwrap().kind {
        ElementKind::Radio(choice) => assert_eq!(choice.options.len(), 1),
        other => panic!("expected radio, got {:?}", other),
    }

    let text = element::add_command(&store, id, ElementType::Text, None, None, vec![]).await.unwrap();
    assert!(option::add_command(&store, id, text).await.is_err());
}

#[tokio::test]
async fn test_infinite_slider_bounds_are_refused_and_the_record_still_loads() {
    let store = SqliteStore::in_memory().await.unwrap();
    let id = new_command(&store, "Render farm".to_string(), String::new()).await.unwrap();
    let slider = element::add_command(&store, id, ElementType::Slider, None, None, vec![]).await.unwrap();

    for (key, value) in [("min", "Infinity"), ("max", "-Infinity"), ("step", "1e400"), ("cost", "Infinity")] {
        let err = element::set_command(&store, id, slider, key.to_string(), value.to_string())
            .await
            .unwrap_err();
        assert!(err.to_string().contains(value), "{}: {}", key, err);
    }
    assert!(element::add_command(&store, id, ElementType::Slider, None, None, vec!["max=Infinity".into()])
        .await
        .is_err());

    element::set_command(&store, id, slider, "min".into(), "5".into()).await.unwrap();
    element::set_command(&store, id, slider, "max".into(), "500".into()).await.unwrap();
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(record.elements.len(), 1);
    match &tree::find(&record.elements, slider).unwrap().kind {
        ElementKind::Slider(bounds) => {
            assert_eq!(bounds.min, 5.0);
            assert_eq!(bounds.max, 500.0);
            assert_eq!(bounds.step, 1.0);
        }
        other => panic!("expected slider, got {:?}", other),
    }
}

#[tokio::test]
async fn test_choice_edits_keep_selection_among_options() {
    let (store, id) = store_with_blank().await;
    let select = element::add_command(&store, id, ElementType::Select, None, None, vec![]).await.unwrap();
    let before = store.get(id).await.unwrap().unwrap();

    let duplicated = r#"[{"label":"A","value":"a","cost":1},{"label":"B","value":"a","cost":2}]"#;
    let err = element::set_command(&store, id, select, "options".into(), duplicated.into())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Duplicate option value 'a'"));

    let err = element::set_command(&store, id, select, "value".into(), "nope".into())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no option with value 'nope'"));
    assert_eq!(store.get(id).await.unwrap().unwrap().elements, before.elements);

    element::set_command(&store, id, select, "value".into(), "opt1".into()).await.unwrap();
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(calc_builder::pricing::total(&record.elements), 10.0);

    // clearing the selection is always allowed
    element::set_command(&store, id, select, "value".into(), String::new()).await.unwrap();

    assert!(element::add_command(&store, id, ElementType::Radio, None, None, vec!["value=missing".into()])
        .await
        .is_err());
    assert_eq!(store.get(id).await.unwrap().unwrap().elements.len(), 1);
}
