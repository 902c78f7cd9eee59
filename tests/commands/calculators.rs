use calc_builder::calculator::{CalculatorId, Status};
use calc_builder::commands::calculator::{
    delete_command, publish_command, rename_command, share_command, unpublish_command,
};
use calc_builder::config::Config;
use calc_builder::routing::Route;
use calc_builder::store::CalculatorStore;

use super::store_with_blank;

#[tokio::test]
async fn test_new_calculator_is_an_empty_draft() {
    let (store, id) = store_with_blank().await;
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(record.name, "Logo Design");
    assert_eq!(record.description, "Brand marks");
    assert!(record.elements.is_empty());
    assert_eq!(record.status, Status::Draft);
}

#[tokio::test]
async fn test_publish_then_share_then_unpublish() {
    let (store, id) = store_with_blank().await;
    publish_command(&store, id).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().unwrap().status, Status::Published);

    let mut config = Config::default();
    config.settings.share_base_url = "https://calc.example.com".into();
    let link = share_command(&store, &config, id).await.unwrap();
    assert_eq!(link, format!("https://calc.example.com/calc/{}", id));
    assert_eq!(Route::parse(&format!("/calc/{}", id)), Some(Route::Calculator(id)));

    unpublish_command(&store, id).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().unwrap().status, Status::Draft);
}

#[tokio::test]
async fn test_rename_saves_back_as_draft() {
    let store = calc_builder::store::MemoryStore::seeded();
    rename_command(&store, CalculatorId(1), "Sites".to_string(), None)
        .await
        .unwrap();
    let record = store.get(CalculatorId(1)).await.unwrap().unwrap();
    assert_eq!(record.name, "Sites");
    assert_eq!(record.submissions, 45);
    assert_eq!(record.status, Status::Draft);
    assert!(rename_command(&store, CalculatorId(1), " ".to_string(), None).await.is_err());
}

#[tokio::test]
async fn test_forced_delete_and_unknown_ids() {
    let (store, id) = store_with_blank().await;
    assert!(delete_command(&store, id, true).await.unwrap());
    assert!(store.get(id).await.unwrap().is_none());
    assert!(delete_command(&store, id, true).await.is_err());
    assert!(publish_command(&store, CalculatorId(404)).await.is_err());
}
