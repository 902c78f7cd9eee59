use calc_builder::calculator::CalculatorId;
use calc_builder::routing::{Route, resolve, share_link};
use calc_builder::store::{CalculatorStore, SqliteStore};

use super::draft;

#[tokio::test]
async fn test_share_link_resolves_back_to_the_calculator() {
    let store = SqliteStore::in_memory().await.unwrap();
    let id = store.save(draft(None, "Shared")).await.unwrap();

    let link = share_link("https://calc.example.com", id);
    let path = link.strip_prefix("https://calc.example.com").unwrap();
    assert_eq!(Route::parse(path), Some(Route::Calculator(id)));

    let found = resolve(&store, path).await.unwrap().unwrap();
    assert_eq!(found.name, "Shared");
}

#[tokio::test]
async fn test_unknown_paths_resolve_to_nothing() {
    let store = SqliteStore::in_memory().await.unwrap();
    assert!(resolve(&store, "/calc/").await.unwrap().is_none());
    assert!(resolve(&store, "/other/1").await.unwrap().is_none());
    assert!(resolve(&store, &Route::Calculator(CalculatorId(9)).path()).await.unwrap().is_none());
}
