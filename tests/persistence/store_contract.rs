use calc_builder::calculator::{CalculatorId, Status, seed_calculator};
use calc_builder::model::{Element, ElementId, ElementKind, ElementType, Slider};
use calc_builder::store::{CalculatorStore, MemoryStore, SqliteStore};
use tempfile::TempDir;

use super::draft;

async fn stores() -> Vec<(&'static str, Box<dyn CalculatorStore>)> {
    vec![
        ("memory", Box::new(MemoryStore::seeded())),
        ("sqlite", Box::new(SqliteStore::in_memory().await.unwrap())),
    ]
}

#[tokio::test]
async fn test_fresh_store_holds_the_seed() {
    for (name, store) in stores().await {
        let all = store.load_all().await.unwrap();
        assert_eq!(all, vec![seed_calculator()], "{}", name);
    }
}

#[tokio::test]
async fn test_new_drafts_get_fresh_ids_and_draft_status() {
    for (name, store) in stores().await {
        let first = store.save(draft(None, "Logo")).await.unwrap();
        let second = store.save(draft(None, "Copywriting")).await.unwrap();
        assert_ne!(first, second, "{}", name);
        assert!(first > CalculatorId(1), "{}", name);

        let record = store.get(first).await.unwrap().unwrap();
        assert_eq!(record.status, Status::Draft, "{}", name);
        assert_eq!(record.submissions, 0, "{}", name);
        assert_eq!(record.elements.len(), 2, "{}", name);
        assert_eq!(store.load_all().await.unwrap().len(), 3, "{}", name);
    }
}

#[tokio::test]
async fn test_upsert_replaces_content_but_keeps_bookkeeping() {
    for (name, store) in stores().await {
        let id = store.save(draft(Some(CalculatorId(1)), "Website v2")).await.unwrap();
        assert_eq!(id, CalculatorId(1), "{}", name);

        let record = store.get(id).await.unwrap().unwrap();
        assert_eq!(record.name, "Website v2", "{}", name);
        assert_eq!(record.elements.len(), 2, "{}", name);
        assert_eq!(record.created_at, seed_calculator().created_at, "{}", name);
        assert_eq!(record.submissions, 45, "{}", name);
        assert_eq!(record.status, Status::Draft, "{}", name);
        assert_eq!(store.load_all().await.unwrap().len(), 1, "{}", name);
    }
}

#[tokio::test]
async fn test_status_and_delete() {
    for (name, store) in stores().await {
        let id = store.save(draft(None, "Logo")).await.unwrap();
        assert!(store.set_status(id, Status::Published).await.unwrap(), "{}", name);
        assert_eq!(store.get(id).await.unwrap().unwrap().status, Status::Published, "{}", name);

        assert!(store.delete(id).await.unwrap(), "{}", name);
        assert!(store.get(id).await.unwrap().is_none(), "{}", name);
        assert!(!store.delete(id).await.unwrap(), "{}", name);
        assert!(!store.set_status(id, Status::Draft).await.unwrap(), "{}", name);
    }
}

#[tokio::test]
async fn test_sqlite_file_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("calculators.db");

    let id = {
        let store = SqliteStore::open(&path).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        let id = store.save(draft(None, "Persisted")).await.unwrap();
        store.pool().close().await;
        id
    };

    let reopened = SqliteStore::open(&path).await.unwrap();
    let record = reopened.get(id).await.unwrap().unwrap();
    assert_eq!(record.name, "Persisted");
    assert_eq!(reopened.count().await.unwrap(), 2);
    reopened.pool().close().await;
}

#[tokio::test]
async fn test_slider_bounds_survive_sqlite() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut slider = Element::new(ElementId(1), ElementType::Slider);
    if let ElementKind::Slider(bounds) = &mut slider.kind {
        bounds.min = -10.0;
        bounds.max = 250.5;
        bounds.step = 0.5;
    }
    let mut record = draft(None, "Sliders");
    record.elements = vec![slider.clone()];
    let id = store.save(record).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().unwrap().elements, vec![slider]);

    // rows written before infinite numbers were refused hold nulls
    sqlx::query(
        r#"UPDATE calculators SET elements = '[{"id":1,"type":"slider","label":"Priority","value":"","cost":null,"min":null,"max":null,"step":null}]' WHERE id = ?"#,
    )
    .bind(id.0 as i64)
    .execute(store.pool())
    .await
    .unwrap();
    let loaded = store.get(id).await.unwrap().unwrap();
    assert_eq!(loaded.elements[0].kind, ElementKind::Slider(Slider::default()));
}
