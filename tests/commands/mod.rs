/// Command handler tests against an in-memory store

pub mod calculators;
pub mod elements;
pub mod estimates;

use calc_builder::calculator::CalculatorId;
use calc_builder::commands::calculator::new_command;
use calc_builder::store::MemoryStore;

pub async fn store_with_blank() -> (MemoryStore, CalculatorId) {
    let store = MemoryStore::seeded();
    let id = new_command(&store, "Logo Design".to_string(), "Brand marks".to_string())
        .await
        .unwrap();
    (store, id)
}
