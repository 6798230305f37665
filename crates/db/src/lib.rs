mod error;
mod kv;
mod plan_store;

pub use error::{StoreError, StoreResult};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use plan_store::{FAVORITES_KEY, JsonPlanStore, MEAL_PLAN_KEY, PREFERENCES_KEY, PlanStore};
