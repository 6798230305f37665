pub mod config;
pub mod error;
pub mod kitchen;
pub mod observability;
pub mod view;

use mealkit_db::{JsonFileStore, JsonPlanStore};
use mealkit_recipe::MealDbClient;

pub use error::{AppError, AppResult};
pub use kitchen::Kitchen;

/// Kitchen backed by the remote catalog and the JSON data directory
pub type AppKitchen = Kitchen<MealDbClient, JsonPlanStore<JsonFileStore>>;

/// Open the kitchen described by `config`
///
/// Creates the data directory on first use.
pub fn open_kitchen(config: &config::Config) -> AppResult<AppKitchen> {
    let client = MealDbClient::new(config.catalog.client_config())?;
    let store = JsonPlanStore::new(JsonFileStore::open(&config.storage.data_dir)?);

    Ok(Kitchen::open(client, store).with_browse_limit(config.catalog.browse_limit))
}
