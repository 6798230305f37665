use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use mealkit_shared::mealplan::WeeklyPlan;
use mealkit_shared::user::{FavoriteSet, Preferences};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const MEAL_PLAN_KEY: &str = "mealPlan";
pub const FAVORITES_KEY: &str = "favorites";
pub const PREFERENCES_KEY: &str = "preferences";

/// Persistence of the user's plan, favorites and browse preferences.
///
/// Loads never fail: a missing or unreadable value yields the default.
/// Saves are fire-and-forget; failures are logged.
pub trait PlanStore: Send + Sync {
    fn get_plan(&self) -> WeeklyPlan;

    fn save_plan(&self, plan: &WeeklyPlan);

    fn get_favorites(&self) -> FavoriteSet;

    fn save_favorites(&self, favorites: &FavoriteSet);

    fn get_preferences(&self) -> Preferences;

    fn save_preferences(&self, preferences: &Preferences);
}

/// [`PlanStore`] keeping each value as a JSON document in a [`KeyValueStore`].
pub struct JsonPlanStore<S> {
    store: S,
}

impl<S: KeyValueStore> JsonPlanStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key, error = %e, "malformed persisted value, using default");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                error!(key, error = %e, "Error loading persisted value");
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StoreError::from)
            .and_then(|raw| self.store.set(key, &raw));

        if let Err(e) = result {
            error!(key, error = %e, "Error saving persisted value");
        }
    }
}

impl<S: KeyValueStore> PlanStore for JsonPlanStore<S> {
    fn get_plan(&self) -> WeeklyPlan {
        self.load(MEAL_PLAN_KEY)
    }

    fn save_plan(&self, plan: &WeeklyPlan) {
        self.save(MEAL_PLAN_KEY, plan);
    }

    fn get_favorites(&self) -> FavoriteSet {
        self.load(FAVORITES_KEY)
    }

    fn save_favorites(&self, favorites: &FavoriteSet) {
        self.save(FAVORITES_KEY, favorites);
    }

    fn get_preferences(&self) -> Preferences {
        self.load(PREFERENCES_KEY)
    }

    fn save_preferences(&self, preferences: &Preferences) {
        self.save(PREFERENCES_KEY, preferences);
    }
}
