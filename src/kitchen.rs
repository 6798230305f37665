//! The single owner of the user's session state.
//!
//! [`Kitchen`] keeps the weekly plan, favorites, browse preferences and the
//! recipes seen so far. Plan and recipe logic stays in the pure functions of
//! the library crates; this type only sequences them, fetches what is missing
//! and persists every mutation right away.

use std::collections::HashMap;

use tracing::{debug, info};

use mealkit_db::PlanStore;
use mealkit_mealplan::{
    SlotGrid, assign_slot, referenced_recipe_ids, remove_slot, reset_plan, resolve_slots,
};
use mealkit_recipe::{BrowseFilter, RecipeRepository, browse, normalize, normalize_all};
use mealkit_shared::mealplan::{Day, MealType, WeeklyPlan};
use mealkit_shared::recipe::{CuisineArea, Recipe, RecipeCategory};
use mealkit_shared::shopping::ShoppingList;
use mealkit_shared::user::{FavoriteSet, Preferences};
use mealkit_shopping::build_shopping_list;

pub struct Kitchen<R, P> {
    repository: R,
    store: P,
    browse_limit: usize,
    plan: WeeklyPlan,
    favorites: FavoriteSet,
    preferences: Preferences,
    recipes: HashMap<String, Recipe>,
}

impl<R: RecipeRepository, P: PlanStore> Kitchen<R, P> {
    /// Loads plan, favorites and preferences from `store`.
    pub fn open(repository: R, store: P) -> Self {
        let plan = store.get_plan();
        let favorites = store.get_favorites();
        let preferences = store.get_preferences();

        debug!(
            planned = plan.cells().filter(|(_, _, id)| id.is_some()).count(),
            favorites = favorites.len(),
            "kitchen opened"
        );

        Self {
            repository,
            store,
            browse_limit: mealkit_recipe::resolve::DEFAULT_BROWSE_LIMIT,
            plan,
            favorites,
            preferences,
            recipes: HashMap::new(),
        }
    }

    pub fn with_browse_limit(mut self, browse_limit: usize) -> Self {
        self.browse_limit = browse_limit;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Closes the kitchen, handing back its store.
    pub fn into_store(self) -> P {
        self.store
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites.contains(recipe_id)
    }

    pub async fn search(&mut self, query: &str) -> Vec<Recipe> {
        let recipes = normalize_all(&self.repository.search_by_name(query).await);
        info!(query, results = recipes.len(), "recipes searched");

        self.remember(&recipes);
        recipes
    }

    pub async fn random(&mut self) -> Option<Recipe> {
        let recipe = self
            .repository
            .get_random()
            .await
            .as_ref()
            .and_then(normalize)?;

        self.remember(std::slice::from_ref(&recipe));
        Some(recipe)
    }

    /// Returns a recipe seen earlier in the session, else fetches it.
    pub async fn recipe(&mut self, recipe_id: &str) -> Option<Recipe> {
        if let Some(recipe) = self.recipes.get(recipe_id) {
            return Some(recipe.clone());
        }

        let recipe = self
            .repository
            .get_by_id(recipe_id)
            .await
            .as_ref()
            .and_then(normalize)?;

        self.remember(std::slice::from_ref(&recipe));
        Some(recipe)
    }

    /// Lists recipes for the filter and remembers it as the last selection.
    pub async fn browse(&mut self, filter: &BrowseFilter) -> Vec<Recipe> {
        self.preferences = Preferences {
            last_category: filter.category.clone().unwrap_or_default(),
            last_area: filter.area.clone().unwrap_or_default(),
        };
        self.store.save_preferences(&self.preferences);

        let recipes = browse(&self.repository, filter, self.browse_limit).await;
        info!(
            category = ?filter.category,
            area = ?filter.area,
            results = recipes.len(),
            "recipes browsed"
        );

        self.remember(&recipes);
        recipes
    }

    pub async fn categories(&self) -> Vec<RecipeCategory> {
        self.repository.list_categories().await
    }

    pub async fn areas(&self) -> Vec<CuisineArea> {
        self.repository.list_areas().await
    }

    /// Returns `true` when the recipe is a favorite afterwards.
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> bool {
        let added = self.favorites.toggle(recipe_id);
        self.store.save_favorites(&self.favorites);

        info!(recipe_id, added, "favorite toggled");
        added
    }

    /// Favorite recipes in the order they were added. Unresolvable ids are skipped.
    pub async fn favorite_recipes(&mut self) -> Vec<Recipe> {
        let ids = self.favorites.ids().to_vec();
        self.resolve(&ids).await;

        ids.iter()
            .filter_map(|id| self.recipes.get(id))
            .cloned()
            .collect()
    }

    pub fn assign(&mut self, day: Day, meal_type: MealType, recipe_id: &str) {
        let plan = std::mem::take(&mut self.plan);
        self.plan = assign_slot(plan, day, meal_type, recipe_id);
        self.store.save_plan(&self.plan);

        info!(day = %day, meal_type = %meal_type, recipe_id, "meal assigned");
    }

    pub fn remove(&mut self, day: Day, meal_type: MealType) {
        let plan = std::mem::take(&mut self.plan);
        self.plan = remove_slot(plan, day, meal_type);
        self.store.save_plan(&self.plan);

        info!(day = %day, meal_type = %meal_type, "meal removed");
    }

    pub fn reset_plan(&mut self) {
        self.plan = reset_plan();
        self.store.save_plan(&self.plan);

        info!("plan reset");
    }

    /// Fetches the planned recipes that are not known yet.
    pub async fn resolve_plan(&mut self) {
        let ids = referenced_recipe_ids(&self.plan);
        self.resolve(&ids).await;
    }

    pub fn slot_grid(&self) -> SlotGrid {
        resolve_slots(&self.plan, &self.recipes)
    }

    pub fn shopping_list(&self) -> ShoppingList {
        build_shopping_list(&self.plan, &self.recipes)
    }

    async fn resolve(&mut self, ids: &[String]) {
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !self.recipes.contains_key(id.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            return;
        }

        let resolved = mealkit_recipe::resolve_recipes(&self.repository, &missing).await;
        debug!(
            requested = missing.len(),
            resolved = resolved.len(),
            "recipes resolved"
        );

        self.recipes.extend(resolved);
    }

    fn remember(&mut self, recipes: &[Recipe]) {
        for recipe in recipes {
            self.recipes.insert(recipe.id.clone(), recipe.clone());
        }
    }
}
