use std::sync::Arc;

use async_trait::async_trait;
use mealkit_shared::recipe::{CuisineArea, RecipeCategory};

use crate::raw::RawMeal;

/// Read access to the recipe catalog.
///
/// Implementations never fail: transport and parse errors are logged and
/// reported as an empty collection or `None`.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn search_by_name(&self, query: &str) -> Vec<RawMeal>;

    async fn get_by_id(&self, id: &str) -> Option<RawMeal>;

    async fn get_random(&self) -> Option<RawMeal>;

    /// Summary records (id, name, thumbnail) in `category`.
    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal>;

    /// Summary records (id, name, thumbnail) from `area`.
    async fn filter_by_area(&self, area: &str) -> Vec<RawMeal>;

    async fn list_categories(&self) -> Vec<RecipeCategory>;

    async fn list_areas(&self) -> Vec<CuisineArea>;
}

#[async_trait]
impl RecipeRepository for Arc<dyn RecipeRepository> {
    async fn search_by_name(&self, query: &str) -> Vec<RawMeal> {
        (**self).search_by_name(query).await
    }

    async fn get_by_id(&self, id: &str) -> Option<RawMeal> {
        (**self).get_by_id(id).await
    }

    async fn get_random(&self) -> Option<RawMeal> {
        (**self).get_random().await
    }

    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal> {
        (**self).filter_by_category(category).await
    }

    async fn filter_by_area(&self, area: &str) -> Vec<RawMeal> {
        (**self).filter_by_area(area).await
    }

    async fn list_categories(&self) -> Vec<RecipeCategory> {
        (**self).list_categories().await
    }

    async fn list_areas(&self) -> Vec<CuisineArea> {
        (**self).list_areas().await
    }
}
