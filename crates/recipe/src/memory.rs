use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use mealkit_shared::recipe::{CuisineArea, RecipeCategory};

use crate::raw::RawMeal;
use crate::repository::RecipeRepository;

/// Catalog served from memory, for tests and offline use.
///
/// Filters return summary records like the remote catalog does, so callers
/// still have to look the full record up by id.
#[derive(Default)]
pub struct InMemoryCatalog {
    meals: Vec<RawMeal>,
    lookups: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new(meals: Vec<RawMeal>) -> Self {
        Self {
            meals,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of `get_by_id` calls served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn distinct(&self, key: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for value in self.meals.iter().filter_map(|meal| meal.text(key)) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_owned());
            }
        }
        values
    }
}

#[async_trait]
impl RecipeRepository for InMemoryCatalog {
    async fn search_by_name(&self, query: &str) -> Vec<RawMeal> {
        let query = query.trim().to_lowercase();

        self.meals
            .iter()
            .filter(|meal| {
                meal.name()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> Option<RawMeal> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.meals.iter().find(|meal| meal.id() == Some(id)).cloned()
    }

    async fn get_random(&self) -> Option<RawMeal> {
        self.meals.first().cloned()
    }

    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal> {
        self.meals
            .iter()
            .filter(|meal| meal.category() == Some(category))
            .map(RawMeal::summary)
            .collect()
    }

    async fn filter_by_area(&self, area: &str) -> Vec<RawMeal> {
        self.meals
            .iter()
            .filter(|meal| meal.area() == Some(area))
            .map(RawMeal::summary)
            .collect()
    }

    async fn list_categories(&self) -> Vec<RecipeCategory> {
        self.distinct("strCategory")
            .into_iter()
            .map(|name| RecipeCategory {
                name,
                thumbnail: None,
                description: None,
            })
            .collect()
    }

    async fn list_areas(&self) -> Vec<CuisineArea> {
        self.distinct("strArea")
            .into_iter()
            .map(|name| CuisineArea { name })
            .collect()
    }
}
