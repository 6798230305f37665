use std::collections::HashMap;

use futures::future::join_all;
use tracing::debug;

use mealkit_shared::recipe::Recipe;

use crate::normalize::{normalize, normalize_all};
use crate::raw::RawMeal;
use crate::repository::RecipeRepository;

pub const DEFAULT_BROWSE_LIMIT: usize = 20;

/// Fetches every id concurrently and waits for all of them.
///
/// Ids whose lookup fails or returns nothing are left out of the result;
/// one failure never aborts the batch.
pub async fn resolve_recipes<R>(repository: &R, ids: &[String]) -> HashMap<String, Recipe>
where
    R: RecipeRepository + ?Sized,
{
    let lookups = ids
        .iter()
        .map(|id| async move { (id, repository.get_by_id(id).await) });

    let mut resolved = HashMap::with_capacity(ids.len());
    for (id, meal) in join_all(lookups).await {
        match meal.as_ref().and_then(normalize) {
            Some(recipe) => {
                resolved.insert(recipe.id.clone(), recipe);
            }
            None => debug!(recipe_id = %id, "recipe unresolved"),
        }
    }

    resolved
}

/// Category and area filters of the browse view. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    pub category: Option<String>,
    pub area: Option<String>,
}

impl BrowseFilter {
    pub fn new(category: Option<String>, area: Option<String>) -> Self {
        let keep = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            category: keep(category),
            area: keep(area),
        }
    }
}

/// Lists recipes for the browse view.
///
/// Filter endpoints only return summaries, so the first `limit` hits are
/// looked up in full. With both filters the category listing drives the
/// lookups and area is checked on the full records. Without filters the
/// catalog's default listing is used.
pub async fn browse<R>(repository: &R, filter: &BrowseFilter, limit: usize) -> Vec<Recipe>
where
    R: RecipeRepository + ?Sized,
{
    let meals = match (filter.category.as_deref(), filter.area.as_deref()) {
        (Some(category), Some(area)) => {
            let hits = repository.filter_by_category(category).await;
            lookup_details(repository, &hits, limit)
                .await
                .into_iter()
                .filter(|meal| meal.area() == Some(area))
                .collect()
        }
        (Some(category), None) => {
            let hits = repository.filter_by_category(category).await;
            lookup_details(repository, &hits, limit).await
        }
        (None, Some(area)) => {
            let hits = repository.filter_by_area(area).await;
            lookup_details(repository, &hits, limit).await
        }
        (None, None) => repository.search_by_name("").await,
    };

    normalize_all(&meals)
}

async fn lookup_details<R>(repository: &R, hits: &[RawMeal], limit: usize) -> Vec<RawMeal>
where
    R: RecipeRepository + ?Sized,
{
    let lookups = hits
        .iter()
        .filter_map(RawMeal::id)
        .take(limit)
        .map(|id| repository.get_by_id(id));

    join_all(lookups).await.into_iter().flatten().collect()
}
