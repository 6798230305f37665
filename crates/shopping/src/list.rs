use std::collections::HashMap;

use tracing::debug;

use mealkit_shared::mealplan::WeeklyPlan;
use mealkit_shared::recipe::Recipe;
use mealkit_shared::shopping::ShoppingList;

use crate::aggregation::IngredientAggregationService;
use crate::categorization::CategorizationService;

/// Derives the categorized shopping list for `plan`.
///
/// Every section is present in the result, empty or not. Only ids resolved
/// in `recipes_by_id` contribute ingredients.
pub fn build_shopping_list(
    plan: &WeeklyPlan,
    recipes_by_id: &HashMap<String, Recipe>,
) -> ShoppingList {
    let mut list = ShoppingList::default();

    for (key, entry) in IngredientAggregationService::aggregate(plan, recipes_by_id) {
        list.push(CategorizationService::categorize(&key), entry);
    }

    debug!(entries = list.total_entries(), "shopping list built");

    list
}
