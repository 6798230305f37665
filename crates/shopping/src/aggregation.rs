use std::collections::HashMap;

use mealkit_shared::mealplan::WeeklyPlan;
use mealkit_shared::recipe::Recipe;
use mealkit_shared::shopping::ShoppingListEntry;

/// Aggregation key of an ingredient: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that merges the ingredients of every planned
/// recipe into one entry per normalized name.
///
/// - "Egg" + " egg " = one entry named "Egg"
/// - "1 cup" + "1 cup" = measures ["1 cup", "1 cup"]; repeats are kept so
///   the list shows one measure per planned recipe
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Aggregate the ingredients of all resolved recipes in `plan`
    ///
    /// Cells are walked monday to sunday, breakfast to dinner, and each
    /// recipe's ingredients in declared order. The result keeps first-seen
    /// order, so the first occurrence also decides the entry's casing.
    /// Cells whose id is missing from `recipes_by_id` are skipped.
    pub fn aggregate(
        plan: &WeeklyPlan,
        recipes_by_id: &HashMap<String, Recipe>,
    ) -> Vec<(String, ShoppingListEntry)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, ShoppingListEntry)> = Vec::new();

        let recipes = plan
            .cells()
            .filter_map(|(_, _, recipe_id)| recipe_id)
            .filter_map(|recipe_id| recipes_by_id.get(recipe_id));

        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                let key = normalize_name(&ingredient.name);
                if key.is_empty() {
                    continue;
                }

                let position = *index.entry(key.clone()).or_insert_with(|| {
                    entries.push((key, ShoppingListEntry::new(ingredient.name.clone())));
                    entries.len() - 1
                });

                if !ingredient.measure.is_empty() {
                    entries[position].1.measures.push(ingredient.measure.clone());
                }
            }
        }

        entries
    }
}
