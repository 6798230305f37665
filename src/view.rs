//! Plain-text rendering of recipes, the plan grid and the shopping list.

use askama::Template;

use mealkit_mealplan::SlotGrid;
use mealkit_shared::recipe::Recipe;
use mealkit_shared::shopping::ShoppingList;
use mealkit_shared::user::FavoriteSet;

pub const EMPTY_SLOT: &str = "No meal planned";

/// Recipe row for list templates
#[derive(Debug, Clone)]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub favorite: bool,
}

#[derive(Template)]
#[template(path = "recipes.txt")]
pub struct RecipeListTemplate {
    pub title: String,
    pub recipes: Vec<RecipeRow>,
}

impl RecipeListTemplate {
    pub fn new(title: impl Into<String>, recipes: &[Recipe], favorites: &FavoriteSet) -> Self {
        let recipes = recipes
            .iter()
            .map(|recipe| RecipeRow {
                id: recipe.id.clone(),
                name: recipe.name.clone(),
                category: recipe.category.clone(),
                area: recipe.area.clone(),
                favorite: favorites.contains(&recipe.id),
            })
            .collect();

        Self {
            title: title.into(),
            recipes,
        }
    }
}

#[derive(Template)]
#[template(path = "recipe-detail.txt")]
pub struct RecipeDetailTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub tags: String,
    pub youtube: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub favorite: bool,
}

impl RecipeDetailTemplate {
    pub fn new(recipe: &Recipe, favorite: bool) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                if ingredient.measure.is_empty() {
                    ingredient.name.clone()
                } else {
                    format!("{} {}", ingredient.measure, ingredient.name)
                }
            })
            .collect();

        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            tags: recipe.tags.join(", "),
            youtube: recipe.youtube.clone().unwrap_or_default(),
            ingredients,
            instructions: recipe.instructions.clone(),
            favorite,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotRow {
    pub meal: &'static str,
    pub recipe: String,
}

#[derive(Debug, Clone)]
pub struct DayRow {
    pub label: &'static str,
    pub slots: Vec<SlotRow>,
}

#[derive(Template)]
#[template(path = "plan.txt")]
pub struct PlanTemplate {
    pub days: Vec<DayRow>,
}

impl From<&SlotGrid> for PlanTemplate {
    fn from(grid: &SlotGrid) -> Self {
        let days = grid
            .days
            .iter()
            .map(|group| DayRow {
                label: group.day.label(),
                slots: group
                    .slots
                    .iter()
                    .map(|slot| SlotRow {
                        meal: slot.meal_type.label(),
                        recipe: match &slot.recipe {
                            Some(recipe) => format!("{} ({})", recipe.name, recipe.id),
                            None => EMPTY_SLOT.to_owned(),
                        },
                    })
                    .collect(),
            })
            .collect();

        Self { days }
    }
}

#[derive(Debug, Clone)]
pub struct EntryRow {
    pub name: String,
    /// Measures joined with ", "; empty when the entry has none
    pub measures: String,
}

#[derive(Debug, Clone)]
pub struct SectionRow {
    pub name: String,
    pub entries: Vec<EntryRow>,
}

/// Shopping list with empty categories left out.
#[derive(Template)]
#[template(path = "shopping-list.txt")]
pub struct ShoppingListTemplate {
    pub sections: Vec<SectionRow>,
}

impl From<&ShoppingList> for ShoppingListTemplate {
    fn from(list: &ShoppingList) -> Self {
        let sections = list
            .non_empty_sections()
            .map(|section| SectionRow {
                name: section.category.to_string(),
                entries: section
                    .entries
                    .iter()
                    .map(|entry| EntryRow {
                        name: entry.name.clone(),
                        measures: entry.measures.join(", "),
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }
}

#[derive(Template)]
#[template(path = "names.txt")]
pub struct NameListTemplate {
    pub title: String,
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealkit_mealplan::resolve_slots;
    use mealkit_shared::mealplan::{Day, MealType, WeeklyPlan};
    use mealkit_shared::recipe::Ingredient;
    use mealkit_shared::shopping::{ShoppingCategory, ShoppingListEntry};
    use std::collections::HashMap;

    #[test]
    fn test_plan_renders_every_slot() {
        let recipe = Recipe::new("52772", "Teriyaki Chicken Casserole");
        let mut plan = WeeklyPlan::empty();
        plan.set(Day::Wednesday, MealType::Dinner, Some("52772".to_owned()));
        plan.set(Day::Friday, MealType::Lunch, Some("missing".to_owned()));
        let recipes = HashMap::from([(recipe.id.clone(), recipe)]);

        let output = PlanTemplate::from(&resolve_slots(&plan, &recipes))
            .render()
            .unwrap();

        assert!(output.contains("Wednesday"));
        assert!(output.contains("Dinner: Teriyaki Chicken Casserole (52772)"));
        assert_eq!(output.matches(EMPTY_SLOT).count(), 20);
    }

    #[test]
    fn test_shopping_list_skips_empty_sections() {
        let mut list = ShoppingList::default();
        list.push(
            ShoppingCategory::Produce,
            ShoppingListEntry {
                name: "Tomato".to_owned(),
                measures: vec!["2".to_owned(), "1 cup".to_owned()],
            },
        );
        list.push(ShoppingCategory::Other, ShoppingListEntry::new("Quinoa"));

        let output = ShoppingListTemplate::from(&list).render().unwrap();

        assert!(output.contains("Produce"));
        assert!(output.contains("- Tomato (2, 1 cup)"));
        assert!(output.contains("- Quinoa\n"));
        assert!(!output.contains("Dairy"));
        assert!(!output.contains("Meat & Seafood"));
    }

    #[test]
    fn test_empty_shopping_list_shows_notice() {
        let output = ShoppingListTemplate::from(&ShoppingList::default())
            .render()
            .unwrap();

        assert!(output.contains("Add meals to your plan first!"));
    }

    #[test]
    fn test_recipe_detail() {
        let mut recipe = Recipe::new("52772", "Teriyaki Chicken Casserole").with_ingredients(vec![
            Ingredient::new("soy sauce", "3/4 cup"),
            Ingredient::new("Salt", ""),
        ]);
        recipe.tags = vec!["Meat".to_owned(), "Casserole".to_owned()];

        let output = RecipeDetailTemplate::new(&recipe, true).render().unwrap();

        assert!(output.contains("Teriyaki Chicken Casserole [favorite]"));
        assert!(output.contains("Tags: Meat, Casserole"));
        assert!(output.contains("- 3/4 cup soy sauce"));
        assert!(output.contains("- Salt\n"));
        assert!(output.contains("No instructions available"));
        assert!(!output.contains("Video:"));
    }

    #[test]
    fn test_recipe_list_marks_favorites() {
        let recipes = vec![Recipe::new("1", "Arrabiata"), Recipe::new("2", "Kumpir")];
        let favorites = FavoriteSet::from(vec!["2".to_owned()]);

        let output = RecipeListTemplate::new("Search results", &recipes, &favorites)
            .render()
            .unwrap();

        assert!(output.contains("  1  Arrabiata (Uncategorized, International)"));
        assert!(output.contains("* 2  Kumpir"));
    }

    #[test]
    fn test_recipe_list_empty() {
        let output = RecipeListTemplate::new("Favorites", &[], &FavoriteSet::new())
            .render()
            .unwrap();

        assert!(output.contains("No recipes found."));
    }
}
