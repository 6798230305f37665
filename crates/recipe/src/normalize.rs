use mealkit_shared::recipe::{
    DEFAULT_AREA, DEFAULT_CATEGORY, DEFAULT_INSTRUCTIONS, Ingredient, Recipe,
};

use crate::raw::{MAX_INGREDIENT_FIELDS, RawMeal};

/// Turns a catalog record into a [`Recipe`].
///
/// Returns `None` when the record carries no id. Ingredient pairs with a
/// blank name are skipped; missing category, area and instructions fall back
/// to fixed sentinels.
pub fn normalize(meal: &RawMeal) -> Option<Recipe> {
    let id = meal.id()?;

    let tags = meal
        .field("strTags")
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Some(Recipe {
        id: id.to_owned(),
        name: meal.name().unwrap_or_default().to_owned(),
        image: meal.field("strMealThumb").unwrap_or_default().to_owned(),
        category: meal.category().unwrap_or(DEFAULT_CATEGORY).to_owned(),
        area: meal.area().unwrap_or(DEFAULT_AREA).to_owned(),
        instructions: meal
            .text("strInstructions")
            .unwrap_or(DEFAULT_INSTRUCTIONS)
            .to_owned(),
        ingredients: parse_ingredients(meal),
        tags,
        youtube: meal.text("strYoutube").map(str::to_owned),
    })
}

pub fn normalize_all(meals: &[RawMeal]) -> Vec<Recipe> {
    meals.iter().filter_map(normalize).collect()
}

fn parse_ingredients(meal: &RawMeal) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENT_FIELDS)
        .filter_map(|index| {
            let (name, measure) = meal.ingredient_pair(index);
            let name = name.map(str::trim).filter(|name| !name.is_empty())?;

            Some(Ingredient::new(name, measure.map(str::trim).unwrap_or_default()))
        })
        .collect()
}

/// Criteria for narrowing an already fetched recipe list.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub category: Option<String>,
    pub area: Option<String>,
    pub search_term: Option<String>,
}

/// Keeps recipes matching every given criterion.
///
/// Category and area compare exactly; the search term matches the recipe
/// name or any ingredient name, case-insensitively.
pub fn filter_recipes(recipes: &[Recipe], filter: &RecipeFilter) -> Vec<Recipe> {
    let term = filter
        .search_term
        .as_deref()
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    recipes
        .iter()
        .filter(|recipe| {
            if filter
                .category
                .as_deref()
                .is_some_and(|category| !category.is_empty() && recipe.category != category)
            {
                return false;
            }

            if filter
                .area
                .as_deref()
                .is_some_and(|area| !area.is_empty() && recipe.area != area)
            {
                return false;
            }

            match &term {
                Some(term) => {
                    recipe.name.to_lowercase().contains(term.as_str())
                        || recipe.has_ingredient_matching(term)
                }
                None => true,
            }
        })
        .cloned()
        .collect()
}
