use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_AREA: &str = "International";
pub const DEFAULT_INSTRUCTIONS: &str = "No instructions available";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

/// A normalized catalog recipe.
///
/// Built once from a catalog record and never mutated afterwards. `id` is the
/// opaque catalog identifier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub tags: Vec<String>,
    pub youtube: Option<String>,
}

impl Recipe {
    /// Minimal recipe with sentinel metadata, mostly useful to build fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            category: DEFAULT_CATEGORY.to_owned(),
            area: DEFAULT_AREA.to_owned(),
            instructions: DEFAULT_INSTRUCTIONS.to_owned(),
            ingredients: Vec::new(),
            tags: Vec::new(),
            youtube: None,
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn has_ingredient_matching(&self, term: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(term))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecipeCategory {
    pub name: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CuisineArea {
    pub name: String,
}
