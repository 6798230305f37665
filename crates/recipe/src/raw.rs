//! Catalog wire records.
//!
//! TheMealDB returns flat objects with numbered `strIngredientN` /
//! `strMeasureN` fields, so a meal is kept as a loose JSON map and read
//! through accessors instead of a fixed struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use mealkit_shared::recipe::RecipeCategory;

pub const MAX_INGREDIENT_FIELDS: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RawMeal(Map<String, Value>);

impl RawMeal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by fixtures and the in-memory catalog.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_owned(), Value::String(value.into()));
        self
    }

    /// String value of `key`; `null` and non-string values read as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Trimmed value of `key`, absent when blank.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.field(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.text("idMeal")
    }

    pub fn name(&self) -> Option<&str> {
        self.field("strMeal")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("strCategory")
    }

    pub fn area(&self) -> Option<&str> {
        self.text("strArea")
    }

    /// Ingredient name and measure of the 1-based field pair `index`.
    pub fn ingredient_pair(&self, index: usize) -> (Option<&str>, Option<&str>) {
        (
            self.field(&format!("strIngredient{index}")),
            self.field(&format!("strMeasure{index}")),
        )
    }

    /// Catalog summary (id, name, thumbnail) as returned by `filter.php`.
    pub fn summary(&self) -> Self {
        let mut summary = Map::new();
        for key in ["idMeal", "strMeal", "strMealThumb"] {
            if let Some(value) = self.0.get(key) {
                summary.insert(key.to_owned(), value.clone());
            }
        }
        Self(summary)
    }
}

impl From<Map<String, Value>> for RawMeal {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct RawCategory {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

impl From<RawCategory> for RecipeCategory {
    fn from(value: RawCategory) -> Self {
        Self {
            name: value.name,
            thumbnail: value.thumbnail,
            description: value.description,
        }
    }
}
