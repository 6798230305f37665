use serde::{Deserialize, Serialize};

/// Favorite recipe ids in the order they were added.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>")]
pub struct FavoriteSet(Vec<String>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `recipe_id` when absent, removes it when present.
    ///
    /// Returns `true` when the id is a favorite after the call.
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        match self.0.iter().position(|id| id == recipe_id) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(recipe_id.to_owned());
                true
            }
        }
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.0.iter().any(|id| id == recipe_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for FavoriteSet {
    fn from(ids: Vec<String>) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            if !favorites.contains(&id) {
                favorites.0.push(id);
            }
        }
        favorites
    }
}

/// Last browse filters the user picked.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub last_category: String,
    pub last_area: String,
}
