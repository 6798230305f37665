use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery sections of the shopping list, in display order.
#[derive(
    Serialize, EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum ShoppingCategory {
    #[strum(serialize = "Produce")]
    Produce,
    #[strum(serialize = "Meat & Seafood")]
    MeatAndSeafood,
    #[strum(serialize = "Dairy")]
    Dairy,
    #[strum(serialize = "Pantry")]
    Pantry,
    #[strum(serialize = "Spices & Herbs")]
    SpicesAndHerbs,
    #[strum(serialize = "Other")]
    Other,
}

/// One aggregated ingredient line.
///
/// `name` keeps the casing of the first occurrence; `measures` keeps every
/// non-empty measure in encounter order, repeats included.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingListEntry {
    pub name: String,
    pub measures: Vec<String>,
}

impl ShoppingListEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measures: Vec::new(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingSection {
    pub category: ShoppingCategory,
    pub entries: Vec<ShoppingListEntry>,
}

/// Shopping list grouped by category.
///
/// Always holds one section per [`ShoppingCategory`], in declaration order,
/// even when a section has no entries.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingList {
    pub sections: Vec<ShoppingSection>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self {
            sections: ShoppingCategory::VARIANTS
                .iter()
                .map(|category| ShoppingSection {
                    category: *category,
                    entries: Vec::new(),
                })
                .collect(),
        }
    }
}

impl ShoppingList {
    pub fn entries(&self, category: ShoppingCategory) -> &[ShoppingListEntry] {
        self.sections
            .iter()
            .find(|section| section.category == category)
            .map(|section| section.entries.as_slice())
            .unwrap_or_default()
    }

    pub fn push(&mut self, category: ShoppingCategory, entry: ShoppingListEntry) {
        if let Some(section) = self
            .sections
            .iter_mut()
            .find(|section| section.category == category)
        {
            section.entries.push(entry);
        }
    }

    pub fn total_entries(&self) -> usize {
        self.sections.iter().map(|section| section.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }

    pub fn non_empty_sections(&self) -> impl Iterator<Item = &ShoppingSection> {
        self.sections
            .iter()
            .filter(|section| !section.entries.is_empty())
    }
}
