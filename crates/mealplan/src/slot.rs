use std::collections::HashMap;

use serde::Serialize;
use strum::VariantArray;

use mealkit_shared::mealplan::{Day, MealType, WeeklyPlan};
use mealkit_shared::recipe::Recipe;

/// One cell of the rendered plan.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SlotEntry {
    pub day: Day,
    pub meal_type: MealType,
    pub recipe: Option<Recipe>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayGroup {
    pub day: Day,
    pub slots: Vec<SlotEntry>,
}

/// The plan with recipe ids swapped for recipes: seven day groups of three
/// slots, monday first, breakfast first.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SlotGrid {
    pub days: Vec<DayGroup>,
}

impl SlotGrid {
    pub fn slots(&self) -> impl Iterator<Item = &SlotEntry> {
        self.days.iter().flat_map(|group| group.slots.iter())
    }

    pub fn filled(&self) -> usize {
        self.slots().filter(|slot| slot.recipe.is_some()).count()
    }
}

/// Builds the display grid for `plan`.
///
/// An id missing from `recipes_by_id` renders as an empty slot, the same as
/// an unassigned one.
pub fn resolve_slots(plan: &WeeklyPlan, recipes_by_id: &HashMap<String, Recipe>) -> SlotGrid {
    let days = Day::VARIANTS
        .iter()
        .map(|day| DayGroup {
            day: *day,
            slots: MealType::VARIANTS
                .iter()
                .map(|meal_type| SlotEntry {
                    day: *day,
                    meal_type: *meal_type,
                    recipe: plan
                        .get(*day, *meal_type)
                        .and_then(|id| recipes_by_id.get(id))
                        .cloned(),
                })
                .collect(),
        })
        .collect();

    SlotGrid { days }
}
