use std::str::FromStr;

use mealkit_shared::mealplan::{Day, MealType, WeeklyPlan};

use crate::error::{MealPlanError, MealPlanResult};

/// Parses textual slot keys such as `("wednesday", "dinner")`.
///
/// Keys are matched case-insensitively after trimming.
pub fn parse_slot(day: &str, meal_type: &str) -> MealPlanResult<(Day, MealType)> {
    let invalid = || MealPlanError::InvalidSlotKey {
        day: day.to_owned(),
        meal_type: meal_type.to_owned(),
    };

    let parsed_day = Day::from_str(&day.trim().to_lowercase()).map_err(|_| invalid())?;
    let parsed_meal = MealType::from_str(&meal_type.trim().to_lowercase()).map_err(|_| invalid())?;

    Ok((parsed_day, parsed_meal))
}

/// Puts `recipe_id` in the slot, replacing whatever was there.
pub fn assign_slot(
    mut plan: WeeklyPlan,
    day: Day,
    meal_type: MealType,
    recipe_id: impl Into<String>,
) -> WeeklyPlan {
    plan.set(day, meal_type, Some(recipe_id.into()));
    plan
}

/// Clears the slot. Clearing an empty slot leaves the plan unchanged.
pub fn remove_slot(mut plan: WeeklyPlan, day: Day, meal_type: MealType) -> WeeklyPlan {
    plan.set(day, meal_type, None);
    plan
}

pub fn reset_plan() -> WeeklyPlan {
    WeeklyPlan::empty()
}

/// Distinct recipe ids referenced by the plan, in slot order.
pub fn referenced_recipe_ids(plan: &WeeklyPlan) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();

    for recipe_id in plan.cells().filter_map(|(_, _, recipe_id)| recipe_id) {
        if !ids.iter().any(|id| id == recipe_id) {
            ids.push(recipe_id.to_owned());
        }
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_accepts_any_case() {
        assert_eq!(
            parse_slot(" Wednesday ", "DINNER").unwrap(),
            (Day::Wednesday, MealType::Dinner)
        );
    }

    #[test]
    fn test_parse_slot_rejects_unknown_keys() {
        assert_eq!(
            parse_slot("funday", "lunch"),
            Err(MealPlanError::InvalidSlotKey {
                day: "funday".to_owned(),
                meal_type: "lunch".to_owned(),
            })
        );
        assert!(parse_slot("monday", "brunch").is_err());
    }

    #[test]
    fn test_referenced_ids_are_distinct_and_ordered() {
        let plan = assign_slot(WeeklyPlan::empty(), Day::Friday, MealType::Lunch, "b");
        let plan = assign_slot(plan, Day::Monday, MealType::Dinner, "a");
        let plan = assign_slot(plan, Day::Sunday, MealType::Breakfast, "a");

        assert_eq!(referenced_recipe_ids(&plan), vec!["a", "b"]);
    }
}
