use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

/// The three meal slots of one day. Empty slots serialize as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DayPlan {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl DayPlan {
    pub fn get(&self, meal_type: MealType) -> Option<&str> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_deref(),
            MealType::Lunch => self.lunch.as_deref(),
            MealType::Dinner => self.dinner.as_deref(),
        }
    }

    pub fn set(&mut self, meal_type: MealType, recipe_id: Option<String>) {
        let slot = match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        };

        *slot = recipe_id;
    }
}

/// Seven days of three meal slots each.
///
/// Every one of the 21 cells is always present: an unassigned slot is `None`
/// and serializes as `null`, never as a missing key. Days missing from a
/// persisted document deserialize as empty days.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WeeklyPlan {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
    pub saturday: DayPlan,
    pub sunday: DayPlan,
}

impl WeeklyPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &DayPlan {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DayPlan {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }

    pub fn get(&self, day: Day, meal_type: MealType) -> Option<&str> {
        self.day(day).get(meal_type)
    }

    pub fn set(&mut self, day: Day, meal_type: MealType, recipe_id: Option<String>) {
        self.day_mut(day).set(meal_type, recipe_id);
    }

    /// All 21 cells, monday to sunday, breakfast to dinner.
    pub fn cells(&self) -> impl Iterator<Item = (Day, MealType, Option<&str>)> + '_ {
        Day::VARIANTS.iter().flat_map(move |day| {
            MealType::VARIANTS
                .iter()
                .map(move |meal_type| (*day, *meal_type, self.get(*day, *meal_type)))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.cells().all(|(_, _, recipe_id)| recipe_id.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_plan_serializes_every_cell_as_null() {
        let value = serde_json::to_value(WeeklyPlan::empty()).unwrap();
        let days = value.as_object().unwrap();

        assert_eq!(days.len(), 7);
        for day in Day::VARIANTS {
            let key: &str = day.as_ref();
            let meals = days[key].as_object().unwrap();
            assert_eq!(meals.len(), 3);
            assert!(meals.values().all(|v| v.is_null()));
        }
    }

    #[test]
    fn test_partial_document_fills_missing_cells() {
        let plan: WeeklyPlan =
            serde_json::from_str(r#"{"friday":{"dinner":"52772"}}"#).unwrap();

        assert_eq!(plan.get(Day::Friday, MealType::Dinner), Some("52772"));
        assert_eq!(plan.cells().filter(|(_, _, id)| id.is_some()).count(), 1);
    }

    #[test]
    fn test_cells_order() {
        let plan = WeeklyPlan::empty();
        let cells: Vec<_> = plan.cells().map(|(d, m, _)| (d, m)).collect();

        assert_eq!(cells.len(), 21);
        assert_eq!(cells[0], (Day::Monday, MealType::Breakfast));
        assert_eq!(cells[1], (Day::Monday, MealType::Lunch));
        assert_eq!(cells[20], (Day::Sunday, MealType::Dinner));
    }

    #[test]
    fn test_keys_parse_lowercase() {
        assert_eq!(Day::from_str("wednesday").unwrap(), Day::Wednesday);
        assert_eq!(MealType::from_str("dinner").unwrap(), MealType::Dinner);
        assert!(Day::from_str("funday").is_err());
        assert_eq!(Day::Saturday.to_string(), "saturday");
    }
}
