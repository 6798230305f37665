use thiserror::Error;

pub type MealPlanResult<T> = Result<T, MealPlanError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MealPlanError {
    #[error("Invalid slot key: {day}/{meal_type}")]
    InvalidSlotKey { day: String, meal_type: String },
}
