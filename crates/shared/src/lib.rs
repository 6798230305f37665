pub mod mealplan;
pub mod recipe;
pub mod shopping;
pub mod user;
