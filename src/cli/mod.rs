pub mod favorites;
pub mod plan;
pub mod recipe;
