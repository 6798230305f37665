use mealkit_db::StoreError;
use mealkit_mealplan::MealPlanError;
use mealkit_recipe::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("{0}")]
    MealPlanError(#[from] MealPlanError),

    #[error("Catalog client error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Storage error: {0}")]
    StoreError(#[from] StoreError),

    #[error("Recipe {0} not found")]
    RecipeNotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;
