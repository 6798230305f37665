pub mod client;
pub mod error;
pub mod memory;
pub mod normalize;
pub mod raw;
pub mod repository;
pub mod resolve;

pub use client::{MealDbClient, MealDbConfig};
pub use error::{CatalogError, CatalogResult};
pub use memory::InMemoryCatalog;
pub use normalize::{RecipeFilter, filter_recipes, normalize, normalize_all};
pub use raw::RawMeal;
pub use repository::RecipeRepository;
pub use resolve::{BrowseFilter, browse, resolve_recipes};
