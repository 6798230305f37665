pub mod aggregation;
pub mod categorization;
pub mod list;

pub use aggregation::{IngredientAggregationService, normalize_name};
pub use categorization::{CATEGORY_RULES, CategorizationService};
pub use list::build_shopping_list;
