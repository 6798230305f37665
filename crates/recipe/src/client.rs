//! TheMealDB HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use mealkit_shared::recipe::{CuisineArea, RecipeCategory};

use crate::error::CatalogResult;
use crate::raw::{CategoriesEnvelope, MealsEnvelope, RawMeal};
use crate::repository::RecipeRepository;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone)]
pub struct MealDbConfig {
    /// API root, without trailing endpoint.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 10,
        }
    }
}

pub struct MealDbClient {
    client: reqwest::Client,
    config: MealDbConfig,
}

impl MealDbClient {
    pub fn new(config: MealDbConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, endpoint: &str, query: Option<(&str, &str)>) -> String {
        let base = self.config.base_url.trim_end_matches('/');

        match query {
            Some((key, value)) => format!(
                "{base}/{endpoint}?{key}={}",
                urlencoding::encode(value)
            ),
            None => format!("{base}/{endpoint}"),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> CatalogResult<T> {
        debug!(url, "catalog request");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn meals(&self, url: String, action: &str) -> Vec<RawMeal> {
        match self.fetch::<MealsEnvelope>(&url).await {
            Ok(envelope) => envelope.meals.unwrap_or_default(),
            Err(e) => {
                error!(error = %e, url = %url, "Error {action}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl RecipeRepository for MealDbClient {
    async fn search_by_name(&self, query: &str) -> Vec<RawMeal> {
        let url = self.url("search.php", Some(("s", query)));
        self.meals(url, "searching recipes").await
    }

    async fn get_by_id(&self, id: &str) -> Option<RawMeal> {
        let url = self.url("lookup.php", Some(("i", id)));
        self.meals(url, "fetching recipe").await.into_iter().next()
    }

    async fn get_random(&self) -> Option<RawMeal> {
        let url = self.url("random.php", None);
        self.meals(url, "fetching random recipe")
            .await
            .into_iter()
            .next()
    }

    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal> {
        let url = self.url("filter.php", Some(("c", category)));
        self.meals(url, "filtering by category").await
    }

    async fn filter_by_area(&self, area: &str) -> Vec<RawMeal> {
        let url = self.url("filter.php", Some(("a", area)));
        self.meals(url, "filtering by area").await
    }

    async fn list_categories(&self) -> Vec<RecipeCategory> {
        let url = self.url("categories.php", None);

        match self.fetch::<CategoriesEnvelope>(&url).await {
            Ok(envelope) => envelope
                .categories
                .unwrap_or_default()
                .into_iter()
                .map(RecipeCategory::from)
                .collect(),
            Err(e) => {
                error!(error = %e, url = %url, "Error listing categories");
                Vec::new()
            }
        }
    }

    async fn list_areas(&self) -> Vec<CuisineArea> {
        let url = self.url("list.php", Some(("a", "list")));

        self.meals(url, "listing areas")
            .await
            .iter()
            .filter_map(|meal| meal.area())
            .map(|name| CuisineArea {
                name: name.to_owned(),
            })
            .collect()
    }
}
