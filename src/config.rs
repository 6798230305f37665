use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealkit_recipe::MealDbConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Maximum number of full lookups per browse request
    pub browse_limit: usize,
}

impl CatalogConfig {
    pub fn client_config(&self) -> MealDbConfig {
        MealDbConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALKIT__CATALOG__BASE_URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("catalog.base_url", mealkit_recipe::client::DEFAULT_BASE_URL)?
            .set_default("catalog.timeout_secs", 10)?
            .set_default(
                "catalog.browse_limit",
                mealkit_recipe::resolve::DEFAULT_BROWSE_LIMIT as u64,
            )?
            .set_default("storage.data_dir", ".mealkit")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALKIT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.base_url.trim().is_empty() {
            return Err("Catalog base_url must not be empty".to_string());
        }
        if self.catalog.timeout_secs == 0 {
            return Err("Catalog timeout_secs must be greater than 0".to_string());
        }
        if self.catalog.browse_limit == 0 {
            return Err("Catalog browse_limit must be at least 1".to_string());
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err("Storage data_dir must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            catalog: CatalogConfig {
                base_url: "https://www.themealdb.com/api/json/v1/1".to_string(),
                timeout_secs: 10,
                browse_limit: 20,
            },
            storage: StorageConfig {
                data_dir: ".mealkit".to_string(),
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let mut config = valid_config();
        config.catalog.base_url = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = valid_config();
        config.catalog.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_browse_limit() {
        let mut config = valid_config();
        config.catalog.browse_limit = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_data_dir() {
        let mut config = valid_config();
        config.storage.data_dir = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_defaults_without_file() {
        let config = Config::load(Some("does/not/exist.toml".to_string())).unwrap();

        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.catalog.browse_limit, 20);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json);
    }

    #[test]
    fn test_load_from_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("mealkit.toml");
        std::fs::write(
            &path,
            "[catalog]\nbase_url = \"http://localhost:8080/api\"\ntimeout_secs = 3\n\n[storage]\ndata_dir = \"/tmp/mealkit\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

        assert_eq!(config.catalog.base_url, "http://localhost:8080/api");
        assert_eq!(config.catalog.timeout_secs, 3);
        assert_eq!(config.catalog.browse_limit, 20);
        assert_eq!(config.storage.data_dir, "/tmp/mealkit");
        assert_eq!(config.catalog.client_config().timeout_secs, 3);
    }
}
