use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub recipes_path: String,
    pub menus_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanningConfig {
    /// Meals of a new menu when `--meals` is not given
    #[serde(default = "default_meals")]
    pub default_meals: u32,
    #[serde(default = "default_personnes")]
    pub default_personnes: u16,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_meals: default_meals(),
            default_personnes: default_personnes(),
        }
    }
}

fn default_meals() -> u32 {
    7
}

fn default_personnes() -> u16 {
    popote_shared::recipe::DEFAULT_PERSONNES
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
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
    /// 1. Environment variables (POPOTE__STORE__RECIPES_PATH, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("store.recipes_path", "data/recipes.json")?
            .set_default("store.menus_path", "data/menus.json")?
            .set_default("planning.default_meals", i64::from(default_meals()))?
            .set_default("planning.default_personnes", i64::from(default_personnes()))?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("POPOTE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.store.recipes_path.trim().is_empty() {
            return Err("store.recipes_path must not be empty".to_string());
        }
        if self.store.menus_path.trim().is_empty() {
            return Err("store.menus_path must not be empty".to_string());
        }
        if self.store.recipes_path == self.store.menus_path {
            return Err("recipes and menus must be stored in different files".to_string());
        }
        if self.planning.default_meals < 1 {
            return Err("planning.default_meals must be at least 1".to_string());
        }
        if self.planning.default_personnes < 1 {
            return Err("planning.default_personnes must be at least 1".to_string());
        }
        Ok(())
    }
}
