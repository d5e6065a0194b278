use catalog_models::Category;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://zeldvorik.ru/apiv3/api.php";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
    pub const DEFAULT_USER_AGENT: &'static str = concat!("zelstream/", env!("CARGO_PKG_VERSION"));

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("api.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListingConfig {
    #[serde(default)]
    pub default_category: Category,
    /// How many rows before the end of the list the next page is requested
    #[serde(default = "default_trigger_margin_rows")]
    pub trigger_margin_rows: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Number of trending titles kept for the hero strip
    #[serde(default = "default_hero_size")]
    pub hero_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_category: Category::default(),
            trigger_margin_rows: default_trigger_margin_rows(),
            debounce_ms: default_debounce_ms(),
            hero_size: default_hero_size(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_base_url() -> String {
    ApiConfig::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    ApiConfig::DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    ApiConfig::DEFAULT_USER_AGENT.to_string()
}

fn default_trigger_margin_rows() -> usize {
    3
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_hero_size() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, otherwise fall back to defaults
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.api.validate()?;

        if self.listing.hero_size == 0 {
            return Err(anyhow::anyhow!("listing.hero_size must be greater than zero"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!("Invalid logging.level: {}", self.logging.level));
        }

        Ok(())
    }
}
