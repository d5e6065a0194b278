pub mod config;
pub mod paths;

pub use config::{ApiConfig, Config, ListingConfig, LoggingConfig};
pub use paths::PathManager;
