use anyhow::Result;
use std::path::{Path, PathBuf};

/// Config directory override, mainly for containers and tests
pub const CONFIG_DIR_ENV: &str = "ZELSTREAM_CONFIG_DIR";

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("zelstream");

        Ok(Self::with_base(base_dir))
    }

    pub fn with_base(base_dir: PathBuf) -> Self {
        Self {
            log_dir: base_dir.join("logs"),
            config_dir: base_dir,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("zelstream.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Self::with_base(PathBuf::from(dir));
        }

        // Platform config dir (e.g., ~/.config/zelstream on Linux), else the working directory
        Self::new().unwrap_or_else(|_| Self::with_base(PathBuf::from(".zelstream")))
    }
}
