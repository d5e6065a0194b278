use crate::output::Output;
use crate::ConfigCommands;
use catalog_config::{Config, PathManager};
use color_eyre::Result;
use std::path::{Path, PathBuf};

pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathManager::default().config_file())
}

/// Load and validate the config, falling back to defaults when the file does not exist
pub fn load_config(path: &PathBuf) -> Result<Config> {
    let config = Config::load_or_default(path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", path.display(), e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration in {}: {}", path.display(), e))?;
    Ok(config)
}

pub fn run_config(cmd: ConfigCommands, mut config: Config, path: &PathBuf, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(&config, path, output),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                output.warn(format!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                ));
                return Ok(());
            }
            save(&Config::default(), path)?;
            output.success(format!("Wrote default configuration to {}", path.display()));
            Ok(())
        }
        ConfigCommands::SetBaseUrl { url } => {
            config.api.base_url = url.trim().to_string();
            config
                .api
                .validate()
                .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
            save(&config, path)?;
            output.success(format!("Catalog API set to {}", config.api.base_url));
            Ok(())
        }
        ConfigCommands::SetDefaultCategory { category } => {
            config.listing.default_category = category;
            save(&config, path)?;
            output.success(format!("Default category set to {}", category.label()));
            Ok(())
        }
    }
}

fn show_config(config: &Config, path: &Path, output: &Output) -> Result<()> {
    if output.is_human() {
        let content = toml::to_string_pretty(config)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to render config: {}", e))?;
        output.info(format!("# {}{}", path.display(), if path.exists() { "" } else { " (not created yet, showing defaults)" }));
        output.block(content);
    } else {
        let value = serde_json::to_value(config)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to render config: {}", e))?;
        output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": value,
        }));
    }
    Ok(())
}

fn save(config: &Config, path: &PathBuf) -> Result<()> {
    config
        .save_to_file(path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config to {}: {}", path.display(), e))
}
