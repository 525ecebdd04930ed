use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::AUTOSAVE_DEBOUNCE_MS;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generation backend configuration
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Storage locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Autosave behavior
    #[serde(default)]
    pub autosave: AutosaveConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorSettings::default(),
            storage: StorageConfig::default(),
            autosave: AutosaveConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

/// Generation backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Pause before returning template output, mimicking a remote call
    pub simulate_latency: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

/// Storage locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where workspace and settings records live (defaults to the platform
    /// data directory)
    pub data_dir: Option<PathBuf>,
    /// Where exported essays are written (defaults to the current directory)
    pub export_dir: Option<PathBuf>,
}

/// Autosave behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Quiet period after the last change before a save fires
    pub debounce_ms: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: AUTOSAVE_DEBOUNCE_MS,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Color theme
    pub theme: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    // Get config directories
    let config_dir = get_config_dir()?;
    let global_config = config_dir.join("config.toml");
    let local_config = PathBuf::from(".quill/config.toml");

    // Build figment configuration
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    // Add global config if it exists
    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    // Add local config if it exists
    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // Add environment variables (QUILL_ prefix)
    figment = figment.merge(Env::prefixed("QUILL_"));

    // Extract and return config
    figment.extract().context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "quill") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("quill");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Resolve the data directory for workspace/settings records
pub fn get_data_dir(config: &Config) -> Result<PathBuf> {
    if let Some(dir) = &config.storage.data_dir {
        std::fs::create_dir_all(dir)?;
        return Ok(dir.clone());
    }
    if let Some(proj_dirs) = ProjectDirs::from("", "", "quill") {
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;
        Ok(data_dir.to_path_buf())
    } else {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let data_dir = PathBuf::from(home).join(".local").join("share").join("quill");
        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config_file = config_dir.join("config.toml");

    if !config_file.exists() {
        let default_config = Config::default();
        save_config(&default_config, Some(config_file.clone()))?;
        println!("Created default configuration at: {}", config_file.display());
    }

    Ok(())
}
