use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::pagination::PAGE_SIZE_OPTIONS;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_items_per_page() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            items_per_page: default_items_per_page(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.items_per_page = snap_page_size(config.items_per_page);

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }
}

/// Snap a configured page size to the nearest value the UI offers.
pub fn snap_page_size(requested: usize) -> usize {
    PAGE_SIZE_OPTIONS
        .into_iter()
        .min_by_key(|option| option.abs_diff(requested))
        .unwrap_or_else(default_items_per_page)
}
