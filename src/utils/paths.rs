use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::store::STORAGE_KEY;

pub fn get_item_tui_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".item-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_item_tui_dir()?;
    Ok(app_dir.join("config.toml"))
}

pub fn get_storage_path() -> Result<PathBuf> {
    let app_dir = get_item_tui_dir()?;
    Ok(app_dir.join(format!("{STORAGE_KEY}.json")))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let app_dir = get_item_tui_dir()?;
    Ok(app_dir.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    let app_dir = get_item_tui_dir()?;
    Ok(app_dir.join("crash.log"))
}
