//! ConfigStore - Local Configuration Storage
//!
//! TOML config under the platform data directory.

use std::fs;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "mdt-gui").ok_or(Error::Invalid {
        message: "Could not find local data directory".to_string(),
    })?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a TOML config file, defaulting when it doesn't exist yet
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Save a TOML config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
