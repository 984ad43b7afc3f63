//! YAML configuration helpers
//!
//! Config types live with the crates that own them; this module only knows
//! how to find, read and write a YAML file for any serde type.
//!
//! ```ignore
//! let path = default_config_path(CONFIG_FILENAME);
//! let config: EditorConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "wavecut";

/// Default config file name
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Per-user configuration directory
///
/// Returns `<config dir>/wavecut`, falling back to `./wavecut` when the
/// platform exposes no config directory.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Full path of a config file inside [`config_dir`]
pub fn default_config_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}

/// Default directory for exported selections
///
/// The user's download folder, else their home, else the working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load a config file, falling back to `T::default()`
///
/// A missing file is normal on first start. An unreadable or malformed file
/// is logged and ignored so a bad edit never keeps the editor from starting.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        log::info!("load_config: {:?} not found, using defaults", path);
        return T::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("load_config: cannot read {:?}: {}, using defaults", path, e);
            return T::default();
        }
    };

    match serde_yaml::from_str::<T>(&contents) {
        Ok(config) => {
            log::info!("load_config: loaded {:?}", path);
            config
        }
        Err(e) => {
            log::warn!("load_config: cannot parse {:?}: {}, using defaults", path, e);
            T::default()
        }
    }
}

/// Write a config file, creating parent directories as needed
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: wrote {:?}", path);
    Ok(())
}
