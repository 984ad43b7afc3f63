//! Editor configuration
//!
//! Stored as YAML in the per-user config directory.
//! Default location: `<config dir>/wavecut/config.yaml`

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wavecut_core::config::{self as core_config, CONFIG_FILENAME};
use wavecut_core::export::DEFAULT_EXPORT_PREFIX;
use wavecut_widgets::CanvasMetrics;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas geometry (padding, handles, height)
    pub display: CanvasMetrics,
    /// Where and how selections are exported
    pub export: ExportConfig,
    /// Seconds before a notice disappears on its own (0 = stay until dismissed)
    pub notice_seconds: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            display: CanvasMetrics::default(),
            export: ExportConfig::default(),
            notice_seconds: 4,
        }
    }
}

/// Export configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory; `None` means the user's download folder
    pub directory: Option<PathBuf>,
    /// File name prefix, followed by `_<unix millis>.txt`
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: String::from(DEFAULT_EXPORT_PREFIX),
        }
    }
}

impl ExportConfig {
    /// Directory exports are written to
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(core_config::default_export_dir)
    }

    /// Keep the prefix usable as part of a single file name
    fn validate(&mut self) {
        let cleaned: String = self
            .file_prefix
            .trim()
            .chars()
            .filter(|c| !matches!(c, '/' | '\\' | ':' | '\0'))
            .collect();
        self.file_prefix = if cleaned.is_empty() {
            String::from(DEFAULT_EXPORT_PREFIX)
        } else {
            cleaned
        };
    }
}

impl EditorConfig {
    /// Clamp values loaded from disk to something the editor can use
    pub fn validate(&mut self) {
        self.display.validate();
        self.export.validate();
        self.notice_seconds = self.notice_seconds.min(60);
    }
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    core_config::default_config_path(CONFIG_FILENAME)
}

/// Load and validate the editor config, falling back to defaults
pub fn load_config(path: &Path) -> EditorConfig {
    let mut config: EditorConfig = core_config::load_config(path);
    config.validate();
    log::info!(
        "load_config: export prefix {:?}, canvas height {}",
        config.export.file_prefix,
        config.display.height
    );
    config
}

/// Save the editor config
pub fn save_config(config: &EditorConfig, path: &Path) -> Result<()> {
    core_config::save_config(config, path)
}
