//! CLI configuration persistence.
//!
//! Stores export defaults as JSON at `~/.config/mmap-strings/config.json`.
//! Missing or unreadable files fall back to defaults. Set
//! `MMAP_STRINGS_CONFIG` to use a different file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::{self, DEFAULT_GLOBAL_NAME, ExportFormat, ExportOptions};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MMAP_STRINGS_CONFIG";

/// Default config file path.
pub fn default_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mmap-strings")
        .join("config.json")
}

/// Persisted export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringsConfig {
    #[serde(default)]
    pub export_format: ExportFormat,
    #[serde(default = "default_global_name")]
    pub global_name: String,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_global_name() -> String { DEFAULT_GLOBAL_NAME.into() }

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::default(),
            global_name: default_global_name(),
            path: default_path(),
        }
    }
}

impl StringsConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Ignoring config {}: {}", path.display(), e);
                }
                Self { path, ..Self::default() }
            }
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Update settings. The global name must be a JS identifier; nothing
    /// changes if it is not.
    pub fn apply(&mut self, format: Option<ExportFormat>, global_name: Option<String>) -> Result<()> {
        if let Some(name) = &global_name {
            export::validate_global_name(name)?;
        }
        if let Some(format) = format {
            self.export_format = format;
        }
        if let Some(name) = global_name {
            self.global_name = name;
        }
        Ok(())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            global_name: self.global_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = StringsConfig::default().with_path(path.clone());
        config.export_format = ExportFormat::Json;
        config.global_name = "LANG".to_string();
        config.save().unwrap();

        let loaded = StringsConfig::load_from(&path).unwrap();
        assert_eq!(loaded.export_format, ExportFormat::Json);
        assert_eq!(loaded.global_name, "LANG");
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = StringsConfig::load_from(&path).unwrap();
        assert_eq!(loaded.export_format, ExportFormat::Js);
        assert_eq!(loaded.export_options().global_name, "STRINGS");
    }

    #[test]
    fn test_apply_updates_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = StringsConfig::default().with_path(path.clone());
        config.apply(Some(ExportFormat::Json), Some("LANG".to_string())).unwrap();
        config.save().unwrap();

        let loaded = StringsConfig::load_from(&path).unwrap();
        assert_eq!(loaded.export_format, ExportFormat::Json);
        assert_eq!(loaded.global_name, "LANG");
    }

    #[test]
    fn test_apply_rejects_invalid_global_name() {
        let mut config = StringsConfig::default();
        let err = config
            .apply(Some(ExportFormat::Json), Some("my-strings".to_string()))
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidGlobalName(_)));
        assert_eq!(config.export_format, ExportFormat::Js);
        assert_eq!(config.global_name, DEFAULT_GLOBAL_NAME);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempdir().unwrap();
        assert!(StringsConfig::load_from(&dir.path().join("absent.json")).is_err());
    }
}
