//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Toolkit configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (tsv, csv, md, json)
    pub format: Option<String>,

    /// Default equipment metadata file
    pub equipment_file: Option<PathBuf>,

    /// Default maintenance records file
    pub maintenance_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/emt/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Local config (./emt.yaml)
        let local_path = PathBuf::from("emt.yaml");
        if local_path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&local_path) {
                if let Ok(local) = serde_yml::from_str::<Config>(&contents) {
                    config.merge(local);
                }
            }
        }

        // 4. Environment variables
        if let Ok(format) = std::env::var("EMT_FORMAT") {
            config.format = Some(format);
        }
        if let Ok(path) = std::env::var("EMT_EQUIPMENT_FILE") {
            config.equipment_file = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("EMT_MAINTENANCE_FILE") {
            config.maintenance_file = Some(PathBuf::from(path));
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "emt")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.equipment_file.is_some() {
            self.equipment_file = other.equipment_file;
        }
        if other.maintenance_file.is_some() {
            self.maintenance_file = other.maintenance_file;
        }
    }
}
