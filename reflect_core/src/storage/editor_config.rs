// reflect_core/src/storage/editor_config.rs
use crate::constants::EDITOR_CONFIG_RON;
use crate::{onscreen_error, onscreen_warn};
use directories_next::ProjectDirs;
use once_cell::sync::Lazy;
use ron::from_str;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

pub static EDITOR_CONFIG: Lazy<RwLock<EditorConfig>> = Lazy::new(|| RwLock::new(load_config()));

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Folder that component snapshots are saved into.
    pub save_root: Option<PathBuf>,
    /// `flexi_logger` spec, e.g. `"info"` or `"reflect_core=debug"`.
    pub log_level: String,
    /// Prefix saved records with the schema fingerprint of their type.
    pub fingerprint_records: bool,
    pub log_files_kept: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_root: None,
            log_level: "info".to_string(),
            fingerprint_records: true,
            log_files_kept: 5,
        }
    }
}

/// Saves the in-memory editor config to its .ron file.
pub fn save_config() -> Result<(), Box<dyn Error>> {
    let config = EDITOR_CONFIG.read().map_err(|e| e.to_string())?;
    save_config_to(&config_path(), &config)
}

pub fn save_config_to(path: &Path, config: &EditorConfig) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let ron = to_string_pretty(config, PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}

/// Snapshot of the current config. Falls back to defaults if the lock is poisoned.
pub fn get_config() -> EditorConfig {
    match EDITOR_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(e) => {
            onscreen_error!("Could not read config: {e}.");
            EditorConfig::default()
        }
    }
}

/// Gets the config save root. Returns `None` if the lock is poisoned
/// or if the field itself is `None`.
pub fn get_save_root() -> Option<PathBuf> {
    match EDITOR_CONFIG.read() {
        Ok(config) => config.save_root.clone(),
        Err(e) => {
            onscreen_error!("Could not read config: {e}.");
            None
        }
    }
}

/// Returns the app_dir for the program.
pub fn app_dir() -> PathBuf {
    match ProjectDirs::from("com", "reflect", "editor") {
        Some(project_dir) => project_dir.config_dir().to_path_buf(),
        None => {
            onscreen_warn!("Could not resolve app directory, using the working directory.");
            PathBuf::from(".")
        }
    }
}

fn config_path() -> PathBuf {
    app_dir().join(EDITOR_CONFIG_RON)
}

fn load_config() -> EditorConfig {
    load_config_from(&config_path())
}

/// Reads a config file, using defaults for a missing or corrupt file.
pub fn load_config_from(path: &Path) -> EditorConfig {
    match fs::read_to_string(path) {
        Ok(txt) => from_str(&txt).unwrap_or_else(|e| {
            onscreen_error!("Corrupt config {}: {e}.", path.display());
            EditorConfig::default()
        }),
        Err(e) => {
            onscreen_warn!("Error loading config: {e}.");
            EditorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("reflect_core_{}_{name}", std::process::id()))
            .join(EDITOR_CONFIG_RON)
    }

    #[test]
    fn config_round_trips_through_ron() {
        let path = temp_config_path("round_trip");
        let config = EditorConfig {
            save_root: Some(PathBuf::from("/tmp/snapshots")),
            log_level: "debug".into(),
            fingerprint_records: false,
            log_files_kept: 2,
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let path = temp_config_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "(log_level: \"warn\")").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.log_level, "warn");
        assert!(config.fingerprint_records);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = load_config_from(Path::new("/definitely/not/here.ron"));
        assert_eq!(config, EditorConfig::default());
    }
}
