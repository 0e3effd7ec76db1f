/// Application configuration
///
/// One setting so far: where the projects live. Stored as JSON under
/// ~/.launchdeck/ and passed into discovery explicitly; nothing in the
/// library reads it behind the caller's back.

use crate::error::{LaunchdeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub projects_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        // ~/code, or a bare relative "code" if the home dir is a mystery
        let home = dirs::home_dir().unwrap_or_default();
        Self {
            projects_directory: home.join("code"),
        }
    }
}

impl Config {
    /// Load the config, falling back to defaults on any failure
    ///
    /// A missing or corrupt config file is not an error condition for a
    /// launcher; the user just gets the default root.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    /// Persist the config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LaunchdeckError::Config("Could not determine home directory".to_string()))?;

        Ok(home.join(".launchdeck").join("config.json"))
    }

    fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let config = Config {
            projects_directory: PathBuf::from("/somewhere/else"),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp.path().join("no-such-file.json"));
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{oops").unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_default_root_is_under_home() {
        let config = Config::default();
        assert!(config.projects_directory.ends_with("code"));
    }
}
