use crate::error::{Result, RosterError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for uniroll, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Name of the roster file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Full path of the roster file for a data directory.
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" | "data_file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" | "data_file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid data file name: '{}'", value));
                }
                self.data_file = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_students_data() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, "students.data");
        assert_eq!(
            config.data_path("/srv/uni"),
            PathBuf::from("/srv/uni/students.data")
        );
    }

    #[test]
    fn missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            RosterConfig::load(dir.path()).unwrap(),
            RosterConfig::default()
        );
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.set("data-file", "roster.json").unwrap();
        config.save(dir.path().join("nested")).unwrap();

        let loaded = RosterConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded.data_file, "roster.json");
    }

    #[test]
    fn rejects_unknown_keys_and_paths() {
        let mut config = RosterConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("data-file", "../escape.data").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert_eq!(config.get("data-file").unwrap(), "students.data");
        assert!(config.get("colour").is_none());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(
            RosterConfig::load(dir.path()).unwrap(),
            RosterConfig::default()
        );
    }
}
