use crate::error::{Result, TodozError};
use crate::model::FilterMode;
use crate::persist::DEFAULT_KEY;
use crate::storage::validate_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Storage keys that would land on a file the client owns in the data dir.
const RESERVED_KEYS: [&str; 1] = ["config"];

/// A storage key must be a valid key and must not collide with the config
/// file. The comparison ignores case for case-insensitive filesystems.
fn validate_storage_key(key: &str) -> Result<()> {
    validate_key(key)?;
    if RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key)) {
        return Err(TodozError::Config(format!(
            "Storage key '{}' is reserved for the config file",
            key
        )));
    }
    Ok(())
}

/// Configuration for todoz, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Key the collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Start a fresh install with the sample tasks
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,

    /// Filter the client starts each run with. This is a display preference;
    /// the filter a session switches to is never written back.
    #[serde(default)]
    pub default_filter: FilterMode,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_seed_samples() -> bool {
    true
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            seed_samples: default_seed_samples(),
            default_filter: FilterMode::default(),
        }
    }
}

impl TodozConfig {
    pub const KEYS: [&'static str; 3] = ["storage-key", "seed-samples", "default-filter"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodozConfig = serde_json::from_str(&content)?;
        validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "seed-samples" => Some(self.seed_samples.to_string()),
            "default-filter" => Some(self.default_filter.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                validate_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "seed-samples" => {
                self.seed_samples = value.parse().map_err(|_| {
                    TodozError::Config(format!("seed-samples must be true or false, got '{}'", value))
                })?;
            }
            "default-filter" => {
                self.default_filter = value.parse().map_err(TodozError::Config)?;
            }
            other => {
                return Err(TodozError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert!(config.seed_samples);
        assert_eq!(config.default_filter, FilterMode::All);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TodozConfig::load(dir.path()).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"seed_samples": false}"#).unwrap();

        let config = TodozConfig::load(dir.path()).unwrap();
        assert!(!config.seed_samples);
        assert_eq!(config.storage_key, "todos");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = TodozConfig::default();
        config.set("default-filter", "active").unwrap();
        config.set("storage-key", "work").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = TodozConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_filter, FilterMode::Active);
        assert_eq!(loaded.storage_key, "work");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            TodozConfig::load(dir.path()),
            Err(TodozError::Parse(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = TodozConfig::default();
        assert!(config.set("seed-samples", "maybe").is_err());
        assert!(config.set("default-filter", "someday").is_err());
        assert!(config.set("storage-key", "a/b").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = TodozConfig::default();
        for key in TodozConfig::KEYS {
            assert!(config.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_storage_key_cannot_shadow_config_file() {
        let mut config = TodozConfig::default();
        for key in ["config", "CONFIG", "Config"] {
            assert!(matches!(
                config.set("storage-key", key),
                Err(TodozError::Config(_))
            ));
        }
        assert_eq!(config.storage_key, "todos");
        assert!(config.set("storage-key", "configs").is_ok());
    }

    #[test]
    fn test_load_rejects_reserved_storage_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage_key": "config"}"#).unwrap();
        assert!(matches!(
            TodozConfig::load(dir.path()),
            Err(TodozError::Config(_))
        ));
    }
}
