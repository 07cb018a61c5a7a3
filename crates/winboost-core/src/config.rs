//! TOML-based application configuration.
//!
//! Holds preferences that shape a session, not the session's state:
//! - the user's display name for the seed snapshot
//! - store policies (completion guard, id strategy)
//! - add-task defaults (point value, sampler seed)
//! - projection tunables for the home and wins screens
//!
//! Configuration is stored at `~/.config/winboost/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::store::CompletionPolicy;
use crate::task::draft::DEFAULT_POINT_VALUE;
use crate::views::ViewOptions;

/// Returns `~/.config/winboost[-dev]/` based on WINBOOST_ENV.
///
/// Set WINBOOST_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if there is no home directory or creating the config
/// directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoConfigDir)?.join(".config");

    let env = std::env::var("WINBOOST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("winboost-dev")
    } else {
        base_dir.join("winboost")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// How new record ids are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Re-completing a completed task awards its points again.
    #[serde(default)]
    pub reaward_completed: bool,
    #[serde(default = "default_id_strategy")]
    pub id_strategy: IdStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_point_value")]
    pub point_value: u32,
    /// Fixed seed for the boost-level sampler (omit for entropy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "default_3")]
    pub today_limit: usize,
    #[serde(default = "default_3")]
    pub rewards_preview: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinsConfig {
    #[serde(default = "default_quick_win_max_minutes")]
    pub quick_win_max_minutes: u32,
    #[serde(default = "default_energy_match_radius")]
    pub energy_match_radius: u8,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/winboost/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub wins: WinsConfig,
}

// Default functions
fn default_user_name() -> String {
    "Guest User".into()
}
fn default_id_strategy() -> IdStrategy {
    IdStrategy::Uuid
}
fn default_point_value() -> u32 {
    DEFAULT_POINT_VALUE
}
fn default_3() -> usize {
    3
}
fn default_quick_win_max_minutes() -> u32 {
    crate::task::QUICK_WIN_MAX_MINUTES
}
fn default_energy_match_radius() -> u8 {
    2
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reaward_completed: false,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            point_value: DEFAULT_POINT_VALUE,
            seed: None,
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            today_limit: 3,
            rewards_preview: 3,
        }
    }
}

impl Default for WinsConfig {
    fn default() -> Self {
        Self {
            quick_win_max_minutes: default_quick_win_max_minutes(),
            energy_match_radius: default_energy_match_radius(),
        }
    }
}


impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        // Optional keys (e.g. `defaults.seed`) are absent when unset.
        let existing = obj.get(leaf).cloned().or_else(|| {
            (key == "defaults.seed").then(|| serde_json::Value::Number(0.into()))
        });
        let existing = existing.ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
            ),
            serde_json::Value::Number(_) => value
                .parse::<u64>()
                .map(|n| serde_json::Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as a non-negative integer")))?,
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                return Err(invalid("cannot set a whole section".into()))
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from `path`, writing and returning defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse
    /// as the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    pub fn completion_policy(&self) -> CompletionPolicy {
        if self.store.reaward_completed {
            CompletionPolicy::Reaward
        } else {
            CompletionPolicy::Guarded
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            today_limit: self.home.today_limit,
            rewards_preview: self.home.rewards_preview,
            quick_win_max_minutes: self.wins.quick_win_max_minutes,
            energy_match_radius: self.wins.energy_match_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.user.name, "Guest User");
    }

    #[test]
    fn missing_sections_take_defaults() {
        let parsed: Config = toml::from_str("[store]\nreaward_completed = true\n").unwrap();
        assert!(parsed.store.reaward_completed);
        assert_eq!(parsed.store.id_strategy, IdStrategy::Uuid);
        assert_eq!(parsed.defaults.point_value, 10);
        assert_eq!(parsed.home.today_limit, 3);
        assert_eq!(parsed.completion_policy(), CompletionPolicy::Reaward);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("store.reaward_completed").as_deref(), Some("false"));
        assert_eq!(cfg.get("defaults.point_value").as_deref(), Some("10"));
        assert_eq!(cfg.get("store.id_strategy").as_deref(), Some("uuid"));
        assert!(cfg.get("store.missing_key").is_none());
    }

    #[test]
    fn set_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.set("store.reaward_completed", "true").unwrap();
        cfg.set("wins.energy_match_radius", "3").unwrap();
        cfg.set("user.name", "Sam").unwrap();
        cfg.set("store.id_strategy", "sequential").unwrap();
        assert!(cfg.store.reaward_completed);
        assert_eq!(cfg.wins.energy_match_radius, 3);
        assert_eq!(cfg.user.name, "Sam");
        assert_eq!(cfg.store.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn set_optional_seed() {
        let mut cfg = Config::default();
        assert!(cfg.get("defaults.seed").is_none());
        cfg.set("defaults.seed", "42").unwrap();
        assert_eq!(cfg.defaults.seed, Some(42));
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_type() {
        let mut cfg = Config::default();
        assert!(matches!(cfg.set("store.nonexistent", "1"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(cfg.set("nope.nested", "1"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(
            cfg.set("store.reaward_completed", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("store.id_strategy", "random"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(cfg.set("store", "x"), Err(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("defaults.point_value", "15").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().defaults.point_value, 15);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store = [not toml").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::LoadFailed { .. })));
    }

    #[test]
    fn view_options_follow_config() {
        let mut cfg = Config::default();
        cfg.home.today_limit = 5;
        let opts = cfg.view_options();
        assert_eq!(opts.today_limit, 5);
        assert_eq!(opts.energy_match_radius, 2);
    }
}
