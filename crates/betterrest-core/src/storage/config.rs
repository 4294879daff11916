//! TOML-based application configuration.
//!
//! Stores the default form inputs (wake time, sleep amount, coffee) and the
//! optional path to a retrained model-weights artifact.
//!
//! Configuration lives at `~/.config/betterrest/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::clock;
use crate::error::{ConfigError, ModelError, ValidationError};
use crate::inputs::{CoffeeCount, SleepAmount, SleepPlan};
use crate::model::RegressionModel;

/// Model artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelConfig {
    /// Path to a TOML weights artifact. When unset, the bundled pre-trained
    /// weights are used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/betterrest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default wake time as "HH:MM" or "H:MM AM/PM".
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
    /// Default desired sleep in hours.
    #[serde(default = "default_sleep_amount")]
    pub sleep_amount: f64,
    /// Default daily coffee intake in cups.
    #[serde(default = "default_coffee")]
    pub coffee: u32,
    #[serde(default)]
    pub model: ModelConfig,
}

// Default functions
fn default_wake_time() -> String {
    clock::format_clock(clock::default_wake_time())
}
fn default_sleep_amount() -> f64 {
    8.0
}
fn default_coffee() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wake_time: default_wake_time(),
            sleep_amount: default_sleep_amount(),
            coffee: default_coffee(),
            model: ModelConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// key's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let target = Self::lookup_mut(&mut json, key)?;
        let coerced = Self::coerce(&*target, key, value)?;
        *target = coerced;

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }

    fn lookup_mut<'a>(
        root: &'a mut serde_json::Value,
        key: &str,
    ) -> Result<&'a mut serde_json::Value, ConfigError> {
        let mut current = root;
        for part in key.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        Ok(current)
    }

    fn coerce(
        existing: &serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<serde_json::Value, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        match existing {
            serde_json::Value::Number(_) => {
                if let Ok(n) = value.parse::<u64>() {
                    Ok(serde_json::Value::Number(n.into()))
                } else if let Ok(n) = value.parse::<f64>() {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| invalid(format!("cannot store '{value}' as number")))
                } else {
                    Err(invalid(format!("cannot parse '{value}' as number")))
                }
            }
            serde_json::Value::Bool(_) => value
                .parse::<bool>()
                .map(serde_json::Value::Bool)
                .map_err(|e| invalid(e.to_string())),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                Err(invalid("cannot set a whole section".to_string()))
            }
            // Strings and optional fields (null) accept any string.
            _ => Ok(serde_json::Value::String(value.to_string())),
        }
    }

    /// Build a validated [`SleepPlan`] from the stored defaults.
    pub fn plan(&self) -> Result<SleepPlan, ValidationError> {
        Ok(SleepPlan::new(
            clock::parse_clock(&self.wake_time)?,
            SleepAmount::try_new(self.sleep_amount)?,
            CoffeeCount::try_new(self.coffee)?,
        ))
    }

    /// Resolve the active model: the configured artifact or the bundled
    /// weights.
    pub fn load_model(&self) -> Result<RegressionModel, ModelError> {
        match &self.model.path {
            Some(path) => RegressionModel::from_path(path),
            None => Ok(RegressionModel::bundled()),
        }
    }
}
