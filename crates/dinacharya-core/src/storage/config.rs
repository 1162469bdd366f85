//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The study overflow policy used by the planner
//! - Default and maximum daily study hours
//! - Preferred wake time per constitution
//!
//! Configuration is stored at `~/.config/dinacharya/config.toml`.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::constitution::Constitution;
use crate::error::ConfigError;
use crate::planner::{study_minutes_from_hours, OverflowPolicy};
use crate::time_of_day::{format_hhmm, parse_hhmm};

/// Upper bound for both study-hour settings.
pub const MAX_CONFIGURABLE_STUDY_HOURS: f64 = 24.0;

/// Planner-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
    #[serde(default = "default_study_hours")]
    pub default_study_hours: f64,
    /// Upper bound applied to user-entered study time before planning.
    #[serde(default = "default_max_study_hours")]
    pub max_study_hours: f64,
}

/// Preferred wake time (`HH:MM`) per constitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WakeTimesConfig {
    #[serde(default = "default_vata_wake")]
    pub vata: String,
    #[serde(default = "default_pitta_wake")]
    pub pitta: String,
    #[serde(default = "default_kapha_wake")]
    pub kapha: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dinacharya/config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub wake_times: WakeTimesConfig,
}

// Default functions
fn default_study_hours() -> f64 {
    4.0
}
fn default_max_study_hours() -> f64 {
    12.0
}
fn default_vata_wake() -> String {
    format_hhmm(Constitution::Vata.default_wake_time())
}
fn default_pitta_wake() -> String {
    format_hhmm(Constitution::Pitta.default_wake_time())
}
fn default_kapha_wake() -> String {
    format_hhmm(Constitution::Kapha.default_wake_time())
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            overflow_policy: OverflowPolicy::default(),
            default_study_hours: default_study_hours(),
            max_study_hours: default_max_study_hours(),
        }
    }
}

impl Default for WakeTimesConfig {
    fn default() -> Self {
        Self {
            vata: default_vata_wake(),
            pitta: default_pitta_wake(),
            kapha: default_kapha_wake(),
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
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".to_string(),
        };
        let bad_value = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| bad_value(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| bad_value(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(bad_value(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(bad_value("cannot set a whole section".to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// validated, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if no file exists.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
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

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
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

    /// Set a config value by dot-separated key without persisting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting config fails validation. `self` is left unchanged
    /// on error.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save to the default location.
    ///
    /// # Errors
    ///
    /// See [`Config::apply`] and [`Config::save`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Check wake times and that study hours lie in
    /// `[0, MAX_CONFIGURABLE_STUDY_HOURS]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for constitution in Constitution::ALL {
            self.wake_time_for(constitution)?;
        }
        for (key, hours) in [
            ("planner.default_study_hours", self.planner.default_study_hours),
            ("planner.max_study_hours", self.planner.max_study_hours),
        ] {
            if !(0.0..=MAX_CONFIGURABLE_STUDY_HOURS).contains(&hours) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("{hours} is outside 0..={MAX_CONFIGURABLE_STUDY_HOURS} hours"),
                });
            }
        }
        Ok(())
    }

    /// Configured wake time for `constitution`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not `HH:MM`.
    pub fn wake_time_for(&self, constitution: Constitution) -> Result<NaiveTime, ConfigError> {
        let raw = match constitution {
            Constitution::Vata => &self.wake_times.vata,
            Constitution::Pitta => &self.wake_times.pitta,
            Constitution::Kapha => &self.wake_times.kapha,
        };
        parse_hhmm(raw).map_err(|e| ConfigError::InvalidValue {
            key: format!("wake_times.{constitution}"),
            message: e.to_string(),
        })
    }

    /// Cap requested study minutes at `max_study_hours`.
    pub fn clamp_study_minutes(&self, minutes: u32) -> u32 {
        minutes.min(study_minutes_from_hours(self.planner.max_study_hours))
    }
}
