//! Configuration settings for focal.
//!
//! Settings are loaded from `~/.focal/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::FocalError;
use crate::timer::session::Tuning;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Default session duration in minutes.
    #[serde(default = "default_duration")]
    pub default_duration_minutes: u32,
    /// Minimum adjustable duration in minutes.
    #[serde(default = "default_min_duration")]
    pub min_duration_minutes: u32,
    /// Maximum adjustable duration in minutes.
    #[serde(default = "default_max_duration")]
    pub max_duration_minutes: u32,
    /// Adjustment step size in seconds.
    #[serde(default = "default_step")]
    pub step_seconds: u32,
    /// Delay before a held adjust button begins repeating, in milliseconds.
    #[serde(default = "default_hold_delay")]
    pub hold_delay_ms: u64,
    /// Interval between repeated adjustments while held, in milliseconds.
    #[serde(default = "default_repeat_interval")]
    pub repeat_interval_ms: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_duration() -> u32 {
    25
}

const fn default_min_duration() -> u32 {
    1
}

const fn default_max_duration() -> u32 {
    600
}

const fn default_step() -> u32 {
    60
}

const fn default_hold_delay() -> u64 {
    500
}

const fn default_repeat_interval() -> u64 {
    80
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration(),
            min_duration_minutes: default_min_duration(),
            max_duration_minutes: default_max_duration(),
            step_seconds: default_step(),
            hold_delay_ms: default_hold_delay(),
            repeat_interval_ms: default_repeat_interval(),
        }
    }
}

impl TimerConfig {
    /// Convert into the tuning parameters used by the session state machine.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        Tuning {
            default_duration: i64::from(self.default_duration_minutes) * 60,
            min_duration: i64::from(self.min_duration_minutes) * 60,
            max_duration: i64::from(self.max_duration_minutes) * 60,
            step: i64::from(self.step_seconds),
            hold_delay: std::time::Duration::from_millis(self.hold_delay_ms),
            repeat_interval: std::time::Duration::from_millis(self.repeat_interval_ms),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, FocalError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocalError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocalError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            FocalError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocalError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FocalError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FocalError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timer.default_duration_minutes, 25);
        assert_eq!(config.timer.min_duration_minutes, 1);
        assert_eq!(config.timer.max_duration_minutes, 600);
        assert_eq!(config.timer.step_seconds, 60);
        assert_eq!(config.timer.hold_delay_ms, 500);
        assert_eq!(config.timer.repeat_interval_ms, 80);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.timer.default_duration_minutes, 25);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.default_duration_minutes = 50;
        config.timer.hold_delay_ms = 300;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.timer.default_duration_minutes, 50);
        assert_eq!(loaded.timer.hold_delay_ms, 300);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "timer:\n  default_duration_minutes: 45\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.timer.default_duration_minutes, 45);
        assert_eq!(config.timer.step_seconds, 60);
    }

    #[test]
    fn test_tuning_conversion() {
        let config = TimerConfig::default();
        let tuning = config.tuning();

        assert_eq!(tuning.default_duration, 25 * 60);
        assert_eq!(tuning.min_duration, 60);
        assert_eq!(tuning.max_duration, 600 * 60);
        assert_eq!(tuning.step, 60);
        assert_eq!(tuning.hold_delay.as_millis(), 500);
        assert_eq!(tuning.repeat_interval.as_millis(), 80);
    }
}
