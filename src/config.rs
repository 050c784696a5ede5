//! Runtime settings
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```toml
//! [logging]
//! file = "onedeefy.log"
//! level = "debug"
//! history = "conversions.log"
//! ```

use std::fs;
use std::str::FromStr;
use log::{debug, LevelFilter};

use crate::errors::{LinearizeError, LinearizeResult};

/// Settings shared by the CLI commands
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Log file path; logs go to stderr through `env_logger` when unset
    pub log_file: Option<String>,
    /// Most verbose level that gets logged
    pub log_level: LevelFilter,
    /// File receiving one summary line per conversion
    pub history_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_file: None,
            log_level: LevelFilter::Warn,
            history_file: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &str) -> LinearizeResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LinearizeError::ConfigError(format!("Cannot read {}: {}", path, e)))?;
        let settings = Self::from_toml_str(&content)?;
        debug!("Loaded settings from {}: {:?}", path, settings);
        Ok(settings)
    }

    /// Parse settings from TOML text, keeping defaults for missing keys
    pub fn from_toml_str(content: &str) -> LinearizeResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| LinearizeError::ConfigError(format!("Invalid TOML: {}", e)))?;

        let mut settings = Settings::default();

        if let Some(logging) = toml_value.get("logging") {
            let table = logging.as_table()
                .ok_or_else(|| LinearizeError::ConfigError("[logging] must be a table".to_string()))?;

            if let Some(file) = table.get("file") {
                let file = file.as_str()
                    .ok_or_else(|| LinearizeError::ConfigError("logging.file must be a string".to_string()))?;
                settings.log_file = Some(file.to_string());
            }

            if let Some(level) = table.get("level") {
                let level = level.as_str()
                    .ok_or_else(|| LinearizeError::ConfigError("logging.level must be a string".to_string()))?;
                settings.log_level = parse_level(level)?;
            }

            if let Some(history) = table.get("history") {
                let history = history.as_str()
                    .ok_or_else(|| LinearizeError::ConfigError("logging.history must be a string".to_string()))?;
                settings.history_file = Some(history.to_string());
            }
        }

        Ok(settings)
    }

    /// Raise the log level to at least `level`
    pub fn raise_level(&mut self, level: LevelFilter) {
        if level > self.log_level {
            self.log_level = level;
        }
    }
}

fn parse_level(level: &str) -> LinearizeResult<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| LinearizeError::ConfigError(format!("Unknown log level: {}", level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_logging_section() {
        let settings = Settings::from_toml_str(
            "[logging]\nfile = \"run.log\"\nlevel = \"debug\"\nhistory = \"runs.log\"\n").unwrap();
        assert_eq!(settings.log_file.as_deref(), Some("run.log"));
        assert_eq!(settings.history_file.as_deref(), Some("runs.log"));
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let result = Settings::from_toml_str("[logging]\nlevel = \"chatty\"\n");
        assert!(matches!(result, Err(LinearizeError::ConfigError(_))));
    }

    #[test]
    fn test_raise_level_never_lowers() {
        let mut settings = Settings::default();
        settings.raise_level(LevelFilter::Debug);
        assert_eq!(settings.log_level, LevelFilter::Debug);
        settings.raise_level(LevelFilter::Info);
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }
}
