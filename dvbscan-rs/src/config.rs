//! Configuration file handling.
//!
//! ```toml
//! [defaults]
//! delivery_system = "dvb-t"
//! region = "United Kingdom"
//! format = "table"
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dvbscan_catalog::DeliverySystem;
use thiserror::Error;

use crate::context::OutputFormat;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "dvbscan.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuration file format.
#[derive(Debug, serde::Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, serde::Deserialize, Default)]
pub struct DefaultsSection {
    pub delivery_system: Option<String>,
    pub region: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, serde::Deserialize, Default)]
pub struct LoggingSection {
    pub level: Option<String>,
}

/// Defaults after parsing the file values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub system: Option<DeliverySystem>,
    pub region: Option<String>,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

impl ConfigFile {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate the raw values into [`Settings`].
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let system = self
            .defaults
            .delivery_system
            .as_deref()
            .map(|s| {
                s.parse::<DeliverySystem>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "defaults.delivery_system",
                        value: s.to_string(),
                    })
            })
            .transpose()?;

        let format = match self.defaults.format.as_deref() {
            Some(s) => OutputFormat::from_str(s, true).map_err(|_| ConfigError::InvalidValue {
                key: "defaults.format",
                value: s.to_string(),
            })?,
            None => OutputFormat::default(),
        };

        Ok(Settings {
            system,
            region: self.defaults.region.clone(),
            format,
            log_level: self.logging.level.clone(),
        })
    }
}

pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    ConfigFile::parse(&contents)
}

/// Explicit path > auto-detect > none.
pub fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Some(default_path)
        } else {
            None
        }
    })
}

/// Load settings from `path`, or built-in defaults when there is no file.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => load_config(path)?.settings(),
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = ConfigFile::parse(
            r#"
            [defaults]
            delivery_system = "dvb-c"
            region = "Germany"
            format = "JSON"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        let settings = config.settings().unwrap();
        assert_eq!(settings.system, Some(DeliverySystem::Cable));
        assert_eq!(settings.region.as_deref(), Some("Germany"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = ConfigFile::parse("").unwrap().settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_values() {
        let config = ConfigFile::parse("[defaults]\ndelivery_system = \"atsc\"\n").unwrap();
        assert!(matches!(
            config.settings(),
            Err(ConfigError::InvalidValue {
                key: "defaults.delivery_system",
                ..
            })
        ));

        let config = ConfigFile::parse("[defaults]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            config.settings(),
            Err(ConfigError::InvalidValue {
                key: "defaults.format",
                ..
            })
        ));

        assert!(matches!(
            ConfigFile::parse("[defaults\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ndelivery_system = \"satellite\"").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.system, Some(DeliverySystem::Satellite));
        assert_eq!(settings.region, None);
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/nonexistent/custom.toml");
        assert_eq!(config_path(Some(explicit.clone())), Some(explicit));
    }

    #[test]
    fn test_missing_file() {
        let result = load_settings(Some(Path::new("/nonexistent/dvbscan.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
