use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "sidora.toml";

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 3000;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Shorthand for `log_level = "debug"`.
    pub debug: Option<bool>,
    /// Simulated latency between submit and validation.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Time the success toast stays alone on screen before leaving the login view.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

fn default_redirect_delay_ms() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            debug: None,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Config>(content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Error while writing file: {0}")]
    WritingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.redirect_delay(), Duration::from_millis(3000));
        assert_eq!(config.toast_duration(), Duration::from_millis(5000));
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn overrides() {
        let config = Config::from_toml(
            r#"
            log_level = "trace"
            submit_delay_ms = 10
            redirect_delay_ms = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::TRACE);
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
        assert_eq!(config.redirect_delay(), Duration::from_millis(20));
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);

        let config = Config::from_toml("debug = true").unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            Config::from_toml("log_level = \"loud\""),
            Err(ConfigError::InvalidField(
                "log_level",
                "Unknown value 'loud'".to_string()
            ))
        );
        assert!(matches!(
            Config::from_toml("submit_delay_ms = \"soon\""),
            Err(ConfigError::ReadingFile(_))
        ));
    }

    #[test]
    fn file_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));

        let config = Config {
            redirect_delay_ms: 42,
            ..Default::default()
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }
}
