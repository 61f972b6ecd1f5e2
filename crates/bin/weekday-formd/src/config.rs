//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `weekday-form.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use weekday_form_adapter_http_axum::state::DEFAULT_TITLE;
use weekday_form_domain::error::TimeZoneError;
use weekday_form_domain::form::DEFAULT_ACTION;
use weekday_form_domain::time::TimeZoneSetting;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Page content settings.
    pub page: PageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// What the rendered page shows.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Endpoint the form posts to. Served elsewhere.
    pub action: String,
    /// `local` or an IANA zone name; decides which calendar day it is.
    pub timezone: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `weekday-form.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("weekday-form.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("WEEKDAY_FORM_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("WEEKDAY_FORM_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("WEEKDAY_FORM_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("WEEKDAY_FORM_ACTION") {
            self.page.action = val;
        }
        if let Some(val) = lookup("WEEKDAY_FORM_TIMEZONE") {
            self.page.timezone = val;
        }
        if let Some(val) = lookup("WEEKDAY_FORM_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.page.action.trim().is_empty() {
            return Err(ConfigError::Validation(
                "form action must not be empty".to_string(),
            ));
        }
        self.time_zone()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeZone`] for names that are neither `local`
    /// nor a known IANA zone.
    pub fn time_zone(&self) -> Result<TimeZoneSetting, ConfigError> {
        Ok(self.page.timezone.parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            action: DEFAULT_ACTION.to_string(),
            timezone: "local".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "weekday_formd=info,weekday_form_app=info,weekday_form_adapter_http_axum=info,tower_http=debug"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Unknown time-zone name.
    #[error("invalid time zone")]
    TimeZone(#[from] TimeZoneError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, val)| ((*key).to_string(), (*val).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.page.title, "Sample Form");
        assert_eq!(config.page.action, "action.php");
        assert_eq!(config.page.timezone, "local");
        assert_eq!(config.time_zone().unwrap(), TimeZoneSetting::Local);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [page]
            title = 'Days'
            action = 'submit.cgi'
            timezone = 'Europe/Paris'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.page.title, "Days");
        assert_eq!(config.page.action, "submit.cgi");
        assert_eq!(
            config.time_zone().unwrap(),
            TimeZoneSetting::Named(chrono_tz::Europe::Paris)
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_action() {
        let mut config = Config::default();
        config.page.action = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_unknown_time_zone() {
        let mut config = Config::default();
        config.page.timezone = "Mars/Olympus".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::TimeZone(_))));
    }

    #[test]
    fn should_accept_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("WEEKDAY_FORM_HOST", "127.0.0.1"),
            ("WEEKDAY_FORM_PORT", "8080"),
            ("WEEKDAY_FORM_ACTION", "/cgi-bin/submit"),
            ("WEEKDAY_FORM_TIMEZONE", "Asia/Tokyo"),
            ("WEEKDAY_FORM_LOG", "trace"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.page.action, "/cgi-bin/submit");
        assert_eq!(config.page.timezone, "Asia/Tokyo");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("WEEKDAY_FORM_PORT", "8080"),
            ("WEEKDAY_FORM_BIND", "[::1]:9000"),
        ]));
        assert_eq!(config.server.host, "[::1]");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn should_prefer_rust_log_over_own_variable() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("WEEKDAY_FORM_LOG", "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("WEEKDAY_FORM_PORT", "http")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [page]
            timezone = 'UTC'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.page.action, "action.php");
        assert_eq!(
            config.time_zone().unwrap(),
            TimeZoneSetting::Named(chrono_tz::UTC)
        );
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
