//! Configuration loading from a JSON block on the page, with query-string overrides.
//!
//! Looks for `<script id="garden-config" type="application/json">` in the
//! document. Every field has a sensible default so the block is optional.
//! Query parameters (`api`, `poll_ms`, `log`) take precedence over it and
//! are percent-decoded.

use std::time::Duration;

use garden_domain::relay::RelayNumber;
use serde::Deserialize;
use url::form_urlencoded;
use web_sys::Document;

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "garden-config";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Device API settings.
    pub api: ApiConfig,
    /// Poll loop settings.
    pub polling: PollingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Relay labels.
    pub relays: RelaysConfig,
}

/// Device API location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint is appended to.
    pub base_url: String,
}

/// Poll loop timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Milliseconds between two sensor-data polls.
    pub interval_ms: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Relays shown on the page, relay 1 first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelaysConfig {
    /// Display name of each relay.
    pub names: Vec<String>,
}

impl DashboardConfig {
    /// Load configuration from `document` then apply query-string overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config block exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load(document: &Document) -> Result<Self, ConfigError> {
        let mut config = match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(el) => Self::from_json(&el.text_content().unwrap_or_default())?,
            None => Self::default(),
        };
        let query = document
            .location()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();
        config.apply_query_overrides(&query);
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(content).map_err(ConfigError::Parse)
    }

    /// Apply `?api=…&poll_ms=…&log=…` overrides. Unknown keys and
    /// unparsable values are ignored.
    pub fn apply_query_overrides(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "api" => self.api.base_url = value.into_owned(),
                "poll_ms" => {
                    if let Ok(ms) = value.parse() {
                        self.polling.interval_ms = ms;
                    }
                }
                "log" => self.logging.filter = value.into_owned(),
                _ => {}
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api base_url must not be empty".to_string(),
            ));
        }
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling interval must be non-zero".to_string(),
            ));
        }
        if self.relays.names.is_empty() {
            return Err(ConfigError::Validation(
                "at least one relay must be configured".to_string(),
            ));
        }
        if self.relays.names.len() > usize::from(u8::MAX) {
            return Err(ConfigError::Validation(format!(
                "at most {} relays are supported",
                u8::MAX
            )));
        }
        Ok(())
    }

    /// Time between two polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.polling.interval_ms))
    }

    /// Configured relays with their 1-based numbers.
    pub fn relays(&self) -> impl Iterator<Item = (RelayNumber, &str)> + '_ {
        self.relays
            .names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                RelayNumber::from_index(index).map(|number| (number, name.as_str()))
            })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Default for RelaysConfig {
    fn default() -> Self {
        Self {
            names: (1..=4).map(|n| format!("Relay {n}")).collect(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse config block")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.polling.interval_ms, 5000);
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.relays.names.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_blank_block_as_defaults() {
        let config = DashboardConfig::from_json("  \n").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn should_parse_partial_json() {
        let config = DashboardConfig::from_json(r#"{ "polling": { "interval_ms": 2000 } }"#).unwrap();
        assert_eq!(config.polling.interval_ms, 2000);
        assert_eq!(config.api.base_url, "/api");
    }

    #[test]
    fn should_parse_full_json() {
        let json = r#"{
            "api": { "base_url": "http://garden.local/api" },
            "polling": { "interval_ms": 10000 },
            "logging": { "filter": "garden_app=debug" },
            "relays": { "names": ["Pump", "Lights"] }
        }"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.api.base_url, "http://garden.local/api");
        assert_eq!(config.polling.interval_ms, 10000);
        assert_eq!(config.logging.filter, "garden_app=debug");
        let relays: Vec<(u8, &str)> = config.relays().map(|(n, name)| (n.get(), name)).collect();
        assert_eq!(relays, vec![(1, "Pump"), (2, "Lights")]);
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = DashboardConfig::from_json("{ polling: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_apply_query_overrides() {
        let mut config = DashboardConfig::default();
        config.apply_query_overrides("?api=/device/api&poll_ms=1500&log=debug&theme=dark");
        assert_eq!(config.api.base_url, "/device/api");
        assert_eq!(config.polling.interval_ms, 1500);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_percent_decode_query_overrides() {
        let mut config = DashboardConfig::default();
        config.apply_query_overrides("?api=http%3A%2F%2Fgarden.local%2Fapi&log=garden_app%3Ddebug");
        assert_eq!(config.api.base_url, "http://garden.local/api");
        assert_eq!(config.logging.filter, "garden_app=debug");
    }

    #[test]
    fn should_ignore_unparsable_query_values() {
        let mut config = DashboardConfig::default();
        config.apply_query_overrides("poll_ms=soon&flag");
        assert_eq!(config.polling.interval_ms, 5000);
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = DashboardConfig::default();
        config.polling.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_empty_base_url() {
        let mut config = DashboardConfig::default();
        config.api.base_url = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_missing_relays() {
        let mut config = DashboardConfig::default();
        config.relays.names.clear();
        assert!(config.validate().is_err());
    }
}
