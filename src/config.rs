//! Client settings loaded from YAML
//!
//! ```yaml
//! base_url: https://stats.nba.com/stats
//! timeout_secs: 20
//! user_agent: my-app/1.0
//! headers:
//!   x-nba-stats-origin: stats
//! ```
//!
//! Every key is optional. Extra headers are added to the client defaults.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides the base URL in the CLI
pub const BASE_URL_ENV: &str = "NBA_STATS_BASE_URL";

/// Settings for building an [`HttpClient`](crate::http::HttpClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl ClientSettings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Replace the base URL when `base_url` is set
    #[must_use]
    pub fn override_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Replace the timeout when `timeout_secs` is set
    #[must_use]
    pub fn override_timeout(mut self, timeout_secs: Option<u64>) -> Self {
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Convert into an HTTP client configuration
    pub fn into_http_config(self) -> Result<HttpClientConfig> {
        self.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "https://stats.nba.com/stats");
        assert_eq!(settings.timeout_secs, 30);
        assert!(settings.user_agent.is_none());
        assert!(settings.headers.is_empty());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
base_url: http://localhost:8080/stats
timeout_secs: 5
user_agent: test-agent/1.0
headers:
  x-nba-stats-origin: stats
"#;
        let settings = ClientSettings::from_yaml_str(yaml).unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080/stats");
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.user_agent.as_deref(), Some("test-agent/1.0"));
        assert_eq!(
            settings.headers.get("x-nba-stats-origin").map(String::as_str),
            Some("stats")
        );
    }

    #[test]
    fn test_partial_and_empty_yaml_use_defaults() {
        let settings = ClientSettings::from_yaml_str("timeout_secs: 10").unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_secs, 10);

        assert_eq!(
            ClientSettings::from_yaml_str("").unwrap(),
            ClientSettings::default()
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ClientSettings::from_yaml_str("retries: 3").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ClientSettings::from_yaml_str("timeout_secs: 0").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://127.0.0.1:9/stats").unwrap();
        let settings = ClientSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:9/stats");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientSettings::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_overrides() {
        let settings = ClientSettings::default()
            .override_base_url(Some("http://override".to_string()))
            .override_timeout(None);
        assert_eq!(settings.base_url, "http://override");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_into_http_config() {
        let mut settings = ClientSettings::default();
        settings.timeout_secs = 7;
        settings.user_agent = Some("agent".to_string());
        settings
            .headers
            .insert("X-Extra".to_string(), "1".to_string());

        let config = settings.into_http_config().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.user_agent, "agent");
        assert_eq!(config.default_headers.get("X-Extra").map(String::as_str), Some("1"));
        assert!(config.default_headers.contains_key("Referer"));
    }
}
