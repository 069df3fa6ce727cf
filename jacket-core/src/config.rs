use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the WeatherAPI.com key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the forecast client needs to talk to the API.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,

    /// Scheme and host, without trailing slash or path.
    pub base_url: String,

    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the API key through `lookup`, normally `std::env::var`.
    /// An unset or empty key is rejected; the key is otherwise not validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

// Hand-written so the key never ends up in logs or panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_reads_api_key() {
        let cfg = Config::from_lookup(|name| {
            assert_eq!(name, "WEATHER_API_KEY");
            Some("KEY".to_string())
        })
        .expect("key is present");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn from_lookup_errors_when_unset() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "Missing WEATHER_API_KEY environment variable");
    }

    #[test]
    fn from_lookup_errors_when_empty() {
        let err = Config::from_lookup(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn key_is_not_validated() {
        let cfg = Config::from_lookup(|_| Some("  not a real key ".to_string())).unwrap();
        assert_eq!(cfg.api_key, "  not a real key ");
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let cfg = Config::new("KEY").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = Config::new("SECRET");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("SECRET"));
        assert!(dbg.contains("<redacted>"));
    }
}
