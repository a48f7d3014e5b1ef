//! Client configuration.
//!
//! `ClientConfig::default()` talks to the public host with no API key. The
//! same values can be read from the environment:
//!
//! - `FNAPI_BASE_URL`: base URL, default `https://fortnite-api.com`
//! - `FNAPI_API_KEY`: sent as the `Authorization` header when set
//! - `FNAPI_TIMEOUT_SECS`: request timeout for the reqwest transport

use std::time::Duration;

use crate::endpoints::{Endpoints, DEFAULT_BASE_URL};
use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "FNAPI_BASE_URL";
pub const API_KEY_VAR: &str = "FNAPI_API_KEY";
pub const TIMEOUT_VAR: &str = "FNAPI_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source. Unset and
    /// empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(base_url) = var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        config.api_key = var(API_KEY_VAR);
        if let Some(raw) = var(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    name: TIMEOUT_VAR,
                    reason: e.to_string(),
                }
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(self.base_url.clone()))
        }
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> Vec<(String, String)> {
        self.api_key
            .iter()
            .map(|key| ("Authorization".to_string(), key.clone()))
            .collect()
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url).with_headers(self.headers())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.headers().is_empty());
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "http://127.0.0.1:3000"),
            (API_KEY_VAR, "secret"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(
            config.headers(),
            vec![("Authorization".to_string(), "secret".to_string())]
        );
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: TIMEOUT_VAR, .. }));
    }

    #[test]
    fn rejects_relative_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "fortnite-api.com")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn endpoints_carry_api_key() {
        let endpoints = ClientConfig::new("http://localhost").with_api_key("k").endpoints();
        let req = endpoints.creator_code("x");
        assert_eq!(req.header("Authorization"), Some("k"));
        assert_eq!(req.url, "http://localhost/v2/creatorcode?name=x");
    }
}
