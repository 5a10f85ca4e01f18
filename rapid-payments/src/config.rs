//! Rapid client configuration

use crate::error::{RapidError, RapidResult};
use secrecy::SecretString;
use serde::Deserialize;

/// Production gateway base URL
pub const PRODUCTION_ENDPOINT: &str = "https://api.ewaypayments.com/";
/// Sandbox gateway base URL
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.ewaypayments.com/";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "RAPID";

/// Gateway endpoint selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Live gateway
    Production,
    /// Test gateway
    Sandbox,
    /// Any other base URL
    Custom(String),
}

impl Endpoint {
    /// Parse a configured endpoint. Preset names are case sensitive.
    pub fn parse(value: &str) -> Self {
        match value {
            "Production" => Self::Production,
            "Sandbox" => Self::Sandbox,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Base URL, always ending with `/`.
    pub fn resolve(&self) -> String {
        match self {
            Self::Production => PRODUCTION_ENDPOINT.to_string(),
            Self::Sandbox => SANDBOX_ENDPOINT.to_string(),
            Self::Custom(url) if url.ends_with('/') => url.clone(),
            Self::Custom(url) => format!("{}/", url),
        }
    }
}

/// Whether a resolved endpoint is an absolute URL that paths can be joined onto.
pub fn is_well_formed(endpoint: &str) -> bool {
    url::Url::parse(endpoint)
        .map(|url| !url.cannot_be_a_base() && url.has_host())
        .unwrap_or(false)
}

/// Whether an API key and password pair is usable.
pub fn credentials_present(api_key: &str, password: &str) -> bool {
    !api_key.trim().is_empty() && !password.trim().is_empty()
}

/// Rapid client configuration
#[derive(Debug)]
pub struct RapidConfig {
    /// Rapid API key
    pub api_key: String,
    /// Rapid API password
    pub password: SecretString,
    /// `Production`, `Sandbox` or a base URL
    pub endpoint: String,
    /// Value for the `X-EWAY-APIVERSION` header
    pub api_version: Option<u32>,
}

#[derive(Deserialize)]
struct RawConfig {
    api_key: String,
    password: String,
    endpoint: String,
    #[serde(default)]
    api_version: Option<u32>,
}

impl From<RawConfig> for RapidConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            api_key: raw.api_key,
            password: SecretString::from(raw.password),
            endpoint: raw.endpoint,
            api_version: raw.api_version,
        }
    }
}

impl RapidConfig {
    /// Create a configuration without an API version.
    pub fn new(
        api_key: impl Into<String>,
        password: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            password: SecretString::from(password.into()),
            endpoint: endpoint.into(),
            api_version: None,
        }
    }

    /// Pin the gateway API version.
    pub fn with_version(mut self, version: u32) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Load from `RAPID_*` environment variables, reading `.env` first if present.
    ///
    /// Reads `RAPID_API_KEY`, `RAPID_PASSWORD`, `RAPID_ENDPOINT` and the
    /// optional `RAPID_API_VERSION`.
    pub fn from_env() -> RapidResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(ENV_PREFIX, |key| std::env::var(key).ok())
    }

    /// Load from a TOML document with `api_key`, `password`, `endpoint`
    /// and optional `api_version` keys.
    pub fn from_toml_str(document: &str) -> RapidResult<Self> {
        let raw: RawConfig = toml::from_str(document)?;
        Ok(raw.into())
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> RapidResult<Self> {
        let var = |key: &str| {
            let full_key = format!("{}_{}", prefix, key);
            lookup(&full_key).ok_or_else(|| RapidError::Config(format!("{} is not set", full_key)))
        };

        let api_version = match lookup(&format!("{}_API_VERSION", prefix)) {
            Some(value) => Some(value.trim().parse::<u32>().map_err(|e| {
                RapidError::Config(format!("{}_API_VERSION: {}", prefix, e))
            })?),
            None => None,
        };

        Ok(Self {
            api_key: var("API_KEY")?,
            password: SecretString::from(var("PASSWORD")?),
            endpoint: var("ENDPOINT")?,
            api_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    #[test]
    fn test_presets() {
        assert_eq!(Endpoint::parse("Production").resolve(), PRODUCTION_ENDPOINT);
        assert_eq!(Endpoint::parse("Sandbox").resolve(), SANDBOX_ENDPOINT);
        assert_eq!(
            Endpoint::parse("sandbox"),
            Endpoint::Custom("sandbox".to_string())
        );
    }

    #[test]
    fn test_custom_endpoint_gets_trailing_slash() {
        let endpoint = Endpoint::parse("https://gateway.example.com/rapid");
        assert_eq!(endpoint.resolve(), "https://gateway.example.com/rapid/");
        assert_eq!(
            Endpoint::parse("https://gateway.example.com/").resolve(),
            "https://gateway.example.com/"
        );
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed(SANDBOX_ENDPOINT));
        assert!(is_well_formed("http://127.0.0.1:8080/"));
        assert!(!is_well_formed("sandbox/"));
        assert!(!is_well_formed("/"));
        assert!(!is_well_formed("mailto:ops@example.com/"));
    }

    #[test]
    fn test_credentials_present() {
        assert!(credentials_present("key", "pw"));
        assert!(!credentials_present(" ", "pw"));
        assert!(!credentials_present("key", ""));
    }

    #[test]
    fn test_from_toml() {
        let config = RapidConfig::from_toml_str(
            r#"
            api_key = "44DD7C70Jre1dVgIsULcEyi+A+/cX9V5SAHkIiyVdWrHRG2tZm0rdintfZz85Pa/kGwq/1"
            password = "Abcd1234"
            endpoint = "Sandbox"
            api_version = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "Sandbox");
        assert_eq!(config.password.expose_secret(), "Abcd1234");
        assert_eq!(config.api_version, Some(40));
    }

    #[test]
    fn test_from_toml_missing_key() {
        let err = RapidConfig::from_toml_str("api_key = \"k\"").unwrap_err();
        assert!(matches!(err, RapidError::Config(_)));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("TEST_API_KEY", "key"),
            ("TEST_PASSWORD", "secret"),
            ("TEST_ENDPOINT", "Production"),
            ("TEST_API_VERSION", "31"),
        ]
        .into_iter()
        .collect();

        let config =
            RapidConfig::from_lookup("TEST", |k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_version, Some(31));

        let err = RapidConfig::from_lookup("NONE", |_| None).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: NONE_API_KEY is not set");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = RapidConfig::new("key", "hunter2", "Sandbox");
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
