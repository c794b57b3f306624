//! Configuration management for the MetalpriceAPI client

use crate::error::{Error, Result};
use crate::types::Region;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the MetalpriceAPI client
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
  /// MetalpriceAPI key, sent as `api_key` on every request
  pub api_key: String,

  /// Which regional host receives requests
  #[serde(default)]
  pub region: Region,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL used for [`Region::Primary`]
  pub primary_url: String,

  /// Base URL used for [`Region::Alternate`]
  pub alternate_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("METALPRICE_API_KEY")
      .map_err(|_| Error::ApiKey("METALPRICE_API_KEY not set".to_string()))?;
    if api_key.is_empty() {
      return Err(Error::ApiKey("METALPRICE_API_KEY is empty".to_string()));
    }

    let region = env::var("METALPRICE_REGION").map(|r| Region::from(r.as_str())).unwrap_or_default();

    let timeout_secs = env::var("METALPRICE_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid METALPRICE_TIMEOUT_SECS".to_string()))?;

    let primary_url = env::var("METALPRICE_BASE_URL")
      .unwrap_or_else(|_| crate::METALPRICE_PRIMARY_URL.to_string());
    let alternate_url = env::var("METALPRICE_EU_BASE_URL")
      .unwrap_or_else(|_| crate::METALPRICE_ALTERNATE_URL.to_string());

    let config = Config { api_key, region, timeout_secs, primary_url, alternate_url };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      region: Region::Primary,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      primary_url: crate::METALPRICE_PRIMARY_URL.to_string(),
      alternate_url: crate::METALPRICE_ALTERNATE_URL.to_string(),
    }
  }

  /// Point both regions somewhere else, e.g. a mock server
  pub fn with_base_urls(mut self, primary: impl Into<String>, alternate: impl Into<String>) -> Self {
    self.primary_url = primary.into();
    self.alternate_url = alternate.into();
    self
  }

  /// Base URL for the currently selected region, without a trailing slash.
  ///
  /// Resolved on every call so that [`Config::region`] changes take effect
  /// for the next request.
  pub fn base_url(&self) -> &str {
    let url = match self.region {
      Region::Primary => &self.primary_url,
      Region::Alternate => &self.alternate_url,
    };
    url.trim_end_matches('/')
  }

  /// Check that the key is present and both base URLs parse
  pub fn validate(&self) -> Result<()> {
    if self.api_key.is_empty() {
      return Err(Error::ApiKey("API key must not be empty".to_string()));
    }
    Url::parse(&self.primary_url)?;
    Url::parse(&self.alternate_url)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.region, Region::Primary);
    assert_eq!(config.base_url(), "https://api.metalpriceapi.com/v1");
  }

  #[test]
  fn test_base_url_follows_region() {
    let mut config = Config::default_with_key("test_key".to_string());
    config.region = Region::Alternate;
    assert_eq!(config.base_url(), "https://api-eu.metalpriceapi.com/v1");

    config.region = Region::from("somewhere-else");
    assert_eq!(config.base_url(), "https://api.metalpriceapi.com/v1");
  }

  #[test]
  fn test_base_url_trims_trailing_slash() {
    let config = Config::default_with_key("k".to_string())
      .with_base_urls("http://127.0.0.1:9000/us/", "http://127.0.0.1:9000/eu");
    assert_eq!(config.base_url(), "http://127.0.0.1:9000/us");
  }

  #[test]
  fn test_validate() {
    assert!(Config::default_with_key("k".to_string()).validate().is_ok());
    assert!(matches!(
      Config::default_with_key(String::new()).validate(),
      Err(Error::ApiKey(_))
    ));
    let bad = Config::default_with_key("k".to_string()).with_base_urls("not a url", "also not");
    assert!(matches!(bad.validate(), Err(Error::Url(_))));
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("METALPRICE_API_KEY", "env_key");
    env::set_var("METALPRICE_REGION", "eu");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "env_key");
    assert_eq!(config.region, Region::Alternate);
    assert_eq!(config.timeout_secs, 30);
    env::remove_var("METALPRICE_REGION");

    // Same non-empty rule as `validate` and `set_api_key`: blank is not empty.
    env::set_var("METALPRICE_API_KEY", "   ");
    assert_eq!(Config::from_env().unwrap().api_key, "   ");

    env::set_var("METALPRICE_API_KEY", "");
    assert!(matches!(Config::from_env(), Err(Error::ApiKey(_))));
    env::set_var("METALPRICE_API_KEY", "env_key");
  }
}
