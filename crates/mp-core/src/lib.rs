//! # mp-core
//!
//! Shared building blocks for the MetalpriceAPI client crates: configuration,
//! the error type, region routing and the query parameter rules every
//! endpoint goes through before a request is sent.

pub mod config;
pub mod error;
pub mod params;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use params::{ParamSet, csv, sanitize};
pub use types::{Region, Unit};

/// The remote operations exposed by MetalpriceAPI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
  Symbols,
  Latest,
  /// Historical rates for a single day; the date is the path segment.
  Historical(String),
  Hourly,
  Ohlc,
  Convert,
  Timeframe,
  Change,
  Carat,
  Usage,
}

impl Endpoint {
  /// Path relative to the regional base URL, always starting with `/`.
  pub fn path(&self) -> String {
    match self {
      Endpoint::Historical(date) => format!("/{}", date),
      other => format!("/{}", other),
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::Symbols => write!(f, "symbols"),
      Endpoint::Latest => write!(f, "latest"),
      Endpoint::Historical(date) => write!(f, "{}", date),
      Endpoint::Hourly => write!(f, "hourly"),
      Endpoint::Ohlc => write!(f, "ohlc"),
      Endpoint::Convert => write!(f, "convert"),
      Endpoint::Timeframe => write!(f, "timeframe"),
      Endpoint::Change => write!(f, "change"),
      Endpoint::Carat => write!(f, "carat"),
      Endpoint::Usage => write!(f, "usage"),
    }
  }
}

/// Base URL for the primary (US) region
pub const METALPRICE_PRIMARY_URL: &str = "https://api.metalpriceapi.com/v1";

/// Base URL for the alternate (EU) region
pub const METALPRICE_ALTERNATE_URL: &str = "https://api-eu.metalpriceapi.com/v1";

/// Query parameter carrying the credential
pub const API_KEY_PARAM: &str = "api_key";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
