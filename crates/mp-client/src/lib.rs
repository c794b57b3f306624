//! # mp-client
//!
//! A typed MetalpriceAPI client for Rust.
//!
//! ## Features
//!
//! - **One method per endpoint**: symbols, latest, historical, hourly, OHLC,
//!   convert, timeframe, change, carat and usage
//! - **Async/Await**: Built on reqwest and tokio
//! - **Type Safe**: Strongly typed responses using mp-models
//! - **Regions**: Switch between the primary and EU hosts at any time
//! - **Configurable**: Environment-based configuration via mp-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mp_client::{ConvertOptions, MetalpriceClient};
//! use mp_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = MetalpriceClient::from_config(config)?;
//!
//!     let converted = client
//!         .convert("USD", "XAU", 1000.0, &ConvertOptions::default().date("2024-02-05"))
//!         .await?;
//!     println!("1000 USD = {} XAU", converted.data.result);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Parameters
//!
//! Optional parameters that are `None`, empty strings or empty currency lists
//! are never sent. Currency lists are sent as one comma separated value.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, mp_core::Error>`. A failed request is
//! returned as-is; there are no retries.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod response;
pub mod transport;

// Re-export the main client and common types
pub use client::MetalpriceClient;
pub use endpoints::{
  CaratOptions, ChangeOptions, ConvertOptions, EndpointOptions, HistoricalOptions, HourlyOptions,
  LiveOptions, OhlcOptions, TimeframeOptions,
};
pub use mp_core::{Config, Error, Region, Result, Unit};
pub use mp_models::*;
pub use response::ApiResponse;
pub use transport::{HttpTransport, RawResponse, Transport};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    let client = MetalpriceClient::from_config(config).unwrap();
    assert_eq!(client.config().api_key, "test_key");
  }
}
