//! # mp-models
//!
//! Data models for MetalpriceAPI responses.
//!
//! Each endpoint has its own response record because the payloads differ in
//! shape: flat rate maps, nested OHLC and conversion records, hourly bucket
//! lists and date-keyed series. Field names match the wire format exactly.
//!
//! ## Usage
//!
//! ```ignore
//! use mp_models::rates::LatestRates;
//!
//! let latest: LatestRates = serde_json::from_str(&response_json)?;
//! println!("1 {} = {:?} XAU", latest.base, latest.rates.get("XAU"));
//! ```

#![warn(clippy::all)]

pub mod carat;
pub mod common;
pub mod convert;
pub mod ohlc;
pub mod rates;
pub mod symbols;
pub mod usage;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use carat::*;
pub use convert::*;
pub use ohlc::*;
pub use rates::*;
pub use symbols::*;
pub use usage::*;
