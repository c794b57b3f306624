//! Open/high/low/close quotes

use crate::common::timestamp_to_utc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `/ohlc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcResponse {
  pub success: bool,

  pub base: String,

  /// Quote currency of the pair
  pub quote: String,

  pub timestamp: i64,

  pub rate: OhlcRate,
}

impl OhlcResponse {
  pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
    timestamp_to_utc(self.timestamp)
  }
}

/// Price quadruple for the requested day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRate {
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
}

impl OhlcRate {
  /// High minus low
  pub fn range(&self) -> f64 {
    self.high - self.low
  }
}
