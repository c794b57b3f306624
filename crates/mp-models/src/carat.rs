//! Gold prices by carat

use crate::common::timestamp_to_utc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `/carat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaratResponse {
  pub success: bool,

  pub base: String,

  pub timestamp: i64,

  /// Price keyed by carat label, e.g. `"24k"`, `"18k"`
  pub data: BTreeMap<String, f64>,
}

impl CaratResponse {
  pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
    timestamp_to_utc(self.timestamp)
  }

  pub fn price(&self, carat: &str) -> Option<f64> {
    self.data.get(carat).copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_carat_deserialize() {
    let json = r#"{
      "success": true,
      "base": "USD",
      "timestamp": 1707177600,
      "data": {"24k": 65.12, "22k": 59.69, "18k": 48.84}
    }"#;
    let carat: CaratResponse = serde_json::from_str(json).unwrap();
    assert_eq!(carat.data.len(), 3);
    assert_eq!(carat.price("18k"), Some(48.84));
    assert_eq!(carat.price("9k"), None);
  }
}
