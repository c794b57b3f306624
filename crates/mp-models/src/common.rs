/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Common types and structures shared by MetalpriceAPI responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Currency or metal code mapped to its rate against the base currency
pub type Rates = BTreeMap<String, f64>;

/// Convert a unix timestamp (seconds) from a response into a UTC datetime
pub fn timestamp_to_utc(timestamp: i64) -> Option<DateTime<Utc>> {
  DateTime::from_timestamp(timestamp, 0)
}

/// Body returned instead of the payload when a request is rejected
///
/// ```json
/// {"success": false, "error": {"statusCode": 101, "message": "..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
  pub success: bool,

  pub error: ErrorDetail,
}

/// Error code and message from an [`ErrorEnvelope`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
  /// Service-specific error code
  #[serde(rename = "statusCode")]
  pub status_code: u16,

  /// Human readable message
  #[serde(default)]
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timestamp_to_utc() {
    let dt = timestamp_to_utc(1707177600).unwrap();
    assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-02-06");
  }

  #[test]
  fn test_error_envelope() {
    let json = r#"{"success": false, "error": {"statusCode": 101, "message": "Invalid API Key."}}"#;
    let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.error.status_code, 101);
    assert_eq!(envelope.error.message, "Invalid API Key.");
  }

  #[test]
  fn test_error_envelope_without_message() {
    let json = r#"{"success": false, "error": {"statusCode": 404}}"#;
    let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.error.message, "");
  }
}
