//! Account usage

use serde::{Deserialize, Serialize};

/// Response of `/usage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageResponse {
  pub success: bool,

  pub result: UsageStats,
}

/// Quota counters for the current billing period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
  /// Subscription plan name
  pub plan: String,
  pub used: i64,
  pub total: i64,
  pub remaining: i64,
}

impl UsageStats {
  pub fn is_exhausted(&self) -> bool {
    self.remaining <= 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_usage_deserialize() {
    let json = r#"{"success": true, "result": {"plan": "Free", "used": 42, "total": 100, "remaining": 58}}"#;
    let usage: UsageResponse = serde_json::from_str(json).unwrap();
    assert_eq!(usage.result.plan, "Free");
    assert_eq!(usage.result.used + usage.result.remaining, usage.result.total);
    assert!(!usage.result.is_exhausted());
  }
}
