//! Supported symbols

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `/symbols`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolsResponse {
  pub success: bool,

  /// Code to display name, e.g. `"XAU" -> "Gold"`
  pub symbols: BTreeMap<String, String>,
}

impl SymbolsResponse {
  /// Display name for a code, if the service knows it
  pub fn name(&self, code: &str) -> Option<&str> {
    self.symbols.get(code).map(String::as_str)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbols_deserialize() {
    let json = r#"{
      "success": true,
      "symbols": {"USD": "United States Dollar", "XAU": "Gold", "XAG": "Silver"}
    }"#;
    let response: SymbolsResponse = serde_json::from_str(json).unwrap();
    assert!(response.success);
    assert_eq!(response.symbols.len(), 3);
    assert_eq!(response.name("XAU"), Some("Gold"));
    assert_eq!(response.name("XYZ"), None);
  }
}
