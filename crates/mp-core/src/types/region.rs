//! Regional endpoint selection

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Which of the two MetalpriceAPI hosts receives requests.
///
/// Parsing never fails: any value other than a recognised alternate name
/// selects [`Region::Primary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Region {
  /// `api.metalpriceapi.com`
  #[default]
  Primary,
  /// `api-eu.metalpriceapi.com`
  Alternate,
}

impl std::fmt::Display for Region {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Region::Primary => write!(f, "primary"),
      Region::Alternate => write!(f, "alternate"),
    }
  }
}

impl From<&str> for Region {
  fn from(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "alternate" | "eu" => Region::Alternate,
      _ => Region::Primary,
    }
  }
}

impl From<String> for Region {
  fn from(s: String) -> Self {
    Region::from(s.as_str())
  }
}

impl FromStr for Region {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Region::from(s))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_region_parsing() {
    assert_eq!(Region::from("alternate"), Region::Alternate);
    assert_eq!(Region::from("EU"), Region::Alternate);
    assert_eq!(Region::from("primary"), Region::Primary);
    assert_eq!(Region::from(""), Region::Primary);
    assert_eq!(Region::from("mars"), Region::Primary);
    assert_eq!("alternate".parse::<Region>(), Ok(Region::Alternate));
  }

  #[test]
  fn test_region_serde() {
    assert_eq!(serde_json::to_string(&Region::Alternate).unwrap(), "\"alternate\"");
    let region: Region = serde_json::from_str("\"nowhere\"").unwrap();
    assert_eq!(region, Region::Primary);
    let region: Region = serde_json::from_str("\"eu\"").unwrap();
    assert_eq!(region, Region::Alternate);
  }
}
