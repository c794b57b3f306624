//! Common types used across the API

use serde::{Deserialize, Serialize};

/// Weight unit the service quotes metal prices in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Troy ounce, the service default
    TroyOz,
    /// Gram
    Gram,
    /// Kilogram
    Kilogram,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::TroyOz => write!(f, "troy_oz"),
            Unit::Gram => write!(f, "gram"),
            Unit::Kilogram => write!(f, "kilogram"),
        }
    }
}

impl Unit {
    /// Parse a unit from its wire name or a common abbreviation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "troy_oz" | "ozt" | "oz" => Some(Unit::TroyOz),
            "gram" | "g" => Some(Unit::Gram),
            "kilogram" | "kg" => Some(Unit::Kilogram),
            _ => None,
        }
    }
}
