//! Currency conversion

use serde::{Deserialize, Serialize};

/// Response of `/convert`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,

    /// Echo of the request
    pub query: ConvertQuery,

    pub info: ConvertInfo,

    /// `amount` expressed in `to`
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertQuery {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Rate used for the conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertInfo {
    pub quote: f64,
    pub timestamp: i64,
}
