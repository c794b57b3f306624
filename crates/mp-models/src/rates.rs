//! Rate responses: live, historical, hourly, timeframe and change

use crate::common::{Rates, timestamp_to_utc};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `/latest` and `/{date}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestRates {
    pub success: bool,

    /// Base currency the rates are quoted against
    pub base: String,

    /// Unix timestamp (seconds) of the quote
    pub timestamp: i64,

    pub rates: Rates,
}

impl LatestRates {
    /// Quote time as a UTC datetime
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_utc(self.timestamp)
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

/// Historical rates share the live schema
pub type HistoricalRates = LatestRates;

/// Response of `/hourly`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRates {
    pub success: bool,

    pub base: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// One bucket per hour, in the order the service returns them
    pub rates: Vec<HourlyBucket>,
}

/// A single hour of [`HourlyRates`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    pub timestamp: i64,

    pub rates: Rates,
}

impl HourlyBucket {
    pub fn at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_utc(self.timestamp)
    }
}

/// Response of `/timeframe`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeRates {
    pub success: bool,

    pub base: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Rates per day, ordered by date
    pub rates: BTreeMap<NaiveDate, Rates>,
}

impl TimeframeRates {
    /// Series of a single code across the timeframe, skipping days without it
    pub fn series(&self, code: &str) -> Vec<(NaiveDate, f64)> {
        self.rates
            .iter()
            .filter_map(|(date, rates)| rates.get(code).map(|rate| (*date, *rate)))
            .collect()
    }
}

/// Response of `/change`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRates {
    pub success: bool,

    pub base: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub rates: BTreeMap<String, RateChange>,
}

/// Movement of one code between `start_date` and `end_date`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateChange {
    pub start_rate: f64,

    pub end_rate: f64,

    /// Absolute change, `end_rate - start_rate`
    pub change: f64,

    /// Change in percent
    pub change_pct: f64,
}
