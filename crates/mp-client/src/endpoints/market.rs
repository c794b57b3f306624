//! Options for OHLC, conversion and carat endpoints

use super::EndpointOptions;
use mp_core::{ParamSet, Unit};

/// Optional parameters of `/ohlc`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcOptions {
  pub date: Option<String>,
  pub unit: Option<Unit>,
  pub date_type: Option<String>,
}

string_setters!(OhlcOptions { date, date_type });

impl OhlcOptions {
  pub fn unit(mut self, unit: Unit) -> Self {
    self.unit = Some(unit);
    self
  }
}

impl EndpointOptions for OhlcOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("date", self.date.as_deref())
      .optional("unit", self.unit)
      .optional("date_type", self.date_type.as_deref())
  }
}

/// Optional parameters of `/convert`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
  /// Convert at the rate of this day instead of the latest
  pub date: Option<String>,
  pub unit: Option<Unit>,
}

string_setters!(ConvertOptions { date });

impl ConvertOptions {
  pub fn unit(mut self, unit: Unit) -> Self {
    self.unit = Some(unit);
    self
  }
}

impl EndpointOptions for ConvertOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params.optional("date", self.date.as_deref()).optional("unit", self.unit)
  }
}

/// Optional parameters of `/carat`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaratOptions {
  pub base: Option<String>,
  pub currency: Option<String>,
  pub date: Option<String>,
}

string_setters!(CaratOptions { base, currency, date });

impl EndpointOptions for CaratOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("base", self.base.as_deref())
      .optional("currency", self.currency.as_deref())
      .optional("date", self.date.as_deref())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_convert_options_omit_unit() {
    let query = ConvertOptions::default().date("2024-02-05").append_to(ParamSet::new()).into_query();
    assert_eq!(query, vec![("date".to_string(), "2024-02-05".to_string())]);
  }

  #[test]
  fn test_ohlc_options() {
    let query = OhlcOptions::default()
      .date("2024-02-05")
      .unit(Unit::Kilogram)
      .date_type("start")
      .append_to(ParamSet::new())
      .into_query();
    let keys: Vec<_> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["date", "unit", "date_type"]);
    assert_eq!(query[1].1, "kilogram");
  }

  #[test]
  fn test_carat_options() {
    let query = CaratOptions::default().base("USD").date("2024-02-06").append_to(ParamSet::new()).into_query();
    assert_eq!(
      query,
      vec![("base".to_string(), "USD".to_string()), ("date".to_string(), "2024-02-06".to_string())]
    );
  }
}
