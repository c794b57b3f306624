//! Options for the rate endpoints: live, historical, hourly, timeframe, change

use super::EndpointOptions;
use mp_core::{ParamSet, Unit};

/// Optional parameters of `/latest`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveOptions {
  pub base: Option<String>,
  pub currencies: Vec<String>,
  pub unit: Option<Unit>,
  pub purity: Option<String>,
  pub math: Option<String>,
}

string_setters!(LiveOptions { base, purity, math });
list_and_unit_setters!(LiveOptions);

impl EndpointOptions for LiveOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("base", self.base.as_deref())
      .list("currencies", &self.currencies)
      .optional("unit", self.unit)
      .optional("purity", self.purity.as_deref())
      .optional("math", self.math.as_deref())
  }
}

/// Optional parameters of `/{date}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalOptions {
  pub base: Option<String>,
  pub currencies: Vec<String>,
  pub unit: Option<Unit>,
}

string_setters!(HistoricalOptions { base });
list_and_unit_setters!(HistoricalOptions);

impl EndpointOptions for HistoricalOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("base", self.base.as_deref())
      .list("currencies", &self.currencies)
      .optional("unit", self.unit)
  }
}

/// Optional parameters of `/hourly`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyOptions {
  pub base: Option<String>,
  /// Single quote currency, not a list
  pub currency: Option<String>,
  pub unit: Option<Unit>,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
  pub math: Option<String>,
  pub date_type: Option<String>,
}

string_setters!(HourlyOptions { base, currency, start_date, end_date, math, date_type });

impl HourlyOptions {
  pub fn unit(mut self, unit: Unit) -> Self {
    self.unit = Some(unit);
    self
  }
}

impl EndpointOptions for HourlyOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("base", self.base.as_deref())
      .optional("currency", self.currency.as_deref())
      .optional("unit", self.unit)
      .optional("start_date", self.start_date.as_deref())
      .optional("end_date", self.end_date.as_deref())
      .optional("math", self.math.as_deref())
      .optional("date_type", self.date_type.as_deref())
  }
}

/// Optional parameters of `/timeframe`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeframeOptions {
  pub base: Option<String>,
  pub currencies: Vec<String>,
  pub unit: Option<Unit>,
}

string_setters!(TimeframeOptions { base });
list_and_unit_setters!(TimeframeOptions);

impl EndpointOptions for TimeframeOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("base", self.base.as_deref())
      .list("currencies", &self.currencies)
      .optional("unit", self.unit)
  }
}

/// Optional parameters of `/change`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeOptions {
  pub base: Option<String>,
  pub currencies: Vec<String>,
  pub date_type: Option<String>,
}

string_setters!(ChangeOptions { base, date_type });

impl ChangeOptions {
  pub fn currencies<I, S>(mut self, codes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.currencies = codes.into_iter().map(Into::into).collect();
    self
  }
}

impl EndpointOptions for ChangeOptions {
  fn append_to(&self, params: ParamSet) -> ParamSet {
    params
      .optional("base", self.base.as_deref())
      .list("currencies", &self.currencies)
      .optional("date_type", self.date_type.as_deref())
  }
}
