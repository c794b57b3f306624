//! Optional parameters for each endpoint
//!
//! Required arguments are passed positionally to the client methods; the
//! optional ones live in an options struct per endpoint. Each struct knows
//! the wire names and order of its parameters.

use mp_core::ParamSet;

/// Optional query parameters of one endpoint
pub trait EndpointOptions {
  /// Append this endpoint's optional parameters to `params`
  fn append_to(&self, params: ParamSet) -> ParamSet;
}

/// Builder setters for `Option<String>` fields
macro_rules! string_setters {
  ($struct_name:ident { $($field:ident),* $(,)? }) => {
    impl $struct_name {
      $(
        #[doc = concat!("Set `", stringify!($field), "`")]
        pub fn $field(mut self, value: impl Into<String>) -> Self {
          self.$field = Some(value.into());
          self
        }
      )*
    }
  };
}

/// Builder setters shared by options that take a currency list and a unit
macro_rules! list_and_unit_setters {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Restrict the response to these codes, sent as one comma separated value
      pub fn currencies<I, S>(mut self, codes: I) -> Self
      where
        I: IntoIterator<Item = S>,
        S: Into<String>,
      {
        self.currencies = codes.into_iter().map(Into::into).collect();
        self
      }

      /// Weight unit for metal prices
      pub fn unit(mut self, unit: mp_core::Unit) -> Self {
        self.unit = Some(unit);
        self
      }
    }
  };
}

pub mod market;
pub mod rates;

pub use market::{CaratOptions, ConvertOptions, OhlcOptions};
pub use rates::{ChangeOptions, HistoricalOptions, HourlyOptions, LiveOptions, TimeframeOptions};
