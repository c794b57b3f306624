/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

use crate::endpoints::{
  CaratOptions, ChangeOptions, ConvertOptions, EndpointOptions, HistoricalOptions, HourlyOptions,
  LiveOptions, OhlcOptions, TimeframeOptions,
};
use crate::response::ApiResponse;
use crate::transport::{HttpTransport, Transport, decode};
use mp_core::{API_KEY_PARAM, Config, Endpoint, Error, ParamSet, Region, Result};
use mp_models::{
  CaratResponse, ChangeRates, ConvertResponse, HistoricalRates, HourlyRates, LatestRates,
  OhlcResponse, SymbolsResponse, TimeframeRates, UsageResponse,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Main MetalpriceAPI client
///
/// One method per remote endpoint. Every call sends exactly one GET request
/// to the host of the currently selected [`Region`] and returns the decoded
/// payload with the HTTP status and headers. Nothing is retried, cached or
/// rate limited.
///
/// # Examples
///
/// ```no_run
/// use mp_client::{LiveOptions, MetalpriceClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MetalpriceClient::new("YOUR_API_KEY")?;
///
///     let live = client
///         .fetch_live(&LiveOptions::default().base("USD").currencies(["XAU", "XAG"]))
///         .await?;
///     println!("XAU per USD: {:?}", live.data.rate("XAU"));
///
///     Ok(())
/// }
/// ```
pub struct MetalpriceClient {
  config: Config,
  transport: Arc<dyn Transport>,
}

impl MetalpriceClient {
  /// Create a client for the primary region
  ///
  /// # Errors
  ///
  /// Returns [`Error::ApiKey`] if `api_key` is empty, or an HTTP error if the
  /// underlying client cannot be built.
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::from_config(Config::default_with_key(api_key.into()))
  }

  /// Create a client for a specific region.
  ///
  /// Unrecognised region names fall back to [`Region::Primary`].
  pub fn with_region(api_key: impl Into<String>, region: impl Into<Region>) -> Result<Self> {
    let mut config = Config::default_with_key(api_key.into());
    config.region = region.into();
    Self::from_config(config)
  }

  /// Create a client from a full configuration, e.g. [`Config::from_env`]
  pub fn from_config(config: Config) -> Result<Self> {
    let transport = Arc::new(HttpTransport::new(&config)?);
    Self::with_transport(config, transport)
  }

  /// Create a client that sends requests through a custom transport
  pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
    config.validate()?;
    Ok(Self { config, transport })
  }

  /// Replace the API key used by every later call
  pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
    let api_key = api_key.into();
    if api_key.is_empty() {
      return Err(Error::ApiKey("API key must not be empty".to_string()));
    }
    self.config.api_key = api_key;
    Ok(())
  }

  /// Switch every later call to another regional host
  pub fn set_region(&mut self, region: impl Into<Region>) {
    self.config.region = region.into();
    debug!("Region set to {} ({})", self.config.region, self.config.base_url());
  }

  pub fn region(&self) -> Region {
    self.config.region
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// List every supported currency and metal code
  #[instrument(skip(self))]
  pub async fn list_symbols(&self) -> Result<ApiResponse<SymbolsResponse>> {
    self.get(Endpoint::Symbols, ParamSet::new()).await
  }

  /// Latest rates
  #[instrument(skip(self))]
  pub async fn fetch_live(&self, options: &LiveOptions) -> Result<ApiResponse<LatestRates>> {
    self.get(Endpoint::Latest, options.append_to(ParamSet::new())).await
  }

  /// Rates for a past day.
  ///
  /// `date` (`YYYY-MM-DD`) becomes the URL path; it is not checked locally
  /// and a malformed date is reported by the service.
  #[instrument(skip(self))]
  pub async fn fetch_historical(
    &self,
    date: &str,
    options: &HistoricalOptions,
  ) -> Result<ApiResponse<HistoricalRates>> {
    self.get(Endpoint::Historical(date.to_string()), options.append_to(ParamSet::new())).await
  }

  /// Hourly rates between `start_date` and `end_date` of the options
  #[instrument(skip(self))]
  pub async fn fetch_hourly(&self, options: &HourlyOptions) -> Result<ApiResponse<HourlyRates>> {
    self.get(Endpoint::Hourly, options.append_to(ParamSet::new())).await
  }

  /// Open, high, low and close for the pair `base`/`currency`
  #[instrument(skip(self))]
  pub async fn fetch_ohlc(
    &self,
    base: &str,
    currency: &str,
    options: &OhlcOptions,
  ) -> Result<ApiResponse<OhlcResponse>> {
    let params = ParamSet::new().required("base", base).required("currency", currency);
    self.get(Endpoint::Ohlc, options.append_to(params)).await
  }

  /// Convert `amount` of `from` into `to`.
  ///
  /// `amount` is always sent, including zero.
  #[instrument(skip(self))]
  pub async fn convert(
    &self,
    from: &str,
    to: &str,
    amount: f64,
    options: &ConvertOptions,
  ) -> Result<ApiResponse<ConvertResponse>> {
    let params = ParamSet::new().required("from", from).required("to", to).required("amount", amount);
    self.get(Endpoint::Convert, options.append_to(params)).await
  }

  /// Daily rates for every day between two dates
  #[instrument(skip(self))]
  pub async fn fetch_timeframe(
    &self,
    start_date: &str,
    end_date: &str,
    options: &TimeframeOptions,
  ) -> Result<ApiResponse<TimeframeRates>> {
    let params = ParamSet::new().required("start_date", start_date).required("end_date", end_date);
    self.get(Endpoint::Timeframe, options.append_to(params)).await
  }

  /// Change and percentage change between two dates
  #[instrument(skip(self))]
  pub async fn fetch_change(
    &self,
    start_date: &str,
    end_date: &str,
    options: &ChangeOptions,
  ) -> Result<ApiResponse<ChangeRates>> {
    let params = ParamSet::new().required("start_date", start_date).required("end_date", end_date);
    self.get(Endpoint::Change, options.append_to(params)).await
  }

  /// Gold prices per carat
  #[instrument(skip(self))]
  pub async fn fetch_carat(&self, options: &CaratOptions) -> Result<ApiResponse<CaratResponse>> {
    self.get(Endpoint::Carat, options.append_to(ParamSet::new())).await
  }

  /// Quota used and remaining for the current plan
  #[instrument(skip(self))]
  pub async fn fetch_usage(&self) -> Result<ApiResponse<UsageResponse>> {
    self.get(Endpoint::Usage, ParamSet::new()).await
  }

  /// URL and query pairs for a request, resolved against the current config.
  ///
  /// The API key always comes first, followed by the sanitized parameters.
  pub fn build_request(&self, endpoint: &Endpoint, params: ParamSet) -> (String, Vec<(String, String)>) {
    let url = format!("{}{}", self.config.base_url(), endpoint.path());
    let mut query = Vec::with_capacity(params.len() + 1);
    query.push((API_KEY_PARAM.to_string(), self.config.api_key.clone()));
    query.extend(params.into_query());
    (url, query)
  }

  async fn get<T>(&self, endpoint: Endpoint, params: ParamSet) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    // Built before the first await: config changes after this point do not
    // affect this request.
    let (url, query) = self.build_request(&endpoint, params);
    debug!("Making request to: {}", redacted(&url, &query));

    let raw = self.transport.get(&url, &query).await?;
    decode(raw)
  }
}

/// Full request URL with the API key masked, for logging
fn redacted(url: &str, query: &[(String, String)]) -> String {
  let pairs = query.iter().map(|(k, v)| {
    if k == API_KEY_PARAM { (k.as_str(), "***") } else { (k.as_str(), v.as_str()) }
  });
  match Url::parse_with_params(url, pairs) {
    Ok(full) => full.to_string(),
    Err(_) => url.to_string(),
  }
}

impl std::fmt::Debug for MetalpriceClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MetalpriceClient")
      .field("region", &self.config.region)
      .field("base_url", &self.config.base_url())
      .field("api_key", &"***")
      .field("transport", &"Transport")
      .finish()
  }
}
