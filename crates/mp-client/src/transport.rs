//! HTTP transport layer for MetalpriceAPI requests
//!
//! The client only needs "GET this URL with these query pairs and give me the
//! status and body back". That seam is the [`Transport`] trait; the default
//! implementation is [`HttpTransport`] on top of `reqwest`. Retries, pooling
//! and TLS are left entirely to the transport.

use async_trait::async_trait;
use mp_core::{Config, Error, Result};
use mp_models::ErrorEnvelope;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error};

use crate::response::ApiResponse;

/// Undecoded reply from a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
  pub status: u16,
  /// Header names are lowercase
  pub headers: BTreeMap<String, String>,
  pub body: String,
}

/// Performs a single GET request; no retries
#[async_trait]
pub trait Transport: Send + Sync {
  async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse>;
}

/// `reqwest` backed [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: Client,
  timeout: Duration,
}

impl HttpTransport {
  /// Create a new transport using the timeout from `config`
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("mp-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse> {
    let response = self
      .client
      .get(url)
      .query(query)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e.without_url())))?;

    let status = response.status().as_u16();
    let headers = response
      .headers()
      .iter()
      .filter_map(|(name, value)| {
        value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
      })
      .collect();

    let body = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

    Ok(RawResponse { status, headers, body })
  }
}

/// Turn a raw reply into a typed response.
///
/// Non-2xx statuses become [`Error::Status`] carrying the body unchanged, a
/// 2xx body with `"success": false` becomes [`Error::Api`], and anything
/// that does not match `T` becomes [`Error::Parse`].
pub fn decode<T>(raw: RawResponse) -> Result<ApiResponse<T>>
where
  T: DeserializeOwned,
{
  debug!("Response status {} with body length: {} bytes", raw.status, raw.body.len());

  #[cfg(feature = "debug-logging")]
  tracing::trace!("Response body: {}", raw.body);

  if !(200..300).contains(&raw.status) {
    error!("Request failed with status: {}", raw.status);
    return Err(Error::Status { status: raw.status, body: raw.body });
  }

  check_api_error(raw.status, &raw.body)?;

  match serde_json::from_str::<T>(&raw.body) {
    Ok(data) => Ok(ApiResponse { status: raw.status, headers: raw.headers, data }),
    Err(e) => {
      error!("Failed to parse JSON response: {}", e);
      Err(Error::Parse(format!("Failed to parse response: {}. Response: {}", e, preview(&raw.body))))
    }
  }
}

/// Detect the `{"success": false, ...}` envelope the service returns with a
/// 200 status.
fn check_api_error(status: u16, body: &str) -> Result<()> {
  let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
    // Not JSON at all; let the typed decode report it.
    return Ok(());
  };

  if value.get("success").and_then(|s| s.as_bool()) != Some(false) {
    return Ok(());
  }

  match serde_json::from_value::<ErrorEnvelope>(value) {
    Ok(envelope) => Err(Error::Api {
      status_code: envelope.error.status_code,
      message: envelope.error.message,
    }),
    Err(_) => Err(Error::Api {
      status_code: status,
      message: format!("Request unsuccessful: {}", preview(body)),
    }),
  }
}

fn preview(body: &str) -> &str {
  match body.char_indices().nth(200) {
    Some((idx, _)) => &body[..idx],
    None => body,
  }
}
