//! Typed response paired with transport metadata

use std::collections::BTreeMap;

/// Decoded payload of a successful call plus what the transport saw
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
  /// HTTP status code
  pub status: u16,

  /// Response headers, names lowercase
  pub headers: BTreeMap<String, String>,

  pub data: T,
}

impl<T> ApiResponse<T> {
  /// Drop the metadata and keep the payload
  pub fn into_data(self) -> T {
    self.data
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }
}
