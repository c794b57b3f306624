use thiserror::Error;

/// The main error type for mp-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or empty API key
  #[error("Invalid API key: {0}")]
  ApiKey(String),

  /// Invalid URL, either configured or assembled
  #[error("URL error: {0}")]
  Url(#[from] url::ParseError),

  /// HTTP transport error (connection, DNS, timeout)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success HTTP status; `body` carries whatever the service returned
  #[error("HTTP status {status}: {body}")]
  Status { status: u16, body: String },

  /// Error envelope returned by MetalpriceAPI (`"success": false`)
  #[error("API error {status_code}: {message}")]
  Api { status_code: u16, message: String },

  /// Response body could not be decoded into the expected schema
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// HTTP or API status code attached to this error, if any
  pub fn status_code(&self) -> Option<u16> {
    match self {
      Error::Status { status, .. } => Some(*status),
      Error::Api { status_code, .. } => Some(*status_code),
      _ => None,
    }
  }
}

/// Result type alias for mp-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_code() {
    let err = Error::Status { status: 500, body: "boom".to_string() };
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.to_string(), "HTTP status 500: boom");

    let err = Error::Api { status_code: 101, message: "invalid key".to_string() };
    assert_eq!(err.status_code(), Some(101));

    assert_eq!(Error::Http("timeout".to_string()).status_code(), None);
  }
}
