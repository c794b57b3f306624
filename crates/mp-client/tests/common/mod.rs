//! Shared setup for wiremock-backed client tests

#![allow(dead_code)]

use mp_client::{Config, MetalpriceClient};
use wiremock::{MockServer, Request};

/// Path prefix the mock server uses for the primary region
pub const PRIMARY: &str = "/v1";

/// Path prefix the mock server uses for the alternate region
pub const ALTERNATE: &str = "/eu/v1";

pub async fn setup() -> (MockServer, MetalpriceClient) {
  let server = MockServer::start().await;
  let config = Config::default_with_key("test_key".to_string()).with_base_urls(
    format!("{}{}", server.uri(), PRIMARY),
    format!("{}{}", server.uri(), ALTERNATE),
  );
  let client = MetalpriceClient::from_config(config).expect("Failed to create client");
  (server, client)
}

/// Decoded query pairs of a received request, in wire order
pub fn query_of(request: &Request) -> Vec<(String, String)> {
  request.url.query_pairs().into_owned().collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
  expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

pub async fn only_request(server: &MockServer) -> Request {
  let mut requests = server.received_requests().await.expect("request recording enabled");
  assert_eq!(requests.len(), 1, "expected exactly one request");
  requests.remove(0)
}
