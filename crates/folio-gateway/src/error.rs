//! Error type shared by the gateway backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
  #[error("http request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{method} {path} returned {status}")]
  Status {
    method: &'static str,
    path:   String,
    status: reqwest::StatusCode,
  },

  #[error("no {collection} row with id {id}")]
  MissingRow {
    collection: &'static str,
    id:         String,
  },

  /// Single-shot failure armed by [`MemoryGateway::fail_next`](crate::MemoryGateway::fail_next).
  #[error("injected gateway failure")]
  Injected,

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("configuration error: {0}")]
  Config(#[from] ::config::ConfigError),
}
