//! Connection settings for [`HttpGateway`](crate::HttpGateway).

use std::path::Path;

use serde::Deserialize;

use crate::error::GatewayError;

/// Where the remote data store lives and how to authenticate against it.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
  /// Base URL of the data store's REST surface, without a trailing slash.
  pub base_url: String,
  /// Bearer key sent with every request, if the store requires one.
  #[serde(default)]
  pub api_key:  Option<String>,
}

impl GatewayConfig {
  /// Load from a TOML file (optional) layered under `FOLIO_*` environment
  /// variables.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.as_ref()).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()?;
    Ok(settings.try_deserialize()?)
  }
}
