//! [`HttpGateway`] — the remote data store over JSON/HTTP.
//!
//! Endpoints: `GET`/`POST /{collection}`, `PUT`/`DELETE /{collection}/{id}`,
//! `GET`/`PUT /settings`.

use std::time::Duration;

use folio_core::{gateway::Gateway, record::Record, settings::AdminSettings};
use reqwest::{Client, RequestBuilder, Response};

use crate::{config::GatewayConfig, error::GatewayError};

/// HTTP client for the remote data store.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct HttpGateway {
  client: Client,
  config: GatewayConfig,
}

impl HttpGateway {
  pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  fn auth(&self, req: RequestBuilder) -> RequestBuilder {
    match &self.config.api_key {
      Some(key) => req.bearer_auth(key),
      None => req,
    }
  }

  async fn check(
    method: &'static str,
    path: String,
    resp: Response,
  ) -> Result<Response, GatewayError> {
    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(method, %path, %status, "gateway call rejected");
      return Err(GatewayError::Status { method, path, status });
    }
    Ok(resp)
  }
}

impl Gateway for HttpGateway {
  type Error = GatewayError;

  async fn list<T: Record>(&self) -> Result<Vec<T>, GatewayError> {
    let path = format!("/{}", T::COLLECTION);
    let resp = self
      .auth(self.client.get(self.url(&path)))
      .send()
      .await?;
    Ok(Self::check("GET", path, resp).await?.json().await?)
  }

  async fn create<T: Record>(&self, item: &T) -> Result<T, GatewayError> {
    let path = format!("/{}", T::COLLECTION);
    let resp = self
      .auth(self.client.post(self.url(&path)))
      .json(item)
      .send()
      .await?;
    Ok(Self::check("POST", path, resp).await?.json().await?)
  }

  async fn update<T: Record>(
    &self,
    id: &str,
    item: &T,
  ) -> Result<T, GatewayError> {
    let path = format!("/{}/{id}", T::COLLECTION);
    let resp = self
      .auth(self.client.put(self.url(&path)))
      .json(item)
      .send()
      .await?;
    Ok(Self::check("PUT", path, resp).await?.json().await?)
  }

  async fn delete<T: Record>(&self, id: &str) -> Result<(), GatewayError> {
    let path = format!("/{}/{id}", T::COLLECTION);
    let resp = self
      .auth(self.client.delete(self.url(&path)))
      .send()
      .await?;
    Self::check("DELETE", path, resp).await?;
    Ok(())
  }

  async fn get_settings(&self) -> Result<AdminSettings, GatewayError> {
    let resp = self
      .auth(self.client.get(self.url("/settings")))
      .send()
      .await?;
    Ok(
      Self::check("GET", "/settings".into(), resp)
        .await?
        .json()
        .await?,
    )
  }

  async fn save_settings(
    &self,
    settings: &AdminSettings,
  ) -> Result<(), GatewayError> {
    let resp = self
      .auth(self.client.put(self.url("/settings")))
      .json(settings)
      .send()
      .await?;
    Self::check("PUT", "/settings".into(), resp).await?;
    Ok(())
  }
}
