//! [`DataUrlUploader`] — file-to-embeddable-string conversion.
//!
//! The photo upload flows hand the resulting string to a settings patch or
//! an episode/cover field. The whole file is read before encoding, so a
//! failed read surfaces as an error and a truncated value can never reach
//! a patch.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use folio_core::gateway::Uploader;

use crate::error::GatewayError;

#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlUploader;

/// Media type by file extension; unknown extensions fall back to a generic
/// byte stream.
fn media_type(path: &Path) -> &'static str {
  let ext = path
    .extension()
    .and_then(|e| e.to_str())
    .map(str::to_ascii_lowercase);
  match ext.as_deref() {
    Some("png") => "image/png",
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("gif") => "image/gif",
    Some("webp") => "image/webp",
    Some("svg") => "image/svg+xml",
    Some("pdf") => "application/pdf",
    _ => "application/octet-stream",
  }
}

impl Uploader for DataUrlUploader {
  type Error = GatewayError;

  async fn store(&self, path: &Path) -> Result<String, GatewayError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(format!("data:{};base64,{}", media_type(path), B64.encode(&bytes)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn encodes_the_complete_file() {
    let path = std::env::temp_dir().join("folio_upload_test.png");
    let payload = vec![0u8; 4096];
    tokio::fs::write(&path, &payload).await.unwrap();

    let data_url = DataUrlUploader.store(&path).await.unwrap();
    tokio::fs::remove_file(&path).await.ok();

    let encoded = data_url
      .strip_prefix("data:image/png;base64,")
      .expect("data url prefix");
    assert_eq!(B64.decode(encoded).unwrap(), payload);
  }

  #[tokio::test]
  async fn missing_file_is_an_error_not_an_empty_value() {
    let path = std::env::temp_dir().join("folio_upload_missing.png");
    let err = DataUrlUploader.store(&path).await.unwrap_err();
    assert!(matches!(err, GatewayError::Io(_)));
  }
}
