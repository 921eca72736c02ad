//! The persistence and upload collaborator traits.
//!
//! These are implemented by external backends (see `folio-gateway`). The
//! console depends on the abstractions, not on any concrete backend, and
//! treats any rejection uniformly as a recoverable
//! [`Error::Transport`](crate::Error::Transport).

use std::{future::Future, path::Path};

use crate::{record::Record, settings::AdminSettings};

/// Abstraction over the remote data store.
///
/// One logical method set exists per collection; the collection is selected
/// by the [`Record::COLLECTION`] constant of `T`. `create` persists a
/// record that has just been given its durable id and echoes it back as
/// stored.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait Gateway: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn list<T: Record>(
    &self,
  ) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send;

  fn create<T: Record>(
    &self,
    item: &T,
  ) -> impl Future<Output = Result<T, Self::Error>> + Send;

  fn update<T: Record>(
    &self,
    id: &str,
    item: &T,
  ) -> impl Future<Output = Result<T, Self::Error>> + Send;

  fn delete<T: Record>(
    &self,
    id: &str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send;

  fn get_settings(
    &self,
  ) -> impl Future<Output = Result<AdminSettings, Self::Error>> + Send;

  fn save_settings(
    &self,
    settings: &AdminSettings,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Abstraction over file upload. `store` resolves to a URL or an
/// embeddable data string; it must resolve fully — a failed or partial
/// read yields an error, never a truncated value.
pub trait Uploader: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn store(
    &self,
    path: &Path,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
