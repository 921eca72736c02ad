//! [`MemoryGateway`] — an in-process data store, useful for testing.
//!
//! Rows are kept as JSON documents per collection, so the backend stays
//! agnostic of the entity types the way the remote store is. A single-shot
//! failure can be armed with [`MemoryGateway::fail_next`] to exercise the
//! rule that a rejected call leaves local state untouched.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard},
};

use folio_core::{gateway::Gateway, record::Record, settings::AdminSettings};
use serde_json::Value;

use crate::error::GatewayError;

#[derive(Debug, Default)]
struct Inner {
  rows:      HashMap<&'static str, Vec<Value>>,
  settings:  AdminSettings,
  fail_next: bool,
}

/// Cloning is cheap — the inner state is reference-counted and shared.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
  inner: Arc<Mutex<Inner>>,
}

impl MemoryGateway {
  pub fn new() -> Self { Self::default() }

  /// Arm exactly one injected failure; the next call rejects, later calls
  /// succeed again.
  pub fn fail_next(&self) {
    self.lock().fail_next = true;
  }

  /// Number of persisted rows in a collection — for test assertions.
  pub fn row_count(&self, collection: &str) -> usize {
    self
      .lock()
      .rows
      .get(collection)
      .map(Vec::len)
      .unwrap_or(0)
  }

  /// The settings document as last persisted.
  pub fn persisted_settings(&self) -> AdminSettings {
    self.lock().settings.clone()
  }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    // A poisoned lock only happens after a panic in another test thread.
    self.inner.lock().unwrap_or_else(|e| e.into_inner())
  }

  fn take_failure(inner: &mut Inner) -> Result<(), GatewayError> {
    if inner.fail_next {
      inner.fail_next = false;
      return Err(GatewayError::Injected);
    }
    Ok(())
  }
}

fn row_id(row: &Value) -> Option<&str> {
  row.get("id").and_then(Value::as_str)
}

impl Gateway for MemoryGateway {
  type Error = GatewayError;

  async fn list<T: Record>(&self) -> Result<Vec<T>, GatewayError> {
    let mut inner = self.lock();
    Self::take_failure(&mut inner)?;
    inner
      .rows
      .get(T::COLLECTION)
      .into_iter()
      .flatten()
      .map(|row| serde_json::from_value(row.clone()).map_err(Into::into))
      .collect()
  }

  async fn create<T: Record>(&self, item: &T) -> Result<T, GatewayError> {
    let mut inner = self.lock();
    Self::take_failure(&mut inner)?;
    let row = serde_json::to_value(item)?;
    inner.rows.entry(T::COLLECTION).or_default().push(row);
    Ok(item.clone())
  }

  async fn update<T: Record>(
    &self,
    id: &str,
    item: &T,
  ) -> Result<T, GatewayError> {
    let mut inner = self.lock();
    Self::take_failure(&mut inner)?;
    let rows = inner.rows.entry(T::COLLECTION).or_default();
    let slot = rows
      .iter_mut()
      .find(|row| row_id(row) == Some(id))
      .ok_or_else(|| GatewayError::MissingRow {
        collection: T::COLLECTION,
        id:         id.to_owned(),
      })?;
    *slot = serde_json::to_value(item)?;
    Ok(item.clone())
  }

  async fn delete<T: Record>(&self, id: &str) -> Result<(), GatewayError> {
    let mut inner = self.lock();
    Self::take_failure(&mut inner)?;
    if let Some(rows) = inner.rows.get_mut(T::COLLECTION) {
      rows.retain(|row| row_id(row) != Some(id));
    }
    Ok(())
  }

  async fn get_settings(&self) -> Result<AdminSettings, GatewayError> {
    let mut inner = self.lock();
    Self::take_failure(&mut inner)?;
    Ok(inner.settings.clone())
  }

  async fn save_settings(
    &self,
    settings: &AdminSettings,
  ) -> Result<(), GatewayError> {
    let mut inner = self.lock();
    Self::take_failure(&mut inner)?;
    inner.settings = settings.clone();
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use folio_core::{content::Project, record::Record as _};

  use super::*;

  fn project(id: &str, title: &str) -> Project {
    Project {
      id: Some(id.into()),
      title: title.into(),
      ..Project::default()
    }
  }

  #[tokio::test]
  async fn create_list_update_delete_round_trip() {
    let gw = MemoryGateway::new();

    gw.create(&project("proj_1", "one")).await.unwrap();
    gw.create(&project("proj_2", "two")).await.unwrap();
    assert_eq!(gw.row_count(Project::COLLECTION), 2);

    let listed: Vec<Project> = gw.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "one");

    gw.update("proj_1", &project("proj_1", "renamed")).await.unwrap();
    let listed: Vec<Project> = gw.list().await.unwrap();
    assert_eq!(listed[0].title, "renamed");

    gw.delete::<Project>("proj_1").await.unwrap();
    assert_eq!(gw.row_count(Project::COLLECTION), 1);
  }

  #[tokio::test]
  async fn update_of_missing_row_is_rejected() {
    let gw = MemoryGateway::new();
    let err = gw
      .update("proj_9", &project("proj_9", "ghost"))
      .await
      .unwrap_err();
    assert!(matches!(err, GatewayError::MissingRow { .. }));
  }

  #[tokio::test]
  async fn injected_failure_fires_exactly_once() {
    let gw = MemoryGateway::new();
    gw.fail_next();

    let err = gw.create(&project("proj_1", "one")).await.unwrap_err();
    assert!(matches!(err, GatewayError::Injected));
    assert_eq!(gw.row_count(Project::COLLECTION), 0);

    // The very next call goes through.
    gw.create(&project("proj_1", "one")).await.unwrap();
    assert_eq!(gw.row_count(Project::COLLECTION), 1);
  }

  #[tokio::test]
  async fn settings_round_trip() {
    let gw = MemoryGateway::new();
    let mut settings = AdminSettings::default();
    settings.about_me.name = "S. Author".into();

    gw.save_settings(&settings).await.unwrap();
    assert_eq!(gw.get_settings().await.unwrap(), settings);
  }
}
