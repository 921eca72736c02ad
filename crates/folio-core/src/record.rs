//! The [`Record`] trait — what every stored collection element provides.
//!
//! The console's generic upsert/remove machinery and the gateway's generic
//! collection endpoints are both keyed off this trait.

use serde::{Serialize, de::DeserializeOwned};

/// A member of one of the parallel content collections.
///
/// A record starts life as an id-less draft and receives its durable
/// `<prefix>_<timestamp>` id at first successful save.
pub trait Record:
  Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// Wire/collection name, e.g. `"projects"`. Doubles as the gateway path
  /// segment.
  const COLLECTION: &'static str;

  /// Id prefix, e.g. `"proj"`.
  const ID_PREFIX: &'static str;

  /// `None` while the record is an unsaved draft.
  fn id(&self) -> Option<&str>;

  /// Assign the durable id. Called exactly once, at first successful save.
  fn set_id(&mut self, id: String);

  /// Save hook, applied before the record is handed to the gateway.
  /// The default does nothing; [`Writing`](crate::writing::Writing)
  /// reconciles its polymorphic body here so a stale representation is
  /// never persisted.
  fn normalize(&mut self) {}
}
