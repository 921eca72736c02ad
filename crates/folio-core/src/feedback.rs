//! Visitor feedback: comments and ratings nested inside content items, and
//! contact-form messages.
//!
//! Comments and ratings are never a top-level collection — each lives inside
//! exactly one [`Project`](crate::content::Project) or
//! [`Writing`](crate::writing::Writing).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

// ─── Comment ─────────────────────────────────────────────────────────────────

/// A visitor comment attached to one content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id:        String,
  pub author:    String,
  pub body:      String,
  pub timestamp: DateTime<Utc>,
}

/// Input to a comment submission. The id and timestamp are assigned by the
/// aggregator; callers never supply them.
#[derive(Debug, Clone)]
pub struct NewComment {
  pub author: String,
  pub body:   String,
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// A star rating. Repeated ratings by one voter are independent entries —
/// deduplication and averaging are display concerns, out of scope here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
  pub value: u8,
  pub voter: String,
}

// ─── Message ─────────────────────────────────────────────────────────────────

/// A contact-form message. Created by the public site; the admin only marks
/// it read or deletes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:        Option<String>,
  pub name:      String,
  pub email:     String,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
  #[serde(default)]
  pub read:      bool,
}

impl Record for Message {
  const COLLECTION: &'static str = "messages";
  const ID_PREFIX: &'static str = "msg";

  fn id(&self) -> Option<&str> { self.id.as_deref() }

  fn set_id(&mut self, id: String) { self.id = Some(id); }
}
