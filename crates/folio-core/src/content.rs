//! Content entities with a flat body: projects, employment history,
//! education, certificates.
//!
//! Field names serialise in camelCase to match the site's JSON documents.

use serde::{Deserialize, Serialize};

use crate::{
  feedback::{Comment, Rating},
  record::Record,
};

// ─── Project ─────────────────────────────────────────────────────────────────

/// An engineering project. Owns its comments and ratings exclusively;
/// deleting the project discards them with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:             Option<String>,
  pub title:          String,
  pub description:    String,
  #[serde(default)]
  pub images:         Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub demo_video_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pdf_url:        Option<String>,
  #[serde(default)]
  pub comments:       Vec<Comment>,
  #[serde(default)]
  pub ratings:        Vec<Rating>,
}

impl Record for Project {
  const COLLECTION: &'static str = "projects";
  const ID_PREFIX: &'static str = "proj";

  fn id(&self) -> Option<&str> { self.id.as_deref() }

  fn set_id(&mut self, id: String) { self.id = Some(id); }
}

// ─── Work experience ─────────────────────────────────────────────────────────

/// One employment entry. `description` is an ordered sequence of bullet
/// lines; the edit form captures it as line-delimited text and converts on
/// save via [`WorkExperience::description_from_text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:          Option<String>,
  pub role:        String,
  pub company:     String,
  pub period:      String,
  #[serde(default)]
  pub description: Vec<String>,
}

impl WorkExperience {
  /// Split line-delimited form text into the stored ordered sequence.
  /// Interior blank lines survive; a trailing newline does not produce a
  /// trailing empty bullet.
  pub fn description_from_text(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
  }
}

impl Record for WorkExperience {
  const COLLECTION: &'static str = "work_experience";
  const ID_PREFIX: &'static str = "work";

  fn id(&self) -> Option<&str> { self.id.as_deref() }

  fn set_id(&mut self, id: String) { self.id = Some(id); }
}

// ─── Education ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:          Option<String>,
  pub degree:      String,
  pub institution: String,
  pub period:      String,
  pub details:     String,
}

impl Record for Education {
  const COLLECTION: &'static str = "education";
  const ID_PREFIX: &'static str = "edu";

  fn id(&self) -> Option<&str> { self.id.as_deref() }

  fn set_id(&mut self, id: String) { self.id = Some(id); }
}

// ─── Certificate ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:             Option<String>,
  pub name:           String,
  pub issuer:         String,
  pub date:           String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credential_url: Option<String>,
}

impl Record for Certificate {
  const COLLECTION: &'static str = "certificates";
  const ID_PREFIX: &'static str = "cert";

  fn id(&self) -> Option<&str> { self.id.as_deref() }

  fn set_id(&mut self, id: String) { self.id = Some(id); }
}
