//! The polymorphic literary-work entity.
//!
//! A [`Writing`]'s body is keyed by its category: a novel is an ordered
//! sequence of episodes, anything else is a single text blob. The shape is
//! reconciled exactly once per save, in [`Writing::reconcile_body`].

use serde::{Deserialize, Serialize};

use crate::{
  feedback::{Comment, Rating},
  record::Record,
};

// ─── Category and genre ──────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WritingCategory {
  Novel,
  #[default]
  ShortStory,
  Poetry,
  Article,
}

impl WritingCategory {
  pub fn is_novel(self) -> bool { matches!(self, Self::Novel) }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WritingGenre {
  Fantasy,
  ScienceFiction,
  Mystery,
  Romance,
  Thriller,
  NonFiction,
  #[default]
  Literary,
}

// ─── Episode ─────────────────────────────────────────────────────────────────

/// One instalment of a novel.
///
/// `episode_number` is a position *label*, assigned at creation and never
/// renumbered after removals — sparse numbering is intentional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
  pub id:             String,
  pub episode_number: u32,
  pub title:          String,
  pub content:        String,
}

// ─── Body ────────────────────────────────────────────────────────────────────

/// The polymorphic body of a writing: a flat text blob or an ordered
/// episode list. Untagged so the wire stays "string or array", matching the
/// stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
  Text(String),
  Episodes(Vec<Episode>),
}

impl Default for Body {
  fn default() -> Self { Self::Text(String::new()) }
}

impl Body {
  /// The empty value for the representation `category` requires.
  pub fn empty_for(category: WritingCategory) -> Self {
    if category.is_novel() {
      Self::Episodes(Vec::new())
    } else {
      Self::Text(String::new())
    }
  }

  /// Does this body have the shape `category` requires?
  pub fn matches(&self, category: WritingCategory) -> bool {
    matches!(self, Self::Episodes(_)) == category.is_novel()
  }

  pub fn as_episodes(&self) -> Option<&[Episode]> {
    match self {
      Self::Episodes(episodes) => Some(episodes),
      Self::Text(_) => None,
    }
  }

  pub fn episodes_mut(&mut self) -> Option<&mut Vec<Episode>> {
    match self {
      Self::Episodes(episodes) => Some(episodes),
      Self::Text(_) => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(text) => Some(text),
      Self::Episodes(_) => None,
    }
  }
}

// ─── Writing ─────────────────────────────────────────────────────────────────

/// A literary work. Owns its comments and ratings exclusively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Writing {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:                    Option<String>,
  pub title:                 String,
  pub category:              WritingCategory,
  pub genre:                 WritingGenre,
  pub cover_image:           String,
  pub summary:               String,
  #[serde(default)]
  pub content:               Body,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub youtube_audiobook_url: Option<String>,
  #[serde(default)]
  pub comments:              Vec<Comment>,
  #[serde(default)]
  pub ratings:               Vec<Rating>,
}

impl Writing {
  /// Migrate the body to the representation the current category requires.
  ///
  /// Switching category clears to the other representation's empty value;
  /// there is no content conversion. A body already in the right shape is
  /// left untouched.
  pub fn reconcile_body(&mut self) {
    if !self.content.matches(self.category) {
      self.content = Body::empty_for(self.category);
    }
  }
}

impl Record for Writing {
  const COLLECTION: &'static str = "writings";
  const ID_PREFIX: &'static str = "writ";

  fn id(&self) -> Option<&str> { self.id.as_deref() }

  fn set_id(&mut self, id: String) { self.id = Some(id); }

  fn normalize(&mut self) { self.reconcile_body(); }
}
