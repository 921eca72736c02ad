//! Episode sub-editor for a novel draft.
//!
//! All three operations act on a draft [`Writing`] the caller owns — the
//! edits are invisible elsewhere until the draft is saved through
//! [`ContentStore::upsert`](crate::ContentStore::upsert). They require the
//! body to already be in episode shape; switching the category is the only
//! thing that converts the representation.

use folio_core::{
  Error, Result, id,
  writing::{Episode, Writing},
};

/// The two editable fields of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeField {
  Title,
  Content,
}

fn episodes_of(draft: &mut Writing) -> Result<&mut Vec<Episode>> {
  draft
    .content
    .episodes_mut()
    .ok_or_else(|| Error::validation("episodes are only available for novels"))
}

/// Append a new, empty episode numbered `current count + 1`.
///
/// The number is a label fixed at creation; it is not an index.
pub fn add_episode(draft: &mut Writing) -> Result<()> {
  let episodes = episodes_of(draft)?;
  let episode_number = episodes.len() as u32 + 1;
  let id = id::synthesize("ep", episodes.iter().map(|e| e.id.as_str()));
  episodes.push(Episode {
    id,
    episode_number,
    title: String::new(),
    content: String::new(),
  });
  Ok(())
}

/// Remove whatever occupies `index`. The surviving episodes keep their
/// `episode_number` labels — sparse numbering after a removal is
/// intentional. An out-of-range index is a no-op.
pub fn remove_episode(draft: &mut Writing, index: usize) -> Result<()> {
  let episodes = episodes_of(draft)?;
  if index < episodes.len() {
    episodes.remove(index);
  }
  Ok(())
}

/// Replace one field of the episode at `index`.
pub fn update_episode_field(
  draft: &mut Writing,
  index: usize,
  field: EpisodeField,
  value: impl Into<String>,
) -> Result<()> {
  let episodes = episodes_of(draft)?;
  let episode = episodes.get_mut(index).ok_or_else(|| {
    Error::validation(format!("no episode at position {index}"))
  })?;
  match field {
    EpisodeField::Title => episode.title = value.into(),
    EpisodeField::Content => episode.content = value.into(),
  }
  Ok(())
}
