//! Visitor feedback paths: comment and rating submission, and the
//! contact-message inbox.
//!
//! Comments and ratings never travel through the generic upsert; they are
//! attached to their owning content item with the owner-scoped
//! [`ContentStore::amend`], which leaves every sibling untouched.

use chrono::Utc;
use folio_core::{
  Error, Result,
  content::Project,
  feedback::{Comment, Message, NewComment, Rating},
  gateway::Gateway,
  id,
  record::Record,
  settings::AdminSettings,
  writing::Writing,
};

use crate::content::{Collection, ContentStore};

/// Anything a visitor can comment on or rate.
trait Commentable: Record {
  fn comments(&self) -> &[Comment];
  fn comments_mut(&mut self) -> &mut Vec<Comment>;
  fn ratings_mut(&mut self) -> &mut Vec<Rating>;
}

impl Commentable for Project {
  fn comments(&self) -> &[Comment] { &self.comments }

  fn comments_mut(&mut self) -> &mut Vec<Comment> { &mut self.comments }

  fn ratings_mut(&mut self) -> &mut Vec<Rating> { &mut self.ratings }
}

impl Commentable for Writing {
  fn comments(&self) -> &[Comment] { &self.comments }

  fn comments_mut(&mut self) -> &mut Vec<Comment> { &mut self.comments }

  fn ratings_mut(&mut self) -> &mut Vec<Rating> { &mut self.ratings }
}

async fn attach_comment<T, G>(
  store: &mut ContentStore<G>,
  owner_id: &str,
  submission: &NewComment,
) -> Result<Comment>
where
  T: Commentable,
  G: Gateway,
  ContentStore<G>: Collection<T>,
{
  let owner: &T =
    store.find(owner_id).ok_or_else(|| Error::NotFound {
      collection: T::COLLECTION,
      id:         owner_id.to_owned(),
    })?;
  let comment = Comment {
    id:        id::synthesize("c", owner.comments().iter().map(|c| c.id.as_str())),
    author:    submission.author.clone(),
    body:      submission.body.clone(),
    timestamp: Utc::now(),
  };
  let attached = comment.clone();
  store
    .amend::<T>(owner_id, move |owner| owner.comments_mut().push(comment))
    .await?;
  Ok(attached)
}

/// Append one comment to the item whose id equals `owner_id`.
///
/// Permitted only while comments are enabled in the site settings. The
/// fresh id and timestamp are assigned here, never by the caller.
pub async fn submit_comment<G: Gateway>(
  store: &mut ContentStore<G>,
  settings: &AdminSettings,
  owner_id: &str,
  submission: NewComment,
) -> Result<Comment> {
  if !settings.comments_enabled {
    return Err(Error::Disabled("comments"));
  }
  if store.find::<Project>(owner_id).is_some() {
    attach_comment::<Project, G>(store, owner_id, &submission).await
  } else if store.find::<Writing>(owner_id).is_some() {
    attach_comment::<Writing, G>(store, owner_id, &submission).await
  } else {
    Err(Error::NotFound { collection: "content", id: owner_id.to_owned() })
  }
}

async fn attach_rating<T, G>(
  store: &mut ContentStore<G>,
  owner_id: &str,
  rating: Rating,
) -> Result<()>
where
  T: Commentable,
  G: Gateway,
  ContentStore<G>: Collection<T>,
{
  store
    .amend::<T>(owner_id, move |owner| owner.ratings_mut().push(rating))
    .await?;
  Ok(())
}

/// Append one rating to the item whose id equals `owner_id`.
///
/// Repeated ratings from the same voter are independent entries; averaging
/// is a display concern and happens elsewhere.
pub async fn submit_rating<G: Gateway>(
  store: &mut ContentStore<G>,
  settings: &AdminSettings,
  owner_id: &str,
  rating: Rating,
) -> Result<()> {
  if !settings.ratings_enabled {
    return Err(Error::Disabled("ratings"));
  }
  if !(1..=5).contains(&rating.value) {
    return Err(Error::validation("rating must be between 1 and 5 stars"));
  }
  if store.find::<Project>(owner_id).is_some() {
    attach_rating::<Project, G>(store, owner_id, rating).await
  } else if store.find::<Writing>(owner_id).is_some() {
    attach_rating::<Writing, G>(store, owner_id, rating).await
  } else {
    Err(Error::NotFound { collection: "content", id: owner_id.to_owned() })
  }
}

/// Mark one inbox message read. Already-read messages are persisted as-is.
pub async fn mark_message_read<G: Gateway>(
  store: &mut ContentStore<G>,
  id: &str,
) -> Result<Message> {
  store.amend::<Message>(id, |message| message.read = true).await
}

/// Delete one inbox message. Absent ids are a no-op, matching the generic
/// remove semantics.
pub async fn delete_message<G: Gateway>(
  store: &mut ContentStore<G>,
  id: &str,
) -> Result<()> {
  store.remove::<Message>(id).await
}
