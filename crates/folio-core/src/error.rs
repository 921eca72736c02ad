//! Error types for `folio-core`.
//!
//! Nothing here is fatal: every failure is scoped to the single in-flight
//! form and recoverable by retrying (or correcting the input).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An upsert or delete named an id that is not in its collection.
  #[error("no {collection} entry with id {id}")]
  NotFound {
    collection: &'static str,
    id:         String,
  },

  /// Bad form input — reported inline, the form stays open.
  #[error("{0}")]
  Validation(String),

  /// Login rejected. Deliberately carries no detail about the mismatch.
  #[error("incorrect password")]
  IncorrectPassword,

  /// A visitor-facing feature is switched off in the site settings.
  #[error("{0} are disabled")]
  Disabled(&'static str),

  /// A second submission was attempted while one is already in flight.
  #[error("a submission is already in flight")]
  SubmissionInFlight,

  /// The persistence gateway rejected the call. The operation was not
  /// applied locally; collections are exactly as before the attempt.
  #[error("persistence call failed: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a collaborator rejection; all of them surface the same way.
  pub fn transport<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Transport(Box::new(err))
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
