//! The per-form submission state machine.
//!
//! Each edit form owns one [`Form`] value. While a submission is in
//! flight the form is [`FormState::Submitting`] and a second submission is
//! structurally refused, so repeated triggers cannot produce duplicate
//! inserts. A failed submission keeps the draft (and the operator's input)
//! and records the error; only success clears the draft.

use folio_core::{
  Error, Result, gateway::Gateway, record::Record,
};

use crate::content::{Collection, ContentStore};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
  /// Nothing in flight; the draft (if any) is editable.
  #[default]
  Idle,
  /// One submission is in flight; further submissions are refused.
  Submitting,
  /// The last submission failed; the draft is intact for a retry.
  Error(String),
  /// The last submission succeeded and the draft was cleared.
  Success,
}

/// An edit form: an optional draft plus the submission state.
#[derive(Debug, Default)]
pub struct Form<T> {
  draft: Option<T>,
  state: FormState,
}

impl<T: Clone> Form<T> {
  pub fn new() -> Self {
    Self { draft: None, state: FormState::Idle }
  }

  /// Open the form on a draft — a fresh empty one for "add new", or a
  /// clone of an existing item for "edit".
  pub fn open(&mut self, draft: T) {
    self.draft = Some(draft);
    self.state = FormState::Idle;
  }

  /// Cancel: drop the draft without submitting.
  pub fn close(&mut self) {
    self.draft = None;
    self.state = FormState::Idle;
  }

  pub fn draft(&self) -> Option<&T> { self.draft.as_ref() }

  /// Mutable access for field edits while idle or after a failure.
  pub fn draft_mut(&mut self) -> Option<&mut T> {
    match self.state {
      FormState::Submitting => None,
      _ => self.draft.as_mut(),
    }
  }

  pub fn state(&self) -> &FormState { &self.state }

  pub fn is_submitting(&self) -> bool {
    self.state == FormState::Submitting
  }

  /// Enter `Submitting` and hand back a copy of the draft to submit.
  ///
  /// Refused while a submission is already in flight, and meaningless
  /// without a draft.
  pub fn begin(&mut self) -> Result<T> {
    if self.is_submitting() {
      return Err(Error::SubmissionInFlight);
    }
    let Some(draft) = self.draft.clone() else {
      return Err(Error::validation("no draft open"));
    };
    self.state = FormState::Submitting;
    Ok(draft)
  }

  /// The in-flight submission was applied; clear the draft.
  pub fn succeed(&mut self) {
    self.draft = None;
    self.state = FormState::Success;
  }

  /// The in-flight submission was rejected; keep the draft and surface
  /// the error.
  pub fn fail(&mut self, error: &Error) {
    self.state = FormState::Error(error.to_string());
  }
}

/// Drive one save through the form state machine: gateway round-trip via
/// [`ContentStore::upsert`], draft cleared only on success.
pub async fn submit_draft<T, G>(
  form: &mut Form<T>,
  store: &mut ContentStore<G>,
) -> Result<T>
where
  T: Record,
  G: Gateway,
  ContentStore<G>: Collection<T>,
{
  let draft = form.begin()?;
  match store.upsert(draft).await {
    Ok(saved) => {
      form.succeed();
      Ok(saved)
    }
    Err(error) => {
      form.fail(&error);
      Err(error)
    }
  }
}
