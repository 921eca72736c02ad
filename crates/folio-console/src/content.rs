//! [`ContentStore`] — the authoritative in-memory collections and their
//! generic mutation API.
//!
//! Every mutation calls the persistence gateway first and touches local
//! state only after the call resolves. A rejected call therefore leaves the
//! collections exactly as they were — there is no rollback because there is
//! never a partial write.

use folio_core::{
  Error, Result,
  content::{Certificate, Education, Project, WorkExperience},
  feedback::Message,
  gateway::Gateway,
  id,
  record::Record,
  writing::Writing,
};

// ─── Collection access ───────────────────────────────────────────────────────

/// Typed access to one of the store's parallel collections.
pub trait Collection<T: Record> {
  fn items(&self) -> &[T];
  fn items_mut(&mut self) -> &mut Vec<T>;
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The console's authoritative state: five content collections plus the
/// contact-message inbox, all loaded up front and mutated only through the
/// methods below.
#[derive(Debug)]
pub struct ContentStore<G> {
  gateway:         G,
  projects:        Vec<Project>,
  writings:        Vec<Writing>,
  work_experience: Vec<WorkExperience>,
  education:       Vec<Education>,
  certificates:    Vec<Certificate>,
  messages:        Vec<Message>,
}

impl<G: Gateway> ContentStore<G> {
  /// An empty store. Collections fill on [`load`](Self::load) or as items
  /// are saved.
  pub fn new(gateway: G) -> Self {
    Self {
      gateway,
      projects: Vec::new(),
      writings: Vec::new(),
      work_experience: Vec::new(),
      education: Vec::new(),
      certificates: Vec::new(),
      messages: Vec::new(),
    }
  }

  /// Fetch every collection from the gateway.
  pub async fn load(gateway: G) -> Result<Self> {
    let projects = gateway.list().await.map_err(Error::transport)?;
    let writings = gateway.list().await.map_err(Error::transport)?;
    let work_experience = gateway.list().await.map_err(Error::transport)?;
    let education = gateway.list().await.map_err(Error::transport)?;
    let certificates = gateway.list().await.map_err(Error::transport)?;
    let messages = gateway.list().await.map_err(Error::transport)?;
    Ok(Self {
      gateway,
      projects,
      writings,
      work_experience,
      education,
      certificates,
      messages,
    })
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn projects(&self) -> &[Project] { &self.projects }

  pub fn writings(&self) -> &[Writing] { &self.writings }

  pub fn work_experience(&self) -> &[WorkExperience] {
    &self.work_experience
  }

  pub fn education(&self) -> &[Education] { &self.education }

  pub fn certificates(&self) -> &[Certificate] { &self.certificates }

  pub fn messages(&self) -> &[Message] { &self.messages }

  pub fn find<T: Record>(&self, id: &str) -> Option<&T>
  where
    Self: Collection<T>,
  {
    self.items().iter().find(|item| item.id() == Some(id))
  }

  pub fn unread_message_count(&self) -> usize {
    self.messages.iter().filter(|m| !m.read).count()
  }

  /// Inbox ordering: newest first.
  pub fn messages_newest_first(&self) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = self.messages.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
  }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Save a draft or an edited item.
  ///
  /// With an id set, the matching element is replaced in place; a stale id
  /// fails with [`Error::NotFound`] before any gateway call and never
  /// silently inserts. Without an id, a fresh `<prefix>_<timestamp>` id is
  /// synthesised and the item is appended after the create call resolves,
  /// preserving insertion order.
  pub async fn upsert<T: Record>(&mut self, mut item: T) -> Result<T>
  where
    Self: Collection<T>,
  {
    item.normalize();
    match item.id().map(str::to_owned) {
      Some(id) => {
        let index = self
          .items()
          .iter()
          .position(|existing| existing.id() == Some(id.as_str()))
          .ok_or_else(|| Error::NotFound {
            collection: T::COLLECTION,
            id:         id.clone(),
          })?;
        let saved = self
          .gateway
          .update(&id, &item)
          .await
          .map_err(Error::transport)?;
        self.items_mut()[index] = saved.clone();
        tracing::info!(collection = T::COLLECTION, %id, "replaced entry");
        Ok(saved)
      }
      None => {
        let fresh =
          id::synthesize(T::ID_PREFIX, self.items().iter().filter_map(T::id));
        item.set_id(fresh.clone());
        let saved =
          self.gateway.create(&item).await.map_err(Error::transport)?;
        self.items_mut().push(saved.clone());
        tracing::info!(collection = T::COLLECTION, id = %fresh, "appended entry");
        Ok(saved)
      }
    }
  }

  /// Delete by id. Nested comments and ratings go with the item. An absent
  /// id is a no-op — locally and remotely.
  pub async fn remove<T: Record>(&mut self, id: &str) -> Result<()>
  where
    Self: Collection<T>,
  {
    let Some(index) = self
      .items()
      .iter()
      .position(|existing| existing.id() == Some(id))
    else {
      return Ok(());
    };
    self
      .gateway
      .delete::<T>(id)
      .await
      .map_err(Error::transport)?;
    self.items_mut().remove(index);
    tracing::info!(collection = T::COLLECTION, %id, "removed entry");
    Ok(())
  }

  /// Owner-scoped update: mutate exactly one element by id, persist it,
  /// and leave every sibling untouched. The feedback paths attach
  /// comments/ratings through this rather than the generic upsert.
  pub async fn amend<T: Record>(
    &mut self,
    id: &str,
    mutate: impl FnOnce(&mut T),
  ) -> Result<T>
  where
    Self: Collection<T>,
  {
    let index = self
      .items()
      .iter()
      .position(|existing| existing.id() == Some(id))
      .ok_or_else(|| Error::NotFound {
        collection: T::COLLECTION,
        id:         id.to_owned(),
      })?;
    let mut item = self.items()[index].clone();
    mutate(&mut item);
    let saved = self
      .gateway
      .update(id, &item)
      .await
      .map_err(Error::transport)?;
    self.items_mut()[index] = saved.clone();
    Ok(saved)
  }
}

// ─── Per-collection access impls ─────────────────────────────────────────────

impl<G: Gateway> Collection<Project> for ContentStore<G> {
  fn items(&self) -> &[Project] { &self.projects }

  fn items_mut(&mut self) -> &mut Vec<Project> { &mut self.projects }
}

impl<G: Gateway> Collection<Writing> for ContentStore<G> {
  fn items(&self) -> &[Writing] { &self.writings }

  fn items_mut(&mut self) -> &mut Vec<Writing> { &mut self.writings }
}

impl<G: Gateway> Collection<WorkExperience> for ContentStore<G> {
  fn items(&self) -> &[WorkExperience] { &self.work_experience }

  fn items_mut(&mut self) -> &mut Vec<WorkExperience> {
    &mut self.work_experience
  }
}

impl<G: Gateway> Collection<Education> for ContentStore<G> {
  fn items(&self) -> &[Education] { &self.education }

  fn items_mut(&mut self) -> &mut Vec<Education> { &mut self.education }
}

impl<G: Gateway> Collection<Certificate> for ContentStore<G> {
  fn items(&self) -> &[Certificate] { &self.certificates }

  fn items_mut(&mut self) -> &mut Vec<Certificate> { &mut self.certificates }
}

impl<G: Gateway> Collection<Message> for ContentStore<G> {
  fn items(&self) -> &[Message] { &self.messages }

  fn items_mut(&mut self) -> &mut Vec<Message> { &mut self.messages }
}
