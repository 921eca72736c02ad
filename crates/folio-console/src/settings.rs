//! [`SettingsStore`] — the settings singleton behind the Site Settings tab.
//!
//! Edits accumulate on a draft; the shared (published) value changes only
//! when a commit round-trips the gateway successfully, so a failed commit
//! can never desync the published value from what was actually persisted.

use folio_core::{
  Error, Result,
  gateway::Gateway,
  settings::{AdminSettings, SettingsPatch},
};

#[derive(Debug)]
pub struct SettingsStore<G> {
  gateway:   G,
  published: AdminSettings,
  draft:     AdminSettings,
}

impl<G: Gateway> SettingsStore<G> {
  /// Fetch the persisted settings and open a matching draft.
  pub async fn load(gateway: G) -> Result<Self> {
    let published =
      gateway.get_settings().await.map_err(Error::transport)?;
    let draft = published.clone();
    Ok(Self { gateway, published, draft })
  }

  /// Start from a known value without a gateway round-trip.
  pub fn with_settings(gateway: G, settings: AdminSettings) -> Self {
    Self {
      gateway,
      draft: settings.clone(),
      published: settings,
    }
  }

  /// The value the rest of the site reads.
  pub fn published(&self) -> &AdminSettings { &self.published }

  /// The in-progress edit, as the settings form sees it.
  pub fn draft(&self) -> &AdminSettings { &self.draft }

  /// Apply one edit to the draft. Only the named field changes.
  pub fn patch(&mut self, patch: SettingsPatch) {
    patch.apply(&mut self.draft);
  }

  /// Persist the whole draft, then republish it as the shared value.
  /// On failure the published value stays as it was and the draft keeps
  /// the operator's edits for a retry.
  pub async fn commit(&mut self) -> Result<()> {
    self
      .gateway
      .save_settings(&self.draft)
      .await
      .map_err(Error::transport)?;
    self.published = self.draft.clone();
    tracing::info!("settings committed");
    Ok(())
  }

  /// Drop unsaved edits, returning the draft to the published value.
  pub fn discard(&mut self) {
    self.draft = self.published.clone();
  }
}
