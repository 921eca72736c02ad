//! The admin-console core: authoritative in-memory collections and the
//! mutation machinery behind the single-operator site console.
//!
//! The composing layer (page shell, routing, rendering — all out of scope
//! here) injects a [`Gateway`](folio_core::gateway::Gateway) backend and
//! drives these service objects:
//!
//! - [`ContentStore`] — the five content collections plus the message
//!   inbox, with generic upsert/remove that round-trips the gateway
//!   strictly before mutating local state.
//! - [`SettingsStore`] — the nested settings singleton, edited as a draft
//!   and republished only after a successful commit.
//! - [`episodes`] — the sub-editor for novel bodies.
//! - [`feedback`] — visitor comments/ratings and the message inbox.
//! - [`AuthGate`] — shared-secret session and password rotation.
//! - [`Form`] — the per-form submission state machine that excludes
//!   double submits.

pub mod auth;
pub mod content;
pub mod episodes;
pub mod feedback;
pub mod form;
pub mod settings;


pub use auth::{AuthGate, AuthState};
pub use content::{Collection, ContentStore};
pub use form::{Form, FormState};
pub use settings::SettingsStore;
