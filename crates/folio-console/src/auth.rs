//! [`AuthGate`] — shared-secret session and password rotation.
//!
//! The secret is held as an argon2 PHC string; login verifies against the
//! hash and reports a bare incorrect-password condition either way, leaking
//! nothing about how close the attempt was.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use folio_core::{Error, Result};
use rand_core::OsRng;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
  #[default]
  LoggedOut,
  LoggedIn,
}

#[derive(Debug)]
pub struct AuthGate {
  state:       AuthState,
  /// Argon2 PHC string, e.g. `$argon2id$v=19$…`.
  secret_hash: String,
}

fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| Error::validation(format!("password hashing failed: {e}")))?
      .to_string(),
  )
}

fn verify(password: &str, hash: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(hash) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

impl AuthGate {
  /// Gate with an initial shared secret. Starts logged out.
  pub fn new(password: &str) -> Result<Self> {
    Ok(Self {
      state:       AuthState::LoggedOut,
      secret_hash: hash_password(password)?,
    })
  }

  /// Gate with a pre-computed PHC string (e.g. from deployment config).
  pub fn with_hash(secret_hash: String) -> Self {
    Self { state: AuthState::LoggedOut, secret_hash }
  }

  pub fn state(&self) -> AuthState { self.state }

  pub fn is_logged_in(&self) -> bool {
    self.state == AuthState::LoggedIn
  }

  /// Unlock the console iff `password` matches the current secret.
  /// A mismatch leaves the gate logged out.
  pub fn login(&mut self, password: &str) -> Result<()> {
    if !verify(password, &self.secret_hash) {
      tracing::warn!("login rejected");
      return Err(Error::IncorrectPassword);
    }
    self.state = AuthState::LoggedIn;
    tracing::info!("console unlocked");
    Ok(())
  }

  pub fn logout(&mut self) {
    self.state = AuthState::LoggedOut;
  }

  /// Rotate the shared secret. Valid only while logged in; the active
  /// session survives a successful rotation.
  ///
  /// Validation failures (in this order, mirroring the settings form):
  /// wrong current password, next too short, next/confirm mismatch. On any
  /// failure the stored secret is unchanged.
  pub fn change_password(
    &mut self,
    current: &str,
    next: &str,
    confirm: &str,
  ) -> Result<()> {
    if !self.is_logged_in() {
      return Err(Error::validation("not logged in"));
    }
    if !verify(current, &self.secret_hash) {
      return Err(Error::validation("Current password is not correct."));
    }
    if next.chars().count() < MIN_PASSWORD_LEN {
      return Err(Error::validation(
        "New password must be at least 6 characters long.",
      ));
    }
    if next != confirm {
      return Err(Error::validation("New passwords do not match."));
    }
    self.secret_hash = hash_password(next)?;
    tracing::info!("admin password rotated");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn login_with_correct_password() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    assert!(!gate.is_logged_in());
    gate.login("secret-1").unwrap();
    assert!(gate.is_logged_in());
  }

  #[test]
  fn login_with_wrong_password_stays_logged_out() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    let err = gate.login("wrong").unwrap_err();
    assert!(matches!(err, Error::IncorrectPassword));
    assert!(!gate.is_logged_in());
  }

  #[test]
  fn logout_locks_the_gate() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    gate.login("secret-1").unwrap();
    gate.logout();
    assert!(!gate.is_logged_in());
  }

  #[test]
  fn rotation_requires_a_session() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    let err = gate.change_password("secret-1", "longer-secret", "longer-secret");
    assert!(err.is_err());
    // The old secret still works.
    gate.login("secret-1").unwrap();
  }

  #[test]
  fn rotation_rejects_wrong_current_password() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    gate.login("secret-1").unwrap();
    let err = gate
      .change_password("nope", "longer-secret", "longer-secret")
      .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    gate.logout();
    gate.login("secret-1").unwrap();
  }

  #[test]
  fn rotation_rejects_short_or_mismatched_next() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    gate.login("secret-1").unwrap();

    assert!(gate.change_password("secret-1", "five5", "five5").is_err());
    assert!(
      gate
        .change_password("secret-1", "longer-secret", "different")
        .is_err()
    );

    // Neither failure touched the stored secret.
    gate.logout();
    gate.login("secret-1").unwrap();
  }

  #[test]
  fn successful_rotation_swaps_the_secret_and_keeps_the_session() {
    let mut gate = AuthGate::new("secret-1").unwrap();
    gate.login("secret-1").unwrap();
    gate
      .change_password("secret-1", "secret-2", "secret-2")
      .unwrap();
    assert!(gate.is_logged_in());

    gate.logout();
    assert!(matches!(
      gate.login("secret-1").unwrap_err(),
      Error::IncorrectPassword
    ));
    gate.login("secret-2").unwrap();
  }
}
