//! Shared-credential verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use tracing::warn;

use notevault_core::config::auth::AuthConfig;
use notevault_core::error::AppError;

/// Verifies login attempts against the single configured credential.
///
/// The configured password is either an Argon2 PHC string (recognized by
/// the `$argon2` prefix) or plaintext; plaintext comparison runs in
/// constant time.
#[derive(Clone)]
pub struct CredentialVerifier {
    /// The shared username.
    username: String,
    /// The shared password, plaintext or Argon2 PHC string.
    password: String,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    /// Creates a verifier from auth configuration. Fails when the
    /// credential is not configured.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.username.is_empty() || config.password.is_empty() {
            return Err(AppError::configuration(
                "auth.username and auth.password must be configured",
            ));
        }
        if !config.password.starts_with("$argon2") {
            warn!("Configured password is plaintext; consider an Argon2 PHC string");
        }
        Ok(Self {
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Checks a login attempt, returning `Unauthorized` on any mismatch.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AppError> {
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());

        let pass_ok = if self.password.starts_with("$argon2") {
            self.verify_argon2(password)?
        } else {
            constant_time_eq(password.as_bytes(), self.password.as_bytes())
        };

        if user_ok && pass_ok {
            Ok(())
        } else {
            Err(AppError::unauthorized("Invalid username or password"))
        }
    }

    /// Verifies a plaintext password against the stored Argon2 hash.
    fn verify_argon2(&self, password: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(&self.password)
            .map_err(|e| AppError::configuration(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

/// Length-leaking but content-constant-time byte comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
