//! # notevault-auth
//!
//! Authentication for NoteVault: one shared credential guards the vault,
//! and successful logins receive an HMAC-signed JWT with a fixed expiry.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `credentials` — shared-credential verification (plaintext or Argon2)

pub mod credentials;
pub mod jwt;

pub use credentials::CredentialVerifier;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
