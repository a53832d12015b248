//! Single static admin identity backed by an Argon2 password hash.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use subtle::ConstantTimeEq;

use folio_core::ports::{AuthError, CredentialVerifier};

/// Accepts exactly one email/password pair.
///
/// The password is only ever held as an Argon2 PHC string. The email is
/// compared in constant time and the hash is always checked, so a wrong
/// email and a wrong password take the same path.
pub struct StaticCredentialVerifier {
    email: String,
    password_hash: String,
    argon2: Argon2<'static>,
}

impl StaticCredentialVerifier {
    /// Hash `password` at construction time.
    pub fn with_password(email: impl Into<String>, password: &str) -> Result<Self, AuthError> {
        let argon2 = Argon2::default();
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            email: email.into(),
            password_hash,
            argon2,
        })
    }

    /// Use a pre-computed PHC hash, e.g. from `ADMIN_PASSWORD_HASH`.
    pub fn with_hash(email: impl Into<String>, password_hash: impl Into<String>) -> Result<Self, AuthError> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            email: email.into(),
            password_hash,
            argon2: Argon2::default(),
        })
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(&self.password_hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        let password_ok = self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();
        let email_ok: bool = self.email.as_bytes().ct_eq(email.as_bytes()).into();

        Ok(email_ok & password_ok)
    }
}
