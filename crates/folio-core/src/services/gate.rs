//! Credential gate - admin login and bearer token checks.

use std::sync::Arc;

use crate::ports::{ADMIN_ROLE, AuthError, CredentialVerifier, IssuedToken, TokenClaims, TokenService};

/// Authenticates the admin identity and issues/verifies session tokens.
///
/// The identity check is delegated to a [`CredentialVerifier`], so a real
/// credential store can replace the static identity without touching token
/// issuance.
#[derive(Clone)]
pub struct CredentialGate {
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<dyn TokenService>,
}

impl CredentialGate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, tokens: Arc<dyn TokenService>) -> Self {
        Self { verifier, tokens }
    }

    /// Check `email`/`password` and sign an admin token on success.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if !self.verifier.verify(email, password)? {
            tracing::warn!(user_email = %mask_email(email), "Rejected admin login");
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.generate_token(email, ADMIN_ROLE)?;
        tracing::info!(user_email = %mask_email(email), expires_at = %issued.expires_at, "Admin logged in");
        Ok(issued)
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.tokens.validate_token(token)
    }

    /// Verify the raw value of an `Authorization` header (`Bearer <token>`).
    pub fn verify_bearer(&self, header: Option<&str>) -> Result<TokenClaims, AuthError> {
        let header = header.ok_or(AuthError::MissingAuth)?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

        self.verify(token)
    }

    pub fn token_lifetime_seconds(&self) -> i64 {
        self.tokens.expiration_seconds()
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match (chars.next(), chars.next()) {
                (Some(first), Some(_)) => format!("{first}***@{domain}"),
                _ => format!("***@{domain}"),
            }
        }
        None => "***".to_string(),
    }
}
