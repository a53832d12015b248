//! Application state - shared across all handlers.

use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Context;
use folio_core::ports::{CredentialVerifier, DocumentStore, RateLimiter, TokenService};
use folio_core::{BlogService, CredentialGate};
use folio_infra::{InMemoryRateLimiter, JsonFileStore, JwtTokenService, StaticCredentialVerifier};

use crate::config::{AdminPassword, AppConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
    pub gate: Arc<CredentialGate>,
    pub login_limiter: Arc<dyn RateLimiter>,
    pub trusted_proxy: Option<IpAddr>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        gate: CredentialGate,
        login_limiter: Arc<dyn RateLimiter>,
    ) -> Self {
        Self {
            blog: Arc::new(BlogService::new(store)),
            gate: Arc::new(gate),
            login_limiter,
            trusted_proxy: None,
        }
    }

    pub fn with_trusted_proxy(mut self, proxy: Option<IpAddr>) -> Self {
        self.trusted_proxy = proxy;
        self
    }

    /// Build the production wiring: JSON file store, Argon2 admin identity,
    /// JWT tokens and the per-client login limiter.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(match &config.admin.password {
            AdminPassword::Hash(hash) => StaticCredentialVerifier::with_hash(&config.admin.email, hash)
                .context("ADMIN_PASSWORD_HASH is not a valid Argon2 hash")?,
            AdminPassword::Plain(password) => {
                StaticCredentialVerifier::with_password(&config.admin.email, password)
                    .context("failed to hash ADMIN_PASSWORD")?
            }
        });
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        let store: Arc<dyn DocumentStore> = Arc::new(JsonFileStore::new(&config.data_path));
        let login_limiter: Arc<dyn RateLimiter> = Arc::new(
            InMemoryRateLimiter::new(config.login_rate_limit.clone())
                .context("invalid login rate limit")?,
        );

        tracing::info!(
            data_path = %config.data_path.display(),
            token_hours = config.jwt.expiration_hours,
            trusted_proxy = ?config.trusted_proxy,
            "Application state initialized"
        );

        Ok(Self::new(store, CredentialGate::new(verifier, tokens), login_limiter)
            .with_trusted_proxy(config.trusted_proxy))
    }
}
