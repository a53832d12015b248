//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`:
//! JWT signing, the static admin credential, the blog document stores and
//! the login rate limiter.
//!
//! ## Feature Flags
//!
//! - `rate-limit` (default) - per-client rate limiting via governor

pub mod auth;
pub mod store;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use auth::{JwtConfig, JwtTokenService, StaticCredentialVerifier, is_production};
pub use store::{InMemoryDocumentStore, JsonFileStore};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
