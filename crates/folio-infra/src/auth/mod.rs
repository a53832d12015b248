//! Authentication implementations.

mod credentials;
mod jwt;


pub use credentials::StaticCredentialVerifier;
pub use jwt::{JwtConfig, JwtTokenService};

/// `RUST_ENV` is `production` or `prod`.
pub fn is_production(lookup: &impl Fn(&str) -> Option<String>) -> bool {
    lookup("RUST_ENV")
        .map(|v| v == "production" || v == "prod")
        .unwrap_or(false)
}
