//! Application configuration loaded from environment variables.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use folio_core::ports::{AuthError, RateLimitError};
use folio_infra::{JwtConfig, RateLimitConfig, is_production};

const DEFAULT_ADMIN_EMAIL: &str = "admin@magfur.dev";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("{0} must be set in production")]
    MissingInProduction(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    RateLimit(#[from] RateLimitError),
}

/// How the admin password is supplied.
#[derive(Clone)]
pub enum AdminPassword {
    Plain(String),
    /// Argon2 PHC string.
    Hash(String),
}

impl std::fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminPassword::Plain(_) => f.write_str("Plain(***)"),
            AdminPassword::Hash(_) => f.write_str("Hash(***)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: AdminPassword,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub admin: AdminConfig,
    pub jwt: JwtConfig,
    pub login_rate_limit: RateLimitConfig,
    /// Reverse proxy whose forwarding headers identify the client.
    pub trusted_proxy: Option<IpAddr>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let trusted_proxy = match lookup("TRUSTED_PROXY") {
            Some(raw) => Some(raw.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                name: "TRUSTED_PROXY",
                value: raw,
            })?),
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            data_path: lookup("BLOG_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data").join("blog.json")),
            admin: Self::admin_from_lookup(&lookup)?,
            jwt: JwtConfig::from_lookup(&lookup)?,
            login_rate_limit: RateLimitConfig::from_lookup(&lookup)?,
            trusted_proxy,
        })
    }

    /// `ADMIN_PASSWORD_HASH` wins over `ADMIN_PASSWORD`. The built-in
    /// password is only allowed outside production.
    fn admin_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<AdminConfig, ConfigError> {
        let email = lookup("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string());

        let password = if let Some(hash) = lookup("ADMIN_PASSWORD_HASH") {
            AdminPassword::Hash(hash)
        } else if let Some(password) = lookup("ADMIN_PASSWORD") {
            AdminPassword::Plain(password)
        } else if is_production(lookup) {
            return Err(ConfigError::MissingInProduction("ADMIN_PASSWORD"));
        } else {
            tracing::warn!("ADMIN_PASSWORD not set. Using the built-in development password.");
            AdminPassword::Plain(DEFAULT_ADMIN_PASSWORD.to_string())
        };

        Ok(AdminConfig { email, password })
    }
}
