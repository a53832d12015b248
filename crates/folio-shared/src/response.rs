//! The error body every failing endpoint returns.

use serde::{Deserialize, Serialize};

/// `{ "error": "...", "details": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, human-readable summary shown to the client.
    pub error: String,

    /// Best-effort detail for failures the client cannot fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn invalid_credentials() -> Self {
        Self::new("Invalid credentials")
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn post_not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new("Bad request").with_details(details)
    }

    pub fn validation(details: impl Into<String>) -> Self {
        Self::new("Validation failed").with_details(details)
    }

    pub fn too_many_requests(retry_after_secs: u64) -> Self {
        Self::new("Too many requests")
            .with_details(format!("Try again in {retry_after_secs} seconds"))
    }
}
