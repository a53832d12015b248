//! Error handling - maps domain and auth failures to `{error, details}` bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use folio_core::DomainError;
use folio_core::ports::AuthError;
use folio_shared::ErrorResponse;
use std::fmt;

/// Application-level error type returned by handlers.
#[derive(Debug)]
pub enum AppError {
    InvalidCredentials,
    Unauthorized,
    PostNotFound,
    BadRequest(String),
    Validation(String),
    TooManyRequests { retry_after_secs: u64 },
    /// `error` is the operation-specific summary, `details` the cause.
    Internal { error: String, details: Option<String> },
}

impl AppError {
    pub fn internal(error: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::Internal {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    /// Map a domain error, using `failure` as the summary for storage errors.
    pub fn from_domain(err: DomainError, failure: &str) -> Self {
        match err {
            DomainError::NotFound(_) => AppError::PostNotFound,
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::StorageUnavailable(e) => AppError::internal(failure, e.to_string()),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::PostNotFound => write!(f, "Post not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::TooManyRequests { retry_after_secs } => {
                write!(f, "Too many requests, retry after {}s", retry_after_secs)
            }
            AppError::Internal { error, details } => match details {
                Some(details) => write!(f, "{}: {}", error, details),
                None => write!(f, "{}", error),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::PostNotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::InvalidCredentials => ErrorResponse::invalid_credentials(),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::PostNotFound => ErrorResponse::post_not_found(),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(detail) => ErrorResponse::validation(detail),
            AppError::TooManyRequests { retry_after_secs } => {
                ErrorResponse::too_many_requests(*retry_after_secs)
            }
            AppError::Internal { error, details } => {
                tracing::error!(error = %error, details = ?details, "Request failed");
                let body = ErrorResponse::new(error.clone());
                match details {
                    Some(details) => body.with_details(details.clone()),
                    None => body,
                }
            }
        };

        let mut response = HttpResponse::build(self.status_code());
        if let AppError::TooManyRequests { retry_after_secs } = self {
            response.insert_header(("Retry-After", retry_after_secs.to_string()));
        }
        response.json(error)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingAuth => {
                AppError::Unauthorized
            }
            AuthError::HashingError(msg) | AuthError::Config(msg) => {
                AppError::internal("Internal server error", msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::PostNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("Failed to fetch posts", "disk").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_failure_carries_operation_summary() {
        let err = AppError::from_domain(
            DomainError::StorageUnavailable(StoreError::Malformed("bad json".to_string())),
            "Failed to create post",
        );

        match err {
            AppError::Internal { error, details } => {
                assert_eq!(error, "Failed to create post");
                assert_eq!(details.as_deref(), Some("Malformed document: bad json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_token_failures_are_uniform() {
        for err in [
            AuthError::TokenExpired,
            AuthError::InvalidToken("bad signature".to_string()),
            AuthError::MissingAuth,
        ] {
            assert!(matches!(AppError::from(err), AppError::Unauthorized));
        }
    }
}
