//! Bearer token extractor for admin-only handlers.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use folio_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Verified claims of the caller.
///
/// Use this in handlers to require a valid session token:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.claims.subject)
/// }
/// ```
/// Missing, malformed, forged and expired tokens all reject the request
/// with the same `401 {"error": "Unauthorized"}`.
#[derive(Debug, Clone)]
pub struct Identity {
    pub claims: TokenClaims,
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AppError::internal(
                "Internal server error",
                "server configuration error",
            )));
        };

        let result = match req.headers().get(header::AUTHORIZATION) {
            None => state.gate.verify_bearer(None),
            Some(value) => match value.to_str() {
                Ok(value) => state.gate.verify_bearer(Some(value)),
                Err(_) => Err(AuthError::InvalidToken(
                    "Invalid authorization header".to_string(),
                )),
            },
        };

        ready(match result {
            Ok(claims) => Ok(Identity { claims }),
            Err(e) => {
                tracing::debug!(reason = %e, "Rejected bearer token");
                Err(AppError::from(e))
            }
        })
    }
}
