//! Authentication handlers.

use actix_web::{HttpResponse, web};

use folio_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let LoginRequest { email, password } = body.into_inner();

    // Argon2 verification is CPU bound
    let gate = state.gate.clone();
    let issued = web::block(move || gate.authenticate(&email, &password))
        .await
        .map_err(|e| AppError::internal("Internal server error", e.to_string()))??;

    Ok(HttpResponse::Ok().json(LoginResponse::new(
        issued.token,
        state.gate.token_lifetime_seconds(),
    )))
}
