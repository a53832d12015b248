//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod health;


use actix_web::web;

use crate::middleware::error::AppError;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::resource("/auth/login")
                    .wrap(
                        RateLimitMiddleware::new(state.login_limiter.clone())
                            .trust_proxy(state.trusted_proxy),
                    )
                    .route(web::post().to(auth::login)),
            )
            // Blog routes; writes require a bearer token
            .service(
                web::resource("/blog")
                    .route(web::get().to(blog::list_posts))
                    .route(web::post().to(blog::create_post))
                    .route(web::put().to(blog::update_post))
                    .route(web::delete().to(blog::delete_post)),
            )
            .route("/blog/published", web::get().to(blog::published_posts))
            .route("/blog/tags", web::get().to(blog::tags))
            .route("/blog/{id}", web::get().to(blog::get_post)),
    );
}
