//! Blog handlers. Reads are public, writes take an [`Identity`].

use actix_web::{HttpResponse, web};

use folio_core::domain::{NewPost, PostFilter, PostPatch};
use folio_shared::dto::{
    DeletePostRequest, MessageResponse, PostMutationResponse, PostResponse, PostsResponse,
    TagsResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/blog - the whole document, drafts included.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let document = state
        .blog
        .list()
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch posts"))?;

    Ok(HttpResponse::Ok().json(document))
}

/// POST /api/blog
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .create(&identity.claims, body.into_inner())
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to create post"))?;

    Ok(HttpResponse::Ok().json(PostMutationResponse::created(post)))
}

/// PUT /api/blog
pub async fn update_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .update(&identity.claims, body.into_inner())
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to update post"))?;

    Ok(HttpResponse::Ok().json(PostMutationResponse::updated(post)))
}

/// DELETE /api/blog
pub async fn delete_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    state
        .blog
        .delete(&identity.claims, &body.id)
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to delete post"))?;

    Ok(HttpResponse::Ok().json(MessageResponse::deleted()))
}

/// GET /api/blog/published?tag=&search=
pub async fn published_posts(
    state: web::Data<AppState>,
    filter: web::Query<PostFilter>,
) -> AppResult<HttpResponse> {
    let posts = state
        .blog
        .published(&filter)
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch posts"))?;

    Ok(HttpResponse::Ok().json(PostsResponse { posts }))
}

/// GET /api/blog/tags
pub async fn tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state
        .blog
        .tags()
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch tags"))?;

    Ok(HttpResponse::Ok().json(TagsResponse { tags }))
}

/// GET /api/blog/{id} - published posts only.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .find_published(&path.into_inner())
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch post"))?;

    Ok(HttpResponse::Ok().json(PostResponse { post }))
}
