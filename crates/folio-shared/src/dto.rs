//! Data Transfer Objects - request/response types for the API.

use folio_core::domain::Post;
use serde::{Deserialize, Serialize};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub message: String,
}

/// Request to delete a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub id: String,
}

/// A created or updated post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMutationResponse {
    pub success: bool,
    pub post: Post,
    pub message: String,
}

/// Acknowledgement without payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Public listing of published posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// A single published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: Post,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

impl LoginResponse {
    pub fn new(token: String, expires_in: i64) -> Self {
        Self {
            success: true,
            token,
            expires_in,
            message: "Login successful".to_string(),
        }
    }
}

impl PostMutationResponse {
    pub fn created(post: Post) -> Self {
        Self {
            success: true,
            post,
            message: "Post created successfully".to_string(),
        }
    }

    pub fn updated(post: Post) -> Self {
        Self {
            success: true,
            post,
            message: "Post updated successfully".to_string(),
        }
    }
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Post deleted successfully".to_string(),
        }
    }
}
