//! Domain entities - the core business objects.

mod document;
mod post;
mod seed;

pub use document::{BlogDocument, PostFilter};
pub use post::{NewPost, Post, PostPatch, normalize_tags};
pub use seed::seed_document;
