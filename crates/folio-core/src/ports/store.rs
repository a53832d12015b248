//! Blog document persistence port.

use async_trait::async_trait;

use crate::domain::BlogDocument;
use crate::error::StoreError;

/// Whole-document storage for the blog.
///
/// Implementations read and write the entire document; callers serialize
/// read-modify-write cycles themselves.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the document, or `None` when it has never been written.
    async fn load(&self) -> Result<Option<BlogDocument>, StoreError>;

    /// Replace the stored document.
    async fn save(&self, document: &BlogDocument) -> Result<(), StoreError>;
}
