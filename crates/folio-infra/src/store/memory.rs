//! In-memory document store - used in tests and for throwaway runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::StoreError;
use folio_core::domain::BlogDocument;
use folio_core::ports::DocumentStore;

/// Keeps the blog document in process memory.
///
/// Note: Data is lost on process restart.
pub struct InMemoryDocumentStore {
    document: RwLock<Option<BlogDocument>>,
}

impl InMemoryDocumentStore {
    /// A store with no document yet; the first read seeds it.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
        }
    }

    pub fn with_document(document: BlogDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }

    pub async fn snapshot(&self) -> Option<BlogDocument> {
        self.document.read().await.clone()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> Result<Option<BlogDocument>, StoreError> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &BlogDocument) -> Result<(), StoreError> {
        *self.document.write().await = Some(document.clone());
        Ok(())
    }
}
