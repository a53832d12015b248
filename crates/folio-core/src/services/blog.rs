//! Blog service - CRUD over the single blog document.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::{BlogDocument, NewPost, Post, PostFilter, PostPatch, seed_document};
use crate::error::{DomainError, StoreError};
use crate::ports::{DocumentStore, TokenClaims};

/// Owns the post collection behind a [`DocumentStore`].
///
/// Every mutation holds `write_lock` across its load/modify/save cycle, so
/// concurrent writers are applied one after another instead of overwriting
/// each other.
pub struct BlogService {
    store: Arc<dyn DocumentStore>,
    write_lock: Mutex<()>,
}

impl BlogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// The whole document, drafts included. Seeds it on first access.
    pub async fn list(&self) -> Result<BlogDocument, DomainError> {
        Ok(self.load_or_seed().await?)
    }

    pub async fn published(&self, filter: &PostFilter) -> Result<Vec<Post>, DomainError> {
        Ok(self.load_or_seed().await?.published(filter))
    }

    pub async fn find_published(&self, id: &str) -> Result<Post, DomainError> {
        self.load_or_seed()
            .await?
            .find_published(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    pub async fn tags(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.load_or_seed().await?.tags())
    }

    /// Insert a new post at the front of the collection.
    pub async fn create(&self, claims: &TokenClaims, new_post: NewPost) -> Result<Post, DomainError> {
        authorize(claims)?;
        new_post.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut document = self.load_or_seed_locked().await?;

        let post = new_post.into_post(Utc::now());
        document.posts.insert(0, post.clone());
        self.store.save(&document).await?;

        tracing::info!(post_id = %post.id, subject = %claims.subject, "Post created");
        Ok(post)
    }

    /// Merge `patch` onto the post with the same id, keeping its position.
    pub async fn update(&self, claims: &TokenClaims, patch: PostPatch) -> Result<Post, DomainError> {
        authorize(claims)?;
        patch.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut document = self.load_or_seed_locked().await?;

        let index = document
            .position(&patch.id)
            .ok_or_else(|| DomainError::NotFound(patch.id.clone()))?;

        let post = &mut document.posts[index];
        patch.apply_to(post);
        let updated = post.clone();
        self.store.save(&document).await?;

        tracing::info!(post_id = %updated.id, subject = %claims.subject, "Post updated");
        Ok(updated)
    }

    pub async fn delete(&self, claims: &TokenClaims, id: &str) -> Result<(), DomainError> {
        authorize(claims)?;

        let _guard = self.write_lock.lock().await;
        let mut document = self.load_or_seed_locked().await?;

        let index = document
            .position(id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        document.posts.remove(index);
        self.store.save(&document).await?;

        tracing::info!(post_id = %id, subject = %claims.subject, "Post deleted");
        Ok(())
    }

    async fn load_or_seed(&self) -> Result<BlogDocument, StoreError> {
        if let Some(document) = self.store.load().await? {
            return Ok(document);
        }

        let _guard = self.write_lock.lock().await;
        self.load_or_seed_locked().await
    }

    /// Caller must hold `write_lock`.
    async fn load_or_seed_locked(&self) -> Result<BlogDocument, StoreError> {
        match self.store.load().await? {
            Some(document) => Ok(document),
            None => {
                tracing::info!("Blog document missing, writing seed posts");
                let document = seed_document();
                self.store.save(&document).await?;
                Ok(document)
            }
        }
    }
}

fn authorize(claims: &TokenClaims) -> Result<(), DomainError> {
    if claims.is_admin() && claims.expires_at > Utc::now() {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeDelta;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::ports::ADMIN_ROLE;

    #[derive(Default)]
    struct FakeStore {
        document: StdMutex<Option<BlogDocument>>,
        saves: AtomicUsize,
    }

    impl FakeStore {
        fn with(document: BlogDocument) -> Self {
            Self {
                document: StdMutex::new(Some(document)),
                saves: AtomicUsize::new(0),
            }
        }

        fn snapshot(&self) -> Option<BlogDocument> {
            self.document.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentStore for FakeStore {
        async fn load(&self) -> Result<Option<BlogDocument>, StoreError> {
            Ok(self.document.lock().unwrap().clone())
        }

        async fn save(&self, document: &BlogDocument) -> Result<(), StoreError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.document.lock().unwrap() = Some(document.clone());
            Ok(())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl DocumentStore for BrokenStore {
        async fn load(&self) -> Result<Option<BlogDocument>, StoreError> {
            Err(StoreError::Malformed("expected value at line 1".to_string()))
        }

        async fn save(&self, _document: &BlogDocument) -> Result<(), StoreError> {
            Err(StoreError::Serialization("unreachable".to_string()))
        }
    }

    fn admin() -> TokenClaims {
        let now = Utc::now();
        TokenClaims {
            subject: "admin@example.com".to_string(),
            role: ADMIN_ROLE.to_string(),
            issued_at: now,
            expires_at: now + TimeDelta::hours(24),
        }
    }

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: "content".to_string(),
            author: "x".to_string(),
            date: "2024-02-01T00:00:00Z".parse().unwrap(),
            read_time: "2 min read".to_string(),
            tags: vec!["a".to_string()],
            image: Some("/img.png".to_string()),
            published: true,
            extra: Default::default(),
        }
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            author: "x".to_string(),
            read_time: "1 min".to_string(),
            tags: vec!["t1".to_string(), "t2".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_seeds_missing_document() {
        let store = Arc::new(FakeStore::default());
        let service = BlogService::new(store.clone());

        let document = service.list().await.unwrap();

        assert_eq!(document.posts.len(), 3);
        assert_eq!(store.snapshot(), Some(seed_document()));

        // Second read must not reseed
        service.list().await.unwrap();
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_on_empty_store() {
        let store = Arc::new(FakeStore::with(BlogDocument::default()));
        let service = BlogService::new(store.clone());

        let created = service.create(&admin(), new_post("A")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.tags, vec!["t1", "t2"]);
        assert!(!created.published);

        let document = service.list().await.unwrap();
        assert_eq!(document.posts, vec![created]);
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let store = Arc::new(FakeStore::with(BlogDocument::new(vec![post("1", "Old")])));
        let service = BlogService::new(store);

        let created = service.create(&admin(), new_post("New")).await.unwrap();
        let document = service.list().await.unwrap();

        assert_eq!(document.posts[0].id, created.id);
        assert_ne!(created.id, "1");
        assert_eq!(document.posts[1].id, "1");
    }

    #[tokio::test]
    async fn test_create_requires_admin_claim() {
        let store = Arc::new(FakeStore::with(BlogDocument::default()));
        let service = BlogService::new(store.clone());

        let mut claims = admin();
        claims.role = "editor".to_string();
        let result = service.create(&claims, new_post("A")).await;
        assert!(matches!(result, Err(DomainError::Unauthorized)));

        let mut expired = admin();
        expired.expires_at = Utc::now() - TimeDelta::minutes(1);
        let result = service.create(&expired, new_post("A")).await;
        assert!(matches!(result, Err(DomainError::Unauthorized)));

        assert!(store.snapshot().unwrap().posts.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_require_admin_claim() {
        let original = BlogDocument::new(vec![post("1", "First")]);
        let store = Arc::new(FakeStore::with(original.clone()));
        let service = BlogService::new(store.clone());

        let mut claims = admin();
        claims.role = "editor".to_string();

        let patch = PostPatch {
            id: "1".to_string(),
            title: Some("Changed".to_string()),
            ..Default::default()
        };
        let result = service.update(&claims, patch).await;
        assert!(matches!(result, Err(DomainError::Unauthorized)));

        let result = service.delete(&claims, "1").await;
        assert!(matches!(result, Err(DomainError::Unauthorized)));

        assert_eq!(store.snapshot(), Some(original));
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_validates_fields() {
        let service = BlogService::new(Arc::new(FakeStore::with(BlogDocument::default())));

        let result = service.create(&admin(), new_post("  ")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_merges_in_place() {
        let store = Arc::new(FakeStore::with(BlogDocument::new(vec![
            post("1", "First"),
            post("2", "Second"),
            post("3", "Third"),
        ])));
        let service = BlogService::new(store);

        let updated = service
            .update(
                &admin(),
                PostPatch {
                    id: "2".to_string(),
                    title: Some("Second, revised".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.title, "Second, revised");
        assert_eq!(updated.excerpt, "excerpt");
        assert_eq!(updated.date, post("2", "").date);
        assert_eq!(updated.image.as_deref(), Some("/img.png"));

        let ids: Vec<_> = service
            .list()
            .await
            .unwrap()
            .posts
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_leave_document_alone() {
        let original = BlogDocument::new(vec![post("1", "First")]);
        let store = Arc::new(FakeStore::with(original.clone()));
        let service = BlogService::new(store.clone());

        let update = service
            .update(
                &admin(),
                PostPatch {
                    id: "nope".to_string(),
                    title: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await;
        let delete = service.delete(&admin(), "nope").await;

        assert!(matches!(update, Err(DomainError::NotFound(ref id)) if id == "nope"));
        assert!(matches!(delete, Err(DomainError::NotFound(_))));
        assert_eq!(store.snapshot(), Some(original));
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_keeps_remaining_posts() {
        let store = Arc::new(FakeStore::with(BlogDocument::new(vec![
            post("1", "First"),
            post("2", "Second"),
        ])));
        let service = BlogService::new(store);

        service.delete(&admin(), "1").await.unwrap();

        let document = service.list().await.unwrap();
        assert_eq!(document.posts, vec![post("2", "Second")]);
    }

    #[tokio::test]
    async fn test_round_trip_restores_seed() {
        let service = BlogService::new(Arc::new(FakeStore::default()));
        let seeded = service.list().await.unwrap();

        let created = service.create(&admin(), new_post("Temp")).await.unwrap();
        service
            .update(
                &admin(),
                PostPatch {
                    id: created.id.clone(),
                    published: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(service.list().await.unwrap().posts.len(), 4);

        service.delete(&admin(), &created.id).await.unwrap();

        assert_eq!(service.list().await.unwrap(), seeded);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let store = Arc::new(FakeStore::with(BlogDocument::default()));
        let service = Arc::new(BlogService::new(store));

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move { service.create(&admin(), new_post(&format!("Post {i}"))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(service.list().await.unwrap().posts.len(), 16);
    }

    #[tokio::test]
    async fn test_public_views() {
        let mut draft = post("2", "Draft");
        draft.published = false;
        let service = BlogService::new(Arc::new(FakeStore::with(BlogDocument::new(vec![
            post("1", "Live"),
            draft,
        ]))));

        assert_eq!(service.published(&PostFilter::default()).await.unwrap().len(), 1);
        assert_eq!(service.find_published("1").await.unwrap().title, "Live");
        assert!(matches!(
            service.find_published("2").await,
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(service.tags().await.unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_malformed_store_is_storage_unavailable() {
        let service = BlogService::new(Arc::new(BrokenStore));

        assert!(matches!(
            service.list().await,
            Err(DomainError::StorageUnavailable(StoreError::Malformed(_)))
        ));
        assert!(matches!(
            service.create(&admin(), new_post("A")).await,
            Err(DomainError::StorageUnavailable(_))
        ));
    }
}
