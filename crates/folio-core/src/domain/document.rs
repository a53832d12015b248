use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Post;

/// The persisted blog document: the ordered post collection, newest first.
///
/// Unknown top-level fields are kept in `extra` so that a load/save cycle
/// writes them back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDocument {
    pub posts: Vec<Post>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public listing filter over published posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFilter {
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl BlogDocument {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            extra: Map::new(),
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    /// Published posts matching `filter`, in document order.
    pub fn published(&self, filter: &PostFilter) -> Vec<Post> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let tag = filter.tag.as_deref().filter(|t| !t.is_empty());

        self.posts
            .iter()
            .filter(|post| post.published)
            .filter(|post| tag.is_none_or(|t| post.tags.iter().any(|pt| pt == t)))
            .filter(|post| {
                search.as_deref().is_none_or(|needle| {
                    post.title.to_lowercase().contains(needle)
                        || post.excerpt.to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect()
    }

    pub fn find_published(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id && post.published)
    }

    /// Distinct tags of published posts, first occurrence wins.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self
            .posts
            .iter()
            .filter(|post| post.published)
            .flat_map(|post| post.tags.iter())
        {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}
