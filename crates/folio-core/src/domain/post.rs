use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a single blog article as stored in the blog document.
///
/// Fields this type does not know about are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub read_time: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields accepted when creating a post. The id is always generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
    pub read_time: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub published: bool,
}

/// A partial update addressed by id. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// `Some(None)` is an explicit `null` and clears the image.
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<String>>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl NewPost {
    /// Reject blank required text fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "{} must not be empty",
                missing.join(", ")
            )))
        }
    }

    /// Build the stored post, assigning a fresh id and defaulting the date to `now`.
    pub fn into_post(self, now: DateTime<Utc>) -> Post {
        Post {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            date: self.date.unwrap_or(now),
            read_time: self.read_time,
            tags: normalize_tags(self.tags),
            image: self.image,
            published: self.published,
            extra: Map::new(),
        }
    }
}

impl PostPatch {
    /// Supplied required text fields must not be blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let blank: Vec<&str> = [
            ("title", &self.title),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "{} must not be empty",
                blank.join(", ")
            )))
        }
    }

    /// Merge the supplied fields onto `post`. The id is never touched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
        if let Some(read_time) = self.read_time {
            post.read_time = read_time;
        }
        if let Some(tags) = self.tags {
            post.tags = normalize_tags(tags);
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
    }
}

/// Present-but-null becomes `Some(None)`; absent stays `None` via `default`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Trim tags and drop empty ones. Order and duplicates are kept.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "42".to_string(),
            title: "Title".to_string(),
            excerpt: "Excerpt".to_string(),
            content: "Body".to_string(),
            author: "Author".to_string(),
            date: "2024-01-15T10:00:00.000Z".parse().unwrap(),
            read_time: "3 min read".to_string(),
            tags: vec!["rust".to_string()],
            image: None,
            published: true,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            " rust ".to_string(),
            "".to_string(),
            "web".to_string(),
            "   ".to_string(),
            "rust".to_string(),
        ];

        assert_eq!(normalize_tags(tags), vec!["rust", "web", "rust"]);
    }

    #[test]
    fn test_new_post_requires_text_fields() {
        let post = NewPost {
            title: "A".to_string(),
            excerpt: "  ".to_string(),
            ..Default::default()
        };

        let err = post.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg == "excerpt, content must not be empty"));
    }

    #[test]
    fn test_into_post_defaults_date_and_generates_id() {
        let now: DateTime<Utc> = "2025-03-01T12:00:00Z".parse().unwrap();
        let first = NewPost {
            title: "A".to_string(),
            ..Default::default()
        }
        .into_post(now);
        let second = NewPost::default().into_post(now);

        assert_eq!(first.date, now);
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_into_post_keeps_supplied_date() {
        let date: DateTime<Utc> = "2023-06-01T08:30:00Z".parse().unwrap();
        let post = NewPost {
            date: Some(date),
            ..Default::default()
        }
        .into_post(Utc::now());

        assert_eq!(post.date, date);
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut post = sample_post();
        let original = post.clone();

        PostPatch {
            id: "ignored".to_string(),
            title: Some("New title".to_string()),
            published: Some(false),
            ..Default::default()
        }
        .apply_to(&mut post);

        assert_eq!(post.id, original.id);
        assert_eq!(post.title, "New title");
        assert!(!post.published);
        assert_eq!(post.excerpt, original.excerpt);
        assert_eq!(post.date, original.date);
        assert_eq!(post.tags, original.tags);
    }

    #[test]
    fn test_patch_image_null_clears_absent_keeps() {
        let mut post = Post {
            image: Some("/cover.png".to_string()),
            ..sample_post()
        };

        let keep: PostPatch = serde_json::from_value(serde_json::json!({ "id": "42" })).unwrap();
        assert_eq!(keep.image, None);
        keep.apply_to(&mut post);
        assert_eq!(post.image.as_deref(), Some("/cover.png"));

        let replace: PostPatch =
            serde_json::from_value(serde_json::json!({ "id": "42", "image": "/new.png" })).unwrap();
        replace.apply_to(&mut post);
        assert_eq!(post.image.as_deref(), Some("/new.png"));

        let clear: PostPatch =
            serde_json::from_value(serde_json::json!({ "id": "42", "image": null })).unwrap();
        assert_eq!(clear.image, Some(None));
        clear.apply_to(&mut post);
        assert_eq!(post.image, None);
    }

    #[test]
    fn test_post_keeps_unknown_fields() {
        let mut json = serde_json::to_value(sample_post()).unwrap();
        json["seriesOrder"] = serde_json::json!(2);

        let post: Post = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(post.extra.get("seriesOrder"), Some(&serde_json::json!(2)));
        assert_eq!(serde_json::to_value(&post).unwrap(), json);
    }

    #[test]
    fn test_patch_rejects_blank_title() {
        let patch = PostPatch {
            id: "1".to_string(),
            title: Some(" ".to_string()),
            ..Default::default()
        };

        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_post_json_shape() {
        let json = serde_json::to_value(sample_post()).unwrap();

        assert_eq!(json["readTime"], "3 min read");
        assert!(json.get("image").is_none());
        assert!(json.get("read_time").is_none());
    }

    #[test]
    fn test_post_rejects_malformed_date() {
        let mut json = serde_json::to_value(sample_post()).unwrap();
        json["date"] = serde_json::Value::String("yesterday".to_string());

        assert!(serde_json::from_value::<Post>(json).is_err());
    }
}
