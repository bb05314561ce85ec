//! Blog post records.
//!
//! # Invariants
//! - `slug` is unique across the collection. Callers check this before
//!   writing (see `service::blog_service`); the record itself does not.
//! - `published_at` is stamped the first time a post is observed with
//!   `published == true` and is never overwritten or cleared afterwards.

use super::{merge, merge_nullable, nullable, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    pub slug: String,
    /// HTML body.
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    /// Soft reference to a `User`.
    pub author_id: Option<RecordId>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_id: Option<RecordId>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub excerpt: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub featured_image: Option<Option<String>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub author_id: Option<Option<RecordId>>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl BlogPost {
    fn settle_published_at(&mut self, now: Timestamp) {
        if self.published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }
}

impl Record for BlogPost {
    type New = NewBlogPost;
    type Patch = BlogPostPatch;

    const KIND: &'static str = "blog_post";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewBlogPost, now: Timestamp) -> Self {
        let mut post = Self {
            id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            excerpt: new.excerpt,
            featured_image: new.featured_image,
            category: new.category,
            tags: new.tags,
            author_id: new.author_id,
            published: new.published,
            published_at: None,
            created_at: now,
            updated_at: now,
        };
        post.settle_published_at(now);
        post
    }

    fn apply_patch(&mut self, patch: BlogPostPatch, now: Timestamp) {
        merge(&mut self.title, patch.title);
        merge(&mut self.slug, patch.slug);
        merge(&mut self.content, patch.content);
        merge_nullable(&mut self.excerpt, patch.excerpt);
        merge_nullable(&mut self.featured_image, patch.featured_image);
        merge(&mut self.category, patch.category);
        merge(&mut self.tags, patch.tags);
        merge_nullable(&mut self.author_id, patch.author_id);
        merge(&mut self.published, patch.published);
        self.updated_at = now;
        self.settle_published_at(now);
    }
}
