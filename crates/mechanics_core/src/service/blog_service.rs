//! Blog use-case service.
//!
//! # Responsibility
//! - Keep `BlogPost.slug` unique across create and update.
//! - Derive a slug from the title when a create payload omits one.
//! - Read helpers for the public blog views (published list, slug lookup,
//!   comments per post).
//!
//! # Invariants
//! - Slug uniqueness is checked and written under one collection lock.
//! - Derived-timestamp rules stay in the model; this layer never touches
//!   `published_at`.

use crate::model::blog_post::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::model::comment::Comment;
use crate::repo::collection::UpdateOutcome;
use crate::repo::memory_store::MemoryStore;
use log::info;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for blog use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogServiceError {
    /// Another post already owns this slug.
    SlugTaken(String),
    /// Target post does not exist.
    PostNotFound(String),
}

impl Display for BlogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlugTaken(slug) => write!(f, "slug already in use: `{slug}`"),
            Self::PostNotFound(id) => write!(f, "blog post not found: {id}"),
        }
    }
}

impl Error for BlogServiceError {}

/// Blog facade over the shared record store.
pub struct BlogService<'a> {
    store: &'a MemoryStore,
}

impl<'a> BlogService<'a> {
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Creates a post, rejecting slugs already in use.
    pub fn create_post(&self, new: NewBlogPost) -> Result<BlogPost, BlogServiceError> {
        let slug = new.slug.clone();
        let created = self
            .store
            .blog_posts()
            .create_unless(new, |existing| existing.slug == slug)
            .ok_or_else(|| BlogServiceError::SlugTaken(slug.clone()))?;
        info!(
            "event=blog_post_create module=service status=ok id={} published={}",
            created.id, created.published
        );
        Ok(created)
    }

    /// Applies a partial update, rejecting a slug owned by another post.
    pub fn update_post(&self, id: &str, patch: BlogPostPatch) -> Result<BlogPost, BlogServiceError> {
        let requested_slug = patch.slug.clone();
        let outcome = self
            .store
            .blog_posts()
            .update_unless(id, patch, |updated, other| updated.slug == other.slug);
        match outcome {
            UpdateOutcome::Updated(post) => Ok(post),
            UpdateOutcome::NotFound => Err(BlogServiceError::PostNotFound(id.to_string())),
            UpdateOutcome::Conflict => Err(BlogServiceError::SlugTaken(
                requested_slug.unwrap_or_default(),
            )),
        }
    }

    /// Lists posts, optionally restricted to published ones.
    pub fn list_posts(&self, published_only: bool) -> Vec<BlogPost> {
        if published_only {
            self.store.published_blog_posts()
        } else {
            self.store.blog_posts().list()
        }
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.store.blog_post_by_slug(slug)
    }

    /// Comments for one post. Unknown post ids yield an empty list.
    pub fn comments_for(&self, post_id: &str) -> Vec<Comment> {
        self.store.comments_by_post(post_id)
    }
}

/// Builds a URL slug: lowercase ASCII alphanumerics joined by single hyphens.
///
/// Returns an empty string when the title has no ASCII alphanumerics.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Fills `slug` from `title` on a create body that omits it.
///
/// Leaves the body untouched when `slug` is present (even if null) or when
/// `title` is not a string, so schema validation reports those cases.
pub fn fill_missing_slug(body: &mut Value) {
    let Some(object) = body.as_object_mut() else {
        return;
    };
    if object.contains_key("slug") {
        return;
    }
    let Some(title) = object.get("title").and_then(Value::as_str) else {
        return;
    };
    let slug = slugify(title);
    if !slug.is_empty() {
        object.insert("slug".to_string(), Value::String(slug));
    }
}
