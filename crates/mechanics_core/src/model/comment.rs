//! Blog comments. Replies reference a parent comment but are stored flat.

use super::{merge, merge_nullable, nullable, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: RecordId,
    pub content: String,
    /// Soft reference to the parent `BlogPost`.
    pub post_id: RecordId,
    pub author_id: Option<RecordId>,
    /// Soft reference to another `Comment` when this is a reply.
    pub parent_id: Option<RecordId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub post_id: RecordId,
    #[serde(default)]
    pub author_id: Option<RecordId>,
    #[serde(default)]
    pub parent_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub post_id: Option<RecordId>,
    #[serde(default, deserialize_with = "nullable")]
    pub author_id: Option<Option<RecordId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub parent_id: Option<Option<RecordId>>,
}

impl Record for Comment {
    type New = NewComment;
    type Patch = CommentPatch;

    const KIND: &'static str = "comment";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewComment, now: Timestamp) -> Self {
        Self {
            id,
            content: new.content,
            post_id: new.post_id,
            author_id: new.author_id,
            parent_id: new.parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: CommentPatch, now: Timestamp) {
        merge(&mut self.content, patch.content);
        merge(&mut self.post_id, patch.post_id);
        merge_nullable(&mut self.author_id, patch.author_id);
        merge_nullable(&mut self.parent_id, patch.parent_id);
        self.updated_at = now;
    }
}
