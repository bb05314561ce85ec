//! Media library entries (images, videos) picked for blog posts.

use super::{merge, merge_nullable, nullable, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: RecordId,
    pub url: String,
    /// Free-form kind label such as `image` or `video`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Arbitrary provider metadata, stored verbatim.
    pub metadata: Option<Value>,
    pub uploader_id: Option<RecordId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedia {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub uploader_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPatch {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub metadata: Option<Option<Value>>,
    #[serde(default, deserialize_with = "nullable")]
    pub uploader_id: Option<Option<RecordId>>,
}

impl Record for Media {
    type New = NewMedia;
    type Patch = MediaPatch;

    const KIND: &'static str = "media";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewMedia, now: Timestamp) -> Self {
        Self {
            id,
            url: new.url,
            kind: new.kind,
            metadata: new.metadata,
            uploader_id: new.uploader_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: MediaPatch, now: Timestamp) {
        merge(&mut self.url, patch.url);
        merge(&mut self.kind, patch.kind);
        merge_nullable(&mut self.metadata, patch.metadata);
        merge_nullable(&mut self.uploader_id, patch.uploader_id);
        self.updated_at = now;
    }
}
