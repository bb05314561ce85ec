//! Project records, optionally grouped under a program.

use super::{merge, merge_nullable, nullable, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Lowest accepted `progress` value.
pub const PROGRESS_MIN: i64 = 0;
/// Highest accepted `progress` value.
pub const PROGRESS_MAX: i64 = 100;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: &'static [&'static str] =
        &["planning", "active", "on-hold", "completed", "cancelled"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// Completion percentage in `0..=100`.
    pub progress: u8,
    /// Soft reference to the parent `Program`.
    pub program_id: Option<RecordId>,
    /// Soft reference to a `User`.
    pub manager_id: Option<RecordId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub program_id: Option<RecordId>,
    #[serde(default)]
    pub manager_id: Option<RecordId>,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default, deserialize_with = "nullable")]
    pub program_id: Option<Option<RecordId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub manager_id: Option<Option<RecordId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub start_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Timestamp>>,
}

impl Record for Project {
    type New = NewProject;
    type Patch = ProjectPatch;

    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewProject, now: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            status: new.status.unwrap_or_default(),
            progress: new.progress.unwrap_or(0),
            program_id: new.program_id,
            manager_id: new.manager_id,
            start_date: new.start_date,
            end_date: new.end_date,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch, now: Timestamp) {
        merge(&mut self.name, patch.name);
        merge_nullable(&mut self.description, patch.description);
        merge(&mut self.status, patch.status);
        merge(&mut self.progress, patch.progress);
        merge_nullable(&mut self.program_id, patch.program_id);
        merge_nullable(&mut self.manager_id, patch.manager_id);
        merge_nullable(&mut self.start_date, patch.start_date);
        merge_nullable(&mut self.end_date, patch.end_date);
        self.updated_at = now;
    }
}
