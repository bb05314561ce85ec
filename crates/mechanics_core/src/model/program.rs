//! Program records: the top level of the PMO hierarchy.

use super::{merge, merge_nullable, nullable, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Program lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramStatus {
    #[default]
    Active,
    Planning,
    OnHold,
    Completed,
    Cancelled,
}

impl ProgramStatus {
    pub const ALL: &'static [&'static str] =
        &["active", "planning", "on-hold", "completed", "cancelled"];
}

/// A group of related projects owned by one manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProgramStatus,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    /// Soft reference to a `User`.
    pub manager_id: Option<RecordId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert shape for [`Program`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgram {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProgramStatus>,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub manager_id: Option<RecordId>,
}

/// Partial update for [`Program`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<ProgramStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub start_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    pub manager_id: Option<Option<RecordId>>,
}

impl Record for Program {
    type New = NewProgram;
    type Patch = ProgramPatch;

    const KIND: &'static str = "program";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewProgram, now: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            status: new.status.unwrap_or_default(),
            start_date: new.start_date,
            end_date: new.end_date,
            manager_id: new.manager_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ProgramPatch, now: Timestamp) {
        merge(&mut self.name, patch.name);
        merge_nullable(&mut self.description, patch.description);
        merge(&mut self.status, patch.status);
        merge_nullable(&mut self.start_date, patch.start_date);
        merge_nullable(&mut self.end_date, patch.end_date);
        merge_nullable(&mut self.manager_id, patch.manager_id);
        self.updated_at = now;
    }
}
