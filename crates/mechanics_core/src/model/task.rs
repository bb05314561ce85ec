//! Task records.
//!
//! # Invariants
//! - `completed_at` is stamped the first time a task is observed in
//!   `TaskStatus::Completed`, at create or update.
//! - `completed_at` is never cleared or overwritten once set, even when the
//!   status later moves away from `Completed`.

use super::{merge, merge_nullable, nullable, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Task workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    InProgress,
    /// Waiting on review.
    Review,
    /// Cannot proceed until something else happens.
    Blocked,
    /// Done. Drives `completed_at`.
    Completed,
}

impl TaskStatus {
    pub const ALL: &'static [&'static str] =
        &["todo", "in-progress", "review", "blocked", "completed"];

    /// Returns whether the task still counts as open work.
    pub fn is_open(self) -> bool {
        self != Self::Completed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: &'static [&'static str] = &["low", "medium", "high"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Soft reference to the parent `Project`.
    pub project_id: Option<RecordId>,
    /// Soft reference to a `User`.
    pub assignee_id: Option<RecordId>,
    pub due_date: Option<Timestamp>,
    /// Derived from `status`; see module invariants.
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub project_id: Option<RecordId>,
    #[serde(default)]
    pub assignee_id: Option<RecordId>,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "nullable")]
    pub project_id: Option<Option<RecordId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub assignee_id: Option<Option<RecordId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_date: Option<Option<Timestamp>>,
}

impl Task {
    /// Stamps `completed_at` when the task is completed and not yet stamped.
    fn settle_completed_at(&mut self, now: Timestamp) {
        if self.status == TaskStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }
}

impl Record for Task {
    type New = NewTask;
    type Patch = TaskPatch;

    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewTask, now: Timestamp) -> Self {
        let mut task = Self {
            id,
            title: new.title,
            description: new.description,
            status: new.status.unwrap_or_default(),
            priority: new.priority.unwrap_or_default(),
            project_id: new.project_id,
            assignee_id: new.assignee_id,
            due_date: new.due_date,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        task.settle_completed_at(now);
        task
    }

    fn apply_patch(&mut self, patch: TaskPatch, now: Timestamp) {
        merge(&mut self.title, patch.title);
        merge_nullable(&mut self.description, patch.description);
        merge(&mut self.status, patch.status);
        merge(&mut self.priority, patch.priority);
        merge_nullable(&mut self.project_id, patch.project_id);
        merge_nullable(&mut self.assignee_id, patch.assignee_id);
        merge_nullable(&mut self.due_date, patch.due_date);
        self.updated_at = now;
        self.settle_completed_at(now);
    }
}
