//! Core domain logic for the Project Mechanics PMO dashboard and blog.
//! This crate is the single source of truth for record and derived-field
//! invariants; the HTTP layer only translates requests into these calls.

pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::blog_post::{BlogPost, BlogPostPatch, NewBlogPost};
pub use model::comment::{Comment, CommentPatch, NewComment};
pub use model::media::{Media, MediaPatch, NewMedia};
pub use model::program::{NewProgram, Program, ProgramPatch, ProgramStatus};
pub use model::project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use model::task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::user::{NewUser, User, UserPatch, UserRole};
pub use model::{Record, RecordId, Timestamp};
pub use repo::collection::{Collection, UpdateOutcome};
pub use repo::memory_store::MemoryStore;
pub use schema::{
    parse_insert, parse_patch, validate, EntitySchema, IssueCode, ValidationIssue,
    ValidationIssues, ValidationMode,
};
pub use seed::{seed_demo_data, SeedReport};
pub use service::blog_service::{fill_missing_slug, slugify, BlogService, BlogServiceError};
pub use service::dashboard_service::{DashboardService, DashboardSummary};
pub use service::user_service::{UserService, UserServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
