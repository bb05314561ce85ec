//! Per-entity constraint tables.
//!
//! Field names are the camelCase wire names. Defaults must agree with the
//! `Default` impls of the matching model enums.

use super::{EntitySchema, FieldDefault, FieldKind, FieldSpec};
use crate::model::program::ProgramStatus;
use crate::model::project::{ProjectStatus, PROGRESS_MAX, PROGRESS_MIN};
use crate::model::task::{TaskPriority, TaskStatus};
use crate::model::user::UserRole;

const NAME: FieldKind = FieldKind::Text { min_len: 1 };
const FREE_TEXT: FieldKind = FieldKind::Text { min_len: 0 };
const REFERENCE: FieldKind = FieldKind::Text { min_len: 1 };

pub const PROGRAM: EntitySchema = EntitySchema {
    entity: "program",
    fields: &[
        FieldSpec::required("name", NAME),
        FieldSpec::optional("description", FREE_TEXT),
        FieldSpec::defaulted(
            "status",
            FieldKind::Choice(ProgramStatus::ALL),
            FieldDefault::Text("active"),
        ),
        FieldSpec::optional("startDate", FieldKind::Timestamp),
        FieldSpec::optional("endDate", FieldKind::Timestamp),
        FieldSpec::optional("managerId", REFERENCE),
    ],
};

pub const PROJECT: EntitySchema = EntitySchema {
    entity: "project",
    fields: &[
        FieldSpec::required("name", NAME),
        FieldSpec::optional("description", FREE_TEXT),
        FieldSpec::defaulted(
            "status",
            FieldKind::Choice(ProjectStatus::ALL),
            FieldDefault::Text("planning"),
        ),
        FieldSpec::defaulted(
            "progress",
            FieldKind::Integer {
                min: PROGRESS_MIN,
                max: PROGRESS_MAX,
            },
            FieldDefault::Integer(0),
        ),
        FieldSpec::optional("programId", REFERENCE),
        FieldSpec::optional("managerId", REFERENCE),
        FieldSpec::optional("startDate", FieldKind::Timestamp),
        FieldSpec::optional("endDate", FieldKind::Timestamp),
    ],
};

pub const TASK: EntitySchema = EntitySchema {
    entity: "task",
    fields: &[
        FieldSpec::required("title", NAME),
        FieldSpec::optional("description", FREE_TEXT),
        FieldSpec::defaulted(
            "status",
            FieldKind::Choice(TaskStatus::ALL),
            FieldDefault::Text("todo"),
        ),
        FieldSpec::defaulted(
            "priority",
            FieldKind::Choice(TaskPriority::ALL),
            FieldDefault::Text("medium"),
        ),
        FieldSpec::optional("projectId", REFERENCE),
        FieldSpec::optional("assigneeId", REFERENCE),
        FieldSpec::optional("dueDate", FieldKind::Timestamp),
    ],
};

pub const BLOG_POST: EntitySchema = EntitySchema {
    entity: "blog_post",
    fields: &[
        FieldSpec::required("title", NAME),
        FieldSpec::required("slug", FieldKind::Slug),
        FieldSpec::required("content", NAME),
        FieldSpec::optional("excerpt", FREE_TEXT),
        FieldSpec::optional("featuredImage", FieldKind::Url),
        FieldSpec::required("category", NAME),
        FieldSpec::defaulted("tags", FieldKind::TextList, FieldDefault::EmptyList),
        FieldSpec::optional("authorId", REFERENCE),
        FieldSpec::defaulted("published", FieldKind::Boolean, FieldDefault::Boolean(false)),
    ],
};

pub const COMMENT: EntitySchema = EntitySchema {
    entity: "comment",
    fields: &[
        FieldSpec::required("content", NAME),
        FieldSpec::required("postId", REFERENCE),
        FieldSpec::optional("authorId", REFERENCE),
        FieldSpec::optional("parentId", REFERENCE),
    ],
};

pub const USER: EntitySchema = EntitySchema {
    entity: "user",
    fields: &[
        FieldSpec::required("username", FieldKind::Text { min_len: 3 }),
        FieldSpec::required("password", FieldKind::Text { min_len: 6 }),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("fullName", NAME),
        FieldSpec::defaulted(
            "role",
            FieldKind::Choice(UserRole::ALL),
            FieldDefault::Text("user"),
        ),
    ],
};

pub const MEDIA: EntitySchema = EntitySchema {
    entity: "media",
    fields: &[
        FieldSpec::required("url", FieldKind::Url),
        FieldSpec::required("type", NAME),
        FieldSpec::optional("metadata", FieldKind::Json),
        FieldSpec::optional("uploaderId", REFERENCE),
    ],
};
