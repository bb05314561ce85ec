//! Route handlers, one module per resource family.
//!
//! Plain CRUD is served by the generic handlers below; resources with
//! uniqueness rules (blog posts, users) route create and update through
//! their core service instead.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mechanics_core::schema::tables;
use mechanics_core::{
    parse_insert, parse_patch, BlogPost, Collection, Comment, EntitySchema, Media, MemoryStore,
    Program, Project, Record, Task, User,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub mod blog_posts;
pub mod comments;
pub mod dashboard;
pub mod media;
pub mod programs;
pub mod projects;
pub mod tasks;
pub mod users;

/// Body extractor result; malformed JSON becomes a 400 instead of axum's
/// plain-text rejection.
pub(crate) type JsonBody = Result<Json<Value>, JsonRejection>;

/// Query extractor result; a rejected query string becomes a JSON 400.
pub(crate) type QueryParams<T> = Result<Query<T>, QueryRejection>;

/// Query filter value; `?key=` counts as no filter.
pub(crate) fn filter_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// A record type served over HTTP.
pub(crate) trait Resource: Record + Serialize {
    /// Entity label used in `"<Label> not found"` bodies.
    const LABEL: &'static str;
    const SCHEMA: EntitySchema;

    fn collection(store: &MemoryStore) -> &Collection<Self>;
}

macro_rules! resource {
    ($record:ty, $label:literal, $schema:expr, $accessor:ident) => {
        impl Resource for $record {
            const LABEL: &'static str = $label;
            const SCHEMA: EntitySchema = $schema;

            fn collection(store: &MemoryStore) -> &Collection<Self> {
                store.$accessor()
            }
        }
    };
}

resource!(Program, "Program", tables::PROGRAM, programs);
resource!(Project, "Project", tables::PROJECT, projects);
resource!(Task, "Task", tables::TASK, tasks);
resource!(BlogPost, "Blog post", tables::BLOG_POST, blog_posts);
resource!(Comment, "Comment", tables::COMMENT, comments);
resource!(User, "User", tables::USER, users);
resource!(Media, "Media", tables::MEDIA, media);

pub(crate) async fn list<R: Resource>(State(state): State<AppState>) -> Json<Vec<R>> {
    Json(R::collection(&state.store).list())
}

pub(crate) async fn get_one<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<R>> {
    R::collection(&state.store)
        .get(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(R::LABEL))
}

pub(crate) async fn create<R>(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<(StatusCode, Json<R>)>
where
    R: Resource,
    R::New: DeserializeOwned,
{
    let Json(body) = body?;
    let new = parse_insert::<R::New>(&R::SCHEMA, &body)?;
    let created = R::collection(&state.store).create(new);
    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) async fn update<R>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> ApiResult<Json<R>>
where
    R: Resource,
    R::Patch: DeserializeOwned,
{
    let Json(body) = body?;
    let patch = parse_patch::<R::Patch>(&R::SCHEMA, &body)?;
    R::collection(&state.store)
        .update(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound(R::LABEL))
}

pub(crate) async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if R::collection(&state.store).delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(R::LABEL))
    }
}
