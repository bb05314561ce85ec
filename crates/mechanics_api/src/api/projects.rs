use super::{create, filter_value, get_one, remove, update, QueryParams};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::{Project, Task};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    pub program_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create::<Project>))
        .route(
            "/api/projects/:id",
            get(get_one::<Project>)
                .put(update::<Project>)
                .delete(remove::<Project>),
        )
        .route("/api/projects/:id/tasks", get(tasks_of_project))
}

async fn list_projects(
    State(state): State<AppState>,
    query: QueryParams<ProjectFilter>,
) -> ApiResult<Json<Vec<Project>>> {
    let Query(filter) = query?;
    let projects = match filter_value(&filter.program_id) {
        Some(program_id) => state.store.projects_by_program(program_id),
        None => state.store.projects().list(),
    };
    Ok(Json(projects))
}

async fn tasks_of_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Task>> {
    Json(state.store.tasks_by_project(&id))
}
