use super::{create, filter_value, get_one, remove, update, QueryParams};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::Task;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    pub project_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create::<Task>))
        .route(
            "/api/tasks/:id",
            get(get_one::<Task>)
                .put(update::<Task>)
                .delete(remove::<Task>),
        )
}

async fn list_tasks(
    State(state): State<AppState>,
    query: QueryParams<TaskFilter>,
) -> ApiResult<Json<Vec<Task>>> {
    let Query(filter) = query?;
    let tasks = match filter_value(&filter.project_id) {
        Some(project_id) => state.store.tasks_by_project(project_id),
        None => state.store.tasks().list(),
    };
    Ok(Json(tasks))
}
