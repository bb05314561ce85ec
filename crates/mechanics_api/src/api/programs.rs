use super::{create, get_one, list, remove, update};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::{Program, Project};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/programs", get(list::<Program>).post(create::<Program>))
        .route(
            "/api/programs/:id",
            get(get_one::<Program>)
                .put(update::<Program>)
                .delete(remove::<Program>),
        )
        .route("/api/programs/:id/projects", get(projects_of_program))
}

/// Unknown program ids yield an empty list.
async fn projects_of_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Project>> {
    Json(state.store.projects_by_program(&id))
}
