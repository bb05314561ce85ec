use super::{create, filter_value, get_one, remove, update, QueryParams};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::Comment;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilter {
    pub post_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/comments", get(list_comments).post(create::<Comment>))
        .route(
            "/api/comments/:id",
            get(get_one::<Comment>)
                .put(update::<Comment>)
                .delete(remove::<Comment>),
        )
}

async fn list_comments(
    State(state): State<AppState>,
    query: QueryParams<CommentFilter>,
) -> ApiResult<Json<Vec<Comment>>> {
    let Query(filter) = query?;
    let comments = match filter_value(&filter.post_id) {
        Some(post_id) => state.store.comments_by_post(post_id),
        None => state.store.comments().list(),
    };
    Ok(Json(comments))
}
