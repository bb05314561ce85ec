use super::{create, get_one, list, remove, update};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use mechanics_core::Media;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/media", get(list::<Media>).post(create::<Media>))
        .route(
            "/api/media/:id",
            get(get_one::<Media>)
                .put(update::<Media>)
                .delete(remove::<Media>),
        )
}
