//! Router assembly and cross-cutting layers.
//!
//! # Invariants
//! - Every request produces exactly one `http_request` log event.
//! - A panicking handler yields a 500 with a generic JSON body; the process
//!   keeps serving.

use crate::api::{blog_posts, comments, dashboard, media, programs, projects, tasks, users};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use log::{info, warn};
use mechanics_core::MemoryStore;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;

/// Builds the full API router over `store`.
pub fn build_router(store: Arc<MemoryStore>) -> Router {
    let routes = Router::new()
        .merge(programs::routes())
        .merge(projects::routes())
        .merge(tasks::routes())
        .merge(blog_posts::routes())
        .merge(comments::routes())
        .merge(users::routes())
        .merge(media::routes())
        .merge(dashboard::routes())
        .with_state(AppState::new(store));
    with_layers(routes)
}

/// Wraps `routes` in request logging and panic recovery.
pub fn with_layers(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(log_requests))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let code = response.status();
    let duration_ms = started.elapsed().as_millis();
    if code.is_server_error() {
        warn!(
            "event=http_request module=api status=error method={} path={} http_status={} duration_ms={}",
            method,
            path,
            code.as_u16(),
            duration_ms
        );
    } else {
        info!(
            "event=http_request module=api status=ok method={} path={} http_status={} duration_ms={}",
            method,
            path,
            code.as_u16(),
            duration_ms
        );
    }
    response
}

// The process panic hook logs the sanitized payload.
fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".to_string()).into_response()
}
