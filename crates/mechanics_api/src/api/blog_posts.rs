//! Blog post routes. Create and update go through `BlogService` so slug
//! uniqueness holds; a create body without `slug` gets one derived from the
//! title.

use super::{get_one, remove, JsonBody, QueryParams};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::schema::tables::BLOG_POST;
use mechanics_core::{
    fill_missing_slug, parse_insert, parse_patch, BlogPost, BlogPostPatch, BlogService, Comment,
    NewBlogPost,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct BlogPostFilter {
    /// Only the exact value `true` restricts the list to published posts.
    pub published: Option<String>,
}

impl BlogPostFilter {
    fn published_only(&self) -> bool {
        self.published.as_deref() == Some("true")
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/blog-posts", get(list_posts).post(create_post))
        .route(
            "/api/blog-posts/:id",
            get(get_one::<BlogPost>)
                .put(update_post)
                .delete(remove::<BlogPost>),
        )
        .route("/api/blog-posts/slug/:slug", get(post_by_slug))
        .route("/api/blog-posts/:id/comments", get(comments_of_post))
}

async fn list_posts(
    State(state): State<AppState>,
    query: QueryParams<BlogPostFilter>,
) -> ApiResult<Json<Vec<BlogPost>>> {
    let Query(filter) = query?;
    Ok(Json(
        BlogService::new(&state.store).list_posts(filter.published_only()),
    ))
}

async fn post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    BlogService::new(&state.store)
        .get_by_slug(&slug)
        .map(Json)
        .ok_or(ApiError::NotFound("Blog post"))
}

async fn comments_of_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Comment>> {
    Json(BlogService::new(&state.store).comments_for(&id))
}

async fn create_post(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    let Json(mut body) = body?;
    fill_missing_slug(&mut body);
    let new: NewBlogPost = parse_insert(&BLOG_POST, &body)?;
    let created = BlogService::new(&state.store).create_post(new)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> ApiResult<Json<BlogPost>> {
    let Json(body) = body?;
    let patch: BlogPostPatch = parse_patch(&BLOG_POST, &body)?;
    let updated = BlogService::new(&state.store).update_post(&id, patch)?;
    Ok(Json(updated))
}
