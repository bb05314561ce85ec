//! User routes. Responses never include `password`.

use super::{get_one, list, remove, JsonBody};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::schema::tables::USER;
use mechanics_core::{parse_insert, parse_patch, NewUser, User, UserPatch, UserService};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list::<User>).post(create_user))
        .route(
            "/api/users/:id",
            get(get_one::<User>)
                .put(update_user)
                .delete(remove::<User>),
        )
        .route("/api/users/by-username/:username", get(user_by_username))
}

async fn user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<User>> {
    UserService::new(&state.store)
        .get_by_username(&username)
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

async fn create_user(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(body) = body?;
    let new: NewUser = parse_insert(&USER, &body)?;
    let created = UserService::new(&state.store).create_user(new)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> ApiResult<Json<User>> {
    let Json(body) = body?;
    let patch: UserPatch = parse_patch(&USER, &body)?;
    let updated = UserService::new(&state.store).update_user(&id, patch)?;
    Ok(Json(updated))
}
