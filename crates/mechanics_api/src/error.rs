//! API error type and its HTTP mapping.
//!
//! | Variant      | Status | Body                                   |
//! |--------------|--------|----------------------------------------|
//! | `NotFound`   | 404    | `{"error": "<Entity> not found"}`      |
//! | `Validation` | 400    | `{"error": [{code, path, message}]}`   |
//! | `Internal`   | 500    | `{"error": "Internal server error"}`   |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use mechanics_core::{
    BlogServiceError, IssueCode, UserServiceError, ValidationIssue, ValidationIssues,
};
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// Entity label, e.g. `"Blog post"`.
    NotFound(&'static str),
    Validation(ValidationIssues),
    /// Detail is logged, never returned to the client.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(entity) => write!(f, "{entity} not found"),
            Self::Validation(issues) => write!(f, "{issues}"),
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(issues) => Some(issues),
            Self::NotFound(_) | Self::Internal(_) => None,
        }
    }
}

impl From<ValidationIssues> for ApiError {
    fn from(value: ValidationIssues) -> Self {
        Self::Validation(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Validation(ValidationIssues::single(ValidationIssue::new(
            IssueCode::InvalidType,
            &[],
            value.body_text(),
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::Validation(ValidationIssues::single(ValidationIssue::new(
            IssueCode::InvalidType,
            &[],
            value.body_text(),
        )))
    }
}

impl From<BlogServiceError> for ApiError {
    fn from(value: BlogServiceError) -> Self {
        match value {
            BlogServiceError::SlugTaken(_) => Self::Validation(ValidationIssues::single(
                ValidationIssue::new(IssueCode::NotUnique, &["slug"], "slug already in use"),
            )),
            BlogServiceError::PostNotFound(_) => Self::NotFound("Blog post"),
        }
    }
}

impl From<UserServiceError> for ApiError {
    fn from(value: UserServiceError) -> Self {
        match value {
            UserServiceError::UsernameTaken(_) => Self::Validation(ValidationIssues::single(
                ValidationIssue::new(IssueCode::NotUnique, &["username"], "username already in use"),
            )),
            UserServiceError::UserNotFound(_) => Self::NotFound("User"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::NotFound(entity) => json!({ "error": format!("{entity} not found") }),
            Self::Validation(issues) => json!({ "error": issues }),
            Self::Internal(detail) => {
                error!(
                    "event=request_failed module=api status=error detail={}",
                    detail
                );
                json!({ "error": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use mechanics_core::{BlogServiceError, UserServiceError};

    #[test]
    fn service_errors_map_to_client_statuses() {
        let slug: ApiError = BlogServiceError::SlugTaken("x".to_string()).into();
        assert_eq!(slug.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = BlogServiceError::PostNotFound("x".to_string()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Blog post not found");

        let user: ApiError = UserServiceError::UsernameTaken("x".to_string()).into();
        assert_eq!(user.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_map_to_500() {
        let internal = ApiError::Internal("lock state lost".to_string());
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "internal error: lock state lost");
    }
}
