use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Db(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::Validation(s) => (StatusCode::BAD_REQUEST, s.as_str()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid credentials"),
            AppError::Conflict(s) => (StatusCode::CONFLICT, s.as_str()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            AppError::Db(detail) => {
                tracing::error!(%detail, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "database error")
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_surface_as_401() {
        let resp = AppError::Unauthorized.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn store_failures_surface_as_500_without_detail() {
        let resp = AppError::Db("connection reset by peer".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_email_surfaces_as_409() {
        let resp = AppError::Conflict("user already exists".into()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
