use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::{tokens::IssuedTokens, AuthUser},
    dto::auth::{LoginRequest, RefreshRequest, RegisterRequest},
    errors::AppError,
    models::user::UserPublic,
    services::auth_service,
    state::AppState,
};

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserPublic>), AppError> {
    let user = auth_service::register(&state, req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<IssuedTokens>, AppError> {
    let tokens = auth_service::login(&state, req).await?;
    Ok(Json(tokens))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<IssuedTokens>, AppError> {
    let tokens = auth_service::refresh(&state, &req.refresh_token).await?;
    Ok(Json(tokens))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth_service::logout(&state, &req.refresh_token).await?;
    Ok(Json(serde_json::json!({ "message": "Logged out" })))
}
