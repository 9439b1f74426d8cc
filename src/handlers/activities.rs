use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    dto::activity::ActivityCreateRequest,
    errors::AppError,
    handlers::parse_object_id,
    models::activity::{ActivityDoc, ActivityPublic},
    state::AppState,
};

pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(req): Json<ActivityCreateRequest>,
) -> Result<(StatusCode, Json<ActivityPublic>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("activity name cannot be empty".into()));
    }
    let user_id = req.user_id.as_deref().map(parse_object_id).transpose()?;

    let now = BsonDateTime::now();
    let activity = ActivityDoc {
        id: ObjectId::new(),
        name: req.name.trim().to_string(),
        category: req.category,
        duration_min: req.duration_min,
        intensity: req.intensity,
        calories: req.calories,
        note: req.note,
        date: req.date,
        time: req.time,
        user_id,
        created_at: now,
        updated_at: now,
    };
    state.activities.insert_one(&activity).await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<Json<Vec<ActivityPublic>>, AppError> {
    let activities: Vec<ActivityDoc> =
        state.activities.find(doc! {}).await?.try_collect().await?;
    Ok(Json(
        activities.into_iter().map(ActivityPublic::from).collect(),
    ))
}

pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ActivityPublic>, AppError> {
    let id = parse_object_id(&id)?;
    let activity = state
        .activities
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(activity.into()))
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

pub async fn get_activities_by_category(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<ActivityPublic>>, AppError> {
    let activities: Vec<ActivityDoc> = state
        .activities
        .find(doc! { "category": &query.category })
        .await?
        .try_collect()
        .await?;
    Ok(Json(
        activities.into_iter().map(ActivityPublic::from).collect(),
    ))
}

pub async fn get_activities_by_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ActivityPublic>>, AppError> {
    let user_id = parse_object_id(&user_id)?;
    let activities: Vec<ActivityDoc> = state
        .activities
        .find(doc! { "user_id": user_id })
        .await?
        .try_collect()
        .await?;
    Ok(Json(
        activities.into_iter().map(ActivityPublic::from).collect(),
    ))
}

pub async fn delete_activity(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state.activities.delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(serde_json::json!({ "message": "Activity deleted" })))
}
