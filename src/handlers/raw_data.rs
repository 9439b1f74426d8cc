use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};

use crate::{
    auth::AuthUser,
    dto::measurements::RawDataCreateRequest,
    errors::AppError,
    handlers::parse_object_id,
    models::raw_data::{RawDataDoc, RawDataPublic},
    state::AppState,
};

pub async fn create_raw_data(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(req): Json<RawDataCreateRequest>,
) -> Result<(StatusCode, Json<RawDataPublic>), AppError> {
    if req.rr_intervals_ms.is_empty() {
        return Err(AppError::Validation(
            "rr_intervals_ms must contain at least one value".into(),
        ));
    }
    if req.measurement_end_time < req.measurement_start_time {
        return Err(AppError::Validation(
            "measurement end must not precede start".into(),
        ));
    }

    let user_id = parse_object_id(&req.user_id)?;
    let activity_id = req.activity_id.as_deref().map(parse_object_id).transpose()?;
    let duration = req.measurement_end_time - req.measurement_start_time;

    let record = RawDataDoc {
        id: ObjectId::new(),
        user_id,
        activity_id,
        measurement_start_time: BsonDateTime::from_millis(
            req.measurement_start_time.timestamp_millis(),
        ),
        measurement_end_time: BsonDateTime::from_millis(
            req.measurement_end_time.timestamp_millis(),
        ),
        device_name: req.device_name,
        rr_intervals_ms: req.rr_intervals_ms,
        raw_duration_seconds: duration.num_milliseconds() as f64 / 1000.0,
        created_at: BsonDateTime::now(),
    };
    state.raw_data.insert_one(&record).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn get_raw_data(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<RawDataPublic>, AppError> {
    let id = parse_object_id(&id)?;
    let record = state
        .raw_data
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(record.into()))
}

pub async fn get_raw_data_by_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RawDataPublic>>, AppError> {
    let user_id = parse_object_id(&user_id)?;
    let records: Vec<RawDataDoc> = state
        .raw_data
        .find(doc! { "user_id": user_id })
        .sort(doc! { "measurement_start_time": -1 })
        .await?
        .try_collect()
        .await?;
    Ok(Json(records.into_iter().map(RawDataPublic::from).collect()))
}

pub async fn delete_raw_data(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state.raw_data.delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(serde_json::json!({ "message": "Raw data deleted" })))
}
