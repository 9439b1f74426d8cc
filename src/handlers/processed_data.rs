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
    dto::measurements::ProcessedDataCreateRequest,
    errors::AppError,
    handlers::parse_object_id,
    models::processed_data::{ProcessedDataDoc, ProcessedDataPublic},
    state::AppState,
};

pub async fn create_processed_data(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(req): Json<ProcessedDataCreateRequest>,
) -> Result<(StatusCode, Json<ProcessedDataPublic>), AppError> {
    let user_id = parse_object_id(&req.user_id)?;

    let record = ProcessedDataDoc {
        id: ObjectId::new(),
        measurement_id: req.measurement_id,
        user_id,
        measurement_time: BsonDateTime::from_millis(req.measurement_time.timestamp_millis()),
        rmssd: req.rmssd,
        sdnn: req.sdnn,
        pnn_50: req.pnn_50,
        heart_beats: req.heart_beats,
        min_hr: req.min_hr,
        max_hr: req.max_hr,
        gvi: req.gvi,
        dynamic_a: req.dynamic_a,
        dynamic_b: req.dynamic_b,
        tp: req.tp,
        ulf: req.ulf,
        vlf: req.vlf,
        lf: req.lf,
        hf: req.hf,
        tp_night: req.tp_night,
        ulf_night: req.ulf_night,
        vlf_night: req.vlf_night,
        lf_night: req.lf_night,
        hf_night: req.hf_night,
        pnn_50_night: req.pnn_50_night,
        sdnn_night: req.sdnn_night,
        rmssd_night: req.rmssd_night,
        stress: req.stress,
        stress_percentage: req.stress_percentage,
        health_state: req.health_state,
        health_state_percentage: req.health_state_percentage,
        biological_age: req.biological_age,
        biological_age_percentage: req.biological_age_percentage,
        burnout_resistance: req.burnout_resistance,
        burnout_resistance_percentage: req.burnout_resistance_percentage,
        performance_potential: req.performance_potential,
        performance_potential_percentage: req.performance_potential_percentage,
        created_at: BsonDateTime::now(),
    };
    state.processed_data.insert_one(&record).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn get_processed_data(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ProcessedDataPublic>, AppError> {
    let id = parse_object_id(&id)?;
    let record = state
        .processed_data
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(record.into()))
}

pub async fn get_processed_data_by_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProcessedDataPublic>>, AppError> {
    let user_id = parse_object_id(&user_id)?;
    let records: Vec<ProcessedDataDoc> = state
        .processed_data
        .find(doc! { "user_id": user_id })
        .sort(doc! { "measurement_time": -1 })
        .await?
        .try_collect()
        .await?;
    Ok(Json(
        records.into_iter().map(ProcessedDataPublic::from).collect(),
    ))
}

pub async fn delete_processed_data(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state.processed_data.delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(
        serde_json::json!({ "message": "Processed data deleted" }),
    ))
}
