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
    dto::measurements::ModelOutputCreateRequest,
    errors::AppError,
    handlers::parse_object_id,
    models::model_output::{ModelOutputDoc, ModelOutputPublic},
    state::AppState,
};

pub async fn create_model_output(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(req): Json<ModelOutputCreateRequest>,
) -> Result<(StatusCode, Json<ModelOutputPublic>), AppError> {
    let user_id = parse_object_id(&req.user_id)?;

    let record = ModelOutputDoc {
        id: ObjectId::new(),
        measurement_id: req.measurement_id,
        user_id,
        measurement_time: BsonDateTime::from_millis(req.measurement_time.timestamp_millis()),
        biological_age: req.biological_age,
        biological_age_percentage: req.biological_age_percentage,
        burnout_resistance: req.burnout_resistance,
        burnout_resistance_percentage: req.burnout_resistance_percentage,
        performance_potential: req.performance_potential,
        performance_potential_percentage: req.performance_potential_percentage,
        stress: req.stress,
        stress_percentage: req.stress_percentage,
        health_state: req.health_state,
        health_state_percentage: req.health_state_percentage,
        created_at: BsonDateTime::now(),
    };
    state.model_outputs.insert_one(&record).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn get_model_output(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ModelOutputPublic>, AppError> {
    let id = parse_object_id(&id)?;
    let record = state
        .model_outputs
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(record.into()))
}

pub async fn get_model_outputs_by_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ModelOutputPublic>>, AppError> {
    let user_id = parse_object_id(&user_id)?;
    let records: Vec<ModelOutputDoc> = state
        .model_outputs
        .find(doc! { "user_id": user_id })
        .sort(doc! { "measurement_time": -1 })
        .await?
        .try_collect()
        .await?;
    Ok(Json(
        records.into_iter().map(ModelOutputPublic::from).collect(),
    ))
}

pub async fn delete_model_output(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state.model_outputs.delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(serde_json::json!({ "message": "Model output deleted" })))
}
