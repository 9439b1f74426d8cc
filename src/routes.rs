use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::{
    handlers::{activities, auth, health, model_outputs, processed_data, raw_data, users},
    state::AppState,
};

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public: registration, login, refresh and the health probe. Every
        // other route validates a bearer token via the AuthUser extractor.
        .route("/api/v1/user/register", post(auth::register))
        .route("/api/v1/user/login", post(auth::login))
        .route("/api/v1/user/refresh", post(auth::refresh))
        .route("/api/v1/health", get(health::health))
        .route("/api/v1/user/logout", post(auth::logout))
        .route("/api/v1/user", get(users::list_users))
        .route("/api/v1/user/by-email", get(users::get_user_by_email))
        .route(
            "/api/v1/user/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/v1/user/{id}/age", patch(users::patch_age))
        .route("/api/v1/user/{id}/gender", patch(users::patch_gender))
        .route(
            "/api/v1/user/{id}/clinical-story",
            patch(users::patch_clinical_story),
        )
        .route("/api/v1/user/{id}/notes", patch(users::patch_notes))
        .route(
            "/api/v1/user/{id}/change-password",
            post(users::change_password),
        )
        .route(
            "/api/v1/activities",
            post(activities::create_activity).get(activities::list_activities),
        )
        .route(
            "/api/v1/activities/by-category",
            get(activities::get_activities_by_category),
        )
        .route(
            "/api/v1/activities/user/{user_id}",
            get(activities::get_activities_by_user),
        )
        .route(
            "/api/v1/activities/{id}",
            get(activities::get_activity).delete(activities::delete_activity),
        )
        .route("/api/v1/raw-data", post(raw_data::create_raw_data))
        .route(
            "/api/v1/raw-data/user/{user_id}",
            get(raw_data::get_raw_data_by_user),
        )
        .route(
            "/api/v1/raw-data/{id}",
            get(raw_data::get_raw_data).delete(raw_data::delete_raw_data),
        )
        .route(
            "/api/v1/processed-data",
            post(processed_data::create_processed_data),
        )
        .route(
            "/api/v1/processed-data/user/{user_id}",
            get(processed_data::get_processed_data_by_user),
        )
        .route(
            "/api/v1/processed-data/{id}",
            get(processed_data::get_processed_data).delete(processed_data::delete_processed_data),
        )
        .route(
            "/api/v1/model-outputs",
            post(model_outputs::create_model_output),
        )
        .route(
            "/api/v1/model-outputs/user/{user_id}",
            get(model_outputs::get_model_outputs_by_user),
        )
        .route(
            "/api/v1/model-outputs/{id}",
            get(model_outputs::get_model_output).delete(model_outputs::delete_model_output),
        )
        .with_state(state)
}
