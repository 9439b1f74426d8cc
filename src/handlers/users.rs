use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime as BsonDateTime, Document};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    dto::{auth::ChangePasswordRequest, user::UserUpdateRequest},
    errors::AppError,
    handlers::parse_object_id,
    models::user::{UserDoc, UserPublic},
    services::auth_service,
    state::AppState,
};

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<Json<Vec<UserPublic>>, AppError> {
    let users: Vec<UserDoc> = state.users.find(doc! {}).await?.try_collect().await?;
    Ok(Json(users.into_iter().map(UserPublic::from).collect()))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UserPublic>, AppError> {
    let id = parse_object_id(&id)?;
    let user = state
        .users
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user.into()))
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn get_user_by_email(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UserPublic>, AppError> {
    let email = query.email.trim().to_lowercase();
    let user = state
        .users
        .find_one(doc! { "email": &email })
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user.into()))
}

fn update_document(req: UserUpdateRequest) -> Document {
    let mut set = doc! { "updated_at": BsonDateTime::now() };
    if let Some(age) = req.age {
        set.insert("age", age);
    }
    if let Some(gender) = req.gender {
        set.insert("gender", gender);
    }
    if let Some(phone) = req.phone {
        set.insert("phone", phone);
    }
    if let Some(clinical_story) = req.clinical_story {
        set.insert("clinical_story", clinical_story);
    }
    if let Some(notes) = req.notes {
        set.insert(
            "notes",
            Bson::Array(notes.into_iter().map(Bson::String).collect()),
        );
    }
    set
}

async fn apply_update(
    state: &AppState,
    id: &str,
    req: UserUpdateRequest,
) -> Result<Json<UserPublic>, AppError> {
    let id = parse_object_id(id)?;
    let updated = state
        .users
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_document(req) })
        .return_document(mongodb::options::ReturnDocument::After)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(updated.into()))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UserUpdateRequest>,
) -> Result<Json<UserPublic>, AppError> {
    apply_update(&state, &id, req).await
}

pub async fn patch_age(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(age): Json<i32>,
) -> Result<Json<UserPublic>, AppError> {
    apply_update(
        &state,
        &id,
        UserUpdateRequest {
            age: Some(age),
            ..Default::default()
        },
    )
    .await
}

pub async fn patch_gender(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(gender): Json<String>,
) -> Result<Json<UserPublic>, AppError> {
    apply_update(
        &state,
        &id,
        UserUpdateRequest {
            gender: Some(gender),
            ..Default::default()
        },
    )
    .await
}

pub async fn patch_clinical_story(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(clinical_story): Json<String>,
) -> Result<Json<UserPublic>, AppError> {
    apply_update(
        &state,
        &id,
        UserUpdateRequest {
            clinical_story: Some(clinical_story),
            ..Default::default()
        },
    )
    .await
}

pub async fn patch_notes(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(notes): Json<Vec<String>>,
) -> Result<Json<UserPublic>, AppError> {
    apply_update(
        &state,
        &id,
        UserUpdateRequest {
            notes: Some(notes),
            ..Default::default()
        },
    )
    .await
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    let result = state.users.delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(serde_json::json!({ "message": "User deleted" })))
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_object_id(&id)?;
    auth_service::change_password(&state, id, req).await?;
    Ok(Json(serde_json::json!({ "message": "Password changed" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_document_skips_absent_fields() {
        let set = update_document(UserUpdateRequest {
            age: Some(30),
            ..Default::default()
        });
        assert!(set.contains_key("age"));
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("gender"));
        assert!(!set.contains_key("notes"));
    }

    #[test]
    fn update_document_carries_all_given_fields() {
        let set = update_document(UserUpdateRequest {
            age: Some(30),
            gender: Some("f".into()),
            phone: Some("555".into()),
            clinical_story: Some("none".into()),
            notes: Some(vec!["a".into(), "b".into()]),
        });
        for key in ["age", "gender", "phone", "clinical_story", "notes"] {
            assert!(set.contains_key(key), "missing {key}");
        }
    }
}
