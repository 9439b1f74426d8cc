use chrono::{Duration, Utc};
use mongodb::bson::{doc, DateTime as BsonDateTime};
use serde::Serialize;
use uuid::Uuid;

use crate::{errors::AppError, models::refresh_token::RefreshTokenDoc, state::AppState};

#[derive(Debug, Clone, Serialize)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl IssuedTokens {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Opaque refresh-token value; random, never derived from user data.
fn new_token_value() -> String {
    Uuid::new_v4().to_string()
}

fn refresh_expiry(ttl_seconds: i64) -> BsonDateTime {
    BsonDateTime::from_millis((Utc::now() + Duration::seconds(ttl_seconds)).timestamp_millis())
}

/// Persists a fresh active refresh token for `username` and returns it.
pub async fn create_refresh_token(
    state: &AppState,
    username: &str,
) -> Result<RefreshTokenDoc, AppError> {
    let record = RefreshTokenDoc::new(
        username.to_string(),
        new_token_value(),
        refresh_expiry(state.cfg.jwt_refresh_ttl_seconds),
    );
    state.refresh_tokens.insert_one(&record).await?;
    Ok(record)
}

/// Plain lookup; absent is an expected outcome, not an error.
pub async fn find_refresh_token(
    state: &AppState,
    token: &str,
) -> Result<Option<RefreshTokenDoc>, AppError> {
    Ok(state.refresh_tokens.find_one(doc! { "token": token }).await?)
}

/// Returns the live record for `token`, or `Unauthorized` if the token is
/// unknown, revoked or expired. The sub-causes are logged but deliberately
/// not visible in the result.
pub async fn verify_refresh_token(
    state: &AppState,
    token: &str,
) -> Result<RefreshTokenDoc, AppError> {
    let Some(record) = find_refresh_token(state, token).await? else {
        tracing::debug!("unknown refresh token presented");
        return Err(AppError::Unauthorized);
    };

    if record.revoked {
        // An already-rotated token coming back is the reuse-detection signal.
        tracing::warn!(
            username = %record.username,
            replaced = record.replaced_by_token.is_some(),
            "revoked refresh token presented"
        );
        return Err(AppError::Unauthorized);
    }
    if !record.is_active(BsonDateTime::now()) {
        tracing::debug!(username = %record.username, "expired refresh token presented");
        return Err(AppError::Unauthorized);
    }

    Ok(record)
}

/// Retires `current` and returns its freshly-created successor for the same
/// username. The revoke is a conditional update keyed on `revoked: false`, so
/// of two concurrent rotations of the same record exactly one wins; the loser
/// fails as if the token had already been replayed.
pub async fn rotate_refresh_token(
    state: &AppState,
    current: &RefreshTokenDoc,
) -> Result<RefreshTokenDoc, AppError> {
    let next_value = new_token_value();

    let update = state
        .refresh_tokens
        .update_one(
            doc! { "_id": current.id, "revoked": false },
            doc! { "$set": { "revoked": true, "replaced_by_token": &next_value } },
        )
        .await?;

    if update.matched_count == 0 {
        tracing::warn!(username = %current.username, "refresh token already rotated");
        return Err(AppError::Unauthorized);
    }

    let fresh = RefreshTokenDoc::new(
        current.username.clone(),
        next_value,
        refresh_expiry(state.cfg.jwt_refresh_ttl_seconds),
    );
    state.refresh_tokens.insert_one(&fresh).await?;
    Ok(fresh)
}

/// Marks `token` revoked. Unknown tokens are a silent no-op so that logout
/// never leaks whether a token existed.
pub async fn revoke_refresh_token(state: &AppState, token: &str) -> Result<(), AppError> {
    state
        .refresh_tokens
        .update_one(
            doc! { "token": token },
            doc! { "$set": { "revoked": true } },
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_values_look_like_uuids() {
        let value = new_token_value();
        assert_eq!(value.len(), 36);
        assert_eq!(value.matches('-').count(), 4);
    }

    #[test]
    fn token_values_are_unique() {
        let a = new_token_value();
        let b = new_token_value();
        assert_ne!(a, b);
    }

    #[test]
    fn refresh_expiry_is_in_the_future() {
        let expiry = refresh_expiry(3600);
        assert!(expiry > BsonDateTime::now());
    }
}
