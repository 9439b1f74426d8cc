use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{errors::AppError, state::AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Expiry and tamper are different operational signals, so they stay distinct
/// here even though both surface to clients as a uniform 401.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// HS256 key pair derived once from the configured secret and carried in
/// `AppState`; tests construct their own from a throwaway secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a short-lived access token for `subject`, expiring at
    /// `now + ttl_seconds`.
    pub fn issue_access_token(&self, subject: &str, ttl_seconds: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("jwt encode: {e}")))
    }

    /// Verifies signature and expiry and returns the claims. The expiry check
    /// is done here rather than by the decoder so that the boundary instant
    /// counts as expired and no leeway is applied.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;
        if Utc::now().timestamp_millis() >= data.claims.exp * 1000 {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}

/// Request gate: extracts the `Authorization: Bearer` header and validates the
/// access token before a protected handler runs. Routes whose handlers do not
/// take this extractor (register, login, refresh, health) bypass the check.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::Unauthorized)?;

        match state.keys.decode_access_token(bearer.token()) {
            Ok(claims) => Ok(Self(claims)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected bearer token");
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret")
    }

    #[test]
    fn issued_token_has_three_segments() {
        let token = keys().issue_access_token("a@x.com", 900).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn issue_then_decode_returns_subject() {
        let keys = keys();
        let token = keys.issue_access_token("a@x.com", 900).unwrap();
        let claims = keys.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn zero_ttl_token_is_already_expired() {
        let keys = keys();
        let token = keys.issue_access_token("a@x.com", 0).unwrap();
        assert!(matches!(
            keys.decode_access_token(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn past_expiry_fails_as_expired_not_invalid() {
        let keys = keys();
        let token = keys.issue_access_token("a@x.com", -60).unwrap();
        assert!(matches!(
            keys.decode_access_token(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn foreign_secret_fails_as_invalid() {
        let token = JwtKeys::new("other-secret")
            .issue_access_token("a@x.com", 900)
            .unwrap();
        assert!(matches!(
            keys().decode_access_token(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn tampered_payload_fails_as_invalid() {
        let keys = keys();
        let token = keys.issue_access_token("a@x.com", 900).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let swapped = JwtKeys::new("test-secret")
            .issue_access_token("b@x.com", 900)
            .unwrap();
        let other_payload = swapped.split('.').nth(1).unwrap().to_string();
        parts[1] = &other_payload;
        let forged = parts.join(".");
        assert!(matches!(
            keys.decode_access_token(&forged),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn garbage_fails_as_invalid() {
        assert!(matches!(
            keys().decode_access_token("not-a-jwt"),
            Err(TokenError::Invalid)
        ));
    }
}
