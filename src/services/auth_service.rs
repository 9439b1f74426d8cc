use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};

use crate::{
    auth::tokens::{
        create_refresh_token, revoke_refresh_token, rotate_refresh_token, verify_refresh_token,
        IssuedTokens,
    },
    dto::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest},
    errors::AppError,
    models::user::{UserDoc, UserPublic},
    password::{hash_password, validate_password, verify_password},
    state::AppState,
};

/// Checks an email/password pair against the stored user record. Unknown
/// email and wrong password collapse into the same `Unauthorized` so the
/// response cannot be used to enumerate accounts.
async fn verify_credentials(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<UserDoc, AppError> {
    let user = state
        .users
        .find_one(doc! { "email": email })
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }
    Ok(user)
}

pub async fn register(state: &AppState, req: RegisterRequest) -> Result<UserPublic, AppError> {
    let email = req.email.trim().to_lowercase();
    let first_name = req.first_name.trim().to_string();
    let last_name = req.last_name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("a valid email is required".into()));
    }
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AppError::Validation("first and last name required".into()));
    }
    validate_password(&req.password)?;

    if state
        .users
        .find_one(doc! { "email": &email })
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("user already exists".into()));
    }

    let password_hash = hash_password(&req.password)?;
    let now = BsonDateTime::now();

    let user = UserDoc {
        id: ObjectId::new(),
        email,
        password_hash,
        first_name,
        last_name,
        age: req.age,
        gender: req.gender,
        phone: req.phone,
        clinical_story: req.clinical_story.map(|parts| parts.join(";")),
        notes: None,
        created_at: now,
        updated_at: now,
    };

    state.users.insert_one(&user).await?;
    tracing::info!(user_id = %user.id.to_hex(), "registered user");

    Ok(user.into())
}

/// Login: verify credentials, then issue a signed access token and persist a
/// fresh refresh token for the account's email.
pub async fn login(state: &AppState, req: LoginRequest) -> Result<IssuedTokens, AppError> {
    let email = req.email.trim().to_lowercase();
    let user = verify_credentials(state, &email, &req.password).await?;

    let access_token = state
        .keys
        .issue_access_token(&user.email, state.cfg.jwt_access_ttl_seconds)?;
    let refresh = create_refresh_token(state, &user.email).await?;

    Ok(IssuedTokens::bearer(access_token, refresh.token))
}

/// Token refresh with rotation. Any failure along the way (unknown, revoked,
/// expired, lost rotation race) means the caller has to log in again.
pub async fn refresh(state: &AppState, refresh_token: &str) -> Result<IssuedTokens, AppError> {
    let current = verify_refresh_token(state, refresh_token).await?;

    let access_token = state
        .keys
        .issue_access_token(&current.username, state.cfg.jwt_access_ttl_seconds)?;
    let next = rotate_refresh_token(state, &current).await?;

    Ok(IssuedTokens::bearer(access_token, next.token))
}

/// Logout succeeds whether or not the token exists, so the response does not
/// reveal token validity.
pub async fn logout(state: &AppState, refresh_token: &str) -> Result<(), AppError> {
    revoke_refresh_token(state, refresh_token).await
}

pub async fn change_password(
    state: &AppState,
    user_id: ObjectId,
    req: ChangePasswordRequest,
) -> Result<(), AppError> {
    let user = state
        .users
        .find_one(doc! { "_id": user_id })
        .await?
        .ok_or(AppError::NotFound)?;

    if !verify_password(&req.old_password, &user.password_hash)? {
        return Err(AppError::Validation("old password does not match".into()));
    }

    validate_password(&req.new_password)?;
    let password_hash = hash_password(&req.new_password)?;

    state
        .users
        .update_one(
            doc! { "_id": user_id },
            doc! { "$set": { "password_hash": password_hash, "updated_at": BsonDateTime::now() } },
        )
        .await?;

    Ok(())
}
