use crate::errors::AppError;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

const SPECIAL: &str = "@#$%^&+=*!";

/// Registration/change-password policy: 8-64 chars, at least one uppercase,
/// one lowercase, one digit and one special character, no whitespace.
pub fn validate_password(plain: &str) -> Result<(), AppError> {
    let len = plain.chars().count();
    if !(8..=64).contains(&len) {
        return Err(AppError::Validation(
            "password must be 8-64 characters".into(),
        ));
    }
    if plain.chars().any(char::is_whitespace) {
        return Err(AppError::Validation(
            "password must not contain whitespace".into(),
        ));
    }
    let has_upper = plain.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = plain.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = plain.chars().any(|c| c.is_ascii_digit());
    let has_special = plain.chars().any(|c| SPECIAL.contains(c));
    if !(has_upper && has_lower && has_digit && has_special) {
        return Err(AppError::Validation(
            "password must contain an uppercase letter, a lowercase letter, a digit and a special character".into(),
        ));
    }
    Ok(())
}

pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("argon2 hash: {e}")))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("bad password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("Secret1!").unwrap();
        assert!(verify_password("Secret1!", &hash).unwrap());
        assert!(!verify_password("Secret1?", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("Secret1!").unwrap();
        let b = hash_password("Secret1!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn policy_accepts_conforming_password() {
        assert!(validate_password("Secret1!").is_ok());
    }

    #[test]
    fn policy_rejects_weak_passwords() {
        assert!(validate_password("short1!").is_err());
        assert!(validate_password("nouppercase1!").is_err());
        assert!(validate_password("NOLOWERCASE1!").is_err());
        assert!(validate_password("NoDigits!!").is_err());
        assert!(validate_password("NoSpecial11").is_err());
        assert!(validate_password("Has Space1!").is_err());
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(verify_password("Secret1!", "not-a-phc-string").is_err());
    }
}
