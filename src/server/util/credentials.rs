//! Credential validation, password hashing and generated passwords.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use validator::{ValidateLength, ValidationError};

use crate::server::error::{roster::RosterError, AppError};

/// Username rule applied on top of the 2 to 20 length bound: ASCII letters and digits only.
pub fn alphanumeric_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("username"))
    }
}

/// Password rule applied on top of the 8 character minimum: a lowercase letter, an
/// uppercase letter, a digit and a symbol.
pub fn password_classes(password: &str) -> Result<(), ValidationError> {
    let has_classes = password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if has_classes {
        Ok(())
    } else {
        Err(ValidationError::new("password"))
    }
}

pub fn is_valid_username(username: &str) -> bool {
    username.validate_length(Some(2), Some(20), None) && alphanumeric_username(username).is_ok()
}

pub fn is_strong_password(password: &str) -> bool {
    password.validate_length(Some(8), None, None) && password_classes(password).is_ok()
}

pub fn validate_username(username: &str) -> Result<(), AppError> {
    if is_valid_username(username) {
        Ok(())
    } else {
        Err(RosterError::InvalidUsername.into())
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if is_strong_password(password) {
        Ok(())
    } else {
        Err(RosterError::WeakPassword.into())
    }
}

/// Hashes a password into an argon2id PHC string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

/// Checks a password against a stored PHC string.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(hash) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

/// Generates a random password that passes [`is_strong_password`].
///
/// Draws from a charset containing every required class and retries until the
/// policy is met.
pub fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789\
                             !@#$%^&*-_=+?";
    const LENGTH: usize = 16;

    let mut rng = rand::rng();

    loop {
        let candidate: String = (0..LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        if is_strong_password(&candidate) {
            return candidate;
        }
    }
}
