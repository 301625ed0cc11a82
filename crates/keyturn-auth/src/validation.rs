//! Registration input validation

use crate::error::AuthError;

/// Maximum allowed username length
pub const MAX_USERNAME_LENGTH: usize = 64;
/// Maximum allowed password length (prevent DoS with very large passwords)
pub const MAX_PASSWORD_LENGTH: usize = 256;
/// Minimum allowed password length
pub const MIN_PASSWORD_LENGTH: usize = 4;

const USERNAME_MESSAGE: &str = "Username can only contain letters and underscores.";
const PASSWORD_MESSAGE: &str =
    "Password must be at least 4 characters long and contain only numbers.";

/// Validate username: one or more ASCII letters or underscores
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.is_empty()
        || !username
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_')
    {
        return Err(AuthError::Validation(USERNAME_MESSAGE.to_string()));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(AuthError::Validation(format!(
            "Username exceeds maximum length of {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    Ok(())
}

/// Validate password: at least four ASCII digits and nothing else
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH || !password.chars().all(|c| c.is_ascii_digit()) {
        return Err(AuthError::Validation(PASSWORD_MESSAGE.to_string()));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AuthError::Validation(format!(
            "Password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}
