//! Credential guard predicates.
//!
//! Each guard inspects the candidate [`Credentials`] and either lets
//! the pipeline continue (`Ok`) or halts it with a terminal
//! [`ApiError`]. The handlers invoke them explicitly, in order, before
//! doing any work; `check_username_exists` additionally resolves the
//! user once so the login handler does not repeat the lookup.
//!
//! Unexpected repository failures are not turned into guard verdicts;
//! they propagate as `ApiError::InternalServerError` via the
//! `From<UserError>` conversion.

use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;

pub const USERNAME_TAKEN: &str = "Username taken";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const PASSWORD_TOO_SHORT: &str = "Password length must be longer than 3 chars";

/// Passwords must be strictly longer than this many characters.
const MIN_PASSWORD_CHARS: usize = 3;

/// Halt with 422 when the candidate username is already registered.
pub async fn check_username_free<S: AuthServicePort>(
    service: &S,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    match service.find_user_by_username(&credentials.username).await? {
        Some(_) => Err(ApiError::UnprocessableEntity(USERNAME_TAKEN.to_string())),
        None => Ok(()),
    }
}

/// Resolve the candidate username to a registered user.
///
/// Halts with 401 when the username is unknown; on success the found
/// user is handed back to the caller as the typed per-request context.
/// The halt message deliberately matches the wrong-password response so
/// the two failure modes are indistinguishable to a client.
pub async fn check_username_exists<S: AuthServicePort>(
    service: &S,
    credentials: &Credentials,
) -> Result<User, ApiError> {
    service
        .find_user_by_username(&credentials.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))
}

/// Halt with 422 when the candidate password is 3 characters or shorter.
pub fn check_password_length(credentials: &Credentials) -> Result<(), ApiError> {
    if credentials.password.chars().count() > MIN_PASSWORD_CHARS {
        Ok(())
    } else {
        Err(ApiError::UnprocessableEntity(PASSWORD_TOO_SHORT.to_string()))
    }
}
