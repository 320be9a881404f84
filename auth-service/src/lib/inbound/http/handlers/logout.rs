use axum::http::StatusCode;
use tower_sessions::Session;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;

pub const LOGGED_OUT: &str = "logged out";

/// `GET /api/auth/logout`
///
/// Reached only through the `restricted` middleware, so the session is
/// known to be authenticated. Destroys the server-side record and
/// clears the cookie; a store failure never reads as a successful
/// logout.
pub async fn logout(session: Session) -> Result<ApiSuccess<MessageData>, ApiError> {
    session
        .flush()
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Session destroy failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: LOGGED_OUT.to_string(),
        },
    ))
}
