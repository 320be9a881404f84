use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tower_sessions::Session;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsBody;
use super::MessageData;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::guards::check_username_exists;
use crate::inbound::http::guards::INVALID_CREDENTIALS;
use crate::inbound::http::router::AppState;
use crate::inbound::http::session::SessionUser;
use crate::inbound::http::session::SESSION_USER_KEY;

/// `POST /api/auth/login`
///
/// A malformed username, an unknown username, and a wrong password all
/// produce the same 401 body.
pub async fn login<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    session: Session,
    Json(body): Json<CredentialsBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let credentials = body
        .try_into_credentials()
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let user = check_username_exists(state.auth_service.as_ref(), &credentials).await?;

    let password_valid = state
        .auth_service
        .verify_password(&user, &credentials.password)?;

    if !password_valid {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    // Fresh session id on privilege change, then mark as logged in.
    session.cycle_id().await.map_err(|e| {
        ApiError::InternalServerError(format!("Session cycle failed: {}", e))
    })?;
    session
        .insert(SESSION_USER_KEY, SessionUser::from(&user))
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Session write failed: {}", e)))?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("Welcome {}!", user.username),
        },
    ))
}
