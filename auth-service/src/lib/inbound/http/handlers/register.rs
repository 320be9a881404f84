use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsBody;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::guards::check_password_length;
use crate::inbound::http::guards::check_username_free;
use crate::inbound::http::router::AppState;

/// `POST /api/auth/register`
///
/// Guard order matters: a taken username is reported before a short
/// password when both apply.
pub async fn register<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Json(body): Json<CredentialsBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let credentials = body
        .try_into_credentials()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    check_username_free(state.auth_service.as_ref(), &credentials).await?;
    check_password_length(&credentials)?;

    state
        .auth_service
        .register_user(credentials)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// Created-user response: id and username only, never the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub username: String,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
        }
    }
}
