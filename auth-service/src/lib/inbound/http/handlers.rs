use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::errors::UsernameError;

pub mod login;
pub mod logout;
pub mod register;

use super::guards::USERNAME_TAKEN;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Terminal error response for the request pipeline.
///
/// Guard predicates and handlers halt with one of these; infrastructure
/// failures all funnel into `InternalServerError` so clients never see
/// store or session internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(MessageData { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            // A duplicate insert that slipped past the pre-insert guard
            // still reads as a validation failure to the client.
            UserError::UsernameAlreadyExists(_) => {
                ApiError::UnprocessableEntity(USERNAME_TAKEN.to_string())
            }
            UserError::InvalidUsername(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Plain `{"message": ...}` body used by every non-register response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

/// HTTP request body shared by register and login (raw JSON).
///
/// The password field may be absent or null; it becomes the empty
/// candidate so the length guard, not the JSON extractor, produces
/// the halt response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsBody {
    username: String,
    #[serde(default)]
    password: Option<String>,
}

impl CredentialsBody {
    /// Parse the raw body into the typed candidate credentials that
    /// the guard predicates and handlers share.
    pub fn try_into_credentials(self) -> Result<Credentials, UsernameError> {
        let username = Username::new(self.username)?;
        Ok(Credentials::new(username, self.password.unwrap_or_default()))
    }
}
