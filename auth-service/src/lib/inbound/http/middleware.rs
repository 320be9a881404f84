use axum::extract::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use tower_sessions::Session;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::session::SessionUser;
use crate::inbound::http::session::SESSION_USER_KEY;

/// Halt message for unauthenticated requests to guarded routes.
pub const NOT_LOGGED_IN: &str = "You shall not pass!";

/// Middleware guarding routes that require an authenticated session.
///
/// Passes the request on only when the session holds a [`SessionUser`];
/// otherwise halts with 401 before the handler runs. Session store
/// failures surface as 500, not as an authentication verdict.
pub async fn restricted(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let user: Option<SessionUser> = session.get(SESSION_USER_KEY).await.map_err(|e| {
        ApiError::InternalServerError(format!("Session load failed: {}", e)).into_response()
    })?;

    match user {
        Some(user) => {
            tracing::debug!(user_id = %user.id, username = %user.username, "Session authenticated");
            Ok(next.run(request).await)
        }
        None => Err(ApiError::Unauthorized(NOT_LOGGED_IN.to_string()).into_response()),
    }
}
