use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time;
use tower_sessions::Expiry;
use tower_sessions::MemoryStore;
use tower_sessions::SessionManagerLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::middleware::restricted;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::AuthService;

pub struct AppState<UR>
where
    UR: UserRepository,
{
    pub auth_service: Arc<AuthService<UR>>,
}

// Manual impl: deriving Clone would demand UR: Clone, which the Arc
// does not need.
impl<UR> Clone for AppState<UR>
where
    UR: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

pub fn create_router<UR>(
    auth_service: Arc<AuthService<UR>>,
    session_ttl_minutes: i64,
) -> Router
where
    UR: UserRepository,
{
    let state = AppState { auth_service };

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            session_ttl_minutes,
        )));

    let public_routes = Router::new()
        .route("/api/auth/register", post(register::<UR>))
        .route("/api/auth/login", post(login::<UR>));

    let protected_routes = Router::new()
        .route("/api/auth/logout", get(logout))
        .route_layer(middleware::from_fn(restricted));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(session_layer)
        .with_state(state)
}
