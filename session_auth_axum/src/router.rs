//! Router and handlers for the authentication endpoints

use axum::{
    Extension, Json, Router,
    extract::Json as ExtractJson,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use session_auth::{
    IssuedSession, append_clear_session_cookie, append_session_cookie, authenticate_user,
    register_user, sign_out,
};

use super::error::IntoResponseError;
use super::session::AuthSession;

/// Create the router for the authentication endpoints
///
/// The endpoints will be available at:
/// - GET  {AUTH_ROUTE_PREFIX}/validate
/// - POST {AUTH_ROUTE_PREFIX}/signup
/// - POST {AUTH_ROUTE_PREFIX}/signin
/// - POST {AUTH_ROUTE_PREFIX}/signout
/// - {AUTH_ROUTE_PREFIX}/admin/... (admin-guarded)
///
/// The `authenticate` middleware must be layered on the application so the
/// handlers can read the request identity.
pub fn session_auth_router() -> Router {
    session_auth_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `session_auth_router()` but without HTTP request tracing
pub fn session_auth_router_no_trace() -> Router {
    Router::new()
        .route("/validate", get(validate))
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/signout", post(signout))
        .nest("/admin", super::admin::router())
}

/// Report the middleware-resolved identity. Always 200; both fields are
/// null for an anonymous request.
async fn validate(Extension(auth): Extension<AuthSession>) -> Json<AuthSession> {
    Json(auth)
}

#[derive(Deserialize)]
struct SignupRequest {
    email: String,
    name: String,
    password: String,
}

#[derive(Deserialize)]
struct SigninRequest {
    email: String,
    password: String,
}

async fn signup(
    ExtractJson(body): ExtractJson<SignupRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let issued = register_user(&body.email, &body.name, &body.password)
        .await
        .into_response_error()?;

    session_response(issued)
}

async fn signin(
    ExtractJson(body): ExtractJson<SigninRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let issued = authenticate_user(&body.email, &body.password)
        .await
        .into_response_error()?;

    session_response(issued)
}

/// Requires an existing session; invalidates it and clears the cookie
async fn signout(
    Extension(auth): Extension<AuthSession>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Some(session) = auth.session else {
        return Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()));
    };

    sign_out(&session.id).await.into_response_error()?;

    let mut headers = HeaderMap::new();
    append_clear_session_cookie(&mut headers)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((headers, Json(json!({ "success": true }))))
}

/// Build the sign-in/sign-up success response: session cookie plus a JSON
/// body confirming the operation.
fn session_response(issued: IssuedSession) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut headers = HeaderMap::new();
    append_session_cookie(&mut headers, &issued.token, &issued.session.expires_at)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((headers, Json(json!({ "success": true }))))
}
