//! Admin-only endpoints, guarded by the `require_admin` middleware

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::delete,
};
use serde_json::json;

use session_auth::{delete_user_account, invalidate_session};

use super::error::IntoResponseError;
use super::middleware::require_admin;

pub(super) fn router() -> Router {
    Router::new()
        .route("/users/{user_id}", delete(delete_user))
        .route("/sessions/{session_id}", delete(delete_session))
        .layer(from_fn(require_admin))
}

/// Delete a user account and revoke all of its sessions
async fn delete_user(
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    delete_user_account(&user_id).await.into_response_error()?;
    Ok(Json(json!({ "success": true })))
}

/// Revoke a single session by its identifier
async fn delete_session(
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    invalidate_session(&session_id)
        .await
        .into_response_error()?;
    Ok(Json(json!({ "success": true })))
}
