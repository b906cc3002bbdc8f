use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use session_auth::{
    UserRole, append_clear_session_cookie, session_token_from_headers, validate_session_token,
};

use super::session::AuthSession;

/// Per-request authentication. Resolves the session cookie into an
/// `AuthSession` in the request extensions and always continues to the next
/// handler; authorization is decided downstream by the guards.
///
/// When the client presented a token that no longer resolves to a live
/// session, a clearing cookie is appended to the response so the stale
/// client state heals itself.
pub async fn authenticate(mut req: Request, next: Next) -> Response {
    let token = match session_token_from_headers(req.headers()) {
        Ok(token) => token.map(str::to_owned),
        Err(e) => {
            // A malformed cookie header is treated as an anonymous request
            tracing::debug!("Unreadable cookie header: {}", e);
            None
        }
    };

    let (identity, presented_token) = match token {
        Some(token) => match validate_session_token(&token).await {
            Ok(Some(authenticated)) => (
                AuthSession {
                    user: Some(authenticated.user),
                    session: Some(authenticated.session),
                },
                true,
            ),
            Ok(None) => (AuthSession::anonymous(), true),
            Err(e) => {
                tracing::error!("Session validation failed: {}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                    .into_response();
            }
        },
        None => (AuthSession::anonymous(), false),
    };

    let stale_cookie = presented_token && identity.session.is_none();
    req.extensions_mut().insert(identity);

    let mut response = next.run(req).await;

    if stale_cookie {
        if let Err(e) = append_clear_session_cookie(response.headers_mut()) {
            tracing::error!("Failed to append clearing cookie: {}", e);
        }
    }

    response
}

/// Authorization guard: reject anonymous requests with 401
pub async fn require_user(req: Request, next: Next) -> Response {
    let authenticated = req
        .extensions()
        .get::<AuthSession>()
        .is_some_and(|auth| auth.user.is_some());

    if !authenticated {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    next.run(req).await
}

/// Authorization guard: reject anything but an admin with 404.
///
/// Not-found rather than forbidden, so the response does not confirm that an
/// admin-only resource exists.
pub async fn require_admin(req: Request, next: Next) -> Response {
    let is_admin = req
        .extensions()
        .get::<AuthSession>()
        .and_then(|auth| auth.user.as_ref())
        .is_some_and(|user| user.role == UserRole::Admin);

    if !is_admin {
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(req).await
}
