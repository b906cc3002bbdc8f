use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use http::{StatusCode, request::Parts};
use serde::Serialize;

use session_auth::{Session, SessionUser, UserRole};

/// Request-scoped identity computed once by the `authenticate` middleware.
///
/// Immutable after insertion: handlers and guards read it from request
/// extensions, they never mutate shared state. Both fields are `None` for an
/// anonymous request.
#[derive(Clone, Debug, Serialize)]
pub struct AuthSession {
    pub user: Option<SessionUser>,
    pub session: Option<Session>,
}

impl AuthSession {
    pub(crate) fn anonymous() -> Self {
        Self {
            user: None,
            session: None,
        }
    }
}

/// Authenticated user information, available as an axum extractor.
///
/// Extraction reads the identity the `authenticate` middleware placed in the
/// request extensions and rejects with 401 when the request is anonymous.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use session_auth_axum::AuthUser;
///
/// async fn protected_handler(user: AuthUser) -> String {
///     format!("Hello, {}!", user.name)
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Unique user identifier
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Authorization role
    pub role: UserRole,
    /// When the user account was created
    pub created_at: DateTime<Utc>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<SessionUser> for AuthUser {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

fn auth_session_from_parts(parts: &Parts) -> Result<AuthSession, Response> {
    parts.extensions.get::<AuthSession>().cloned().ok_or_else(|| {
        tracing::error!("AuthSession missing: authenticate middleware not installed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Authentication middleware not installed")
            .into_response()
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = auth_session_from_parts(parts)?;
        match auth.user {
            Some(user) => Ok(AuthUser::from(user)),
            None => Err((StatusCode::UNAUTHORIZED, "Unauthorized").into_response()),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let auth = auth_session_from_parts(parts)?;
        Ok(auth.user.map(AuthUser::from))
    }
}
