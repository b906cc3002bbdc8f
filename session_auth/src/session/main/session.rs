use chrono::{Duration, Utc};

use crate::session::config::{SESSION_MAX_DURATION, SESSION_REFRESH_INTERVAL};
use crate::session::errors::SessionError;
use crate::session::storage::SessionStore;
use crate::session::types::{AuthenticatedSession, Session, SessionUser};

use super::token::hash_token;

/// Create and persist a session for `user_id` from a freshly generated
/// plaintext token. The stored id is the token's digest; the expiry is the
/// full maximum duration from now.
pub async fn create_session(token: &str, user_id: &str) -> Result<Session, SessionError> {
    let session = Session {
        id: hash_token(token),
        user_id: user_id.to_string(),
        expires_at: Utc::now() + Duration::seconds(*SESSION_MAX_DURATION as i64),
    };

    SessionStore::create_session(&session).await?;

    tracing::debug!(
        session_id = %session.id,
        user_id = %session.user_id,
        "Created session"
    );
    Ok(session)
}

/// Resolve a plaintext token into its session and owning user.
///
/// Expiry is enforced lazily here: a session past its `expires_at` is
/// deleted on access and reported as absent. A session accessed within the
/// trailing refresh window of its lifetime has its expiry extended to the
/// full maximum duration (sliding-window renewal), which bounds renewal
/// writes to at most one per refresh interval of continuous use.
pub async fn validate_session_token(
    token: &str,
) -> Result<Option<AuthenticatedSession>, SessionError> {
    let session_id = hash_token(token);

    let Some((mut session, user)) = SessionStore::get_session_with_user(&session_id).await? else {
        tracing::debug!("No session found for presented token");
        return Ok(None);
    };

    let now = Utc::now();

    if now >= session.expires_at {
        tracing::debug!(session_id = %session.id, expired_at = %session.expires_at, "Session expired, deleting");
        SessionStore::delete_session(&session_id).await?;
        return Ok(None);
    }

    if now >= session.expires_at - Duration::seconds(*SESSION_REFRESH_INTERVAL as i64) {
        session.expires_at = now + Duration::seconds(*SESSION_MAX_DURATION as i64);
        SessionStore::update_session_expiry(&session_id, session.expires_at).await?;
        tracing::debug!(session_id = %session.id, expires_at = %session.expires_at, "Renewed session");
    }

    Ok(Some(AuthenticatedSession {
        session,
        user: SessionUser::from(user),
    }))
}

/// Unconditionally delete a session by its id. Deleting a session that does
/// not exist is not an error, so the operation is idempotent.
pub async fn invalidate_session(session_id: &str) -> Result<(), SessionError> {
    SessionStore::delete_session(session_id).await
}

/// Delete every session belonging to a user. Used by account removal and
/// administrative revocation.
pub async fn invalidate_user_sessions(user_id: &str) -> Result<(), SessionError> {
    SessionStore::delete_sessions_for_user(user_id).await
}
