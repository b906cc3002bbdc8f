mod config;
mod errors;
mod main;
mod storage;
mod types;

pub use config::SESSION_COOKIE_NAME;
pub use errors::SessionError;
pub use main::{
    append_clear_session_cookie, append_session_cookie, create_session, generate_session_token,
    hash_token, invalidate_session, invalidate_user_sessions, session_token_from_headers,
    validate_session_token,
};
pub use types::{AuthenticatedSession, Session, SessionUser};

pub(crate) use storage::SessionStore;

pub(crate) async fn init() -> Result<(), SessionError> {
    SessionStore::init().await
}
