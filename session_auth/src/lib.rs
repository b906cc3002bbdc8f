//! session-auth - Session-based authentication with hashed bearer tokens
//!
//! This crate implements the core session lifecycle: opaque token issuance,
//! one-way token hashing for at-rest storage, sliding-window expiry with
//! automatic renewal, and the cookie transport used to carry the token.
//! Framework integration (middleware, routers) lives in session-auth-axum.

mod coordination;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, IssuedSession, authenticate_user, delete_user_account,
    login_with_provider, register_user, sign_out,
};

pub use session::{
    AuthenticatedSession, SESSION_COOKIE_NAME, Session, SessionError, SessionUser,
    append_clear_session_cookie, append_session_cookie, create_session, generate_session_token,
    hash_token, invalidate_session, invalidate_user_sessions, session_token_from_headers,
    validate_session_token,
};

pub use userdb::{AuthProvider, User, UserError, UserRole, UserStore};

pub use utils::{UtilError, gen_record_id};

/// Initialize the data store and create the user and session tables
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    session::init().await?;
    Ok(())
}
