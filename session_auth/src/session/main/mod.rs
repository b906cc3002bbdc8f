mod cookie;
mod session;
mod token;

#[cfg(test)]
mod lifecycle_tests;

pub use cookie::{
    append_clear_session_cookie, append_session_cookie, session_token_from_headers,
};
pub use session::{
    create_session, invalidate_session, invalidate_user_sessions, validate_session_token,
};
pub use token::{generate_session_token, hash_token};
