//! session-auth-axum - Axum integration for the session-auth library
//!
//! Provides the per-request authentication middleware, the authorization
//! guards, the `AuthUser` extractor and ready-made routers for the
//! authentication endpoints.

mod admin;
mod config;
mod error;
mod middleware;
mod router;
mod session;

#[cfg(test)]
mod test_utils;

pub use config::AUTH_ROUTE_PREFIX;
pub use middleware::{authenticate, require_admin, require_user};
pub use router::{session_auth_router, session_auth_router_no_trace};
pub use session::{AuthSession, AuthUser};

// Re-exported so applications only need one crate for startup
pub use session_auth::init;
