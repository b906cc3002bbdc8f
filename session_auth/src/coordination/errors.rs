use thiserror::Error;

use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors that can occur while coordinating registration, sign-in and
/// account management
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// A credentials account with this email already exists. Raised by an
    /// explicit pre-check, never inferred from a database constraint
    /// violation.
    #[error("Email already used")]
    DuplicateEmail,

    /// Sign-in failed. Deliberately identical for an unknown email and a
    /// wrong password so the response never confirms whether an email is
    /// registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Unauthorized access error
    #[error("Unauthorized access")]
    Unauthorized,

    /// Credential hashing or verification failed
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from user database operations
    #[error("User error: {0}")]
    User(#[from] UserError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl CoordinationError {
    /// Log the error at debug level and return it, for use at the point
    /// where the error is first raised.
    pub(crate) fn log(self) -> Self {
        tracing::debug!(error = %self, "Coordination error");
        self
    }
}
