use thiserror::Error;

use crate::userdb::UserError;
use crate::utils::UtilError;

/// Failures of the session subsystem. A missing or expired session is not an
/// error; those surface as `Ok(None)` from validation.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Header error: {0}")]
    Header(String),

    /// Error from utils operations (entropy, cookie formatting)
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),

    /// Error from user database operations
    #[error("User error: {0}")]
    User(#[from] UserError),
}
