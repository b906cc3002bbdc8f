use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::userdb::{AuthProvider, User as DbUser, UserRole};

/// Server-side session record. `id` is the lower-case hex SHA-256 of the
/// plaintext token, so the record never contains the bearer credential
/// itself. Only `expires_at` is mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// User view handed to request handlers. Deliberately excludes the
/// credential hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub provider: AuthProvider,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for SessionUser {
    fn from(db_user: DbUser) -> Self {
        Self {
            id: db_user.id,
            email: db_user.email,
            name: db_user.name,
            role: db_user.role,
            provider: db_user.provider,
            created_at: db_user.created_at,
        }
    }
}

/// Result of a successful token validation
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub session: Session,
    pub user: SessionUser,
}
