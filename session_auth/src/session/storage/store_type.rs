use chrono::{DateTime, Utc};

use crate::session::errors::SessionError;
use crate::session::types::Session;
use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::User;

use super::postgres::*;
use super::sqlite::*;

/// CRUD over session rows in the shared record store. All operations are
/// keyed on the hashed session id; the plaintext token never reaches this
/// layer.
pub(crate) struct SessionStore;

impl SessionStore {
    /// Create the sessions table
    pub(crate) async fn init() -> Result<(), SessionError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_tables_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_tables_postgres(pool).await
        } else {
            Err(SessionError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    pub(crate) async fn create_session(session: &Session) -> Result<(), SessionError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            insert_session_sqlite(pool, session).await
        } else if let Some(pool) = store.as_postgres() {
            insert_session_postgres(pool, session).await
        } else {
            Err(SessionError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Point lookup of a session joined with its owning user row
    pub(crate) async fn get_session_with_user(
        session_id: &str,
    ) -> Result<Option<(Session, User)>, SessionError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_session_with_user_sqlite(pool, session_id).await
        } else if let Some(pool) = store.as_postgres() {
            get_session_with_user_postgres(pool, session_id).await
        } else {
            Err(SessionError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Update only the `expires_at` field of a session
    pub(crate) async fn update_session_expiry(
        session_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            update_session_expiry_sqlite(pool, session_id, expires_at).await
        } else if let Some(pool) = store.as_postgres() {
            update_session_expiry_postgres(pool, session_id, expires_at).await
        } else {
            Err(SessionError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Delete by primary key; a no-op when the row does not exist
    pub(crate) async fn delete_session(session_id: &str) -> Result<(), SessionError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_session_sqlite(pool, session_id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_session_postgres(pool, session_id).await
        } else {
            Err(SessionError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Delete all sessions owned by a user
    pub(crate) async fn delete_sessions_for_user(user_id: &str) -> Result<(), SessionError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_sessions_for_user_sqlite(pool, user_id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_sessions_for_user_postgres(pool, user_id).await
        } else {
            Err(SessionError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }
}
