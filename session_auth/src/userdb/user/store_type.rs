use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{errors::UserError, types::AuthProvider, types::User};

use super::postgres::*;
use super::sqlite::*;

pub struct UserStore;

impl UserStore {
    /// Initialize the user database tables
    pub async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_tables_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_tables_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by their ID
    pub async fn get_user(id: &str) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by (lower-cased) email for a specific authentication
    /// method. Credential sign-in must not match provider-linked accounts.
    pub async fn get_user_by_email(
        email: &str,
        provider: AuthProvider,
    ) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;
        let email = email.to_lowercase();

        if let Some(pool) = store.as_sqlite() {
            get_user_by_email_sqlite(pool, &email, provider).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_email_postgres(pool, &email, provider).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by the identity assigned by an external provider
    pub async fn get_user_by_provider_id(provider_id: &str) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_by_provider_id_sqlite(pool, provider_id).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_provider_id_postgres(pool, provider_id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Insert a new user row
    pub async fn create_user(user: User) -> Result<User, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            insert_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            insert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    pub async fn delete_user(id: &str) -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}
