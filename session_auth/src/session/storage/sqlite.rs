use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

use crate::session::errors::SessionError;
use crate::session::types::Session;
use crate::storage::{DB_TABLE_SESSIONS, DB_TABLE_USERS};
use crate::userdb::User;

use super::SessionWithUserRow;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), SessionError> {
    let sessions = DB_TABLE_SESSIONS.as_str();
    let users = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {sessions} (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL REFERENCES {users}(id),
            expires_at TIMESTAMP NOT NULL
        )
        "#,
    ))
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn insert_session_sqlite(
    pool: &Pool<Sqlite>,
    session: &Session,
) -> Result<(), SessionError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, user_id, expires_at)
        VALUES (?, ?, ?)
        "#,
        table_name
    ))
    .bind(&session.id)
    .bind(&session.user_id)
    .bind(session.expires_at)
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_session_with_user_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
) -> Result<Option<(Session, User)>, SessionError> {
    let sessions = DB_TABLE_SESSIONS.as_str();
    let users = DB_TABLE_USERS.as_str();

    let row = sqlx::query_as::<_, SessionWithUserRow>(&format!(
        r#"
        SELECT s.id AS session_id, s.user_id AS session_user_id, s.expires_at AS session_expires_at, u.*
        FROM {sessions} s
        INNER JOIN {users} u ON s.user_id = u.id
        WHERE s.id = ?
        "#,
    ))
    .bind(session_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(row.map(Into::into))
}

pub(super) async fn update_session_expiry_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), SessionError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        UPDATE {} SET expires_at = ? WHERE id = ?
        "#,
        table_name
    ))
    .bind(expires_at)
    .bind(session_id)
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn delete_session_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
) -> Result<(), SessionError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE id = ?
        "#,
        table_name
    ))
    .bind(session_id)
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn delete_sessions_for_user_sqlite(
    pool: &Pool<Sqlite>,
    user_id: &str,
) -> Result<(), SessionError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE user_id = ?
        "#,
        table_name
    ))
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}
