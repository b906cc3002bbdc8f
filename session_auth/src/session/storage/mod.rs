mod store_type;
mod sqlite;
mod postgres;

pub(crate) use store_type::SessionStore;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::session::types::Session;
use crate::userdb::User;

/// Row shape for the session-to-user join. Session columns are aliased so
/// the user columns keep their natural names for the flattened `User`.
#[derive(FromRow)]
struct SessionWithUserRow {
    session_id: String,
    session_user_id: String,
    session_expires_at: DateTime<Utc>,
    #[sqlx(flatten)]
    user: User,
}

impl From<SessionWithUserRow> for (Session, User) {
    fn from(row: SessionWithUserRow) -> Self {
        (
            Session {
                id: row.session_id,
                user_id: row.session_user_id,
                expires_at: row.session_expires_at,
            },
            row.user,
        )
    }
}
