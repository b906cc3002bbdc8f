mod data_store;
mod errors;

pub(crate) use data_store::{DB_TABLE_SESSIONS, DB_TABLE_USERS, GENERIC_DATA_STORE};
pub(crate) use errors::StorageError;

pub(crate) async fn init() -> Result<(), StorageError> {
    // Force the lazy connection pool to be constructed so that a
    // misconfigured store fails at startup rather than on first request.
    let _ = *data_store::GENERIC_DATA_STORE;

    Ok(())
}
