//! Shared test initialization for database-touching tests.
//!
//! Ensures the environment is configured and the stores are initialized
//! exactly once per test binary. Tests that go through here must be marked
//! `#[serial]` because they share one SQLite database file.

use std::sync::Once;

const TEST_DB_PATH: &str = "/tmp/session_auth_unit_test.db";

pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        if std::env::var("GENERIC_DATA_STORE_TYPE").is_err() {
            unsafe {
                std::env::set_var("GENERIC_DATA_STORE_TYPE", "sqlite");
            }
        }
        if std::env::var("GENERIC_DATA_STORE_URL").is_err() {
            unsafe {
                std::env::set_var("GENERIC_DATA_STORE_URL", format!("sqlite:{TEST_DB_PATH}"));
            }
        }

        // Start from a clean database; ignore failure when the file is absent
        let _ = std::fs::remove_file(TEST_DB_PATH);
    });

    if let Err(e) = crate::storage::init().await {
        eprintln!("Warning: failed to initialize data store: {e}");
    }
    if let Err(e) = crate::userdb::init().await {
        eprintln!("Warning: failed to initialize user store: {e}");
    }
    if let Err(e) = crate::session::init().await {
        eprintln!("Warning: failed to initialize session store: {e}");
    }
}

/// Insert a throwaway user for session tests
pub(crate) async fn create_test_user(tag: &str) -> crate::userdb::User {
    use crate::userdb::{User, UserStore};

    let user = User::with_credentials(
        format!("usr_test_{tag}"),
        format!("{tag}@example.com"),
        format!("Test {tag}"),
        String::new(),
    );
    UserStore::create_user(user)
        .await
        .expect("failed to insert test user")
}
