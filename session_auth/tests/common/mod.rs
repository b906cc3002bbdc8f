//! Shared setup for integration tests: environment configuration and store
//! initialization against an isolated SQLite database file.

use std::sync::Once;

const TEST_DB_PATH: &str = "/tmp/session_auth_integration_test.db";

pub async fn init_test_environment() {
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

        let _ = std::fs::remove_file(TEST_DB_PATH);
    });

    session_auth::init()
        .await
        .expect("failed to initialize stores");
}
