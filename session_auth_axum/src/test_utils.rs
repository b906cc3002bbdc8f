//! Shared test initialization for the axum integration tests.
//!
//! Tests that go through here must be marked `#[serial]` because they share
//! one SQLite database file.

use std::sync::Once;

use session_auth::{
    SessionUser, User, UserRole, UserStore, create_session, gen_record_id,
    generate_session_token, register_user,
};

const TEST_DB_PATH: &str = "/tmp/session_auth_axum_test.db";

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

        let _ = std::fs::remove_file(TEST_DB_PATH);
    });

    if let Err(e) = session_auth::init().await {
        eprintln!("Warning: failed to initialize stores: {e}");
    }
}

/// Register a regular user and return their profile plus a cookie pair
/// (`session=<token>`) good for authenticated requests.
pub(crate) async fn signed_in_app_and_cookie(tag: &str) -> (SessionUser, String) {
    let issued = register_user(&format!("{tag}@example.com"), tag, "pw123456")
        .await
        .expect("failed to register test user");
    let cookie = format!("session={}", issued.token);
    (issued.user, cookie)
}

/// Insert an admin account directly and mint a session for it. Admin
/// promotion has no HTTP surface, so tests create admins at the store level.
pub(crate) async fn signed_in_admin_cookie(tag: &str) -> String {
    let mut user = User::with_credentials(
        gen_record_id("usr").expect("failed to generate user id"),
        format!("{tag}@example.com"),
        format!("Admin {tag}"),
        String::new(),
    );
    user.role = UserRole::Admin;
    let user = UserStore::create_user(user)
        .await
        .expect("failed to insert admin user");

    let token = generate_session_token().expect("failed to generate token");
    create_session(&token, &user.id)
        .await
        .expect("failed to create admin session");

    format!("session={token}")
}
