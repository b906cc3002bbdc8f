//! Lifecycle state-machine tests: creation, lazy expiry cleanup,
//! sliding-window renewal and idempotent invalidation.

use chrono::{Duration, Utc};
use serial_test::serial;

use crate::session::config::SESSION_MAX_DURATION;
use crate::session::storage::SessionStore;
use crate::session::{create_session, generate_session_token, invalidate_session, validate_session_token};
use crate::test_utils::{create_test_user, init_test_environment};

/// Creating a session and validating its token immediately returns the same
/// user with an expiry a full maximum duration away.
#[tokio::test]
#[serial]
async fn test_create_then_validate_round_trip() {
    init_test_environment().await;
    let user = create_test_user("roundtrip").await;

    let token = generate_session_token().unwrap();
    let session = create_session(&token, &user.id).await.unwrap();

    let expected_expiry = Utc::now() + Duration::seconds(*SESSION_MAX_DURATION as i64);
    assert!((session.expires_at - expected_expiry).num_seconds().abs() <= 2);

    let authenticated = validate_session_token(&token)
        .await
        .unwrap()
        .expect("fresh session must validate");

    assert_eq!(authenticated.session.id, session.id);
    assert_eq!(authenticated.session.user_id, user.id);
    assert_eq!(authenticated.user.id, user.id);
    assert_eq!(authenticated.user.email, user.email);
}

/// A token whose session has expired validates to None and the row is
/// cleaned up on access.
#[tokio::test]
#[serial]
async fn test_expired_session_is_deleted_on_access() {
    init_test_environment().await;
    let user = create_test_user("expired").await;

    let token = generate_session_token().unwrap();
    let session = create_session(&token, &user.id).await.unwrap();

    SessionStore::update_session_expiry(&session.id, Utc::now() - Duration::seconds(1))
        .await
        .unwrap();

    assert!(validate_session_token(&token).await.unwrap().is_none());

    // Cleanup occurred: the row is gone, not merely rejected
    assert!(
        SessionStore::get_session_with_user(&session.id)
            .await
            .unwrap()
            .is_none()
    );
}

/// A session inside the trailing refresh window is renewed to a full
/// maximum duration from now, strictly increasing its expiry.
#[tokio::test]
#[serial]
async fn test_validation_renews_inside_refresh_window() {
    init_test_environment().await;
    let user = create_test_user("renewal").await;

    let token = generate_session_token().unwrap();
    let session = create_session(&token, &user.id).await.unwrap();

    // 10 days left of a 30-day lifetime: within the 15-day refresh window
    let stale_expiry = Utc::now() + Duration::days(10);
    SessionStore::update_session_expiry(&session.id, stale_expiry)
        .await
        .unwrap();

    let renewed = validate_session_token(&token)
        .await
        .unwrap()
        .expect("session is still live");

    assert!(renewed.session.expires_at > stale_expiry);
    let expected = Utc::now() + Duration::seconds(*SESSION_MAX_DURATION as i64);
    assert!((renewed.session.expires_at - expected).num_seconds().abs() <= 2);

    // Immediate re-validation applies the same boundary logic; the expiry
    // cannot move beyond now + MAX_DURATION.
    let revalidated = validate_session_token(&token).await.unwrap().unwrap();
    let bound = Utc::now() + Duration::seconds(*SESSION_MAX_DURATION as i64);
    assert!(revalidated.session.expires_at <= bound + Duration::seconds(2));
}

/// A fresh session outside the renewal window is returned unchanged; no
/// write occurs.
#[tokio::test]
#[serial]
async fn test_validation_leaves_fresh_session_unchanged() {
    init_test_environment().await;
    let user = create_test_user("fresh").await;

    let token = generate_session_token().unwrap();
    let session = create_session(&token, &user.id).await.unwrap();

    let validated = validate_session_token(&token).await.unwrap().unwrap();
    assert_eq!(validated.session.expires_at, session.expires_at);

    let (stored, _) = SessionStore::get_session_with_user(&session.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.expires_at, session.expires_at);
}

/// Invalidation is idempotent: a second delete of the same id succeeds and
/// leaves the same post-state.
#[tokio::test]
#[serial]
async fn test_invalidate_session_idempotent() {
    init_test_environment().await;
    let user = create_test_user("invalidate").await;

    let token = generate_session_token().unwrap();
    let session = create_session(&token, &user.id).await.unwrap();

    invalidate_session(&session.id).await.unwrap();
    assert!(validate_session_token(&token).await.unwrap().is_none());

    invalidate_session(&session.id).await.unwrap();
    assert!(validate_session_token(&token).await.unwrap().is_none());
}

/// A token that was never issued resolves to no session
#[tokio::test]
#[serial]
async fn test_unknown_token_validates_to_none() {
    init_test_environment().await;

    let token = generate_session_token().unwrap();
    assert!(validate_session_token(&token).await.unwrap().is_none());
}

/// Removing all of a user's sessions revokes each of them
#[tokio::test]
#[serial]
async fn test_invalidate_user_sessions() {
    init_test_environment().await;
    let user = create_test_user("revokeall").await;

    let t1 = generate_session_token().unwrap();
    let t2 = generate_session_token().unwrap();
    create_session(&t1, &user.id).await.unwrap();
    create_session(&t2, &user.id).await.unwrap();

    crate::session::invalidate_user_sessions(&user.id)
        .await
        .unwrap();

    assert!(validate_session_token(&t1).await.unwrap().is_none());
    assert!(validate_session_token(&t2).await.unwrap().is_none());
}
