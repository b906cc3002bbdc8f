use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::session::{Session, SessionUser, create_session, generate_session_token};
use crate::userdb::{AuthProvider, User, UserStore};
use crate::utils::gen_record_id;

use super::errors::CoordinationError;

/// A freshly minted session together with the plaintext token. The token
/// exists only here and in the cookie handed to the client; it is never
/// persisted.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: SessionUser,
    pub token: String,
    pub session: Session,
}

/// Register a credentials account and sign it in.
///
/// Duplicate emails are detected with an explicit pre-check so the caller
/// gets a typed conflict instead of a driver-specific constraint error.
pub async fn register_user(
    email: &str,
    name: &str,
    password: &str,
) -> Result<IssuedSession, CoordinationError> {
    let email = email.trim().to_lowercase();

    if UserStore::get_user_by_email(&email, AuthProvider::Credentials)
        .await?
        .is_some()
    {
        return Err(CoordinationError::DuplicateEmail.log());
    }

    let password_hash = hash_password(password)?;
    let user = User::with_credentials(
        gen_record_id("usr")?,
        email,
        name.to_string(),
        password_hash,
    );
    let user = UserStore::create_user(user).await?;

    tracing::info!(user_id = %user.id, "Registered new user");
    issue_session(user).await
}

/// Verify credentials and sign in.
///
/// The failure is identical for an unknown email and a wrong password.
pub async fn authenticate_user(
    email: &str,
    password: &str,
) -> Result<IssuedSession, CoordinationError> {
    let email = email.trim().to_lowercase();

    let Some(user) = UserStore::get_user_by_email(&email, AuthProvider::Credentials).await? else {
        return Err(CoordinationError::InvalidCredentials.log());
    };

    if user.password_hash.is_empty() || !verify_password(password, &user.password_hash)? {
        return Err(CoordinationError::InvalidCredentials.log());
    }

    issue_session(user).await
}

/// Complete an external-provider login given the opaque identity the
/// provider returned. Matches by provider-assigned id, never by email, and
/// creates the account on first login.
pub async fn login_with_provider(
    provider: AuthProvider,
    provider_id: &str,
    email: &str,
    name: &str,
) -> Result<IssuedSession, CoordinationError> {
    if let Some(existing) = UserStore::get_user_by_provider_id(provider_id).await? {
        return issue_session(existing).await;
    }

    let user = User::from_provider(
        gen_record_id("usr")?,
        email.to_string(),
        name.to_string(),
        provider,
        provider_id.to_string(),
    );
    let user = UserStore::create_user(user).await?;

    tracing::info!(user_id = %user.id, provider = provider.as_str(), "Created user from provider identity");
    issue_session(user).await
}

/// Invalidate a session by its (hashed) id
pub async fn sign_out(session_id: &str) -> Result<(), CoordinationError> {
    crate::session::invalidate_session(session_id).await?;
    Ok(())
}

/// Remove a user account and every session it owns. This is the
/// administrative/test-support removal path; the authentication subsystem
/// never deletes users on its own.
pub async fn delete_user_account(user_id: &str) -> Result<(), CoordinationError> {
    let Some(user) = UserStore::get_user(user_id).await? else {
        return Err(CoordinationError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: user_id.to_string(),
        }
        .log());
    };

    crate::session::invalidate_user_sessions(&user.id).await?;
    UserStore::delete_user(&user.id).await?;

    tracing::info!(user_id = %user.id, "Deleted user account");
    Ok(())
}

async fn issue_session(user: User) -> Result<IssuedSession, CoordinationError> {
    let token = generate_session_token()?;
    let session = create_session(&token, &user.id).await?;

    Ok(IssuedSession {
        user: SessionUser::from(user),
        token,
        session,
    })
}

fn hash_password(password: &str) -> Result<String, CoordinationError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CoordinationError::PasswordHash(e.to_string()))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, CoordinationError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| CoordinationError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoordinationError::PasswordHash(e.to_string())),
    }
}
