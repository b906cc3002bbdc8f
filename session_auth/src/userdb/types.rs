use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::userdb::errors::UserError;

/// Authorization role. The subsystem knows exactly two roles; richer policy
/// is out of scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(UserError::InvalidData(format!("Unknown role: {other}"))),
        }
    }
}

/// How an account authenticates. Credential accounts are matched by email;
/// provider-linked accounts are matched by the provider-assigned identity,
/// never by email, to avoid account takeover via email collision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Credentials,
    Google,
    Discord,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Credentials => "credentials",
            AuthProvider::Google => "google",
            AuthProvider::Discord => "discord",
        }
    }
}

impl TryFrom<String> for AuthProvider {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "credentials" => Ok(AuthProvider::Credentials),
            "google" => Ok(AuthProvider::Google),
            "discord" => Ok(AuthProvider::Discord),
            other => Err(UserError::InvalidData(format!("Unknown provider: {other}"))),
        }
    }
}

/// Represents a core user identity in the system
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Email address, stored lower-cased; unique per provider
    pub email: String,
    /// Display name
    pub name: String,
    /// Credential hash; empty for provider-linked accounts
    pub password_hash: String,
    /// Authorization role
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    /// Authentication method for this account
    #[sqlx(try_from = "String")]
    pub provider: AuthProvider,
    /// Provider-assigned identity for provider-linked accounts
    pub provider_id: Option<String>,
    /// When the user account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new credential-based user. The email is normalized to
    /// lower case so that uniqueness is case-insensitive.
    pub fn with_credentials(id: String, email: String, name: String, password_hash: String) -> Self {
        Self {
            id,
            email: email.to_lowercase(),
            name,
            password_hash,
            role: UserRole::User,
            provider: AuthProvider::Credentials,
            provider_id: None,
            created_at: Utc::now(),
        }
    }

    /// Create a new user from an external provider identity. Such accounts
    /// carry no credential hash.
    pub fn from_provider(
        id: String,
        email: String,
        name: String,
        provider: AuthProvider,
        provider_id: String,
    ) -> Self {
        Self {
            id,
            email: email.to_lowercase(),
            name,
            password_hash: String::new(),
            role: UserRole::User,
            provider,
            provider_id: Some(provider_id),
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
