//! Authentication types.

use sandbank_shared::types::UserId;
use serde::{Deserialize, Serialize};

/// A signed-in demo user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Coarse role tag.
    pub role: Role,
}

/// Demo user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back-office user.
    Admin,
    /// Regular user.
    User,
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    /// Login email.
    pub email: String,
    /// Plaintext demo password.
    pub password: String,
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    /// The signed-in user.
    pub user: User,
    /// Fabricated access token.
    pub access_token: String,
    /// Fabricated refresh token.
    pub refresh_token: String,
    /// Advisory expiry in seconds. Mock tokens never actually expire.
    pub expires_in_secs: u64,
}
