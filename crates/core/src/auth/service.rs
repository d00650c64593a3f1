//! Mock login service.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sandbank_shared::types::UserId;
use sandbank_store::{Vault, keys};
use tokio::sync::watch;
use tracing::{debug, info};

use super::error::AuthError;
use super::types::{AuthResponse, LoginCredentials, Role, User};
use crate::state::Signal;

/// Advisory token lifetime reported to the caller.
const TOKEN_EXPIRES_IN_SECS: u64 = 3600;

/// The fixed demo user list. Plaintext demo passwords: this is a sandbox
/// login, not an authentication system.
struct MockUser {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

const MOCK_USERS: [MockUser; 3] = [
    MockUser {
        id: "1",
        email: "admin@bank.com",
        password: "admin123",
        name: "Admin User",
        role: Role::Admin,
    },
    MockUser {
        id: "2",
        email: "user@bank.com",
        password: "user123",
        name: "Regular User",
        role: Role::User,
    },
    MockUser {
        id: "3",
        email: "test@example.com",
        password: "password123",
        name: "Test User",
        role: Role::User,
    },
];

/// Mock authentication with vault-backed session persistence.
pub struct AuthService {
    vault: Arc<Vault>,
    login_latency: Duration,
    current_user: Signal<Option<User>>,
    authenticated: Signal<bool>,
}

impl AuthService {
    /// Creates the service and restores any persisted session.
    pub async fn new(vault: Arc<Vault>, login_latency: Duration) -> Self {
        let service = Self {
            vault,
            login_latency,
            current_user: Signal::default(),
            authenticated: Signal::default(),
        };
        service.restore().await;
        service
    }

    /// Attempts a login after the simulated latency.
    ///
    /// On success the tokens and the profile are persisted to the vault and
    /// the authenticated signal flips.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmailFormat` or
    /// `AuthError::InvalidCredentials`; neither mutates any state.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError> {
        tokio::time::sleep(self.login_latency).await;

        if !is_valid_email(&credentials.email) {
            return Err(AuthError::InvalidEmailFormat);
        }

        let matched = MOCK_USERS
            .iter()
            .find(|user| user.email == credentials.email && user.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;

        let user = User {
            id: UserId::new(matched.id),
            email: matched.email.to_string(),
            name: matched.name.to_string(),
            role: matched.role,
        };
        let response = AuthResponse {
            access_token: mock_token("access", &user.email),
            refresh_token: mock_token("refresh", &user.email),
            expires_in_secs: TOKEN_EXPIRES_IN_SECS,
            user,
        };

        self.vault.set(keys::ACCESS_TOKEN, &response.access_token).await;
        self.vault.set(keys::REFRESH_TOKEN, &response.refresh_token).await;
        self.vault.set(keys::AUTH_USER, &response.user).await;

        self.current_user.set(Some(response.user.clone()));
        self.authenticated.set(true);

        info!(email = %response.user.email, "login succeeded");
        Ok(response)
    }

    /// Rehydrates the session from the vault. An absent or expired token
    /// clears the persisted session and leaves the service signed out.
    pub async fn restore(&self) {
        let token: Option<String> = self.vault.get(keys::ACCESS_TOKEN).await;
        let user: Option<User> = self.vault.get(keys::AUTH_USER).await;

        match (token, user) {
            (Some(token), Some(user)) if !is_token_expired(&token) => {
                debug!(email = %user.email, "session restored");
                self.current_user.set(Some(user));
                self.authenticated.set(true);
            }
            _ => {
                self.clear_storage().await;
                self.current_user.set(None);
                self.authenticated.set(false);
            }
        }
    }

    /// Signs out: clears the persisted session and resets the signals.
    pub async fn logout(&self) {
        self.clear_storage().await;
        self.current_user.set(None);
        self.authenticated.set(false);
        info!("logged out");
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current_user.get()
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Subscribes to the authenticated flag.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    /// The persisted access token, if any.
    pub async fn token(&self) -> Option<String> {
        self.vault.get(keys::ACCESS_TOKEN).await
    }

    async fn clear_storage(&self) {
        self.vault.remove(keys::ACCESS_TOKEN).await;
        self.vault.remove(keys::REFRESH_TOKEN).await;
        self.vault.remove(keys::AUTH_USER).await;
    }
}

/// Returns true when the token should be treated as expired.
///
/// Fabricated mock tokens never expire. Anything else is parsed as a
/// JWT-shaped string; a missing or undecodable `exp` claim counts as expired.
#[must_use]
pub fn is_token_expired(token: &str) -> bool {
    if token.starts_with("mock_token_") {
        return false;
    }

    let Some(expiry_secs) = decode_expiry(token) else {
        return true;
    };
    Utc::now().timestamp() >= expiry_secs
}

fn decode_expiry(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let bytes = base64_url::decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// Fabricates a non-cryptographic token string.
fn mock_token(kind: &str, email: &str) -> String {
    format!(
        "mock_token_{kind}_{}_{}",
        base64_url::encode(email.as_bytes()),
        Utc::now().timestamp_millis()
    )
}

/// Mirrors the permissive login-form email check: one `@` with non-empty
/// sides, no whitespace, and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .rsplit_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sandbank_store::VaultBacking;

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    async fn service() -> AuthService {
        let vault = Arc::new(Vault::open(&VaultBacking::memory()).expect("vault"));
        AuthService::new(vault, Duration::ZERO).await
    }

    #[rstest]
    #[case("user@bank.com", true)]
    #[case("a@b.co", true)]
    #[case("no-at-sign.com", false)]
    #[case("two@@bank.com", false)]
    #[case("spaces in@bank.com", false)]
    #[case("user@nodomain", false)]
    #[case("user@.com", false)]
    #[case("user@domain.", false)]
    #[case("@bank.com", false)]
    fn test_email_check(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[test]
    fn test_mock_tokens_never_expire() {
        assert!(!is_token_expired("mock_token_access_dXNlcg_1722400000000"));
    }

    #[test]
    fn test_garbage_tokens_count_as_expired() {
        assert!(is_token_expired("not-a-token"));
        assert!(is_token_expired("a.b.c"));
        assert!(is_token_expired(""));
    }

    #[test]
    fn test_jwt_shaped_expiry_is_honored() {
        let stale = base64_url::encode(br#"{"exp": 1000000000}"#);
        assert!(is_token_expired(&format!("h.{stale}.s")));

        let fresh = base64_url::encode(br#"{"exp": 99999999999}"#);
        assert!(!is_token_expired(&format!("h.{fresh}.s")));
    }

    #[tokio::test]
    async fn test_login_with_known_user_persists_the_session() {
        let auth = service().await;
        assert!(!auth.is_authenticated());

        let response = auth
            .login(&credentials("user@bank.com", "user123"))
            .await
            .expect("login");

        assert!(auth.is_authenticated());
        assert_eq!(response.user.name, "Regular User");
        assert_eq!(response.user.role, Role::User);
        assert!(response.access_token.starts_with("mock_token_access_"));
        assert!(response.refresh_token.starts_with("mock_token_refresh_"));
        assert_eq!(auth.token().await, Some(response.access_token));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_fails() {
        let auth = service().await;
        let err = auth
            .login(&credentials("user@bank.com", "wrong"))
            .await
            .expect_err("must fail");
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!auth.is_authenticated());
        assert!(auth.token().await.is_none());
    }

    #[tokio::test]
    async fn test_login_with_malformed_email_fails_before_lookup() {
        let auth = service().await;
        let err = auth
            .login(&credentials("not-an-email", "admin123"))
            .await
            .expect_err("must fail");
        assert_eq!(err, AuthError::InvalidEmailFormat);
    }

    #[tokio::test]
    async fn test_session_survives_a_service_restart() {
        let vault = Arc::new(Vault::open(&VaultBacking::memory()).expect("vault"));

        let auth = AuthService::new(Arc::clone(&vault), Duration::ZERO).await;
        auth.login(&credentials("admin@bank.com", "admin123"))
            .await
            .expect("login");

        let restored = AuthService::new(vault, Duration::ZERO).await;
        assert!(restored.is_authenticated());
        assert_eq!(
            restored.current_user().map(|u| u.email),
            Some("admin@bank.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_logout_clears_the_persisted_session() {
        let auth = service().await;
        auth.login(&credentials("admin@bank.com", "admin123"))
            .await
            .expect("login");

        auth.logout().await;

        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
        assert!(auth.token().await.is_none());
    }
}
