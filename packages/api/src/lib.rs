//! # API crate: placeholder authentication client for FilmHaven
//!
//! The site has no authentication backend yet. This crate is the seam where
//! one will plug in, and until then it behaves the way the pages expect:
//!
//! | Call | Behaviour |
//! |------|-----------|
//! | [`AuthClient::login`] | Waits out the simulated network latency, then always fails with [`AuthError::NotImplemented`]. |
//! | [`AuthClient::register`] | Validates the form, waits, and returns a [`RegisteredUser`] with a random id. No session is created, so the caller is still logged out. |
//! | [`logout`] | Removes the session cookie. |
//!
//! Being logged in is defined solely by [`store::SessionStore`]; nothing here
//! writes tokens or user data anywhere else.

use std::time::Duration;

use rand::Rng;
use store::SessionStore;

mod error;
pub mod models;

pub use error::AuthError;
pub use models::RegisteredUser;

/// Latency of the simulated network round trip.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;
const MIN_PASSWORD_LEN: usize = 8;

/// Client for the (not yet existing) authentication backend.
#[derive(Debug, Clone)]
pub struct AuthClient {
    latency: Duration,
}

impl Default for AuthClient {
    fn default() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
        }
    }
}

impl AuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the simulated latency (tests use zero).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Log in with email and password.
    ///
    /// Always fails: a real backend integration is a prerequisite for a
    /// working login.
    pub async fn login(&self, email: &str, _password: &str) -> Result<store::SessionRecord, AuthError> {
        sleep(self.latency).await;
        tracing::warn!("Login attempted for {} but no authentication backend exists", email.trim());
        Err(AuthError::NotImplemented)
    }

    /// Register a new account.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<RegisteredUser, AuthError> {
        let email = email.trim().to_lowercase();
        let full_name = full_name.trim().to_string();

        if full_name.is_empty() {
            return Err(AuthError::MissingName);
        }
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        sleep(self.latency).await;

        let user = RegisteredUser {
            id: random_id(),
            email,
            full_name,
        };
        tracing::info!("Registered {} locally; no session was created", user.email);
        Ok(user)
    }
}

/// Log out by dropping the session cookie.
pub fn logout(session: &SessionStore) {
    session.remove();
}

fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}

async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store::config::CookieConfig;
    use store::{MemoryCookieJar, SessionRecord};

    fn client() -> AuthClient {
        AuthClient::new().with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_always_fails() {
        let result = client().login("a@b.pl", "correct horse").await;
        assert_eq!(result, Err(AuthError::NotImplemented));
    }

    #[tokio::test]
    async fn test_register_returns_profile_without_session() {
        let jar = MemoryCookieJar::new();
        let session = SessionStore::new(Arc::new(jar), &CookieConfig::default());

        let user = client()
            .register("  Ala@Example.PL ", "password123", " Ala Kot ")
            .await
            .unwrap();

        assert_eq!(user.email, "ala@example.pl");
        assert_eq!(user.full_name, "Ala Kot");
        assert_eq!(user.id.len(), 9);
        assert!(user.id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_validation() {
        let c = client();
        assert_eq!(
            c.register("a@b.pl", "password123", "  ").await,
            Err(AuthError::MissingName)
        );
        assert_eq!(
            c.register("not-an-email", "password123", "Ala").await,
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            c.register("a@b.pl", "short", "Ala").await,
            Err(AuthError::WeakPassword)
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let session = SessionStore::new(Arc::new(MemoryCookieJar::new()), &CookieConfig::default());
        session.set(&SessionRecord {
            id: 1.into(),
            login: "ala".to_string(),
            email: "a@b.pl".to_string(),
        });
        assert!(session.is_authenticated());

        logout(&session);
        assert!(!session.is_authenticated());
    }
}
