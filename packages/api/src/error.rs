//! Authentication errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No authentication backend is wired up; every login attempt ends here.
    #[error("Authentication not implemented")]
    NotImplemented,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    WeakPassword,
    #[error("Name is required")]
    MissingName,
}
