//! Data returned by the auth client.

use serde::{Deserialize, Serialize};

/// Profile echoed back by [`crate::AuthClient::register`].
///
/// Holding one does not mean the user is logged in: registration never
/// produces a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    /// Nine random base-36 characters.
    pub id: String,
    pub email: String,
    pub full_name: String,
}
