//! Session identity for cart ownership.
//!
//! A [`Session`] is an explicitly passed value, created at session start
//! and handed to whatever needs it, never an ambient singleton. Guest
//! sessions carry only a browser-generated token; authenticated sessions
//! additionally carry the user id.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// The identity a cart belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque session token (browser-generated for guests).
    pub id: String,
    /// User id, present once the shopper has signed in.
    pub user_id: Option<UserId>,
}

impl Session {
    /// Create a guest session.
    pub fn guest(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: None,
        }
    }

    /// Create a session for an authenticated user.
    pub fn authenticated(id: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id: id.into(),
            user_id: Some(user_id),
        }
    }

    /// Check if this is a guest session.
    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }

    /// Attach a user after sign-in.
    pub fn sign_in(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
    }
}
