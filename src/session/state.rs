//! In-memory session state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer credential authorizing API calls
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

/// Opaque credential used to revoke the session server-side
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

macro_rules! opaque_token {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        // Never print the secret
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(<{} chars>)", stringify!($name), self.0.len())
            }
        }
    };
}

opaque_token!(AccessToken);
opaque_token!(RefreshToken);

/// Who the session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Client-local authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Logged-in user, absent when the token was restored without one
    pub user: Option<Identity>,

    /// Current access token
    pub token: Option<AccessToken>,
}

impl Session {
    /// Session with no credentials
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Email of the logged-in user, if known
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Bearer token as a string slice
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_ref().map(AccessToken::as_str)
    }
}
