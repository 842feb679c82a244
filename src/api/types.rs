//! Request and response bodies shared by the API traits

use crate::session::{AccessToken, RefreshToken};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/user/login/`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /api/user/register/`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/user/logout/`
#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: AccessToken,
    pub refresh: RefreshToken,
}

/// Error body returned by the service on non-2xx responses.
///
/// The service reports either a top-level `detail` or per-field message
/// lists. Unknown fields are ignored and a body that is not a JSON object
/// parses as the empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
    pub email: Vec<String>,
    pub username: Vec<String>,
    pub non_field_errors: Vec<String>,
}

impl ApiErrorBody {
    /// Parse a response body leniently
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// Message to show when a login attempt is rejected
    pub fn login_message(&self) -> String {
        self.detail
            .clone()
            .unwrap_or_else(|| "Login failed".to_string())
    }

    /// Message to show when registration is rejected
    pub fn signup_message(&self) -> String {
        let raw = self
            .email
            .first()
            .or_else(|| self.username.first())
            .or(self.detail.as_ref())
            .or_else(|| self.non_field_errors.first())
            .map(String::as_str)
            .unwrap_or("Signup failed");

        match raw {
            "user with this email already exists." => "Email already taken".to_string(),
            "A user with that username already exists." => "Username already taken".to_string(),
            other => other.to_string(),
        }
    }
}
