//! Account creation
//!
//! Registration is not part of the session lifecycle: this module checks
//! the password policy, calls the registration endpoint and then logs in
//! through the session manager like any other caller.

use crate::api::{AuthApi, RegisterRequest};
use crate::error::{GalleryError, GalleryResult};
use crate::session::SessionManager;
use crate::storage::TokenStore;
use tracing::{debug, error, info};

/// Characters accepted as the required symbol
const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

const MIN_PASSWORD_LEN: usize = 8;

/// Check the service's password policy: 8+ characters with an uppercase
/// letter, a lowercase letter, a digit and one of `!@#$%^&*`.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Register a new account and log it in.
pub async fn signup<A: AuthApi, S: TokenStore>(
    manager: &mut SessionManager<A, S>,
    username: &str,
    email: &str,
    password: &str,
) -> GalleryResult<()> {
    if !validate_password(password) {
        debug!("Password validation failed");
        return Err(GalleryError::WeakPassword);
    }

    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    match manager.api().register(&request).await {
        Ok(()) => info!("Registered account {}", username),
        Err(GalleryError::Api { status, body }) => {
            error!("Signup failed with status {}: {:?}", status, body);
            return Err(GalleryError::Signup(body.signup_message()));
        }
        Err(e) => {
            error!("Signup failed: {}", e);
            return Err(e);
        }
    }

    manager.login(email, password).await.map_err(|e| {
        error!("Auto-login failed: {}", e);
        GalleryError::Signup("Auto-login failed after signup".to_string())
    })
}
