//! Session lifecycle management
//!
//! `SessionManager` is the single owner of the in-memory [`Session`] and the
//! durable [`TokenStore`]. Every state transition writes the store first and
//! only then updates memory, so the two never disagree after a failed write.

use crate::api::{AuthApi, LoginRequest};
use crate::audit::AuditLog;
use crate::error::{GalleryError, GalleryResult};
use crate::session::state::{AccessToken, Identity, Session};
use crate::storage::{keys, TokenStore};
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Session manager handles login, logout and restore
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    session: Session,
    audit: Option<AuditLog>,
}

impl<A: AuthApi, S: TokenStore> SessionManager<A, S> {
    /// Create a manager with an empty session
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            session: Session::empty(),
            audit: None,
        }
    }

    /// Record login/logout events in `audit`
    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Restore the session from durable storage.
    ///
    /// Makes no network call; a stale token is only discovered when the
    /// service rejects a later request.
    pub fn initialize(&mut self) -> GalleryResult<()> {
        let Some(token) = self.store.get(keys::TOKEN)? else {
            debug!("No stored session");
            self.session = Session::empty();
            return Ok(());
        };

        let user = self.store.get(keys::EMAIL)?.map(Identity::new);
        if user.is_none() {
            debug!("Restored token without identity");
        }

        self.session = Session {
            user,
            token: Some(AccessToken::new(token)),
        };
        debug!("Restored session from storage");
        Ok(())
    }

    /// Log in with `email` and `password`.
    ///
    /// On failure the session is left exactly as it was.
    pub async fn login(&mut self, email: &str, password: &str) -> GalleryResult<()> {
        let request = LoginRequest::new(email, password);

        let pair = match self.api.login(&request).await {
            Ok(pair) => pair,
            Err(e) => {
                error!("Login failed: {}", e);
                self.audit(
                    "login.failed",
                    json!({ "email": email, "status": e.status() }),
                )
                .await;
                return Err(login_failure(e));
            }
        };

        let writes = [
            (keys::TOKEN, pair.access.as_str()),
            (keys::REFRESH, pair.refresh.as_str()),
            (keys::EMAIL, email),
        ];
        self.write_all(&writes)?;

        self.session = Session {
            user: Some(Identity::new(email)),
            token: Some(pair.access),
        };

        info!("User logged in successfully");
        self.audit("login.succeeded", json!({ "email": email })).await;
        Ok(())
    }

    /// Log out and forget all local credentials.
    ///
    /// Server-side revocation is attempted when a token is held; its failure
    /// is logged and otherwise ignored. Local state is always cleared.
    pub async fn logout(&mut self) -> GalleryResult<()> {
        if let Some(token) = self.session.token.clone() {
            let refresh = match self.store.get(keys::REFRESH) {
                Ok(value) => value.unwrap_or_default(),
                Err(e) => {
                    warn!("Could not read refresh token: {}", e);
                    String::new()
                }
            };

            let revoked = match self.api.logout(&refresh, token.as_str()).await {
                Ok(()) => true,
                Err(e) => {
                    error!("Logout failed: {}", e);
                    false
                }
            };

            let email = self.session.email().map(str::to_string);
            self.audit("logout", json!({ "email": email, "revoked": revoked }))
                .await;
        } else {
            debug!("Logout without an active session");
        }

        let cleared = self.clear_store();
        self.session = Session::empty();
        info!("User logged out");
        cleared
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current access token, if logged in
    pub fn token(&self) -> Option<&AccessToken> {
        self.session.token.as_ref()
    }

    /// Logged-in user, if known
    pub fn user(&self) -> Option<&Identity> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Stored refresh token
    pub fn refresh_token(&self) -> GalleryResult<Option<String>> {
        self.store.get(keys::REFRESH)
    }

    /// API the manager authenticates against
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Underlying durable store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write every pair or none of them
    fn write_all(&mut self, writes: &[(&str, &str)]) -> GalleryResult<()> {
        let mut previous = Vec::with_capacity(writes.len());
        for (key, _) in writes {
            previous.push((*key, self.store.get(key)?));
        }

        for (key, value) in writes {
            if let Err(e) = self.store.set(key, value) {
                error!("Failed to persist session key {}: {}", key, e);
                self.rollback(&previous);
                return Err(e);
            }
        }
        Ok(())
    }

    fn rollback(&mut self, previous: &[(&str, Option<String>)]) {
        for (key, value) in previous {
            let restored = match value {
                Some(v) => self.store.set(key, v),
                None => self.store.remove(key),
            };
            if let Err(e) = restored {
                warn!("Failed to roll back session key {}: {}", key, e);
            }
        }
    }

    /// Remove every session key, returning the first failure
    fn clear_store(&mut self) -> GalleryResult<()> {
        let mut first_err = None;
        for key in keys::ALL {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove session key {}: {}", key, e);
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    async fn audit(&self, event: &str, data: serde_json::Value) {
        if let Some(ref audit) = self.audit {
            audit.log(event, &data).await;
        }
    }
}

/// Map an API failure to what the login caller sees
fn login_failure(err: GalleryError) -> GalleryError {
    match err {
        GalleryError::Api { body, .. } => GalleryError::Credential {
            message: body.login_message(),
        },
        GalleryError::Network { reason, .. } => GalleryError::network("Login failed", reason),
        _ => GalleryError::Credential {
            message: "Login failed".to_string(),
        },
    }
}
