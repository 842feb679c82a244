//! Error types for the gallery client
//!
//! All modules use `GalleryResult<T>` as their return type.

use crate::api::ApiErrorBody;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// All errors that can occur in the gallery client
#[derive(Error, Debug)]
pub enum GalleryError {
    // Authentication errors
    #[error("{message}")]
    Credential { message: String },

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Password must be 8+ characters with uppercase, lowercase, digit, and symbol")]
    WeakPassword,

    #[error("{0}")]
    Signup(String),

    // Remote API errors
    #[error("{context}: {reason}")]
    Network { context: String, reason: String },

    #[error("API request failed with status {status}{}", detail_suffix(.body))]
    Api { status: u16, body: ApiErrorBody },

    #[error("{0} not found")]
    NotFound(String),

    // Storage errors
    #[error("Session storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl GalleryError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a network error with context
    pub fn network(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::Network {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a storage error for a store file
    pub fn storage(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Storage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status of a rejected API call, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotAuthenticated => Some("Run: gallery login"),
            Self::Network { .. } => Some("Check api.base_url with: gallery config show"),
            Self::Api { status: 401, .. } => Some("Your session may have expired. Run: gallery login"),
            Self::WeakPassword => Some("Example: Tr1cky!pass"),
            _ => None,
        }
    }
}

fn detail_suffix(body: &ApiErrorBody) -> String {
    body.detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}
