//! CLI command implementations

pub mod album;
pub mod config;
pub mod home;
pub mod login;
pub mod logout;
pub mod photo;
pub mod profile;
pub mod signup;
pub mod whoami;

pub use album::execute as album;
pub use config::execute as config;
pub use home::execute as home;
pub use login::execute as login;
pub use logout::execute as logout;
pub use photo::execute as photo;
pub use profile::execute as profile;
pub use signup::execute as signup;
pub use whoami::execute as whoami;

use crate::api::HttpApi;
use crate::audit::AuditLog;
use crate::config::{Config, ConfigManager};
use crate::error::GalleryResult;
use crate::session::SessionManager;
use crate::storage::FileTokenStore;
use tracing::debug;

/// Session manager wired to the configured service and session file
pub type CliSession = SessionManager<HttpApi, FileTokenStore>;

/// Build the session manager and restore any stored session
pub(crate) fn open_session(config: &Config) -> GalleryResult<CliSession> {
    let path = ConfigManager::session_path_for(config);
    debug!("Session file: {}", path.display());

    let store = FileTokenStore::open(path)?;
    let api = HttpApi::new(config.api.clone());
    let mut manager = SessionManager::new(api, store).with_audit(AuditLog::new(config));
    manager.initialize()?;
    Ok(manager)
}
