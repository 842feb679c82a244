//! Logout command - revoke and forget the stored session

use super::open_session;
use crate::config::Config;
use crate::error::GalleryResult;
use crate::ui::{self, UiContext};

/// Execute the logout command
pub async fn execute(config: &Config) -> GalleryResult<()> {
    let ctx = UiContext::detect();
    let mut manager = open_session(config)?;
    let was_authenticated = manager.is_authenticated();

    manager.logout().await?;

    if was_authenticated {
        ui::step_ok(&ctx, "Logged out");
    } else {
        ui::step_info(&ctx, "Not logged in");
    }
    Ok(())
}
