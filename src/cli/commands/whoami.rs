//! Whoami command - show the current identity

use super::open_session;
use crate::config::Config;
use crate::error::GalleryResult;
use crate::ui::{self, UiContext};

/// Execute the whoami command
pub async fn execute(config: &Config) -> GalleryResult<()> {
    let ctx = UiContext::detect();
    let manager = open_session(config)?;

    match (manager.token(), manager.user()) {
        (None, _) => ui::step_warn_hint(&ctx, "Not logged in", "Run: gallery login"),
        (Some(_), Some(user)) => println!("{}", user.email),
        (Some(_), None) => println!("(unknown identity)"),
    }
    Ok(())
}
