//! Login command - authenticate and store the session

use super::open_session;
use crate::cli::args::LoginArgs;
use crate::config::Config;
use crate::error::GalleryResult;
use crate::ui::{self, TaskSpinner, UiContext};

/// Execute the login command
pub async fn execute(args: LoginArgs, config: &Config) -> GalleryResult<()> {
    let ctx = UiContext::detect();
    let mut manager = open_session(config)?;

    if let Some(current) = manager.user() {
        ui::remark(&ctx, &format!("Replacing session for {}", current.email));
    }

    let email = match args.email {
        Some(email) => email,
        None => ui::input(&ctx, "Email", "--email").await?,
    };
    let password = match args.password {
        Some(password) => password,
        None => ui::password(&ctx, "Password", "--password").await?,
    };

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Logging in...");

    match manager.login(&email, &password).await {
        Ok(()) => {
            spinner.stop(&format!("Logged in as {}", email));
            Ok(())
        }
        Err(e) => {
            spinner.clear();
            Err(e)
        }
    }
}
