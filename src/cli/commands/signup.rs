//! Signup command - create an account and log in

use super::open_session;
use crate::account;
use crate::cli::args::SignupArgs;
use crate::config::Config;
use crate::error::GalleryResult;
use crate::ui::{self, TaskSpinner, UiContext};

/// Execute the signup command
pub async fn execute(args: SignupArgs, config: &Config) -> GalleryResult<()> {
    let ctx = UiContext::detect();
    let mut manager = open_session(config)?;

    let password = match args.password {
        Some(password) => password,
        None => ui::password(&ctx, "Password", "--password").await?,
    };

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Creating account...");

    match account::signup(&mut manager, &args.username, &args.email, &password).await {
        Ok(()) => {
            spinner.stop(&format!("Signed up and logged in as {}", args.email));
            Ok(())
        }
        Err(e) => {
            spinner.clear();
            Err(e)
        }
    }
}
