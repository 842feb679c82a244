//! Text prompts with a non-interactive fallback

use super::context::UiContext;
use crate::error::{GalleryError, GalleryResult};

/// Ask for a line of text. Fails outside a terminal, naming `flag` as the
/// way to supply the value instead.
pub async fn input(ctx: &UiContext, message: &str, flag: &str) -> GalleryResult<String> {
    if !ctx.is_interactive() {
        return Err(missing(flag));
    }

    let message = message.to_string();
    tokio::task::spawn_blocking(move || cliclack::input(&message).interact::<String>())
        .await
        .map_err(|e| GalleryError::User(format!("Prompt task failed: {}", e)))?
        .map_err(|e| GalleryError::User(format!("Prompt failed: {}", e)))
}

/// Ask for a password without echoing it
pub async fn password(ctx: &UiContext, message: &str, flag: &str) -> GalleryResult<String> {
    if !ctx.is_interactive() {
        return Err(missing(flag));
    }

    let message = message.to_string();
    tokio::task::spawn_blocking(move || cliclack::password(&message).mask('▪').interact())
        .await
        .map_err(|e| GalleryError::User(format!("Prompt task failed: {}", e)))?
        .map_err(|e| GalleryError::User(format!("Prompt failed: {}", e)))
}

fn missing(flag: &str) -> GalleryError {
    GalleryError::User(format!("{} is required when not running interactively", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn non_interactive_requires_flag() {
        let ctx = UiContext::non_interactive();

        let err = input(&ctx, "Email", "--email").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "--email is required when not running interactively"
        );

        let err = password(&ctx, "Password", "--password").await.unwrap_err();
        assert!(err.to_string().starts_with("--password"));
    }
}
