//! Photo command - show a photo or change its title

use super::open_session;
use crate::cli::args::{OutputFormat, PhotoArgs};
use crate::config::Config;
use crate::error::GalleryResult;
use crate::gallery::{GalleryClient, Photo};
use crate::ui::{self, UiContext};

/// Execute the photo command
pub async fn execute(args: PhotoArgs, config: &Config) -> GalleryResult<()> {
    let ctx = UiContext::detect();
    let manager = open_session(config)?;
    let client = GalleryClient::from_session(manager.api(), manager.session())?;

    let photo = match args.title {
        Some(ref title) => {
            let photo = client.update_photo_title(&args.photo_id, title).await?;
            if args.format == OutputFormat::Table {
                ui::step_ok(&ctx, "Photo title updated");
            }
            photo
        }
        None => client.photo(&args.photo_id).await?,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&photo)?),
        OutputFormat::Plain => println!("{}", photo.title),
        OutputFormat::Table => print_photo(&ctx, &photo, &config.api.base_url),
    }
    Ok(())
}

fn print_photo(ctx: &UiContext, photo: &Photo, base_url: &str) {
    ui::section(ctx, &photo.title);
    ui::key_value(ctx, "ID", &photo.id.to_string());
    if let Some(ref album) = photo.album {
        ui::key_value(ctx, "Album", &album.to_string());
    }
    ui::key_value(ctx, "Kind", photo.media_kind().as_str());
    ui::key_value(
        ctx,
        "URL",
        photo.media_url(base_url).as_deref().unwrap_or("-"),
    );
}
