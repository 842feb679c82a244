//! Album command - an album and its photos

use super::open_session;
use crate::cli::args::{AlbumArgs, OutputFormat};
use crate::config::Config;
use crate::error::GalleryResult;
use crate::gallery::{AlbumView, GalleryClient};
use crate::ui::{self, UiContext};
use console::style;

/// Execute the album command
pub async fn execute(args: AlbumArgs, config: &Config) -> GalleryResult<()> {
    let manager = open_session(config)?;
    let client = GalleryClient::from_session(manager.api(), manager.session())?;
    let view = client.album(&args.album_id).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => {
            for photo in &view.photos {
                println!("{}", photo.id);
            }
        }
        OutputFormat::Table => print_album(&view, &config.api.base_url),
    }
    Ok(())
}

fn print_album(view: &AlbumView, base_url: &str) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, &view.album.title);

    if view.photos.is_empty() {
        ui::step_info(&ctx, "No photos in this album");
        return;
    }

    println!(
        "{:<38} {:<24} {:<6} {}",
        style("ID").bold(),
        style("TITLE").bold(),
        style("KIND").bold(),
        style("URL").bold()
    );

    for photo in &view.photos {
        println!(
            "{:<38} {:<24} {:<6} {}",
            photo.id.to_string(),
            photo.title,
            photo.media_kind().as_str(),
            photo.media_url(base_url).unwrap_or_else(|| "-".to_string())
        );
    }

    println!();
    println!("{} photo(s)", view.photos.len());
}
