//! Profile command - a user's bio and albums

use super::open_session;
use crate::cli::args::{OutputFormat, ProfileArgs};
use crate::config::Config;
use crate::error::GalleryResult;
use crate::gallery::{GalleryClient, PhotoRef, Profile};
use crate::ui::{self, UiContext};

/// Execute the profile command
pub async fn execute(args: ProfileArgs, config: &Config) -> GalleryResult<()> {
    let manager = open_session(config)?;
    let client = GalleryClient::from_session(manager.api(), manager.session())?;
    let profile = client.profile(&args.username).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Plain => {
            for album in &profile.albums {
                println!("{}\t{}", album.id, album.title);
            }
        }
        OutputFormat::Table => print_profile(&profile),
    }
    Ok(())
}

fn print_profile(profile: &Profile) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, &format!("{}'s Profile", profile.username));

    let bio = profile.bio.as_deref().filter(|b| !b.is_empty());
    ui::key_value(&ctx, "Bio", bio.unwrap_or("No bio available"));
    ui::key_value(
        &ctx,
        "Profile image",
        if profile.image.is_some() { "Yes" } else { "None" },
    );

    ui::section(&ctx, "Albums");
    if profile.albums.is_empty() {
        ui::step_info(&ctx, "No albums found");
        return;
    }

    for album in &profile.albums {
        println!("  {} ({}) - {} photo(s)", album.title, album.id, album.photo_count());
        for photo in album.photos.iter().flatten() {
            match photo {
                PhotoRef::Full(photo) => println!("    - {} [{}]", photo.title, photo.id),
                PhotoRef::Id(id) => println!("    - [{}]", id),
            }
        }
    }
}
