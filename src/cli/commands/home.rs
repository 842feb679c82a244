//! Home command - users with album and photo counts

use super::open_session;
use crate::cli::args::{HomeArgs, OutputFormat};
use crate::config::Config;
use crate::error::GalleryResult;
use crate::gallery::{GalleryClient, Overview};
use crate::ui::{self, UiContext};
use console::style;

/// Execute the home command
pub async fn execute(args: HomeArgs, config: &Config) -> GalleryResult<()> {
    let manager = open_session(config)?;
    let client = GalleryClient::from_session(manager.api(), manager.session())?;
    let overview = client.home().await?;

    match args.format {
        OutputFormat::Table => print_table(&overview),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overview)?),
        OutputFormat::Plain => {
            for user in &overview.users {
                println!("{}", user.username);
            }
        }
    }
    Ok(())
}

fn print_table(overview: &Overview) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Gallery Users");

    if overview.users.is_empty() {
        ui::step_info(&ctx, "No users found");
        return;
    }

    println!(
        "{:<24} {:<8} {:<8}",
        style("USER").bold(),
        style("ALBUMS").bold(),
        style("PHOTOS").bold()
    );
    println!("{}", "-".repeat(42));

    for user in &overview.users {
        println!(
            "{:<24} {:<8} {:<8}",
            user.username,
            overview.albums_for(&user.id).len(),
            overview.photo_count(&user.id)
        );
    }

    println!();
    println!("{} user(s)", overview.users.len());
}
