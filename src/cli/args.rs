//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gallery - browse and edit your photo gallery from the terminal
///
/// Log in once; the session is kept on disk until you log out.
#[derive(Parser, Debug)]
#[command(name = "gallery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GALLERY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),

    /// Revoke the session and forget stored tokens
    Logout,

    /// Create an account and log in
    Signup(SignupArgs),

    /// Show who is logged in
    Whoami,

    /// List users with their album and photo counts
    Home(HomeArgs),

    /// Show a user's profile and albums
    Profile(ProfileArgs),

    /// Show an album and its photos
    Album(AlbumArgs),

    /// Show a photo, or change its title
    Photo(PhotoArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email (prompted if omitted)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password (prompted if omitted)
    #[arg(short, long, env = "GALLERY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for the signup command
#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Public username
    #[arg(short, long)]
    pub username: String,

    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Password: 8+ characters with uppercase, lowercase, digit and one of !@#$%^&*
    #[arg(short, long, env = "GALLERY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for the home command
#[derive(Parser, Debug)]
pub struct HomeArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the profile command
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Username whose profile to show
    pub username: String,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the album command
#[derive(Parser, Debug)]
pub struct AlbumArgs {
    /// Album ID
    pub album_id: String,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the photo command
#[derive(Parser, Debug)]
pub struct PhotoArgs {
    /// Photo ID
    pub photo_id: String,

    /// New title for the photo
    #[arg(short, long)]
    pub title: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., api.base_url)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_login() {
        let cli = Cli::parse_from(["gallery", "login", "--email", "a@x.com", "-p", "secret"]);
        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.email.as_deref(), Some("a@x.com"));
                assert_eq!(args.password.as_deref(), Some("secret"));
            }
            _ => panic!("expected Login command"),
        }
    }

    #[test]
    fn cli_parses_logout() {
        let cli = Cli::parse_from(["gallery", "logout"]);
        assert!(matches!(cli.command, Commands::Logout));
    }

    #[test]
    fn cli_parses_signup() {
        let cli = Cli::parse_from([
            "gallery", "signup", "-u", "ada", "-e", "a@x.com", "-p", "Tr1cky!pass",
        ]);
        match cli.command {
            Commands::Signup(args) => {
                assert_eq!(args.username, "ada");
                assert_eq!(args.email, "a@x.com");
            }
            _ => panic!("expected Signup command"),
        }
    }

    #[test]
    fn cli_parses_photo_title() {
        let cli = Cli::parse_from(["gallery", "photo", "p1", "--title", "Sunset"]);
        match cli.command {
            Commands::Photo(args) => {
                assert_eq!(args.photo_id, "p1");
                assert_eq!(args.title.as_deref(), Some("Sunset"));
                assert_eq!(args.format, OutputFormat::Table);
            }
            _ => panic!("expected Photo command"),
        }
    }

    #[test]
    fn cli_parses_home_format() {
        let cli = Cli::parse_from(["gallery", "home", "--format", "json"]);
        match cli.command {
            Commands::Home(args) => assert_eq!(args.format, OutputFormat::Json),
            _ => panic!("expected Home command"),
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["gallery", "config", "set", "api.timeout_secs", "10"]);
        match cli.command {
            Commands::Config(ConfigArgs {
                action: Some(ConfigAction::Set { key, value }),
            }) => {
                assert_eq!(key, "api.timeout_secs");
                assert_eq!(value, "10");
            }
            _ => panic!("expected Config set command"),
        }
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["gallery", "whoami"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["gallery", "-vv", "whoami"]);
        assert_eq!(cli.verbose, 2);
    }
}
