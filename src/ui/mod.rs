//! Terminal output for the gallery CLI
//!
//! Uses `cliclack` for prompts and spinners when attached to a terminal,
//! and plain line-oriented output otherwise (pipes, CI, tests).

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{intro, key_value, remark, section, step_info, step_ok, step_warn_hint};
pub use progress::TaskSpinner;
pub use prompts::{input, password};
pub use theme::{init_theme, GalleryTheme};
