//! cliclack theme

use cliclack::ThemeState;
use console::Style;

/// Magenta accents for the gallery CLI
#[derive(Debug, Clone, Default)]
pub struct GalleryTheme;

impl cliclack::Theme for GalleryTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().magenta(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().magenta().dim(),
        }
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().magenta(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().green(),
        }
    }
}

/// Install the theme for all cliclack widgets
pub fn init_theme() {
    cliclack::set_theme(GalleryTheme);
}
