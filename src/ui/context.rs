//! Interactive vs. plain output detection

use std::io::IsTerminal;

/// Environment variables set by common CI systems
const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "JENKINS_URL",
    "TF_BUILD",
];

/// Decides whether output may prompt and animate
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    interactive: bool,
}

impl UiContext {
    /// Detect from the current process: both stdin and stdout must be
    /// terminals and no CI marker may be set.
    pub fn detect() -> Self {
        let terminal = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        let ci = CI_VARS.iter().any(|v| std::env::var_os(v).is_some());
        Self {
            interactive: terminal && !ci,
        }
    }

    /// Plain output, never prompts
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// Whether prompts can be shown
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether spinners and styled logs should be used
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }
}
