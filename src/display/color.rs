//! Color resolution for the terminal surface

use std::io::IsTerminal;

use clap::ValueEnum;

/// When the terminal sink attempts rich rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Follow NO_COLOR/CLICOLOR conventions and TTY detection
    Auto,
    /// Rich rendering even when piped
    Always,
    /// Plain output
    Never,
}

impl ColorMode {
    /// Resolve against the environment and stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => colors_from_env(),
        }
    }
}

/// NO_COLOR wins (https://no-color.org/), CLICOLOR_FORCE enables colors
/// through pipes, CLICOLOR=0 disables them, then TTY status decides
fn colors_from_env() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(value) = std::env::var("CLICOLOR_FORCE") {
        if value != "0" {
            return true;
        }
    }

    if let Ok(value) = std::env::var("CLICOLOR") {
        if value == "0" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_always_and_never_ignore_environment() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    #[serial]
    fn test_no_color_disables() {
        std::env::remove_var("CLICOLOR_FORCE");
        std::env::remove_var("CLICOLOR");

        std::env::set_var("NO_COLOR", "1");
        assert!(!ColorMode::Auto.enabled());
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial]
    fn test_clicolor_force_enables() {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("CLICOLOR");

        std::env::set_var("CLICOLOR_FORCE", "1");
        assert!(ColorMode::Auto.enabled());
        std::env::remove_var("CLICOLOR_FORCE");
    }

    #[test]
    #[serial]
    fn test_no_color_overrides_force() {
        std::env::remove_var("CLICOLOR");

        std::env::set_var("NO_COLOR", "1");
        std::env::set_var("CLICOLOR_FORCE", "1");
        assert!(!ColorMode::Auto.enabled());
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("CLICOLOR_FORCE");
    }

    #[test]
    #[serial]
    fn test_clicolor_zero_disables() {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("CLICOLOR_FORCE");

        std::env::set_var("CLICOLOR", "0");
        assert!(!ColorMode::Auto.enabled());
        std::env::remove_var("CLICOLOR");
    }
}
