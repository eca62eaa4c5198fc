//! Output mode selection.

use std::fmt;
use std::str::FromStr;

/// Controls how styled text is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputMode {
    /// Escape codes when stdout supports color, plain text otherwise.
    ///
    /// Detection honors `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
    #[default]
    Auto,
    /// Always emit escape codes.
    Term,
    /// Never emit escape codes.
    Text,
    /// Emit readable `[attrs]text[/attrs]` markers instead of escape codes.
    TermDebug,
}

impl OutputMode {
    /// Returns true if escape codes should be written.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    /// Returns true if styles should be shown as readable markers.
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" | "term_debug" => Ok(OutputMode::TermDebug),
            other => Err(format!(
                "unknown output mode '{}' (expected auto, term, text or term-debug)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_fixed_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(OutputMode::TermDebug.is_debug());
        assert!(!OutputMode::Term.is_debug());
    }

    #[test]
    #[serial]
    fn test_auto_follows_terminal_detection() {
        console::set_colors_enabled(true);
        assert!(OutputMode::Auto.should_use_color());

        console::set_colors_enabled(false);
        let disabled = OutputMode::Auto.should_use_color();
        console::set_colors_enabled(true);
        assert!(!disabled);
    }

    #[test]
    fn test_parse_and_display_agree() {
        for mode in [
            OutputMode::Auto,
            OutputMode::Term,
            OutputMode::Text,
            OutputMode::TermDebug,
        ] {
            assert_eq!(mode.to_string().parse::<OutputMode>().unwrap(), mode);
        }
        assert!("loud".parse::<OutputMode>().is_err());
    }
}
