//! The immutable [`Style`] value and its constructors.

use std::fmt;

use super::color::{ColorSpec, TermColor};
use super::error::StyleError;

/// A validated color together with the spec it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Paint {
    spec: ColorSpec,
    color: TermColor,
}

impl Paint {
    fn new(spec: ColorSpec) -> Result<Self, StyleError> {
        let color = spec.resolve()?;
        Ok(Self { spec, color })
    }
}

/// A set of rendering attributes applied to text.
///
/// Styles are plain values: builder methods consume the style and return a
/// new one, and every color is validated at the moment it is set, so a
/// `Style` that exists can always be rendered.
///
/// # Example
///
/// ```rust
/// use pier::{ColorSpec, Style};
///
/// let style = Style::new()
///     .foreground("#FF0000".parse::<ColorSpec>().unwrap())
///     .unwrap()
///     .bold();
///
/// let out = style.render("Hello");
/// assert!(out.contains("Hello"));
/// assert_ne!(out, "Hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    foreground: Option<Paint>,
    background: Option<Paint>,
    bold: bool,
    dim: bool,
    italic: bool,
    underline: bool,
}

impl Style {
    /// Creates a style with no attributes. Rendering with it returns the
    /// text unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColorSpec`] if `spec` is not a valid color.
    pub fn foreground(mut self, spec: ColorSpec) -> Result<Self, StyleError> {
        self.foreground = Some(Paint::new(spec)?);
        Ok(self)
    }

    /// Sets the background color.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColorSpec`] if `spec` is not a valid color.
    pub fn background(mut self, spec: ColorSpec) -> Result<Self, StyleError> {
        self.background = Some(Paint::new(spec)?);
        Ok(self)
    }

    /// Renders text in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Renders text with reduced intensity.
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Renders text in italics.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Underlines the text.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Returns the foreground color as it was specified.
    pub fn foreground_spec(&self) -> Option<&ColorSpec> {
        self.foreground.as_ref().map(|p| &p.spec)
    }

    /// Returns the background color as it was specified.
    pub fn background_spec(&self) -> Option<&ColorSpec> {
        self.background.as_ref().map(|p| &p.spec)
    }

    /// Returns true if the style has no attributes, so rendering leaves
    /// text unchanged.
    pub fn is_plain(&self) -> bool {
        self.foreground.is_none()
            && self.background.is_none()
            && !(self.bold || self.dim || self.italic || self.underline)
    }

    /// Renders `text` with this style. See [`crate::render`].
    pub fn render(&self, text: &str) -> String {
        crate::render::render(self, text)
    }

    /// Builds the backend style. Styling is forced so output does not depend
    /// on terminal detection.
    pub(crate) fn to_console(&self) -> console::Style {
        let mut style = console::Style::new().force_styling(true);

        if let Some(fg) = &self.foreground {
            let (color, bright) = fg.color.to_console();
            style = style.fg(color);
            if bright {
                style = style.bright();
            }
        }
        if let Some(bg) = &self.background {
            let (color, bright) = bg.color.to_console();
            style = style.bg(color);
            if bright {
                style = style.on_bright();
            }
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underlined();
        }
        style
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(spec) = self.foreground_spec() {
            parts.push(format!("fg={}", spec));
        }
        if let Some(spec) = self.background_spec() {
            parts.push(format!("bg={}", spec));
        }
        for (on, name) in [
            (self.bold, "bold"),
            (self.dim, "dim"),
            (self.italic, "italic"),
            (self.underline, "underline"),
        ] {
            if on {
                parts.push(name.to_string());
            }
        }
        f.write_str(&parts.join(" "))
    }
}

/// Builds a style with the given foreground color.
///
/// # Errors
///
/// Returns [`StyleError::InvalidColorSpec`] if the color cannot be resolved;
/// no style is produced in that case.
///
/// # Example
///
/// ```rust
/// use pier::{create_style, render, ColorSpec};
///
/// let style = create_style("#FF0000".parse::<ColorSpec>().unwrap()).unwrap();
/// assert_eq!(render(&style, "Hello"), "\x1b[38;5;196mHello\x1b[0m");
///
/// assert!(create_style(ColorSpec::Named("not-a-color".into())).is_err());
/// ```
pub fn create_style(foreground: ColorSpec) -> Result<Style, StyleError> {
    let style = Style::new().foreground(foreground)?;
    tracing::trace!(style = %style, "created style");
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(s: &str) -> ColorSpec {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_style_sets_foreground() {
        let style = create_style(spec("#FF0000")).unwrap();
        assert_eq!(style.foreground_spec(), Some(&ColorSpec::Hex("#FF0000".into())));
        assert!(style.background_spec().is_none());
        assert!(!style.is_plain());
    }

    #[test]
    fn test_create_style_rejects_invalid_variants() {
        let err = create_style(ColorSpec::Named("not-a-color".into())).unwrap_err();
        assert_eq!(err.input(), "not-a-color");
        assert!(create_style(ColorSpec::Hex("#XYZ".into())).is_err());
        assert!(create_style(ColorSpec::Hex(String::new())).is_err());
    }

    #[test]
    fn test_create_style_is_repeatable() {
        let a = create_style(spec("#FF0000")).unwrap();
        let b = create_style(spec("#FF0000")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_style_is_plain() {
        assert!(Style::new().is_plain());
        assert_eq!(Style::new().to_string(), "");
    }

    #[test]
    fn test_background_error_leaves_no_style() {
        let result = Style::new().bold().background(ColorSpec::Named("nope".into()));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_lists_attributes() {
        let style = create_style(spec("red"))
            .unwrap()
            .background(spec("#00f"))
            .unwrap()
            .bold()
            .underline();
        assert_eq!(style.to_string(), "fg=red bg=#0000ff bold underline");
    }

    #[test]
    fn test_style_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Style>();
    }
}
