//! Applying styles to text.

use crate::output::OutputMode;
use crate::style::Style;

/// Wraps `text` in the escape codes for `style`.
///
/// The text is copied verbatim between the opening codes and the trailing
/// reset. Output does not depend on terminal detection, so the same inputs
/// always give the same string. A style with no attributes returns the text
/// unchanged.
///
/// Rendering already-rendered text nests the wrappers; the inner text and
/// its codes are left intact.
///
/// # Example
///
/// ```rust
/// use pier::{create_style, render, ColorSpec};
///
/// let red = create_style(ColorSpec::Named("red".into())).unwrap();
/// assert_eq!(render(&red, "Hello"), "\x1b[31mHello\x1b[0m");
/// assert_eq!(render(&red, ""), "\x1b[31m\x1b[0m");
/// ```
pub fn render(style: &Style, text: &str) -> String {
    style.to_console().apply_to(text).to_string()
}

/// Renders `text` according to an [`OutputMode`].
///
/// - `Term` behaves like [`render`]
/// - `Text` returns the text untouched
/// - `TermDebug` wraps it in `[attrs]...[/attrs]` markers
/// - `Auto` picks `Term` or `Text` from terminal detection
///
/// # Example
///
/// ```rust
/// use pier::{create_style, render_with_output, ColorSpec, OutputMode};
///
/// let style = create_style("#FF0000".parse::<ColorSpec>().unwrap()).unwrap().bold();
/// assert_eq!(render_with_output(&style, "Hi", OutputMode::Text), "Hi");
/// assert_eq!(
///     render_with_output(&style, "Hi", OutputMode::TermDebug),
///     "[fg=#ff0000 bold]Hi[/fg=#ff0000 bold]"
/// );
/// ```
pub fn render_with_output(style: &Style, text: &str, mode: OutputMode) -> String {
    if mode.is_debug() {
        render_debug(style, text)
    } else if mode.should_use_color() {
        render(style, text)
    } else {
        text.to_string()
    }
}

fn render_debug(style: &Style, text: &str) -> String {
    if style.is_plain() {
        return text.to_string();
    }
    let tag = style.to_string();
    format!("[{}]{}[/{}]", tag, text, tag)
}
