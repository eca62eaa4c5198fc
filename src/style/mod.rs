//! Style system: color specifications and the styles built from them.
//!
//! - [`ColorSpec`]: a color as the caller writes it (named, hex, RGB, palette)
//! - [`Style`]: an immutable bundle of rendering attributes
//! - [`create_style`]: builds a foreground-colored style, validating the color
//! - [`StyleError`]: the single failure mode, an invalid color spec

mod color;
mod error;
#[allow(clippy::module_inception)]
mod style;

pub use color::{rgb_to_ansi256, ColorSpec};
pub use error::StyleError;
pub use style::{create_style, Style};
