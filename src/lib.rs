//! # Pier - Styled Terminal Text
//!
//! `pier` turns a color description and a string into text wrapped in ANSI
//! escape codes, ready to write to a terminal.
//!
//! ## Core Concepts
//!
//! - [`ColorSpec`]: a color given by name, hex string, RGB triple or palette index
//! - [`Style`]: an immutable set of attributes (foreground, background, bold, ...)
//! - [`create_style`]: validates a color and builds a foreground style
//! - [`render`]: pure function wrapping text in a style's escape codes
//! - [`OutputMode`]: choose between escape codes, plain text and debug markers
//!
//! ## Quick Start
//!
//! ```rust
//! use pier::{create_style, render, ColorSpec};
//!
//! let style = create_style("#FF0000".parse::<ColorSpec>().unwrap()).unwrap();
//! let styled = render(&style, "Hello");
//!
//! assert!(styled.contains("Hello"));
//! println!("{}", styled);
//! ```
//!
//! ## Color Formats
//!
//! ```text
//! red, bright_yellow, grey   # Named (16 ANSI colors)
//! #ff6b35, #f63              # Hex
//! rgb(255, 107, 53)          # RGB triple
//! 208                        # 256-color palette
//! ```
//!
//! Hex and RGB colors are emitted as the nearest 256-color palette entry.
//!
//! ## Output Modes
//!
//! [`render`] always emits escape codes. [`render_with_output`] lets the
//! caller decide, including an `Auto` mode that follows terminal detection.
//!
//! ```rust
//! use pier::{create_style, render_with_output, ColorSpec, OutputMode};
//!
//! let style = create_style(ColorSpec::Named("cyan".into())).unwrap();
//! assert_eq!(render_with_output(&style, "plain", OutputMode::Text), "plain");
//! ```

pub mod output;
mod render;
pub mod style;

pub use output::OutputMode;
pub use render::{render, render_with_output};
pub use style::{create_style, rgb_to_ansi256, ColorSpec, Style, StyleError};
