//! Color specifications and their mapping onto terminal colors.
//!
//! A [`ColorSpec`] is what callers write; a `TermColor` is what the terminal
//! backend can emit. Resolution validates the former into the latter.
//!
//! ## Accepted shapes
//!
//! ```text
//! red, bright_cyan, grey   # Named (16 ANSI colors, case-insensitive)
//! #f00, #FF6B35            # Hex, short or long form
//! rgb(255, 107, 53)        # RGB triple, also "255,107,53"
//! 208                      # 256-color palette index
//! ```

use console::Color;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::StyleError;

/// The eight base ANSI colors, in SGR order (30..=37).
const BASE_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Channel values of the 6x6x6 xterm color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

static NAMED_COLORS: Lazy<HashMap<String, TermColor>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (index, name) in BASE_COLORS.iter().enumerate() {
        let index = index as u8;
        map.insert(
            name.to_string(),
            TermColor::Ansi {
                index,
                bright: false,
            },
        );
        map.insert(
            format!("bright_{}", name),
            TermColor::Ansi {
                index,
                bright: true,
            },
        );
    }
    for gray in ["gray", "grey"] {
        map.insert(
            gray.to_string(),
            TermColor::Ansi {
                index: 0,
                bright: true,
            },
        );
    }
    map
});

/// A user-facing color description.
///
/// Construct one directly, or parse it from a string with
/// [`ColorSpec::parse`] / [`str::parse`]. Named and hex variants carry raw
/// text and are validated when a style is built from them.
///
/// # Example
///
/// ```rust
/// use pier::ColorSpec;
///
/// assert_eq!("#FF0000".parse::<ColorSpec>().unwrap(), ColorSpec::Hex("#FF0000".into()));
/// assert_eq!("rgb(0, 128, 255)".parse::<ColorSpec>().unwrap(), ColorSpec::Rgb(0, 128, 255));
/// assert_eq!("208".parse::<ColorSpec>().unwrap(), ColorSpec::Palette(208));
/// assert!("not-a-color".parse::<ColorSpec>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawColor")]
pub enum ColorSpec {
    /// One of the 16 ANSI color names, e.g. `red` or `bright_blue`.
    Named(String),
    /// `#RGB` or `#RRGGBB`.
    Hex(String),
    /// Explicit red, green and blue channels.
    Rgb(u8, u8, u8),
    /// An index into the 256-color palette.
    Palette(u8),
}

impl ColorSpec {
    /// Parses a color from any of the accepted string shapes.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColorSpec`] for empty input, malformed hex,
    /// out-of-range components and unknown names.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(StyleError::invalid(input, "empty color"));
        }

        if trimmed.starts_with('#') {
            parse_hex(trimmed)?;
            return Ok(ColorSpec::Hex(trimmed.to_string()));
        }

        if let Some(body) = triple_body(trimmed) {
            let (r, g, b) = parse_triple(trimmed, body)?;
            return Ok(ColorSpec::Rgb(r, g, b));
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return palette_index(trimmed, value).map(ColorSpec::Palette);
        }

        lookup_named(trimmed)?;
        Ok(ColorSpec::Named(trimmed.to_string()))
    }

    /// Validates the spec and maps it to a color the terminal can display.
    ///
    /// Hex and RGB colors land on the nearest 256-color palette entry.
    pub(crate) fn resolve(&self) -> Result<TermColor, StyleError> {
        match self {
            ColorSpec::Named(name) => lookup_named(name),
            ColorSpec::Hex(hex) => parse_hex(hex).map(|rgb| TermColor::Palette(rgb_to_ansi256(rgb))),
            ColorSpec::Rgb(r, g, b) => Ok(TermColor::Palette(rgb_to_ansi256((*r, *g, *b)))),
            ColorSpec::Palette(index) => Ok(TermColor::Palette(*index)),
        }
    }
}

impl FromStr for ColorSpec {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSpec::parse(s)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        ColorSpec::Palette(index)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Named(name) => f.write_str(&normalize_name(name)),
            ColorSpec::Hex(hex) => match parse_hex(hex) {
                Ok((r, g, b)) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
                Err(_) => f.write_str(hex),
            },
            ColorSpec::Rgb(r, g, b) => write!(f, "rgb({}, {}, {})", r, g, b),
            ColorSpec::Palette(index) => write!(f, "{}", index),
        }
    }
}

/// Wire shapes accepted when deserializing a [`ColorSpec`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Index(i64),
    Triple(i64, i64, i64),
    Text(String),
}

impl TryFrom<RawColor> for ColorSpec {
    type Error = StyleError;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        match raw {
            RawColor::Index(value) => {
                palette_index(&value.to_string(), value).map(ColorSpec::Palette)
            }
            RawColor::Triple(r, g, b) => {
                let input = format!("[{}, {}, {}]", r, g, b);
                Ok(ColorSpec::Rgb(
                    channel(&input, r)?,
                    channel(&input, g)?,
                    channel(&input, b)?,
                ))
            }
            RawColor::Text(text) => ColorSpec::parse(&text),
        }
    }
}

/// A validated color in the form the terminal backend emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TermColor {
    /// Base ANSI color `index` (0..8), optionally the bright variant.
    Ansi { index: u8, bright: bool },
    /// 256-color palette entry.
    Palette(u8),
}

impl TermColor {
    /// Returns the backend color and whether the bright variant is wanted.
    pub(crate) fn to_console(self) -> (Color, bool) {
        match self {
            TermColor::Ansi { index, bright } => {
                let color = match index {
                    0 => Color::Black,
                    1 => Color::Red,
                    2 => Color::Green,
                    3 => Color::Yellow,
                    4 => Color::Blue,
                    5 => Color::Magenta,
                    6 => Color::Cyan,
                    _ => Color::White,
                };
                (color, bright)
            }
            TermColor::Palette(index) => (Color::Color256(index), false),
        }
    }
}

/// Maps an RGB triple onto the closest entry of the xterm 256-color palette.
///
/// Both the 6x6x6 color cube (16..=231) and the grayscale ramp (232..=255)
/// are considered; the cube wins ties.
///
/// # Example
///
/// ```rust
/// use pier::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let (ri, gi, bi) = (cube_step(r), cube_step(g), cube_step(b));
    let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_code = 16 + 36 * ri as u8 + 6 * gi as u8 + bi as u8;

    // Ramp entry n has level 8 + 10n.
    let mean = (r as u32 + g as u32 + b as u32) / 3;
    let step = (mean.saturating_sub(8) + 5) / 10;
    let step = step.min(23) as u8;
    let level = 8 + 10 * step;
    let gray_code = 232 + step;

    if distance((r, g, b), cube) <= distance((r, g, b), (level, level, level)) {
        cube_code
    } else {
        gray_code
    }
}

fn cube_step(value: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .fold((0, u32::MAX), |(best, best_diff), (i, &level)| {
            let diff = (level as i32 - value as i32).unsigned_abs();
            if diff < best_diff {
                (i, diff)
            } else {
                (best, best_diff)
            }
        })
        .0
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

fn lookup_named(name: &str) -> Result<TermColor, StyleError> {
    NAMED_COLORS
        .get(&normalize_name(name))
        .copied()
        .ok_or_else(|| StyleError::invalid(name, "unknown color name"))
}

fn parse_hex(input: &str) -> Result<(u8, u8, u8), StyleError> {
    let digits = input
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| StyleError::invalid(input, "hex colors start with '#'"))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StyleError::invalid(input, "contains a non-hex digit"));
    }

    let byte = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| StyleError::invalid(input, "contains a non-hex digit"))
    };

    match digits.len() {
        3 => {
            let r = byte(&digits[0..1])?;
            let g = byte(&digits[1..2])?;
            let b = byte(&digits[2..3])?;
            Ok((r * 17, g * 17, b * 17))
        }
        6 => Ok((
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
        )),
        _ => Err(StyleError::invalid(input, "expected #RGB or #RRGGBB")),
    }
}

/// Returns the comma-separated body of `rgb(r, g, b)` or `r,g,b`, if the
/// input has that shape.
fn triple_body(input: &str) -> Option<&str> {
    let lower = input.to_ascii_lowercase();
    if lower.starts_with("rgb(") && lower.ends_with(')') {
        Some(&input[4..input.len() - 1])
    } else if input.contains(',') {
        Some(input)
    } else {
        None
    }
}

fn parse_triple(input: &str, body: &str) -> Result<(u8, u8, u8), StyleError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(StyleError::invalid(input, "expected three components"));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: i64 = part.parse().map_err(|_| {
            StyleError::invalid(input, format!("'{}' is not an integer component", part))
        })?;
        *slot = channel(input, value)?;
    }
    Ok((channels[0], channels[1], channels[2]))
}

fn channel(input: &str, value: i64) -> Result<u8, StyleError> {
    u8::try_from(value)
        .map_err(|_| StyleError::invalid(input, format!("component {} is outside 0..=255", value)))
}

fn palette_index(input: &str, value: i64) -> Result<u8, StyleError> {
    u8::try_from(value).map_err(|_| {
        StyleError::invalid(input, format!("palette index {} is outside 0..=255", value))
    })
}
