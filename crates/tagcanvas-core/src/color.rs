//! Color parsing for shape styles.

use crate::error::{CanvasError, CanvasResult};
use peniko::Color;
use std::fmt;

/// RGBA8 color value, comparable and copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// A color as the caller spelled it, together with its resolved value.
///
/// The spelling is kept because default tags are built from it
/// (`"graph blue oval"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paint {
    name: String,
    rgba: Rgba,
}

impl Paint {
    /// Parse a CSS color: a name (`"blue"`, `"darkgreen"`) or a hex string
    /// (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    pub fn parse(spec: &str) -> CanvasResult<Self> {
        let name = spec.trim();
        let color = name.parse::<Color>().map_err(|err| {
            log::debug!("Rejected color {:?}: {}", spec, err);
            CanvasError::InvalidColor(spec.to_string())
        })?;
        Ok(Self {
            name: name.to_string(),
            rgba: color.into(),
        })
    }

    /// The color as written by the caller (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    /// Get the color as a peniko Color.
    pub fn color(&self) -> Color {
        self.rgba.into()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
