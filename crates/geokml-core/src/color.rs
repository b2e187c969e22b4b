//! Color handling for geokml documents
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and encodes it the way KML expects: four 8-bit
//! channels packed as `aabbggrr`, i.e. alpha first and the RGB channels in
//! reverse order.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Rgba8, Srgb};

use crate::error::ValueError;

/// Wrapper around the `DynamicColor` type from the color crate
///
/// `Display` writes the KML `aabbggrr` form.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_kml_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use geokml_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_kml_hex(), "ff0000ff");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ValueError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(ValueError::InvalidColor {
                input: color_str.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Creates a color from 8-bit sRGB channels and alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgba8(r, g, b, a)),
        }
    }

    /// Parses the KML `aabbggrr` form.
    ///
    /// Exactly eight hex digits are accepted, in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use geokml_core::color::Color;
    ///
    /// let translucent_blue = Color::from_kml_hex("7fff0000").unwrap();
    /// assert_eq!(translucent_blue.to_rgba8().b, 255);
    /// assert_eq!(translucent_blue.to_rgba8().a, 127);
    /// ```
    pub fn from_kml_hex(hex: &str) -> Result<Self, ValueError> {
        let invalid = |reason: &str| ValueError::InvalidColor {
            input: hex.to_string(),
            reason: reason.to_string(),
        };

        if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("expected 8 hex digits in aabbggrr order"));
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|err| invalid(&err.to_string()))?;
        let [a, b, g, r] = packed.to_be_bytes();

        Ok(Self::from_rgba8(r, g, b, a))
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, between 0.0 (fully transparent)
    ///   and 1.0 (fully opaque)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Opaque black, `ff000000`.
    pub fn black() -> Self {
        Self::from_rgba8(0, 0, 0, 255)
    }

    /// Opaque white, `ffffffff`.
    pub fn white() -> Self {
        Self::from_rgba8(255, 255, 255, 255)
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Converts to 8-bit sRGB channels.
    pub fn to_rgba8(self) -> Rgba8 {
        self.color.to_alpha_color::<Srgb>().to_rgba8()
    }

    /// Returns the KML encoding: 8 lowercase hex digits, `aabbggrr`.
    pub fn to_kml_hex(self) -> String {
        let Rgba8 { r, g, b, a } = self.to_rgba8();
        format!("{a:02x}{b:02x}{g:02x}{r:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kml_hex())
    }
}

impl FromStr for Color {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
