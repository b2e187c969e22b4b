//! Geographic primitives carried by geokml documents.
//!
//! This module provides the plain value types that flow from the sphere model
//! into coordinate-bearing elements:
//!
//! - [`Coordinate`] - A longitude/latitude/altitude triple
//! - [`Vec2`] - A 2-D anchor point with per-axis [`Units`]
//! - [`coordinates_from_flat`] - Reads coordinates out of a flat `f64` buffer
//!
//! # Coordinate Conventions
//!
//! Longitude and latitude are in decimal degrees, altitude in meters. No range
//! validation is performed anywhere: out-of-range values are carried and
//! serialized as given.
//!
//! # Altitude
//!
//! An altitude of exactly `0` is indistinguishable from "no altitude". The
//! textual form written by [`Coordinate`]'s `Display` impl omits the third
//! component whenever the altitude is zero, so `Coordinate::new(1.0, 2.0)` and
//! `Coordinate::new(1.0, 2.0).with_alt(0.0)` serialize identically.

use std::{fmt, str::FromStr};

use crate::error::ValueError;

/// A geographic position: longitude and latitude in degrees, altitude in meters.
///
/// Equality is exact field equality; there is no epsilon comparison.
///
/// # Examples
///
/// ```
/// # use geokml_core::geometry::Coordinate;
/// let flat = Coordinate::new(1.23, 4.56);
/// assert_eq!(flat.to_string(), "1.23,4.56");
///
/// let raised = flat.with_alt(7.89);
/// assert_eq!(raised.to_string(), "1.23,4.56,7.89");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
    alt: f64,
}

impl Coordinate {
    /// Creates a coordinate at ground level
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, alt: 0.0 }
    }

    /// Returns a copy of this coordinate with the given altitude
    pub const fn with_alt(mut self, alt: f64) -> Self {
        self.alt = alt;
        self
    }

    /// Returns the longitude in degrees
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Returns the latitude in degrees
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Returns the altitude in meters
    pub fn alt(self) -> f64 {
        self.alt
    }

    /// Whether the altitude is written when this coordinate is serialized.
    ///
    /// Only a non-zero altitude is written; see the [module documentation](self).
    pub fn has_alt(self) -> bool {
        self.alt != 0.0
    }
}

/// Writes `lon,lat` or `lon,lat,alt` with shortest round-tripping decimals.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alt() {
            write!(f, "{},{},{}", self.lon, self.lat, self.alt)
        } else {
            write!(f, "{},{}", self.lon, self.lat)
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from([lon, lat, alt]: [f64; 3]) -> Self {
        Self::new(lon, lat).with_alt(alt)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((lon, lat, alt): (f64, f64, f64)) -> Self {
        Self::new(lon, lat).with_alt(alt)
    }
}

/// Reads coordinates from a flat buffer of interleaved values.
///
/// Starting at `start`, one coordinate is read every `stride` values until
/// `end`. Each coordinate takes its first `dim` values: two for `lon,lat`,
/// three for `lon,lat,alt`. Any values between `dim` and `stride` are skipped.
///
/// # Errors
///
/// Returns [`ValueError::InvalidLayout`] if `dim` is not 2 or 3, `stride` is
/// smaller than `dim`, the range is reversed or extends past the buffer, or
/// the range is not a whole number of strides.
///
/// # Examples
///
/// ```
/// # use geokml_core::geometry::{Coordinate, coordinates_from_flat};
/// let flat = [1.23, 4.56, 7.89, 0.12];
/// let coords = coordinates_from_flat(&flat, 0, 4, 2, 2).unwrap();
/// assert_eq!(coords, vec![Coordinate::new(1.23, 4.56), Coordinate::new(7.89, 0.12)]);
/// ```
pub fn coordinates_from_flat(
    flat: &[f64],
    start: usize,
    end: usize,
    stride: usize,
    dim: usize,
) -> Result<Vec<Coordinate>, ValueError> {
    if !(2..=3).contains(&dim) {
        return Err(ValueError::InvalidLayout(format!(
            "dimension must be 2 or 3, got {dim}"
        )));
    }
    if stride < dim {
        return Err(ValueError::InvalidLayout(format!(
            "stride {stride} is smaller than dimension {dim}"
        )));
    }
    if start > end || end > flat.len() {
        return Err(ValueError::InvalidLayout(format!(
            "range {start}..{end} is outside a buffer of {} values",
            flat.len()
        )));
    }
    if (end - start) % stride != 0 {
        return Err(ValueError::InvalidLayout(format!(
            "range {start}..{end} is not a multiple of stride {stride}"
        )));
    }

    let coords = flat[start..end]
        .chunks_exact(stride)
        .map(|chunk| match dim {
            2 => Coordinate::new(chunk[0], chunk[1]),
            _ => Coordinate::new(chunk[0], chunk[1]).with_alt(chunk[2]),
        })
        .collect();

    Ok(coords)
}

/// Unit kind for one axis of a [`Vec2`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    /// Fraction of the image or screen dimension (KML default)
    #[default]
    Fraction,
    /// Absolute pixels from the origin
    Pixels,
    /// Pixels inset from the upper right corner
    InsetPixels,
}

impl Units {
    /// Returns the KML enumeration literal
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fraction => "fraction",
            Self::Pixels => "pixels",
            Self::InsetPixels => "insetPixels",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fraction" => Ok(Self::Fraction),
            "pixels" => Ok(Self::Pixels),
            "insetPixels" => Ok(Self::InsetPixels),
            _ => Err(ValueError::InvalidUnits(s.to_string())),
        }
    }
}

/// A 2-D anchor point used by hot spots and screen overlays.
///
/// The unit of each axis is given independently by `xunits` and `yunits`.
///
/// # Examples
///
/// ```
/// # use geokml_core::geometry::{Units, Vec2};
/// let center = Vec2::fraction(0.5, 0.5);
/// assert_eq!(center.xunits(), Units::Fraction);
/// assert_eq!(center.y(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    x: f64,
    y: f64,
    xunits: Units,
    yunits: Units,
}

impl Vec2 {
    /// Creates a point with explicit units per axis
    pub fn new(x: f64, y: f64, xunits: Units, yunits: Units) -> Self {
        Self {
            x,
            y,
            xunits,
            yunits,
        }
    }

    /// Creates a point measured in fractions on both axes
    pub fn fraction(x: f64, y: f64) -> Self {
        Self::new(x, y, Units::Fraction, Units::Fraction)
    }

    /// Creates a point measured in pixels on both axes
    pub fn pixels(x: f64, y: f64) -> Self {
        Self::new(x, y, Units::Pixels, Units::Pixels)
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn xunits(self) -> Units {
        self.xunits
    }

    pub fn yunits(self) -> Units {
        self.yunits
    }
}
