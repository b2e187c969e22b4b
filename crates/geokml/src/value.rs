//! Typed leaf values and their text encodings.
//!
//! Every leaf element carries exactly one [`Value`]. The kind of the value
//! decides how it reaches the output:
//!
//! | Kind | Output |
//! |---|---|
//! | [`Value::Bool`] | `1` or `0` |
//! | [`Value::Int`] | decimal digits |
//! | [`Value::Float`] | shortest round-tripping decimal, never exponent notation |
//! | [`Value::Text`] | the text itself, escaped by the writer |
//! | [`Value::Color`] | `aabbggrr` |
//! | [`Value::Time`] | RFC 3339 with a trailing `Z` |
//! | [`Value::Vec2`] | `x`, `y`, `xunits` and `yunits` attributes, no text |
//! | [`Value::Coordinates`] | `lon,lat[,alt]` entries joined by single spaces |
//! | [`Value::GxCoord`] | `lon lat[ alt]` |
//! | [`Value::Element`] | one nested element |

use geokml_core::{
    color::Color,
    geometry::{Coordinate, Vec2},
    time::Timestamp,
};

use crate::element::Element;

/// The payload of a leaf element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Color(Color),
    Time(Timestamp),
    Vec2(Vec2),
    Coordinates(Vec<Coordinate>),
    GxCoord(Coordinate),
    Element(Box<Element>),
}

impl Value {
    /// Returns the character data written between the leaf's tags.
    ///
    /// [`Value::Vec2`] and [`Value::Element`] have no text and return `None`.
    pub fn text(&self) -> Option<String> {
        match self {
            Value::Bool(value) => Some(encode_bool(*value).to_string()),
            Value::Int(value) => Some(value.to_string()),
            Value::Float(value) => Some(encode_float(*value)),
            Value::Text(value) => Some(value.clone()),
            Value::Color(color) => Some(color.to_kml_hex()),
            Value::Time(timestamp) => Some(timestamp.to_string()),
            Value::Coordinates(coords) => Some(encode_coordinates(coords)),
            Value::GxCoord(coord) => Some(encode_gx_coord(*coord)),
            Value::Vec2(_) | Value::Element(_) => None,
        }
    }

    /// Returns the attributes this value contributes to its leaf.
    ///
    /// Only [`Value::Vec2`] contributes any.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Value::Vec2(vec2) => vec![
                ("x", encode_float(vec2.x())),
                ("y", encode_float(vec2.y())),
                ("xunits", vec2.xunits().to_string()),
                ("yunits", vec2.yunits().to_string()),
            ],
            _ => Vec::new(),
        }
    }

    /// Returns the nested element of a raw element value.
    pub fn element(&self) -> Option<&Element> {
        match self {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// `"1"` for true, `"0"` for false.
pub fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Formats a float as the shortest decimal that parses back to the same value.
///
/// Exponent notation is never used, so very large and very small magnitudes
/// are written out in full.
///
/// # Examples
///
/// ```
/// # use geokml::value::encode_float;
/// assert_eq!(encode_float(0.0), "0");
/// assert_eq!(encode_float(39.37878630116985), "39.37878630116985");
/// assert_eq!(encode_float(1e21), "1000000000000000000000");
/// ```
pub fn encode_float(value: f64) -> String {
    format!("{value}")
}

/// Joins coordinates with single spaces, each written as `lon,lat[,alt]`.
pub fn encode_coordinates(coords: &[Coordinate]) -> String {
    coords
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes a track coordinate as `lon lat` or `lon lat alt`.
pub fn encode_gx_coord(coord: Coordinate) -> String {
    if coord.has_alt() {
        format!("{} {} {}", coord.lon(), coord.lat(), coord.alt())
    } else {
        format!("{} {}", coord.lon(), coord.lat())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Time(value)
    }
}

impl From<Vec2> for Value {
    fn from(value: Vec2) -> Self {
        Value::Vec2(value)
    }
}

impl From<Vec<Coordinate>> for Value {
    fn from(value: Vec<Coordinate>) -> Self {
        Value::Coordinates(value)
    }
}

impl From<Element> for Value {
    fn from(value: Element) -> Self {
        Value::Element(Box::new(value))
    }
}
