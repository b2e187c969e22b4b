//! Constructors for the KML vocabulary.
//!
//! One function per tag. Leaf constructors take the value for that tag's
//! kind; container constructors take the children in document order. Every
//! constructor returns an [`Element`], so siblings of different kinds can be
//! collected into one array.
//!
//! - [`kml22`] covers the OGC KML 2.2 vocabulary and its enumerations
//! - [`gx`] covers the Google `gx:` extension vocabulary
//!
//! Both are re-exported here together with the document roots and shared
//! styles, so `use geokml::elements::*` brings in everything needed to build
//! a document.
//!
//! # Examples
//!
//! ```
//! use geokml::{elements::*, geometry::Coordinate};
//!
//! let doc = kml(placemark([
//!     name("Easy trail"),
//!     point([coordinates([Coordinate::new(-122.0, 37.002)])]),
//! ]));
//!
//! assert_eq!(
//!     doc.to_xml_string(),
//!     "<kml xmlns=\"http://www.opengis.net/kml/2.2\">\
//!      <Placemark><name>Easy trail</name>\
//!      <Point><coordinates>-122,37.002</coordinates></Point>\
//!      </Placemark></kml>"
//! );
//! ```

use geokml_core::{
    ValueError,
    geometry::{Coordinate, coordinates_from_flat},
};

use crate::{
    element::{Container, Element, Leaf},
    value::Value,
};

/// Declares closed string enumerations used as leaf values.
///
/// Each enumeration gets `as_str`, `Display`, `FromStr` and a conversion into
/// [`Value`] as text.
macro_rules! string_enums {
    ($(
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $literal:literal),+ $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Returns the literal written to the document.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::geokml_core::ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    _ => Err(::geokml_core::ValueError::InvalidEnum {
                        kind: $kind,
                        value: s.to_string(),
                        expected: &[$($literal),+],
                    }),
                }
            }
        }

        impl From<$name> for $crate::value::Value {
            fn from(value: $name) -> Self {
                $crate::value::Value::Text(value.as_str().to_string())
            }
        }
    )*};
}

/// Declares leaf constructors whose value converts into [`Value`].
macro_rules! leaf_elements {
    ($($fn_name:ident($ty:ty) => $tag:literal;)*) => {$(
        #[doc = concat!("Returns a new `<", $tag, ">` element.")]
        pub fn $fn_name(value: $ty) -> $crate::element::Element {
            $crate::element::Leaf::new($tag, value).into()
        }
    )*};
}

/// Declares leaf constructors carrying free text.
macro_rules! text_elements {
    ($($fn_name:ident => $tag:literal;)*) => {$(
        #[doc = concat!("Returns a new `<", $tag, ">` element.")]
        pub fn $fn_name(value: impl Into<String>) -> $crate::element::Element {
            $crate::element::Leaf::new($tag, value.into()).into()
        }
    )*};
}

/// Declares container constructors.
macro_rules! container_elements {
    ($($fn_name:ident => $tag:literal;)*) => {$(
        #[doc = concat!("Returns a new `<", $tag, ">` element with the given children.")]
        pub fn $fn_name(
            children: impl IntoIterator<Item = $crate::element::Element>,
        ) -> $crate::element::Element {
            $crate::element::Container::new($tag)
                .with_children(children)
                .into()
        }
    )*};
}

pub mod gx;
pub mod kml22;

pub use gx::*;
pub use kml22::*;

pub use crate::{
    document::{gx_kml, kml},
    shared::{SharedElement, shared_style, shared_style_map},
};

/// Returns a `<coordinates>` element listing `coords` in order.
///
/// Anything convertible into a [`Coordinate`] is accepted, including
/// `[lon, lat]` and `[lon, lat, alt]` arrays.
///
/// # Examples
///
/// ```
/// use geokml::elements::coordinates;
///
/// let line = coordinates([[1.23, 4.56], [7.89, 0.12]]);
/// assert_eq!(line.to_xml_string(), "<coordinates>1.23,4.56 7.89,0.12</coordinates>");
/// ```
pub fn coordinates<I>(coords: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Coordinate>,
{
    let coords: Vec<Coordinate> = coords.into_iter().map(Into::into).collect();
    Leaf::new("coordinates", coords).into()
}

/// Returns a `<coordinates>` element read from a flat buffer.
///
/// See [`coordinates_from_flat`] for the meaning of the arguments.
///
/// # Errors
///
/// Returns [`ValueError::InvalidLayout`] for a malformed layout.
pub fn coordinates_flat(
    flat: &[f64],
    start: usize,
    end: usize,
    stride: usize,
    dim: usize,
) -> Result<Element, ValueError> {
    let coords = coordinates_from_flat(flat, start, end, stride, dim)?;
    Ok(Leaf::new("coordinates", coords).into())
}

/// Returns `<linkSnippet maxLines="…">text</linkSnippet>`.
pub fn link_snippet(max_lines: i64, text: impl Into<String>) -> Element {
    Leaf::new("linkSnippet", text.into())
        .with_attribute("maxLines", max_lines.to_string())
        .into()
}

/// Returns a `<Schema>` declaring custom data fields.
pub fn schema(
    id: impl Into<String>,
    name: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    Container::new("Schema")
        .with_attribute("id", id)
        .with_attribute("name", name)
        .with_children(children)
        .into()
}

/// Returns a `<SimpleField>` of the given XML schema type.
pub fn simple_field(
    name: impl Into<String>,
    field_type: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    Container::new("SimpleField")
        .with_attribute("name", name)
        .with_attribute("type", field_type)
        .with_children(children)
        .into()
}

/// Returns a `<SchemaData>` referring to a schema by URL, usually `#id`.
pub fn schema_data(
    schema_url: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    Container::new("SchemaData")
        .with_attribute("schemaUrl", schema_url)
        .with_children(children)
        .into()
}

/// Returns `<SimpleData name="…">value</SimpleData>`.
pub fn simple_data(name: impl Into<String>, value: impl Into<String>) -> Element {
    Leaf::new("SimpleData", value.into())
        .with_attribute("name", name)
        .into()
}

/// Returns an untyped `<Data name="…">` pair, usually holding a `<value>`.
pub fn data(name: impl Into<String>, children: impl IntoIterator<Item = Element>) -> Element {
    Container::new("Data")
        .with_attribute("name", name)
        .with_children(children)
        .into()
}

/// Returns `<outerBoundaryIs>` wrapping a single ring.
pub fn outer_boundary_is(ring: Element) -> Element {
    Leaf::new("outerBoundaryIs", Value::from(ring)).into()
}

/// Returns `<innerBoundaryIs>` wrapping a single ring.
pub fn inner_boundary_is(ring: Element) -> Element {
    Leaf::new("innerBoundaryIs", Value::from(ring)).into()
}
