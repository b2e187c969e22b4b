//! geokml - Build KML documents and write them as compact XML.
//!
//! Documents are trees of [`Element`]s built with the constructors in
//! [`elements`], one per KML tag. Coordinate data can come from the spherical
//! geometry engine re-exported from `geokml_core`, for example a circle
//! approximated by [`Sphere::circle`](sphere::Sphere::circle).
//!
//! # Examples
//!
//! ```
//! use geokml::{elements::*, geometry::Coordinate, sphere::Sphere};
//!
//! let center = Coordinate::new(6.1432, 46.2044);
//! let ring = Sphere::WGS84.circle(center, 1000.0, 1.0).unwrap();
//!
//! let doc = kml(placemark([
//!     name("Exclusion zone"),
//!     polygon([outer_boundary_is(linear_ring([coordinates(ring)]))]),
//! ]));
//!
//! let mut out = Vec::new();
//! doc.write_document(&mut out).unwrap();
//! assert!(out.starts_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<kml"));
//! ```

pub mod config;
pub mod document;
pub mod element;
pub mod elements;
pub mod shared;
pub mod value;

mod error;
mod writer;

pub use geokml_core::{ValueError, color, geometry, sphere, time};

pub use element::{Container, Element, Leaf};
pub use error::KmlError;
pub use value::Value;

use std::io::Write;

use log::{debug, info};

use config::AppConfig;
use geometry::Coordinate;
use sphere::Sphere;

/// Builder applying an [`AppConfig`] to circle generation and document
/// output.
///
/// # Examples
///
/// ```rust
/// use geokml::{KmlBuilder, config::AppConfig, elements::*, geometry::Coordinate};
///
/// let builder = KmlBuilder::new(AppConfig::default());
///
/// let ring = builder
///     .circle(Coordinate::new(0.0, 0.0), 50.0)
///     .expect("valid radius");
/// let doc = builder.document(placemark([
///     polygon([outer_boundary_is(linear_ring([coordinates(ring)]))]),
/// ]));
///
/// let kml = builder.render(&doc).expect("in-memory write");
/// assert!(kml.starts_with("<?xml"));
/// ```
#[derive(Debug, Default)]
pub struct KmlBuilder {
    config: AppConfig,
}

impl KmlBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Sphere, tolerance and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the configured sphere model.
    pub fn sphere(&self) -> Sphere {
        self.config.geometry().sphere()
    }

    /// Approximates a circle on the configured sphere within the configured
    /// tolerance.
    ///
    /// # Arguments
    ///
    /// * `center` - Circle center; its altitude is given to every vertex
    /// * `radius` - Radius in meters
    ///
    /// # Errors
    ///
    /// Returns [`KmlError::InvalidArgument`] if `radius` is not finite and
    /// positive, or if the tolerance is too small for the radius.
    pub fn circle(&self, center: Coordinate, radius: f64) -> Result<Vec<Coordinate>, KmlError> {
        let geometry = self.config.geometry();
        debug!(
            sphere = geometry.sphere_name().as_str(),
            radius,
            max_error = geometry.max_error();
            "Building circle"
        );
        Ok(geometry
            .sphere()
            .circle(center, radius, geometry.max_error())?)
    }

    /// Wraps `root` in a `<kml>` element, declaring the `gx` namespace as
    /// configured.
    pub fn document(&self, root: impl Into<Element>) -> Element {
        document::kml_with(root, self.config.document().extension_namespace())
    }

    /// Writes a document to `sink`, with the XML declaration if configured.
    ///
    /// # Errors
    ///
    /// Returns [`KmlError::Io`] if the sink fails.
    pub fn write<W: Write>(&self, document: &Element, sink: W) -> Result<(), KmlError> {
        info!(
            root = document.tag(),
            xml_declaration = self.config.document().xml_declaration();
            "Writing document"
        );
        if self.config.document().xml_declaration() {
            document.write_document(sink)
        } else {
            document.write_to(sink)
        }
    }

    /// Writes a document into a string.
    ///
    /// # Errors
    ///
    /// Returns [`KmlError::Io`] if serialization fails.
    pub fn render(&self, document: &Element) -> Result<String, KmlError> {
        let mut buffer = Vec::new();
        self.write(document, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
