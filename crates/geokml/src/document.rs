//! Document roots.
//!
//! A KML document is a single `<kml>` element declaring the KML 2.2 namespace
//! and, when needed, the Google extension namespace bound to `gx`.

use log::debug;
use serde::Deserialize;

use crate::element::{Container, Element};

/// The OGC KML 2.2 namespace.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// The Google extension namespace, bound to the `gx` prefix.
pub const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// When the `xmlns:gx` declaration is added to a document root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionNamespace {
    /// Only when the tree contains a `gx:` tag.
    #[default]
    Auto,
    /// On every document.
    Always,
}

/// Wraps `child` in a `<kml>` root.
///
/// The extension namespace is declared only if some tag below `child` uses
/// the `gx:` prefix.
///
/// # Examples
///
/// ```
/// use geokml::elements::{gx_track, kml, placemark};
///
/// let plain = kml(placemark([]));
/// assert_eq!(plain.attributes().len(), 1);
///
/// let extended = kml(placemark([gx_track([])]));
/// assert_eq!(
///     extended.attribute("xmlns:gx"),
///     Some("http://www.google.com/kml/ext/2.2")
/// );
/// ```
pub fn kml(child: impl Into<Element>) -> Element {
    let child = child.into();
    let extension = child.uses_extension();
    root(child, extension)
}

/// Wraps `child` in a `<kml>` root that always declares the extension
/// namespace.
pub fn gx_kml(child: impl Into<Element>) -> Element {
    root(child.into(), true)
}

/// Wraps `child` in a `<kml>` root following `mode`.
pub fn kml_with(child: impl Into<Element>, mode: ExtensionNamespace) -> Element {
    match mode {
        ExtensionNamespace::Auto => kml(child),
        ExtensionNamespace::Always => gx_kml(child),
    }
}

fn root(child: Element, extension: bool) -> Element {
    debug!(root = child.tag(), extension; "Creating document root");

    let mut root = Container::new("kml").with_attribute("xmlns", KML_NAMESPACE);
    if extension {
        root = root.with_attribute("xmlns:gx", GX_NAMESPACE);
    }
    root.with_child(child).into()
}
