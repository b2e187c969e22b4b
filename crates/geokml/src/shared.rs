//! Shared styles referenced by id.
//!
//! A shared style is a `<Style>` or `<StyleMap>` declared once, usually at the
//! top of a `<Document>`, and referenced from features through
//! `<styleUrl>#id</styleUrl>`.

use crate::element::{Container, Element};

/// A `<Style>` or `<StyleMap>` container carrying an `id` attribute.
///
/// [`url`](Self::url) returns the fragment reference as a plain string; it
/// does not track later changes. Take it after the id is final and before the
/// element is moved into a tree.
///
/// # Examples
///
/// ```
/// use geokml::elements::{folder, placemark, shared_style, style_url};
///
/// let style = shared_style("0", []);
/// let url = style.url();
/// let doc = folder([style.into(), placemark([style_url(url)])]);
///
/// assert_eq!(
///     doc.to_xml_string(),
///     r#"<Folder><Style id="0"></Style><Placemark><styleUrl>#0</styleUrl></Placemark></Folder>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SharedElement {
    id: String,
    container: Container,
}

impl SharedElement {
    fn new(tag: &str, id: impl Into<String>, children: impl IntoIterator<Item = Element>) -> Self {
        let id = id.into();
        let container = Container::new(tag)
            .with_attribute("id", id.clone())
            .with_children(children);
        Self { id, container }
    }

    /// Returns the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `#id`, the value for a `<styleUrl>` referencing this style.
    pub fn url(&self) -> String {
        format!("#{}", self.id)
    }

    /// Returns the underlying container.
    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl From<SharedElement> for Element {
    fn from(shared: SharedElement) -> Self {
        Element::Container(shared.container)
    }
}

/// Returns a `<Style id="…">` with the given sub-styles.
pub fn shared_style(
    id: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> SharedElement {
    SharedElement::new("Style", id, children)
}

/// Returns a `<StyleMap id="…">` with the given pairs.
pub fn shared_style_map(
    id: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> SharedElement {
    SharedElement::new("StyleMap", id, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{StyleState, key, pair, style_url};

    #[test]
    fn test_shared_style_url() {
        let style = shared_style("0", []);
        assert_eq!(style.id(), "0");
        assert_eq!(style.url(), "#0");
        assert_eq!(style.container().tag(), "Style");
    }

    #[test]
    fn test_shared_style_map() {
        let normal = shared_style("normalPlacemark", []);
        let map = shared_style_map(
            "exampleStyleMap",
            [pair([key(StyleState::Normal), style_url(normal.url())])],
        );
        assert_eq!(map.url(), "#exampleStyleMap");
        assert_eq!(
            Element::from(map).to_xml_string(),
            "<StyleMap id=\"exampleStyleMap\"><Pair><key>normal</key>\
             <styleUrl>#normalPlacemark</styleUrl></Pair></StyleMap>"
        );
    }
}
