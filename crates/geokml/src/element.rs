//! The KML element tree.
//!
//! A document is a tree of [`Element`]s. Each element is either a [`Leaf`]
//! carrying a single typed [`Value`], or a [`Container`] holding an ordered
//! list of child elements. Tags are flat strings that include any namespace
//! prefix (`"gx:Track"`); no namespace resolution is performed.
//!
//! Children are owned by their parent, so a tree has no cycles and no shared
//! subtrees. Serialization borrows the tree immutably and appending requires
//! a mutable borrow, so a tree cannot change while it is being written.
//!
//! # Examples
//!
//! ```
//! use geokml::element::{Container, Element, Leaf};
//!
//! let placemark = Container::new("Placemark")
//!     .with_attribute("id", "p1")
//!     .with_child(Leaf::new("name", "Home"));
//!
//! assert_eq!(
//!     Element::from(placemark).to_xml_string(),
//!     r#"<Placemark id="p1"><name>Home</name></Placemark>"#
//! );
//! ```

use std::{fmt, io};

use indexmap::IndexMap;

use crate::{error::KmlError, value::Value, writer::XmlWriter};

/// Prefix carried by every tag of the Google extension vocabulary.
pub const GX_PREFIX: &str = "gx:";

/// A node in a KML document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Leaf(Leaf),
    Container(Container),
}

impl Element {
    /// Returns the qualified tag, including any namespace prefix.
    pub fn tag(&self) -> &str {
        match self {
            Element::Leaf(leaf) => leaf.tag(),
            Element::Container(container) => container.tag(),
        }
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        match self {
            Element::Leaf(leaf) => leaf.attributes(),
            Element::Container(container) => container.attributes(),
        }
    }

    /// Returns the value of the named attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Sets an attribute, keeping the position of an existing one.
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            Element::Leaf(leaf) => Element::Leaf(leaf.with_attribute(name, value)),
            Element::Container(container) => {
                Element::Container(container.with_attribute(name, value))
            }
        }
    }

    /// Returns the value of a leaf, or `None` for a container.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Element::Leaf(leaf) => Some(leaf.value()),
            Element::Container(_) => None,
        }
    }

    /// Returns the children of a container. Leaves have none.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Leaf(_) => &[],
            Element::Container(container) => container.children(),
        }
    }

    /// Returns the container, for appending children after construction.
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Element::Leaf(_) => None,
            Element::Container(container) => Some(container),
        }
    }

    /// Returns `true` if any tag in this subtree uses the `gx:` prefix.
    ///
    /// Elements nested inside leaf values are searched too.
    pub fn uses_extension(&self) -> bool {
        if self.tag().starts_with(GX_PREFIX) {
            return true;
        }
        match self {
            Element::Leaf(leaf) => leaf
                .value()
                .element()
                .is_some_and(|element| element.uses_extension()),
            Element::Container(container) => {
                container.children().iter().any(Element::uses_extension)
            }
        }
    }

    /// Writes this element and its subtree to `sink`, without an XML
    /// declaration and without indentation.
    ///
    /// # Errors
    ///
    /// Returns [`KmlError::Io`] if the sink fails. Output already written
    /// before the failure is not rolled back.
    pub fn write_to<W: io::Write>(&self, sink: W) -> Result<(), KmlError> {
        let mut writer = XmlWriter::new(sink);
        writer.write_element(self)?;
        Ok(())
    }

    /// Writes `<?xml version="1.0" encoding="UTF-8"?>`, a newline, and then
    /// this element. No trailing newline is written.
    ///
    /// # Errors
    ///
    /// Returns [`KmlError::Io`] if the sink fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use geokml::elements::{kml, placemark};
    ///
    /// let mut out = Vec::new();
    /// kml(placemark([])).write_document(&mut out).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
    ///      <kml xmlns=\"http://www.opengis.net/kml/2.2\"><Placemark></Placemark></kml>"
    /// );
    /// ```
    pub fn write_document<W: io::Write>(&self, sink: W) -> Result<(), KmlError> {
        let mut writer = XmlWriter::new(sink);
        writer.write_declaration()?;
        writer.write_element(self)?;
        Ok(())
    }

    /// Serializes this element into a string.
    pub fn to_xml_string(&self) -> String {
        self.to_string()
    }
}

/// Writes the same bytes as [`Element::write_to`].
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

impl From<Leaf> for Element {
    fn from(leaf: Leaf) -> Self {
        Element::Leaf(leaf)
    }
}

impl From<Container> for Element {
    fn from(container: Container) -> Self {
        Element::Container(container)
    }
}

/// An element carrying one typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    tag: String,
    attributes: IndexMap<String, String>,
    value: Value,
}

impl Leaf {
    /// Creates a leaf with no attributes.
    ///
    /// # Arguments
    ///
    /// * `tag` - The qualified tag, e.g. `"name"` or `"gx:coord"`
    /// * `value` - The payload; anything convertible into a [`Value`]
    pub fn new(tag: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            value: value.into(),
        }
    }

    /// Sets an attribute, keeping the position of an existing one.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An element holding an ordered list of children.
///
/// No check is made that the children are valid for the tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, keeping the position of an existing one.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends one child.
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.push(child);
        self
    }

    /// Appends children in iteration order.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends one child in place.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}
