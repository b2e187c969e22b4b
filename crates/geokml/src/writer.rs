//! Streaming XML output for element trees.
//!
//! [`XmlWriter`] walks a tree depth-first and emits it through a
//! `quick_xml::Writer`. Text and attribute values go through [`escape`]:
//! `<`, `>` and `&` become named entities, while quotes, tabs, newlines and
//! carriage returns become numeric character references. Output is compact:
//! no indentation and no whitespace between elements. Empty elements are
//! always written with explicit open and close tags.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use log::{debug, trace};
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::element::{Container, Element, Leaf};

/// Escapes text for use in character data or a double-quoted attribute.
///
/// ```text
/// <b>"Tom" & 'Jerry'</b>  =>  &lt;b&gt;&#34;Tom&#34; &amp; &#39;Jerry&#39;&lt;/b&gt;
/// ```
pub(crate) fn escape(raw: &str) -> Cow<'_, str> {
    let escaped = partial_escape(raw);
    if !escaped.contains(['"', '\'', '\t', '\n', '\r']) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn push_attribute(start: &mut BytesStart<'_>, name: &str, value: &str) {
    let value = escape(value);
    start.push_attribute((name.as_bytes(), value.as_bytes()));
}

/// Writes elements to an underlying sink.
pub(crate) struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: Writer::new(sink),
        }
    }

    /// Writes the UTF-8 XML declaration followed by a newline.
    pub fn write_declaration(&mut self) -> io::Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.writer.get_mut().write_all(b"\n")
    }

    /// Writes an element and everything below it.
    pub fn write_element(&mut self, element: &Element) -> io::Result<()> {
        debug!(tag = element.tag(); "Writing element tree");
        self.write_node(element)
    }

    fn write_node(&mut self, element: &Element) -> io::Result<()> {
        match element {
            Element::Leaf(leaf) => self.write_leaf(leaf),
            Element::Container(container) => self.write_container(container),
        }
    }

    fn write_leaf(&mut self, leaf: &Leaf) -> io::Result<()> {
        let mut start = BytesStart::new(leaf.tag());
        for (name, value) in leaf.value().attributes() {
            push_attribute(&mut start, name, &value);
        }
        for (name, value) in leaf.attributes() {
            push_attribute(&mut start, name, value);
        }
        self.writer.write_event(Event::Start(start))?;

        if let Some(child) = leaf.value().element() {
            self.write_node(child)?;
        } else if let Some(text) = leaf.value().text() {
            if !text.is_empty() {
                self.writer
                    .write_event(Event::Text(BytesText::from_escaped(escape(&text))))?;
            }
        }

        self.writer
            .write_event(Event::End(BytesEnd::new(leaf.tag())))
    }

    fn write_container(&mut self, container: &Container) -> io::Result<()> {
        trace!(
            tag = container.tag(),
            children = container.children().len();
            "Writing container"
        );

        let mut start = BytesStart::new(container.tag());
        for (name, value) in container.attributes() {
            push_attribute(&mut start, name, value);
        }
        self.writer.write_event(Event::Start(start))?;

        for child in container.children() {
            self.write_node(child)?;
        }

        self.writer
            .write_event(Event::End(BytesEnd::new(container.tag())))
    }
}
