//! Owned XML element tree built from quick-xml events.

use crate::error::{Error, Result};
use crate::xml::escape::unescape_xml;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// One node of mixed element content.
#[derive(Debug, Clone)]
pub enum XmlNode {
    /// Character data (already entity-unescaped)
    Text(String),
    /// A nested element
    Element(XmlElement),
}

/// An XML element: raw (possibly prefixed) tag name, attributes in document
/// order, and mixed-content children in document order.
#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlElement> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();

        // Stack of open elements; the root pops off last.
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = unescape_xml(&String::from_utf8_lossy(t));
                        if !text.is_empty() {
                            current.children.push(XmlNode::Text(text));
                        }
                    }
                }
                Ok(Event::CData(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        // CDATA content is already literal; no entity handling
                        let text = String::from_utf8_lossy(t).into_owned();
                        if !text.is_empty() {
                            current.children.push(XmlNode::Text(text));
                        }
                    }
                }
                Ok(Event::GeneralRef(ref e)) => {
                    if let Some(current) = stack.last_mut() {
                        let name = String::from_utf8_lossy(e).into_owned();
                        current.children.push(XmlNode::Text(Self::resolve_reference(&name)));
                    }
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Xml("unbalanced closing tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, processing instructions, DOCTYPE
                Ok(_) => {}
                Err(e) => return Err(e.into()),
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(Error::Xml("unexpected end of document".to_string()));
        }
        root.ok_or_else(|| Error::Xml("document has no root element".to_string()))
    }

    fn from_start(e: &BytesStart) -> Result<XmlElement> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| Error::Xml(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = unescape_xml(&String::from_utf8_lossy(&attr.value));
            attributes.push((key, value));
        }

        Ok(XmlElement {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Resolve a general reference body (the part between `&` and `;`):
    /// the five predefined entities, decimal and hex character references.
    /// Unknown references are kept verbatim.
    fn resolve_reference(name: &str) -> String {
        match name {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            _ => {
                let parsed = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = name.strip_prefix('#') {
                    dec.parse::<u32>().ok()
                } else {
                    None
                };
                match parsed.and_then(char::from_u32) {
                    Some(ch) => ch.to_string(),
                    None => format!("&{name};"),
                }
            }
        }
    }

    fn attach(
        stack: &mut Vec<XmlElement>,
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<()> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(XmlNode::Element(element));
        } else if root.is_none() {
            *root = Some(element);
        } else {
            return Err(Error::Xml("multiple root elements".to_string()));
        }
        Ok(())
    }

    /// Raw tag name as written in the document, including any prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name with any namespace prefix stripped.
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Namespace prefix of the tag name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Attribute value by exact (unprefixed) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Namespace URI declared on this element for the given prefix
    /// (`None` looks up the default `xmlns` declaration).
    pub fn namespace_declaration(&self, prefix: Option<&str>) -> Option<&str> {
        let key = match prefix {
            Some(p) => format!("xmlns:{p}"),
            None => "xmlns".to_string(),
        };
        self.attribute(&key)
    }

    /// Mixed-content children in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements in document order, skipping interleaved text.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenate all text in this element's subtree in document order.
    ///
    /// Titles and data points may be split across nested formatting
    /// elements (superscript, subscript, font runs); flattening recovers
    /// the plain string regardless of nesting depth.
    pub fn flat_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }
}
