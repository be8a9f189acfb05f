//! A small owned element tree read from XML.
//!
//! The vocabulary parser works on this tree instead of on the raw event
//! stream, so that it can probe for optional children in any order.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ParseError;

/// An XML element with its attributes, direct text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified element name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated, trimmed text content directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns all children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the text content, or `None` if it is empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Returns true if this element has at least one child element.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Reads an XML document into an element tree rooted at its single top-level element.
///
/// Comments, processing instructions and the document type declaration are skipped.
///
/// # Errors
///
/// Returns [`ParseError::Xml`] for syntax errors, [`ParseError::EmptyDocument`] if
/// there is no element, [`ParseError::UnclosedElement`] if the input ends inside
/// an element and [`ParseError::MultipleRoots`] if a second top-level element follows.
pub fn parse_document(xml: &str) -> Result<Element, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(quick_xml::Error::from)?;
                    current.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(ParseError::UnclosedElement(open.name));
    }
    root.ok_or(ParseError::EmptyDocument)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, ParseError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(ParseError::MultipleRoots(element.name)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nested_elements_with_attributes_and_text() {
        let xml = r#"<?xml version="1.0"?>
            <root>
              <item position="2">Alimento</item>
              <item position="1" xsd-type="Integer"/>
            </root>"#;
        let root = parse_document(xml).unwrap();
        assert_eq!(root.name, "root");
        assert_eq!(root.children.len(), 2);

        let first = &root.children[0];
        assert_eq!(first.attribute("position"), Some("2"));
        assert_eq!(first.text(), Some("Alimento"));

        let second = &root.children[1];
        assert_eq!(second.attribute("xsd-type"), Some("Integer"));
        assert_eq!(second.text(), None);
        assert!(!second.has_children());
    }

    #[test]
    fn unescapes_entities() {
        let root = parse_document("<a name=\"x &amp; y\">Salud &lt;Publica&gt;</a>").unwrap();
        assert_eq!(root.attribute("name"), Some("x & y"));
        assert_eq!(root.text(), Some("Salud <Publica>"));
    }

    #[test]
    fn whitespace_only_text_is_absent() {
        let root = parse_document("<a>\n   \n</a>").unwrap();
        assert_eq!(root.text(), None);
    }

    #[test]
    fn child_lookup_returns_first_match() {
        let root = Element::new("term")
            .with_child(Element::new("name").with_text("A"))
            .with_child(Element::new("name").with_text("B"));
        assert_eq!(root.child("name").and_then(Element::text), Some("A"));
        assert_eq!(root.children_named("name").count(), 2);
        assert!(root.child("missing").is_none());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            parse_document("<?xml version=\"1.0\"?>"),
            Err(ParseError::EmptyDocument)
        ));
    }

    #[test]
    fn second_root_is_rejected() {
        assert!(matches!(
            parse_document("<a/><b/>"),
            Err(ParseError::MultipleRoots(name)) if name == "b"
        ));
    }

    #[test]
    fn mismatched_end_tag_is_rejected() {
        assert!(parse_document("<a><b></a>").is_err());
    }
}
