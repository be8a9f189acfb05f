//! Declaration counts of an ontology, read back from serialized RDF/XML.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Number of top-level declarations of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    /// `owl:Class` declarations.
    pub classes: usize,
    /// `owl:ObjectProperty` declarations.
    pub object_properties: usize,
    /// `owl:DatatypeProperty` declarations.
    pub datatype_properties: usize,
}

impl Inventory {
    /// Returns the number of property declarations of either kind.
    #[must_use]
    pub fn properties(&self) -> usize {
        self.object_properties + self.datatype_properties
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} object properties, {} datatype properties",
            self.classes, self.object_properties, self.datatype_properties
        )
    }
}

/// Errors raised while re-reading a serialized document.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document has no `rdf:RDF` root element.
    #[error("document root is not rdf:RDF")]
    MissingRdfRoot,
}

/// Counts the named class and property declarations directly under `rdf:RDF`.
///
/// Anonymous classes nested inside axioms are not counted, so the result
/// matches [`crate::OntologyModel::inventory`] of the model that was serialized.
///
/// # Errors
///
/// Returns [`InventoryError::Xml`] if the text is not well-formed and
/// [`InventoryError::MissingRdfRoot`] if it is not an RDF/XML document.
pub fn read_rdfxml(text: &str) -> Result<Inventory, InventoryError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut inventory = Inventory::default();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if depth == 0 {
                    saw_root = start.name().as_ref() == b"rdf:RDF";
                } else if depth == 1 {
                    count_declaration(&start, &mut inventory)?;
                }
                depth += 1;
            }
            Event::Empty(start) => {
                if depth == 0 {
                    saw_root = start.name().as_ref() == b"rdf:RDF";
                } else if depth == 1 {
                    count_declaration(&start, &mut inventory)?;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if saw_root {
        Ok(inventory)
    } else {
        Err(InventoryError::MissingRdfRoot)
    }
}

fn count_declaration(start: &BytesStart<'_>, inventory: &mut Inventory) -> Result<(), InventoryError> {
    let slot = match start.name().as_ref() {
        b"owl:Class" => &mut inventory.classes,
        b"owl:ObjectProperty" => &mut inventory.object_properties,
        b"owl:DatatypeProperty" => &mut inventory.datatype_properties,
        _ => return Ok(()),
    };
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        if attribute.key.as_ref() == b"rdf:about" {
            *slot += 1;
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_top_level_named_declarations() {
        let xml = r#"<?xml version="1.0"?>
            <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                     xmlns:owl="http://www.w3.org/2002/07/owl#">
              <owl:Ontology rdf:about="http://x"/>
              <owl:ObjectProperty rdf:about="http://x#p"/>
              <owl:DatatypeProperty rdf:about="http://x#d"/>
              <owl:Class rdf:about="http://x#A"/>
              <owl:Class rdf:about="http://x#B">
                <owl:equivalentClass>
                  <owl:Class>
                    <owl:unionOf rdf:parseType="Collection">
                      <rdf:Description rdf:about="http://x#A"/>
                    </owl:unionOf>
                  </owl:Class>
                </owl:equivalentClass>
              </owl:Class>
            </rdf:RDF>"#;
        let inventory = read_rdfxml(xml).unwrap();
        assert_eq!(
            inventory,
            Inventory {
                classes: 2,
                object_properties: 1,
                datatype_properties: 1,
            }
        );
        assert_eq!(inventory.properties(), 2);
    }

    #[test]
    fn non_rdf_root_is_rejected() {
        assert!(matches!(
            read_rdfxml("<sbvr-specification/>"),
            Err(InventoryError::MissingRdfRoot)
        ));
    }

    #[test]
    fn display_lists_every_count() {
        let inventory = Inventory {
            classes: 3,
            object_properties: 2,
            datatype_properties: 1,
        };
        assert_eq!(
            inventory.to_string(),
            "3 classes, 2 object properties, 1 datatype properties"
        );
    }
}
