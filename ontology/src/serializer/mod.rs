//! Serializers for SBVR-derived ontologies.
//!
//! Three serialization formats are supported:
//! - **RDF/XML** ([`rdfxml`]) (default): an OWL document with the usual entity envelope
//! - **Turtle** ([`turtle`]) for RDF tooling
//! - **JSON-LD** ([`jsonld`]) for web consumers
//!
//! Every serializer is a pure function of the model: the same model always
//! renders to the same bytes.

pub mod jsonld;
pub mod rdfxml;
pub mod turtle;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::OntologyModel;

/// An output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// OWL in RDF/XML.
    #[default]
    RdfXml,
    /// Turtle 1.1.
    Turtle,
    /// JSON-LD 1.1.
    JsonLd,
}

impl Format {
    /// All formats, in the order they are listed to users.
    pub const ALL: [Format; 3] = [Format::RdfXml, Format::Turtle, Format::JsonLd];

    /// Returns the name accepted by [`Format::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::RdfXml => "rdfxml",
            Format::Turtle => "turtle",
            Format::JsonLd => "jsonld",
        }
    }

    /// Returns the conventional file extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Format::RdfXml => "owl",
            Format::Turtle => "ttl",
            Format::JsonLd => "jsonld",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}' (expected rdfxml, turtle or jsonld)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rdfxml" | "rdf/xml" | "owl" | "xml" => Ok(Format::RdfXml),
            "turtle" | "ttl" => Ok(Format::Turtle),
            "jsonld" | "json-ld" | "json" => Ok(Format::JsonLd),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

/// Renders the model in the given format.
#[must_use]
pub fn render(model: &OntologyModel, format: Format) -> String {
    match format {
        Format::RdfXml => rdfxml::to_rdfxml(model),
        Format::Turtle => turtle::to_turtle(model),
        Format::JsonLd => format!("{:#}\n", jsonld::to_json_ld(model)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.as_str().parse::<Format>(), Ok(format));
        }
        assert_eq!("JSON-LD".parse::<Format>(), Ok(Format::JsonLd));
        assert_eq!("ttl".parse::<Format>(), Ok(Format::Turtle));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "n3".parse::<Format>().unwrap_err();
        assert_eq!(err, UnknownFormat("n3".to_owned()));
        assert!(err.to_string().contains("n3"));
    }

    #[test]
    fn every_format_renders_the_prefix() {
        let model = OntologyModel::new("http://example.org/onto");
        for format in Format::ALL {
            assert!(render(&model, format).contains("http://example.org/onto"));
        }
    }
}
