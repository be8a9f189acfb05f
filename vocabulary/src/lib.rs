//! SBVR business vocabularies as typed Rust data.
//!
//! The `sbvr-vocabulary` crate reads an SBVR glossary document (terms,
//! definitions, necessities and binary verb concepts) into an ordered list of
//! [`Term`]s. The mapping to an ontology lives in `sbvr-owl-mapping`.
//!
//! # Entry Point
//!
//! ```
//! let xml = r#"<sbvr-specification>
//!   <sbvr-term>
//!     <sbvr-term-name>Alimento</sbvr-term-name>
//!     <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
//!   </sbvr-term>
//! </sbvr-specification>"#;
//! let vocabulary = sbvr_vocabulary::Vocabulary::from_xml_str(xml).unwrap();
//! assert_eq!(vocabulary.terms().len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod document;
pub mod error;
pub mod model;
pub mod parser;

use std::path::Path;

pub use error::ParseError;
pub use model::{
    BinaryVerbConceptRule, Clause, ConceptType, LogicalOperation, Quantification, Role,
    RoleRelation, RuleRange, Term, TermKind, Verb,
};

/// An ordered list of terms read from one SBVR document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<Term>,
}

impl Vocabulary {
    /// Wraps terms that were built in memory.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Reads a vocabulary from the text of an SBVR document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the document is not well-formed XML or does
    /// not follow the SBVR document schema.
    pub fn from_xml_str(xml: &str) -> Result<Self, ParseError> {
        let root = document::parse_document(xml)?;
        parser::parse_specification(&root).map(Self::new)
    }

    /// Reads a vocabulary from an SBVR document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read, or any error of
    /// [`Vocabulary::from_xml_str`].
    pub fn from_xml_file(path: &Path) -> Result<Self, ParseError> {
        let xml = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_xml_str(&xml)
    }

    /// Returns the terms in document order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Looks up a term by name, ignoring case. Returns `None` if not found.
    #[must_use]
    pub fn find_term(&self, name: &str) -> Option<&Term> {
        self.terms
            .iter()
            .find(|t| t.name.to_lowercase() == name.to_lowercase())
    }

    /// Returns the number of general concept terms.
    #[must_use]
    pub fn concept_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|t| t.concept_type() == ConceptType::GeneralConcept)
            .count()
    }

    /// Returns the number of terms that are not general concepts.
    #[must_use]
    pub fn verb_count(&self) -> usize {
        self.terms.len() - self.concept_count()
    }
}

impl From<Vec<Term>> for Vocabulary {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_specification_has_no_terms() {
        let vocabulary =
            Vocabulary::from_xml_str("<?xml version=\"1.0\"?><sbvr-specification></sbvr-specification>")
                .unwrap();
        assert!(vocabulary.terms().is_empty());
    }

    #[test]
    fn find_term_ignores_case() {
        let vocabulary = Vocabulary::new(vec![Term::concept("RegimenAlimentario")]);
        assert!(vocabulary.find_term("regimenalimentario").is_some());
        assert!(vocabulary.find_term("Dieta").is_none());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Vocabulary::from_xml_file(Path::new("does/not/exist.xml")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.xml"));
    }
}
