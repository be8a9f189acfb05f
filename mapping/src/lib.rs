//! SBVR to OWL mapping engine.
//!
//! Reads the ordered term list of an [`sbvr_vocabulary::Vocabulary`] and
//! builds one [`OntologyModel`]: general concepts become classes carrying
//! their synonyms, parents, necessities and definitions as axioms, and verb
//! concepts become properties. Terms are visited once, in document order, so
//! the model order (and every rendering of it) follows the input.
//!
//! # Entry Point
//!
//! ```
//! use sbvr_owl_ontology::Format;
//!
//! let xml = r#"<sbvr-specification>
//!   <sbvr-term>
//!     <sbvr-term-name>Miel</sbvr-term-name>
//!     <sbvr-term-general-concept>Alimento</sbvr-term-general-concept>
//!     <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
//!   </sbvr-term>
//! </sbvr-specification>"#;
//! let owl = sbvr_owl_mapping::translate(xml, "http://example.org/onto", Format::RdfXml).unwrap();
//! assert!(owl.contains("<rdfs:subClassOf rdf:resource=\"http://example.org/onto#Alimento\"/>"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod property;
pub mod restriction;

use sbvr_owl_ontology::serializer::{self, Format};
use sbvr_owl_ontology::OntologyModel;
use sbvr_vocabulary::{LogicalOperation, Term, TermKind, Vocabulary};
use tracing::{debug, warn};

pub use error::{MappingError, TranslateError};

/// Maps an ordered term list to an ontology under the given prefix.
///
/// Classes are merged by case-insensitive name, keeping the casing of the
/// first term that declared them.
///
/// # Errors
///
/// Returns the first [`MappingError`] raised by a term; no model is produced
/// in that case.
pub fn map_terms(terms: &[Term], prefix: &str) -> Result<OntologyModel, MappingError> {
    let mut model = OntologyModel::new(prefix);
    for term in terms {
        debug!(term = %term.name, concept_type = %term.concept_type(), "mapping term");
        match &term.kind {
            TermKind::GeneralConcept { necessity } => {
                map_concept(&mut model, term, necessity.as_ref())?;
            }
            TermKind::BinaryVerbConcept { .. } | TermKind::Other(_) => {
                for property in property::verb_properties(term, &model)? {
                    model.add_object_property(property);
                }
            }
        }
    }
    Ok(model)
}

/// Maps every term of a vocabulary. See [`map_terms`].
///
/// # Errors
///
/// Returns the first [`MappingError`] raised by a term.
pub fn map_vocabulary(vocabulary: &Vocabulary, prefix: &str) -> Result<OntologyModel, MappingError> {
    map_terms(vocabulary.terms(), prefix)
}

/// Reads an SBVR document, maps it and renders the ontology in one step.
///
/// # Errors
///
/// Returns [`TranslateError::Parse`] if the document cannot be read and
/// [`TranslateError::Mapping`] if a term cannot be mapped.
pub fn translate(xml: &str, prefix: &str, format: Format) -> Result<String, TranslateError> {
    let vocabulary = Vocabulary::from_xml_str(xml)?;
    let model = map_vocabulary(&vocabulary, prefix)?;
    Ok(serializer::render(&model, format))
}

fn map_concept(
    model: &mut OntologyModel,
    term: &Term,
    necessity: Option<&LogicalOperation>,
) -> Result<(), MappingError> {
    let equivalence = term
        .definition
        .as_ref()
        .map(|definition| restriction::equivalence_expression(&term.name, definition))
        .transpose()?;
    let subclass = necessity
        .map(|necessity| restriction::subclass_expression(&term.name, necessity))
        .transpose()?;

    if model.contains_class(&term.name) {
        warn!(term = %term.name, "concept declared more than once, merging axioms");
    }
    let class = model.class_entry(&term.name);
    if let Some(synonym) = &term.synonym {
        class.add_synonym_equivalence(synonym.as_str());
    }
    if let Some(parent) = &term.general_concept {
        class.add_parent_class(parent.as_str());
    }
    if let Some(expression) = subclass {
        class.add_subclass_expression(expression);
    }
    if let Some(expression) = equivalence {
        class.add_equivalence_expression(expression);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbvr_owl_ontology::PropertyKind;
    use sbvr_vocabulary::{BinaryVerbConceptRule, Role};

    const PREFIX: &str = "http://example.org/onto";

    #[test]
    fn concepts_become_classes_and_verbs_properties() {
        let terms = vec![
            Term::concept("Dieta").with_synonym("Regimen"),
            Term::verb(
                "incluye",
                Some(BinaryVerbConceptRule::new(vec![
                    Role::concept(1, "Dieta"),
                    Role::concept(2, "Alimento"),
                ])),
            ),
        ];
        let model = map_terms(&terms, PREFIX).unwrap();
        assert_eq!(model.prefix, PREFIX);
        assert_eq!(model.class_count(), 1);
        assert_eq!(model.property_count(), 1);
        assert_eq!(model.object_properties()[0].kind(), PropertyKind::Object);
    }

    #[test]
    fn repeated_concept_merges_into_first_casing() {
        let terms = vec![
            Term::concept("Dieta").with_general_concept("Plan"),
            Term::concept("DIETA").with_synonym("Regimen"),
        ];
        let model = map_terms(&terms, PREFIX).unwrap();
        assert_eq!(model.class_count(), 1);
        let class = &model.classes()[0];
        assert_eq!(class.classname, "Dieta");
        assert_eq!(class.parent_classes, vec!["Plan"]);
        assert_eq!(class.synonym_equivalences, vec!["Regimen"]);
    }

    #[test]
    fn failing_term_yields_no_model() {
        let terms = vec![Term::concept("Dieta"), Term::verb("hace", None)];
        assert!(matches!(
            map_terms(&terms, PREFIX),
            Err(MappingError::IncompleteVerbConcept { term }) if term == "hace"
        ));
    }

    #[test]
    fn translate_reports_parse_errors() {
        let err = translate("<not-sbvr/>", PREFIX, Format::RdfXml).unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
    }
}
