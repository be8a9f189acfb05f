//! Mapping and end-to-end translation errors.

use sbvr_vocabulary::ParseError;
use thiserror::Error;

/// A term whose structure cannot be expressed in the ontology model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A conjunction or disjunction of clauses with fewer than two members.
    #[error("term '{term}': {kind} holds {count} clause(s), expected at least two")]
    DegenerateOperation {
        /// Name of the term being mapped.
        term: String,
        /// `conjunction` or `disjunction`.
        kind: &'static str,
        /// Number of clauses found.
        count: usize,
    },

    /// A conjunction or disjunction range with fewer than two concepts.
    #[error("term '{term}': {kind} range holds {count} concept(s), expected at least two")]
    DegenerateRange {
        /// Name of the term being mapped.
        term: String,
        /// `conjunction` or `disjunction`.
        kind: &'static str,
        /// Number of concepts found.
        count: usize,
    },

    /// A verb concept that neither renames another verb nor declares two roles.
    #[error("verb concept '{term}' has no synonym and does not declare exactly two roles")]
    IncompleteVerbConcept {
        /// Name of the term being mapped.
        term: String,
    },

    /// A role that should name a concept carries no text.
    #[error("verb concept '{term}': role {position} names no concept")]
    UnnamedRole {
        /// Name of the term being mapped.
        term: String,
        /// Declared position of the role.
        position: u32,
    },

    /// The first role of a relation is a literal.
    #[error("verb concept '{term}': the first role must be a concept, found a literal")]
    LiteralDomain {
        /// Name of the term being mapped.
        term: String,
    },
}

/// Any failure of the document-to-ontology pipeline.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The SBVR document could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A term could not be mapped.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}
