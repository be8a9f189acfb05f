//! Errors raised while reading an SBVR document.
//!
//! Every variant is fatal for the whole document: the reader never returns a
//! partially parsed vocabulary.

use std::path::PathBuf;

use thiserror::Error;

/// A malformed or unreadable SBVR document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document could not be read from disk.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document contains no element at all.
    #[error("document contains no root element")]
    EmptyDocument,

    /// The document ended inside an element.
    #[error("element <{0}> is never closed")]
    UnclosedElement(String),

    /// A second top-level element follows the root.
    #[error("unexpected second root element <{0}>")]
    MultipleRoots(String),

    /// The root element is not an SBVR specification.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        /// Required root element name.
        expected: &'static str,
        /// Root element actually found.
        found: String,
    },

    /// A child element that carries a mandatory value is absent or empty.
    #[error("<{parent}> is missing required child <{child}>")]
    MissingChild {
        /// Element that should contain the child.
        parent: String,
        /// Name of the missing child.
        child: &'static str,
    },

    /// A mandatory attribute is absent.
    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        /// Element carrying the attribute.
        element: String,
        /// Name of the missing attribute.
        attribute: &'static str,
    },

    /// Several clauses appear without a conjunction or disjunction around them.
    #[error("<{parent}> holds {count} clauses outside a conjunction or disjunction")]
    UngroupedClauses {
        /// Element holding the clauses.
        parent: String,
        /// Number of clauses found.
        count: usize,
    },

    /// A conjunction or disjunction holds fewer than two members.
    #[error("<{container}> must hold at least two {member}, found {count}")]
    TooFewMembers {
        /// The conjunction or disjunction element.
        container: String,
        /// What the members are (clauses or concepts).
        member: &'static str,
        /// Number of members found.
        count: usize,
    },

    /// A bounded quantification has no value.
    #[error("quantification `{quantification}` requires a numeric value")]
    MissingCardinality {
        /// Quantification type label.
        quantification: String,
    },

    /// A bounded quantification has a value that is not a non-negative integer.
    #[error("invalid value `{value}` for quantification `{quantification}`")]
    InvalidCardinality {
        /// Quantification type label.
        quantification: String,
        /// The rejected value.
        value: String,
    },

    /// A role position is not a positive integer.
    #[error("invalid role position `{0}`")]
    InvalidRolePosition(String),

    /// Two roles declare the same position.
    #[error("role position {0} is declared more than once")]
    DuplicateRolePosition(u32),

    /// A binary verb concept declares a role count other than two.
    #[error("binary verb concept `{term}` declares {count} roles, expected 2")]
    RoleCount {
        /// Name of the term.
        term: String,
        /// Number of roles found.
        count: usize,
    },
}
