//! Builds the vocabulary model from an SBVR document tree.
//!
//! Term fields are read verbatim; an absent or empty child leaves the field
//! empty. Logical structures are read by probing for a conjunction container,
//! then a disjunction container, then falling back to a single clause.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::document::Element;
use crate::error::ParseError;
use crate::model::{
    BinaryVerbConceptRule, Clause, ConceptType, LogicalOperation, Quantification, Role,
    RuleRange, Term, TermKind, Verb,
};

/// Element and attribute names of the SBVR document schema.
pub mod tags {
    /// Document root.
    pub const SPECIFICATION: &str = "sbvr-specification";
    /// One glossary entry.
    pub const TERM: &str = "sbvr-term";
    /// Term name.
    pub const TERM_NAME: &str = "sbvr-term-name";
    /// Term definition (a logical operation).
    pub const TERM_DEFINITION: &str = "sbvr-term-definition";
    /// Parent concept name.
    pub const TERM_GENERAL_CONCEPT: &str = "sbvr-term-general-concept";
    /// Concept type label.
    pub const TERM_CONCEPT_TYPE: &str = "sbvr-term-concept-type";
    /// Synonym.
    pub const TERM_SYNONYM: &str = "sbvr-term-synonym";
    /// Necessity (a logical operation or a role list).
    pub const TERM_NECESSITY: &str = "sbvr-term-necessity";
    /// Conjunction container, of clauses or of concepts.
    pub const CONJUNCTION: &str = "sbvr-conjunction";
    /// Disjunction container, of clauses or of concepts.
    pub const DISJUNCTION: &str = "sbvr-disjunction";
    /// One clause.
    pub const LOGICAL_OPERATOR: &str = "sbvr-logical-operator";
    /// Clause verb.
    pub const VERB: &str = "sbvr-verb";
    /// Clause quantification; the type is an attribute, the bound is the text.
    pub const QUANTIFICATION: &str = "sbvr-quantification";
    /// A concept name.
    pub const CONCEPT: &str = "sbvr-concept";
    /// A role of a binary verb concept.
    pub const ROLE: &str = "sbvr-role";
    /// Quantification type attribute.
    pub const ATTR_TYPE: &str = "type";
    /// Role position attribute.
    pub const ATTR_POSITION: &str = "position";
    /// Role literal datatype attribute.
    pub const ATTR_XSD_TYPE: &str = "xsd-type";
}

/// Parses the terms of an `sbvr-specification` root element, in document order.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedRoot`] if `root` is not an SBVR specification,
/// or the first error found in any term.
pub fn parse_specification(root: &Element) -> Result<Vec<Term>, ParseError> {
    if root.name != tags::SPECIFICATION {
        return Err(ParseError::UnexpectedRoot {
            expected: tags::SPECIFICATION,
            found: root.name.clone(),
        });
    }
    root.children_named(tags::TERM).map(parse_term).collect()
}

/// Parses one `sbvr-term` element.
///
/// # Errors
///
/// Returns an error if the definition or necessity is malformed.
pub fn parse_term(node: &Element) -> Result<Term, ParseError> {
    let name = optional_text(node, tags::TERM_NAME).unwrap_or_default();
    let synonym = optional_text(node, tags::TERM_SYNONYM);
    let general_concept = optional_text(node, tags::TERM_GENERAL_CONCEPT);
    let concept_type =
        ConceptType::from_label(&optional_text(node, tags::TERM_CONCEPT_TYPE).unwrap_or_default());

    let definition = parse_logical_operation(node.child(tags::TERM_DEFINITION))?;
    let necessity = node.child(tags::TERM_NECESSITY);

    let kind = match &concept_type {
        ConceptType::GeneralConcept => TermKind::GeneralConcept {
            necessity: parse_logical_operation(necessity)?,
        },
        ConceptType::BinaryVerbConcept => TermKind::BinaryVerbConcept {
            necessity: parse_verb_necessity(&name, necessity)?,
        },
        ConceptType::Other(label) => {
            warn!(term = %name, concept_type = %label, "unknown concept type; necessity ignored");
            TermKind::Other(label.clone())
        }
    };

    debug!(term = %name, concept_type = %concept_type, "parsed term");
    Ok(Term {
        name,
        synonym,
        general_concept,
        definition,
        kind,
    })
}

/// Parses a definition or necessity slot as a logical operation.
///
/// An absent slot, or one without child elements, yields `None`.
///
/// # Errors
///
/// Returns an error if a clause is malformed, if a container holds fewer than
/// two clauses, or if the slot holds no clause or several ungrouped clauses.
pub fn parse_logical_operation(
    node: Option<&Element>,
) -> Result<Option<LogicalOperation>, ParseError> {
    let node = match node {
        Some(node) if node.has_children() => node,
        _ => return Ok(None),
    };

    if let Some(conjunction) = node.child(tags::CONJUNCTION) {
        return parse_clause_group(conjunction)
            .map(|clauses| Some(LogicalOperation::Conjunction(clauses)));
    }
    if let Some(disjunction) = node.child(tags::DISJUNCTION) {
        return parse_clause_group(disjunction)
            .map(|clauses| Some(LogicalOperation::Disjunction(clauses)));
    }

    let mut operators = node.children_named(tags::LOGICAL_OPERATOR);
    match (operators.next(), operators.next()) {
        (Some(single), None) => Ok(Some(LogicalOperation::SingleClause(parse_clause(single)?))),
        (None, _) => Err(ParseError::MissingChild {
            parent: node.name.clone(),
            child: tags::LOGICAL_OPERATOR,
        }),
        (Some(_), Some(_)) => Err(ParseError::UngroupedClauses {
            parent: node.name.clone(),
            count: node.children_named(tags::LOGICAL_OPERATOR).count(),
        }),
    }
}

fn parse_clause_group(container: &Element) -> Result<Vec<Clause>, ParseError> {
    let clauses = container
        .children_named(tags::LOGICAL_OPERATOR)
        .map(parse_clause)
        .collect::<Result<Vec<_>, _>>()?;
    if clauses.len() < 2 {
        return Err(ParseError::TooFewMembers {
            container: container.name.clone(),
            member: "clauses",
            count: clauses.len(),
        });
    }
    Ok(clauses)
}

/// Parses one `sbvr-logical-operator` element.
///
/// # Errors
///
/// Returns [`ParseError::MissingChild`] if the verb or range is absent, or a
/// quantification error if a bounded quantification has no valid value.
pub fn parse_clause(node: &Element) -> Result<Clause, ParseError> {
    let verb = required_text(node, tags::VERB)?;
    let quantification = parse_quantification(node.child(tags::QUANTIFICATION))?;
    let range = parse_rule_range(node)?;
    Ok(Clause::new(Verb::parse(verb), quantification, range))
}

/// Parses the quantification of a clause. An absent element is [`Quantification::Unspecified`].
///
/// Type labels are matched case-insensitively; `existencial` is accepted as
/// existential. Unknown labels are logged and read as unspecified.
///
/// # Errors
///
/// Returns an error if a bounded quantification lacks a non-negative integer value.
pub fn parse_quantification(node: Option<&Element>) -> Result<Quantification, ParseError> {
    let Some(node) = node else {
        return Ok(Quantification::Unspecified);
    };
    let label = node.attribute(tags::ATTR_TYPE).unwrap_or_default().trim();

    let quantification = match label.to_lowercase().as_str() {
        "" => Quantification::Unspecified,
        "universal" => Quantification::Universal,
        "existential" | "existencial" => Quantification::Existential,
        "at-least-n" => Quantification::AtLeast(cardinality(label, node.text())?),
        "at-most-n" => Quantification::AtMost(cardinality(label, node.text())?),
        "exactly-n" => Quantification::Exactly(cardinality(label, node.text())?),
        _ => {
            warn!(quantification = %label, "unknown quantification type; treated as unspecified");
            Quantification::Unspecified
        }
    };
    Ok(quantification)
}

fn cardinality(label: &str, value: Option<&str>) -> Result<u32, ParseError> {
    let value = value.ok_or_else(|| ParseError::MissingCardinality {
        quantification: label.to_owned(),
    })?;
    value.parse().map_err(|_| ParseError::InvalidCardinality {
        quantification: label.to_owned(),
        value: value.to_owned(),
    })
}

/// Parses the range of a clause: a conjunction of concepts, a disjunction of
/// concepts, or a single concept, probed in that order.
///
/// # Errors
///
/// Returns [`ParseError::MissingChild`] if no range is present, or
/// [`ParseError::TooFewMembers`] if a compound range names fewer than two concepts.
pub fn parse_rule_range(node: &Element) -> Result<RuleRange, ParseError> {
    if let Some(conjunction) = node.child(tags::CONJUNCTION) {
        return concept_names(conjunction).map(RuleRange::Conjunction);
    }
    if let Some(disjunction) = node.child(tags::DISJUNCTION) {
        return concept_names(disjunction).map(RuleRange::Disjunction);
    }
    required_text(node, tags::CONCEPT).map(|name| RuleRange::NounConcept(name.to_owned()))
}

fn concept_names(container: &Element) -> Result<Vec<String>, ParseError> {
    let names = container
        .children_named(tags::CONCEPT)
        .map(|concept| {
            concept.text().map(str::to_owned).ok_or(ParseError::MissingChild {
                parent: container.name.clone(),
                child: tags::CONCEPT,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if names.len() < 2 {
        return Err(ParseError::TooFewMembers {
            container: container.name.clone(),
            member: "concepts",
            count: names.len(),
        });
    }
    Ok(names)
}

/// Parses the role list of a binary verb concept, ordered by the `position`
/// attribute rather than by document order.
///
/// A slot without roles yields `None`.
///
/// # Errors
///
/// Returns an error if a position is missing, invalid or repeated, or if the
/// number of roles is not two.
pub fn parse_verb_necessity(
    term: &str,
    node: Option<&Element>,
) -> Result<Option<BinaryVerbConceptRule>, ParseError> {
    let Some(node) = node else {
        return Ok(None);
    };

    let mut seen = HashSet::new();
    let mut roles = Vec::new();
    for role in node.children_named(tags::ROLE) {
        let raw = role
            .attribute(tags::ATTR_POSITION)
            .ok_or(ParseError::MissingAttribute {
                element: role.name.clone(),
                attribute: tags::ATTR_POSITION,
            })?;
        let position: u32 = raw
            .trim()
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| ParseError::InvalidRolePosition(raw.to_owned()))?;
        if !seen.insert(position) {
            return Err(ParseError::DuplicateRolePosition(position));
        }
        roles.push(Role {
            position,
            text: role.text().map(str::to_owned),
            xsd_type: role
                .attribute(tags::ATTR_XSD_TYPE)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
        });
    }

    match roles.len() {
        0 => Ok(None),
        2 => Ok(Some(BinaryVerbConceptRule::new(roles))),
        count => Err(ParseError::RoleCount {
            term: term.to_owned(),
            count,
        }),
    }
}

fn optional_text(node: &Element, child: &str) -> Option<String> {
    node.child(child).and_then(Element::text).map(str::to_owned)
}

fn required_text<'a>(node: &'a Element, child: &'static str) -> Result<&'a str, ParseError> {
    node.child(child)
        .and_then(Element::text)
        .ok_or_else(|| ParseError::MissingChild {
            parent: node.name.clone(),
            child,
        })
}
