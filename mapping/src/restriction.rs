//! Class expressions built from definitions and necessities.
//!
//! Both axioms share one traversal of the logical operation: a single clause
//! yields one description, and a conjunction or disjunction of clauses yields
//! the intersection or union of one description per clause. Only the shape of
//! the per-clause restriction differs.

use sbvr_owl_ontology::{Cardinality, ClassExpression, Restriction};
use sbvr_vocabulary::{Clause, LogicalOperation, Quantification, RuleRange, Verb};

use crate::error::MappingError;

/// Builds the equivalent class of a definition.
///
/// Each clause becomes an `allValuesFrom` restriction on its verb whose filler
/// is the class, intersection or union named by the clause range.
///
/// # Errors
///
/// Returns [`MappingError::DegenerateOperation`] or
/// [`MappingError::DegenerateRange`] for compound structures with fewer than
/// two members.
pub fn equivalence_expression(
    term: &str,
    definition: &LogicalOperation,
) -> Result<ClassExpression, MappingError> {
    combine(term, definition, |clause| {
        let range = range_expression(term, &clause.range)?;
        Ok(match &clause.verb {
            Verb::IsA => range,
            Verb::Named(property) => {
                ClassExpression::Restriction(Restriction::all_values_from(property, range))
            }
        })
    })
}

/// Builds the anonymous superclass of a necessity.
///
/// Each clause becomes a qualified restriction on its verb with the range as
/// `onClass` and a cardinality taken from the quantification.
///
/// # Errors
///
/// Returns [`MappingError::DegenerateOperation`] or
/// [`MappingError::DegenerateRange`] for compound structures with fewer than
/// two members.
pub fn subclass_expression(
    term: &str,
    necessity: &LogicalOperation,
) -> Result<ClassExpression, MappingError> {
    combine(term, necessity, |clause| {
        let range = range_expression(term, &clause.range)?;
        Ok(match &clause.verb {
            Verb::IsA => range,
            Verb::Named(property) => ClassExpression::Restriction(Restriction::qualified(
                property,
                range,
                cardinality(clause.quantification),
            )),
        })
    })
}

/// Returns the qualified cardinality a quantification bounds its clause with.
///
/// Universal, existential and unspecified quantifications carry no bound.
#[must_use]
pub fn cardinality(quantification: Quantification) -> Option<Cardinality> {
    match quantification {
        Quantification::AtLeast(n) => Some(Cardinality::Min(n)),
        Quantification::AtMost(n) => Some(Cardinality::Max(n)),
        Quantification::Exactly(n) => Some(Cardinality::Exact(n)),
        Quantification::Universal | Quantification::Existential | Quantification::Unspecified => {
            None
        }
    }
}

/// Returns the class description named by a clause range.
///
/// # Errors
///
/// Returns [`MappingError::DegenerateRange`] if a conjunction or disjunction
/// names fewer than two concepts.
pub fn range_expression(term: &str, range: &RuleRange) -> Result<ClassExpression, MappingError> {
    let (names, kind) = match range {
        RuleRange::NounConcept(name) => return Ok(ClassExpression::named(name.as_str())),
        RuleRange::Conjunction(names) => (names, "conjunction"),
        RuleRange::Disjunction(names) => (names, "disjunction"),
    };
    if names.len() < 2 {
        return Err(MappingError::DegenerateRange {
            term: term.to_owned(),
            kind,
            count: names.len(),
        });
    }
    let operands = names
        .iter()
        .map(|name| ClassExpression::named(name.as_str()))
        .collect();
    Ok(match range {
        RuleRange::Conjunction(_) => ClassExpression::IntersectionOf(operands),
        _ => ClassExpression::UnionOf(operands),
    })
}

fn combine<F>(
    term: &str,
    operation: &LogicalOperation,
    mut describe: F,
) -> Result<ClassExpression, MappingError>
where
    F: FnMut(&Clause) -> Result<ClassExpression, MappingError>,
{
    let clauses = match operation {
        LogicalOperation::SingleClause(clause) => return describe(clause),
        LogicalOperation::Conjunction(clauses) | LogicalOperation::Disjunction(clauses) => clauses,
    };
    if clauses.len() < 2 {
        return Err(MappingError::DegenerateOperation {
            term: term.to_owned(),
            kind: operation.kind_name(),
            count: clauses.len(),
        });
    }
    let operands = clauses
        .iter()
        .map(&mut describe)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(match operation {
        LogicalOperation::Conjunction(_) => ClassExpression::IntersectionOf(operands),
        _ => ClassExpression::UnionOf(operands),
    })
}
