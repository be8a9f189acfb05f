//! Properties declared by verb concept terms.

use sbvr_owl_ontology::{iris, ObjectProperty, OntologyModel, PropertyKind};
use sbvr_vocabulary::{BinaryVerbConceptRule, Role, RoleRelation, Term};
use tracing::warn;

use crate::error::MappingError;

/// Builds the properties a verb concept term declares.
///
/// A verb synonym becomes one property equivalent to the verb it renames,
/// taking the kind of that verb when `declared` already holds it and
/// [`PropertyKind::Object`] otherwise. A two-role relation becomes one
/// property with the first role as domain and the second as range; a synonym
/// alongside the roles adds a second property of the same kind, named after
/// the synonym, equivalent to the first.
///
/// # Errors
///
/// Returns [`MappingError::IncompleteVerbConcept`] if the term has neither a
/// synonym nor two roles, and [`MappingError::UnnamedRole`] or
/// [`MappingError::LiteralDomain`] if the roles do not describe a relation.
pub fn verb_properties(
    term: &Term,
    declared: &OntologyModel,
) -> Result<Vec<ObjectProperty>, MappingError> {
    if term.is_verb_synonym() {
        if let Some(synonym) = &term.synonym {
            let kind = declared
                .find_property(synonym)
                .map_or(PropertyKind::Object, ObjectProperty::kind);
            return Ok(vec![ObjectProperty::equivalent(&term.name, synonym, kind)]);
        }
    }

    let rule = term
        .role_necessity()
        .filter(|rule| rule.roles().len() == 2)
        .ok_or_else(|| MappingError::IncompleteVerbConcept {
            term: term.name.clone(),
        })?;

    let relation = relation_property(&term.name, rule)?;
    let kind = relation.kind();
    let mut properties = vec![relation];
    if let Some(synonym) = &term.synonym {
        properties.push(ObjectProperty::equivalent(synonym, &term.name, kind));
    }
    Ok(properties)
}

fn relation_property(
    name: &str,
    rule: &BinaryVerbConceptRule,
) -> Result<ObjectProperty, MappingError> {
    let (domain_role, range_role) = match rule.roles() {
        [first, second] => (first, second),
        _ => {
            return Err(MappingError::IncompleteVerbConcept {
                term: name.to_owned(),
            })
        }
    };
    let Some(relation) = rule.relation() else {
        return Err(MappingError::LiteralDomain {
            term: name.to_owned(),
        });
    };
    let domain = concept_of(name, domain_role)?;

    match relation {
        RoleRelation::Concepts => Ok(ObjectProperty::relation(
            name,
            domain,
            concept_of(name, range_role)?,
        )),
        RoleRelation::ConceptAndLiteral => {
            let declared = range_role.xsd_type.as_deref().unwrap_or_default();
            let datatype = match iris::canonical_datatype(declared) {
                Some(known) => known.to_owned(),
                None => {
                    warn!(term = %name, xsd_type = %declared, "unknown XSD datatype, keeping it verbatim");
                    iris::local_name(declared)
                }
            };
            Ok(ObjectProperty::datatype(name, domain, datatype))
        }
    }
}

fn concept_of<'a>(term: &str, role: &'a Role) -> Result<&'a str, MappingError> {
    role.text
        .as_deref()
        .filter(|text| !text.is_empty())
        .ok_or_else(|| MappingError::UnnamedRole {
            term: term.to_owned(),
            position: role.position,
        })
}
