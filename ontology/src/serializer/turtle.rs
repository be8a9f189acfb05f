//! Turtle 1.1 serializer.
//!
//! Anonymous class expressions are written inline as blank node property
//! lists, and intersection or union operands as RDF collections.

use crate::model::{
    iris, ClassExpression, Filler, OntologyModel, PropertyKind, PropertyRange, PropertyShape,
};

/// Serializes the model to a Turtle string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid Turtle string.
#[must_use]
pub fn to_turtle(model: &OntologyModel) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let prefix = &model.prefix;

    out.push_str(&format!("@prefix :     <{prefix}#> .\n"));
    out.push_str(&format!("@prefix owl:  <{}> .\n", iris::OWL));
    out.push_str(&format!("@prefix rdf:  <{}> .\n", iris::RDF));
    out.push_str(&format!("@prefix rdfs: <{}> .\n", iris::RDFS));
    out.push_str(&format!("@prefix xsd:  <{}> .\n", iris::XSD));
    out.push('\n');
    out.push_str(&format!("<{prefix}> a owl:Ontology .\n\n"));

    for property in model.object_properties() {
        let kind = match property.kind() {
            PropertyKind::Object => "owl:ObjectProperty",
            PropertyKind::Datatype => "owl:DatatypeProperty",
        };
        out.push_str(&format!("{}\n  a {kind}", iri_ref(prefix, &property.name)));
        match &property.shape {
            PropertyShape::Relation { domain, range } => {
                let range = match range {
                    PropertyRange::Class(class) => iri_ref(prefix, class),
                    PropertyRange::Datatype(datatype) => datatype_ref(datatype),
                };
                out.push_str(&format!(
                    " ;\n  rdfs:domain {} ;\n  rdfs:range {range}",
                    iri_ref(prefix, domain)
                ));
            }
            PropertyShape::EquivalentTo { target, .. } => {
                out.push_str(&format!(
                    " ;\n  owl:equivalentProperty {}",
                    iri_ref(prefix, target)
                ));
            }
        }
        out.push_str(" .\n\n");
    }

    for class in model.classes() {
        out.push_str(&format!("{}\n  a owl:Class", iri_ref(prefix, &class.classname)));
        for parent in &class.parent_classes {
            out.push_str(&format!(" ;\n  rdfs:subClassOf {}", iri_ref(prefix, parent)));
        }
        for synonym in &class.synonym_equivalences {
            out.push_str(&format!(" ;\n  owl:equivalentClass {}", iri_ref(prefix, synonym)));
        }
        for expression in &class.equivalence_expressions {
            out.push_str(&format!(
                " ;\n  owl:equivalentClass {}",
                expression_to_turtle(prefix, expression, 1)
            ));
        }
        for expression in &class.subclass_expressions {
            out.push_str(&format!(
                " ;\n  rdfs:subClassOf {}",
                expression_to_turtle(prefix, expression, 1)
            ));
        }
        out.push_str(" .\n\n");
    }

    out
}

fn expression_to_turtle(prefix: &str, expression: &ClassExpression, depth: usize) -> String {
    let pad = "  ".repeat(depth + 1);
    let close = "  ".repeat(depth);
    match expression {
        ClassExpression::Named(name) => iri_ref(prefix, name),
        ClassExpression::IntersectionOf(operands) | ClassExpression::UnionOf(operands) => {
            let set = if matches!(expression, ClassExpression::IntersectionOf(_)) {
                "owl:intersectionOf"
            } else {
                "owl:unionOf"
            };
            let items: Vec<String> = operands
                .iter()
                .map(|op| expression_to_turtle(prefix, op, depth + 1))
                .collect();
            format!(
                "[\n{pad}a owl:Class ;\n{pad}{set} ( {} )\n{close}]",
                items.join(" ")
            )
        }
        ClassExpression::Restriction(restriction) => {
            let mut body = format!(
                "[\n{pad}a owl:Restriction ;\n{pad}owl:onProperty {}",
                iri_ref(prefix, &restriction.on_property)
            );
            match &restriction.filler {
                Filler::AllValuesFrom(class) => {
                    body.push_str(&format!(
                        " ;\n{pad}owl:allValuesFrom {}",
                        expression_to_turtle(prefix, class, depth + 1)
                    ));
                }
                Filler::Qualified {
                    on_class,
                    cardinality,
                } => {
                    if let Some(cardinality) = cardinality {
                        body.push_str(&format!(
                            " ;\n{pad}owl:{} \"{}\"^^xsd:nonNegativeInteger",
                            cardinality.owl_property(),
                            cardinality.value()
                        ));
                    }
                    body.push_str(&format!(
                        " ;\n{pad}owl:onClass {}",
                        expression_to_turtle(prefix, on_class, depth + 1)
                    ));
                }
            }
            body.push_str(&format!("\n{close}]"));
            body
        }
    }
}

fn iri_ref(prefix: &str, name: &str) -> String {
    format!("<{}>", iris::iri(prefix, name))
}

fn datatype_ref(datatype: &str) -> String {
    if iris::is_known_datatype(datatype) {
        format!("xsd:{datatype}")
    } else {
        format!("<{}>", iris::xsd(datatype))
    }
}
