//! OWL RDF/XML serializer.
//!
//! Produces an `rdf:RDF` document with the conventional OWL entity
//! declarations, one `owl:Ontology` header named after the prefix, every
//! property declaration and then every class declaration, in model order.

use quick_xml::escape::escape;

use crate::model::{
    iris, ClassExpression, Filler, ObjectProperty, OntologyClass, OntologyModel, PropertyKind,
    PropertyRange, PropertyShape, Restriction,
};

const INDENT: &str = "    ";

/// Serializes the model to an OWL RDF/XML string.
///
/// # Errors
///
/// This function is infallible; it always returns a well-formed XML document.
#[must_use]
pub fn to_rdfxml(model: &OntologyModel) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let prefix = escape(model.prefix.as_str());

    out.push_str("<?xml version=\"1.0\"?>\n");
    out.push_str("<!DOCTYPE rdf:RDF [\n");
    out.push_str(&format!("    <!ENTITY owl \"{}\" >\n", iris::OWL));
    out.push_str(&format!("    <!ENTITY xsd \"{}\" >\n", iris::XSD));
    out.push_str(&format!("    <!ENTITY rdfs \"{}\" >\n", iris::RDFS));
    out.push_str(&format!("    <!ENTITY rdf \"{}\" >\n", iris::RDF));
    out.push_str("]>\n\n");

    out.push_str(&format!("<rdf:RDF xmlns=\"{prefix}#\"\n"));
    out.push_str(&format!("     xml:base=\"{prefix}\"\n"));
    out.push_str(&format!("     xmlns:rdfs=\"{}\"\n", iris::RDFS));
    out.push_str(&format!("     xmlns:owl=\"{}\"\n", iris::OWL));
    out.push_str(&format!("     xmlns:xsd=\"{}\"\n", iris::XSD));
    out.push_str(&format!("     xmlns:rdf=\"{}\">\n", iris::RDF));
    out.push_str(&format!("{INDENT}<owl:Ontology rdf:about=\"{prefix}\"/>\n"));

    if !model.object_properties().is_empty() {
        out.push_str("\n    <!-- Properties -->\n\n");
        for property in model.object_properties() {
            write_property(&mut out, &model.prefix, property);
        }
    }

    if !model.classes().is_empty() {
        out.push_str("\n    <!-- Classes -->\n\n");
        for class in model.classes() {
            write_class(&mut out, &model.prefix, class);
        }
    }

    out.push_str("</rdf:RDF>\n");
    out
}

fn write_property(out: &mut String, prefix: &str, property: &ObjectProperty) {
    let tag = match property.kind() {
        PropertyKind::Object => "owl:ObjectProperty",
        PropertyKind::Datatype => "owl:DatatypeProperty",
    };
    out.push_str(&format!(
        "{INDENT}<{tag} rdf:about=\"{}\">\n",
        resource(prefix, &property.name)
    ));
    match &property.shape {
        PropertyShape::Relation { domain, range } => {
            let range_iri = match range {
                PropertyRange::Class(class) => iris::iri(prefix, class),
                PropertyRange::Datatype(datatype) => iris::xsd(datatype),
            };
            out.push_str(&format!(
                "{INDENT}{INDENT}<rdfs:domain rdf:resource=\"{}\"/>\n",
                resource(prefix, domain)
            ));
            out.push_str(&format!(
                "{INDENT}{INDENT}<rdfs:range rdf:resource=\"{}\"/>\n",
                escape(range_iri.as_str())
            ));
        }
        PropertyShape::EquivalentTo { target, .. } => {
            out.push_str(&format!(
                "{INDENT}{INDENT}<owl:equivalentProperty rdf:resource=\"{}\"/>\n",
                resource(prefix, target)
            ));
        }
    }
    out.push_str(&format!("{INDENT}</{tag}>\n\n"));
}

fn write_class(out: &mut String, prefix: &str, class: &OntologyClass) {
    let about = resource(prefix, &class.classname);
    if class.is_bare() {
        out.push_str(&format!("{INDENT}<owl:Class rdf:about=\"{about}\"/>\n\n"));
        return;
    }

    out.push_str(&format!("{INDENT}<owl:Class rdf:about=\"{about}\">\n"));
    for parent in &class.parent_classes {
        out.push_str(&format!(
            "{INDENT}{INDENT}<rdfs:subClassOf rdf:resource=\"{}\"/>\n",
            resource(prefix, parent)
        ));
    }
    for synonym in &class.synonym_equivalences {
        out.push_str(&format!(
            "{INDENT}{INDENT}<owl:equivalentClass rdf:resource=\"{}\"/>\n",
            resource(prefix, synonym)
        ));
    }
    for expression in &class.equivalence_expressions {
        write_property_element(out, prefix, 2, "owl:equivalentClass", expression);
    }
    for expression in &class.subclass_expressions {
        write_property_element(out, prefix, 2, "rdfs:subClassOf", expression);
    }
    out.push_str(&format!("{INDENT}</owl:Class>\n\n"));
}

/// Writes `<tag rdf:resource=".."/>` for a named class, or `<tag>` wrapping
/// the anonymous node of any other expression.
fn write_property_element(
    out: &mut String,
    prefix: &str,
    depth: usize,
    tag: &str,
    expression: &ClassExpression,
) {
    let pad = INDENT.repeat(depth);
    if let ClassExpression::Named(name) = expression {
        out.push_str(&format!(
            "{pad}<{tag} rdf:resource=\"{}\"/>\n",
            resource(prefix, name)
        ));
        return;
    }
    out.push_str(&format!("{pad}<{tag}>\n"));
    write_node(out, prefix, depth + 1, expression);
    out.push_str(&format!("{pad}</{tag}>\n"));
}

fn write_node(out: &mut String, prefix: &str, depth: usize, expression: &ClassExpression) {
    let pad = INDENT.repeat(depth);
    match expression {
        ClassExpression::Named(name) => {
            out.push_str(&format!(
                "{pad}<rdf:Description rdf:about=\"{}\"/>\n",
                resource(prefix, name)
            ));
        }
        ClassExpression::IntersectionOf(operands) | ClassExpression::UnionOf(operands) => {
            let set = if matches!(expression, ClassExpression::IntersectionOf(_)) {
                "owl:intersectionOf"
            } else {
                "owl:unionOf"
            };
            out.push_str(&format!("{pad}<owl:Class>\n"));
            out.push_str(&format!("{pad}{INDENT}<{set} rdf:parseType=\"Collection\">\n"));
            for operand in operands {
                write_node(out, prefix, depth + 2, operand);
            }
            out.push_str(&format!("{pad}{INDENT}</{set}>\n"));
            out.push_str(&format!("{pad}</owl:Class>\n"));
        }
        ClassExpression::Restriction(restriction) => {
            write_restriction(out, prefix, depth, restriction);
        }
    }
}

fn write_restriction(out: &mut String, prefix: &str, depth: usize, restriction: &Restriction) {
    let pad = INDENT.repeat(depth);
    out.push_str(&format!("{pad}<owl:Restriction>\n"));
    out.push_str(&format!(
        "{pad}{INDENT}<owl:onProperty rdf:resource=\"{}\"/>\n",
        resource(prefix, &restriction.on_property)
    ));
    match &restriction.filler {
        Filler::AllValuesFrom(class) => {
            write_property_element(out, prefix, depth + 1, "owl:allValuesFrom", class);
        }
        Filler::Qualified {
            on_class,
            cardinality,
        } => {
            if let Some(cardinality) = cardinality {
                out.push_str(&format!(
                    "{pad}{INDENT}<owl:{name} rdf:datatype=\"{datatype}\">{value}</owl:{name}>\n",
                    name = cardinality.owl_property(),
                    datatype = iris::XSD_NON_NEGATIVE_INTEGER,
                    value = cardinality.value()
                ));
            }
            write_property_element(out, prefix, depth + 1, "owl:onClass", on_class);
        }
    }
    out.push_str(&format!("{pad}</owl:Restriction>\n"));
}

fn resource(prefix: &str, name: &str) -> String {
    escape(iris::iri(prefix, name).as_str()).into_owned()
}
