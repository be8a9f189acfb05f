//! JSON-LD 1.1 serializer.
//!
//! Produces one document with a `@context` of the standard prefixes and a
//! `@graph` holding the ontology header, then properties, then classes.
//! Anonymous class expressions become nested node objects and collections
//! become `@list` values.

use serde_json::{json, Map, Value};

use crate::model::{
    iris, ClassExpression, Filler, OntologyModel, PropertyKind, PropertyRange, PropertyShape,
};

/// Serializes the model to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// This function is infallible; it always returns a valid JSON-LD `Value`.
#[must_use]
pub fn to_json_ld(model: &OntologyModel) -> Value {
    json!({
        "@context": build_context(model),
        "@graph": build_graph(model)
    })
}

fn build_context(model: &OntologyModel) -> Value {
    let mut ctx = Map::new();
    ctx.insert("@base".to_owned(), json!(model.prefix));
    ctx.insert("owl".to_owned(), json!(iris::OWL));
    ctx.insert("rdf".to_owned(), json!(iris::RDF));
    ctx.insert("rdfs".to_owned(), json!(iris::RDFS));
    ctx.insert("xsd".to_owned(), json!(iris::XSD));
    Value::Object(ctx)
}

fn build_graph(model: &OntologyModel) -> Value {
    let prefix = &model.prefix;
    let mut nodes: Vec<Value> = Vec::new();

    nodes.push(json!({
        "@id": prefix,
        "@type": "owl:Ontology"
    }));

    for property in model.object_properties() {
        let kind = match property.kind() {
            PropertyKind::Object => "owl:ObjectProperty",
            PropertyKind::Datatype => "owl:DatatypeProperty",
        };
        let mut node = Map::new();
        node.insert("@id".to_owned(), json!(iris::iri(prefix, &property.name)));
        node.insert("@type".to_owned(), json!(kind));
        match &property.shape {
            PropertyShape::Relation { domain, range } => {
                let range = match range {
                    PropertyRange::Class(class) => iris::iri(prefix, class),
                    PropertyRange::Datatype(datatype) => datatype_id(datatype),
                };
                node.insert("rdfs:domain".to_owned(), id_ref(iris::iri(prefix, domain)));
                node.insert("rdfs:range".to_owned(), id_ref(range));
            }
            PropertyShape::EquivalentTo { target, .. } => {
                node.insert(
                    "owl:equivalentProperty".to_owned(),
                    id_ref(iris::iri(prefix, target)),
                );
            }
        }
        nodes.push(Value::Object(node));
    }

    for class in model.classes() {
        let mut node = Map::new();
        node.insert("@id".to_owned(), json!(iris::iri(prefix, &class.classname)));
        node.insert("@type".to_owned(), json!("owl:Class"));

        let mut superclasses: Vec<Value> = class
            .parent_classes
            .iter()
            .map(|parent| id_ref(iris::iri(prefix, parent)))
            .collect();
        superclasses.extend(
            class
                .subclass_expressions
                .iter()
                .map(|expr| expression_to_json(prefix, expr)),
        );

        let mut equivalents: Vec<Value> = class
            .synonym_equivalences
            .iter()
            .map(|synonym| id_ref(iris::iri(prefix, synonym)))
            .collect();
        equivalents.extend(
            class
                .equivalence_expressions
                .iter()
                .map(|expr| expression_to_json(prefix, expr)),
        );

        if !superclasses.is_empty() {
            node.insert("rdfs:subClassOf".to_owned(), Value::Array(superclasses));
        }
        if !equivalents.is_empty() {
            node.insert("owl:equivalentClass".to_owned(), Value::Array(equivalents));
        }
        nodes.push(Value::Object(node));
    }

    Value::Array(nodes)
}

fn expression_to_json(prefix: &str, expression: &ClassExpression) -> Value {
    match expression {
        ClassExpression::Named(name) => id_ref(iris::iri(prefix, name)),
        ClassExpression::IntersectionOf(operands) => json!({
            "@type": "owl:Class",
            "owl:intersectionOf": { "@list": operands_to_json(prefix, operands) }
        }),
        ClassExpression::UnionOf(operands) => json!({
            "@type": "owl:Class",
            "owl:unionOf": { "@list": operands_to_json(prefix, operands) }
        }),
        ClassExpression::Restriction(restriction) => {
            let mut node = Map::new();
            node.insert("@type".to_owned(), json!("owl:Restriction"));
            node.insert(
                "owl:onProperty".to_owned(),
                id_ref(iris::iri(prefix, &restriction.on_property)),
            );
            match &restriction.filler {
                Filler::AllValuesFrom(class) => {
                    node.insert(
                        "owl:allValuesFrom".to_owned(),
                        expression_to_json(prefix, class),
                    );
                }
                Filler::Qualified {
                    on_class,
                    cardinality,
                } => {
                    if let Some(cardinality) = cardinality {
                        node.insert(
                            format!("owl:{}", cardinality.owl_property()),
                            json!({
                                "@value": cardinality.value().to_string(),
                                "@type": "xsd:nonNegativeInteger"
                            }),
                        );
                    }
                    node.insert("owl:onClass".to_owned(), expression_to_json(prefix, on_class));
                }
            }
            Value::Object(node)
        }
    }
}

fn operands_to_json(prefix: &str, operands: &[ClassExpression]) -> Vec<Value> {
    operands
        .iter()
        .map(|op| expression_to_json(prefix, op))
        .collect()
}

fn id_ref(iri: String) -> Value {
    json!({ "@id": iri })
}

fn datatype_id(datatype: &str) -> String {
    if iris::is_known_datatype(datatype) {
        format!("xsd:{datatype}")
    } else {
        iris::xsd(datatype)
    }
}
