//! OWL ontologies derived from SBVR vocabularies, as typed Rust data.
//!
//! The `sbvr-owl-ontology` crate holds the target side of the translation:
//! classes with their subclass and equivalence axioms, object and datatype
//! properties, and serializers that produce RDF/XML, Turtle and JSON-LD.
//!
//! # Entry Point
//!
//! ```
//! use sbvr_owl_ontology::{ObjectProperty, OntologyModel};
//!
//! let mut model = OntologyModel::new("http://example.org/onto");
//! model.class_entry("Dieta").add_parent_class("Plan");
//! model.add_object_property(ObjectProperty::relation("incluye", "Dieta", "Alimento"));
//! assert_eq!(model.class_count(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! # let model = sbvr_owl_ontology::OntologyModel::new("http://example.org/onto");
//! let owl = sbvr_owl_ontology::serializer::rdfxml::to_rdfxml(&model);
//! let turtle = sbvr_owl_ontology::serializer::turtle::to_turtle(&model);
//! let counts = sbvr_owl_ontology::inventory::read_rdfxml(&owl).unwrap();
//! assert_eq!(counts, model.inventory());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod inventory;
pub mod model;
pub mod serializer;

pub use inventory::{Inventory, InventoryError};
pub use model::{
    iris, Cardinality, ClassExpression, Filler, ObjectProperty, OntologyClass, OntologyModel,
    PropertyKind, PropertyRange, PropertyShape, Restriction,
};
pub use serializer::Format;
