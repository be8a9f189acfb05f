//! Core ontology model types.
//!
//! An [`OntologyModel`] is created empty, populated in one pass by the mapping
//! engine and then only read by the serializers. Classes and properties keep
//! the order in which they were first added, so every rendering is a pure
//! function of the input order.

use std::collections::HashMap;

use tracing::debug;

use crate::inventory::Inventory;

/// A class description: a named class, an anonymous boolean combination, or a
/// property restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    /// A reference to a named class.
    Named(String),
    /// `owl:intersectionOf` over the operands.
    IntersectionOf(Vec<ClassExpression>),
    /// `owl:unionOf` over the operands.
    UnionOf(Vec<ClassExpression>),
    /// An `owl:Restriction`.
    Restriction(Restriction),
}

impl ClassExpression {
    /// Shorthand for [`ClassExpression::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        ClassExpression::Named(name.into())
    }

    /// Returns the named class this expression refers to, if it is a plain reference.
    #[must_use]
    pub fn as_named(&self) -> Option<&str> {
        match self {
            ClassExpression::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the operands of an intersection or union, or `None` otherwise.
    #[must_use]
    pub fn operands(&self) -> Option<&[ClassExpression]> {
        match self {
            ClassExpression::IntersectionOf(ops) | ClassExpression::UnionOf(ops) => Some(ops),
            _ => None,
        }
    }

    /// Returns every restriction reachable from this expression, depth first.
    #[must_use]
    pub fn restrictions(&self) -> Vec<&Restriction> {
        let mut found = Vec::new();
        self.collect_restrictions(&mut found);
        found
    }

    fn collect_restrictions<'a>(&'a self, found: &mut Vec<&'a Restriction>) {
        match self {
            ClassExpression::Named(_) => {}
            ClassExpression::IntersectionOf(ops) | ClassExpression::UnionOf(ops) => {
                for op in ops {
                    op.collect_restrictions(found);
                }
            }
            ClassExpression::Restriction(restriction) => {
                found.push(restriction);
                match &restriction.filler {
                    Filler::AllValuesFrom(expr) => expr.collect_restrictions(found),
                    Filler::Qualified { on_class, .. } => on_class.collect_restrictions(found),
                }
            }
        }
    }
}

/// A bound on the number of property values of a qualified restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// `owl:minQualifiedCardinality`
    Min(u32),
    /// `owl:maxQualifiedCardinality`
    Max(u32),
    /// `owl:qualifiedCardinality`
    Exact(u32),
}

impl Cardinality {
    /// Returns the local name of the OWL property expressing this bound.
    #[must_use]
    pub fn owl_property(self) -> &'static str {
        match self {
            Cardinality::Min(_) => "minQualifiedCardinality",
            Cardinality::Max(_) => "maxQualifiedCardinality",
            Cardinality::Exact(_) => "qualifiedCardinality",
        }
    }

    /// Returns the numeric bound.
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Cardinality::Min(n) | Cardinality::Max(n) | Cardinality::Exact(n) => n,
        }
    }
}

/// What a restriction constrains the values of its property to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filler {
    /// `owl:allValuesFrom`: every value belongs to the class.
    AllValuesFrom(Box<ClassExpression>),
    /// `owl:onClass` with an optional qualified cardinality.
    Qualified {
        /// Class the counted values belong to.
        on_class: Box<ClassExpression>,
        /// The bound, absent for quantifications without one.
        cardinality: Option<Cardinality>,
    },
}

/// An `owl:Restriction` on one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    /// Name of the restricted property.
    pub on_property: String,
    /// The constraint on its values.
    pub filler: Filler,
}

impl Restriction {
    /// Creates a universally qualified restriction.
    pub fn all_values_from(on_property: impl Into<String>, class: ClassExpression) -> Self {
        Self {
            on_property: on_property.into(),
            filler: Filler::AllValuesFrom(Box::new(class)),
        }
    }

    /// Creates a qualified cardinality restriction.
    pub fn qualified(
        on_property: impl Into<String>,
        on_class: ClassExpression,
        cardinality: Option<Cardinality>,
    ) -> Self {
        Self {
            on_property: on_property.into(),
            filler: Filler::Qualified {
                on_class: Box::new(on_class),
                cardinality,
            },
        }
    }

    /// Returns the cardinality bound of a qualified restriction.
    #[must_use]
    pub fn cardinality(&self) -> Option<Cardinality> {
        match &self.filler {
            Filler::Qualified { cardinality, .. } => *cardinality,
            Filler::AllValuesFrom(_) => None,
        }
    }
}

/// An OWL class declaration with its axioms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyClass {
    /// Class name, with the casing of its first declaration.
    pub classname: String,
    /// Names of classes declared equivalent (`owl:equivalentClass`).
    pub synonym_equivalences: Vec<String>,
    /// Names of parent classes (`rdfs:subClassOf`).
    pub parent_classes: Vec<String>,
    /// Anonymous superclasses built from necessities (`rdfs:subClassOf`).
    pub subclass_expressions: Vec<ClassExpression>,
    /// Anonymous equivalent classes built from definitions (`owl:equivalentClass`).
    pub equivalence_expressions: Vec<ClassExpression>,
}

impl OntologyClass {
    /// Creates a class with no axioms.
    pub fn new(classname: impl Into<String>) -> Self {
        Self {
            classname: classname.into(),
            synonym_equivalences: Vec::new(),
            parent_classes: Vec::new(),
            subclass_expressions: Vec::new(),
            equivalence_expressions: Vec::new(),
        }
    }

    /// Declares a synonym class. Repeated names are kept once.
    pub fn add_synonym_equivalence(&mut self, synonym: impl Into<String>) {
        push_unique(&mut self.synonym_equivalences, synonym.into());
    }

    /// Declares a parent class. Repeated names are kept once.
    pub fn add_parent_class(&mut self, parent: impl Into<String>) {
        push_unique(&mut self.parent_classes, parent.into());
    }

    /// Appends a necessary-condition superclass.
    pub fn add_subclass_expression(&mut self, expression: ClassExpression) {
        self.subclass_expressions.push(expression);
    }

    /// Appends a defining equivalent class.
    pub fn add_equivalence_expression(&mut self, expression: ClassExpression) {
        self.equivalence_expressions.push(expression);
    }

    /// Returns true if the class carries no axioms at all.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.synonym_equivalences.is_empty()
            && self.parent_classes.is_empty()
            && self.subclass_expressions.is_empty()
            && self.equivalence_expressions.is_empty()
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Whether a property relates two individuals or an individual and a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`, relating a resource to an XSD literal.
    Datatype,
    /// `owl:ObjectProperty`, relating two resources.
    Object,
}

/// The range of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyRange {
    /// A class name.
    Class(String),
    /// An XSD datatype local name (e.g. `integer`).
    Datatype(String),
}

impl PropertyRange {
    /// Returns the class or datatype name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            PropertyRange::Class(name) | PropertyRange::Datatype(name) => name,
        }
    }
}

/// How a property is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyShape {
    /// A relation with its own domain and range.
    Relation {
        /// Domain class name.
        domain: String,
        /// Range class or datatype.
        range: PropertyRange,
    },
    /// An alias of another property (`owl:equivalentProperty`), declared
    /// with the same kind as the property it renames.
    EquivalentTo {
        /// Name of the aliased property.
        target: String,
        /// Kind of the aliased property.
        kind: PropertyKind,
    },
}

/// An OWL property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectProperty {
    /// Property name.
    pub name: String,
    /// Domain and range, or the property this one is equivalent to.
    pub shape: PropertyShape,
}

impl ObjectProperty {
    /// Creates a property relating two classes.
    pub fn relation(
        name: impl Into<String>,
        domain: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shape: PropertyShape::Relation {
                domain: domain.into(),
                range: PropertyRange::Class(range.into()),
            },
        }
    }

    /// Creates a property relating a class to a literal datatype.
    pub fn datatype(
        name: impl Into<String>,
        domain: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shape: PropertyShape::Relation {
                domain: domain.into(),
                range: PropertyRange::Datatype(datatype.into()),
            },
        }
    }

    /// Creates a property equivalent to another one of the given kind.
    pub fn equivalent(
        name: impl Into<String>,
        target: impl Into<String>,
        kind: PropertyKind,
    ) -> Self {
        Self {
            name: name.into(),
            shape: PropertyShape::EquivalentTo {
                target: target.into(),
                kind,
            },
        }
    }

    /// Returns the domain class name of a relation.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match &self.shape {
            PropertyShape::Relation { domain, .. } => Some(domain),
            PropertyShape::EquivalentTo { .. } => None,
        }
    }

    /// Returns the range of a relation.
    #[must_use]
    pub fn range(&self) -> Option<&PropertyRange> {
        match &self.shape {
            PropertyShape::Relation { range, .. } => Some(range),
            PropertyShape::EquivalentTo { .. } => None,
        }
    }

    /// Returns the property this one is equivalent to.
    #[must_use]
    pub fn equivalent_to(&self) -> Option<&str> {
        match &self.shape {
            PropertyShape::EquivalentTo { target, .. } => Some(target),
            PropertyShape::Relation { .. } => None,
        }
    }

    /// Returns [`PropertyKind::Datatype`] for literal-valued relations and
    /// their aliases, [`PropertyKind::Object`] otherwise.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match &self.shape {
            PropertyShape::Relation {
                range: PropertyRange::Datatype(_),
                ..
            } => PropertyKind::Datatype,
            PropertyShape::Relation { .. } => PropertyKind::Object,
            PropertyShape::EquivalentTo { kind, .. } => *kind,
        }
    }
}

/// A complete ontology: classes and properties under one namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyModel {
    /// Base namespace; every reference renders as `prefix#name`.
    pub prefix: String,
    classes: Vec<OntologyClass>,
    class_index: HashMap<String, usize>,
    object_properties: Vec<ObjectProperty>,
}

impl OntologyModel {
    /// Creates an empty model.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            classes: Vec::new(),
            class_index: HashMap::new(),
            object_properties: Vec::new(),
        }
    }

    /// Returns the class with the given name, ignoring case, creating it if absent.
    ///
    /// A created class keeps the casing of `classname`; later lookups with a
    /// different casing return the same class.
    pub fn class_entry(&mut self, classname: &str) -> &mut OntologyClass {
        let key = classname.to_lowercase();
        let index = match self.class_index.get(&key) {
            Some(&index) => index,
            None => {
                debug!(class = %classname, "declaring class");
                self.classes.push(OntologyClass::new(classname));
                self.class_index.insert(key, self.classes.len() - 1);
                self.classes.len() - 1
            }
        };
        &mut self.classes[index]
    }

    /// Looks up a class by name, ignoring case. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, classname: &str) -> Option<&OntologyClass> {
        self.class_index
            .get(&classname.to_lowercase())
            .map(|&index| &self.classes[index])
    }

    /// Returns true if a class with this name, ignoring case, exists.
    #[must_use]
    pub fn contains_class(&self, classname: &str) -> bool {
        self.class_index.contains_key(&classname.to_lowercase())
    }

    /// Appends a property declaration.
    pub fn add_object_property(&mut self, property: ObjectProperty) {
        debug!(property = %property.name, "declaring property");
        self.object_properties.push(property);
    }

    /// Looks up a property by exact name. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<&ObjectProperty> {
        self.object_properties.iter().find(|p| p.name == name)
    }

    /// Returns the classes in declaration order.
    #[must_use]
    pub fn classes(&self) -> &[OntologyClass] {
        &self.classes
    }

    /// Returns the properties in declaration order.
    #[must_use]
    pub fn object_properties(&self) -> &[ObjectProperty] {
        &self.object_properties
    }

    /// Returns the total number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the total number of properties, object and datatype alike.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.object_properties.len()
    }

    /// Returns the declaration counts of this model.
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        let datatype_properties = self
            .object_properties
            .iter()
            .filter(|p| p.kind() == PropertyKind::Datatype)
            .count();
        Inventory {
            classes: self.classes.len(),
            object_properties: self.object_properties.len() - datatype_properties,
            datatype_properties,
        }
    }
}

/// Standard IRI constants and name helpers used by every serializer.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `xsd:nonNegativeInteger`, the datatype of cardinality values.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// XSD datatypes recognized in role declarations, by canonical local name.
    pub const XSD_DATATYPES: &[&str] = &[
        "string",
        "boolean",
        "decimal",
        "integer",
        "int",
        "long",
        "short",
        "float",
        "double",
        "date",
        "dateTime",
        "time",
        "duration",
        "anyURI",
        "nonNegativeInteger",
        "positiveInteger",
    ];

    /// Canonicalizes an XSD datatype name: `Integer` becomes `integer`,
    /// `datetime` becomes `dateTime`. Returns `None` for unknown names.
    #[must_use]
    pub fn canonical_datatype(name: &str) -> Option<&'static str> {
        let name = name.trim();
        let name = name.strip_prefix("xsd:").unwrap_or(name);
        XSD_DATATYPES
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(name))
    }

    /// Turns a term name into an IRI fragment: whitespace runs become `_` and
    /// characters not allowed in an IRI are percent-encoded.
    #[must_use]
    pub fn local_name(name: &str) -> String {
        let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
        let mut out = String::with_capacity(joined.len());
        for c in joined.chars() {
            match c {
                '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '#' | '%' => {
                    out.push_str(&format!("%{:02X}", c as u32));
                }
                _ => out.push(c),
            }
        }
        out
    }

    /// Returns the full IRI of a name under the ontology prefix.
    #[must_use]
    pub fn iri(prefix: &str, name: &str) -> String {
        format!("{prefix}#{}", local_name(name))
    }

    /// Returns the full IRI of an XSD datatype local name.
    #[must_use]
    pub fn xsd(datatype: &str) -> String {
        format!("{XSD}{datatype}")
    }

    /// Returns true if `datatype` is a canonical name from [`XSD_DATATYPES`],
    /// usable as an `xsd:` prefixed name.
    #[must_use]
    pub fn is_known_datatype(datatype: &str) -> bool {
        XSD_DATATYPES.contains(&datatype)
    }
}
