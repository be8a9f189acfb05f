//! Core vocabulary model types.
//!
//! These types represent a parsed SBVR vocabulary as owned Rust data. Every
//! "one of N" shape of the source document (a logical operation, a rule range,
//! the necessity of a term) is a sum type, so two variants can never be
//! populated at once.

use std::fmt;

/// Verb phrases that state a plain subclass relationship instead of a property.
///
/// Matched case-insensitively after whitespace normalization.
pub const IS_A_VERBS: &[&str] = &["es un", "es una", "is a", "is an"];

/// The concept type label of a term, as written in `sbvr-term-concept-type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConceptType {
    /// A noun concept that classifies things by their common properties.
    GeneralConcept,
    /// A two-role relation between concepts, or between a concept and a literal.
    BinaryVerbConcept,
    /// Any other label, kept verbatim.
    Other(String),
}

impl ConceptType {
    /// Label used by source documents for [`ConceptType::GeneralConcept`].
    pub const GENERAL_CONCEPT: &'static str = "general concept";
    /// Label used by source documents for [`ConceptType::BinaryVerbConcept`].
    pub const BINARY_VERB_CONCEPT: &'static str = "binary verb concept";

    /// Classifies a concept type label. Matching ignores case and repeated whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = normalize_phrase(label);
        if normalized == Self::GENERAL_CONCEPT {
            ConceptType::GeneralConcept
        } else if normalized == Self::BINARY_VERB_CONCEPT {
            ConceptType::BinaryVerbConcept
        } else {
            ConceptType::Other(label.trim().to_owned())
        }
    }

    /// Returns the canonical label of this concept type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ConceptType::GeneralConcept => Self::GENERAL_CONCEPT,
            ConceptType::BinaryVerbConcept => Self::BINARY_VERB_CONCEPT,
            ConceptType::Other(label) => label,
        }
    }
}

impl fmt::Display for ConceptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concept type of a term together with the necessity shape it admits.
///
/// A general concept can only carry a logical necessity; a binary verb
/// concept can only carry a role list; other concepts carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// A general concept, optionally constrained by a necessity condition.
    GeneralConcept {
        /// Mandatory conditions every instance satisfies.
        necessity: Option<LogicalOperation>,
    },
    /// A binary verb concept, optionally declaring its two roles.
    BinaryVerbConcept {
        /// The ordered roles of the relation.
        necessity: Option<BinaryVerbConceptRule>,
    },
    /// A concept of any other type. Its necessity is never read.
    Other(String),
}

/// One glossary entry of the business vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Name of the term, unique within a vocabulary. Empty when the source omits it.
    pub name: String,
    /// An alternative name for the same concept.
    pub synonym: Option<String>,
    /// Name of the single parent concept.
    pub general_concept: Option<String>,
    /// Defining conditions (necessary and sufficient).
    pub definition: Option<LogicalOperation>,
    /// Concept type and the necessity attached to it.
    pub kind: TermKind,
}

impl Term {
    /// Creates a general concept term with no optional parts.
    pub fn concept(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synonym: None,
            general_concept: None,
            definition: None,
            kind: TermKind::GeneralConcept { necessity: None },
        }
    }

    /// Creates a binary verb concept term with the given roles.
    pub fn verb(name: impl Into<String>, necessity: Option<BinaryVerbConceptRule>) -> Self {
        Self {
            name: name.into(),
            synonym: None,
            general_concept: None,
            definition: None,
            kind: TermKind::BinaryVerbConcept { necessity },
        }
    }

    /// Sets the synonym.
    #[must_use]
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonym = Some(synonym.into());
        self
    }

    /// Sets the parent concept.
    #[must_use]
    pub fn with_general_concept(mut self, parent: impl Into<String>) -> Self {
        self.general_concept = Some(parent.into());
        self
    }

    /// Sets the definition.
    #[must_use]
    pub fn with_definition(mut self, definition: LogicalOperation) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Attaches a necessity condition. The term becomes a general concept,
    /// the only kind that admits one.
    #[must_use]
    pub fn with_necessity(mut self, necessity: LogicalOperation) -> Self {
        self.kind = TermKind::GeneralConcept {
            necessity: Some(necessity),
        };
        self
    }

    /// Returns the concept type of this term.
    #[must_use]
    pub fn concept_type(&self) -> ConceptType {
        match &self.kind {
            TermKind::GeneralConcept { .. } => ConceptType::GeneralConcept,
            TermKind::BinaryVerbConcept { .. } => ConceptType::BinaryVerbConcept,
            TermKind::Other(label) => ConceptType::Other(label.clone()),
        }
    }

    /// Returns the necessity condition of a general concept.
    #[must_use]
    pub fn condition_necessity(&self) -> Option<&LogicalOperation> {
        match &self.kind {
            TermKind::GeneralConcept { necessity } => necessity.as_ref(),
            _ => None,
        }
    }

    /// Returns the role list of a binary verb concept.
    #[must_use]
    pub fn role_necessity(&self) -> Option<&BinaryVerbConceptRule> {
        match &self.kind {
            TermKind::BinaryVerbConcept { necessity } => necessity.as_ref(),
            _ => None,
        }
    }

    /// Returns true if this term only renames another verb concept: it has a
    /// synonym and declares no roles of its own.
    #[must_use]
    pub fn is_verb_synonym(&self) -> bool {
        self.synonym.is_some()
            && self
                .role_necessity()
                .map_or(true, |rule| rule.roles().is_empty())
    }
}

/// A logical structure of clauses: one clause, or a conjunction or disjunction of clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalOperation {
    /// Exactly one clause.
    SingleClause(Clause),
    /// All clauses hold. Holds two or more clauses.
    Conjunction(Vec<Clause>),
    /// At least one clause holds. Holds two or more clauses.
    Disjunction(Vec<Clause>),
}

impl LogicalOperation {
    /// Returns the clauses in declaration order.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        match self {
            LogicalOperation::SingleClause(clause) => std::slice::from_ref(clause),
            LogicalOperation::Conjunction(clauses) | LogicalOperation::Disjunction(clauses) => {
                clauses
            }
        }
    }

    /// Returns a short name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            LogicalOperation::SingleClause(_) => "single clause",
            LogicalOperation::Conjunction(_) => "conjunction",
            LogicalOperation::Disjunction(_) => "disjunction",
        }
    }

    /// Returns true for [`LogicalOperation::SingleClause`].
    #[must_use]
    pub fn is_single_clause(&self) -> bool {
        matches!(self, LogicalOperation::SingleClause(_))
    }
}

/// An atomic condition: verb, quantification and range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The verb; becomes a property name unless it is the reserved is-a verb.
    pub verb: Verb,
    /// Cardinality qualifier of the condition.
    pub quantification: Quantification,
    /// Concept(s) on the right-hand side.
    pub range: RuleRange,
}

impl Clause {
    /// Creates a clause.
    pub fn new(verb: Verb, quantification: Quantification, range: RuleRange) -> Self {
        Self {
            verb,
            quantification,
            range,
        }
    }
}

/// The verb of a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    /// The reserved subclass verb (see [`IS_A_VERBS`]).
    IsA,
    /// An ordinary verb, naming a property.
    Named(String),
}

impl Verb {
    /// Classifies a verb phrase, resolving the reserved is-a verb.
    #[must_use]
    pub fn parse(phrase: &str) -> Self {
        let normalized = normalize_phrase(phrase);
        if IS_A_VERBS.contains(&normalized.as_str()) {
            Verb::IsA
        } else {
            Verb::Named(phrase.trim().to_owned())
        }
    }

    /// Returns the property name of an ordinary verb.
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Verb::IsA => None,
            Verb::Named(name) => Some(name),
        }
    }
}

impl From<&str> for Verb {
    fn from(phrase: &str) -> Self {
        Verb::parse(phrase)
    }
}

/// Cardinality or necessity qualifier of a clause.
///
/// The numeric bound is carried by the variants that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantification {
    /// "each"
    Universal,
    /// "some" / "at least one"
    Existential,
    /// "at least N"
    AtLeast(u32),
    /// "at most N"
    AtMost(u32),
    /// "exactly N"
    Exactly(u32),
    /// No qualifier, or one this reader does not know.
    Unspecified,
}

impl Quantification {
    /// Returns the numeric bound, if this quantification has one.
    #[must_use]
    pub fn value(self) -> Option<u32> {
        match self {
            Quantification::AtLeast(n) | Quantification::AtMost(n) | Quantification::Exactly(n) => {
                Some(n)
            }
            _ => None,
        }
    }

    /// Returns the type label used by source documents.
    #[must_use]
    pub fn type_label(self) -> &'static str {
        match self {
            Quantification::Universal => "universal",
            Quantification::Existential => "existential",
            Quantification::AtLeast(_) => "at-least-N",
            Quantification::AtMost(_) => "at-most-N",
            Quantification::Exactly(_) => "exactly-N",
            Quantification::Unspecified => "unspecified",
        }
    }
}

/// The right-hand side of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleRange {
    /// A single concept.
    NounConcept(String),
    /// All of the named concepts. Holds two or more names.
    Conjunction(Vec<String>),
    /// Any of the named concepts. Holds two or more names.
    Disjunction(Vec<String>),
}

impl RuleRange {
    /// Returns the concept names in declaration order.
    #[must_use]
    pub fn concepts(&self) -> &[String] {
        match self {
            RuleRange::NounConcept(name) => std::slice::from_ref(name),
            RuleRange::Conjunction(names) | RuleRange::Disjunction(names) => names,
        }
    }

    /// Returns the single concept name of a [`RuleRange::NounConcept`].
    #[must_use]
    pub fn noun_concept(&self) -> Option<&str> {
        match self {
            RuleRange::NounConcept(name) => Some(name),
            _ => None,
        }
    }
}

/// What the two roles of a binary verb concept connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRelation {
    /// Both roles name concepts.
    Concepts,
    /// The first role names a concept, the second a literal datatype.
    ConceptAndLiteral,
}

/// One role of a binary verb concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Declared position (1 or 2).
    pub position: u32,
    /// Concept name played in this role.
    pub text: Option<String>,
    /// Literal datatype name (e.g. `Integer`) played in this role.
    pub xsd_type: Option<String>,
}

impl Role {
    /// A role played by a concept.
    pub fn concept(position: u32, name: impl Into<String>) -> Self {
        Self {
            position,
            text: Some(name.into()),
            xsd_type: None,
        }
    }

    /// A role played by a literal of the given datatype.
    pub fn literal(position: u32, xsd_type: impl Into<String>) -> Self {
        Self {
            position,
            text: None,
            xsd_type: Some(xsd_type.into()),
        }
    }
}

/// The role list of a binary verb concept, ordered by declared position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryVerbConceptRule {
    roles: Vec<Role>,
}

impl BinaryVerbConceptRule {
    /// Creates a rule, ordering the roles by position regardless of input order.
    #[must_use]
    pub fn new(mut roles: Vec<Role>) -> Self {
        roles.sort_by_key(|role| role.position);
        Self { roles }
    }

    /// Returns the roles ordered by position.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Classifies the role pair. Returns `None` unless there are exactly two
    /// roles in one of the two supported shapes.
    #[must_use]
    pub fn relation(&self) -> Option<RoleRelation> {
        match self.roles.as_slice() {
            [first, second] if first.xsd_type.is_none() && second.xsd_type.is_none() => {
                Some(RoleRelation::Concepts)
            }
            [first, second] if first.xsd_type.is_none() && second.xsd_type.is_some() => {
                Some(RoleRelation::ConceptAndLiteral)
            }
            _ => None,
        }
    }

    /// Returns true if both roles name concepts.
    #[must_use]
    pub fn relates_concepts(&self) -> bool {
        self.relation() == Some(RoleRelation::Concepts)
    }

    /// Returns true if the first role names a concept and the second a literal.
    #[must_use]
    pub fn relates_concept_and_literal(&self) -> bool {
        self.relation() == Some(RoleRelation::ConceptAndLiteral)
    }
}

/// Lower-cases a phrase and collapses whitespace runs to single spaces.
pub(crate) fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_type_labels_ignore_case_and_spacing() {
        assert_eq!(
            ConceptType::from_label("General  Concept"),
            ConceptType::GeneralConcept
        );
        assert_eq!(
            ConceptType::from_label(" binary verb concept "),
            ConceptType::BinaryVerbConcept
        );
        assert_eq!(
            ConceptType::from_label("individual concept"),
            ConceptType::Other("individual concept".to_owned())
        );
    }

    #[test]
    fn is_a_verb_is_reserved() {
        assert_eq!(Verb::parse("Es  un"), Verb::IsA);
        assert_eq!(Verb::parse("is a"), Verb::IsA);
        assert_eq!(
            Verb::parse(" permite consumo de "),
            Verb::Named("permite consumo de".to_owned())
        );
        assert_eq!(Verb::IsA.property_name(), None);
    }

    #[test]
    fn roles_are_ordered_by_position() {
        let rule = BinaryVerbConceptRule::new(vec![
            Role::concept(2, "Alimento"),
            Role::concept(1, "RegimenAlimentario"),
        ]);
        assert_eq!(rule.roles()[0].text.as_deref(), Some("RegimenAlimentario"));
        assert_eq!(rule.roles()[1].text.as_deref(), Some("Alimento"));
        assert!(rule.relates_concepts());
        assert!(!rule.relates_concept_and_literal());
    }

    #[test]
    fn literal_second_role_relates_concept_and_literal() {
        let rule =
            BinaryVerbConceptRule::new(vec![Role::concept(1, "Postulante"), Role::literal(2, "Integer")]);
        assert_eq!(rule.relation(), Some(RoleRelation::ConceptAndLiteral));
    }

    #[test]
    fn literal_first_role_is_unclassified() {
        let rule =
            BinaryVerbConceptRule::new(vec![Role::literal(1, "Integer"), Role::concept(2, "Postulante")]);
        assert_eq!(rule.relation(), None);
        assert_eq!(BinaryVerbConceptRule::default().relation(), None);
    }

    #[test]
    fn verb_synonym_requires_synonym_and_no_roles() {
        assert!(Term::verb("permite_comer", None)
            .with_synonym("permite_consumo_de")
            .is_verb_synonym());
        assert!(Term::verb("permite_comer", Some(BinaryVerbConceptRule::default()))
            .with_synonym("permite_consumo_de")
            .is_verb_synonym());
        assert!(!Term::verb("permite_comer", None).is_verb_synonym());

        let roles = BinaryVerbConceptRule::new(vec![Role::concept(1, "A"), Role::concept(2, "B")]);
        assert!(!Term::verb("rel", Some(roles)).with_synonym("alias").is_verb_synonym());
    }

    #[test]
    fn necessity_shape_follows_kind() {
        let clause = Clause::new(
            Verb::parse("debe_consumir"),
            Quantification::AtLeast(1),
            RuleRange::NounConcept("Alimento".to_owned()),
        );
        let term = Term::concept("Dieta").with_necessity(LogicalOperation::SingleClause(clause));
        assert!(term.condition_necessity().is_some());
        assert!(term.role_necessity().is_none());
        assert_eq!(term.concept_type(), ConceptType::GeneralConcept);
    }

    #[test]
    fn single_clause_exposes_one_clause() {
        let clause = Clause::new(
            Verb::parse("tieneSexo"),
            Quantification::Existential,
            RuleRange::NounConcept("Sexo".to_owned()),
        );
        let op = LogicalOperation::SingleClause(clause.clone());
        assert_eq!(op.clauses(), &[clause]);
        assert!(op.is_single_clause());
        assert_eq!(Quantification::AtMost(3).value(), Some(3));
        assert_eq!(Quantification::Universal.value(), None);
    }
}
