//! SBVR input documents shared by the integration tests.

#![allow(dead_code)]

pub const PREFIX: &str = "http://desibo.frsf.utn.edu.ar/ontologies/2014/8/untitled-ontology-122";

/// A diet vocabulary: concepts with synonyms, parents, a definition and a
/// necessity, a two-role verb concept and a verb synonym.
pub const DIET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>Alimento</sbvr-term-name>
    <sbvr-term-definition></sbvr-term-definition>
    <sbvr-term-general-concept></sbvr-term-general-concept>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
    <sbvr-term-synonym></sbvr-term-synonym>
    <sbvr-term-necessity></sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>AlimentoOrigenAnimal</sbvr-term-name>
    <sbvr-term-definition></sbvr-term-definition>
    <sbvr-term-general-concept>Alimento</sbvr-term-general-concept>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
    <sbvr-term-synonym>AlimentoOrigenAnimalSinonimo</sbvr-term-synonym>
    <sbvr-term-necessity></sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>AlimentoOrigenVegetal</sbvr-term-name>
    <sbvr-term-general-concept>Alimento</sbvr-term-general-concept>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>Miel</sbvr-term-name>
    <sbvr-term-general-concept>AlimentoOrigenAnimal</sbvr-term-general-concept>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>RegimenAlimentario</sbvr-term-name>
    <sbvr-term-definition>
      <sbvr-logical-operator>
        <sbvr-verb>permite_consumo_de</sbvr-verb>
        <sbvr-quantification type="universal"></sbvr-quantification>
        <sbvr-disjunction>
          <sbvr-concept>Miel</sbvr-concept>
          <sbvr-concept>AlimentoOrigenVegetal</sbvr-concept>
        </sbvr-disjunction>
      </sbvr-logical-operator>
    </sbvr-term-definition>
    <sbvr-term-general-concept></sbvr-term-general-concept>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
    <sbvr-term-synonym>Dieta</sbvr-term-synonym>
    <sbvr-term-necessity>
      <sbvr-logical-operator>
        <sbvr-verb>debe_consumir</sbvr-verb>
        <sbvr-quantification type="at-least-N">1</sbvr-quantification>
        <sbvr-concept>AlimentoOrigenVegetal</sbvr-concept>
      </sbvr-logical-operator>
    </sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>permite_consumo_de</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-necessity>
      <sbvr-role position="1">RegimenAlimentario</sbvr-role>
      <sbvr-role position="2">Alimento</sbvr-role>
    </sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>debe_consumir</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-necessity>
      <sbvr-role position="2">Alimento</sbvr-role>
      <sbvr-role position="1">RegimenAlimentario</sbvr-role>
    </sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>permite_comer</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-synonym>permite_consumo_de</sbvr-term-synonym>
    <sbvr-term-necessity></sbvr-term-necessity>
  </sbvr-term>
</sbvr-specification>
"#;

/// An applicant vocabulary: a global disjunction and conjunction of clauses,
/// bounded quantifications and a literal-valued relation.
pub const APPLICANT: &str = r#"<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>Postulante</sbvr-term-name>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
    <sbvr-term-definition>
      <sbvr-conjunction>
        <sbvr-logical-operator>
          <sbvr-verb>es un</sbvr-verb>
          <sbvr-quantification type="universal"></sbvr-quantification>
          <sbvr-concept>Persona</sbvr-concept>
        </sbvr-logical-operator>
        <sbvr-logical-operator>
          <sbvr-verb>se postula a</sbvr-verb>
          <sbvr-quantification type="universal"></sbvr-quantification>
          <sbvr-concept>Cargo</sbvr-concept>
        </sbvr-logical-operator>
      </sbvr-conjunction>
    </sbvr-term-definition>
    <sbvr-term-necessity>
      <sbvr-disjunction>
        <sbvr-logical-operator>
          <sbvr-verb>tieneSexo</sbvr-verb>
          <sbvr-quantification type="exactly-N">1</sbvr-quantification>
          <sbvr-concept>Sexo</sbvr-concept>
        </sbvr-logical-operator>
        <sbvr-logical-operator>
          <sbvr-verb>presenta</sbvr-verb>
          <sbvr-quantification type="at-most-N">3</sbvr-quantification>
          <sbvr-conjunction>
            <sbvr-concept>Certificado</sbvr-concept>
            <sbvr-concept>Titulo</sbvr-concept>
          </sbvr-conjunction>
        </sbvr-logical-operator>
      </sbvr-disjunction>
    </sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>tiene edad</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-necessity>
      <sbvr-role position="1">Postulante</sbvr-role>
      <sbvr-role position="2" xsd-type="Integer"></sbvr-role>
    </sbvr-term-necessity>
  </sbvr-term>
</sbvr-specification>
"#;

/// A single bare concept.
pub const BARE_CONCEPT: &str = r#"<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>Alimento</sbvr-term-name>
    <sbvr-term-definition></sbvr-term-definition>
    <sbvr-term-general-concept></sbvr-term-general-concept>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
    <sbvr-term-synonym></sbvr-term-synonym>
    <sbvr-term-necessity></sbvr-term-necessity>
  </sbvr-term>
</sbvr-specification>
"#;

/// A verb concept with neither a synonym nor roles.
pub const INCOMPLETE_VERB: &str = r#"<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>Alimento</sbvr-term-name>
    <sbvr-term-concept-type>general concept</sbvr-term-concept-type>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>consume</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
  </sbvr-term>
</sbvr-specification>
"#;

/// A literal-valued relation with a synonym, and a verb synonym renaming it.
pub const AGE_ALIASES: &str = r#"<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>tiene_edad</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-synonym>edad</sbvr-term-synonym>
    <sbvr-term-necessity>
      <sbvr-role position="1">Postulante</sbvr-role>
      <sbvr-role position="2" xsd-type="Integer"></sbvr-role>
    </sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>anios</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-synonym>tiene_edad</sbvr-term-synonym>
  </sbvr-term>
</sbvr-specification>
"#;

/// A term of a concept type the mapping does not know, renaming a verb.
pub const INDIVIDUAL_ALIAS: &str = r#"<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>consume</sbvr-term-name>
    <sbvr-term-concept-type>binary verb concept</sbvr-term-concept-type>
    <sbvr-term-necessity>
      <sbvr-role position="1">Persona</sbvr-role>
      <sbvr-role position="2">Alimento</sbvr-role>
    </sbvr-term-necessity>
  </sbvr-term>
  <sbvr-term>
    <sbvr-term-name>come</sbvr-term-name>
    <sbvr-term-concept-type>individual concept</sbvr-term-concept-type>
    <sbvr-term-synonym>consume</sbvr-term-synonym>
  </sbvr-term>
</sbvr-specification>
"#;

/// A term of an unknown concept type with nothing to map.
pub const INDIVIDUAL_BARE: &str = r#"<sbvr-specification>
  <sbvr-term>
    <sbvr-term-name>Juan</sbvr-term-name>
    <sbvr-term-concept-type>individual concept</sbvr-term-concept-type>
    <sbvr-term-necessity>
      <sbvr-role position="1">Persona</sbvr-role>
      <sbvr-role position="2">Alimento</sbvr-role>
    </sbvr-term-necessity>
  </sbvr-term>
</sbvr-specification>
"#;
