//! WHO 2016 diagnostic criteria for systemic mastocytosis.
//!
//! Diagnosis needs the major criterion plus one minor criterion, or three
//! minor criteria.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const TRYPTASE_THRESHOLD: f64 = 20.0;
const TRYPTASE_NORMAL_UPPER: f64 = 11.4;

choice! {
    pub enum Assessed {
        Yes => "yes",
        No => "no",
        NotAssessed => "not_assessed",
    }
}

choice! {
    pub enum KitMutation {
        D816vPositive => "d816v_positive",
        OtherKitPositive => "other_kit_positive",
        Negative => "negative",
        NotTested => "not_tested",
    }
}

choice! {
    pub enum MyeloidNeoplasm {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

calculator_input! {
    pub struct SystemicMastocytosisInput {
        pub multifocal_mast_cell_infiltrates: Assessed,
        pub atypical_mast_cell_morphology: Assessed,
        pub kit_mutation: KitMutation,
        pub aberrant_cd_expression: Assessed,
        /// ng/mL
        pub serum_tryptase: f64 => 0.0..=200.0,
        pub associated_myeloid_neoplasm: MyeloidNeoplasm,
    }
}

fn assessed(
    name: &'static str,
    value: Assessed,
    [yes, no, not_assessed]: [&'static str; 3],
) -> (&'static str, bool, String) {
    let details = match value {
        Assessed::Yes => yes,
        Assessed::No => no,
        Assessed::NotAssessed => not_assessed,
    };
    (name, value == Assessed::Yes, details.to_string())
}

impl SystemicMastocytosisInput {
    fn tryptase_criterion(&self) -> (&'static str, bool, String) {
        let tryptase = self.serum_tryptase;
        let (met, details) = match self.associated_myeloid_neoplasm {
            MyeloidNeoplasm::Yes => (
                false,
                format!("Serum tryptase {tryptase} ng/mL, but associated myeloid neoplasm present (criterion not valid)"),
            ),
            MyeloidNeoplasm::No if tryptase > TRYPTASE_THRESHOLD => (
                true,
                format!("Serum tryptase {tryptase} ng/mL > {TRYPTASE_THRESHOLD} ng/mL threshold, no associated myeloid neoplasm"),
            ),
            MyeloidNeoplasm::Unknown if tryptase > TRYPTASE_THRESHOLD => (
                true,
                format!(
                    "Serum tryptase {tryptase} ng/mL > {TRYPTASE_THRESHOLD} ng/mL threshold (note: associated myeloid neoplasm status unknown)"
                ),
            ),
            _ => {
                let range = if tryptase > TRYPTASE_NORMAL_UPPER { "elevated" } else { "normal" };
                (
                    false,
                    format!("Serum tryptase {tryptase} ng/mL ≤ {TRYPTASE_THRESHOLD} ng/mL threshold ({range} range)"),
                )
            }
        };
        ("Minor Criterion 4", met, details)
    }

    fn minor_criteria(&self) -> [(&'static str, bool, String); 4] {
        let (kit_met, kit_details) = match self.kit_mutation {
            KitMutation::D816vPositive => (true, "KIT D816V mutation detected"),
            KitMutation::OtherKitPositive => (true, "Other KIT activating mutation detected at critical regions"),
            KitMutation::Negative => (false, "No KIT mutations detected"),
            KitMutation::NotTested => (false, "KIT mutation testing not performed - criterion cannot be assessed"),
        };
        [
            assessed(
                "Minor Criterion 1",
                self.atypical_mast_cell_morphology,
                [
                    "≥25% of mast cells show atypical morphology (type I/II) or spindle-shaped appearance",
                    "Mast cells show normal morphology, <25% atypical forms",
                    "Morphological assessment not performed - criterion cannot be evaluated",
                ],
            ),
            ("Minor Criterion 2", kit_met, kit_details.to_string()),
            assessed(
                "Minor Criterion 3",
                self.aberrant_cd_expression,
                [
                    "Mast cells express aberrant markers (CD2/CD25/CD30) by flow cytometry or immunohistochemistry",
                    "Mast cells do not express aberrant CD markers",
                    "Immunophenotyping not performed - criterion cannot be evaluated",
                ],
            ),
            self.tryptase_criterion(),
        ]
    }
}

pub fn calculate(input: &SystemicMastocytosisInput) -> CalcResult {
    let major = assessed(
        "Major Criterion",
        input.multifocal_mast_cell_infiltrates,
        [
            "Multifocal dense infiltrates of mast cells (≥15 cells in aggregates) present in bone marrow and/or extracutaneous organs",
            "Multifocal mast cell infiltrates not identified or do not meet ≥15 cells threshold",
            "Tissue evaluation not performed - major criterion cannot be assessed",
        ],
    );
    let minor = input.minor_criteria();
    let major_met = usize::from(major.1);
    let minor_met = minor.iter().filter(|(_, met, _)| *met).count();

    let (status, interpretation) = if (major_met >= 1 && minor_met >= 1) || minor_met >= 3 {
        (
            "diagnosis_met",
            Interpretation::new(
                "Systemic Mastocytosis Diagnosed",
                "WHO 2016 criteria met - diagnosis confirmed",
                format!(
                    "WHO 2016 diagnostic criteria for systemic mastocytosis are MET. Patient fulfills {major_met} major criterion \
                     and {minor_met} minor criteria. Diagnosis of systemic mastocytosis is confirmed. Proceed with staging, risk \
                     stratification, and appropriate management."
                ),
            ),
        )
    } else if major_met >= 1 || minor_met >= 1 {
        (
            "probable_sm",
            Interpretation::new(
                "Probable Systemic Mastocytosis",
                "Some criteria met but additional testing needed",
                format!(
                    "Patient fulfills {major_met} major criterion and {minor_met} minor criteria. Additional testing needed to establish \
                     definitive diagnosis. Complete missing evaluations (bone marrow biopsy, molecular testing, immunophenotyping, \
                     serum tryptase) to fully assess WHO criteria."
                ),
            ),
        )
    } else {
        (
            "criteria_not_met",
            Interpretation::new(
                "Criteria Not Met",
                "WHO criteria for systemic mastocytosis not fulfilled",
                "Current findings do not meet WHO 2016 diagnostic criteria for systemic mastocytosis. Consider alternative diagnoses \
                 including cutaneous mastocytosis, mast cell activation syndrome, hereditary alpha-tryptasemia, or other conditions.",
            ),
        )
    };

    let breakdown: Vec<_> = std::iter::once(&major)
        .chain(minor.iter())
        .map(|(name, met, details)| {
            json!({
                "criterion": name,
                "status": if *met { "Met" } else { "Not Met" },
                "details": details,
            })
        })
        .collect();

    Ok(CalculatorResponse::new(status, "categorical", interpretation)
        .with("major_criteria_met", major_met)
        .with("minor_criteria_met", minor_met)
        .with("total_major_criteria", 1)
        .with("total_minor_criteria", 4)
        .with("criteria_details", breakdown))
}
