//! GELF criteria for treatment initiation in follicular lymphoma.
//!
//! Any one criterion marks high tumor burden and favors immediate therapy
//! over watch-and-wait.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct GelfInput {
        pub tumor_mass_over_7cm: YesNo,
        pub three_or_more_nodal_sites: YesNo,
        pub systemic_b_symptoms: YesNo,
        pub splenic_enlargement: YesNo,
        pub compression_syndrome: YesNo,
        pub serous_effusion: YesNo,
        pub leukemic_phase: YesNo,
        pub granulocyte_count_low: YesNo,
        pub platelet_count_low: YesNo,
    }
}

impl GelfInput {
    fn criteria(&self) -> [(YesNo, &'static str); 9] {
        [
            (self.tumor_mass_over_7cm, "Tumor mass >7cm diameter"),
            (self.three_or_more_nodal_sites, "≥3 nodal sites >3cm diameter"),
            (self.systemic_b_symptoms, "B symptoms (fever, night sweats, weight loss)"),
            (self.splenic_enlargement, "Splenomegaly below umbilical line"),
            (self.compression_syndrome, "Compression syndrome (ureteral/orbital/GI)"),
            (self.serous_effusion, "Pleural or peritoneal effusion"),
            (self.leukemic_phase, "Leukemic phase >5.0×10⁹/L malignant cells"),
            (self.granulocyte_count_low, "Granulocytes <1.0×10⁹/L"),
            (self.platelet_count_low, "Platelets <100×10⁹/L"),
        ]
    }
}

const CONSIDERATIONS: &str = "Important considerations: GELF criteria should be used in conjunction with clinical judgment, \
    patient preferences, and comorbidities. Consider FLIPI score for prognostic assessment.";

pub fn calculate(input: &GelfInput) -> CalcResult {
    let met: Vec<&str> = input
        .criteria()
        .into_iter()
        .filter(|(answer, _)| answer.is_yes())
        .map(|(_, label)| label)
        .collect();

    let (result, interpretation) = if met.is_empty() {
        (
            "Active Surveillance Appropriate",
            Interpretation::new(
                "Low Tumor Burden",
                "No GELF criteria met - watch and wait recommended",
                format!(
                    "No GELF criteria are met. GELF Assessment: Low tumor burden. Active surveillance (watch and wait) is appropriate. \
                     Regular monitoring recommended with treatment initiation when disease progression, transformation, or symptomatic disease develops. \
                     Clinical guidance: Monitor every 3-6 months initially, then every 6-12 months if stable. {CONSIDERATIONS}"
                ),
            ),
        )
    } else {
        let count = met.len();
        (
            "Immediate Therapy Recommended",
            Interpretation::new(
                "High Tumor Burden",
                format!("{count} GELF criteria met - treatment indicated"),
                format!(
                    "{count} GELF criteria met: {}. GELF Assessment: High tumor burden requiring immediate therapy rather than active surveillance. \
                     Clinical guidance: Consider rituximab-based regimens such as R-CHOP, R-CVP, or R-bendamustine based on patient age, comorbidities, \
                     and institutional preferences. Staging with PET-CT and bone marrow biopsy should be completed before treatment initiation. {CONSIDERATIONS}",
                    met.join(", ")
                ),
            ),
        )
    };

    Ok(CalculatorResponse::new(result, "recommendation", interpretation)
        .with("criteria_met", met.len())
        .with("positive_criteria", met))
}
