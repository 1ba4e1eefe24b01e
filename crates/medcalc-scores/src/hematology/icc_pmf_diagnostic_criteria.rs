//! ICC 2022 diagnostic criteria for primary myelofibrosis.
//!
//! All three major criteria plus at least one minor criterion establish the
//! diagnosis; the fibrosis grade separates prefibrotic from overt disease.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum Proliferation {
        Present => "present",
        Absent => "absent",
    }
}

choice! {
    pub enum FibrosisGrade {
        Grade01 => "grade_0_1",
        Grade23 => "grade_2_3",
    }
}

calculator_input! {
    pub struct IccPmfInput {
        pub bone_marrow_megakaryocytic_proliferation: Proliferation,
        pub bone_marrow_fibrosis_grade: FibrosisGrade,
        pub genetic_mutation_present: YesNo,
        pub reactive_fibrosis_excluded: YesNo,
        pub other_mpn_excluded: YesNo,
        pub anemia_present: YesNo,
        pub leukocytosis_present: YesNo,
        pub splenomegaly_present: YesNo,
        pub elevated_ldh: YesNo,
    }
}

impl IccPmfInput {
    fn major_criteria_met(&self) -> bool {
        self.bone_marrow_megakaryocytic_proliferation == Proliferation::Present
            && self.genetic_mutation_present.is_yes()
            && self.reactive_fibrosis_excluded.is_yes()
            && self.other_mpn_excluded.is_yes()
    }

    fn minor_criteria_count(&self) -> usize {
        [
            self.anemia_present,
            self.leukocytosis_present,
            self.splenomegaly_present,
            self.elevated_ldh,
        ]
        .into_iter()
        .filter(|c| c.is_yes())
        .count()
    }
}

pub fn calculate(input: &IccPmfInput) -> CalcResult {
    let major = input.major_criteria_met();
    let minor = input.minor_criteria_count();

    let interpretation = match (major && minor >= 1, input.bone_marrow_fibrosis_grade) {
        (true, FibrosisGrade::Grade01) => Interpretation::new(
            "Pre-PMF Diagnosed",
            "Prefibrotic Primary Myelofibrosis",
            "Diagnosis of prefibrotic (early) primary myelofibrosis established. Early stage with megakaryocytic proliferation \
             but minimal fibrosis (grade 0-1). Consider risk stratification with prognostic scoring systems (IPSS-R, GIPSS). \
             Regular surveillance for disease progression to overt fibrotic stage.",
        ),
        (true, FibrosisGrade::Grade23) => Interpretation::new(
            "Overt PMF Diagnosed",
            "Overt Fibrotic Primary Myelofibrosis",
            "Diagnosis of overt (fibrotic) primary myelofibrosis established. Advanced stage with significant bone marrow fibrosis (grade 2-3). \
             Consider prognostic scoring (DIPSS, DIPSS-Plus, MIPSS70). Discuss treatment options including JAK inhibitors, supportive care, \
             or stem cell transplantation based on risk profile and patient factors.",
        ),
        (false, _) => Interpretation::new(
            "PMF Not Diagnosed",
            "Diagnostic Criteria Not Met",
            "Diagnostic criteria for primary myelofibrosis not satisfied. Consider alternative diagnoses including other myeloproliferative \
             neoplasms, myelodysplastic syndromes, reactive bone marrow changes, or secondary myelofibrosis. Ensure adequate genetic testing \
             with high-sensitivity assays for JAK2, CALR, and MPL mutations.",
        ),
    };

    let result = interpretation.stage.clone();
    Ok(CalculatorResponse::new(result, "", interpretation).with(
        "criteria_summary",
        json!({ "major_criteria_met": major, "minor_criteria_count": minor }),
    ))
}
