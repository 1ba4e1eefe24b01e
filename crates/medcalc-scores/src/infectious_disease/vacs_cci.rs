//! VACS Index combined with the Charlson Comorbidity Index (VACS-CCI).

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

use super::hiv_labs::{ckd_epi_egfr, fib4, Race};

const INTERCEPT: f64 = 2.5390222;
const SCALE_FACTOR: f64 = 10.6663937;

calculator_input! {
    pub struct VacsCciInput {
        pub age: i64 => 18..=100,
        pub sex: Sex,
        pub race: Race,
        pub cd4_count: i64 => 0..=2000,
        pub hiv_rna_log: f64 => 0.0..=7.0,
        pub hemoglobin: f64 => 5.0..=20.0,
        pub platelets: i64 => 10..=1000,
        pub ast: i64 => 10..=500,
        pub alt: i64 => 10..=500,
        pub creatinine: f64 => 0.5..=10.0,
        pub hepatitis_c: YesNo,
        pub myocardial_infarction: YesNo,
        pub congestive_heart_failure: YesNo,
        pub peripheral_vascular_disease: YesNo,
        pub cerebrovascular_disease: YesNo,
        pub dementia: YesNo,
        pub chronic_pulmonary_disease: YesNo,
        pub rheumatic_disease: YesNo,
        pub peptic_ulcer_disease: YesNo,
        pub mild_liver_disease: YesNo,
        pub diabetes: YesNo,
        pub diabetes_complications: YesNo,
        pub hemiplegia: YesNo,
        pub renal_disease: YesNo,
        pub any_malignancy: YesNo,
        pub moderate_severe_liver_disease: YesNo,
        pub metastatic_solid_tumor: YesNo,
        pub aids: YesNo,
    }
}

impl VacsCciInput {

    fn vacs_component(&self, fib4: f64, egfr: f64) -> f64 {
        let hcv = if self.hepatitis_c.is_yes() { 0.62 } else { 0.0 };
        0.054 * self.age as f64 - 0.0035 * self.cd4_count as f64 + 0.31 * self.hiv_rna_log - 0.19 * self.hemoglobin
            + 0.24 * fib4
            - 0.0086 * egfr
            + hcv
    }

    fn charlson_component(&self) -> i64 {
        [
            (self.myocardial_infarction, 1),
            (self.congestive_heart_failure, 1),
            (self.peripheral_vascular_disease, 1),
            (self.cerebrovascular_disease, 1),
            (self.dementia, 1),
            (self.chronic_pulmonary_disease, 1),
            (self.rheumatic_disease, 1),
            (self.peptic_ulcer_disease, 1),
            (self.mild_liver_disease, 1),
            (self.diabetes, 1),
            (self.diabetes_complications, 2),
            (self.hemiplegia, 2),
            (self.renal_disease, 2),
            (self.any_malignancy, 2),
            (self.moderate_severe_liver_disease, 3),
            (self.metastatic_solid_tumor, 6),
            (self.aids, 6),
        ]
        .into_iter()
        .map(|(answer, weight)| answer.points(weight))
        .sum()
    }
}

pub fn calculate(input: &VacsCciInput) -> CalcResult {
    let fib4_index = fib4(input.age, input.ast, input.alt, input.platelets);
    let egfr = ckd_epi_egfr(input.creatinine, input.age, input.sex, input.race);
    let vacs = input.vacs_component(fib4_index, egfr);
    let charlson = input.charlson_component() as f64;
    let predictor = vacs + charlson;
    let risk = ((predictor + INTERCEPT) / SCALE_FACTOR * 100.0).clamp(0.0, 100.0);
    let shown = fixed(risk, 1);

    let (stage, description, guidance) = match risk {
        r if r <= 25.0 => (
            "Low Risk",
            "Low mortality risk",
            "Low 5-year mortality risk. Routine HIV care and standard preventive measures appropriate. \
             Regular monitoring and optimization of antiretroviral therapy recommended.",
        ),
        r if r <= 50.0 => (
            "Moderate Risk",
            "Moderate mortality risk",
            "Moderate 5-year mortality risk. Enhanced monitoring and proactive management of comorbidities recommended. \
             Consider intensified preventive interventions and specialist consultations.",
        ),
        r if r <= 75.0 => (
            "High Risk",
            "High mortality risk",
            "High 5-year mortality risk. Intensive management required with multidisciplinary care approach. \
             Aggressive treatment of all modifiable risk factors and frequent monitoring indicated.",
        ),
        _ => (
            "Very High Risk",
            "Very high mortality risk",
            "Very high 5-year mortality risk. Maximum therapeutic interventions and comprehensive care coordination \
             essential. Consider palliative care consultation and advance care planning discussions.",
        ),
    };
    let text = format!("VACS-CCI score: {shown}%. {guidance}");

    Ok(
        CalculatorResponse::new(round_to(risk, 1), "percentage", Interpretation::new(stage, description, text))
            .with(
                "component_scores",
                json!({
                    "vacs_score": round_to(vacs, 2),
                    "charlson_score": round_to(charlson, 2),
                    "linear_predictor": round_to(predictor, 2),
                }),
            )
            .with(
                "composite_biomarkers",
                json!({ "fib4": round_to(fib4_index, 2), "egfr": round_to(egfr, 1) }),
            ),
    )
}
