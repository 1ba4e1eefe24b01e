//! Geneva risk score for VTE prophylaxis in hospitalized medical patients.
//!
//! Major factors score 2, minor factors 1; three or more points is high risk.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct GenevaVteInput {
        pub cardiac_failure: YesNo,
        pub respiratory_failure: YesNo,
        pub recent_stroke: YesNo,
        pub recent_myocardial_infarction: YesNo,
        pub acute_infectious_disease: YesNo,
        pub acute_rheumatic_disease: YesNo,
        pub active_malignancy: YesNo,
        pub myeloproliferative_syndrome: YesNo,
        pub nephrotic_syndrome: YesNo,
        pub prior_vte_history: YesNo,
        pub known_hypercoagulable_state: YesNo,
        pub immobilization: YesNo,
        pub recent_travel: YesNo,
        pub age_over_60: YesNo,
        pub obesity: YesNo,
        pub chronic_venous_insufficiency: YesNo,
        pub pregnancy: YesNo,
        pub hormonal_therapy: YesNo,
        pub dehydration: YesNo,
    }
}

const HIGH_RISK_THRESHOLD: i64 = 3;

impl GenevaVteInput {
    fn major(&self) -> [(YesNo, &'static str); 11] {
        [
            (self.cardiac_failure, "cardiac failure"),
            (self.respiratory_failure, "respiratory failure"),
            (self.recent_stroke, "recent stroke (<3 months)"),
            (self.recent_myocardial_infarction, "recent MI (<4 weeks)"),
            (self.acute_infectious_disease, "acute infectious disease/sepsis"),
            (self.acute_rheumatic_disease, "acute rheumatic disease"),
            (self.active_malignancy, "active malignancy"),
            (self.myeloproliferative_syndrome, "myeloproliferative syndrome"),
            (self.nephrotic_syndrome, "nephrotic syndrome"),
            (self.prior_vte_history, "prior VTE history"),
            (self.known_hypercoagulable_state, "hypercoagulable state"),
        ]
    }

    fn minor(&self) -> [(YesNo, &'static str); 8] {
        [
            (self.immobilization, "immobilization (≥3 days)"),
            (self.recent_travel, "recent travel (>6 hours)"),
            (self.age_over_60, "age >60 years"),
            (self.obesity, "obesity (BMI >30)"),
            (self.chronic_venous_insufficiency, "chronic venous insufficiency"),
            (self.pregnancy, "pregnancy"),
            (self.hormonal_therapy, "hormonal therapy"),
            (self.dehydration, "dehydration"),
        ]
    }
}

fn present<const N: usize>(factors: [(YesNo, &'static str); N]) -> Vec<&'static str> {
    factors
        .into_iter()
        .filter(|(answer, _)| answer.is_yes())
        .map(|(_, name)| name)
        .collect()
}

pub fn calculate(input: &GenevaVteInput) -> CalcResult {
    let major = present(input.major());
    let minor = present(input.minor());
    let score = 2 * major.len() as i64 + minor.len() as i64;

    let mut summary = String::new();
    if !major.is_empty() {
        summary.push_str(&format!("Major risk factors (2 pts each): {}. ", major.join(", ")));
    }
    if !minor.is_empty() {
        summary.push_str(&format!("Minor risk factors (1 pt each): {}. ", minor.join(", ")));
    }
    if summary.is_empty() {
        summary.push_str("No significant risk factors identified. ");
    }

    let interpretation = if score < HIGH_RISK_THRESHOLD {
        Interpretation::new(
            "Low Risk",
            "Low risk for VTE",
            format!(
                "Geneva VTE Risk Score: {score} points. {summary}Low risk for venous thromboembolism (approximately 0.6% risk). \
                 Pharmacological prophylaxis not routinely recommended. Consider mechanical prophylaxis (sequential compression devices, early mobilization) if feasible. \
                 Reassess daily during hospitalization."
            ),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High risk for VTE",
            format!(
                "Geneva VTE Risk Score: {score} points. {summary}High risk for venous thromboembolism (approximately 3.2% risk). \
                 Thromboprophylaxis recommended unless contraindicated. Consider low molecular weight heparin, unfractionated heparin, or fondaparinux \
                 based on renal function and bleeding risk. If pharmacological prophylaxis is contraindicated, use mechanical prophylaxis."
            ),
        )
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("major_risk_factors", major)
        .with("minor_risk_factors", minor))
}
