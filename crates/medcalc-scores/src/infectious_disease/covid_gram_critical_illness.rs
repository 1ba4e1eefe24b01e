//! COVID-GRAM: risk of critical illness (ICU admission, mechanical ventilation or death)
//! in hospitalized COVID-19 patients.

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const INTERCEPT: f64 = -146.5;
const LOW_RISK_THRESHOLD: f64 = 1.7;
const HIGH_RISK_THRESHOLD: f64 = 40.4;

calculator_input! {
    pub struct CovidGramInput {
        pub chest_xray_abnormality: YesNo,
        pub age: i64 => 18..=120,
        pub hemoptysis: YesNo,
        pub dyspnea: YesNo,
        pub unconsciousness: YesNo,
        pub number_of_comorbidities: i64 => 0..=10,
        pub cancer_history: YesNo,
        pub neutrophil_lymphocyte_ratio: f64 => 0.5..=50.0,
        /// U/L
        pub lactate_dehydrogenase: f64 => 100.0..=2000.0,
        /// mg/dL
        pub direct_bilirubin: f64 => 0.1..=20.0,
    }
}

impl CovidGramInput {

    fn linear_predictor(&self) -> f64 {
        let flag = |answer: YesNo| if answer.is_yes() { 1.0 } else { 0.0 };
        INTERCEPT
            + 27.1464 * flag(self.chest_xray_abnormality)
            + 0.6139 * self.age as f64
            + 33.6210 * flag(self.hemoptysis)
            + 14.0569 * flag(self.dyspnea)
            + 34.4617 * flag(self.unconsciousness)
            + 10.3826 * self.number_of_comorbidities as f64
            + 31.2211 * flag(self.cancer_history)
            + 1.25 * self.neutrophil_lymphocyte_ratio
            + 0.0534 * self.lactate_dehydrogenase
            + 3.0605 * self.direct_bilirubin
    }
}

pub fn calculate(input: &CovidGramInput) -> CalcResult {
    let predictor = input.linear_predictor();
    let probability = (logistic(predictor) * 100.0).clamp(0.1, 99.9);
    let shown = fixed(probability, 1);

    let (stage, description, recommendations, monitoring, risk_factors, text) = if probability < LOW_RISK_THRESHOLD {
        (
            "Low Risk",
            "Low risk of critical illness",
            "Standard monitoring and care",
            "Standard ward-level monitoring",
            "Few high-risk factors for critical illness",
            format!(
                "COVID-GRAM risk probability of {shown}% indicates low risk for critical illness. Standard monitoring and \
                 care protocols are appropriate. Low probability of requiring ICU admission, mechanical ventilation, or death."
            ),
        )
    } else if probability < HIGH_RISK_THRESHOLD {
        (
            "Medium Risk",
            "Medium risk of critical illness",
            "Enhanced monitoring with close observation",
            "Enhanced monitoring with frequent assessments",
            "Moderate risk factors for critical illness",
            format!(
                "COVID-GRAM risk probability of {shown}% indicates medium risk for critical illness. Enhanced monitoring \
                 and close observation are recommended. Intermediate probability of requiring ICU admission, mechanical \
                 ventilation, or death."
            ),
        )
    } else {
        (
            "High Risk",
            "High risk of critical illness",
            "Intensive monitoring and ICU consideration",
            "Intensive monitoring with ICU readiness",
            "Multiple high-risk factors for critical illness",
            format!(
                "COVID-GRAM risk probability of {shown}% indicates high risk for critical illness. Intensive monitoring \
                 and ICU consideration are recommended. High probability of requiring ICU admission, mechanical \
                 ventilation, or death."
            ),
        )
    };

    Ok(
        CalculatorResponse::new(round_to(probability, 1), "%", Interpretation::new(stage, description, text)).with(
            "calculation_details",
            json!({
                "linear_predictor": round_to(predictor, 2),
                "risk_factors_present": risk_factors,
                "clinical_recommendations": recommendations,
                "monitoring_level": monitoring,
                "critical_illness_components": [
                    "ICU admission requirement",
                    "Invasive mechanical ventilation",
                    "Death",
                ],
            }),
        ),
    )
}
