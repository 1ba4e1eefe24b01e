//! Five-year chronic kidney disease risk in HIV-positive patients, with and
//! without tenofovir exposure.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const MAX_SCORE: i64 = 15;

/// 5-year CKD event rate (%) by score 0..=9+; the last entry covers 9 and above.
const RATE_WITHOUT_TENOFOVIR: [f64; 10] = [0.7, 1.2, 2.1, 3.6, 6.2, 10.6, 12.8, 13.9, 15.1, 16.0];
const RATE_WITH_TENOFOVIR: [f64; 10] = [1.4, 2.4, 4.1, 7.0, 11.9, 19.0, 21.1, 21.3, 21.4, 21.4];
const NUMBER_NEEDED_TO_HARM: [i64; 10] = [108, 87, 66, 50, 38, 29, 25, 24, 23, 20];

choice! {
    pub enum AgeCategory {
        From19To39 => "19_to_39",
        From40To49 => "40_to_49",
        From50To59 => "50_to_59",
        From60To90 => "60_to_90",
    }
}

impl AgeCategory {
    fn points(self) -> i64 {
        match self {
            AgeCategory::From19To39 => 0,
            AgeCategory::From40To49 => 2,
            AgeCategory::From50To59 => 4,
            AgeCategory::From60To90 => 6,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeCategory::From19To39 => "19-39 years",
            AgeCategory::From40To49 => "40-49 years",
            AgeCategory::From50To59 => "50-59 years",
            AgeCategory::From60To90 => "60-90 years",
        }
    }
}

calculator_input! {
    pub struct CkdHivInput {
        pub age_category: AgeCategory,
        /// Glucose >140 mg/dL.
        pub glucose_elevated: YesNo,
        /// SBP >140 mmHg.
        pub systolic_bp_elevated: YesNo,
        pub hypertension: YesNo,
        /// Triglycerides >200 mg/dL.
        pub triglycerides_elevated: YesNo,
        pub proteinuria: YesNo,
        /// CD4 <200 cells/μL.
        pub cd4_low: YesNo,
        pub tenofovir_use: YesNo,
    }
}

fn event_rate(score: i64, tenofovir: bool) -> f64 {
    let index = score.clamp(0, 9) as usize;
    if tenofovir { RATE_WITH_TENOFOVIR[index] } else { RATE_WITHOUT_TENOFOVIR[index] }
}

impl CkdHivInput {
    /// (field, answer, points, rationale)
    fn risk_factors(&self) -> [(&'static str, YesNo, i64, &'static str); 6] {
        [
            (
                "glucose_elevated",
                self.glucose_elevated,
                2,
                "Glucose >140 mg/dL indicates diabetes risk, major CKD predictor",
            ),
            (
                "systolic_bp_elevated",
                self.systolic_bp_elevated,
                1,
                "SBP >140 mmHg reflects vascular damage and CKD risk",
            ),
            (
                "hypertension",
                self.hypertension,
                2,
                "Hypertension diagnosis is strongest traditional CKD risk factor",
            ),
            (
                "triglycerides_elevated",
                self.triglycerides_elevated,
                1,
                "Triglycerides >200 mg/dL indicates metabolic dysfunction",
            ),
            ("proteinuria", self.proteinuria, 2, "Proteinuria indicates existing kidney damage"),
            (
                "cd4_low",
                self.cd4_low,
                1,
                "CD4 <200 reflects HIV disease severity and immune suppression",
            ),
        ]
    }

    fn score(&self) -> i64 {
        self.age_category.points()
            + self
                .risk_factors()
                .iter()
                .map(|(_, answer, weight, _)| answer.points(*weight))
                .sum::<i64>()
    }
}

fn monitoring_frequency(risk: f64, tenofovir: bool) -> &'static str {
    match (tenofovir, risk) {
        (false, _) => "Every 6-12 months (standard HIV care without tenofovir)",
        (true, r) if r >= 15.0 => "Every 3 months (high risk with tenofovir)",
        (true, r) if r >= 5.0 => "Every 3-6 months (moderate risk with tenofovir)",
        (true, _) => "Every 6-12 months (low risk with tenofovir)",
    }
}

fn alternatives(risk: f64) -> &'static [&'static str] {
    if risk >= 15.0 {
        &[
            "Strong consideration for tenofovir alternatives (TAF, abacavir, rilpivirine)",
            "Nephrology consultation if eGFR declining",
            "Optimize cardiovascular risk factors",
            "Consider ACE inhibitor/ARB if hypertensive",
        ]
    } else if risk >= 5.0 {
        &[
            "Consider tenofovir alternatives if equally effective",
            "Enhanced monitoring of kidney function",
            "Optimize blood pressure and glucose control",
            "Avoid other nephrotoxic medications when possible",
        ]
    } else {
        &[
            "Tenofovir use reasonable with standard monitoring",
            "Maintain good control of traditional risk factors",
            "Regular assessment for CKD risk factor development",
        ]
    }
}

pub fn calculate(input: &CkdHivInput) -> CalcResult {
    let score = input.score();
    let tenofovir = input.tenofovir_use.is_yes();
    let risk = event_rate(score, tenofovir);
    let shown = fixed(risk, 1);

    let (stage, description, category, guidance) = match (risk, tenofovir) {
        (r, true) if r < 5.0 => (
            "Low Risk",
            "Low risk for CKD development",
            "Low risk",
            "with tenofovir. Low risk - tenofovir use reasonable with routine monitoring of kidney function every 6-12 months.",
        ),
        (r, false) if r < 5.0 => (
            "Low Risk",
            "Low risk for CKD development",
            "Low risk",
            "without tenofovir. Low baseline CKD risk - tenofovir could be considered if clinically indicated.",
        ),
        (r, true) if r < 15.0 => (
            "Moderate Risk",
            "Moderate risk for CKD development",
            "Moderate risk",
            "with tenofovir. Moderate risk - careful monitoring every 3-6 months and consideration of alternative \
             agents if CKD progression occurs.",
        ),
        (r, false) if r < 15.0 => (
            "Moderate Risk",
            "Moderate risk for CKD development",
            "Moderate risk",
            "without tenofovir. Moderate baseline risk - weigh benefits vs risks of tenofovir, consider alternatives if \
             available.",
        ),
        (_, true) => (
            "High Risk",
            "High risk for CKD development",
            "High risk",
            "with tenofovir. High risk - strong consideration for tenofovir alternative. If continued, monitor every 3 months.",
        ),
        (_, false) => (
            "High Risk",
            "High risk for CKD development",
            "High risk",
            "without tenofovir. High baseline risk - avoid tenofovir if possible, use alternative antiretroviral regimen.",
        ),
    };
    let text = format!("5-year CKD risk: {shown}% {guidance}");

    let mut factors = serde_json::Map::new();
    factors.insert(
        "age".to_string(),
        json!({
            "category": input.age_category.label(),
            "points": input.age_category.points(),
            "rationale": "Older age is a dominant risk factor for CKD development",
        }),
    );
    for (name, answer, weight, rationale) in input.risk_factors() {
        factors.insert(
            name.to_string(),
            json!({ "present": answer.is_yes(), "points": answer.points(weight), "rationale": rationale }),
        );
    }

    let without = event_rate(score, false);
    let with = event_rate(score, true);
    let breakdown = json!({
        "risk_factors": factors,
        "score_summary": {
            "total_score": score,
            "max_possible_score": MAX_SCORE,
            "risk_category": category,
        },
        "risk_comparison": {
            "without_tenofovir": format!("{}%", fixed(without, 1)),
            "with_tenofovir": format!("{}%", fixed(with, 1)),
            "absolute_risk_increase": format!("{}%", fixed(with - without, 1)),
            "relative_risk_increase": format!("{}%", fixed((with / without - 1.0) * 100.0, 0)),
            "number_needed_to_harm": NUMBER_NEEDED_TO_HARM[score.clamp(0, 9) as usize],
        },
        "clinical_guidance": {
            "monitoring_frequency": monitoring_frequency(risk, tenofovir),
            "alternative_considerations": alternatives(risk),
            "additional_risk_factors": [
                "Consider baseline eGFR and rate of decline",
                "Assess for concurrent nephrotoxic medications",
                "Evaluate for hepatitis B or C coinfection",
                "Monitor for cardiovascular disease development",
            ],
        },
        "study_context": {
            "population": "HIV-positive male veterans (Veterans Health Administration)",
            "follow_up_period": "5 years prospective follow-up",
            "outcome_definition": "CKD defined as eGFR <60 mL/min/1.73m² or proteinuria",
            "tenofovir_effect": "Overall adjusted hazard ratio 2.0 (95% CI 1.8-2.2)",
            "validation": "External validation in D:A:D cohort study",
        },
    });

    Ok(CalculatorResponse::new(risk, "percent", Interpretation::new(stage, description, text))
        .with("total_score", score)
        .with("scoring_breakdown", breakdown))
}
