//! VTE-BLEED score for major bleeding on stable anticoagulation after VTE.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const ELEVATED_RISK_THRESHOLD: f64 = 2.0;

calculator_input! {
    pub struct VteBleedInput {
        pub age_60_or_older: YesNo,
        pub active_cancer: YesNo,
        pub male_uncontrolled_hypertension: YesNo,
        pub anemia: YesNo,
        pub history_of_bleeding: YesNo,
        pub renal_dysfunction: YesNo,
    }
}

impl VteBleedInput {
    fn criteria(&self) -> [(&'static str, YesNo, f64); 6] {
        [
            ("Age 60 Or Older", self.age_60_or_older, 1.5),
            ("Active Cancer", self.active_cancer, 2.0),
            ("Male Uncontrolled Hypertension", self.male_uncontrolled_hypertension, 1.0),
            ("Anemia", self.anemia, 1.5),
            ("History Of Bleeding", self.history_of_bleeding, 1.5),
            ("Renal Dysfunction", self.renal_dysfunction, 1.5),
        ]
    }
}

fn recommendations(input: &VteBleedInput, elevated: bool) -> Vec<&'static str> {
    if !elevated {
        let mut recs = vec![
            "Continue standard anticoagulation therapy",
            "Routine monitoring and follow-up intervals",
            "Standard patient education about bleeding precautions",
        ];
        if input.criteria().iter().all(|(_, answer, _)| !answer.is_yes()) {
            recs.push("Consider extended anticoagulation if no contraindications");
        }
        return recs;
    }
    let mut recs = vec![
        "Enhanced monitoring with more frequent follow-up",
        "Comprehensive bleeding risk assessment",
        "Consider dose optimization or alternative anticoagulants",
    ];
    if input.active_cancer.is_yes() {
        recs.push("Coordinate with oncology for bleeding risk management");
    }
    if input.history_of_bleeding.is_yes() {
        recs.push("Review previous bleeding episodes and triggers");
    }
    if input.renal_dysfunction.is_yes() {
        recs.push("Monitor renal function and adjust dosing accordingly");
    }
    if input.anemia.is_yes() {
        recs.push("Investigate and treat underlying anemia");
    }
    if input.male_uncontrolled_hypertension.is_yes() {
        recs.push("Optimize blood pressure control");
    }
    recs.push("Individual risk-benefit assessment for anticoagulation duration");
    recs
}

pub fn calculate(input: &VteBleedInput) -> CalcResult {
    let criteria = input.criteria();
    let score: f64 = criteria
        .iter()
        .filter(|(_, answer, _)| answer.is_yes())
        .map(|(_, _, points)| points)
        .sum();
    let elevated = score >= ELEVATED_RISK_THRESHOLD;
    let score_text = fixed(score, 1);

    let interpretation = if elevated {
        Interpretation::new(
            "Elevated Risk",
            "Elevated bleeding risk on anticoagulation",
            format!(
                "VTE-BLEED score of {score_text} indicates elevated bleeding risk. Consider more frequent monitoring with enhanced \
                 surveillance for bleeding complications. Evaluate for careful medication selection, potential dose adjustments, and \
                 shorter anticoagulation duration when clinically appropriate."
            ),
        )
    } else {
        Interpretation::new(
            "Low Risk",
            "Low bleeding risk on anticoagulation",
            format!(
                "VTE-BLEED score of {score_text} indicates low bleeding risk. Continue standard anticoagulation therapy with routine \
                 monitoring. The benefits of anticoagulation typically outweigh bleeding risks in this population."
            ),
        )
    };

    let positive: Vec<_> = criteria
        .iter()
        .filter(|(_, answer, _)| answer.is_yes())
        .map(|(name, _, points)| json!({ "criterion": name, "points": points }))
        .collect();

    Ok(CalculatorResponse::new(score, "points", interpretation).with(
        "component_breakdown",
        json!({
            "positive_criteria_count": positive.len(),
            "positive_criteria": positive,
            "clinical_recommendations": recommendations(input, elevated),
        }),
    ))
}
