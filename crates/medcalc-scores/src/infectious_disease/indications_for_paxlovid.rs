//! Eligibility screen for nirmatrelvir/ritonavir (Paxlovid) in mild to moderate COVID-19.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct PaxlovidInput {
        pub age_over_12: YesNo,
        pub weight_over_40kg: YesNo,
        pub mild_moderate_covid: YesNo,
        pub symptom_onset_5_days: YesNo,
        pub egfr_over_30: YesNo,
        pub no_severe_hepatic_impairment: YesNo,
        pub age_over_50: YesNo,
        pub diabetes: YesNo,
        pub heart_disease: YesNo,
        pub lung_disease: YesNo,
        pub obesity: YesNo,
        pub immunocompromised: YesNo,
        pub pregnancy: YesNo,
        pub unvaccinated_or_not_current: YesNo,
        pub other_high_risk_condition: YesNo,
        pub significant_drug_interactions: YesNo,
    }
}

enum Eligibility {
    NotIndicated(String),
    Contraindicated,
    StandardDose,
}

impl PaxlovidInput {
    fn basic_criteria(&self) -> [(&'static str, YesNo); 6] {
        [
            ("age_over_12", self.age_over_12),
            ("weight_over_40kg", self.weight_over_40kg),
            ("mild_moderate_covid", self.mild_moderate_covid),
            ("symptom_onset_5_days", self.symptom_onset_5_days),
            ("egfr_over_30", self.egfr_over_30),
            ("no_severe_hepatic_impairment", self.no_severe_hepatic_impairment),
        ]
    }

    fn has_high_risk_factor(&self) -> bool {
        [
            self.age_over_50,
            self.diabetes,
            self.heart_disease,
            self.lung_disease,
            self.obesity,
            self.immunocompromised,
            self.pregnancy,
            self.unvaccinated_or_not_current,
            self.other_high_risk_condition,
        ]
        .iter()
        .any(|answer| answer.is_yes())
    }

    fn eligibility(&self) -> Eligibility {
        let failed: Vec<&str> = self
            .basic_criteria()
            .into_iter()
            .filter(|(_, answer)| !answer.is_yes())
            .map(|(name, _)| name)
            .collect();
        if !failed.is_empty() {
            return Eligibility::NotIndicated(format!("Failed basic criteria: {}", failed.join(", ")));
        }
        if self.significant_drug_interactions.is_yes() {
            return Eligibility::Contraindicated;
        }
        if !self.has_high_risk_factor() {
            return Eligibility::NotIndicated("No high-risk factors present".to_string());
        }
        Eligibility::StandardDose
    }
}

pub fn calculate(input: &PaxlovidInput) -> CalcResult {
    let (interpretation, reason) = match input.eligibility() {
        Eligibility::NotIndicated(reason) => (
            Interpretation::new(
                "Not Indicated",
                "Paxlovid not recommended",
                "Patient does not meet eligibility criteria for Paxlovid therapy. Consider alternative treatments or \
                 supportive care as appropriate.",
            ),
            reason,
        ),
        Eligibility::Contraindicated => (
            Interpretation::new(
                "Contraindicated",
                "Paxlovid contraindicated",
                "Paxlovid is contraindicated due to significant drug interactions, severe renal impairment, or other \
                 safety concerns. Do not prescribe.",
            ),
            "Significant drug interactions present".to_string(),
        ),
        Eligibility::StandardDose => (
            Interpretation::new(
                "Standard Dose",
                "Paxlovid indicated - standard dose",
                "Patient eligible for Paxlovid. Prescribe standard dose: nirmatrelvir 300mg + ritonavir 100mg twice daily \
                 for 5 days. Start within 5 days of symptom onset.",
            ),
            "Eligible for Paxlovid therapy".to_string(),
        ),
    };

    let result = interpretation.stage.clone();
    Ok(CalculatorResponse::new(result, "recommendation", interpretation).with("reason", reason))
}
