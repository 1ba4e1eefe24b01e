//! Utah COVID-19 Risk Score for outpatient antiviral eligibility.
//!
//! The eligibility threshold depends on vaccination and pregnancy status.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Choice, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum VaccinationStatus {
        Vaccinated => "vaccinated",
        UnvaccinatedNotPregnant => "unvaccinated_not_pregnant",
        UnvaccinatedPregnant => "unvaccinated_pregnant",
    }
}

impl VaccinationStatus {
    pub fn threshold(self) -> f64 {
        match self {
            VaccinationStatus::Vaccinated => 8.0,
            VaccinationStatus::UnvaccinatedNotPregnant => 6.0,
            VaccinationStatus::UnvaccinatedPregnant => 4.0,
        }
    }
}

calculator_input! {
    pub struct UtahCovidInput {
        pub age: i64 => 16..=120,
        pub diabetes_mellitus: YesNo,
        pub obesity: YesNo,
        pub active_cancer: YesNo,
        pub immunosuppressive_therapies: YesNo,
        pub hypertension: YesNo,
        pub coronary_artery_disease: YesNo,
        pub cardiac_arrhythmia: YesNo,
        pub congestive_heart_failure: YesNo,
        pub chronic_kidney_disease: YesNo,
        pub chronic_pulmonary_disease: YesNo,
        pub chronic_liver_disease: YesNo,
        pub cerebrovascular_disease: YesNo,
        pub chronic_neurologic_disease: YesNo,
        pub shortness_of_breath: YesNo,
        pub vaccination_status: VaccinationStatus,
    }
}

fn age_points(age: i64) -> f64 {
    match age {
        ..=20 => 1.0,
        21..=30 => 1.5,
        31..=40 => 2.0,
        41..=50 => 2.5,
        51..=60 => 3.0,
        61..=70 => 3.5,
        71..=80 => 4.0,
        81..=90 => 4.5,
        91..=100 => 5.0,
        _ => 5.5,
    }
}

pub fn calculate(input: &UtahCovidInput) -> CalcResult {
    let age = age_points(input.age);
    let high_risk = [
        input.active_cancer,
        input.immunosuppressive_therapies,
        input.hypertension,
        input.coronary_artery_disease,
        input.cardiac_arrhythmia,
        input.congestive_heart_failure,
        input.chronic_kidney_disease,
        input.chronic_pulmonary_disease,
        input.chronic_liver_disease,
        input.cerebrovascular_disease,
        input.chronic_neurologic_disease,
    ]
    .iter()
    .map(|condition| condition.points(1))
    .sum::<i64>();
    let comorbidities =
        (input.diabetes_mellitus.points(2) + input.obesity.points(2) + high_risk) as f64;
    let symptoms = input.shortness_of_breath.points(1) as f64;
    let score = age + comorbidities + symptoms;

    let status = input.vaccination_status;
    let threshold = status.threshold();
    let eligible = score >= threshold;

    let (interpretation, recommendations) = if eligible {
        (
            Interpretation::new(
                "Treatment Eligible",
                "Qualifies for COVID-19 treatment",
                format!(
                    "Utah COVID-19 Risk Score: {score} points. Patient qualifies for COVID-19 antiviral treatment \
                     ({status} threshold: ≥{threshold} points). Consider oral antivirals if within 10 days of symptom onset."
                ),
            ),
            json!({
                "immediate_actions": [
                    "Consider oral antiviral therapy (nirmatrelvir-ritonavir or molnupiravir)",
                    "Ensure treatment initiation within 10 days of symptom onset",
                    "Review contraindications and drug interactions",
                ],
                "monitoring": [
                    "Daily symptom assessment",
                    "Follow up in 5-7 days or sooner if symptoms worsen",
                ],
            }),
        )
    } else {
        (
            Interpretation::new(
                "Treatment Not Eligible",
                "Does not meet treatment criteria",
                format!(
                    "Utah COVID-19 Risk Score: {score} points. Patient does not meet current criteria for COVID-19 antiviral treatment \
                     ({status} threshold: ≥{threshold} points). Continue supportive care and monitor for symptom progression."
                ),
            ),
            json!({
                "immediate_actions": [
                    "Continue supportive care (rest, hydration, symptom management)",
                    "Educate on warning signs requiring medical attention",
                ],
                "monitoring": [
                    "Return if symptoms worsen (shortness of breath, chest pain, confusion)",
                    "Re-evaluate if new high-risk symptoms develop",
                ],
            }),
        )
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("treatment_eligible", eligible)
        .with("threshold_score", threshold)
        .with("vaccination_status", status.token())
        .with(
            "component_scores",
            json!({
                "age_points": age,
                "comorbidity_points": comorbidities,
                "symptom_points": symptoms,
            }),
        )
        .with("clinical_recommendations", recommendations))
}
