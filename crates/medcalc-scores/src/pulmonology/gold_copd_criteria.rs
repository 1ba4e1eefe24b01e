//! GOLD COPD classification: spirometric grade from post-bronchodilator
//! FEV1 and the A/B/E group from symptoms and exacerbation history.
//!
//! COPD requires FEV1/FVC below 0.70; otherwise the result is a normal
//! spirometry classification.
//!
//! FEV1 grade bands are contiguous: 80% and above, 50%, 30%, then below.

use medcalc_core::math::{ensure, fixed};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const OBSTRUCTION_RATIO: f64 = 0.70;

const MMRC_DESCRIPTIONS: [&str; 5] = [
    "Breathless only with strenuous exercise",
    "Short of breath when hurrying on level ground or walking up slight hill",
    "Walks slower than people of same age due to breathlessness, or stops for breath when walking at own pace",
    "Stops for breath after walking about 100 meters or after few minutes on level ground",
    "Too breathless to leave house or breathless when dressing/undressing",
];

calculator_input! {
    pub struct GoldCopdInput {
        pub fev1_percent_predicted: f64 => 10.0..=120.0,
        pub fvc_fev1_ratio: f64 => 0.30..=1.00,
        pub dyspnea_mmrc: i64 => 0..=4,
        pub exacerbations_last_year: i64,
        pub hospitalizations_last_year: i64,
        pub cat_score: Option<i64> => 0..=40,
    }
}

impl GoldCopdInput {
    fn validate(&self) -> CalcResult<()> {
        ensure(
            self.exacerbations_last_year >= 0,
            "Number of exacerbations must be non-negative integer",
        )?;
        ensure(
            self.hospitalizations_last_year >= 0,
            "Number of hospitalizations must be non-negative integer",
        )?;
        Ok(())
    }

    fn high_symptoms(&self) -> bool {
        self.dyspnea_mmrc >= 2 || self.cat_score.is_some_and(|cat| cat >= 10)
    }

    fn high_exacerbation_risk(&self) -> bool {
        self.exacerbations_last_year >= 2 || self.hospitalizations_last_year >= 1
    }

    fn group(&self) -> Group {
        if self.high_exacerbation_risk() {
            Group::E
        } else if self.high_symptoms() {
            Group::B
        } else {
            Group::A
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grade {
    Mild = 1,
    Moderate = 2,
    Severe = 3,
    VerySevere = 4,
}

impl Grade {
    fn from_fev1(fev1: f64) -> Self {
        if fev1 >= 80.0 {
            Grade::Mild
        } else if fev1 >= 50.0 {
            Grade::Moderate
        } else if fev1 >= 30.0 {
            Grade::Severe
        } else {
            Grade::VerySevere
        }
    }

    fn description(self) -> &'static str {
        match self {
            Grade::Mild => "Mild",
            Grade::Moderate => "Moderate",
            Grade::Severe => "Severe",
            Grade::VerySevere => "Very Severe",
        }
    }

    fn fev1_range(self) -> &'static str {
        match self {
            Grade::Mild => "≥80% predicted",
            Grade::Moderate => "50-79% predicted",
            Grade::Severe => "30-49% predicted",
            Grade::VerySevere => "<30% predicted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    A,
    B,
    E,
}

impl Group {
    fn letter(self) -> &'static str {
        match self {
            Group::A => "A",
            Group::B => "B",
            Group::E => "E",
        }
    }

    /// (explanation, bronchodilator, additional therapy, management focus)
    fn guidance(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Group::A => (
                "Low symptom burden, low exacerbation risk",
                "Short-acting bronchodilator (SABA or SAMA) as needed",
                "Smoking cessation, vaccination, pulmonary rehabilitation if breathless",
                "Focus on smoking cessation, vaccination, and bronchodilator therapy as needed",
            ),
            Group::B => (
                "High symptom burden, low exacerbation risk",
                "Long-acting bronchodilator (LABA or LAMA)",
                "If still breathless: LABA + LAMA combination",
                "Regular long-acting bronchodilator therapy with pulmonary rehabilitation",
            ),
            Group::E => (
                "High exacerbation risk (regardless of symptom level)",
                "LABA + LAMA combination",
                "If continued exacerbations: Consider ICS based on eosinophil count and phenotype",
                "Intensive therapy to prevent exacerbations with combination bronchodilators",
            ),
        }
    }
}

fn no_copd(input: &GoldCopdInput) -> CalculatorResponse {
    let text = format!(
        "FEV1/FVC ratio: {} (≥0.70). FEV1: {}% predicted. Post-bronchodilator spirometry does not meet criteria for COPD diagnosis (requires FEV1/FVC <0.70). Consider other causes of respiratory symptoms if present. Continue smoking cessation counseling if applicable. Recommend routine health maintenance and vaccination. If high clinical suspicion for COPD remains, consider repeat spirometry or referral to pulmonology for further evaluation.",
        fixed(input.fvc_fev1_ratio, 2),
        fixed(input.fev1_percent_predicted, 1)
    );
    CalculatorResponse::new(
        "No COPD - Normal spirometry",
        "classification",
        Interpretation::new("No COPD", "Normal lung function", text),
    )
    .with("copd_diagnosis", false)
}

pub fn calculate(input: &GoldCopdInput) -> CalcResult {
    input.validate()?;

    if input.fvc_fev1_ratio >= OBSTRUCTION_RATIO {
        return Ok(no_copd(input));
    }

    let grade = Grade::from_fev1(input.fev1_percent_predicted);
    let group = input.group();
    let (explanation, bronchodilator, additional, focus) = group.guidance();
    let classification = format!(
        "GOLD {} - {} COPD, Group {}",
        grade as i64,
        grade.description(),
        group.letter()
    );

    let mut symptoms = format!(
        "Symptoms: mMRC {} ({})",
        input.dyspnea_mmrc, MMRC_DESCRIPTIONS[input.dyspnea_mmrc as usize]
    );
    if let Some(cat) = input.cat_score {
        symptoms.push_str(&format!(", CAT {cat}/40"));
    }

    let text = format!(
        "{classification}. Post-bronchodilator spirometry: FEV1/FVC {} (<0.70 confirms COPD), FEV1 {}% predicted. {symptoms}. Exacerbation history: {} exacerbations, {} hospitalizations in last year. Classification: {explanation}. Treatment recommendations: {bronchodilator}. {additional}. {focus}. Essential interventions: smoking cessation (most important), annual influenza vaccination, pneumococcal vaccination, COVID-19 vaccination. Pulmonary rehabilitation recommended for all symptomatic patients (Groups B and E). Monitor for comorbidities especially cardiovascular disease. Regular follow-up with spirometry, symptom assessment, and exacerbation review. Consider oxygen therapy evaluation if FEV1 <30% or clinical signs of respiratory failure.",
        fixed(input.fvc_fev1_ratio, 2),
        fixed(input.fev1_percent_predicted, 1),
        input.exacerbations_last_year,
        input.hospitalizations_last_year,
    );

    let description = format!(
        "{} airflow limitation, Group {}",
        grade.description(),
        group.letter()
    );

    Ok(CalculatorResponse::new(
        classification.clone(),
        "classification",
        Interpretation::new(classification, description, text),
    )
    .with("copd_diagnosis", true)
    .with("gold_grade", grade as i64)
    .with("fev1_range", grade.fev1_range())
    .with("copd_group", group.letter())
    .with(
        "symptom_assessment",
        json!({
            "mmrc_score": input.dyspnea_mmrc,
            "cat_score": input.cat_score,
            "high_symptoms": input.high_symptoms(),
        }),
    )
    .with(
        "exacerbation_risk",
        if input.high_exacerbation_risk() { "High" } else { "Low" },
    ))
}
