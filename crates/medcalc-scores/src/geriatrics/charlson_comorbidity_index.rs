//! Charlson Comorbidity Index with age adjustment.
//!
//! Ten-year survival is estimated as `0.983^(CCI × 0.9)`.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum LiverDisease {
        None => "none",
        Mild => "mild",
        ModerateSevere => "moderate_severe",
    }
}

choice! {
    pub enum Diabetes {
        None => "none",
        Uncomplicated => "uncomplicated",
        EndOrganDamage => "with_end_organ_damage",
    }
}

calculator_input! {
    pub struct CharlsonInput {
        pub age: i64 => 0..=120,
        pub myocardial_infarction: YesNo,
        pub congestive_heart_failure: YesNo,
        pub peripheral_vascular_disease: YesNo,
        pub cerebrovascular_disease: YesNo,
        pub dementia: YesNo,
        pub chronic_pulmonary_disease: YesNo,
        pub connective_tissue_disease: YesNo,
        pub peptic_ulcer_disease: YesNo,
        pub liver_disease: LiverDisease,
        pub diabetes: Diabetes,
        pub hemiplegia: YesNo,
        pub moderate_severe_ckd: YesNo,
        pub localized_solid_tumor: YesNo,
        pub leukemia: YesNo,
        pub lymphoma: YesNo,
        pub metastatic_solid_tumor: YesNo,
        pub aids: YesNo,
    }
}

impl CharlsonInput {
    fn comorbidity_points(&self) -> i64 {
        let one_point = [
            self.myocardial_infarction,
            self.congestive_heart_failure,
            self.peripheral_vascular_disease,
            self.cerebrovascular_disease,
            self.dementia,
            self.chronic_pulmonary_disease,
            self.connective_tissue_disease,
            self.peptic_ulcer_disease,
        ];
        let two_points = [
            self.hemiplegia,
            self.moderate_severe_ckd,
            self.localized_solid_tumor,
            self.leukemia,
            self.lymphoma,
        ];
        let liver = match self.liver_disease {
            LiverDisease::None => 0,
            LiverDisease::Mild => 1,
            LiverDisease::ModerateSevere => 3,
        };
        let diabetes = match self.diabetes {
            Diabetes::None => 0,
            Diabetes::Uncomplicated => 1,
            Diabetes::EndOrganDamage => 2,
        };
        one_point.iter().map(|c| c.points(1)).sum::<i64>()
            + two_points.iter().map(|c| c.points(2)).sum::<i64>()
            + liver
            + diabetes
            + self.metastatic_solid_tumor.points(6)
            + self.aids.points(6)
    }
}

fn age_points(age: i64) -> i64 {
    match age {
        ..50 => 0,
        50..60 => 1,
        60..70 => 2,
        70..80 => 3,
        _ => 4,
    }
}

pub fn calculate(input: &CharlsonInput) -> CalcResult {
    let age = age_points(input.age);
    let comorbidities = input.comorbidity_points();
    let score = age + comorbidities;
    let survival = (0.983_f64.powf(score as f64 * 0.9) * 100.0).clamp(0.0, 100.0);

    let (category, stage, description, summary) = if survival >= 90.0 {
        (
            "Low Risk",
            "Minimal Comorbidity",
            "Minimal comorbidity burden with excellent prognosis",
            "Excellent 10-year survival (≥90%). Minimal impact from comorbidities.",
        )
    } else if survival >= 70.0 {
        (
            "Moderate Risk",
            "Moderate Comorbidity",
            "Moderate comorbidity burden with good prognosis",
            "Good 10-year survival (70-89%). Moderate impact from comorbidities.",
        )
    } else if survival >= 30.0 {
        (
            "High Risk",
            "Significant Comorbidity",
            "Significant comorbidity burden with reduced survival",
            "Reduced 10-year survival (30-69%). Significant impact from comorbidities.",
        )
    } else {
        (
            "Very High Risk",
            "Severe Comorbidity",
            "Severe comorbidity burden with poor prognosis",
            "Poor 10-year survival (<30%). Severe impact from comorbidities.",
        )
    };
    let text = format!(
        "Charlson Comorbidity Index Score: {score} points. Predicted 10-year survival: {}%. {summary} \
         Consider individual patient factors and treatment goals when making clinical decisions based on this assessment.",
        fixed(survival, 1)
    );

    Ok(
        CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text))
            .with("age_points", age)
            .with("comorbidity_points", comorbidities)
            .with("ten_year_survival_probability", round_to(survival, 2))
            .with("risk_category", category),
    )
}
