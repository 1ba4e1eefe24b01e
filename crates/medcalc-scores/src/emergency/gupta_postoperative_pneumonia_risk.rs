//! Gupta Postoperative Pneumonia Risk (ACS NSQIP).

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

use super::gupta::{risk_level, spaced, AsaClass, FunctionalStatus, SepsisStatus};

choice! {
    pub enum PneumoniaProcedure {
        Aortic => "aortic",
        Brain => "brain",
        Cardiac => "cardiac",
        ThoracicNonCardiac => "thoracic_non_cardiac",
        Neck => "neck",
        PeripheralVascular => "peripheral_vascular",
        ForegutHepatobiliary => "foregut_hepatobiliary",
        GallbladderAppendixAdrenalsSpleen => "gallbladder_appendix_adrenals_spleen",
        Intestinal => "intestinal",
        OrthopedicNonSpine => "orthopedic_non_spine",
        Renal => "renal",
        Spine => "spine",
        UrologyNonRenal => "urology_non_renal",
        Hernia => "hernia",
        ObstetricGynecologic => "obstetric_gynecologic",
        Skin => "skin",
        ThyroidParathyroid => "thyroid_parathyroid",
        Vein => "vein",
        Breast => "breast",
    }
}

impl PneumoniaProcedure {
    fn coefficient(self) -> f64 {
        match self {
            PneumoniaProcedure::Aortic => 0.7178,
            PneumoniaProcedure::Brain => 0.6405,
            PneumoniaProcedure::Cardiac => 0.4492,
            PneumoniaProcedure::ThoracicNonCardiac => 0.2806,
            PneumoniaProcedure::Neck => 0.1633,
            PneumoniaProcedure::PeripheralVascular => 0.1382,
            PneumoniaProcedure::ForegutHepatobiliary => 0.1239,
            PneumoniaProcedure::GallbladderAppendixAdrenalsSpleen => 0.0823,
            PneumoniaProcedure::Intestinal => 0.0645,
            PneumoniaProcedure::OrthopedicNonSpine => 0.0189,
            PneumoniaProcedure::Renal => -0.0234,
            PneumoniaProcedure::Spine => -0.0689,
            PneumoniaProcedure::UrologyNonRenal => -0.1347,
            PneumoniaProcedure::Hernia => -0.1456,
            PneumoniaProcedure::ObstetricGynecologic => -0.1789,
            PneumoniaProcedure::Skin => -0.3254,
            PneumoniaProcedure::ThyroidParathyroid => -0.5632,
            PneumoniaProcedure::Vein => -0.8945,
            PneumoniaProcedure::Breast => -2.3318,
        }
    }
}

calculator_input! {
    pub struct GuptaPneumoniaInput {
        pub age: i64 => 18..=120,
        pub copd: YesNo,
        pub functional_status: FunctionalStatus,
        pub asa_class: AsaClass,
        pub sepsis_status: SepsisStatus,
        pub smoking: YesNo,
        pub procedure_type: PneumoniaProcedure,
    }
}

const BANDS: [(&str, &str); 5] = [
    (
        "Minimal pneumonia risk",
        "Very low risk of postoperative pneumonia. Standard perioperative care and monitoring are appropriate. Continue routine pulmonary hygiene measures, early mobilization, and standard pain management protocols. No additional pneumonia prevention interventions required.",
    ),
    (
        "Low pneumonia risk",
        "Low risk of postoperative pneumonia. Standard care with attention to pulmonary hygiene and early mobilization. Consider incentive spirometry, deep breathing exercises, and adequate pain control to facilitate coughing and ambulation.",
    ),
    (
        "Moderate pneumonia risk",
        "Moderate risk of postoperative pneumonia. Consider enhanced pulmonary care including chest physiotherapy, aggressive incentive spirometry, early mobilization protocols, and closer respiratory monitoring. Optimize pain management to facilitate pulmonary hygiene.",
    ),
    (
        "High pneumonia risk",
        "High risk of postoperative pneumonia. Implement aggressive pneumonia prevention strategies including preoperative pulmonary rehabilitation if feasible, postoperative chest physiotherapy, respiratory therapy consultation, and consider pulmonology evaluation for high-risk patients.",
    ),
    (
        "Very high pneumonia risk",
        "Very high risk of postoperative pneumonia. Consider postponing elective surgery for preoperative optimization including pulmonary rehabilitation, smoking cessation, treatment of respiratory infections. Implement intensive pneumonia prevention protocols and consider ICU-level monitoring postoperatively.",
    ),
];

pub fn calculate(input: &GuptaPneumoniaInput) -> CalcResult {
    let copd = if input.copd.is_yes() { 0.0 } else { -0.4553 };
    let functional = match input.functional_status {
        FunctionalStatus::Independent => 0.0,
        FunctionalStatus::PartiallyDependent => 0.7653,
        FunctionalStatus::TotallyDependent => 0.9400,
    };
    let asa = match input.asa_class {
        AsaClass::I => -3.0225,
        AsaClass::II => -1.6057,
        AsaClass::III => -0.4915,
        AsaClass::IV => 0.0123,
        AsaClass::V => 0.0,
    };
    let sepsis = match input.sepsis_status {
        SepsisStatus::None => -0.7641,
        SepsisStatus::Sirs => 0.0,
        SepsisStatus::Sepsis => -0.0842,
        SepsisStatus::SepticShock => 0.1048,
    };
    let smoking = if input.smoking.is_yes() { 0.0 } else { -0.4306 };
    let x = -2.8977
        + 0.0144 * input.age as f64
        + copd
        + functional
        + asa
        + sepsis
        + smoking
        + input.procedure_type.coefficient();
    let risk = logistic(x) * 100.0;

    let (index, level) = risk_level(risk, [1.0, 3.0, 6.0, 15.0]);
    let (description, recommendations) = BANDS[index];
    let text = format!(
        "Patient characteristics: {} years old, {}, {}, {}, {}, {}, undergoing {}. Gupta Postoperative Pneumonia Risk: {}% risk of pneumonia within 30 days after surgery. Risk Category: {level} ({description}). Clinical recommendations: {recommendations} Important considerations: This calculator predicts postoperative pneumonia risk based on validated ACS NSQIP data. Pneumonia is associated with significantly increased 30-day mortality (17.0% vs 1.5%). Use in conjunction with clinical judgment for surgical decision-making and targeted prevention strategies. Consider individual patient factors such as recent respiratory infections, medication compliance, and surgical urgency when making final management decisions.",
        input.age,
        if input.copd.is_yes() { "COPD present" } else { "no COPD" },
        input.functional_status.description(),
        input.asa_class.description(),
        input.sepsis_status.description(),
        if input.smoking.is_yes() { "current smoker" } else { "non-smoker" },
        spaced(&input.procedure_type.to_string()),
        fixed(risk, 2),
    );

    Ok(CalculatorResponse::new(
        round_to(risk, 2),
        "percentage",
        Interpretation::new(level, description, text),
    ))
}
