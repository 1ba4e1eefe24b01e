//! Gupta Postoperative Respiratory Failure Risk.
//!
//! Predicts mechanical ventilation beyond 48 hours or unplanned intubation
//! within 30 days of surgery.

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

use super::gupta::{risk_level, spaced, AsaClass, FunctionalStatus, SepsisStatus};

choice! {
    pub enum RespiratoryProcedure {
        Aortic => "aortic",
        Brain => "brain",
        ThoracicNonCardiac => "thoracic_non_cardiac",
        Cardiac => "cardiac",
        ForegutHepatobiliary => "foregut_hepatobiliary",
        PeripheralVascular => "peripheral_vascular",
        Neck => "neck",
        GallbladderAppendixAdrenalsSpleen => "gallbladder_appendix_adrenals_spleen",
        Intestinal => "intestinal",
        Renal => "renal",
        Spine => "spine",
        OrthopedicNonSpine => "orthopedic_non_spine",
        OtherAbdomen => "other_abdomen",
        UrologyNonRenal => "urology_non_renal",
        Hernia => "hernia",
        GynecologicOncology => "gynecologic_oncology",
        ObstetricGynecologic => "obstetric_gynecologic",
        OtherHematologic => "other_hematologic",
        Skin => "skin",
        ThyroidParathyroid => "thyroid_parathyroid",
        Vein => "vein",
        Breast => "breast",
    }
}

impl RespiratoryProcedure {
    fn coefficient(self) -> f64 {
        use RespiratoryProcedure::*;
        match self {
            Aortic => 1.0781,
            Brain => 0.8086,
            ThoracicNonCardiac => 0.7737,
            Cardiac => 0.6959,
            ForegutHepatobiliary => 0.4949,
            PeripheralVascular => 0.3646,
            Neck => 0.2701,
            GallbladderAppendixAdrenalsSpleen => 0.2135,
            Intestinal => 0.1964,
            Renal => 0.1460,
            Spine => 0.1139,
            OrthopedicNonSpine => 0.0654,
            OtherAbdomen => 0.0481,
            UrologyNonRenal => 0.0089,
            Hernia => 0.0,
            GynecologicOncology => -0.0234,
            ObstetricGynecologic => -0.1456,
            OtherHematologic => -0.2341,
            Skin => -0.3678,
            ThyroidParathyroid => -0.4927,
            Vein => -0.8934,
            Breast => -2.6462,
        }
    }
}

calculator_input! {
    pub struct GuptaRespiratoryFailureInput {
        pub functional_status: FunctionalStatus,
        pub asa_class: AsaClass,
        pub sepsis_status: SepsisStatus,
        pub emergency_case: YesNo,
        pub procedure_type: RespiratoryProcedure,
    }
}

const BANDS: [(&str, &str); 5] = [
    (
        "Minimal respiratory failure risk",
        "Very low risk of postoperative respiratory failure. Standard perioperative care and monitoring are appropriate. Continue routine respiratory care including early mobilization, adequate pain management, and standard postoperative protocols. No additional respiratory interventions typically required.",
    ),
    (
        "Low respiratory failure risk",
        "Low risk of postoperative respiratory failure. Standard care with attention to respiratory status and pain management. Ensure adequate pain control to facilitate deep breathing and coughing. Monitor for signs of respiratory complications and implement standard pulmonary hygiene measures.",
    ),
    (
        "Moderate respiratory failure risk",
        "Moderate risk of postoperative respiratory failure. Consider enhanced respiratory monitoring and pulmonary care protocols. Implement aggressive pulmonary hygiene, incentive spirometry, and consider respiratory therapy consultation. Monitor closely for early signs of respiratory compromise.",
    ),
    (
        "High respiratory failure risk",
        "High risk of postoperative respiratory failure. Implement intensive respiratory monitoring and consider ICU-level care. Strong consideration for pulmonology consultation, mechanical ventilation readiness, and enhanced postoperative surveillance. Consider preoperative optimization if elective case.",
    ),
    (
        "Very high respiratory failure risk",
        "Very high risk of postoperative respiratory failure. Consider postponing elective surgery for preoperative optimization. ICU-level monitoring and care required. Mechanical ventilation should be readily available. Multidisciplinary team approach with pulmonology, anesthesia, and critical care involvement essential.",
    ),
];

pub fn calculate(input: &GuptaRespiratoryFailureInput) -> CalcResult {
    let functional = match input.functional_status {
        FunctionalStatus::Independent => 0.0,
        FunctionalStatus::PartiallyDependent => 0.7678,
        FunctionalStatus::TotallyDependent => 1.4046,
    };
    let asa = match input.asa_class {
        AsaClass::I => -3.5265,
        AsaClass::II => -2.0008,
        AsaClass::III => -0.6201,
        AsaClass::IV => 0.2441,
        AsaClass::V => 0.0,
    };
    let sepsis = match input.sepsis_status {
        SepsisStatus::None => -0.7840,
        SepsisStatus::Sirs => 0.0,
        SepsisStatus::Sepsis => 0.2752,
        SepsisStatus::SepticShock => 0.9035,
    };
    let emergency = if input.emergency_case.is_yes() { 0.0 } else { -0.5739 };
    let x = -1.7397 + functional + asa + sepsis + emergency + input.procedure_type.coefficient();
    let risk = logistic(x) * 100.0;

    let (index, level) = risk_level(risk, [1.0, 3.0, 8.0, 20.0]);
    let (description, recommendations) = BANDS[index];
    let text = format!(
        "Patient characteristics: {}, {}, {}, {}, undergoing {}. Gupta Postoperative Respiratory Failure Risk: {}% risk of respiratory failure requiring mechanical ventilation >48 hours or unplanned intubation within 30 days. Risk Category: {level} ({description}). Clinical recommendations: {recommendations} Important considerations: This calculator predicts postoperative respiratory failure risk (mechanical ventilation >48 hours or unplanned intubation ≤30 days). Respiratory failure is associated with significantly increased 30-day mortality (25.62% vs 0.98%). Use in conjunction with clinical judgment for surgical decision-making and care planning. Consider individual patient factors such as pulmonary function tests, recent respiratory infections, and surgical urgency when making final management decisions.",
        input.functional_status.description(),
        input.asa_class.description(),
        input.sepsis_status.description(),
        if input.emergency_case.is_yes() { "emergency case" } else { "elective case" },
        spaced(&input.procedure_type.to_string()),
        fixed(risk, 2),
    );

    Ok(CalculatorResponse::new(
        round_to(risk, 2),
        "percentage",
        Interpretation::new(level, description, text),
    ))
}
