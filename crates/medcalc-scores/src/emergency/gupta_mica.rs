//! Gupta Perioperative Risk for Myocardial Infarction or Cardiac Arrest.

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

use super::gupta::{risk_level, spaced, AsaClass, FunctionalStatus};

choice! {
    pub enum CreatinineStatus {
        Normal => "normal",
        Elevated => "elevated",
        Unknown => "unknown",
    }
}

choice! {
    pub enum MicaSurgery {
        Aortic => "aortic",
        Brain => "brain",
        Cardiac => "cardiac",
        ForegutHepatobiliary => "foregut_hepatobiliary",
        GallbladderAppendixAdrenalsSpleen => "gallbladder_appendix_adrenals_spleen",
        Intestinal => "intestinal",
        Neck => "neck",
        ObstetricGynecologic => "obstetric_gynecologic",
        OrthopedicNonSpine => "orthopedic_non_spine",
        PeripheralVascular => "peripheral_vascular",
        Skin => "skin",
        Spine => "spine",
        ThoracicNonCardiac => "thoracic_non_cardiac",
        UrologyNonRenal => "urology_non_renal",
        Renal => "renal",
        Hernia => "hernia",
        ThyroidParathyroid => "thyroid_parathyroid",
        Breast => "breast",
        Eye => "eye",
        Vein => "vein",
    }
}

impl MicaSurgery {
    fn coefficient(self) -> f64 {
        match self {
            MicaSurgery::Aortic => 1.60,
            MicaSurgery::Brain => 1.40,
            MicaSurgery::Cardiac => 1.01,
            MicaSurgery::ForegutHepatobiliary => 0.82,
            MicaSurgery::GallbladderAppendixAdrenalsSpleen => 0.67,
            MicaSurgery::Intestinal => 0.58,
            MicaSurgery::Neck => 0.40,
            MicaSurgery::ObstetricGynecologic => 0.28,
            MicaSurgery::OrthopedicNonSpine => 0.20,
            MicaSurgery::PeripheralVascular => 0.16,
            MicaSurgery::Skin => 0.12,
            MicaSurgery::Spine => 0.10,
            MicaSurgery::ThoracicNonCardiac => 0.06,
            MicaSurgery::UrologyNonRenal => 0.04,
            MicaSurgery::Renal => 0.02,
            MicaSurgery::Hernia => 0.0,
            MicaSurgery::ThyroidParathyroid => -0.32,
            MicaSurgery::Breast => -1.61,
            MicaSurgery::Eye => -1.05,
            MicaSurgery::Vein => -1.09,
        }
    }

    fn description(self) -> String {
        match self {
            MicaSurgery::Hernia => "hernia repair".to_string(),
            MicaSurgery::Aortic
            | MicaSurgery::Brain
            | MicaSurgery::Cardiac
            | MicaSurgery::Breast
            | MicaSurgery::Vein => format!("{self} surgery"),
            other => spaced(&other.to_string()),
        }
    }
}

calculator_input! {
    pub struct GuptaMicaInput {
        pub age: i64 => 18..=120,
        pub functional_status: FunctionalStatus,
        pub asa_class: AsaClass,
        pub creatinine_status: CreatinineStatus,
        pub surgery_type: MicaSurgery,
    }
}

pub fn calculate(input: &GuptaMicaInput) -> CalcResult {
    let functional = match input.functional_status {
        FunctionalStatus::Independent => 0.0,
        FunctionalStatus::PartiallyDependent => 0.65,
        FunctionalStatus::TotallyDependent => 1.03,
    };
    let asa = match input.asa_class {
        AsaClass::I => -5.17,
        AsaClass::II => -3.29,
        AsaClass::III => -1.92,
        AsaClass::IV => -0.95,
        AsaClass::V => 0.0,
    };
    let (creatinine, creatinine_desc) = match input.creatinine_status {
        CreatinineStatus::Normal => (0.0, "normal creatinine (≤1.5 mg/dL)"),
        CreatinineStatus::Elevated => (0.61, "elevated creatinine (>1.5 mg/dL)"),
        CreatinineStatus::Unknown => (-0.10, "unknown creatinine status"),
    };
    let x = -5.25 + 0.02 * input.age as f64 + functional + asa + creatinine + input.surgery_type.coefficient();
    let risk = logistic(x) * 100.0;

    let (index, level) = risk_level(risk, [0.5, 1.0, 2.0, 5.0]);
    let (description, recommendations) = [
        (
            "Minimal perioperative cardiac risk",
            "Very low perioperative cardiac risk. Standard perioperative monitoring and routine postoperative care protocols are appropriate. No additional cardiac interventions typically required. Continue standard perioperative medications as clinically indicated.",
        ),
        (
            "Low perioperative cardiac risk",
            "Low perioperative cardiac risk. Standard monitoring with attention to cardiac symptoms is recommended. Consider basic cardiac precautions and continue home cardiac medications unless contraindicated. Monitor for signs of myocardial ischemia postoperatively.",
        ),
        (
            "Moderate perioperative cardiac risk",
            "Moderate perioperative cardiac risk requiring enhanced monitoring. Consider cardiac telemetry monitoring, serial troponin measurements, and cardiology consultation for high-risk procedures. Optimize medical management of cardiovascular risk factors preoperatively.",
        ),
        (
            "High perioperative cardiac risk",
            "High perioperative cardiac risk requiring intensive monitoring and cardiac optimization. Strongly consider preoperative cardiology evaluation, continuous cardiac monitoring, postoperative ICU care, and serial cardiac biomarkers. Optimize beta-blockers, statins, and other cardioprotective medications.",
        ),
        (
            "Very high perioperative cardiac risk",
            "Very high perioperative cardiac risk requiring comprehensive cardiac evaluation and optimization. Consider postponing elective surgery for cardiac optimization, preoperative stress testing, echocardiography, and multidisciplinary team approach. May require invasive cardiac monitoring and ICU-level care.",
        ),
    ][index];

    let asa_desc = match input.asa_class {
        AsaClass::I => "ASA Class I (normal healthy patient)",
        other => other.description(),
    };
    let text = format!(
        "Patient characteristics: {} years old, {}, {asa_desc}, {creatinine_desc}, undergoing {}. Gupta MICA Risk: {}% risk of perioperative cardiac events within 30 days. Risk Category: {level} ({description}). Clinical recommendations: {recommendations} Important considerations: This calculator predicts 30-day perioperative myocardial infarction or cardiac arrest risk based on validated risk factors. Should be used in conjunction with clinical judgment and comprehensive patient assessment. Consider individual patient factors not captured in the model, such as coronary artery disease, medication compliance, and surgical urgency when making final management decisions.",
        input.age,
        input.functional_status.description(),
        input.surgery_type.description(),
        fixed(risk, 2),
    );

    Ok(CalculatorResponse::new(
        round_to(risk, 2),
        "percentage",
        Interpretation::new(level, description, text),
    ))
}
