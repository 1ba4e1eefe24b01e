//! IMPEDE VTE score for thrombosis risk in multiple myeloma.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum Dexamethasone {
        None => "none",
        LowDose => "low_dose",
        HighDose => "high_dose",
    }
}

calculator_input! {
    pub struct ImpedeVteInput {
        pub immunomodulatory_drug: YesNo,
        pub bmi_25_or_greater: YesNo,
        pub pelvic_hip_femur_fracture: YesNo,
        pub erythropoiesis_stimulating_agent: YesNo,
        pub doxorubicin_use: YesNo,
        pub dexamethasone_use: Dexamethasone,
        pub asian_pacific_islander: YesNo,
        pub history_of_vte: YesNo,
        pub tunneled_line_cvc: YesNo,
        pub therapeutic_anticoagulation: YesNo,
        pub prophylactic_anticoagulation: YesNo,
    }
}

impl ImpedeVteInput {
    fn score(&self) -> i64 {
        let dexamethasone = match self.dexamethasone_use {
            Dexamethasone::None => 0,
            Dexamethasone::LowDose => 2,
            Dexamethasone::HighDose => 4,
        };
        self.immunomodulatory_drug.points(4)
            + self.bmi_25_or_greater.points(1)
            + self.pelvic_hip_femur_fracture.points(4)
            + self.erythropoiesis_stimulating_agent.points(1)
            + self.doxorubicin_use.points(3)
            + dexamethasone
            + self.asian_pacific_islander.points(-3)
            + self.history_of_vte.points(5)
            + self.tunneled_line_cvc.points(2)
            + self.therapeutic_anticoagulation.points(-4)
            + self.prophylactic_anticoagulation.points(-3)
    }
}

pub fn calculate(input: &ImpedeVteInput) -> CalcResult {
    let score = input.score();
    let interpretation = match score {
        ..=3 => Interpretation::new(
            "Low Risk",
            format!("Score {score} points (≤3 points)"),
            "Low VTE risk. 6-month cumulative VTE incidence 3.8-5.0%. Standard monitoring and general VTE prevention measures. \
             Consider thromboprophylaxis only in presence of additional high-risk factors not captured by score.",
        ),
        4..=7 => Interpretation::new(
            "Intermediate Risk",
            format!("Score {score} points (4-7 points)"),
            "Intermediate VTE risk. 6-month cumulative VTE incidence 8.6-12.6%. Consider thromboprophylaxis with aspirin or low molecular \
             weight heparin based on individual patient factors, bleeding risk, and treatment regimen.",
        ),
        _ => Interpretation::new(
            "High Risk",
            format!("Score {score} points (≥8 points)"),
            "High VTE risk. 6-month cumulative VTE incidence 24.1-40.5%. Thromboprophylaxis strongly recommended unless contraindicated. \
             Preferred agents include low molecular weight heparin or direct oral anticoagulants.",
        ),
    };
    Ok(CalculatorResponse::new(score, "points", interpretation))
}
