//! Vocabularies shared by the Gupta NSQIP perioperative risk models.

use medcalc_core::choice;

choice! {
    pub enum FunctionalStatus {
        Independent => "independent",
        PartiallyDependent => "partially_dependent",
        TotallyDependent => "totally_dependent",
    }
}

impl FunctionalStatus {
    pub fn description(self) -> &'static str {
        match self {
            FunctionalStatus::Independent => "functionally independent",
            FunctionalStatus::PartiallyDependent => "partially dependent",
            FunctionalStatus::TotallyDependent => "totally dependent",
        }
    }
}

choice! {
    pub enum AsaClass {
        I => "1",
        II => "2",
        III => "3",
        IV => "4",
        V => "5",
    }
}

impl AsaClass {
    pub fn description(self) -> &'static str {
        match self {
            AsaClass::I => "ASA Class I (normal healthy)",
            AsaClass::II => "ASA Class II (mild systemic disease)",
            AsaClass::III => "ASA Class III (severe systemic disease)",
            AsaClass::IV => "ASA Class IV (severe systemic disease threatening life)",
            AsaClass::V => "ASA Class V (moribund patient)",
        }
    }
}

choice! {
    pub enum SepsisStatus {
        None => "none",
        Sirs => "sirs",
        Sepsis => "sepsis",
        SepticShock => "septic_shock",
    }
}

impl SepsisStatus {
    pub fn description(self) -> &'static str {
        match self {
            SepsisStatus::None => "no sepsis",
            SepsisStatus::Sirs => "preoperative SIRS",
            SepsisStatus::Sepsis => "preoperative sepsis",
            SepsisStatus::SepticShock => "preoperative septic shock",
        }
    }
}

/// Risk category for a percentage given four ascending cut points.
/// Returns the level name and its index (0 = very low).
pub fn risk_level(risk: f64, cuts: [f64; 4]) -> (usize, &'static str) {
    const LEVELS: [&str; 5] = ["Very Low Risk", "Low Risk", "Moderate Risk", "High Risk", "Very High Risk"];
    let index = cuts.iter().take_while(|cut| risk >= **cut).count();
    (index, LEVELS[index])
}

/// Tokens with underscores rendered as spaces, for narrative text.
pub fn spaced(token: &str) -> String {
    token.replace('_', " ")
}
