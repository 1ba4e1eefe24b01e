//! Leibovich 2018 model for clear cell renal cell carcinoma after
//! nephrectomy.
//!
//! Two point scores share most items: progression-free survival (PFS) and
//! cancer-specific survival (CSS). The overall category follows the higher
//! of the two, and that higher score is the headline result.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum EcogStatus {
        Zero => "0",
        OneOrMore => "≥1",
    }
}

choice! {
    pub enum SurgicalMargins {
        Negative => "negative",
        Positive => "positive",
    }
}

choice! {
    pub enum TumorGrade {
        G1 => "1",
        G2 => "2",
        G3 => "3",
        G4 => "4",
    }
}

choice! {
    pub enum TumorThrombus {
        None => "none",
        Level0 => "level_0",
        Level1To4 => "level_1_4",
    }
}

calculator_input! {
    pub struct LeibovichInput {
        pub age: i64 => 18..=100,
        pub ecog_status: EcogStatus,
        pub constitutional_symptoms: bool,
        pub adrenalectomy: bool,
        pub surgical_margins: SurgicalMargins,
        pub tumor_grade: TumorGrade,
        pub coagulative_necrosis: bool,
        pub sarcomatoid_differentiation: bool,
        /// cm
        pub tumor_size: f64 => 0.5..=25.0,
        pub perinephric_invasion: bool,
        pub tumor_thrombus: TumorThrombus,
        pub extension_beyond_kidney: bool,
    }
}

impl LeibovichInput {

    fn grade_points(&self) -> i64 {
        match self.tumor_grade {
            TumorGrade::G1 => 0,
            TumorGrade::G2 => 2,
            TumorGrade::G3 => 3,
            TumorGrade::G4 => 4,
        }
    }

    fn thrombus_points(&self) -> i64 {
        match self.tumor_thrombus {
            TumorThrombus::None => 0,
            TumorThrombus::Level0 => 1,
            TumorThrombus::Level1To4 => 2,
        }
    }

    /// Size points; tumors over 10 cm score 5 for PFS but stay at 4 for CSS.
    fn size_points(&self, above_ten: i64) -> i64 {
        match self.tumor_size {
            s if s <= 4.0 => 0,
            s if s <= 7.0 => 3,
            s if s <= 10.0 => 4,
            _ => above_ten,
        }
    }

    fn pfs_score(&self) -> i64 {
        i64::from(self.constitutional_symptoms)
            + self.grade_points()
            + if self.coagulative_necrosis { 2 } else { 0 }
            + self.size_points(5)
            + i64::from(self.perinephric_invasion)
            + self.thrombus_points()
            + if self.extension_beyond_kidney { 2 } else { 0 }
    }

    fn css_score(&self) -> i64 {
        i64::from(self.age >= 60)
            + if self.ecog_status == EcogStatus::OneOrMore { 2 } else { 0 }
            + i64::from(self.constitutional_symptoms)
            + i64::from(self.adrenalectomy)
            + i64::from(self.surgical_margins == SurgicalMargins::Positive)
            + self.grade_points()
            + if self.coagulative_necrosis { 2 } else { 0 }
            + i64::from(self.sarcomatoid_differentiation)
            + self.size_points(4)
            + if self.perinephric_invasion { 2 } else { 0 }
            + self.thrombus_points()
    }
}

#[derive(Clone, Copy)]
enum Endpoint {
    Progression,
    CancerDeath,
}

impl Endpoint {
    fn event(self) -> &'static str {
        match self {
            Endpoint::Progression => "progression",
            Endpoint::CancerDeath => "cancer-specific death",
        }
    }
}

fn risk_category(score: i64) -> &'static str {
    match score {
        ..=4 => "Low Risk",
        5..=9 => "Intermediate Risk",
        10..=14 => "High Risk",
        _ => "Very High Risk",
    }
}

fn endpoint_text(score: i64, endpoint: Endpoint) -> String {
    let event = endpoint.event();
    match score {
        ..=4 => format!("Low risk of {event}. Standard surveillance recommended."),
        5..=9 => format!("Intermediate risk of {event}. Enhanced surveillance may be considered."),
        10..=14 => format!(
            "High risk of {event}. Intensive surveillance and adjuvant therapy consideration recommended."
        ),
        _ => format!("Very high risk of {event}. Aggressive management warranted."),
    }
}

pub fn calculate(input: &LeibovichInput) -> CalcResult {
    let pfs = input.pfs_score();
    let css = input.css_score();
    let overall = risk_category(pfs.max(css));
    let pfs_text = endpoint_text(pfs, Endpoint::Progression);
    let css_text = endpoint_text(css, Endpoint::CancerDeath);

    let interpretation = Interpretation::new(
        overall,
        format!("PFS Score: {pfs}, CSS Score: {css}"),
        format!("PFS: {pfs_text} CSS: {css_text}"),
    );

    Ok(CalculatorResponse::new(pfs.max(css), "points", interpretation)
        .with("pfs_score", pfs)
        .with("css_score", css)
        .with("overall_risk_category", overall)
        .with(
            "details",
            json!({
                "progression_free_survival": {
                    "score": pfs,
                    "stage": risk_category(pfs),
                    "interpretation": pfs_text,
                },
                "cancer_specific_survival": {
                    "score": css,
                    "stage": risk_category(css),
                    "interpretation": css_text,
                },
            }),
        )
        .with(
            "components",
            json!({
                "age_≥60": i64::from(input.age >= 60),
                "ecog_≥1": if input.ecog_status == EcogStatus::OneOrMore { 2 } else { 0 },
                "constitutional_symptoms": i64::from(input.constitutional_symptoms),
                "adrenalectomy": i64::from(input.adrenalectomy),
                "positive_margins": i64::from(input.surgical_margins == SurgicalMargins::Positive),
                "tumor_grade": input.tumor_grade,
                "coagulative_necrosis": if input.coagulative_necrosis { 2 } else { 0 },
                "sarcomatoid_differentiation": i64::from(input.sarcomatoid_differentiation),
                "tumor_size_cm": input.tumor_size,
                "perinephric_invasion": i64::from(input.perinephric_invasion),
                "tumor_thrombus": input.tumor_thrombus,
                "extension_beyond_kidney": if input.extension_beyond_kidney { 2 } else { 0 },
            }),
        ))
}
