//! Expected peak expiratory flow (PEF) with optional asthma zone
//! assessment against a measured value.
//!
//! Children 5-7 (and 8-17 of other ethnicity) use the height-linear
//! pediatric formula. Adults of other ethnicity use the Caucasian NHANES III
//! equation without the 50 L/min floor; the Hankinson equations cover the
//! remaining groups.
//!
//! The result is the expected PEF in L/min.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex};

choice! {
    pub enum Ethnicity {
        Caucasian => "caucasian",
        AfricanAmerican => "african_american",
        MexicanAmerican => "mexican_american",
        Other => "other",
    }
}

calculator_input! {
    pub struct PefInput {
        pub age_years: i64 => 5..=80,
        pub height_cm: f64 => 100.0..=220.0,
        pub sex: Sex,
        pub race_ethnicity: Ethnicity,
        /// L/min
        pub measured_pef: Option<f64> => 50.0..=800.0,
    }
}

/// Height (m), intercept and age coefficients, in L/s.
struct Coefficients {
    height: f64,
    intercept: f64,
    age: f64,
}

const fn coefficients(ethnicity: Ethnicity, sex: Sex) -> Coefficients {
    let (height, intercept, age) = match (ethnicity, sex) {
        (Ethnicity::AfricanAmerican, Sex::Male) => (4.82, 1.76, 0.041),
        (Ethnicity::AfricanAmerican, Sex::Female) => (3.27, 2.38, 0.03),
        (Ethnicity::MexicanAmerican, Sex::Male) => (5.22, 1.64, 0.041),
        (Ethnicity::MexicanAmerican, Sex::Female) => (3.54, 2.29, 0.03),
        (_, Sex::Male) => (5.48, 1.58, 0.041),
        (_, Sex::Female) => (3.72, 2.24, 0.03),
    };
    Coefficients { height, intercept, age }
}

fn adult_equation(c: &Coefficients, age: i64, height_cm: f64) -> f64 {
    (height_cm / 100.0 * c.height + c.intercept - age as f64 * c.age) * 60.0
}

fn expected_pef(input: &PefInput) -> f64 {
    let pediatric = (input.height_cm - 100.0) * 5.0 + 100.0;
    match (input.age_years, input.race_ethnicity) {
        (..=7, _) => pediatric,
        (..=17, Ethnicity::Other) => pediatric,
        (_, Ethnicity::Other) => adult_equation(
            &coefficients(Ethnicity::Caucasian, input.sex),
            input.age_years,
            input.height_cm,
        ),
        (_, ethnicity) => adult_equation(
            &coefficients(ethnicity, input.sex),
            input.age_years,
            input.height_cm,
        )
        .max(50.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    NotAssessed,
    Green,
    Yellow,
    Red,
}

impl Zone {
    fn from_percentage(percentage: Option<f64>) -> Self {
        match percentage {
            None => Zone::NotAssessed,
            Some(p) if p >= 80.0 => Zone::Green,
            Some(p) if p >= 50.0 => Zone::Yellow,
            Some(_) => Zone::Red,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Zone::NotAssessed => "Not assessed",
            Zone::Green => "Green Zone",
            Zone::Yellow => "Yellow Zone",
            Zone::Red => "Red Zone",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Zone::NotAssessed => "gray",
            Zone::Green => "green",
            Zone::Yellow => "yellow",
            Zone::Red => "red",
        }
    }
}

pub fn calculate(input: &PefInput) -> CalcResult {
    let expected = expected_pef(input);
    let percentage = input
        .measured_pef
        .map(|measured| round_to(measured / expected * 100.0, 1));
    let zone = Zone::from_percentage(percentage);

    let base = format!(
        "Expected peak expiratory flow: {} L/min based on age, height, sex, and ethnicity.",
        fixed(expected, 1)
    );
    let measured_text = match (input.measured_pef, percentage) {
        (Some(measured), Some(pct)) => format!(
            "{base} Measured peak flow: {} L/min ({}% of expected).",
            fixed(measured, 1),
            fixed(pct, 1)
        ),
        _ => base.clone(),
    };

    let interpretation = match zone {
        Zone::NotAssessed => Interpretation::new(
            "Expected Value",
            "Baseline reference",
            format!("{base} This represents the predicted normal peak flow for this patient. Use this value as a reference for comparison with measured peak flow values. Regular monitoring and comparison to this expected value can help assess asthma control and detect exacerbations."),
        ),
        Zone::Green => Interpretation::new(
            "Normal",
            "Good control",
            format!("{measured_text} GREEN ZONE - Good asthma control. Peak flow is within normal range (≥80% of expected). Continue current treatment plan and regular monitoring."),
        ),
        Zone::Yellow => Interpretation::new(
            "Caution",
            "Reduced lung function",
            format!("{measured_text} YELLOW ZONE - Caution indicated. Peak flow is below normal (50-79% of expected). May indicate developing asthma exacerbation. Consider increasing treatment per asthma action plan. Monitor closely and contact healthcare provider if symptoms worsen."),
        ),
        Zone::Red => Interpretation::new(
            "Emergency",
            "Severe obstruction",
            format!("{measured_text} RED ZONE - EMERGENCY! Dangerously low peak flow (<50% of expected). Severe asthma exacerbation requiring immediate medical attention. Use rescue medications and seek emergency care immediately."),
        ),
    };

    let expected = round_to(expected, 1);
    Ok(CalculatorResponse::new(expected, "L/min", interpretation)
        .with("expected_pef", expected)
        .with("measured_pef", input.measured_pef.map(|m| round_to(m, 1)))
        .with("percentage_of_expected", percentage)
        .with("zone", zone.name())
        .with("zone_color", zone.color()))
}
