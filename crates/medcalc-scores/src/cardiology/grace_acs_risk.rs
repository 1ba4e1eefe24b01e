//! GRACE in-hospital mortality score for acute coronary syndrome.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum KillipClass {
        I => "class_1",
        II => "class_2",
        III => "class_3",
        IV => "class_4",
    }
}

impl KillipClass {
    fn points(self) -> i64 {
        match self {
            KillipClass::I => 0,
            KillipClass::II => 20,
            KillipClass::III => 39,
            KillipClass::IV => 59,
        }
    }

    fn label(self) -> &'static str {
        match self {
            KillipClass::I => "Killip Class I (No CHF)",
            KillipClass::II => "Killip Class II (Rales/JVD)",
            KillipClass::III => "Killip Class III (Pulmonary edema)",
            KillipClass::IV => "Killip Class IV (Cardiogenic shock)",
        }
    }
}

calculator_input! {
    pub struct GraceInput {
        pub age: i64 => 20..=100,
        pub heart_rate: i64 => 30..=250,
        pub systolic_bp: i64 => 50..=300,
        pub creatinine: f64 => 0.3..=15.0,
        pub killip_class: KillipClass,
        pub cardiac_arrest: YesNo,
        pub st_deviation: YesNo,
        pub elevated_biomarkers: YesNo,
    }
}

fn heart_rate_points(hr: i64) -> i64 {
    match hr {
        ..50 => 0,
        50..70 => 3,
        70..90 => 9,
        90..110 => 15,
        110..150 => 24,
        150..200 => 38,
        _ => 46,
    }
}

fn systolic_points(sbp: i64) -> i64 {
    match sbp {
        ..80 => 58,
        80..100 => 53,
        100..120 => 43,
        120..140 => 34,
        140..160 => 24,
        160..200 => 10,
        _ => 0,
    }
}

fn creatinine_points(cr: f64) -> i64 {
    const BANDS: [(f64, i64); 6] =
        [(0.40, 1), (0.80, 4), (1.20, 7), (1.60, 10), (2.00, 13), (4.00, 21)];
    BANDS
        .iter()
        .find(|(upper, _)| cr < *upper)
        .map_or(28, |(_, points)| *points)
}

pub fn calculate(input: &GraceInput) -> CalcResult {
    let age_points = (input.age - 40).max(0) as f64 * 2.5;
    let total = age_points
        + (heart_rate_points(input.heart_rate)
            + systolic_points(input.systolic_bp)
            + creatinine_points(input.creatinine)
            + input.killip_class.points()
            + input.st_deviation.points(28)
            + input.elevated_biomarkers.points(14)
            + input.cardiac_arrest.points(39)) as f64;
    let score = total.trunc() as i64;

    Ok(CalculatorResponse::new(score, "points", interpret(score, input)))
}

fn interpret(score: i64, input: &GraceInput) -> Interpretation {
    let (stage, mortality, description, recommendations) = match score {
        ..=87 => (
            "Very Low Risk",
            "0-2%",
            "Excellent prognosis",
            "Very low mortality risk (0-2%). Patients may be suitable for early discharge and conservative management. Consider outpatient follow-up with cardiology. Standard medical therapy is appropriate. Monitor for clinical deterioration.",
        ),
        88..=128 => (
            "Low Risk",
            "3-10%",
            "Good prognosis",
            "Low mortality risk (3-10%). Standard care with consideration for early invasive strategy based on other clinical factors. Appropriate for step-down unit care. Continue evidence-based medical therapy and monitor response to treatment.",
        ),
        129..=149 => (
            "Intermediate Risk",
            "10-20%",
            "Moderate prognosis",
            "Intermediate mortality risk (10-20%). Requires careful monitoring and consideration for invasive management strategies. Consider early cardiology consultation. Intensive medical therapy and frequent reassessment recommended.",
        ),
        150..=173 => (
            "High Risk",
            "20-30%",
            "Poor prognosis",
            "High mortality risk (20-30%). Patients would benefit from intensive monitoring and aggressive interventional therapy. Consider immediate cardiology consultation and invasive strategy. ICU-level care may be appropriate.",
        ),
        174..=284 => (
            "Very High Risk",
            "40-90%",
            "Very poor prognosis",
            "Very high mortality risk (40-90%). Requires immediate intensive care, aggressive interventional strategies, and close monitoring. Emergency cardiology consultation and immediate invasive management indicated. Consider transfer to tertiary center.",
        ),
        _ => (
            "Extremely High Risk",
            "≥99%",
            "Critical prognosis",
            "Extremely high mortality risk (≥99%). Critical prognosis requiring maximum intensive care and immediate life-saving interventions. Emergency interventional cardiology consultation. Consider all available therapeutic options including mechanical circulatory support.",
        ),
    };

    let summary = format!(
        "Clinical parameters: Age {} years, HR {} bpm, SBP {} mmHg, Creatinine {} mg/dL, {}, Cardiac arrest: {}, ST deviation: {}, Elevated biomarkers: {}. ",
        input.age,
        input.heart_rate,
        input.systolic_bp,
        input.creatinine,
        input.killip_class.label(),
        input.cardiac_arrest,
        input.st_deviation,
        input.elevated_biomarkers,
    );
    Interpretation::new(
        stage,
        description,
        format!("{summary}GRACE Score: {score} points. Risk category: {stage} ({mortality} mortality). Clinical recommendations: {recommendations} Important note: Use in conjunction with clinical judgment and consider patient comorbidities, preferences, and overall clinical picture when making treatment decisions."),
    )
}
