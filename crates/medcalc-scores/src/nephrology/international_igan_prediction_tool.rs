//! International IgA Nephropathy Prediction Tool: 5-year risk of a 50% eGFR
//! decline or ESKD at biopsy.
//!
//! Supplying `race` selects the race-inclusive model; otherwise the race-free
//! model is used.

use medcalc_core::math::{ensure_one_of, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum Race {
        White => "white",
        Chinese => "chinese",
        Japanese => "japanese",
        Other => "other",
    }
}

calculator_input! {
    pub struct IganInput {
        pub age: i64 => 18..=65,
        /// mL/min/1.73m²
        pub egfr: f64 => 5.0..=150.0,
        /// Mean arterial pressure, mmHg.
        pub map: f64 => 60.0..=140.0,
        /// g/day
        pub urine_protein: f64 => 0.001..=15.0,
        pub mest_m: i64,
        pub mest_e: i64,
        pub mest_s: i64,
        pub mest_t: i64,
        pub rasb_use: YesNo,
        pub immunosuppression_use: YesNo,
        pub race: Option<Race>,
    }
}

struct Model {
    egfr: f64,
    protein: f64,
    map: f64,
    m: f64,
    e: f64,
    s: f64,
    t: f64,
    rasb: f64,
    immunosuppression: f64,
    intercept: f64,
}

const RACE_FREE: Model = Model {
    egfr: -0.209,
    protein: 0.438,
    map: 0.254,
    m: 0.305,
    e: 0.441,
    s: 0.275,
    t: 0.304,
    rasb: -0.218,
    immunosuppression: -0.169,
    intercept: -1.132,
};

const RACE_INCLUSIVE: Model = Model {
    egfr: -0.207,
    protein: 0.431,
    map: 0.247,
    m: 0.298,
    e: 0.431,
    s: 0.271,
    t: 0.301,
    rasb: -0.213,
    immunosuppression: -0.163,
    intercept: -1.167,
};

fn race_coefficient(race: Race) -> f64 {
    match race {
        Race::White => 0.0,
        Race::Chinese => 0.234,
        Race::Japanese => 0.191,
        Race::Other => 0.105,
    }
}

impl IganInput {
    fn validate(&self) -> CalcResult<()> {
        ensure_one_of("mest_m", self.mest_m, &[0, 1])?;
        ensure_one_of("mest_e", self.mest_e, &[0, 1])?;
        ensure_one_of("mest_s", self.mest_s, &[0, 1])?;
        ensure_one_of("mest_t", self.mest_t, &[0, 1, 2])?;
        Ok(())
    }

    fn linear_predictor(&self, model: &Model) -> f64 {
        let flag = |answer: YesNo| if answer.is_yes() { 1.0 } else { 0.0 };
        model.egfr * (self.egfr.sqrt() - 8.8)
            + model.protein * (self.urine_protein + 0.26).ln()
            + model.map * (self.map - 100.0) / 15.0
            + model.m * self.mest_m as f64
            + model.e * self.mest_e as f64
            + model.s * self.mest_s as f64
            + model.t * self.mest_t as f64
            + model.rasb * flag(self.rasb_use)
            + model.immunosuppression * flag(self.immunosuppression_use)
            + model.intercept
    }
}

pub fn calculate(input: &IganInput) -> CalcResult {
    input.validate()?;

    let (predictor, model_name) = match input.race {
        Some(race) => (input.linear_predictor(&RACE_INCLUSIVE) + race_coefficient(race), "race_inclusive"),
        None => (input.linear_predictor(&RACE_FREE), "race_free"),
    };
    // Complementary log-log link.
    let risk = (1.0 - (-predictor.exp()).exp()) * 100.0;

    let interpretation = match risk {
        r if r < 10.0 => Interpretation::new(
            "Very Low Risk",
            "5-year risk <10%",
            "Very low risk of kidney function decline. Standard monitoring and conservative management appropriate. \
             Continue RASB therapy if indicated. Regular nephrology follow-up every 6-12 months. Focus on \
             cardiovascular risk reduction and blood pressure control. Consider watchful waiting approach for \
             immunosuppression.",
        ),
        r if r < 25.0 => Interpretation::new(
            "Low Risk",
            "5-year risk 10-25%",
            "Low risk of kidney function decline. Conservative management with close monitoring. Optimize RASB \
             therapy and blood pressure control (<130/80 mmHg). Regular nephrology follow-up every 3-6 months. \
             Monitor proteinuria and eGFR trends. Consider immunosuppression if rapid progression or high-risk \
             features develop.",
        ),
        r if r < 50.0 => Interpretation::new(
            "Moderate Risk",
            "5-year risk 25-50%",
            "Moderate risk of kidney function decline. Consider immunosuppressive therapy based on individual patient \
             factors. Optimize RASB therapy and strict blood pressure control. Frequent nephrology follow-up every 2-3 \
             months. Monitor for treatment response and side effects. Consider clinical trial participation. Prepare \
             for potential kidney replacement therapy discussion.",
        ),
        r if r < 75.0 => Interpretation::new(
            "High Risk",
            "5-year risk 50-75%",
            "High risk of kidney function decline. Strong consideration for immunosuppressive therapy unless \
             contraindicated. Aggressive blood pressure control and maximize RASB therapy. Frequent nephrology \
             follow-up every 1-2 months. Consider clinical trial enrollment. Early kidney replacement therapy \
             planning and education. Evaluate for kidney transplant candidacy.",
        ),
        _ => Interpretation::new(
            "Very High Risk",
            "5-year risk >75%",
            "Very high risk of kidney function decline. Urgent consideration for immunosuppressive therapy if not \
             contraindicated. Maximal conservative management with aggressive blood pressure control. Monthly \
             nephrology follow-up. Prioritize clinical trial participation. Immediate kidney replacement therapy \
             planning and patient education. Accelerated kidney transplant evaluation and preparation.",
        ),
    };

    Ok(CalculatorResponse::new(round_to(risk, 1), "%", interpretation)
        .with("model", model_name)
        .with("linear_predictor", round_to(predictor, 4)))
}
