//! AKIN (Acute Kidney Injury Network) staging.
//!
//! The stage is the worse of the creatinine and urine output criteria;
//! renal replacement therapy is stage 3 outright.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct AkinInput {
        /// mg/dL
        pub current_creatinine: f64 => 0.1..=15.0,
        pub baseline_creatinine: Option<f64> => 0.1..=15.0,
        /// Absolute rise within 48 hours, mg/dL.
        pub creatinine_increase: Option<f64> => 0.0..=10.0,
        /// mL/kg over the window.
        pub urine_output_6h: Option<f64> => 0.0..=50.0,
        pub urine_output_12h: Option<f64> => 0.0..=100.0,
        pub urine_output_24h: Option<f64> => 0.0..=200.0,
        pub anuria_12h: Option<YesNo>,
        pub on_rrt: Option<YesNo>,
    }
}

const STAGES: [(&str, &str, &str); 4] = [
    ("No AKI", "No acute kidney injury", "Baseline"),
    ("Stage 1", "Mild AKI", "Increased"),
    ("Stage 2", "Moderate AKI", "Significantly increased"),
    ("Stage 3", "Severe AKI", "Markedly increased"),
];

fn is_yes(answer: Option<YesNo>) -> bool {
    answer.is_some_and(YesNo::is_yes)
}

impl AkinInput {

    fn creatinine_criteria(&self) -> (usize, Vec<String>) {
        let mut stage = 0;
        let mut criteria = Vec::new();

        if let Some(baseline) = self.baseline_creatinine.filter(|b| *b > 0.0) {
            let fold = self.current_creatinine / baseline;
            let shown = fixed(fold, 1);
            if fold >= 3.0 {
                stage = 3;
                criteria.push(format!("Creatinine ≥3x baseline ({shown}x)"));
            } else if fold >= 2.0 {
                stage = 2;
                criteria.push(format!("Creatinine 2-3x baseline ({shown}x)"));
            } else if fold >= 1.5 {
                stage = 1;
                criteria.push(format!("Creatinine 1.5-2x baseline ({shown}x)"));
            }
        }
        if let Some(increase) = self.creatinine_increase {
            if increase >= 0.3 {
                stage = stage.max(1);
                criteria.push(format!(
                    "Absolute creatinine increase ≥0.3 mg/dL ({} mg/dL)",
                    fixed(increase, 1)
                ));
            }
            if self.current_creatinine >= 4.0 && increase >= 0.5 {
                stage = 3;
                criteria.push("Creatinine ≥4.0 mg/dL with acute increase ≥0.5 mg/dL".to_string());
            }
        }
        (stage, criteria)
    }

    fn urine_criteria(&self) -> (usize, Vec<String>) {
        if is_yes(self.anuria_12h) {
            return (3, vec!["Anuria for 12 hours".to_string()]);
        }

        let mut stage = 0;
        let mut criteria = Vec::new();
        let windows = [
            (self.urine_output_24h, 24.0, 0.3, 3, "<0.3 mL/kg/hr for ≥24 hours"),
            (self.urine_output_12h, 12.0, 0.5, 2, "<0.5 mL/kg/hr for >12 hours"),
            (self.urine_output_6h, 6.0, 0.5, 1, "<0.5 mL/kg/hr for >6 hours"),
        ];
        for (output, hours, threshold, window_stage, label) in windows {
            let Some(output) = output else { continue };
            let rate = output / hours;
            if rate < threshold {
                stage = stage.max(window_stage);
                criteria.push(format!("Urine output {label} ({} mL/kg/hr)", fixed(rate, 2)));
            }
        }
        (stage, criteria)
    }
}

fn management(stage: usize, on_rrt: bool) -> &'static str {
    match stage {
        0 => "MANAGEMENT: Continue routine monitoring. Ensure adequate hydration and avoid nephrotoxic medications.",
        1 => {
            "MANAGEMENT: Close monitoring required. Consider nephrology consultation. \
             Review medications and optimize fluid status. Monitor creatinine daily."
        }
        2 => {
            "MANAGEMENT: Intensive monitoring required. Nephrology consultation recommended. \
             Daily creatinine monitoring. Consider underlying causes and optimize management."
        }
        _ if on_rrt => {
            "MANAGEMENT: Patient on renal replacement therapy. Continue RRT as indicated. \
             Nephrology management essential. Monitor for complications."
        }
        _ => {
            "MANAGEMENT: Urgent nephrology consultation required. Consider renal replacement \
             therapy. Intensive monitoring. Address underlying causes aggressively."
        }
    }
}

pub fn calculate(input: &AkinInput) -> CalcResult {
    let on_rrt = is_yes(input.on_rrt);
    let (stage, criteria) = if on_rrt {
        (3, vec!["On renal replacement therapy".to_string()])
    } else {
        let (creatinine_stage, mut criteria) = input.creatinine_criteria();
        let (urine_stage, urine) = input.urine_criteria();
        criteria.extend(urine);
        (creatinine_stage.max(urine_stage), criteria)
    };
    let (name, description, mortality) = STAGES[stage];

    let mut parts = vec![if stage == 0 {
        "No acute kidney injury by AKIN criteria.".to_string()
    } else {
        format!("AKIN {name}: {description}.")
    }];
    parts.push(format!("Current creatinine: {} mg/dL.", fixed(input.current_creatinine, 1)));
    if let Some(baseline) = input.baseline_creatinine {
        parts.push(format!("Baseline creatinine: {} mg/dL.", fixed(baseline, 1)));
    }
    if !criteria.is_empty() {
        parts.push(format!("Criteria met: {}.", criteria.join("; ")));
    } else {
        parts.push("No AKIN criteria met.".to_string());
    }
    parts.push(management(stage, on_rrt).to_string());
    parts.push(
        "IMPORTANT: AKIN classification requires changes within 48 hours, adequate hydration, \
         and exclusion of urinary obstruction. Use with clinical context."
            .to_string(),
    );

    let criteria_met = if criteria.is_empty() { vec!["No AKI criteria met".to_string()] } else { criteria };

    Ok(CalculatorResponse::new(name, "stage", Interpretation::new(name, description, parts.join(" ")))
        .with("stage_number", stage)
        .with("criteria_met", criteria_met)
        .with("mortality_risk", mortality))
}
