//! Winters' formula: expected PaCO2 in metabolic acidosis is
//! 1.5 × HCO3 + 8 ± 2 mmHg. With a measured PaCO2 the respiratory
//! compensation is graded against that window.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

const TOLERANCE: f64 = 2.0;
const NORMAL_HCO3_MIN: f64 = 22.0;
const NORMAL_HCO3_MAX: f64 = 28.0;
const ACIDOSIS_HCO3_MAX: f64 = 21.0;
const SEVERE_HCO3: f64 = 10.0;

calculator_input! {
    pub struct WintersInput {
        /// mEq/L
        pub bicarbonate: f64 => 5.0..=35.0,
        /// mmHg
        pub measured_pco2: Option<f64> => 10.0..=80.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compensation {
    NotAssessed,
    Over,
    Under,
    Appropriate,
}

impl Compensation {
    fn from_difference(difference: Option<f64>) -> Self {
        match difference {
            None => Compensation::NotAssessed,
            Some(d) if d < -TOLERANCE => Compensation::Over,
            Some(d) if d > TOLERANCE => Compensation::Under,
            Some(_) => Compensation::Appropriate,
        }
    }

    fn status(self) -> &'static str {
        match self {
            Compensation::NotAssessed => "not_assessed",
            Compensation::Over => "overcompensation",
            Compensation::Under => "undercompensation",
            Compensation::Appropriate => "appropriate",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Compensation::NotAssessed => "No measured pCO₂ provided for comparison",
            Compensation::Over => "Respiratory overcompensation",
            Compensation::Under => "Inadequate respiratory compensation",
            Compensation::Appropriate => "Appropriate respiratory compensation",
        }
    }
}

fn bicarbonate_status(hco3: f64) -> Value {
    let (status, description, note) = if hco3 >= NORMAL_HCO3_MIN {
        (
            "normal_or_high",
            "Normal or elevated bicarbonate",
            "Bicarbonate is not consistent with metabolic acidosis",
        )
    } else if hco3 > ACIDOSIS_HCO3_MAX {
        (
            "mild_reduction",
            "Mild bicarbonate reduction",
            "Borderline low bicarbonate - confirm metabolic acidosis with pH",
        )
    } else {
        (
            "metabolic_acidosis",
            "Bicarbonate consistent with metabolic acidosis",
            "Bicarbonate confirms metabolic acidosis",
        )
    };
    json!({
        "value": hco3,
        "normal_range": format!("{NORMAL_HCO3_MIN}-{NORMAL_HCO3_MAX} mEq/L"),
        "status": status,
        "description": description,
        "clinical_note": note,
    })
}

fn severity(hco3: f64) -> Value {
    let (severity, description, significance) = if hco3 >= 18.0 {
        (
            "mild",
            "Mild metabolic acidosis",
            "Generally well-tolerated, investigate underlying cause",
        )
    } else if hco3 >= 12.0 {
        (
            "moderate",
            "Moderate metabolic acidosis",
            "May require treatment, monitor closely",
        )
    } else if hco3 >= SEVERE_HCO3 {
        (
            "severe",
            "Severe metabolic acidosis",
            "Requires immediate evaluation and treatment",
        )
    } else {
        (
            "life_threatening",
            "Life-threatening metabolic acidosis",
            "Critical condition requiring urgent intervention",
        )
    };
    json!({
        "severity": severity,
        "description": description,
        "clinical_significance": significance,
    })
}

fn applicability(hco3: f64) -> Value {
    let mut limitations = Vec::new();
    if hco3 < SEVERE_HCO3 {
        limitations.push("Formula may be less accurate in severe acidosis (bicarbonate <10 mEq/L)");
    }
    let applicable = hco3 < NORMAL_HCO3_MIN;
    if !applicable {
        limitations.push(
            "Formula not applicable - bicarbonate not consistent with metabolic acidosis",
        );
    }
    json!({
        "applicable": applicable,
        "limitations": limitations,
        "requirements": [
            "Pure metabolic acidosis (not mixed disorder)",
            "Steady-state conditions (6-24 hours after onset)",
            "pH <7.35 to confirm acidosis",
            "No concurrent primary respiratory disorder",
        ],
    })
}

fn recommendations(hco3: f64, compensation: Compensation) -> Vec<&'static str> {
    let mut out = vec![
        "Obtain arterial blood gas for pH and accurate pCO₂ measurement",
        "Calculate anion gap to determine acidosis type",
        "Identify and treat underlying cause of metabolic acidosis",
    ];
    if hco3 < SEVERE_HCO3 {
        out.push("Consider bicarbonate therapy for severe acidosis");
        out.push("Monitor for complications of severe acidosis");
    }
    match compensation {
        Compensation::Over => {
            out.push("Evaluate for concurrent respiratory alkalosis");
            out.push("Assess for hyperventilation or respiratory pathology");
        }
        Compensation::Under => {
            out.push("Assess respiratory function and adequacy");
            out.push("Consider mechanical ventilation if respiratory failure");
        }
        _ => {}
    }
    out.push("Monitor electrolytes, renal function, and lactate");
    out.push("Repeat arterial blood gas in 2-4 hours or as clinically indicated");
    out
}

fn monitoring(hco3: f64) -> Vec<&'static str> {
    let mut out = vec![
        "Serial arterial blood gases every 2-4 hours initially",
        "Basic metabolic panel every 6-8 hours",
        "Continuous cardiac monitoring if severe acidosis",
        "Urine output and fluid balance",
        "Mental status and neurological examination",
    ];
    if hco3 < 12.0 {
        out.extend([
            "Intensive care unit monitoring",
            "Frequent vital signs (every 15-30 minutes)",
            "Consider invasive monitoring if unstable",
        ]);
    }
    out
}

fn differentials(compensation: Compensation) -> Vec<&'static str> {
    let mut out = vec![
        "High anion gap metabolic acidosis (diabetic ketoacidosis, lactic acidosis, toxins)",
        "Normal anion gap metabolic acidosis (diarrhea, renal tubular acidosis, ureteral diversions)",
        "Mixed acid-base disorders",
        "Respiratory acidosis or alkalosis",
    ];
    match compensation {
        Compensation::Over => out.extend([
            "Primary respiratory alkalosis with metabolic acidosis",
            "Hyperventilation syndrome",
            "Pulmonary embolism or pneumonia",
        ]),
        Compensation::Under => out.extend([
            "Primary respiratory acidosis with metabolic acidosis",
            "Respiratory muscle fatigue",
            "Pulmonary edema or pneumonia",
            "Neuromuscular disorders affecting respiration",
        ]),
        _ => {}
    }
    out
}

pub fn calculate(input: &WintersInput) -> CalcResult {
    let hco3 = input.bicarbonate;
    let expected = 1.5 * hco3 + 8.0;
    let (lower, upper) = (expected - TOLERANCE, expected + TOLERANCE);
    let difference = input.measured_pco2.map(|measured| measured - expected);
    let compensation = Compensation::from_difference(difference);

    let interpretation = match (input.measured_pco2, difference) {
        (Some(measured), Some(diff)) => match compensation {
            Compensation::Over => Interpretation::new(
                "Overcompensation",
                "Respiratory overcompensation",
                format!("The measured pCO₂ ({measured} mmHg) is {} mmHg lower than expected ({} mmHg), suggesting respiratory overcompensation. This may indicate a concurrent primary respiratory alkalosis or mixed acid-base disorder. Consider evaluating for additional respiratory pathology or hyperventilation syndrome. Review clinical context and consider arterial pH to confirm acid-base status.", fixed(diff.abs(), 1), fixed(expected, 1)),
            ),
            Compensation::Under => Interpretation::new(
                "Undercompensation",
                "Inadequate respiratory compensation",
                format!("The measured pCO₂ ({measured} mmHg) is {} mmHg higher than expected ({} mmHg), suggesting inadequate respiratory compensation. This may indicate respiratory impairment, fatigue, or a concurrent primary respiratory acidosis. Evaluate respiratory function and consider mechanical ventilation if severe. Assess for mixed acid-base disorder and treat underlying causes.", fixed(diff, 1), fixed(expected, 1)),
            ),
            _ => Interpretation::new(
                "Appropriate Compensation",
                "Expected respiratory compensation",
                format!("The measured pCO₂ ({measured} mmHg) is within the expected range ({}-{} mmHg) for metabolic acidosis, indicating appropriate respiratory compensation. Focus on identifying and treating the underlying cause of metabolic acidosis. Monitor clinical response and repeat arterial blood gas as clinically indicated.", fixed(lower, 1), fixed(upper, 1)),
            ),
        },
        _ => Interpretation::new(
            "Expected Compensation",
            "Calculated expected respiratory compensation",
            format!("For a serum bicarbonate of {hco3} mEq/L, the expected arterial pCO₂ should be {} mmHg (range: {}-{} mmHg) if respiratory compensation is appropriate. Obtain arterial blood gas to measure actual pCO₂ and assess compensation adequacy. Ensure this represents pure metabolic acidosis before applying Winters' Formula.", fixed(expected, 1), fixed(lower, 1), fixed(upper, 1)),
        ),
    };

    let analysis = json!({
        "expected_pco2": round_to(expected, 1),
        "expected_range_lower": round_to(lower, 1),
        "expected_range_upper": round_to(upper, 1),
        "tolerance": TOLERANCE,
        "measured_pco2": input.measured_pco2,
        "difference": difference.map(|d| round_to(d, 1)),
        "within_expected_range": difference.map(|d| d.abs() <= TOLERANCE),
        "compensation_status": compensation.status(),
        "compensation_description": compensation.description(),
    });

    let assessment = json!({
        "bicarbonate_status": bicarbonate_status(hco3),
        "severity_assessment": severity(hco3),
        "formula_applicability": applicability(hco3),
        "clinical_recommendations": recommendations(hco3, compensation),
        "monitoring_recommendations": monitoring(hco3),
        "differential_considerations": differentials(compensation),
    });

    Ok(
        CalculatorResponse::new(round_to(expected, 1), "mmHg", interpretation)
            .with(
                "expected_range",
                json!({"lower": round_to(lower, 1), "upper": round_to(upper, 1)}),
            )
            .with("compensation_analysis", analysis)
            .with("detailed_assessment", assessment),
    )
}
