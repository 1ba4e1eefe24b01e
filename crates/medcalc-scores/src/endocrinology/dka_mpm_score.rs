//! DKA Mortality Prediction Model (MPM).

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

calculator_input! {
    pub struct DkaMpmInput {
        pub severe_comorbidities: YesNo,
        pub ph_less_than_7: YesNo,
        pub insulin_over_50_units: YesNo,
        pub glucose_over_300_at_12h: YesNo,
        pub depressed_mental_state_24h: YesNo,
        pub fever_24h: YesNo,
    }
}

struct Factor {
    key: &'static str,
    points: i64,
    description: &'static str,
    alert: &'static str,
}

const FACTORS: [Factor; 6] = [
    Factor {
        key: "severe_comorbidities",
        points: 6,
        description: "Severe comorbidities (immunosuppression, MI, COPD, cirrhosis, CHF, stroke)",
        alert: "Multiple comorbidities present - consider multidisciplinary approach",
    },
    Factor {
        key: "ph_less_than_7",
        points: 4,
        description: "Severe acidosis (pH < 7.0)",
        alert: "Severe acidosis - aggressive bicarbonate consideration and ICU care",
    },
    Factor {
        key: "insulin_over_50_units",
        points: 4,
        description: "High insulin requirement (>50 units in 12h)",
        alert: "High insulin resistance - review insulin protocol and glucose management",
    },
    Factor {
        key: "glucose_over_300_at_12h",
        points: 4,
        description: "Persistent hyperglycemia (>300 mg/dL at 12h)",
        alert: "Persistent hyperglycemia - reassess insulin therapy effectiveness",
    },
    Factor {
        key: "depressed_mental_state_24h",
        points: 4,
        description: "Altered mental status at 24h",
        alert: "Altered mental status at 24h - evaluate for complications or cerebral edema",
    },
    Factor {
        key: "fever_24h",
        points: 3,
        description: "Fever at 24h (≥38°C/100.4°F)",
        alert: "Fever at 24h - investigate for infectious complications",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Risk {
    Low,
    High,
    VeryHigh,
}

impl Risk {
    fn from_score(score: i64) -> Self {
        match score {
            ..=14 => Risk::Low,
            15..=18 => Risk::High,
            _ => Risk::VeryHigh,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Risk::Low => "low_risk",
            Risk::High => "high_risk",
            Risk::VeryHigh => "very_high_risk",
        }
    }

    fn mortality(self) -> &'static str {
        match self {
            Risk::Low => "0.86%",
            Risk::High => "20.8%",
            Risk::VeryHigh => "93.3%",
        }
    }

    fn actions(self) -> &'static [&'static str] {
        match self {
            Risk::Low => &[
                "Standard DKA management protocols",
                "Regular monitoring of vital signs and laboratory values",
                "Routine fluid and electrolyte replacement",
                "Monitor for improvement in acidosis and ketosis",
                "Consider general medical ward admission",
                "Standard frequency laboratory monitoring (q4-6h initially)",
            ],
            Risk::High => &[
                "Enhanced monitoring and closer observation",
                "Consider intensive care unit admission",
                "More frequent laboratory monitoring (q2-4h)",
                "Aggressive fluid and electrolyte management",
                "Close monitoring of mental status and hemodynamics",
                "Early involvement of endocrinology consultation",
                "Consider central venous access for monitoring",
                "Vigilant monitoring for complications",
            ],
            Risk::VeryHigh => &[
                "Immediate intensive care unit admission required",
                "Aggressive resuscitation and specialized management",
                "Continuous monitoring of vital signs",
                "Frequent laboratory monitoring (q1-2h initially)",
                "Consider invasive hemodynamic monitoring",
                "Multidisciplinary team approach (ICU, endocrinology, nephrology)",
                "Early family discussions regarding prognosis",
                "Consider goals of care discussions",
                "Aggressive treatment of complications",
                "Close monitoring for organ failure",
            ],
        }
    }
}

fn presentation_significance(score: i64) -> &'static str {
    match score {
        6.. => "High early risk - immediate intensive monitoring required",
        4..=5 => "Moderate early risk - enhanced monitoring recommended",
        _ => "Low early risk",
    }
}

fn twelve_hour_significance(score: i64) -> &'static str {
    match score {
        6.. => "Poor early response - treatment intensification needed",
        4..=5 => "Suboptimal early response - close monitoring",
        _ => "Good early response",
    }
}

fn day_one_significance(score: i64) -> &'static str {
    match score {
        4.. => "Concerning late complications - aggressive intervention",
        3 => "Late complications present - enhanced monitoring",
        _ => "No late complications",
    }
}

pub fn calculate(input: &DkaMpmInput) -> CalcResult {
    let answers = [
        input.severe_comorbidities,
        input.ph_less_than_7,
        input.insulin_over_50_units,
        input.glucose_over_300_at_12h,
        input.depressed_mental_state_24h,
        input.fever_24h,
    ];
    let points: Vec<i64> = FACTORS
        .iter()
        .zip(answers)
        .map(|(f, answer)| answer.points(f.points))
        .collect();
    let total: i64 = points.iter().sum();
    let risk = Risk::from_score(total);

    let present: Vec<_> = FACTORS
        .iter()
        .zip(&points)
        .filter(|(_, p)| **p > 0)
        .map(|(f, p)| json!({"factor": f.key, "points": p, "description": f.description}))
        .collect();

    let mut alerts: Vec<&str> = FACTORS
        .iter()
        .zip(answers)
        .filter(|(_, a)| a.is_yes())
        .map(|(f, _)| f.alert)
        .collect();
    match risk {
        Risk::VeryHigh => alerts.push(
            "CRITICAL: Very high mortality risk - immediate ICU care and family discussions",
        ),
        Risk::High => alerts.push("HIGH RISK: Consider ICU admission and enhanced monitoring"),
        Risk::Low => {}
    }

    let presentation = points[0] + points[1];
    let twelve_hours = points[2] + points[3];
    let day_one = points[4] + points[5];

    Ok(CalculatorResponse::new(total, "points", interpret(total, risk))
        .with("total_score", total)
        .with("risk_level", risk.key())
        .with("mortality_rate", risk.mortality())
        .with("risk_factors_present", present)
        .with(
            "timing_breakdown",
            json!({
                "presentation": {"score": presentation, "significance": presentation_significance(presentation)},
                "12_hours": {"score": twelve_hours, "significance": twelve_hour_significance(twelve_hours)},
                "24_hours": {"score": day_one, "significance": day_one_significance(day_one)},
            }),
        )
        .with("clinical_alerts", alerts)
        .with("recommendations", json!({"immediate_actions": risk.actions()})))
}

fn interpret(total: i64, risk: Risk) -> Interpretation {
    let (label, description, advice) = match risk {
        Risk::Low => (
            "Low Risk",
            "Low risk of in-hospital mortality",
            "Standard DKA management protocols are appropriate. Routine monitoring and care expected to be sufficient.",
        ),
        Risk::High => (
            "High Risk",
            "High risk of in-hospital mortality",
            "Enhanced monitoring and consideration for ICU admission recommended. Close observation for complications is essential.",
        ),
        Risk::VeryHigh => (
            "Very High Risk",
            "Very high risk of in-hospital mortality",
            "Immediate ICU admission and aggressive management required. Early family discussions about prognosis are recommended.",
        ),
    };
    Interpretation::new(
        label,
        description,
        format!(
            "DKA MPM Score of {total} points indicates {label} with {} in-hospital mortality risk. {description}. {advice}",
            risk.mortality()
        ),
    )
}
