//! Friedewald LDL cholesterol estimate.

use medcalc_core::math::{ensure, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct LdlInput {
        pub total_cholesterol: f64 => 50.0..=1000.0,
        pub hdl_cholesterol: f64 => 10.0..=200.0,
        pub triglycerides: f64 => 30.0..=5000.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accuracy {
    High,
    Moderate,
    Poor,
}

impl Accuracy {
    fn as_str(self) -> &'static str {
        match self {
            Accuracy::High => "High",
            Accuracy::Moderate => "Moderate",
            Accuracy::Poor => "Poor",
        }
    }
}

/// The Friedewald estimate loses accuracy at triglyceride extremes.
fn assess_accuracy(triglycerides: f64, ldl: f64) -> (Accuracy, Vec<&'static str>) {
    let mut issues = Vec::new();
    let mut level = Accuracy::High;
    if triglycerides > 400.0 {
        issues.push("Triglycerides >400 mg/dL - formula inaccurate");
        level = Accuracy::Poor;
    } else if triglycerides > 200.0 {
        if ldl < 70.0 {
            issues.push("May underestimate LDL at triglycerides >200 mg/dL and LDL <70 mg/dL");
            level = Accuracy::Moderate;
        } else if ldl > 130.0 {
            issues.push("May overestimate LDL at triglycerides >200 mg/dL and LDL >130 mg/dL");
            level = Accuracy::Moderate;
        }
    }
    if triglycerides < 100.0 {
        issues.push("May underestimate LDL when triglycerides <100 mg/dL");
        if level == Accuracy::High {
            level = Accuracy::Moderate;
        }
    }
    (level, issues)
}

pub fn calculate(input: &LdlInput) -> CalcResult {
    ensure(
        input.hdl_cholesterol < input.total_cholesterol,
        "hdl_cholesterol must be less than total_cholesterol",
    )?;

    let ldl = round_to(
        input.total_cholesterol - input.hdl_cholesterol - input.triglycerides / 5.0,
        1,
    );
    let (accuracy, issues) = assess_accuracy(input.triglycerides, ldl);
    let direct_measurement = input.triglycerides > 400.0;

    Ok(
        CalculatorResponse::new(ldl, "mg/dL", interpret(input, ldl, accuracy, &issues))
            .with("accuracy_level", accuracy.as_str())
            .with("accuracy_issues", issues)
            .with("recommend_direct_measurement", direct_measurement),
    )
}

fn interpret(input: &LdlInput, ldl: f64, accuracy: Accuracy, issues: &[&str]) -> Interpretation {
    let (stage, description, advice) = if ldl < 100.0 {
        (
            "Optimal",
            "Optimal LDL cholesterol",
            "Excellent LDL level. Continue heart-healthy lifestyle practices including diet, regular physical activity, and weight management. ",
        )
    } else if ldl < 130.0 {
        (
            "Near Optimal",
            "Near optimal/above optimal LDL cholesterol",
            "Consider lifestyle modifications including heart-healthy diet, regular exercise, and weight management. Assess overall cardiovascular risk factors. ",
        )
    } else if ldl < 160.0 {
        (
            "Borderline High",
            "Borderline high LDL cholesterol",
            "Lifestyle modifications strongly recommended. Consider medication therapy based on overall cardiovascular risk assessment and patient factors. ",
        )
    } else if ldl < 190.0 {
        (
            "High",
            "High LDL cholesterol",
            "High LDL level requiring intervention. Intensive lifestyle modifications and likely medication therapy indicated. Comprehensive cardiovascular risk assessment recommended. ",
        )
    } else {
        (
            "Very High",
            "Very high LDL cholesterol",
            "Very high LDL level requiring immediate attention. Medication therapy strongly recommended along with intensive lifestyle modifications. Consider evaluation for familial hypercholesterolemia. ",
        )
    };

    let mut text = format!(
        "Calculated LDL cholesterol: {ldl} mg/dL using Friedewald formula (Total cholesterol {} - HDL {} - Triglycerides/5 [{}/5]). LDL level is {}. {advice}",
        input.total_cholesterol,
        input.hdl_cholesterol,
        input.triglycerides,
        stage.to_lowercase(),
    );
    if accuracy != Accuracy::High {
        text.push_str(&format!("Formula accuracy: {}. ", accuracy.as_str()));
        for issue in issues {
            text.push_str(&format!("{issue}. "));
        }
    }
    if input.triglycerides > 400.0 {
        text.push_str("Direct LDL measurement recommended for accurate assessment. ");
    }
    text.push_str("LDL targets vary by cardiovascular risk: <70 mg/dL (very high risk), <100 mg/dL (high risk), <130 mg/dL (moderate risk), <160 mg/dL (lower risk). This calculation requires fasting triglycerides for accuracy. Results should be interpreted in context of overall cardiovascular risk assessment including other lipid parameters, blood pressure, diabetes, smoking status, and family history.");

    Interpretation::new(stage, description, text)
}
