//! ADHERE classification and regression tree for in-hospital mortality in
//! acute decompensated heart failure.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct AdhereInput {
        pub bun: f64 => 1.0..=300.0,
        pub systolic_bp: f64 => 40.0..=300.0,
        pub creatinine: f64 => 0.1..=20.0,
    }
}

/// Node reached in the tree. Creatinine is only consulted on the
/// high-BUN, low-pressure branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    LowBunNormalPressure,
    LowBunLowPressure,
    HighBunNormalPressure,
    HighBunLowPressureLowCreatinine,
    HighBunLowPressureHighCreatinine,
}

impl Node {
    fn classify(input: &AdhereInput) -> Self {
        let high_bun = input.bun >= 43.0;
        let low_pressure = input.systolic_bp < 115.0;
        match (high_bun, low_pressure) {
            (false, false) => Node::LowBunNormalPressure,
            (false, true) => Node::LowBunLowPressure,
            (true, false) => Node::HighBunNormalPressure,
            (true, true) if input.creatinine >= 2.75 => Node::HighBunLowPressureHighCreatinine,
            (true, true) => Node::HighBunLowPressureLowCreatinine,
        }
    }

    /// Observed in-hospital mortality (%) for the derivation cohort.
    fn mortality(self) -> f64 {
        match self {
            Node::LowBunNormalPressure => 2.1,
            Node::LowBunLowPressure => 5.5,
            Node::HighBunNormalPressure => 6.4,
            Node::HighBunLowPressureLowCreatinine => 12.4,
            Node::HighBunLowPressureHighCreatinine => 21.9,
        }
    }

    fn path(self) -> &'static str {
        match self {
            Node::LowBunNormalPressure => "BUN <43 mg/dL and SBP ≥115 mmHg",
            Node::LowBunLowPressure => "BUN <43 mg/dL and SBP <115 mmHg",
            Node::HighBunNormalPressure => "BUN ≥43 mg/dL and SBP ≥115 mmHg",
            Node::HighBunLowPressureLowCreatinine => {
                "BUN ≥43 mg/dL, SBP <115 mmHg and creatinine <2.75 mg/dL"
            }
            Node::HighBunLowPressureHighCreatinine => {
                "BUN ≥43 mg/dL, SBP <115 mmHg and creatinine ≥2.75 mg/dL"
            }
        }
    }
}

pub fn calculate(input: &AdhereInput) -> CalcResult {
    let node = Node::classify(input);
    let mortality = node.mortality();

    Ok(CalculatorResponse::new(mortality, "%", interpret(node, mortality))
        .with("risk_path", node.path()))
}

fn interpret(node: Node, mortality: f64) -> Interpretation {
    let lead = format!("{}: predicted in-hospital mortality {mortality:.1}%.", node.path());
    match node {
        Node::LowBunNormalPressure => Interpretation::new(
            "Low Risk",
            "Low in-hospital mortality risk",
            format!("{lead} Standard heart failure management with diuresis and guideline-directed medical therapy. Appropriate for ward-level care."),
        ),
        Node::LowBunLowPressure | Node::HighBunNormalPressure => Interpretation::new(
            "Intermediate Risk",
            "Intermediate in-hospital mortality risk",
            format!("{lead} Closer monitoring of volume status, renal function and blood pressure. Consider step-down unit care and early cardiology involvement."),
        ),
        Node::HighBunLowPressureLowCreatinine => Interpretation::new(
            "High Risk",
            "High in-hospital mortality risk",
            format!("{lead} Intensive monitoring recommended. Evaluate perfusion status and consider inotropic support and advanced heart failure consultation."),
        ),
        Node::HighBunLowPressureHighCreatinine => Interpretation::new(
            "Very High Risk",
            "Very high in-hospital mortality risk",
            format!("{lead} ICU-level care recommended. Consider inotropes, mechanical circulatory support evaluation, renal replacement planning and goals-of-care discussion."),
        ),
    }
}
