//! Cerebral perfusion pressure, `CPP = MAP - ICP`.

use medcalc_core::math::{ensure, fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

calculator_input! {
    pub struct CppInput {
        pub mean_arterial_pressure: f64 => 30.0..=200.0,
        pub intracranial_pressure: f64 => 0.0..=80.0,
    }
}

impl CppInput {
    fn validate(&self) -> CalcResult<()> {
        ensure(
            self.intracranial_pressure < self.mean_arterial_pressure,
            "ICP cannot be greater than or equal to MAP",
        )
    }
}

struct Band {
    below: f64,
    category: &'static str,
    description: &'static str,
    risk_level: &'static str,
    urgency: &'static str,
    guidance: &'static str,
}

const BANDS: [Band; 6] = [
    Band {
        below: 30.0,
        category: "Critical",
        description: "Critically low cerebral perfusion",
        risk_level: "Critical",
        urgency: "Immediate intervention required",
        guidance: "Critical risk of cerebral ischemia and brain death. Immediate aggressive intervention required to increase MAP (vasopressors, fluid resuscitation) and/or reduce ICP (osmotic therapy, positioning, surgical decompression). Consider emergency neurosurgical consultation.",
    },
    Band {
        below: 50.0,
        category: "Severely Low",
        description: "High risk of cerebral ischemia",
        risk_level: "High Risk",
        urgency: "Urgent intervention needed",
        guidance: "High risk of cerebral ischemia and secondary brain injury. Urgent intervention needed to optimize cerebral perfusion. Consider vasopressor support, ICP-lowering measures, and close neurological monitoring.",
    },
    Band {
        below: 60.0,
        category: "Low",
        description: "Below optimal range",
        risk_level: "Moderate Risk",
        urgency: "Consider interventions",
        guidance: "Below optimal range. May indicate risk of ischemia, especially in patients with impaired autoregulation. Consider interventions to improve cerebral perfusion while monitoring neurological status.",
    },
    Band {
        below: 80.0,
        category: "Optimal",
        description: "Target range for cerebral perfusion",
        risk_level: "Low Risk",
        urgency: "Maintain current management",
        guidance: "Optimal range for cerebral perfusion in most patients. Maintain current management strategies while continuing to monitor for changes. Target range for TBI management.",
    },
    Band {
        below: 100.0,
        category: "Adequate",
        description: "Adequate cerebral perfusion",
        risk_level: "Low Risk",
        urgency: "Monitor for complications",
        guidance: "Adequate cerebral perfusion. Continue monitoring for potential complications of elevated pressures while maintaining adequate cerebral blood flow. Balance perfusion needs with hemodynamic stability.",
    },
    Band {
        below: f64::INFINITY,
        category: "High",
        description: "Elevated cerebral perfusion pressure",
        risk_level: "Moderate Risk",
        urgency: "Balance perfusion with pressure management",
        guidance: "Elevated cerebral perfusion pressure. While perfusion is adequate, consider potential complications of high pressures including increased risk of cerebral edema and respiratory complications. Balance perfusion needs with pressure management.",
    },
];

fn primary_interventions(cpp: f64) -> &'static [&'static str] {
    if cpp < 30.0 {
        &[
            "Immediate aggressive intervention required",
            "Consider emergency vasopressor support",
            "Urgent ICP reduction measures (osmotic therapy, positioning)",
            "Emergency neurosurgical consultation",
            "Consider decompressive craniectomy if indicated",
        ]
    } else if cpp < 50.0 {
        &[
            "Urgent optimization of cerebral perfusion",
            "Consider vasopressor support if MAP low",
            "ICP-lowering interventions as appropriate",
            "Close neurological monitoring",
        ]
    } else if cpp < 60.0 {
        &[
            "Consider interventions to improve CPP",
            "Monitor neurological status closely",
            "Optimize MAP and ICP management",
        ]
    } else if cpp <= 80.0 {
        &[
            "Maintain current management",
            "Continue monitoring CPP trends",
            "Optimize other neurological parameters",
        ]
    } else {
        &[
            "Monitor for complications of elevated pressures",
            "Balance perfusion needs with pressure management",
            "Consider gradual optimization if excessive",
        ]
    }
}

pub fn calculate(input: &CppInput) -> CalcResult {
    input.validate()?;
    let (map, icp) = (input.mean_arterial_pressure, input.intracranial_pressure);
    let cpp = map - icp;

    // ICP < MAP guarantees a positive CPP, and the last band is open-ended.
    let band = BANDS.iter().find(|b| cpp < b.below).unwrap_or(&BANDS[5]);

    let mut considerations = Vec::new();
    if icp > 20.0 {
        considerations.push("Elevated ICP (>20 mmHg) - consider ICP-lowering interventions");
    }
    if map < 65.0 {
        considerations.push("Low MAP (<65 mmHg) - consider vasopressor support");
    }
    if map > 110.0 {
        considerations.push("High MAP (>110 mmHg) - monitor for complications");
    }

    let interpretation = Interpretation::new(
        band.category,
        band.description,
        format!("CPP {} mmHg: {}", fixed(cpp, 1), band.guidance),
    );

    Ok(CalculatorResponse::new(round_to(cpp, 1), "mmHg", interpretation)
        .with("map_value", map)
        .with("icp_value", icp)
        .with("risk_level", band.risk_level)
        .with("urgency", band.urgency)
        .with("is_adequate", cpp >= 60.0)
        .with("is_critical", cpp < 50.0)
        .with(
            "management_recommendations",
            json!({
                "primary_interventions": primary_interventions(cpp),
                "monitoring": [
                    "Continuous CPP monitoring preferred",
                    "Monitor neurological examinations",
                    "Assess cerebral autoregulation if possible",
                    "Consider individual patient factors (age, comorbidities)",
                ],
                "considerations": considerations,
            }),
        )
        .with(
            "calculation_breakdown",
            json!({
                "formula": "CPP = MAP - ICP",
                "components": {
                    "mean_arterial_pressure": {"value": map, "unit": "mmHg", "normal_range": "70-100 mmHg"},
                    "intracranial_pressure": {"value": icp, "unit": "mmHg", "normal_range": "5-15 mmHg (adults)"},
                },
                "clinical_context": {
                    "autoregulation_range": "50-150 mmHg (healthy brain)",
                    "tbi_target_range": "60-70 mmHg",
                },
            }),
        ))
}
