//! Arterial blood gas interpretation.
//!
//! Classifies the primary acid-base disorder from pH, PaCO2 and HCO3, then
//! checks the expected compensation for that disorder. PaO2 adds an
//! oxygenation assessment when given.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const PH_LOW: f64 = 7.35;
const PH_HIGH: f64 = 7.45;
const PCO2_LOW: f64 = 35.0;
const PCO2_HIGH: f64 = 45.0;
const HCO3_LOW: f64 = 22.0;
const HCO3_HIGH: f64 = 26.0;
const PO2_LOW: f64 = 80.0;

calculator_input! {
    pub struct AbgInput {
        pub ph: f64 => 6.8..=7.8,
        /// mmHg
        pub pco2: f64 => 10.0..=100.0,
        /// mEq/L
        pub hco3: f64 => 5.0..=50.0,
        /// mmHg
        pub po2: Option<f64> => 30.0..=600.0,
        /// Fraction, 0.21-1.0.
        pub fio2: Option<f64> => 0.21..=1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disorder {
    MetabolicAcidosis,
    RespiratoryAcidosis,
    MetabolicAlkalosis,
    RespiratoryAlkalosis,
    Mixed,
    NormalPh,
}

impl Disorder {
    fn classify(ph: f64, pco2: f64, hco3: f64) -> Self {
        if ph < PH_LOW {
            if hco3 < HCO3_LOW {
                Disorder::MetabolicAcidosis
            } else if pco2 > PCO2_HIGH {
                Disorder::RespiratoryAcidosis
            } else {
                Disorder::Mixed
            }
        } else if ph > PH_HIGH {
            if hco3 > HCO3_HIGH {
                Disorder::MetabolicAlkalosis
            } else if pco2 < PCO2_LOW {
                Disorder::RespiratoryAlkalosis
            } else {
                Disorder::Mixed
            }
        } else {
            Disorder::NormalPh
        }
    }

    fn name(self) -> &'static str {
        match self {
            Disorder::MetabolicAcidosis => "Metabolic Acidosis",
            Disorder::RespiratoryAcidosis => "Respiratory Acidosis",
            Disorder::MetabolicAlkalosis => "Metabolic Alkalosis",
            Disorder::RespiratoryAlkalosis => "Respiratory Alkalosis",
            Disorder::Mixed => "Mixed Acid-Base Disorder",
            Disorder::NormalPh => "Normal pH",
        }
    }

    fn category(self) -> &'static str {
        match self {
            Disorder::Mixed => "Mixed Disorder",
            other => other.name(),
        }
    }

    fn description(self) -> &'static str {
        match self {
            Disorder::MetabolicAcidosis => "Primary metabolic acidosis",
            Disorder::RespiratoryAcidosis => "Primary respiratory acidosis",
            Disorder::MetabolicAlkalosis => "Primary metabolic alkalosis",
            Disorder::RespiratoryAlkalosis => "Primary respiratory alkalosis",
            Disorder::Mixed => "Complex acid-base disturbance",
            Disorder::NormalPh => "pH within normal range",
        }
    }
}

fn ph_status(ph: f64) -> &'static str {
    if ph < PH_LOW {
        "Acidemia"
    } else if ph > PH_HIGH {
        "Alkalemia"
    } else {
        "Normal"
    }
}

/// Winter's formula, 1.5 × HCO3 + 8 ± 2.
fn metabolic_acidosis_compensation(pco2: f64, hco3: f64) -> String {
    let expected = 1.5 * hco3 + 8.0;
    let detail = format!("(PCO2 {}, expected {}±2)", fixed(pco2, 1), fixed(expected, 1));
    if pco2 < expected - 2.0 {
        format!("Overcompensation or mixed disorder {detail}")
    } else if pco2 > expected + 2.0 {
        format!("Inadequate respiratory compensation {detail}")
    } else {
        format!("Appropriate respiratory compensation {detail}")
    }
}

/// PaCO2 rises 0.7 per mEq/L of HCO3 above 24, ± 5.
fn metabolic_alkalosis_compensation(pco2: f64, hco3: f64) -> String {
    let expected = 40.0 + 0.7 * (hco3 - 24.0);
    let detail = format!("(PCO2 {}, expected ~{})", fixed(pco2, 1), fixed(expected, 1));
    if pco2 < expected - 5.0 {
        format!("Inadequate respiratory compensation {detail}")
    } else if pco2 > expected + 5.0 {
        format!("Overcompensation or mixed disorder {detail}")
    } else {
        format!("Appropriate respiratory compensation {detail}")
    }
}

/// HCO3 rises 1 (acute) or 3.5 (chronic) per 10 mmHg of PaCO2 above 40.
fn respiratory_acidosis_compensation(hco3: f64, pco2: f64) -> String {
    let excess = (pco2 - 40.0) / 10.0;
    let acute = 24.0 + excess;
    let chronic = 24.0 + excess * 3.5;
    if hco3 <= acute + 2.0 {
        format!(
            "Acute respiratory acidosis (HCO3 {}, acute expected ~{})",
            fixed(hco3, 1),
            fixed(acute, 1)
        )
    } else if hco3 >= chronic - 2.0 {
        format!(
            "Chronic respiratory acidosis with compensation (HCO3 {}, chronic expected ~{})",
            fixed(hco3, 1),
            fixed(chronic, 1)
        )
    } else {
        format!("Partial metabolic compensation (HCO3 {})", fixed(hco3, 1))
    }
}

/// HCO3 falls 2 (acute) or 5 (chronic) per 10 mmHg of PaCO2 below 40.
fn respiratory_alkalosis_compensation(hco3: f64, pco2: f64) -> String {
    let deficit = (40.0 - pco2) / 10.0;
    let acute = 24.0 - deficit * 2.0;
    let chronic = 24.0 - deficit * 5.0;
    if hco3 >= acute - 2.0 {
        format!(
            "Acute respiratory alkalosis (HCO3 {}, acute expected ~{})",
            fixed(hco3, 1),
            fixed(acute, 1)
        )
    } else if hco3 <= chronic + 2.0 {
        format!(
            "Chronic respiratory alkalosis with compensation (HCO3 {}, chronic expected ~{})",
            fixed(hco3, 1),
            fixed(chronic, 1)
        )
    } else {
        format!("Partial metabolic compensation (HCO3 {})", fixed(hco3, 1))
    }
}

fn normal_ph_compensation(pco2: f64, hco3: f64) -> &'static str {
    let low_hco3 = hco3 < HCO3_LOW;
    let high_hco3 = hco3 > HCO3_HIGH;
    let low_pco2 = pco2 < PCO2_LOW;
    let high_pco2 = pco2 > PCO2_HIGH;
    if low_hco3 && low_pco2 {
        "Fully compensated metabolic acidosis"
    } else if high_hco3 && high_pco2 {
        "Fully compensated metabolic alkalosis"
    } else if low_hco3 && high_pco2 {
        "Fully compensated respiratory acidosis"
    } else if high_hco3 && low_pco2 {
        "Fully compensated respiratory alkalosis"
    } else {
        "No compensation needed"
    }
}

fn compensation(disorder: Disorder, pco2: f64, hco3: f64) -> String {
    match disorder {
        Disorder::MetabolicAcidosis => metabolic_acidosis_compensation(pco2, hco3),
        Disorder::RespiratoryAcidosis => respiratory_acidosis_compensation(hco3, pco2),
        Disorder::MetabolicAlkalosis => metabolic_alkalosis_compensation(pco2, hco3),
        Disorder::RespiratoryAlkalosis => respiratory_alkalosis_compensation(hco3, pco2),
        Disorder::Mixed => "Mixed disorder present".to_string(),
        Disorder::NormalPh => normal_ph_compensation(pco2, hco3).to_string(),
    }
}

fn oxygen_severity(po2: f64) -> &'static str {
    if po2 < 60.0 {
        "Severe hypoxemia"
    } else if po2 < PO2_LOW {
        "Mild to moderate hypoxemia"
    } else {
        "Normal oxygenation"
    }
}

pub fn calculate(input: &AbgInput) -> CalcResult {
    let (ph, pco2, hco3) = (input.ph, input.pco2, input.hco3);
    let disorder = Disorder::classify(ph, pco2, hco3);
    let status = ph_status(ph);
    let compensation = compensation(disorder, pco2, hco3);

    let mut analysis = json!({
        "ph": ph,
        "pco2": pco2,
        "hco3": hco3,
        "ph_status": status,
        "primary_disorder": disorder.name(),
        "compensation": compensation,
        "category": disorder.category(),
        "description": disorder.description(),
    });

    let mut parts = vec![
        format!("Primary disorder: {}", disorder.name()),
        format!("pH {} indicates {}", fixed(ph, 2), status.to_lowercase()),
        format!("Compensation: {compensation}"),
        format!(
            "Values: pH {}, PCO2 {} mmHg, HCO3 {} mEq/L",
            fixed(ph, 2),
            fixed(pco2, 1),
            fixed(hco3, 1)
        ),
    ];

    if let Some(po2) = input.po2 {
        let severity = oxygen_severity(po2);
        let mut oxygenation = json!({
            "po2": po2,
            "status": if po2 >= PO2_LOW { "Normal" } else { "Hypoxemia" },
            "severity": severity,
        });
        if let Some(fio2) = input.fio2 {
            oxygenation["fio2"] = json!(fio2);
            oxygenation["note"] = json!(format!("On FiO2 {}", fixed(fio2, 2)));
        }
        analysis["oxygenation"] = oxygenation;
        parts.push(format!("Oxygenation: PO2 {} mmHg - {severity}", fixed(po2, 1)));
    }

    match disorder {
        Disorder::MetabolicAcidosis => {
            parts.push("Consider calculating anion gap and assessing for underlying causes".into())
        }
        Disorder::RespiratoryAcidosis | Disorder::RespiratoryAlkalosis => parts.push(
            "Assess respiratory function and underlying pulmonary/neuromuscular causes".into(),
        ),
        _ => {}
    }

    let text = format!("{}.", parts.join(". "));

    Ok(CalculatorResponse::new(
        disorder.name(),
        "",
        Interpretation::new(disorder.category(), disorder.description(), text),
    )
    .with("detailed_analysis", analysis))
}
