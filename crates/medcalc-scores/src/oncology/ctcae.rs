//! CTCAE v5 grading of hematologic adverse events.
//!
//! Grade bands are contiguous, so values between published integer cut-offs
//! fall into the grade whose lower bound they have reached.

use medcalc_core::math::ensure_range;
use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::{json, Value};

choice! {
    pub enum AdverseEvent {
        Anemia => "anemia",
        Neutropenia => "neutropenia",
        Thrombocytopenia => "thrombocytopenia",
        FebrileNeutropenia => "febrile_neutropenia",
        Leukocytosis => "leukocytosis",
        Lymphopenia => "lymphopenia",
    }
}

impl AdverseEvent {
    fn title(self) -> &'static str {
        match self {
            AdverseEvent::Anemia => "Anemia",
            AdverseEvent::Neutropenia => "Neutropenia",
            AdverseEvent::Thrombocytopenia => "Thrombocytopenia",
            AdverseEvent::FebrileNeutropenia => "Febrile Neutropenia",
            AdverseEvent::Leukocytosis => "Leukocytosis",
            AdverseEvent::Lymphopenia => "Lymphopenia",
        }
    }
}

calculator_input! {
    pub struct CtcaeInput {
        pub adverse_event_type: AdverseEvent,
        pub patient_sex: Sex,
        /// g/dL
        pub hemoglobin: Option<f64>,
        /// cells/mm³
        pub neutrophil_count: Option<f64>,
        pub platelet_count: Option<f64>,
        pub wbc_count: Option<f64>,
        pub lymphocyte_count: Option<f64>,
        /// °C
        pub temperature: Option<f64>,
        pub transfusion_indicated: Option<YesNo>,
    }
}

fn required(value: Option<f64>, message: &str) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::constraint(message))
}

/// The laboratory value the grade is read from.
enum Measurement {
    Single(f64, &'static str),
    Febrile { neutrophils: f64, temperature: f64 },
}

impl CtcaeInput {
    fn measurement(&self) -> CalcResult<Measurement> {
        let cells = "cells/mm³";
        Ok(match self.adverse_event_type {
            AdverseEvent::Anemia => {
                let hb = required(self.hemoglobin, "Hemoglobin level is required for anemia grading")?;
                Measurement::Single(ensure_range("hemoglobin", hb, 0.0, 25.0)?, "g/dL")
            }
            AdverseEvent::Neutropenia => {
                let anc = required(self.neutrophil_count, "Neutrophil count is required for neutropenia grading")?;
                Measurement::Single(ensure_range("neutrophil_count", anc, 0.0, 50_000.0)?, cells)
            }
            AdverseEvent::Thrombocytopenia => {
                let plt = required(self.platelet_count, "Platelet count is required for thrombocytopenia grading")?;
                Measurement::Single(ensure_range("platelet_count", plt, 0.0, 2_000_000.0)?, cells)
            }
            AdverseEvent::FebrileNeutropenia => {
                let (Some(anc), Some(temp)) = (self.neutrophil_count, self.temperature) else {
                    return Err(CalcError::constraint(
                        "Both neutrophil count and temperature are required for febrile neutropenia grading",
                    ));
                };
                Measurement::Febrile {
                    neutrophils: ensure_range("neutrophil_count", anc, 0.0, 50_000.0)?,
                    temperature: ensure_range("temperature", temp, 30.0, 45.0)?,
                }
            }
            AdverseEvent::Leukocytosis => {
                let wbc = required(self.wbc_count, "WBC count is required for leukocytosis grading")?;
                Measurement::Single(ensure_range("wbc_count", wbc, 0.0, 500_000.0)?, cells)
            }
            AdverseEvent::Lymphopenia => {
                let lymph = required(self.lymphocyte_count, "Lymphocyte count is required for lymphopenia grading")?;
                Measurement::Single(ensure_range("lymphocyte_count", lymph, 0.0, 50_000.0)?, cells)
            }
        })
    }

    fn grade(&self, measurement: &Measurement) -> i64 {
        let value = match measurement {
            Measurement::Febrile { neutrophils, temperature } => {
                return if *neutrophils < 1000.0 && *temperature >= 38.0 { 3 } else { 0 };
            }
            Measurement::Single(value, _) => *value,
        };
        match self.adverse_event_type {
            AdverseEvent::Anemia => {
                let lln = if self.patient_sex.is_female() { 12.0 } else { 14.0 };
                if value >= lln {
                    0
                } else if value < 6.5 {
                    4
                } else if value < 8.0 {
                    if self.transfusion_indicated == Some(YesNo::Yes) { 3 } else { 2 }
                } else if value < 10.0 {
                    2
                } else {
                    1
                }
            }
            AdverseEvent::Neutropenia => grade_low(value, 1500.0, [1000.0, 500.0, 200.0]),
            AdverseEvent::Thrombocytopenia => grade_low(value, 150_000.0, [75_000.0, 50_000.0, 25_000.0]),
            AdverseEvent::Lymphopenia => grade_low(value, 1000.0, [800.0, 500.0, 200.0]),
            AdverseEvent::Leukocytosis => {
                if value <= 11_000.0 {
                    0
                } else if value > 100_000.0 {
                    4
                } else if value > 50_000.0 {
                    3
                } else if value > 20_000.0 {
                    2
                } else {
                    1
                }
            }
            AdverseEvent::FebrileNeutropenia => 0,
        }
    }
}

/// Grade for a count below its lower limit of normal; `cuts` are the
/// grade 2, 3 and 4 upper bounds (exclusive).
fn grade_low(value: f64, lln: f64, cuts: [f64; 3]) -> i64 {
    if value >= lln {
        0
    } else if value < cuts[2] {
        4
    } else if value < cuts[1] {
        3
    } else if value < cuts[0] {
        2
    } else {
        1
    }
}

struct Recommendations {
    monitoring: Vec<&'static str>,
    interventions: Vec<&'static str>,
    dose_modifications: Vec<&'static str>,
}

fn recommendations(grade: i64, event: AdverseEvent) -> Recommendations {
    let mut r = match grade {
        0 => Recommendations {
            monitoring: vec!["Continue routine laboratory monitoring as per protocol"],
            interventions: vec!["No specific interventions required"],
            dose_modifications: vec!["No dose modifications indicated"],
        },
        1 => Recommendations {
            monitoring: vec![
                "Increase monitoring frequency as clinically indicated",
                "Monitor for progression to higher grades",
            ],
            interventions: vec![
                "Clinical observation and supportive care",
                "Patient education about signs and symptoms to report",
            ],
            dose_modifications: vec!["Generally no dose modification required"],
        },
        2 => Recommendations {
            monitoring: vec![
                "More frequent laboratory monitoring recommended",
                "Clinical assessment for symptoms and functional impact",
            ],
            interventions: vec![
                "Supportive care measures as appropriate",
                "Consider prophylactic interventions if indicated",
            ],
            dose_modifications: vec![
                "Consider dose delay until improvement to Grade 1 or baseline",
                "May require dose reduction per protocol guidelines",
            ],
        },
        3 => Recommendations {
            monitoring: vec![
                "Intensive monitoring with frequent laboratory assessments",
                "Daily clinical evaluation until improvement",
            ],
            interventions: vec![
                "Active medical management and supportive care",
                "Consider hospitalization if clinically indicated",
                "Implement appropriate treatment protocols",
            ],
            dose_modifications: vec![
                "Hold treatment until improvement to Grade 1 or baseline",
                "Dose reduction required upon resumption",
                "Consider alternative treatment regimens",
            ],
        },
        _ => Recommendations {
            monitoring: vec![
                "Continuous monitoring in appropriate care setting",
                "Immediate and frequent reassessment",
            ],
            interventions: vec![
                "Urgent medical intervention required",
                "Intensive supportive care and treatment",
                "Consider emergency interventions as appropriate",
            ],
            dose_modifications: vec![
                "Discontinue treatment permanently",
                "Consider alternative treatment options once stable",
                "Risk-benefit assessment required for any future therapy",
            ],
        },
    };

    if grade >= 3 {
        match event {
            AdverseEvent::FebrileNeutropenia => r.interventions.extend([
                "Empirical broad-spectrum antibiotics",
                "Blood cultures and infection workup",
                "Consider growth factor support (G-CSF)",
            ]),
            AdverseEvent::Thrombocytopenia => r.interventions.extend([
                "Bleeding precautions and assessment",
                "Consider platelet transfusion if bleeding or high risk",
                "Avoid procedures with bleeding risk",
            ]),
            AdverseEvent::Anemia => r.interventions.extend([
                "Evaluate for transfusion indication",
                "Iron studies and B12/folate assessment",
                "Consider erythropoiesis-stimulating agents if appropriate",
            ]),
            _ => {}
        }
    }
    r
}

pub fn calculate(input: &CtcaeInput) -> CalcResult {
    let measurement = input.measurement()?;
    let grade = input.grade(&measurement);
    let event = input.adverse_event_type;

    let (description, significance) = match grade {
        0 => ("Within normal limits", "No intervention required; continue routine monitoring"),
        1 => (
            "Mild adverse event",
            "Asymptomatic or mild symptoms; clinical observation only; intervention not indicated",
        ),
        2 => (
            "Moderate adverse event",
            "Minimal intervention indicated; may limit age-appropriate activities of daily living",
        ),
        3 => (
            "Severe adverse event",
            "Medically significant; hospitalization or prolongation may be indicated; disabling",
        ),
        _ => ("Life-threatening adverse event", "Life-threatening consequences; urgent intervention indicated"),
    };

    let (primary_value, value_unit) = match measurement {
        Measurement::Single(value, unit) => (json!(value), unit),
        Measurement::Febrile { neutrophils, temperature } => (
            json!({"neutrophil_count": neutrophils, "temperature": temperature}),
            "composite",
        ),
    };

    let text = match (&measurement, grade) {
        (_, 0) => format!(
            "No {} detected. Laboratory values within normal limits.",
            event.title().to_lowercase()
        ),
        (Measurement::Febrile { .. }, _) => format!("Grade {grade} {} detected. {significance}", event.title()),
        (Measurement::Single(value, unit), _) => {
            format!("Grade {grade} {} detected with {value} {unit}. {significance}", event.title())
        }
    };

    let recs = recommendations(grade, event);
    let details: Value = json!({
        "adverse_event_type": event.title(),
        "primary_value": primary_value,
        "value_unit": value_unit,
        "grade_description": description,
        "clinical_significance": significance,
        "monitoring_requirements": recs.monitoring,
        "intervention_considerations": recs.interventions,
        "dose_modification_guidance": recs.dose_modifications,
    });

    Ok(CalculatorResponse::new(
        grade,
        "grade",
        Interpretation::new(format!("Grade {grade}"), description, text),
    )
    .with("clinical_details", details))
}
