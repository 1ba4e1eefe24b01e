//! CKiD U25 eGFR for ages 1 to 25: creatinine, cystatin C or their average.
//!
//! Each equation is `k / marker` with a sex- and age-specific `k` that is
//! continuous across age 12 and flat from 18.

use medcalc_core::math::{ensure_range, fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, Sex};
use serde_json::{json, Map, Value};

choice! {
    pub enum EquationType {
        Creatinine => "creatinine",
        CystatinC => "cystatin_c",
        CreatinineCystatinC => "creatinine_cystatin_c",
    }
}

impl EquationType {
    fn uses_creatinine(self) -> bool {
        self != EquationType::CystatinC
    }

    fn uses_cystatin(self) -> bool {
        self != EquationType::Creatinine
    }
}

calculator_input! {
    pub struct CkidU25Input {
        pub equation_type: EquationType,
        pub age: i64 => 1..=25,
        pub sex: Sex,
        /// cm
        pub height: Option<f64>,
        /// mg/dL
        pub serum_creatinine: Option<f64>,
        /// mg/L
        pub cystatin_c: Option<f64>,
    }
}

fn creatinine_k(age: i64, sex: Sex) -> f64 {
    let years = (age - 12) as i32;
    match (sex.is_female(), age) {
        (false, ..=11) => 39.0 * 1.008f64.powi(years),
        (false, 12..=17) => 39.0 * 1.045f64.powi(years),
        (false, _) => 50.8,
        (true, ..=11) => 36.1 * 1.008f64.powi(years),
        (true, 12..=17) => 36.1 * 1.023f64.powi(years),
        (true, _) => 41.4,
    }
}

fn cystatin_k(age: i64, sex: Sex) -> f64 {
    let years = (age - 12) as i32;
    match (sex.is_female(), age) {
        (_, ..=11) => 70.7 * 0.990f64.powi(years),
        (false, 12..=17) => 70.7 * 0.931f64.powi(years),
        (false, _) => 135.0,
        (true, 12..=17) => 70.7 * 0.969f64.powi(years),
        (true, _) => 113.0,
    }
}

/// Markers validated against the chosen equation.
struct Markers {
    creatinine: Option<(f64, f64)>,
    cystatin: Option<f64>,
}

impl CkidU25Input {
    fn validate(&self) -> CalcResult<Markers> {

        let creatinine = if self.equation_type.uses_creatinine() {
            let (Some(height), Some(creatinine)) = (self.height, self.serum_creatinine) else {
                return Err(CalcError::constraint(
                    "Height and serum creatinine are required for creatinine-based equations",
                ));
            };
            ensure_range("height", height, 50.0, 250.0)?;
            ensure_range("serum_creatinine", creatinine, 0.1, 20.0)?;
            Some((height, creatinine))
        } else {
            None
        };

        let cystatin = if self.equation_type.uses_cystatin() {
            let cystatin = self
                .cystatin_c
                .ok_or_else(|| CalcError::constraint("Cystatin C is required for cystatin C-based equations"))?;
            Some(ensure_range("cystatin_c", cystatin, 0.1, 10.0)?)
        } else {
            None
        };

        Ok(Markers { creatinine, cystatin })
    }
}

fn ckd_stage(egfr: f64) -> (&'static str, &'static str, &'static str) {
    if egfr >= 90.0 {
        (
            "G1",
            "Normal or high",
            "Normal kidney function. If kidney damage is present (proteinuria, hematuria, or structural \
             abnormalities), this indicates CKD stage G1. Regular monitoring recommended.",
        )
    } else if egfr >= 60.0 {
        (
            "G2",
            "Mildly decreased",
            "Mildly decreased kidney function (CKD stage G2). Monitor kidney function progression and address \
             cardiovascular risk factors.",
        )
    } else if egfr >= 45.0 {
        (
            "G3a",
            "Mild to moderately decreased",
            "Mild to moderate reduction in kidney function (CKD stage G3a). Evaluate and treat complications, slow \
             progression, and prepare for renal replacement therapy.",
        )
    } else if egfr >= 30.0 {
        (
            "G3b",
            "Moderately to severely decreased",
            "Moderate to severe reduction in kidney function (CKD stage G3b). Evaluate and treat complications, \
             prepare for renal replacement therapy.",
        )
    } else if egfr >= 15.0 {
        (
            "G4",
            "Severely decreased",
            "Severe reduction in kidney function (CKD stage G4). Prepare for renal replacement therapy (dialysis or \
             transplantation).",
        )
    } else {
        (
            "G5",
            "Kidney failure",
            "Kidney failure (CKD stage G5). Renal replacement therapy (dialysis or transplantation) required or \
             patient receiving dialysis.",
        )
    }
}

pub fn calculate(input: &CkidU25Input) -> CalcResult {
    let markers = input.validate()?;
    let (age, sex) = (input.age, input.sex);

    let creatinine_egfr = markers
        .creatinine
        .map(|(height, creatinine)| round_to(creatinine_k(age, sex) * (height / 100.0) / creatinine, 1));
    let cystatin_egfr = markers.cystatin.map(|cystatin| round_to(cystatin_k(age, sex) / cystatin, 1));

    let (egfr, method, explanation) = match (creatinine_egfr, cystatin_egfr) {
        (Some(cr), Some(cys)) => (
            (cr + cys) / 2.0,
            "Combined Creatinine-Cystatin C CKiD U25",
            "eGFR = (creatinine_eGFR + cystatin_c_eGFR) / 2",
        ),
        (Some(cr), None) => (
            cr,
            "Creatinine-based CKiD U25",
            "eGFR = k × (height_m / serum_creatinine_mg/dL)",
        ),
        (None, Some(cys)) => (cys, "Cystatin C-based CKiD U25", "eGFR = k × (1 / cystatin_c_mg/L)"),
        (None, None) => return Err(CalcError::Internal("no marker available for CKiD U25".into())),
    };

    let (stage, description, guidance) = ckd_stage(egfr);
    let text = format!("eGFR {} mL/min/1.73m²: {guidance}", fixed(egfr, 1));

    let mut labs = Map::new();
    let mut parameters = Map::new();
    if let Some((height, creatinine)) = markers.creatinine {
        labs.insert("height".into(), json!(format!("{height} cm")));
        labs.insert("serum_creatinine".into(), json!(format!("{creatinine} mg/dL")));
        parameters.insert("creatinine_k_value".into(), json!(round_to(creatinine_k(age, sex), 2)));
    }
    if let Some(cystatin) = markers.cystatin {
        labs.insert("cystatin_c".into(), json!(format!("{cystatin} mg/L")));
        parameters.insert("cystatin_k_value".into(), json!(round_to(cystatin_k(age, sex), 2)));
    }

    let mut context = json!({
        "equation_advantages": [
            "Superior to other pediatric equations for ages 1-25 years",
            "Eliminates 'jumps' in eGFR when transitioning from pediatric to adult care",
            "Does not require race-based adjustments",
            "Validated in diverse populations with chronic kidney disease",
        ],
        "clinical_applications": [
            "Monitoring kidney function progression in children and young adults",
            "Supporting clinical decision-making for CKD management",
            "Facilitating smooth transition from pediatric to adult nephrology care",
            "Guiding timing of renal replacement therapy preparation",
        ],
    });
    if age >= 18
        && let Value::Object(context) = &mut context
    {
        context.insert(
            "transition_considerations".into(),
            json!([
                "For patients 18-25 years, consider comparing with adult CKD-EPI equations",
                "CKiD U25 equations may be more appropriate for young adults with CKD",
                "Smooth transition monitoring without eGFR 'jumps' at age 18",
            ]),
        );
    }

    let details = json!({
        "method": method,
        "patient_demographics": {
            "age": format!("{age} years"),
            "sex": if sex.is_female() { "Female" } else { "Male" },
            "age_group": if age < 18 { "Pediatric (1-17 years)" } else { "Young Adult (18-25 years)" },
        },
        "laboratory_values": labs,
        "equation_parameters": parameters,
        "clinical_context": context,
        "equation_explanation": explanation,
    });

    Ok(
        CalculatorResponse::new(egfr, "mL/min/1.73m²", Interpretation::new(stage, description, text))
            .with("calculation_details", details),
    )
}
