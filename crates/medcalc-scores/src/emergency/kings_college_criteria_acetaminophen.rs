//! King's College Criteria for acetaminophen-induced liver failure.
//!
//! Met when arterial pH < 7.30, or when INR > 6.5, creatinine > 3.4 mg/dL
//! and grade III/IV encephalopathy occur together. Lactate and phosphate
//! are reported as supplementary markers only.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

const PH_THRESHOLD: f64 = 7.30;
const INR_THRESHOLD: f64 = 6.5;
const CREATININE_THRESHOLD: f64 = 3.4;
const LACTATE_THRESHOLD: f64 = 3.5;
const PHOSPHATE_THRESHOLD: f64 = 3.75;

choice! {
    pub enum EncephalopathyGrade {
        None => "none",
        GradeI => "grade_i",
        GradeII => "grade_ii",
        GradeIII => "grade_iii",
        GradeIV => "grade_iv",
    }
}

calculator_input! {
    pub struct KingsCollegeInput {
        pub arterial_ph: f64 => 6.0..=8.0,
        pub inr: f64 => 0.5..=20.0,
        pub creatinine: f64 => 0.1..=25.0,
        pub hepatic_encephalopathy_grade: EncephalopathyGrade,
        pub lactate: Option<f64> => 0.1..=30.0,
        pub phosphate: Option<f64> => 0.5..=15.0,
    }
}

pub fn calculate(input: &KingsCollegeInput) -> CalcResult {
    let ph_criterion = input.arterial_ph < PH_THRESHOLD;
    let inr_criterion = input.inr > INR_THRESHOLD;
    let creatinine_criterion = input.creatinine > CREATININE_THRESHOLD;
    let encephalopathy_criterion = matches!(
        input.hepatic_encephalopathy_grade,
        EncephalopathyGrade::GradeIII | EncephalopathyGrade::GradeIV
    );
    let combined = inr_criterion && creatinine_criterion && encephalopathy_criterion;
    let met = ph_criterion || combined;

    let mut text = if met {
        let mut text = String::from(
            "Meets King's College Criteria for acetaminophen toxicity. This indicates poor prognosis with 95% specificity for mortality. URGENT liver transplant evaluation and referral to transplant center required. ",
        );
        if ph_criterion {
            text.push_str(&format!("Arterial pH {} is <7.3. ", fixed(input.arterial_ph, 2)));
        }
        if combined {
            text.push_str(&format!(
                "All three secondary criteria met: INR {} (>6.5), creatinine {} mg/dL (>3.4), and Grade III/IV hepatic encephalopathy. ",
                fixed(input.inr, 1),
                fixed(input.creatinine, 1)
            ));
        }
        text.push_str(
            "Immediate intensive care management required including: N-acetylcysteine continuation, hemodynamic support, management of intracranial hypertension, renal replacement therapy if indicated, and preparation for potential liver transplantation.",
        );
        text
    } else {
        format!(
            "Does not meet King's College Criteria for liver transplantation. However, criteria are specific but not sensitive (58% sensitivity), so close monitoring and continued aggressive medical management are essential. Current values: pH {}, INR {}, creatinine {} mg/dL, encephalopathy {}. Continue N-acetylcysteine, monitor for deterioration, and reassess criteria frequently. Consider early transplant center consultation if clinical deterioration occurs.",
            fixed(input.arterial_ph, 2),
            fixed(input.inr, 1),
            fixed(input.creatinine, 1),
            input.hepatic_encephalopathy_grade.to_string().replace('_', " ")
        )
    };

    if input.lactate.is_some() || input.phosphate.is_some() {
        text.push_str(" Additional prognostic markers: ");
        if let Some(lactate) = input.lactate {
            if lactate > LACTATE_THRESHOLD {
                text.push_str(&format!(
                    "Elevated lactate {} mmol/L (>3.5) suggests poor prognosis. ",
                    fixed(lactate, 1)
                ));
            } else {
                text.push_str(&format!("Lactate {} mmol/L (<3.5) is reassuring. ", fixed(lactate, 1)));
            }
        }
        if let Some(phosphate) = input.phosphate {
            if phosphate > PHOSPHATE_THRESHOLD {
                text.push_str(&format!(
                    "Elevated phosphate {} mg/dL (>3.75) at 48-96h suggests poor prognosis.",
                    fixed(phosphate, 1)
                ));
            } else {
                text.push_str(&format!(
                    "Phosphate {} mg/dL (<3.75) is within normal range.",
                    fixed(phosphate, 1)
                ));
            }
        }
    }

    let interpretation = if met {
        Interpretation::new(
            "Meets Criteria",
            "Poor prognosis - liver transplant evaluation needed",
            text,
        )
    } else {
        Interpretation::new(
            "Does Not Meet Criteria",
            "Does not meet transplant criteria but requires close monitoring",
            text,
        )
    };
    let label = if met { "Criteria Met" } else { "Criteria Not Met" };

    let mut response = CalculatorResponse::new(label, "criteria", interpretation)
        .with("criteria_met", met)
        .with("ph_criterion", ph_criterion)
        .with("combined_criterion", combined)
        .with("inr_criterion", inr_criterion)
        .with("creatinine_criterion", creatinine_criterion)
        .with("encephalopathy_criterion", encephalopathy_criterion);
    if let Some(lactate) = input.lactate {
        response = response.with("high_lactate", lactate > LACTATE_THRESHOLD);
    }
    if let Some(phosphate) = input.phosphate {
        response = response.with("high_phosphate", phosphate > PHOSPHATE_THRESHOLD);
    }
    Ok(response)
}
