//! CLIF-C ACLF score: 28-day mortality in acute-on-chronic liver failure.
//!
//! Built from the CLIF organ failure (CLIF-OF) score, age and white cell
//! count: `10 * (0.33*OF + 0.04*age + 0.63*ln(WBC) - 2)`, clamped to 0..=100.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum EncephalopathyGrade {
        Grade0 => "grade_0",
        Grade1To2 => "grade_1_2",
        Grade3To4 => "grade_3_4",
    }
}

choice! {
    pub enum RespiratoryRatio {
        PaO2FiO2 => "pao2_fio2",
        SpO2FiO2 => "spo2_fio2",
    }
}

calculator_input! {
    pub struct ClifCAclfInput {
        pub age: i64 => 18..=100,
        pub white_blood_cell_count: f64 => 0.1..=100.0,
        pub bilirubin: f64 => 0.1..=50.0,
        pub creatinine: f64 => 0.1..=20.0,
        pub renal_replacement_therapy: YesNo,
        pub hepatic_encephalopathy_grade: EncephalopathyGrade,
        pub inr: f64 => 0.5..=10.0,
        pub mean_arterial_pressure: f64 => 30.0..=150.0,
        pub vasopressors: YesNo,
        pub respiratory_ratio_type: RespiratoryRatio,
        pub respiratory_ratio_value: f64 => 50.0..=600.0,
    }
}

/// Per-organ CLIF-OF subscores, each 1..=3.
#[derive(Debug, Clone, Copy)]
struct OrganScores {
    liver: i64,
    kidney: i64,
    brain: i64,
    coagulation: i64,
    circulatory: i64,
    respiratory: i64,
}

impl OrganScores {
    fn total(&self) -> i64 {
        self.liver + self.kidney + self.brain + self.coagulation + self.circulatory + self.respiratory
    }
}

fn three_tier(value: f64, mid: f64, high: f64) -> i64 {
    if value < mid {
        1
    } else if value < high {
        2
    } else {
        3
    }
}

fn organ_scores(input: &ClifCAclfInput) -> OrganScores {
    let kidney = if input.renal_replacement_therapy.is_yes() {
        3
    } else {
        three_tier(input.creatinine, 2.0, 3.5)
    };
    let brain = match input.hepatic_encephalopathy_grade {
        EncephalopathyGrade::Grade0 => 1,
        EncephalopathyGrade::Grade1To2 => 2,
        EncephalopathyGrade::Grade3To4 => 3,
    };
    let circulatory = if input.vasopressors.is_yes() {
        3
    } else if input.mean_arterial_pressure < 70.0 {
        2
    } else {
        1
    };
    let (severe, moderate) = match input.respiratory_ratio_type {
        RespiratoryRatio::PaO2FiO2 => (200.0, 300.0),
        RespiratoryRatio::SpO2FiO2 => (214.0, 357.0),
    };
    let ratio = input.respiratory_ratio_value;
    let respiratory = if ratio <= severe {
        3
    } else if ratio <= moderate {
        2
    } else {
        1
    };

    OrganScores {
        liver: three_tier(input.bilirubin, 6.0, 12.0),
        kidney,
        brain,
        coagulation: three_tier(input.inr, 2.0, 2.5),
        circulatory,
        respiratory,
    }
}

pub fn calculate(input: &ClifCAclfInput) -> CalcResult {
    let organs = organ_scores(input);
    let clif_of = organs.total();
    let raw = 10.0
        * (0.33 * clif_of as f64 + 0.04 * input.age as f64
            + 0.63 * input.white_blood_cell_count.ln()
            - 2.0);
    let score = round_to(raw.clamp(0.0, 100.0), 1);

    Ok(CalculatorResponse::new(score, "points", interpret(score))
        .with("clif_of_score", clif_of)
        .with(
            "organ_scores",
            json!({
                "liver": organs.liver,
                "kidney": organs.kidney,
                "brain": organs.brain,
                "coagulation": organs.coagulation,
                "circulatory": organs.circulatory,
                "respiratory": organs.respiratory,
            }),
        ))
}

fn interpret(score: f64) -> Interpretation {
    let shown = fixed(score, 1);
    if score < 45.0 {
        Interpretation::new(
            "Low Risk",
            "Lower mortality risk",
            format!("CLIF-C ACLF Score {shown}: Lower mortality risk in ACLF. Standard supportive care with close monitoring. Consider hepatology consultation and optimization of liver function."),
        )
    } else if score < 65.0 {
        Interpretation::new(
            "Moderate Risk",
            "Moderate mortality risk",
            format!("CLIF-C ACLF Score {shown}: Moderate mortality risk in ACLF. Consider intensive care monitoring and advanced therapies. Evaluate for liver transplantation eligibility."),
        )
    } else if score < 70.0 {
        Interpretation::new(
            "High Risk",
            "High mortality risk",
            format!("CLIF-C ACLF Score {shown}: High mortality risk in ACLF. Urgent consideration for liver transplantation if eligible. Intensive care management required."),
        )
    } else {
        Interpretation::new(
            "Critical Risk",
            "Critical mortality risk",
            format!("CLIF-C ACLF Score {shown}: Critical mortality risk associated with 100% mortality at 28 days. Consider futility of intensive care measures. Focus on comfort care and family discussions."),
        )
    }
}
