//! Child-Pugh classification of cirrhosis severity.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum Ascites {
        Absent => "absent",
        Slight => "slight",
        Moderate => "moderate",
    }
}

choice! {
    pub enum Encephalopathy {
        None => "none",
        Grade1To2 => "grade_1_2",
        Grade3To4 => "grade_3_4",
    }
}

calculator_input! {
    pub struct ChildPughInput {
        pub total_bilirubin: f64 => 0.1..=50.0,
        pub serum_albumin: f64 => 1.0..=5.0,
        pub inr: f64 => 0.8..=10.0,
        pub ascites: Ascites,
        pub encephalopathy: Encephalopathy,
    }
}

fn bilirubin_points(v: f64) -> (i64, &'static str) {
    if v < 2.0 {
        (1, "<2.0")
    } else if v <= 3.0 {
        (2, "2.0-3.0")
    } else {
        (3, ">3.0")
    }
}

fn albumin_points(v: f64) -> (i64, &'static str) {
    if v > 3.5 {
        (1, ">3.5")
    } else if v >= 2.8 {
        (2, "2.8-3.5")
    } else {
        (3, "<2.8")
    }
}

fn inr_points(v: f64) -> (i64, &'static str) {
    if v < 1.7 {
        (1, "<1.7")
    } else if v <= 2.3 {
        (2, "1.7-2.3")
    } else {
        (3, ">2.3")
    }
}

struct Grade {
    letter: &'static str,
    description: &'static str,
    one_year_survival: i64,
    two_year_survival: i64,
    operative_risk: &'static str,
    surgical_recommendation: &'static str,
}

const GRADE_A: Grade = Grade {
    letter: "A",
    description: "Well-compensated disease",
    one_year_survival: 100,
    two_year_survival: 85,
    operative_risk: "Excellent",
    surgical_recommendation: "Suitable for major surgery and liver resection",
};
const GRADE_B: Grade = Grade {
    letter: "B",
    description: "Significant functional compromise",
    one_year_survival: 80,
    two_year_survival: 60,
    operative_risk: "Good",
    surgical_recommendation: "Consider surgery with caution; may need transplant evaluation",
};
const GRADE_C: Grade = Grade {
    letter: "C",
    description: "Decompensated disease",
    one_year_survival: 45,
    two_year_survival: 35,
    operative_risk: "Poor",
    surgical_recommendation: "High surgical mortality; priority for liver transplantation",
};

pub fn calculate(input: &ChildPughInput) -> CalcResult {
    let (bil, bil_band) = bilirubin_points(input.total_bilirubin);
    let (alb, alb_band) = albumin_points(input.serum_albumin);
    let (inr, inr_band) = inr_points(input.inr);
    let ascites = match input.ascites {
        Ascites::Absent => 1,
        Ascites::Slight => 2,
        Ascites::Moderate => 3,
    };
    let enceph = match input.encephalopathy {
        Encephalopathy::None => 1,
        Encephalopathy::Grade1To2 => 2,
        Encephalopathy::Grade3To4 => 3,
    };
    let total = bil + alb + inr + ascites + enceph;

    let grade = match total {
        ..=6 => &GRADE_A,
        7..=9 => &GRADE_B,
        _ => &GRADE_C,
    };

    Ok(CalculatorResponse::new(total, "points", interpret(total, grade))
        .with("grade", grade.letter)
        .with("one_year_survival", grade.one_year_survival)
        .with("two_year_survival", grade.two_year_survival)
        .with("operative_risk", grade.operative_risk)
        .with("surgical_recommendation", grade.surgical_recommendation)
        .with(
            "scoring_breakdown",
            json!({
                "total_bilirubin": {"value": input.total_bilirubin, "category": format!("{} mg/dL ({bil_band})", input.total_bilirubin), "points": bil},
                "serum_albumin": {"value": input.serum_albumin, "category": format!("{} g/dL ({alb_band})", input.serum_albumin), "points": alb},
                "inr": {"value": input.inr, "category": format!("{} ({inr_band})", input.inr), "points": inr},
                "ascites": {"value": input.ascites.to_string(), "points": ascites},
                "encephalopathy": {"value": input.encephalopathy.to_string(), "points": enceph},
            }),
        ))
}

fn interpret(total: i64, grade: &Grade) -> Interpretation {
    let text = match grade.letter {
        "A" => format!("Child-Pugh Grade A (Score {total}): Well-compensated cirrhosis. Excellent operative risk with one-year survival ~100% and two-year survival ~85%. Suitable for major surgery and liver resection."),
        "B" => format!("Child-Pugh Grade B (Score {total}): Significant functional compromise. Good operative risk with one-year survival ~80% and two-year survival ~60%. Consider surgery with caution; may require liver transplant evaluation."),
        _ => format!("Child-Pugh Grade C (Score {total}): Decompensated cirrhosis. Poor operative risk with one-year survival ~45% and two-year survival ~35%. High surgical mortality; priority candidate for liver transplantation."),
    };
    Interpretation::new(format!("Child-Pugh {}", grade.letter), grade.description, text)
}
