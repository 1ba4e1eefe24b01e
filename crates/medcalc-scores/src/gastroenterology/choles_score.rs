//! CholeS score: predicts operative duration over 90 minutes for
//! laparoscopic cholecystectomy.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

choice! {
    pub enum Indication {
        Pancreatitis => "pancreatitis",
        ColicDyskinesiaPolyp => "colic_dyskinesia_polyp",
        CbdStone => "cbd_stone",
        AcalculousCholecystitis => "acalculous_cholecystitis",
    }
}

choice! {
    pub enum CbdDiameter {
        Normal => "normal",
        Dilated => "dilated",
    }
}

choice! {
    pub enum GallbladderWall {
        Normal => "normal",
        Thick => "thick",
    }
}

calculator_input! {
    pub struct CholesInput {
        pub age: i64 => 18..=120,
        pub gender: Sex,
        pub indication: Indication,
        pub bmi: f64 => 15.0..=60.0,
        pub cbd_diameter: CbdDiameter,
        pub gallbladder_wall: GallbladderWall,
        pub preoperative_ct: YesNo,
        pub planned_cholangiogram: YesNo,
        pub previous_admissions: i64 => 0..=20,
        pub asa_grade: i64 => 1..=5,
    }
}

pub fn calculate(input: &CholesInput) -> CalcResult {
    let age = if input.age >= 40 { 1.5 } else { 0.0 };
    let gender = if input.gender == Sex::Male { 1.0 } else { 0.0 };
    let indication = match input.indication {
        Indication::Pancreatitis => 0.0,
        Indication::ColicDyskinesiaPolyp => 0.5,
        Indication::CbdStone => 2.0,
        Indication::AcalculousCholecystitis => 2.5,
    };
    let bmi = if input.bmi < 25.0 {
        0.0
    } else if input.bmi <= 35.0 {
        1.0
    } else {
        2.0
    };
    let cbd = match input.cbd_diameter {
        CbdDiameter::Normal => 0.0,
        CbdDiameter::Dilated => 2.0,
    };
    let wall = match input.gallbladder_wall {
        GallbladderWall::Normal => 0.0,
        GallbladderWall::Thick => 1.5,
    };
    let ct = if input.preoperative_ct.is_yes() { 1.5 } else { 0.0 };
    let cholangiogram = if input.planned_cholangiogram.is_yes() { 3.0 } else { 0.0 };
    let admissions = match input.previous_admissions {
        0 => 0.0,
        1..=2 => 1.0,
        _ => 2.5,
    };
    let asa = match input.asa_grade {
        1 => 0.0,
        2 => 1.0,
        _ => 2.5,
    };

    let total = round_to(
        age + gender + indication + bmi + cbd + wall + ct + cholangiogram + admissions + asa,
        1,
    );
    let tier = Tier::from_score(total);

    Ok(CalculatorResponse::new(total, "points", interpret(total, tier))
        .with("risk_category", tier.category())
        .with("prolonged_surgery_probability", tier.probability())
        .with("operative_planning", tier.planning())
        .with("scheduling_recommendation", tier.scheduling())
        .with(
            "component_scores",
            json!({
                "age": age,
                "gender": gender,
                "indication": indication,
                "bmi": bmi,
                "cbd_diameter": cbd,
                "gallbladder_wall": wall,
                "preoperative_ct": ct,
                "planned_cholangiogram": cholangiogram,
                "previous_admissions": admissions,
                "asa_grade": asa,
            }),
        ))
}

#[derive(Debug, Clone, Copy)]
enum Tier {
    Low,
    Intermediate,
    High,
}

impl Tier {
    fn from_score(score: f64) -> Self {
        if score <= 3.5 {
            Tier::Low
        } else if score <= 8.0 {
            Tier::Intermediate
        } else {
            Tier::High
        }
    }

    fn category(self) -> &'static str {
        match self {
            Tier::Low => "Low Risk",
            Tier::Intermediate => "Intermediate Risk",
            Tier::High => "High Risk",
        }
    }

    fn probability(self) -> &'static str {
        match self {
            Tier::Low => "5.1% chance of >90-minute surgery",
            Tier::Intermediate => "5.1-41.8% chance of >90-minute surgery",
            Tier::High => ">41.8% chance of >90-minute surgery",
        }
    }

    fn planning(self) -> &'static str {
        match self {
            Tier::Low => "Standard operative scheduling suitable",
            Tier::Intermediate => "Consider operative complexity in scheduling",
            Tier::High => "Anticipate complex surgery with potential complications",
        }
    }

    fn scheduling(self) -> &'static str {
        match self {
            Tier::Low => "3 cases per half-day list recommended",
            Tier::Intermediate => "2-3 cases per half-day list based on total risk profile",
            Tier::High => "Maximum 2 cases per half-day list to avoid overruns",
        }
    }
}

fn interpret(score: f64, tier: Tier) -> Interpretation {
    let (description, text) = match tier {
        Tier::Low => (
            "Low likelihood of prolonged surgery",
            format!("CholeS Score {score:.1}: Low risk for prolonged surgery (5.1% chance >90 minutes). Standard scheduling with 3 cases per half-day list is appropriate."),
        ),
        Tier::Intermediate => (
            "Moderate likelihood of prolonged surgery",
            format!("CholeS Score {score:.1}: Intermediate risk for prolonged surgery (5.1-41.8% chance >90 minutes). Consider scheduling 2-3 cases per half-day list based on case complexity."),
        ),
        Tier::High => (
            "High likelihood of prolonged surgery",
            format!("CholeS Score {score:.1}: High risk for prolonged surgery (>41.8% chance >90 minutes). Schedule maximum 2 cases per half-day list to prevent theatre overruns."),
        ),
    };
    Interpretation::new(tier.category(), description, text)
}
