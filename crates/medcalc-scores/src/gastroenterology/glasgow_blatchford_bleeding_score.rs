//! Glasgow-Blatchford bleeding score for upper GI bleeding.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

calculator_input! {
    pub struct GlasgowBlatchfordInput {
        pub bun: f64 => 5.0..=200.0,
        pub hemoglobin: f64 => 3.0..=20.0,
        pub gender: Sex,
        pub systolic_bp: i64 => 50..=250,
        pub heart_rate: i64 => 30..=200,
        pub melena: YesNo,
        pub syncope: YesNo,
        pub liver_disease: YesNo,
        pub heart_failure: YesNo,
    }
}

fn bun_points(bun: f64) -> i64 {
    if bun < 18.2 {
        0
    } else if bun <= 22.3 {
        2
    } else if bun <= 28.0 {
        3
    } else if bun <= 70.0 {
        4
    } else {
        6
    }
}

fn hemoglobin_points(hemoglobin: f64, sex: Sex) -> i64 {
    match sex {
        Sex::Male if hemoglobin > 13.0 => 0,
        Sex::Male if hemoglobin >= 12.0 => 1,
        Sex::Male if hemoglobin >= 10.0 => 3,
        Sex::Female if hemoglobin > 12.0 => 0,
        Sex::Female if hemoglobin >= 10.0 => 1,
        _ => 6,
    }
}

fn systolic_points(sbp: i64) -> i64 {
    match sbp {
        110.. => 0,
        100..=109 => 1,
        90..=99 => 2,
        _ => 3,
    }
}

pub fn calculate(input: &GlasgowBlatchfordInput) -> CalcResult {
    let bun = bun_points(input.bun);
    let hemoglobin = hemoglobin_points(input.hemoglobin, input.gender);
    let bp = systolic_points(input.systolic_bp);
    let hr = i64::from(input.heart_rate >= 100);
    let melena = input.melena.points(1);
    let syncope = input.syncope.points(2);
    let liver = input.liver_disease.points(2);
    let heart = input.heart_failure.points(2);
    let total = bun + hemoglobin + bp + hr + melena + syncope + liver + heart;

    let mut details = vec![
        format!("BUN: {} mg/dL ({bun} points)", fixed(input.bun, 1)),
        format!("Hemoglobin: {} g/dL ({hemoglobin} points)", fixed(input.hemoglobin, 1)),
        format!("Systolic BP: {} mmHg ({bp} points)", input.systolic_bp),
        format!("Heart rate: {} bpm ({hr} points)", input.heart_rate),
    ];
    for (points, label) in [
        (melena, "Melena present"),
        (syncope, "Syncope"),
        (liver, "Liver disease"),
        (heart, "Heart failure"),
    ] {
        if points > 0 {
            details.push(format!("{label} ({points} points)"));
        }
    }

    Ok(CalculatorResponse::new(total, "points", interpret(total, &details.join("; ")))
        .with(
            "component_scores",
            json!({
                "bun": bun,
                "hemoglobin": hemoglobin,
                "systolic_bp": bp,
                "heart_rate": hr,
                "melena": melena,
                "syncope": syncope,
                "liver_disease": liver,
                "heart_failure": heart,
            }),
        ))
}

fn interpret(total: i64, summary: &str) -> Interpretation {
    let header = format!("Glasgow-Blatchford Bleeding Score: {total}/23. [{summary}]. ");
    let (stage, description, body) = match total {
        0 => (
            "Low Risk",
            "Very low risk - Safe for outpatient management",
            "Very low risk for needing medical intervention in upper GI bleeding. Patient can be safely managed as outpatient with appropriate follow-up. No immediate need for blood transfusion or endoscopic intervention. Arrange outpatient gastroenterology follow-up within 7-14 days. Provide clear return precautions for worsening symptoms such as increased bleeding, dizziness, weakness, or abdominal pain. Consider proton pump inhibitor therapy and H. pylori testing if indicated.",
        ),
        1..=5 => (
            "Low-Moderate Risk",
            "Low to moderate risk requiring clinical assessment",
            "Low to moderate risk for intervention in upper GI bleeding. Consider hospital admission for clinical observation and assessment. Risk for blood transfusion or endoscopic intervention is present but relatively low. Monitor vital signs, complete blood count, and clinical status closely. Consider early gastroenterology consultation if symptoms worsen or score increases. Initiate proton pump inhibitor therapy. Ensure adequate IV access and type and screen blood products.",
        ),
        6..=11 => (
            "Moderate Risk",
            "Moderate risk requiring hospital admission",
            "Moderate risk for needing medical intervention in upper GI bleeding. Hospital admission recommended with close monitoring in appropriate clinical setting. Significant risk for blood transfusion or endoscopic intervention. Gastroenterology consultation should be obtained promptly. Begin high-dose proton pump inhibitor therapy. Ensure adequate IV access, type and crossmatch blood products, and monitor hemoglobin levels closely. Consider early endoscopy within 24 hours if clinical condition permits.",
        ),
        _ => (
            "High Risk",
            "High risk requiring immediate intervention",
            "High risk for needing immediate medical intervention in upper GI bleeding. Urgent hospital admission required with intensive monitoring. High likelihood of requiring blood transfusion and/or emergency endoscopic intervention. Immediate gastroenterology consultation and consideration for ICU admission. Begin immediate resuscitation with IV fluids and blood products as needed. High-dose proton pump inhibitor therapy. Urgent endoscopy should be considered within 12-24 hours or emergently if hemodynamically unstable. Monitor closely for signs of rebleeding.",
        ),
    };
    Interpretation::new(stage, description, format!("{header}{body}"))
}
