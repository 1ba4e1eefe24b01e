//! Cumulative Illness Rating Scale - Geriatric (CIRS-G).
//!
//! Thirteen organ systems rated 0-4. Besides the total, the severity index
//! averages the affected systems and the comorbidity index counts systems
//! rated 3 or higher.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

calculator_input! {
    pub struct CirsGInput {
        pub heart: i64 => 0..=4,
        pub vascular: i64 => 0..=4,
        pub hematopoietic: i64 => 0..=4,
        pub respiratory: i64 => 0..=4,
        pub eent: i64 => 0..=4,
        pub upper_gi: i64 => 0..=4,
        pub lower_gi: i64 => 0..=4,
        pub liver_pancreas_biliary: i64 => 0..=4,
        pub renal: i64 => 0..=4,
        pub genitourinary: i64 => 0..=4,
        pub musculoskeletal_skin: i64 => 0..=4,
        pub neurologic: i64 => 0..=4,
        pub endocrine_breast: i64 => 0..=4,
    }
}

impl CirsGInput {
    fn systems(&self) -> [(&'static str, &'static str, i64); 13] {
        [
            ("heart", "Heart", self.heart),
            ("vascular", "Vascular", self.vascular),
            ("hematopoietic", "Hematopoietic", self.hematopoietic),
            ("respiratory", "Respiratory", self.respiratory),
            ("eent", "Eent", self.eent),
            ("upper_gi", "Upper Gi", self.upper_gi),
            ("lower_gi", "Lower Gi", self.lower_gi),
            ("liver_pancreas_biliary", "Liver Pancreas Biliary", self.liver_pancreas_biliary),
            ("renal", "Renal", self.renal),
            ("genitourinary", "Genitourinary", self.genitourinary),
            ("musculoskeletal_skin", "Musculoskeletal Skin", self.musculoskeletal_skin),
            ("neurologic", "Neurologic", self.neurologic),
            ("endocrine_breast", "Endocrine Breast", self.endocrine_breast),
        ]
    }
}

fn severity(rating: i64) -> (&'static str, &'static str) {
    match rating {
        1 => ("Mild", "Mild disease with minimal symptoms or well-controlled conditions"),
        2 => ("Moderate", "Moderate disease requiring ongoing management, some functional limitation"),
        3 => ("Severe", "Severe disease significantly impacting daily activities"),
        4 => ("Extremely severe", "Life-threatening condition or end-stage disease"),
        _ => ("No problem", "No disease or symptoms in this organ system"),
    }
}

pub fn calculate(input: &CirsGInput) -> CalcResult {
    let systems = input.systems();
    let total: i64 = systems.iter().map(|(_, _, r)| r).sum();
    let affected = systems.iter().filter(|(_, _, r)| *r > 0).count();
    let severe = systems.iter().filter(|(_, _, r)| *r >= 3).count();
    let severity_index = if affected == 0 { 0.0 } else { total as f64 / affected as f64 };

    let breakdown: Vec<Value> = systems
        .iter()
        .filter(|(_, _, r)| *r > 0)
        .map(|(_, label, rating)| {
            let (level, description) = severity(*rating);
            json!({ "system": label, "score": rating, "severity": level, "description": description })
        })
        .collect();

    let mut recommendations = base_recommendations(total);
    if severe >= 3 {
        recommendations.push("Multiple severe conditions require specialized care coordination");
    }
    if input.heart >= 3 && input.respiratory >= 3 {
        recommendations.push("Cardiopulmonary conditions require close monitoring");
    }
    if input.neurologic >= 3 {
        recommendations.push("Neurologic conditions may require specialized rehabilitation");
    }

    Ok(CalculatorResponse::new(total, "points", interpret(total, severity_index, severe))
        .with("severity_index", round_to(severity_index, 2))
        .with("comorbidity_index", severe)
        .with("affected_systems", affected)
        .with("severe_systems", severe)
        .with("system_breakdown", breakdown)
        .with("clinical_recommendations", recommendations))
}

fn base_recommendations(total: i64) -> Vec<&'static str> {
    match total {
        ..=6 => vec![
            "Focus on preventive care and health maintenance",
            "Annual comprehensive health assessments",
            "Encourage healthy lifestyle and activity",
            "Monitor for early signs of disease progression",
        ],
        7..=12 => vec![
            "Regular monitoring of existing conditions",
            "Optimize management of chronic diseases",
            "Consider comprehensive geriatric assessment",
            "Coordinate care between specialties as needed",
        ],
        13..=20 => vec![
            "Comprehensive geriatric assessment recommended",
            "Multidisciplinary care team coordination",
            "Regular reassessment of disease burden",
            "Consider medication review and optimization",
        ],
        21..=30 => vec![
            "Intensive medical management required",
            "Multidisciplinary team approach essential",
            "Frequent monitoring and reassessment",
            "Consider geriatric or palliative care consultation",
        ],
        _ => vec![
            "Intensive multidisciplinary care required",
            "Consider palliative care consultation",
            "Advance care planning discussions",
            "Focus on comfort and quality of life",
        ],
    }
}

fn interpret(total: i64, severity_index: f64, severe: usize) -> Interpretation {
    match total {
        ..=6 => Interpretation::new(
            "Low Burden",
            "Minimal illness burden",
            format!(
                "CIRS-G total score of {total} indicates minimal illness burden. Patient has good overall health status with few or mild medical conditions. \
                 Prognosis is generally favorable with low risk of adverse outcomes."
            ),
        ),
        7..=12 => Interpretation::new(
            "Mild Burden",
            "Mild illness burden",
            format!(
                "CIRS-G total score of {total} indicates mild illness burden. Patient has some health conditions but generally well-managed. \
                 Severity index of {} suggests conditions are on average mild to moderate. Overall prognosis remains good with appropriate medical management.",
                fixed(severity_index, 2)
            ),
        ),
        13..=20 => Interpretation::new(
            "Moderate Burden",
            "Moderate illness burden",
            format!(
                "CIRS-G total score of {total} indicates moderate illness burden. Patient has multiple health conditions or more severe single conditions. \
                 With {severe} severe conditions (score ≥3), comprehensive care coordination is important."
            ),
        ),
        21..=30 => Interpretation::new(
            "High Burden",
            "High illness burden",
            format!(
                "CIRS-G total score of {total} indicates high illness burden. Patient has multiple severe conditions with {severe} systems scored as severe or extremely severe. \
                 Requires intensive medical management and multidisciplinary care approach."
            ),
        ),
        _ => Interpretation::new(
            "Very High Burden",
            "Very high illness burden",
            format!(
                "CIRS-G total score of {total} indicates very high illness burden. Patient has extensive comorbidities with {severe} severely affected systems. \
                 Consider palliative care consultation and advance care planning."
            ),
        ),
    }
}
