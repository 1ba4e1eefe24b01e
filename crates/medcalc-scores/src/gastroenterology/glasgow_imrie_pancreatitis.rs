//! Glasgow-Imrie (PANCREAS) criteria for acute pancreatitis severity.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct GlasgowImrieInput {
        pub pao2: f64 => 30.0..=150.0,
        pub age: i64 => 18..=120,
        pub wbc: f64 => 1.0..=50.0,
        pub calcium: f64 => 4.0..=15.0,
        pub urea: f64 => 5.0..=200.0,
        pub ldh: i64 => 100..=5000,
        pub albumin: f64 => 1.0..=6.0,
        pub glucose: f64 => 50.0..=800.0,
    }
}

pub fn calculate(input: &GlasgowImrieInput) -> CalcResult {
    let criteria = [
        (input.pao2 < 59.3, "P - PaO2 <59.3 mmHg"),
        (input.age > 55, "A - Age >55 years"),
        (input.wbc > 15.0, "N - Neutrophils (WBC) >15×10⁹/L"),
        (input.calcium < 8.0, "C - Calcium <8 mg/dL"),
        (input.urea > 44.8, "R - Renal function (Urea) >44.8 mg/dL"),
        (input.ldh > 600, "E - Enzymes (LDH) >600 IU/L"),
        (input.albumin < 3.2, "A - Albumin <3.2 g/dL"),
        (input.glucose > 180.0, "S - Sugar (Glucose) >180 mg/dL"),
    ];
    let positive: Vec<&str> = criteria
        .iter()
        .filter(|(met, _)| *met)
        .map(|(_, label)| *label)
        .collect();
    let total = positive.len() as i64;

    let values = [
        format!("PaO2: {} mmHg", fixed(input.pao2, 1)),
        format!("Age: {} years", input.age),
        format!("WBC: {}×10⁹/L", fixed(input.wbc, 1)),
        format!("Calcium: {} mg/dL", fixed(input.calcium, 1)),
        format!("Urea: {} mg/dL", fixed(input.urea, 1)),
        format!("LDH: {} IU/L", input.ldh),
        format!("Albumin: {} g/dL", fixed(input.albumin, 1)),
        format!("Glucose: {} mg/dL", fixed(input.glucose, 1)),
    ]
    .join("; ");
    let positive_summary = if positive.is_empty() {
        "None".to_string()
    } else {
        positive
            .iter()
            .map(|label| format!("{label} ✓"))
            .collect::<Vec<_>>()
            .join("; ")
    };

    Ok(
        CalculatorResponse::new(total, "points", interpret(total, &values, &positive_summary))
            .with("positive_criteria", positive),
    )
}

fn interpret(total: i64, values: &str, positive: &str) -> Interpretation {
    let header = format!("Glasgow-Imrie Score: {total}/8. [{values}]. Positive criteria: {positive}. ");
    let (stage, description, body) = match total {
        ..=2 => (
            "Mild Pancreatitis",
            "Low risk for severe pancreatitis",
            "Low risk for severe pancreatitis (7-16% risk of severe disease). Patient can typically be managed with conservative treatment on general medical ward. Continue supportive care with IV fluids, pain management, and monitoring for clinical deterioration. Consider oral feeding when bowel sounds return and abdominal pain improves. Serial monitoring of laboratory parameters and clinical status. Early mobilization when tolerated. Discharge planning when clinically stable with appropriate follow-up.",
        ),
        3..=4 => (
            "Moderate Pancreatitis",
            "Moderate risk for severe pancreatitis",
            "Moderate risk for severe pancreatitis (20-61% risk of severe disease). Consider ICU monitoring or admission to high-dependency unit for close observation. Implement aggressive fluid resuscitation, optimal pain management, and frequent monitoring for complications. Monitor for signs of organ failure, local complications, and systemic inflammatory response. Consider early ERCP if biliary pancreatitis is suspected. Nutritional support may be required. Multidisciplinary team involvement including gastroenterology.",
        ),
        _ => (
            "Severe Pancreatitis",
            "High risk for severe pancreatitis",
            "High risk for severe pancreatitis (55-100% risk of severe disease). ICU admission typically required for intensive monitoring and organ support. Implement aggressive supportive care including hemodynamic support, respiratory monitoring, and renal function assessment. Monitor closely for multi-organ failure, pancreatic necrosis, and systemic complications. Consider early imaging (contrast-enhanced CT) to assess for necrosis. May require surgical consultation for potential necrosectomy or drainage procedures. Nutritional support essential. Multidisciplinary approach with critical care, gastroenterology, and surgery.",
        ),
    };
    Interpretation::new(stage, description, format!("{header}{body}"))
}
