//! Mumtaz score: 30-day readmission risk after a cirrhosis admission.

use medcalc_core::math::{logistic, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct MumtazInput {
        pub age: i64 => 18..=120,
        pub serum_sodium: f64 => 100.0..=160.0,
        pub albumin: f64 => 1.0..=6.0,
        pub length_of_stay: i64 => 1..=365,
        pub previous_admissions_6_months: i64 => 0..=20,
        pub meld_score: i64 => 6..=40,
        pub hepatic_encephalopathy: YesNo,
        pub ascites: YesNo,
    }
}

pub fn calculate(input: &MumtazInput) -> CalcResult {
    let lp = -2.5 + 0.015 * input.age as f64 - 0.04 * input.serum_sodium - 0.8 * input.albumin
        + 0.02 * input.length_of_stay as f64
        + 0.3 * input.previous_admissions_6_months as f64
        + 0.05 * input.meld_score as f64
        + 0.6 * input.hepatic_encephalopathy.points(1) as f64
        + 0.4 * input.ascites.points(1) as f64;
    let risk = logistic(lp) * 100.0;

    Ok(CalculatorResponse::new(round_to(risk, 1), "%", interpret(risk)))
}

fn interpret(risk: f64) -> Interpretation {
    if risk < 15.0 {
        Interpretation::new(
            "Low Risk",
            "Low 30-day readmission risk",
            "LOW READMISSION RISK: The patient has a low probability of 30-day readmission. MANAGEMENT: Standard discharge planning and routine outpatient follow-up may be sufficient. Consider discharge coordination with primary care provider and standard post-discharge care. FOLLOW-UP: Routine outpatient follow-up within 2-4 weeks unless clinically indicated sooner. PATIENT EDUCATION: Provide standard discharge instructions and medication reconciliation. Monitor for signs of decompensation and ensure patient understands when to seek medical attention.",
        )
    } else if risk < 30.0 {
        Interpretation::new(
            "Moderate Risk",
            "Moderate 30-day readmission risk",
            "MODERATE READMISSION RISK: The patient has an intermediate probability of 30-day readmission. MANAGEMENT: Enhanced discharge planning recommended with structured follow-up. Consider early outpatient follow-up within 7-14 days, comprehensive medication reconciliation, and patient education about warning signs. INTERVENTIONS: Assess social support systems, medication adherence, and access to care. Consider care coordination with hepatology if available. MONITORING: Close monitoring for signs of hepatic decompensation, fluid overload, and medication compliance.",
        )
    } else if risk < 50.0 {
        Interpretation::new(
            "High Risk",
            "High 30-day readmission risk",
            "HIGH READMISSION RISK: The patient has a high probability of 30-day readmission requiring intensive interventions. MANAGEMENT: Intensive discharge planning and close follow-up required. Consider early post-discharge contact within 48-72 hours, subspecialty referrals, and home health services. INTERVENTIONS: Implement transitional care programs, medication management services, and care coordination. Ensure hepatology follow-up within 1 week if possible. MONITORING: Frequent monitoring of liver function, fluid status, and nutritional status. Consider telehealth or home monitoring programs.",
        )
    } else {
        Interpretation::new(
            "Very High Risk",
            "Very high 30-day readmission risk",
            "VERY HIGH READMISSION RISK: The patient has a very high probability of 30-day readmission requiring comprehensive interventions. MANAGEMENT: Comprehensive transitional care interventions strongly recommended. Consider prolonged hospitalization if clinical status allows optimization, intensive case management, and immediate subspecialty follow-up. INTERVENTIONS: Implement intensive care coordination, frequent outpatient monitoring, home health services, and consider admission to transitional care unit if available. FOLLOW-UP: Hepatology follow-up within 48-72 hours, primary care within 1 week. MONITORING: Daily to every-other-day monitoring initially with close attention to medication adherence, dietary compliance, and early signs of decompensation.",
        )
    }
}
