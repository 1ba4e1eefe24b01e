//! GIPSS: genetically inspired prognostic scoring for primary myelofibrosis.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum KaryotypeRisk {
        Favorable => "favorable",
        Unfavorable => "unfavorable",
        VeryHighRisk => "very_high_risk",
    }
}

impl KaryotypeRisk {
    fn points(self) -> i64 {
        match self {
            KaryotypeRisk::Favorable => 0,
            KaryotypeRisk::Unfavorable => 1,
            KaryotypeRisk::VeryHighRisk => 2,
        }
    }
}

calculator_input! {
    pub struct GipssInput {
        pub karyotype_risk: KaryotypeRisk,
        pub calr_type1_mutation: YesNo,
        pub asxl1_mutation: YesNo,
        pub srsf2_mutation: YesNo,
        pub u2af1q157_mutation: YesNo,
    }
}

/// (stage, description, median survival years, 5-year survival %, guidance)
fn band(score: i64) -> (&'static str, &'static str, f64, i64, &'static str) {
    match score {
        0 => (
            "Low Risk",
            "Excellent prognosis",
            26.4,
            94,
            "Excellent long-term prognosis with minimal therapeutic intervention indicated. \
             Consider long-term observation with regular monitoring every 6-12 months. \
             Allogeneic stem cell transplant not typically indicated.",
        ),
        1 => (
            "Intermediate-1 Risk",
            "Good prognosis",
            8.0,
            73,
            "Good prognosis with symptom-directed therapy approach. Regular monitoring every 3-6 months recommended. \
             Consider JAK inhibitor therapy for symptomatic disease or splenomegaly.",
        ),
        2 => (
            "Intermediate-2 Risk",
            "Intermediate prognosis",
            4.2,
            40,
            "Intermediate prognosis requiring active treatment consideration. \
             Evaluate for allogeneic stem cell transplant candidacy in appropriate patients. \
             Consider JAK inhibitor therapy for symptom control. Regular monitoring every 2-3 months.",
        ),
        _ => (
            "High Risk",
            "Poor prognosis",
            2.0,
            14,
            "Poor prognosis with strong consideration for allogeneic stem cell transplant if patient is eligible. \
             Urgent hematology/oncology referral for transplant evaluation. Consider clinical trial participation.",
        ),
    }
}

pub fn calculate(input: &GipssInput) -> CalcResult {
    let karyotype_points = input.karyotype_risk.points();
    // Absence of a type 1/like CALR mutation is the adverse finding.
    let calr_points = if input.calr_type1_mutation.is_yes() { 0 } else { 1 };
    let asxl1_points = input.asxl1_mutation.points(1);
    let srsf2_points = input.srsf2_mutation.points(1);
    let u2af1_points = input.u2af1q157_mutation.points(1);
    let score = karyotype_points + calr_points + asxl1_points + srsf2_points + u2af1_points;

    let mut factors = vec![match input.karyotype_risk {
        KaryotypeRisk::VeryHighRisk => "very high-risk karyotype".to_string(),
        KaryotypeRisk::Unfavorable => "unfavorable karyotype".to_string(),
        KaryotypeRisk::Favorable => "favorable karyotype".to_string(),
    }];
    factors.push(if input.calr_type1_mutation.is_yes() {
        "presence of type 1/like CALR mutation".to_string()
    } else {
        "absence of type 1/like CALR mutation".to_string()
    });
    let mutations: Vec<&str> = [
        (input.asxl1_mutation, "ASXL1"),
        (input.srsf2_mutation, "SRSF2"),
        (input.u2af1q157_mutation, "U2AF1Q157"),
    ]
    .into_iter()
    .filter(|(answer, _)| answer.is_yes())
    .map(|(_, gene)| gene)
    .collect();
    factors.push(if mutations.is_empty() {
        "absence of high molecular risk mutations".to_string()
    } else {
        format!("presence of {} mutation(s)", mutations.join(", "))
    });

    let (stage, description, median_years, five_year, guidance) = band(score);
    let text = format!(
        "GIPSS score of {score} points based on: {}. Risk category: {stage}. Median overall survival: {} years. \
         5-year survival: {five_year}%. {guidance}",
        factors.join("; "),
        fixed(median_years, 1),
    );

    Ok(CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text))
        .with("median_survival_years", median_years)
        .with("five_year_survival_percent", five_year)
        .with("karyotype_points", karyotype_points)
        .with("calr_points", calr_points)
        .with("asxl1_points", asxl1_points)
        .with("srsf2_points", srsf2_points)
        .with("u2af1q157_points", u2af1_points))
}
