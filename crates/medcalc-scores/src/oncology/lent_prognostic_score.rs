//! LENT prognostic score for malignant pleural effusion: pleural fluid LDH,
//! ECOG performance status, neutrophil-to-lymphocyte ratio and tumor type.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum TumorType {
        MesotheliomaHematologic => "mesothelioma_hematologic",
        BreastGynecologicRenal => "breast_gynecologic_renal",
        LungOther => "lung_other",
    }
}

impl TumorType {
    fn points(self) -> i64 {
        match self {
            TumorType::MesotheliomaHematologic => 0,
            TumorType::BreastGynecologicRenal => 1,
            TumorType::LungOther => 2,
        }
    }

    fn description(self) -> &'static str {
        match self {
            TumorType::MesotheliomaHematologic => "mesothelioma or hematologic malignancy",
            TumorType::BreastGynecologicRenal => "breast, gynecologic, or renal cell carcinoma",
            TumorType::LungOther => "lung cancer or other solid tumor",
        }
    }
}

calculator_input! {
    pub struct LentInput {
        /// U/L
        pub pleural_fluid_ldh: f64 => 0.0..=10000.0,
        pub ecog_performance_status: i64 => 0..=4,
        pub neutrophil_lymphocyte_ratio: f64 => 0.0..=100.0,
        pub tumor_type: TumorType,
    }
}

const LDH_THRESHOLD: f64 = 1500.0;
const NLR_THRESHOLD: f64 = 9.0;
const DAYS_PER_MONTH: f64 = 30.4;

impl LentInput {
    fn contributing_factors(&self) -> Vec<String> {
        let mut factors = Vec::new();
        if self.pleural_fluid_ldh >= LDH_THRESHOLD {
            factors.push(format!(
                "elevated pleural fluid LDH ({} U/L)",
                self.pleural_fluid_ldh
            ));
        }
        if self.ecog_performance_status >= 2 {
            factors.push(format!(
                "impaired functional status (ECOG {})",
                self.ecog_performance_status
            ));
        }
        if self.neutrophil_lymphocyte_ratio >= NLR_THRESHOLD {
            factors.push(format!(
                "elevated neutrophil-to-lymphocyte ratio ({})",
                self.neutrophil_lymphocyte_ratio
            ));
        }
        factors
    }
}

pub fn calculate(input: &LentInput) -> CalcResult {
    let ldh = i64::from(input.pleural_fluid_ldh >= LDH_THRESHOLD);
    // ECOG 4 scores the same as ECOG 3.
    let ecog = input.ecog_performance_status.min(3);
    let nlr = i64::from(input.neutrophil_lymphocyte_ratio >= NLR_THRESHOLD);
    let total = ldh + ecog + nlr + input.tumor_type.points();

    let (stage, description, median_days, recommendations) = match total {
        ..=1 => (
            "Low Risk",
            "Low risk of mortality",
            319,
            "Low risk group with relatively better prognosis. Patients in this group may benefit from more aggressive interventions such as pleurodesis or indwelling pleural catheters. Consider discussing treatment options that may improve quality of life and potentially extend survival. Regular oncology follow-up and symptom management are important.",
        ),
        2..=4 => (
            "Moderate Risk",
            "Moderate risk of mortality",
            130,
            "Moderate risk group with intermediate prognosis. Treatment decisions should be individualized based on patient preferences, performance status, and goals of care. Consider palliative interventions to improve quality of life. Discussion about advance directives and care preferences is appropriate.",
        ),
        _ => (
            "High Risk",
            "High risk of mortality",
            44,
            "High risk group with limited survival expectancy. Focus should be on palliative care and comfort measures. Less invasive interventions may be most appropriate to minimize patient burden. Early palliative care consultation and discussions about end-of-life care preferences are strongly recommended.",
        ),
    };
    let median_months = fixed(median_days as f64 / DAYS_PER_MONTH, 1);

    let factors = input.contributing_factors();
    let tumor = input.tumor_type.description();
    let factor_summary = if factors.is_empty() {
        format!(" Primary tumor type: {tumor}.")
    } else {
        format!(
            " Key prognostic factors include: {}, and {tumor}.",
            factors.join(", ")
        )
    };

    let text = format!(
        "LENT Prognostic Score: {total} points. Risk category: {stage}. Median survival: {median_days} days (approximately {median_months} months). {recommendations}{factor_summary} The LENT score should be used in conjunction with clinical judgment and patient preferences to guide treatment decisions. It is particularly useful for identifying patients who might benefit from less invasive interventions and for facilitating discussions about prognosis and goals of care."
    );

    Ok(
        CalculatorResponse::new(total, "points", Interpretation::new(stage, description, text))
            .with("median_survival_days", median_days),
    )
}
