//! Manchester score for small cell lung cancer: six adverse factors, one
//! point each.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum LdhLevel {
        Normal => "normal",
        Elevated => "elevated",
    }
}

choice! {
    pub enum AlpLevel {
        Normal => "normal",
        UpTo1_5TimesNormal => "1.1_to_1.5_times_normal",
        Above1_5TimesNormal => "greater_than_1.5_times_normal",
    }
}

choice! {
    pub enum DiseaseStage {
        Limited => "limited",
        Extensive => "extensive",
    }
}

calculator_input! {
    pub struct ManchesterInput {
        pub serum_ldh: LdhLevel,
        /// mmol/L
        pub serum_sodium: f64 => 110.0..=160.0,
        pub serum_alkaline_phosphatase: AlpLevel,
        /// mmol/L
        pub serum_bicarbonate: f64 => 10.0..=40.0,
        pub disease_stage: DiseaseStage,
        pub karnofsky_performance_status: i64 => 0..=100,
    }
}

const SODIUM_THRESHOLD: f64 = 132.0;
const BICARBONATE_THRESHOLD: f64 = 24.0;
const KPS_THRESHOLD: i64 = 50;

pub fn calculate(input: &ManchesterInput) -> CalcResult {
    let ldh = i64::from(input.serum_ldh == LdhLevel::Elevated);
    let sodium = i64::from(input.serum_sodium < SODIUM_THRESHOLD);
    let alp = i64::from(input.serum_alkaline_phosphatase == AlpLevel::Above1_5TimesNormal);
    let bicarbonate = i64::from(input.serum_bicarbonate < BICARBONATE_THRESHOLD);
    let stage = i64::from(input.disease_stage == DiseaseStage::Extensive);
    let kps = i64::from(input.karnofsky_performance_status <= KPS_THRESHOLD);
    let total = ldh + sodium + alp + bicarbonate + stage + kps;

    let (interpretation, survival) = match total {
        ..=1 => (
            Interpretation::new(
                "Good Prognosis",
                "Good prognostic group with best survival outcomes",
                "Good prognosis with 16.2% two-year survival rate. This prognostic group contains all long-term survivors identified in the original Manchester study cohort. Consider standard chemotherapy regimens with curative intent. Patients in this group are suitable candidates for aggressive treatment approaches including concurrent chemoradiotherapy for limited stage disease. Treatment decisions should focus on achieving maximum therapeutic benefit while maintaining acceptable quality of life. Regular monitoring for treatment response and toxicity is recommended.",
            ),
            json!({
                "two_year_survival": "16.2%",
                "prognostic_group": "Good",
                "contains_long_term_survivors": "Yes",
                "treatment_approach": "Curative intent",
            }),
        ),
        2..=3 => (
            Interpretation::new(
                "Medium Prognosis",
                "Intermediate prognostic group with moderate survival outcomes",
                "Medium prognosis with 2.5% two-year survival rate. Consider standard treatment protocols with careful monitoring for treatment tolerance and response. Balance treatment intensity with quality of life considerations, as cure rates are low. May benefit from supportive care measures alongside chemotherapy. Treatment decisions should involve thorough discussion with patient and family regarding goals of care, potential benefits, and expected outcomes. Consider palliative care consultation early in the treatment course.",
            ),
            json!({
                "two_year_survival": "2.5%",
                "prognostic_group": "Medium",
                "contains_long_term_survivors": "Rare",
                "treatment_approach": "Standard with monitoring",
            }),
        ),
        _ => (
            Interpretation::new(
                "Poor Prognosis",
                "Poor prognostic group with worst survival outcomes",
                "Poor prognosis with 0% two-year survival rate in the original study cohort. No patients in this prognostic group survived longer than one year. Consider palliative care approach with primary emphasis on symptom management and quality of life optimization. Treatment decisions should focus on palliation rather than cure. Early palliative care referral is strongly recommended. Any chemotherapy should be given with palliative intent, and treatment should be discontinued if no benefit or unacceptable toxicity occurs.",
            ),
            json!({
                "two_year_survival": "0%",
                "prognostic_group": "Poor",
                "contains_long_term_survivors": "No",
                "treatment_approach": "Palliative focus",
            }),
        ),
    };

    let sodium_band = if sodium == 1 { "<132" } else { "≥132" };
    let bicarbonate_band = if bicarbonate == 1 { "<24" } else { "≥24" };
    let kps_band = if kps == 1 { "≤50" } else { ">50" };

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("ldh_score", ldh)
        .with("sodium_score", sodium)
        .with("alp_score", alp)
        .with("bicarbonate_score", bicarbonate)
        .with("stage_score", stage)
        .with("kps_score", kps)
        .with("ldh_category", format!("LDH {}", input.serum_ldh))
        .with(
            "sodium_category",
            format!("Sodium {sodium_band} mmol/L: {}", input.serum_sodium),
        )
        .with(
            "alp_category",
            format!(
                "Alkaline phosphatase {}",
                input.serum_alkaline_phosphatase.to_string().replace('_', " ")
            ),
        )
        .with(
            "bicarbonate_category",
            format!("Bicarbonate {bicarbonate_band} mmol/L: {}", input.serum_bicarbonate),
        )
        .with("stage_category", format!("Disease stage: {}", input.disease_stage))
        .with(
            "kps_category",
            format!(
                "Karnofsky Performance Status {kps_band}: {}",
                input.karnofsky_performance_status
            ),
        )
        .with("survival_data", survival))
}
