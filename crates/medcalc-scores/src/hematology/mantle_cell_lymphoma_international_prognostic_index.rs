//! MIPI for mantle cell lymphoma, with the biological variant (MIPIb) when a
//! Ki-67 index is supplied.
//!
//! MIPI = 0.03535 × age + 0.6978 (ECOG 2-4) + 1.367 × log10(LDH/ULN)
//!        + 0.9393 × log10(WBC)

use medcalc_core::math::{ensure, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const AGE_COEFFICIENT: f64 = 0.03535;
const ECOG_COEFFICIENT: f64 = 0.6978;
const LDH_COEFFICIENT: f64 = 1.367;
const WBC_COEFFICIENT: f64 = 0.9393;
const KI67_COEFFICIENT: f64 = 0.02142;

choice! {
    pub enum EcogGroup {
        ZeroToOne => "0_to_1",
        TwoToFour => "2_to_4",
    }
}

calculator_input! {
    pub struct MipiInput {
        pub age: i64 => 18..=100,
        pub ecog_performance_status: EcogGroup,
        pub serum_ldh: f64,
        pub ldh_upper_limit_normal: f64,
        /// ×10³/μL
        pub white_blood_cell_count: f64,
        pub ki67_index: Option<f64> => 0.0..=100.0,
    }
}

impl MipiInput {
    fn validate(&self) -> CalcResult<()> {
        ensure(
            self.serum_ldh > 0.0 && self.serum_ldh <= 10000.0,
            "Serum LDH must be between 1 and 10000 U/L",
        )?;
        ensure(
            self.ldh_upper_limit_normal > 0.0 && self.ldh_upper_limit_normal <= 400.0,
            "LDH upper limit normal must be between 1 and 400 U/L",
        )?;
        ensure(
            self.white_blood_cell_count > 0.0 && self.white_blood_cell_count <= 500.0,
            "White blood cell count must be between 0.1 and 500 ×10³/μL",
        )?;
        Ok(())
    }
}

pub fn calculate(input: &MipiInput) -> CalcResult {
    input.validate()?;

    let ldh_ratio = input.serum_ldh / input.ldh_upper_limit_normal;
    let age_component = AGE_COEFFICIENT * input.age as f64;
    let ecog_component = match input.ecog_performance_status {
        EcogGroup::TwoToFour => ECOG_COEFFICIENT,
        EcogGroup::ZeroToOne => 0.0,
    };
    let ldh_component = LDH_COEFFICIENT * ldh_ratio.log10();
    let wbc_component = WBC_COEFFICIENT * input.white_blood_cell_count.log10();
    let mipi = age_component + ecog_component + ldh_component + wbc_component;

    let mut components = json!({
        "age_component": round_to(age_component, 3),
        "ecog_component": ecog_component,
        "ldh_component": round_to(ldh_component, 3),
        "wbc_component": round_to(wbc_component, 3),
    });

    let (score, score_type, high_threshold) = match input.ki67_index {
        Some(ki67) => {
            components["ki67_component"] = json!(round_to(KI67_COEFFICIENT * ki67, 3));
            (mipi + KI67_COEFFICIENT * ki67, "MIPIb", 6.5)
        }
        None => (mipi, "MIPI", 6.2),
    };
    let biological = score_type == "MIPIb";

    let interpretation = if score < 5.7 {
        Interpretation::new(
            "Low Risk",
            "Low risk for poor prognosis",
            format!(
                "{score_type} score of {score:.3} indicates low risk group. These patients have a 5-year overall survival rate of approximately 60%. \
                 Consider standard chemotherapy regimens such as R-CHOP or R-bendamustine."
            ),
        )
    } else if score < high_threshold {
        Interpretation::new(
            "Intermediate Risk",
            "Intermediate risk for poor prognosis",
            format!(
                "{score_type} score of {score:.3} indicates intermediate risk group. These patients have a median survival of approximately 51 months{}. \
                 Systemic treatment is typically required at diagnosis. May benefit from consolidation with autologous stem cell transplantation in first remission.",
                if biological { " (58 months for MIPIb)" } else { "" }
            ),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High risk for poor prognosis",
            format!(
                "{score_type} score of {score:.3} indicates high risk group. These patients have a median survival of approximately 29 months{}. \
                 Immediate intensive treatment is required. Consider clinical trial participation or novel targeted therapies.",
                if biological { " (37 months for MIPIb)" } else { "" }
            ),
        )
    };

    let mut response = CalculatorResponse::new(round_to(score, 3), "points", interpretation)
        .with("mipi_score", round_to(mipi, 3))
        .with("score_type", score_type)
        .with("score_components", components)
        .with("ldh_ratio", round_to(ldh_ratio, 2));
    if biological {
        response = response.with("mipib_score", round_to(score, 3));
    }
    Ok(response)
}
