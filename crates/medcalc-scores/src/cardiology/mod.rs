pub mod acc_aha_hf_staging;
pub mod adhere_algorithm;
pub mod cha2ds2_va_score;
pub mod chads2_score;
pub mod chads_65;
pub mod crusade_bleeding_risk;
pub mod emergency_heart_failure_mortality_risk_grade_ehmrg;
pub mod euroscore_ii;
pub mod framingham_risk_score;
pub mod garfield_af;
pub mod grace_acs_risk;
pub mod gwtg_heart_failure_risk_score;
pub mod ie_mortality_risk_score;
pub mod ldl_calculated;
pub mod maggic_risk_calculator;
pub mod score2;
