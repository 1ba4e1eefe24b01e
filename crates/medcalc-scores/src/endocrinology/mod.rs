pub mod diabetes_distress_scale;
pub mod dka_mpm_score;
pub mod idf_dar_fasting_risk_assessment;
pub mod myxedema_coma_diagnostic_score;
