pub mod abg_analyzer;
pub mod curb_65;
pub mod decaf_score;
pub mod expected_peak_expiratory_flow;
pub mod gold_copd_criteria;
pub mod winters_formula_metabolic_acidosis;
