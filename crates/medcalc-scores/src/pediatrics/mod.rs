mod brue_criteria;
pub mod brue;
pub mod brue_2_0;
pub mod capd;
pub mod cheops_pain_scale;
pub mod dhaka_score;
pub mod glucose_infusion_rate;
pub mod phoenix_sepsis_score;
pub mod wat_1_pediatric_withdrawal;
