pub mod akin;
pub mod body_fluid_balance;
pub mod ckd_prediction_hiv_patients;
pub mod ckid_u25_egfr;
pub mod international_igan_prediction_tool;
pub mod kinetic_egfr;
pub mod ktv_dialysis_adequacy;
