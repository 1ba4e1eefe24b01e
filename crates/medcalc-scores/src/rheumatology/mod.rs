pub mod acr_eular_gout;
pub mod cdai_rheumatoid_arthritis;
pub mod leiden_clinical_prediction_rule;
