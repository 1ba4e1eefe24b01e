pub mod crash_score;
pub mod crs_grading;
pub mod ctcae;
pub mod damico_risk_classification;
pub mod gail_model_breast_cancer_risk;
pub mod gi_gpa;
pub mod gleason_score_prostate;
pub mod leibovich_2018_rcc;
pub mod lent_prognostic_score;
pub mod manchester_score_prognosis_sclc;
pub mod psa_doubling_time_calculator;
