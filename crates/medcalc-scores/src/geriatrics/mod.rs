pub mod charlson_comorbidity_index;
pub mod cirs_g;
pub mod clinical_frailty_scale;
