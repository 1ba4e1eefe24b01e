pub mod bush_francis_catatonia_rating_scale;
pub mod cas;
pub mod ciwa_ar_alcohol_withdrawal;
pub mod comm;
pub mod cows_opiate_withdrawal;
pub mod edinburgh_postnatal_depression_scale;
pub mod embed;
pub mod gds_15;
pub mod major_depression_index;
pub mod qids_sr16;
