pub mod cryoprecipitate_dosing;
pub mod dash_prediction_score;
pub mod gelf_criteria;
pub mod geneva_vte_prophylaxis;
pub mod gipss_primary_myelofibrosis;
pub mod icc_pmf_diagnostic_criteria;
pub mod impede_vte;
pub mod isth_scc_bleeding_assessment_tool;
pub mod mantle_cell_lymphoma_international_prognostic_index;
pub mod mascc_risk_index_febrile_neutropenia;
pub mod maternal_fetal_hemorrhage_rhd_immune_globulin_dosage;
pub mod maximum_allowable_blood_loss_without_transfusion;
pub mod mayo_alliance_prognostic_system_maps_score;
pub mod mipss70;
pub mod multiple_myeloma_diagnostic_criteria;
pub mod multiple_myeloma_response_criteria;
pub mod reticulocyte_production_index;
pub mod vte_bleed_score;
pub mod who_polycythemia_vera_criteria;
pub mod who_systemic_mastocytosis_criteria;
pub mod wpss_mds;
