mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::json;

#[test]
fn dash_example() {
    let r = calc(
        "dash_prediction_score",
        json!({
            "d_dimer_positive": "negative",
            "age": 55,
            "sex": "female",
            "hormonal_therapy": "no",
            "vte_type": "dvt_only",
            "anticoagulation_duration": 6,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn dash_high_recurrence() {
    let r = calc(
        "dash_prediction_score",
        json!({
            "d_dimer_positive": "positive",
            "age": 40,
            "sex": "male",
            "hormonal_therapy": "not_applicable",
            "vte_type": "dvt_only",
            "anticoagulation_duration": 6,
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn gelf_low_tumor_burden() {
    let r = calc(
        "gelf_criteria",
        json!({
            "tumor_mass_over_7cm": "no",
            "three_or_more_nodal_sites": "no",
            "systemic_b_symptoms": "no",
            "splenic_enlargement": "no",
            "compression_syndrome": "no",
            "serous_effusion": "no",
            "leukemic_phase": "no",
            "granulocyte_count_low": "no",
            "platelet_count_low": "no",
        }),
    );
    assert_eq!(label(&r), "Active Surveillance Appropriate");
    assert_eq!(r.stage, "Low Tumor Burden");
}

#[test]
fn gelf_single_criterion_warrants_treatment() {
    let r = calc(
        "gelf_criteria",
        json!({
            "tumor_mass_over_7cm": "yes",
            "three_or_more_nodal_sites": "no",
            "systemic_b_symptoms": "no",
            "splenic_enlargement": "no",
            "compression_syndrome": "no",
            "serous_effusion": "no",
            "leukemic_phase": "no",
            "granulocyte_count_low": "no",
            "platelet_count_low": "no",
        }),
    );
    assert_eq!(label(&r), "Immediate Therapy Recommended");
    assert_eq!(r.stage, "High Tumor Burden");
}

#[test]
fn geneva_example() {
    let r = calc(
        "geneva_vte_prophylaxis",
        json!({
            "cardiac_failure": "no",
            "respiratory_failure": "no",
            "recent_stroke": "no",
            "recent_myocardial_infarction": "no",
            "acute_infectious_disease": "yes",
            "acute_rheumatic_disease": "no",
            "active_malignancy": "no",
            "myeloproliferative_syndrome": "no",
            "nephrotic_syndrome": "no",
            "prior_vte_history": "no",
            "known_hypercoagulable_state": "no",
            "immobilization": "yes",
            "recent_travel": "no",
            "age_over_60": "yes",
            "obesity": "no",
            "chronic_venous_insufficiency": "no",
            "pregnancy": "no",
            "hormonal_therapy": "no",
            "dehydration": "yes",
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn geneva_low_risk() {
    let r = calc(
        "geneva_vte_prophylaxis",
        json!({
            "cardiac_failure": "no",
            "respiratory_failure": "no",
            "recent_stroke": "no",
            "recent_myocardial_infarction": "no",
            "acute_infectious_disease": "no",
            "acute_rheumatic_disease": "no",
            "active_malignancy": "no",
            "myeloproliferative_syndrome": "no",
            "nephrotic_syndrome": "no",
            "prior_vte_history": "no",
            "known_hypercoagulable_state": "no",
            "immobilization": "no",
            "recent_travel": "no",
            "age_over_60": "yes",
            "obesity": "no",
            "chronic_venous_insufficiency": "no",
            "pregnancy": "no",
            "hormonal_therapy": "no",
            "dehydration": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn gipss_example() {
    let r = calc(
        "gipss_primary_myelofibrosis",
        json!({
            "karyotype_risk": "favorable",
            "calr_type1_mutation": "yes",
            "asxl1_mutation": "no",
            "srsf2_mutation": "no",
            "u2af1q157_mutation": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn gipss_high_risk() {
    let r = calc(
        "gipss_primary_myelofibrosis",
        json!({
            "karyotype_risk": "very_high_risk",
            "calr_type1_mutation": "no",
            "asxl1_mutation": "yes",
            "srsf2_mutation": "yes",
            "u2af1q157_mutation": "no",
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn icc_pmf_overt() {
    let r = calc(
        "icc_pmf_diagnostic_criteria",
        json!({
            "bone_marrow_megakaryocytic_proliferation": "present",
            "bone_marrow_fibrosis_grade": "grade_2_3",
            "genetic_mutation_present": "yes",
            "reactive_fibrosis_excluded": "yes",
            "other_mpn_excluded": "yes",
            "anemia_present": "yes",
            "leukocytosis_present": "no",
            "splenomegaly_present": "yes",
            "elevated_ldh": "no",
        }),
    );
    assert_eq!(label(&r), "Overt PMF Diagnosed");
    assert_eq!(r.stage, "Overt PMF Diagnosed");
}

#[test]
fn icc_pmf_prefibrotic() {
    let r = calc(
        "icc_pmf_diagnostic_criteria",
        json!({
            "bone_marrow_megakaryocytic_proliferation": "present",
            "bone_marrow_fibrosis_grade": "grade_0_1",
            "genetic_mutation_present": "yes",
            "reactive_fibrosis_excluded": "yes",
            "other_mpn_excluded": "yes",
            "anemia_present": "no",
            "leukocytosis_present": "yes",
            "splenomegaly_present": "no",
            "elevated_ldh": "no",
        }),
    );
    assert_eq!(label(&r), "Pre-PMF Diagnosed");
    assert_eq!(r.stage, "Pre-PMF Diagnosed");
}

#[test]
fn icc_pmf_not_met() {
    let r = calc(
        "icc_pmf_diagnostic_criteria",
        json!({
            "bone_marrow_megakaryocytic_proliferation": "absent",
            "bone_marrow_fibrosis_grade": "grade_0_1",
            "genetic_mutation_present": "yes",
            "reactive_fibrosis_excluded": "yes",
            "other_mpn_excluded": "yes",
            "anemia_present": "yes",
            "leukocytosis_present": "yes",
            "splenomegaly_present": "no",
            "elevated_ldh": "no",
        }),
    );
    assert_eq!(label(&r), "PMF Not Diagnosed");
    assert_eq!(r.stage, "PMF Not Diagnosed");
}

#[test]
fn impede_low_risk() {
    let r = calc(
        "impede_vte",
        json!({
            "immunomodulatory_drug": "yes",
            "bmi_25_or_greater": "no",
            "pelvic_hip_femur_fracture": "no",
            "erythropoiesis_stimulating_agent": "no",
            "doxorubicin_use": "no",
            "dexamethasone_use": "none",
            "asian_pacific_islander": "no",
            "history_of_vte": "no",
            "tunneled_line_cvc": "no",
            "therapeutic_anticoagulation": "no",
            "prophylactic_anticoagulation": "no",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn impede_high_risk() {
    let r = calc(
        "impede_vte",
        json!({
            "immunomodulatory_drug": "yes",
            "bmi_25_or_greater": "yes",
            "pelvic_hip_femur_fracture": "yes",
            "erythropoiesis_stimulating_agent": "yes",
            "doxorubicin_use": "no",
            "dexamethasone_use": "high_dose",
            "asian_pacific_islander": "no",
            "history_of_vte": "yes",
            "tunneled_line_cvc": "yes",
            "therapeutic_anticoagulation": "no",
            "prophylactic_anticoagulation": "no",
        }),
    );
    assert_close(number(&r), 21.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn impede_anticoagulation_subtracts() {
    let r = calc(
        "impede_vte",
        json!({
            "immunomodulatory_drug": "yes",
            "bmi_25_or_greater": "no",
            "pelvic_hip_femur_fracture": "no",
            "erythropoiesis_stimulating_agent": "no",
            "doxorubicin_use": "no",
            "dexamethasone_use": "low_dose",
            "asian_pacific_islander": "yes",
            "history_of_vte": "no",
            "tunneled_line_cvc": "no",
            "therapeutic_anticoagulation": "yes",
            "prophylactic_anticoagulation": "no",
        }),
    );
    assert_close(number(&r), -1.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn isth_bat_example() {
    let r = calc(
        "isth_scc_bleeding_assessment_tool",
        json!({
            "epistaxis": 2,
            "cutaneous_bleeding": 1,
            "minor_wounds": 0,
            "oral_cavity": 1,
            "gi_bleeding": 0,
            "hematuria": 0,
            "tooth_extraction": 0,
            "surgery": 0,
            "menorrhagia": 2,
            "postpartum_hemorrhage": 0,
            "muscle_hematomas": 0,
            "hemarthrosis": 0,
            "cns_bleeding": "never",
            "other_bleeding": 0,
            "age_group": "adult_female",
            "gender": "female",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Adult Female - Atypical");
}

#[test]
fn isth_bat_adult_male_normal() {
    let r = calc(
        "isth_scc_bleeding_assessment_tool",
        json!({
            "epistaxis": 1,
            "cutaneous_bleeding": 1,
            "minor_wounds": 0,
            "oral_cavity": 0,
            "gi_bleeding": 0,
            "hematuria": 0,
            "tooth_extraction": 0,
            "surgery": 0,
            "menorrhagia": 0,
            "postpartum_hemorrhage": 0,
            "muscle_hematomas": 0,
            "hemarthrosis": 0,
            "cns_bleeding": "never",
            "other_bleeding": 0,
            "age_group": "adult_male",
            "gender": "male",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "Adult Male - Typical");
}

#[test]
fn mipi_low_risk() {
    let r = calc(
        "mantle_cell_lymphoma_international_prognostic_index",
        json!({
            "age": 45,
            "ecog_performance_status": "0_to_1",
            "serum_ldh": 180,
            "ldh_upper_limit_normal": 240,
            "white_blood_cell_count": 6.5,
        }),
    );
    assert_close(number(&r), 2.184, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn mipi_biological_index_with_ki67() {
    let r = calc(
        "mantle_cell_lymphoma_international_prognostic_index",
        json!({
            "age": 72,
            "ecog_performance_status": "2_to_4",
            "serum_ldh": 500,
            "ldh_upper_limit_normal": 240,
            "white_blood_cell_count": 15,
            "ki67_index": 45,
        }),
    );
    assert_close(number(&r), 5.747, 1e-6);
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn mipi_rejects_zero_ldh_limit() {
    rejects(
        "mantle_cell_lymphoma_international_prognostic_index",
        json!({
            "age": 45,
            "ecog_performance_status": "0_to_1",
            "serum_ldh": 180,
            "ldh_upper_limit_normal": 0,
            "white_blood_cell_count": 6.5,
        }),
    );
}

#[test]
fn mascc_example() {
    let r = calc(
        "mascc_risk_index_febrile_neutropenia",
        json!({
            "burden_of_illness": "none_mild",
            "hypotension": "no",
            "active_copd": "no",
            "cancer_type": "solid_tumor_or_hematologic_no_prior_fungal",
            "dehydration_requiring_iv": "no",
            "fever_onset_status": "outpatient",
            "patient_age": 45,
        }),
    );
    assert_close(number(&r), 26.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn mascc_high_risk() {
    let r = calc(
        "mascc_risk_index_febrile_neutropenia",
        json!({
            "burden_of_illness": "severe",
            "hypotension": "yes",
            "active_copd": "yes",
            "cancer_type": "hematologic_with_prior_fungal",
            "dehydration_requiring_iv": "yes",
            "fever_onset_status": "inpatient",
            "patient_age": 70,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn rhig_small_hemorrhage() {
    let r = calc(
        "maternal_fetal_hemorrhage_rhd_immune_globulin_dosage",
        json!({
            "maternal_blood_volume": 5000,
            "fetal_cell_percentage": 0.3,
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "Moderate Hemorrhage");
}

#[test]
fn rhig_large_hemorrhage() {
    let r = calc(
        "maternal_fetal_hemorrhage_rhd_immune_globulin_dosage",
        json!({
            "maternal_blood_volume": 5000,
            "fetal_cell_percentage": 2.0,
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Large Hemorrhage");
}

#[test]
fn rhig_rejects_negative_percentage() {
    rejects(
        "maternal_fetal_hemorrhage_rhd_immune_globulin_dosage",
        json!({
            "maternal_blood_volume": 5000,
            "fetal_cell_percentage": -0.1,
        }),
    );
}

#[test]
fn mabl_example() {
    let r = calc(
        "maximum_allowable_blood_loss_without_transfusion",
        json!({
            "age_group": "adult_woman",
            "body_weight": 70.0,
            "initial_hemoglobin": 12.5,
            "final_hemoglobin": 8.0,
        }),
    );
    assert_close(number(&r), 1997.6, 1e-6);
    assert_eq!(r.stage, "High Volume Loss");
}

#[test]
fn mabl_infant() {
    let r = calc(
        "maximum_allowable_blood_loss_without_transfusion",
        json!({
            "age_group": "infant",
            "body_weight": 8.0,
            "initial_hemoglobin": 11.0,
            "final_hemoglobin": 8.0,
        }),
    );
    assert_close(number(&r), 202.1, 1e-6);
    assert_eq!(r.stage, "Low Volume Loss");
}

#[test]
fn maps_example() {
    let r = calc(
        "mayo_alliance_prognostic_system_maps_score",
        json!({
            "sm_type": "indolent_smoldering_sm",
            "patient_age": 55,
            "platelet_count": 180,
            "serum_alp": "normal",
            "adverse_mutations": "absent",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn maps_high_risk() {
    let r = calc(
        "mayo_alliance_prognostic_system_maps_score",
        json!({
            "sm_type": "advanced_sm",
            "patient_age": 70,
            "platelet_count": 90,
            "serum_alp": "elevated",
            "adverse_mutations": "present",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn mipss70_example() {
    let r = calc(
        "mipss70",
        json!({
            "age_years": 68,
            "hemoglobin": 9.2,
            "white_blood_count": 28.5,
            "platelet_count": 85.0,
            "circulating_blasts": 3.5,
            "constitutional_symptoms": "yes",
            "high_molecular_risk_mutations": "yes",
            "very_high_molecular_risk": "no",
        }),
    );
    assert_close(number(&r), 10.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn mipss70_low_risk() {
    let r = calc(
        "mipss70",
        json!({
            "age_years": 68,
            "hemoglobin": 12,
            "white_blood_count": 10,
            "platelet_count": 250,
            "circulating_blasts": 0,
            "constitutional_symptoms": "no",
            "high_molecular_risk_mutations": "no",
            "very_high_molecular_risk": "no",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn mm_diagnostic_example() {
    let r = calc(
        "multiple_myeloma_diagnostic_criteria",
        json!({
            "clonal_plasma_cells_bone_marrow": "yes",
            "biopsy_proven_plasmacytoma": "no",
            "hypercalcemia": "no",
            "renal_insufficiency": "yes",
            "anemia": "yes",
            "bone_lesions": "no",
            "plasma_cells_60_percent": "no",
            "light_chain_ratio": "no",
            "focal_mri_lesions": "no",
        }),
    );
    assert_eq!(label(&r), "Multiple Myeloma");
    assert_eq!(r.stage, "Multiple Myeloma");
}

#[test]
fn mm_diagnostic_biomarker_only() {
    let r = calc(
        "multiple_myeloma_diagnostic_criteria",
        json!({
            "clonal_plasma_cells_bone_marrow": "yes",
            "biopsy_proven_plasmacytoma": "no",
            "hypercalcemia": "no",
            "renal_insufficiency": "no",
            "anemia": "no",
            "bone_lesions": "no",
            "plasma_cells_60_percent": "yes",
            "light_chain_ratio": "no",
            "focal_mri_lesions": "no",
        }),
    );
    assert_eq!(label(&r), "Multiple Myeloma");
    assert_eq!(r.stage, "Multiple Myeloma");
}

#[test]
fn mm_diagnostic_no_clonal_cells() {
    let r = calc(
        "multiple_myeloma_diagnostic_criteria",
        json!({
            "clonal_plasma_cells_bone_marrow": "no",
            "biopsy_proven_plasmacytoma": "no",
            "hypercalcemia": "no",
            "renal_insufficiency": "yes",
            "anemia": "yes",
            "bone_lesions": "no",
            "plasma_cells_60_percent": "no",
            "light_chain_ratio": "no",
            "focal_mri_lesions": "no",
        }),
    );
    assert_eq!(label(&r), "Not Diagnostic");
    assert_eq!(r.stage, "Not Diagnostic");
}

#[test]
fn mm_response_example() {
    let r = calc(
        "multiple_myeloma_response_criteria",
        json!({
            "serum_immunofixation": "negative",
            "urine_immunofixation": "negative",
            "bone_marrow_plasma_cells": 3.2,
            "soft_tissue_plasmacytomas": "absent",
            "free_light_chain_ratio": 0.8,
            "clonal_cells_bone_marrow": "absent",
            "serum_m_protein_reduction": 95.0,
            "urine_m_protein_24h": 50.0,
            "serum_electrophoresis_detectable": "no",
            "plasmacytoma_reduction": 75.0,
        }),
    );
    assert_eq!(label(&r), "Stringent Complete Response (sCR)");
    assert_eq!(r.stage, "Stringent Complete Response (sCR)");
}

#[test]
fn mm_response_persistent_disease() {
    let r = calc(
        "multiple_myeloma_response_criteria",
        json!({
            "serum_immunofixation": "positive",
            "urine_immunofixation": "positive",
            "bone_marrow_plasma_cells": 12,
            "soft_tissue_plasmacytomas": "absent",
            "free_light_chain_ratio": 3.0,
            "clonal_cells_bone_marrow": "present",
            "serum_m_protein_reduction": 60,
            "urine_m_protein_24h": 400,
            "serum_electrophoresis_detectable": "yes",
            "plasmacytoma_reduction": 55,
        }),
    );
    assert_eq!(label(&r), "Stable Disease (SD)");
    assert_eq!(r.stage, "Stable Disease (SD)");
}

#[test]
fn rpi_example() {
    let r = calc(
        "reticulocyte_production_index",
        json!({
            "reticulocyte_percentage": 2.5,
            "measured_hematocrit": 25.0,
            "normal_hematocrit": 45.0,
            "rbc_count": 2.8,
        }),
    );
    assert_close(number(&r), 0.93, 1e-6);
    assert_eq!(r.stage, "Inadequate Response");
}

#[test]
fn rpi_adequate_response() {
    let r = calc(
        "reticulocyte_production_index",
        json!({
            "reticulocyte_percentage": 8.0,
            "measured_hematocrit": 30.0,
            "normal_hematocrit": 45.0,
            "rbc_count": 2.8,
        }),
    );
    assert_close(number(&r), 3.56, 1e-6);
    assert_eq!(r.stage, "Appropriate Response");
}

#[test]
fn vte_bleed_example() {
    let r = calc(
        "vte_bleed_score",
        json!({
            "age_60_or_older": "yes",
            "active_cancer": "no",
            "male_uncontrolled_hypertension": "no",
            "anemia": "yes",
            "history_of_bleeding": "no",
            "renal_dysfunction": "no",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Elevated Risk");
}

#[test]
fn vte_bleed_low() {
    let r = calc(
        "vte_bleed_score",
        json!({
            "age_60_or_older": "no",
            "active_cancer": "no",
            "male_uncontrolled_hypertension": "no",
            "anemia": "no",
            "history_of_bleeding": "no",
            "renal_dysfunction": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn who_pv_example() {
    let r = calc(
        "who_polycythemia_vera_criteria",
        json!({
            "gender": "male",
            "hemoglobin": 17.2,
            "hematocrit": 52.5,
            "red_cell_mass_elevated": "not_measured",
            "bone_marrow_hypercellular": "yes",
            "jak2_mutation": "jak2v617f_positive",
            "erythropoietin_level": "subnormal",
        }),
    );
    assert_eq!(label(&r), "diagnosis_met");
    assert_eq!(r.stage, "Polycythemia Vera Diagnosed");
}

#[test]
fn who_pv_not_met() {
    let r = calc(
        "who_polycythemia_vera_criteria",
        json!({
            "gender": "male",
            "hemoglobin": 15.0,
            "hematocrit": 45.0,
            "red_cell_mass_elevated": "not_measured",
            "bone_marrow_hypercellular": "no",
            "jak2_mutation": "negative",
            "erythropoietin_level": "subnormal",
        }),
    );
    assert_eq!(label(&r), "criteria_not_met");
    assert_eq!(r.stage, "Criteria Not Met");
}

#[test]
fn who_sm_example() {
    let r = calc(
        "who_systemic_mastocytosis_criteria",
        json!({
            "multifocal_mast_cell_infiltrates": "yes",
            "atypical_mast_cell_morphology": "yes",
            "kit_mutation": "d816v_positive",
            "aberrant_cd_expression": "yes",
            "serum_tryptase": 45.2,
            "associated_myeloid_neoplasm": "no",
        }),
    );
    assert_eq!(label(&r), "diagnosis_met");
    assert_eq!(r.stage, "Systemic Mastocytosis Diagnosed");
}

#[test]
fn who_sm_minor_criteria_only() {
    let r = calc(
        "who_systemic_mastocytosis_criteria",
        json!({
            "multifocal_mast_cell_infiltrates": "no",
            "atypical_mast_cell_morphology": "yes",
            "kit_mutation": "negative",
            "aberrant_cd_expression": "yes",
            "serum_tryptase": 12.0,
            "associated_myeloid_neoplasm": "no",
        }),
    );
    assert_eq!(label(&r), "probable_sm");
    assert_eq!(r.stage, "Probable Systemic Mastocytosis");
}

#[test]
fn wpss_example() {
    let r = calc(
        "wpss_mds",
        json!({
            "who_category": "rcmd_rcmd_rs",
            "karyotype": "good",
            "transfusion_requirement": "none",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn wpss_very_high() {
    let r = calc(
        "wpss_mds",
        json!({
            "who_category": "raeb_2",
            "karyotype": "poor",
            "transfusion_requirement": "regular",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}


#[test]
fn cryoprecipitate_female_patient_needs_small_dose() {
    let r = calc(
        "cryoprecipitate_dosing",
        json!({
            "patient_weight": 70,
            "patient_sex": "female",
            "hematocrit": 0.38,
            "current_fibrinogen": 85,
            "target_fibrinogen": 200,
        }),
    );
    // 70 × 0.065 × 0.62 = 2.821 dL; 115 × 2.821 / 200 = 1.62
    assert_eq!(r.result.as_i64(), Some(2));
    assert_eq!(r.unit, "units");
    assert_eq!(r.stage, "Low Dose");
    let details = r.extra("calculation_details").unwrap();
    assert_eq!(details["plasma_volume_dL"], 2.8);
    assert_eq!(details["fibrinogen_per_unit_mg"], 200.0);
    let considerations = r.extra("clinical_considerations").unwrap();
    assert!(considerations
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c == "Target appropriate for major bleeding or surgery"));
}

#[test]
fn cryoprecipitate_large_deficit_is_high_dose() {
    let r = calc(
        "cryoprecipitate_dosing",
        json!({
            "patient_weight": 200,
            "patient_sex": "male",
            "hematocrit": 0.40,
            "current_fibrinogen": 40,
            "target_fibrinogen": 500,
        }),
    );
    // 200 × 0.07 × 0.60 = 8.4 dL; 460 × 8.4 / 200 = 19.32
    assert_eq!(r.result.as_i64(), Some(20));
    assert_eq!(r.stage, "High Dose");
    assert_eq!(r.extra("calculation_details").unwrap()["plasma_volume_dL"], 8.4);
    let considerations = r.extra("clinical_considerations").unwrap();
    let considerations = considerations.as_array().unwrap();
    assert!(considerations
        .iter()
        .any(|c| c == "CRITICAL: Current fibrinogen <50 mg/dL requires urgent replacement"));
    assert!(considerations
        .iter()
        .any(|c| c == "Consider requesting 2 pooled units (20 units) for convenience"));
}

#[test]
fn cryoprecipitate_small_top_up_is_low_dose() {
    let r = calc(
        "cryoprecipitate_dosing",
        json!({
            "patient_weight": 60,
            "patient_sex": "male",
            "hematocrit": 0.40,
            "current_fibrinogen": 140,
            "target_fibrinogen": 150,
            "fibrinogen_per_unit": 250,
        }),
    );
    // 60 × 0.07 × 0.60 = 2.52 dL; 10 × 2.52 / 250 = 0.1008
    assert_eq!(r.result.as_i64(), Some(1));
    assert_eq!(r.stage, "Low Dose");
    assert!(r.interpretation.contains("from 140 to 150 mg/dL"));
}

#[test]
fn cryoprecipitate_rejects_target_not_above_current() {
    rejects(
        "cryoprecipitate_dosing",
        json!({
            "patient_weight": 70,
            "patient_sex": "male",
            "hematocrit": 0.40,
            "current_fibrinogen": 200,
            "target_fibrinogen": 200,
        }),
    );
}
