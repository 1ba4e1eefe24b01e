mod common;

use common::{assert_close, calc, label, number, rejects};
use medcalc_core::CalcError;
use serde_json::{json, Value};

#[test]
fn cdai_crohns_example() {
    let r = calc(
        "cdai_crohns",
        json!({
            "liquid_stools_week": 14,
            "abdominal_pain_score": "moderate",
            "general_wellbeing_score": "poor",
            "arthritis_arthralgias": "no",
            "iritis_uveitis": "no",
            "erythema_nodosum": "no",
            "anal_fissure_fistula": "yes",
            "other_fistulas": "no",
            "fever": "no",
            "antidiarrheal_use": "yes",
            "abdominal_mass": "questionable",
            "patient_sex": "female",
            "observed_hematocrit": 38.5,
            "current_weight": 58.0,
            "ideal_weight": 65.0,
        }),
    );
    assert_close(number(&r), 154.0, 1e-6);
    assert_eq!(r.stage, "Mild Disease");
}

#[test]
fn cdai_crohns_rejects_negative_stools() {
    rejects(
        "cdai_crohns",
        json!({
            "liquid_stools_week": -1,
            "abdominal_pain_score": "moderate",
            "general_wellbeing_score": "poor",
            "arthritis_arthralgias": "no",
            "iritis_uveitis": "no",
            "erythema_nodosum": "no",
            "anal_fissure_fistula": "yes",
            "other_fistulas": "no",
            "fever": "no",
            "antidiarrheal_use": "yes",
            "abdominal_mass": "questionable",
            "patient_sex": "female",
            "observed_hematocrit": 38.5,
            "current_weight": 58.0,
            "ideal_weight": 65.0,
        }),
    );
}

#[test]
fn child_pugh_example() {
    let r = calc(
        "child_pugh_score",
        json!({
            "total_bilirubin": 2.5,
            "serum_albumin": 3.2,
            "inr": 1.8,
            "ascites": "slight",
            "encephalopathy": "grade_1_2",
        }),
    );
    assert_close(number(&r), 10.0, 1e-6);
    assert_eq!(r.stage, "Child-Pugh C");
}

#[test]
fn child_pugh_class_a() {
    let r = calc(
        "child_pugh_score",
        json!({
            "total_bilirubin": 1.0,
            "serum_albumin": 4.0,
            "inr": 1.1,
            "ascites": "absent",
            "encephalopathy": "none",
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Child-Pugh A");
}

#[test]
fn choles_example() {
    let r = calc(
        "choles_score",
        json!({
            "age": 45,
            "gender": "female",
            "indication": "colic_dyskinesia_polyp",
            "bmi": 28.5,
            "cbd_diameter": "normal",
            "gallbladder_wall": "normal",
            "preoperative_ct": "no",
            "planned_cholangiogram": "no",
            "previous_admissions": 1,
            "asa_grade": 2,
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn clif_c_aclf_example() {
    let r = calc(
        "clif_c_aclf",
        json!({
            "age": 65,
            "white_blood_cell_count": 12.5,
            "bilirubin": 8.2,
            "creatinine": 1.8,
            "renal_replacement_therapy": "no",
            "hepatic_encephalopathy_grade": "grade_1_2",
            "inr": 2.2,
            "mean_arterial_pressure": 68,
            "vasopressors": "no",
            "respiratory_ratio_type": "pao2_fio2",
            "respiratory_ratio_value": 280,
        }),
    );
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn glasgow_blatchford_example() {
    let r = calc(
        "glasgow_blatchford_bleeding_score",
        json!({
            "bun": 25.0,
            "hemoglobin": 11.5,
            "gender": "male",
            "systolic_bp": 105,
            "heart_rate": 95,
            "melena": "yes",
            "syncope": "no",
            "liver_disease": "no",
            "heart_failure": "no",
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn glasgow_blatchford_low_risk_discharge() {
    let r = calc(
        "glasgow_blatchford_bleeding_score",
        json!({
            "bun": 15,
            "hemoglobin": 14,
            "gender": "male",
            "systolic_bp": 120,
            "heart_rate": 80,
            "melena": "no",
            "syncope": "no",
            "liver_disease": "no",
            "heart_failure": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn glasgow_imrie_severe() {
    let r = calc(
        "glasgow_imrie_pancreatitis",
        json!({
            "pao2": 55,
            "age": 62,
            "wbc": 18,
            "calcium": 7.5,
            "urea": 50,
            "ldh": 700,
            "albumin": 2.8,
            "glucose": 220,
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "Severe Pancreatitis");
}

#[test]
fn glasgow_imrie_mild() {
    let r = calc(
        "glasgow_imrie_pancreatitis",
        json!({
            "pao2": 90,
            "age": 40,
            "wbc": 10,
            "calcium": 9.0,
            "urea": 20,
            "ldh": 300,
            "albumin": 4.0,
            "glucose": 110,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Mild Pancreatitis");
}

#[test]
fn i_see_mild() {
    let r = calc(
        "i_see_score",
        json!({
            "symptoms_frequency": "weekly",
            "food_impaction": "none",
            "hospitalization_due_eoe": "no",
            "esophageal_perforation": "no",
            "malnutrition": "none",
            "persistent_inflammation": "none",
            "inflammatory_features": "localized",
            "eosinophil_count": "15_to_60",
            "rings_strictures": "none",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Mild");
}

#[test]
fn i_see_severe() {
    let r = calc(
        "i_see_score",
        json!({
            "symptoms_frequency": "multiple_daily",
            "food_impaction": "adult_with_er",
            "hospitalization_due_eoe": "yes",
            "esophageal_perforation": "no",
            "malnutrition": "present",
            "persistent_inflammation": "present",
            "inflammatory_features": "diffuse",
            "eosinophil_count": "over_60",
            "rings_strictures": "requires_dilation",
        }),
    );
    assert_close(number(&r), 46.0, 1e-6);
    assert_eq!(r.stage, "Severe");
}

#[test]
fn i_see_inactive() {
    let r = calc(
        "i_see_score",
        json!({
            "symptoms_frequency": "none",
            "food_impaction": "none",
            "hospitalization_due_eoe": "no",
            "esophageal_perforation": "no",
            "malnutrition": "none",
            "persistent_inflammation": "none",
            "inflammatory_features": "none",
            "eosinophil_count": "under_15",
            "rings_strictures": "none",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Inactive");
}

#[test]
fn kruis_example() {
    let r = calc(
        "kruis_score_ibs",
        json!({
            "symptoms_present": "yes",
            "duration_over_2_years": "yes",
            "pain_description": "no",
            "alternating_bowel_habits": "yes",
            "abnormal_physical_findings": "no",
            "esr_over_10": "no",
            "wbc_over_10000": "no",
            "low_hemoglobin": "no",
            "history_blood_in_stool": "no",
        }),
    );
    assert_close(number(&r), 64.0, 1e-6);
    assert_eq!(r.stage, "Positive for IBS");
}

#[test]
fn kruis_red_flags_lower_score() {
    let r = calc(
        "kruis_score_ibs",
        json!({
            "symptoms_present": "yes",
            "duration_over_2_years": "yes",
            "pain_description": "no",
            "alternating_bowel_habits": "yes",
            "abnormal_physical_findings": "no",
            "esr_over_10": "yes",
            "wbc_over_10000": "no",
            "low_hemoglobin": "no",
            "history_blood_in_stool": "yes",
        }),
    );
    assert_close(number(&r), -47.0, 1e-6);
    assert_eq!(r.stage, "Negative for IBS");
}

#[test]
fn manning_example() {
    let r = calc(
        "manning_criteria_ibs",
        json!({
            "pain_onset_frequent_bowel_movements": "yes",
            "looser_stools_with_pain_onset": "yes",
            "pain_relief_with_defecation": "yes",
            "noticeable_abdominal_bloating": "no",
            "incomplete_evacuation_sensation": "no",
            "diarrhea_with_mucus": "no",
            "patient_age": 35,
            "weight_loss": "no",
            "blood_in_stools": "no",
            "anemia": "no",
            "fever": "no",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "IBS Likely");
}

#[test]
fn manning_few_criteria() {
    let r = calc(
        "manning_criteria_ibs",
        json!({
            "pain_onset_frequent_bowel_movements": "yes",
            "looser_stools_with_pain_onset": "no",
            "pain_relief_with_defecation": "no",
            "noticeable_abdominal_bloating": "no",
            "incomplete_evacuation_sensation": "no",
            "diarrhea_with_mucus": "no",
            "patient_age": 35,
            "weight_loss": "no",
            "blood_in_stools": "no",
            "anemia": "no",
            "fever": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "IBS Unlikely");
}

#[test]
fn meld_original() {
    let r = calc(
        "meld_combined",
        json!({
            "meld_version": "original",
            "bilirubin": 3.5,
            "creatinine": 1.8,
            "inr": 2.1,
        }),
    );
    assert_close(number(&r), 25.0, 1e-6);
    assert_eq!(r.stage, "Very Severe Disease");
}

#[test]
fn meld_na() {
    let r = calc(
        "meld_combined",
        json!({
            "meld_version": "meld_na",
            "bilirubin": 3.5,
            "creatinine": 1.8,
            "inr": 2.1,
            "sodium": 128,
        }),
    );
    assert_close(number(&r), 29.0, 1e-6);
    assert_eq!(r.stage, "Very Severe Disease");
}

#[test]
fn meld_dialysis_sets_creatinine_to_four() {
    let r = calc(
        "meld_combined",
        json!({
            "meld_version": "original",
            "bilirubin": 1.0,
            "creatinine": 1.0,
            "inr": 1.0,
            "dialysis_twice_in_week": "yes",
        }),
    );
    assert_close(number(&r), 20.0, 1e-6);
    assert_eq!(r.stage, "Very Severe Disease");
}

#[test]
fn meld_na_requires_sodium() {
    rejects(
        "meld_combined",
        json!({
            "meld_version": "meld_na",
            "bilirubin": 3.5,
            "creatinine": 1.8,
            "inr": 2.1,
        }),
    );
}

#[test]
fn montreal_crohns() {
    let r = calc(
        "montreal_classification_ibd",
        json!({
            "disease_type": "crohns_disease",
            "age_at_diagnosis": 25,
            "crohns_location": "L3_ileocolonic",
            "crohns_behavior": "B2_stricturing",
            "perianal_disease": "yes",
        }),
    );
    assert_eq!(label(&r), "A2L3B2p");
    assert_eq!(r.stage, "Crohn's Disease Classification");
}

#[test]
fn montreal_uc() {
    let r = calc(
        "montreal_classification_ibd",
        json!({
            "disease_type": "ulcerative_colitis",
            "age_at_diagnosis": 45,
            "uc_extent": "E2_left_sided",
            "uc_severity": "S2_moderate",
        }),
    );
    assert_eq!(label(&r), "A3E2S2");
    assert_eq!(r.stage, "Ulcerative Colitis Classification");
}

#[test]
fn montreal_crohns_requires_location() {
    rejects(
        "montreal_classification_ibd",
        json!({
            "disease_type": "crohns_disease",
            "age_at_diagnosis": 25,
            "crohns_behavior": "B1_inflammatory",
        }),
    );
}

#[test]
fn mumtaz_example() {
    let r = calc(
        "mumtaz_score",
        json!({
            "age": 65,
            "serum_sodium": 132.0,
            "albumin": 2.8,
            "length_of_stay": 7,
            "previous_admissions_6_months": 2,
            "meld_score": 18,
            "hepatic_encephalopathy": "yes",
            "ascites": "yes",
        }),
    );
    assert_close(number(&r), 0.2, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn rome_iv_proctalgia_example() {
    let r = calc(
        "rome_iv_proctalgia_fugax",
        json!({
            "recurrent_rectal_pain_unrelated_defecation": "yes",
            "episode_duration_seconds_to_30_minutes": "yes",
            "no_anorectal_pain_between_episodes": "yes",
            "exclusion_inflammatory_causes": "yes",
            "exclusion_structural_anorectal_lesions": "yes",
            "exclusion_prostatitis": "yes",
            "exclusion_coccygodynia": "yes",
            "exclusion_pelvic_floor_alterations": "yes",
        }),
    );
    assert_eq!(label(&r), "Criteria Met");
    assert_eq!(r.stage, "Criteria Met");
}

#[test]
fn rome_iv_proctalgia_not_met() {
    let r = calc(
        "rome_iv_proctalgia_fugax",
        json!({
            "recurrent_rectal_pain_unrelated_defecation": "yes",
            "episode_duration_seconds_to_30_minutes": "yes",
            "no_anorectal_pain_between_episodes": "yes",
            "exclusion_inflammatory_causes": "yes",
            "exclusion_structural_anorectal_lesions": "yes",
            "exclusion_prostatitis": "no",
            "exclusion_coccygodynia": "yes",
            "exclusion_pelvic_floor_alterations": "yes",
        }),
    );
    assert_eq!(label(&r), "Criteria Not Met");
    assert_eq!(r.stage, "Criteria Not Met");
}

#[test]
fn rome_iv_rumination_example() {
    let r = calc(
        "rome_iv_rumination_syndrome",
        json!({
            "persistent_recurrent_regurgitation": "yes",
            "regurgitation_not_preceded_by_retching": "yes",
            "exclusion_gi_bleeding": "yes",
            "exclusion_iron_deficiency_anemia": "yes",
            "exclusion_heartburn_reflux": "yes",
            "exclusion_weight_loss": "yes",
            "exclusion_abdominal_mass_lymphadenopathy": "yes",
            "exclusion_dysphagia": "yes",
            "exclusion_persistent_vomiting": "yes",
        }),
    );
    assert_eq!(label(&r), "Positive");
    assert_eq!(r.stage, "Criteria Met");
}

#[test]
fn rome_iv_rumination_not_met() {
    let r = calc(
        "rome_iv_rumination_syndrome",
        json!({
            "persistent_recurrent_regurgitation": "yes",
            "regurgitation_not_preceded_by_retching": "no",
            "exclusion_gi_bleeding": "yes",
            "exclusion_iron_deficiency_anemia": "yes",
            "exclusion_heartburn_reflux": "yes",
            "exclusion_weight_loss": "yes",
            "exclusion_abdominal_mass_lymphadenopathy": "yes",
            "exclusion_dysphagia": "yes",
            "exclusion_persistent_vomiting": "yes",
        }),
    );
    assert_eq!(label(&r), "Negative");
    assert_eq!(r.stage, "Criteria Not Met");
}

#[test]
fn rome_iv_unspecified_example() {
    let r = calc(
        "rome_iv_unspecified_functional_bowel_disorder",
        json!({
            "bowel_symptoms_duration": "yes",
            "symptoms_not_organic": "yes",
            "exclusion_ibs_criteria": "yes",
            "exclusion_functional_constipation": "yes",
            "exclusion_functional_diarrhea": "yes",
            "exclusion_functional_bloating": "yes",
            "exclusion_gi_bleeding": "yes",
            "exclusion_iron_deficiency_anemia": "yes",
            "exclusion_weight_loss": "yes",
            "exclusion_abdominal_mass_lymphadenopathy": "yes",
            "exclusion_family_history_colon_cancer": "yes",
            "exclusion_age_over_50_without_screening": "yes",
            "exclusion_sudden_bowel_habit_change": "yes",
        }),
    );
    assert_eq!(label(&r), "Positive");
    assert_eq!(r.stage, "Criteria Met");
}

#[test]
fn rome_iv_unspecified_not_met() {
    let r = calc(
        "rome_iv_unspecified_functional_bowel_disorder",
        json!({
            "bowel_symptoms_duration": "yes",
            "symptoms_not_organic": "yes",
            "exclusion_ibs_criteria": "no",
            "exclusion_functional_constipation": "yes",
            "exclusion_functional_diarrhea": "yes",
            "exclusion_functional_bloating": "yes",
            "exclusion_gi_bleeding": "yes",
            "exclusion_iron_deficiency_anemia": "yes",
            "exclusion_weight_loss": "yes",
            "exclusion_abdominal_mass_lymphadenopathy": "yes",
            "exclusion_family_history_colon_cancer": "yes",
            "exclusion_age_over_50_without_screening": "yes",
            "exclusion_sudden_bowel_habit_change": "yes",
        }),
    );
    assert_eq!(label(&r), "Negative");
    assert_eq!(r.stage, "Criteria Not Met");
}

#[test]
fn wexner_moderate() {
    let r = calc(
        "wexner_score_ods",
        json!({
            "incontinence_solid_stool": 2,
            "incontinence_liquid_stool": 3,
            "incontinence_gas": 2,
            "wears_pad": 1,
            "lifestyle_alteration": 2,
        }),
    );
    assert_close(number(&r), 10.0, 1e-6);
    assert_eq!(r.stage, "Clinical Incontinence");
}

#[test]
fn wexner_perfect_continence() {
    let r = calc(
        "wexner_score_ods",
        json!({
            "incontinence_solid_stool": 0,
            "incontinence_liquid_stool": 0,
            "incontinence_gas": 0,
            "wears_pad": 0,
            "lifestyle_alteration": 0,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Perfect Continence");
}

#[test]
fn wexner_rejects_item_above_four() {
    rejects(
        "wexner_score_ods",
        json!({
            "incontinence_solid_stool": 5,
            "incontinence_liquid_stool": 0,
            "incontinence_gas": 0,
            "wears_pad": 0,
            "lifestyle_alteration": 0,
        }),
    );
}

#[test]
fn clif_c_aclf_score_is_rounded_to_one_decimal() {
    let r = calc(
        "clif_c_aclf",
        json!({
            "age": 65,
            "white_blood_cell_count": 12.5,
            "bilirubin": 8.2,
            "creatinine": 1.8,
            "renal_replacement_therapy": "no",
            "hepatic_encephalopathy_grade": "grade_1_2",
            "inr": 2.2,
            "mean_arterial_pressure": 68,
            "vasopressors": "no",
            "respiratory_ratio_type": "pao2_fio2",
            "respiratory_ratio_value": 280,
        }),
    );
    assert_close(number(&r), 58.2, 1e-9);
}

#[test]
fn meld_3_0_scales_by_sex_coefficient() {
    let params = json!({
        "meld_version": "meld_3_0",
        "bilirubin": 1.2,
        "creatinine": 1.0,
        "inr": 1.1,
        "sodium": 137,
        "albumin": 3.5,
        "age": 55,
        "sex": "male",
    });
    let r = calc("meld_combined", params.clone());
    assert_eq!(r.result.as_i64(), Some(10));
    assert_eq!(r.stage, "Moderate Disease");

    let mut female = params;
    female["sex"] = json!("female");
    let r = calc("meld_combined", female);
    assert_eq!(r.result.as_i64(), Some(14));
    assert_eq!(r.stage, "Moderate Disease");
}

#[test]
fn meld_3_0_decompensated_patient_hits_cap() {
    let r = calc(
        "meld_combined",
        json!({
            "meld_version": "meld_3_0",
            "bilirubin": 3.5,
            "creatinine": 1.8,
            "inr": 2.1,
            "sodium": 128,
            "albumin": 2.8,
            "age": 55,
            "sex": "male",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(40));
    assert_eq!(r.stage, "Critical Disease");
}

#[test]
fn apri_bands() {
    let r = calc(
        "apri",
        json!({"ast": 80, "ast_upper_limit": 40, "platelet_count": 150}),
    );
    assert_close(number(&r), 1.33, 1e-9);
    assert_eq!(r.stage, "Moderate Risk");
    assert_eq!(r.extra("ast_ratio").unwrap(), 2.0);

    let r = calc(
        "apri",
        json!({"ast": 30, "ast_upper_limit": 40, "platelet_count": 250}),
    );
    assert_close(number(&r), 0.3, 1e-9);
    assert_eq!(r.stage, "Low Risk");

    let r = calc(
        "apri",
        json!({"ast": 200, "ast_upper_limit": 40, "platelet_count": 90}),
    );
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn apri_rejects_zero_platelets() {
    rejects(
        "apri",
        json!({"ast": 80, "ast_upper_limit": 40, "platelet_count": 0}),
    );
}

fn bisap(yes: usize) -> Value {
    let fields = [
        "bun_over_25",
        "impaired_mental_status",
        "sirs",
        "age_over_60",
        "pleural_effusion",
    ];
    let mut params = serde_json::Map::new();
    for (i, field) in fields.iter().enumerate() {
        params.insert(field.to_string(), json!(if i < yes { "yes" } else { "no" }));
    }
    Value::Object(params)
}

#[test]
fn bisap_mortality_by_score() {
    let r = calc("bisap_score", bisap(2));
    assert_eq!(r.result.as_i64(), Some(2));
    assert_eq!(r.stage, "Low Risk");
    assert_eq!(r.extra("mortality_risk").unwrap(), 1.6);

    let r = calc("bisap_score", bisap(3));
    assert_eq!(r.stage, "High Risk");
    assert_eq!(r.extra("mortality_risk").unwrap(), 3.6);

    let r = calc("bisap_score", bisap(5));
    assert_eq!(r.extra("mortality_risk").unwrap(), 9.5);
}

#[test]
fn fatty_liver_index_ruled_in_and_out() {
    let r = calc(
        "fatty_liver_index",
        json!({"triglycerides": 200, "bmi": 32, "ggt": 90, "waist_circumference": 105}),
    );
    assert_close(number(&r), 92.7, 1e-9);
    assert_eq!(r.stage, "High");

    let r = calc(
        "fatty_liver_index",
        json!({"triglycerides": 80, "bmi": 22, "ggt": 20, "waist_circumference": 75}),
    );
    assert_close(number(&r), 8.4, 1e-9);
    assert_eq!(r.stage, "Low");
}

#[test]
fn fib_4_thresholds() {
    let r = calc(
        "fib_4",
        json!({"age": 55, "ast": 80, "alt": 64, "platelet_count": 150}),
    );
    assert_close(number(&r), 3.67, 1e-9);
    assert_eq!(r.stage, "High risk");

    let r = calc(
        "fib_4",
        json!({"age": 60, "ast": 40, "alt": 25, "platelet_count": 250}),
    );
    assert_close(number(&r), 1.92, 1e-9);
    assert_eq!(r.stage, "Indeterminate");
}

#[test]
fn fib_4_rejects_minor() {
    rejects(
        "fib_4",
        json!({"age": 17, "ast": 40, "alt": 25, "platelet_count": 250}),
    );
}

#[test]
fn fib_4_worked_example_is_high_risk() {
    let r = calc(
        "fib_4",
        json!({"age": 50, "ast": 80, "alt": 40, "platelet_count": 150}),
    );
    assert_close(number(&r), 4.22, 1e-9);
    assert_eq!(r.stage, "High risk");
}

#[test]
fn fib_4_lower_cutoff_is_low_risk() {
    // 29 * 5 / (100 * sqrt(1)) lands exactly on 1.45
    let r = calc(
        "fib_4",
        json!({"age": 29, "ast": 5, "alt": 1, "platelet_count": 100}),
    );
    assert_close(number(&r), 1.45, 1e-9);
    assert_eq!(r.stage, "Low risk");
}

#[test]
fn fib_4_age_bounds_are_inclusive() {
    for age in [18, 120] {
        calc(
            "fib_4",
            json!({"age": age, "ast": 40, "alt": 25, "platelet_count": 250}),
        );
    }
    for age in [17, 121] {
        let err = rejects(
            "fib_4",
            json!({"age": age, "ast": 40, "alt": 25, "platelet_count": 250}),
        );
        assert!(matches!(err, CalcError::OutOfRange { ref field, .. } if field == "age"));
    }
}

#[test]
fn fib_4_reports_first_bad_field() {
    let err = rejects(
        "fib_4",
        json!({"age": 5, "ast": 80, "alt": "x", "platelet_count": 150}),
    );
    assert_eq!(err, CalcError::out_of_range("age", 5, 18, 120));
}

#[test]
fn fatty_liver_index_worked_example_is_high() {
    let r = calc(
        "fatty_liver_index",
        json!({"triglycerides": 150, "bmi": 30, "ggt": 50, "waist_circumference": 100}),
    );
    assert_close(number(&r), 78.7, 1e-9);
    assert_eq!(r.stage, "High");
}

#[test]
fn fatty_liver_index_bmi_bounds() {
    let base = |bmi: f64| json!({"triglycerides": 150, "bmi": bmi, "ggt": 50, "waist_circumference": 100});
    calc("fatty_liver_index", base(10.0));
    calc("fatty_liver_index", base(80.0));
    rejects("fatty_liver_index", base(9.9));
    rejects("fatty_liver_index", base(80.1));
}

#[test]
fn apri_cutoff_is_low_risk() {
    let r = calc(
        "apri",
        json!({"ast": 20, "ast_upper_limit": 40, "platelet_count": 100}),
    );
    assert_close(number(&r), 0.5, 1e-9);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn bisap_never_drops_when_a_criterion_is_added() {
    let mut previous = calc("bisap_score", bisap(0));
    for yes in 1..=5 {
        let r = calc("bisap_score", bisap(yes));
        assert_eq!(r.result.as_i64(), previous.result.as_i64().map(|s| s + 1));
        let mortality = |r: &medcalc_core::CalculatorResponse| {
            r.extra("mortality_risk").and_then(Value::as_f64).unwrap()
        };
        assert!(mortality(&r) >= mortality(&previous));
        if previous.stage == "High Risk" {
            assert_eq!(r.stage, "High Risk");
        }
        previous = r;
    }
}
