mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::json;

#[test]
fn abg_metabolic_acidosis_with_appropriate_compensation() {
    let r = calc("abg_analyzer", json!({"ph": 7.25, "pco2": 30, "hco3": 14}));
    assert_eq!(label(&r), "Metabolic Acidosis");
    assert_eq!(r.unit, "");
    assert_eq!(r.stage, "Metabolic Acidosis");
    assert!(r.interpretation.contains("Appropriate respiratory compensation (PCO2 30.0, expected 29.0±2)"));
    assert!(r.interpretation.ends_with("assessing for underlying causes."));
}

#[test]
fn abg_normal_ph_reports_hypoxemia() {
    let r = calc("abg_analyzer", json!({"ph": 7.40, "pco2": 40, "hco3": 24, "po2": 55}));
    assert_eq!(label(&r), "Normal pH");
    assert_eq!(r.stage_description, "pH within normal range");
    assert_eq!(
        r.extra("detailed_analysis").unwrap()["oxygenation"]["severity"],
        "Severe hypoxemia"
    );
}

#[test]
fn abg_mixed_disorder_category() {
    let r = calc("abg_analyzer", json!({"ph": 7.30, "pco2": 40, "hco3": 24}));
    assert_eq!(label(&r), "Mixed Acid-Base Disorder");
    assert_eq!(r.stage, "Mixed Disorder");
}

#[test]
fn abg_rejects_out_of_range_ph() {
    rejects("abg_analyzer", json!({"ph": 6.79, "pco2": 40, "hco3": 24}));
    rejects("abg_analyzer", json!({"ph": 7.4, "pco2": 40, "hco3": 24, "fio2": 0.2}));
}

#[test]
fn curb_65_worked_example() {
    let r = calc(
        "curb_65",
        json!({
            "confusion": false,
            "urea": 25.0,
            "respiratory_rate": 28,
            "systolic_bp": 85,
            "diastolic_bp": 55,
            "age": 70,
        }),
    );
    assert_eq!(r.result.as_i64(), Some(3));
    assert_eq!(r.stage, "Alto Risco");
    assert_eq!(r.unit, "points");
    let criteria = r.extra("criteria").unwrap();
    assert_eq!(criteria["urea"], 1);
    assert_eq!(criteria["confusion"], 0);
}

#[test]
fn curb_65_bands() {
    let base = json!({
        "confusion": false,
        "urea": 15.0,
        "respiratory_rate": 18,
        "systolic_bp": 120,
        "diastolic_bp": 80,
        "age": 40,
    });
    assert_eq!(calc("curb_65", base.clone()).stage, "Baixo Risco");

    let mut two = base.clone();
    two["confusion"] = json!(true);
    two["age"] = json!(65);
    let r = calc("curb_65", two);
    assert_eq!(r.result.as_i64(), Some(2));
    assert_eq!(r.stage, "Risco Moderado");
}

#[test]
fn curb_65_rejects_zero_urea() {
    rejects(
        "curb_65",
        json!({
            "confusion": false,
            "urea": 0.0,
            "respiratory_rate": 18,
            "systolic_bp": 120,
            "diastolic_bp": 80,
            "age": 40,
        }),
    );
}

#[test]
fn decaf_high_risk() {
    let r = calc(
        "decaf_score",
        json!({
            "emrcd_dyspnea": "too_dyspneic_dependent",
            "eosinopenia": "yes",
            "consolidation": "no",
            "acidemia": "yes",
            "atrial_fibrillation": "no",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(4));
    assert_eq!(r.stage, "High Risk");
    assert_eq!(r.extra("mortality_risk").unwrap(), "31%");
    assert_eq!(
        r.interpretation,
        "DECAF score of 4 indicates High Risk with 15.3-50% in-hospital mortality risk. Strong consideration for escalation of care (HDU/ICU) or palliative care discussions depending on goals of care."
    );
}

#[test]
fn decaf_intermediate_at_two() {
    let r = calc(
        "decaf_score",
        json!({
            "emrcd_dyspnea": "not_too_dyspneic",
            "eosinopenia": "yes",
            "consolidation": "yes",
            "acidemia": "no",
            "atrial_fibrillation": "no",
            "patient_age": 70,
        }),
    );
    assert_eq!(r.result.as_i64(), Some(2));
    assert_eq!(r.stage, "Intermediate Risk");
    assert_eq!(r.extra("mortality_details").unwrap()["confidence"], "Moderate");
}

#[test]
fn decaf_rejects_young_patient_and_bad_token() {
    rejects(
        "decaf_score",
        json!({
            "emrcd_dyspnea": "not_too_dyspneic",
            "eosinopenia": "no",
            "consolidation": "no",
            "acidemia": "no",
            "atrial_fibrillation": "no",
            "patient_age": 34,
        }),
    );
    rejects(
        "decaf_score",
        json!({
            "emrcd_dyspnea": "breathless",
            "eosinopenia": "no",
            "consolidation": "no",
            "acidemia": "no",
            "atrial_fibrillation": "no",
        }),
    );
}

#[test]
fn expected_pef_adult_yellow_zone() {
    let r = calc(
        "expected_peak_expiratory_flow",
        json!({
            "age_years": 30,
            "height_cm": 175,
            "sex": "male",
            "race_ethnicity": "caucasian",
            "measured_pef": 300,
        }),
    );
    assert_close(number(&r), 596.4, 1e-9);
    assert_eq!(r.stage, "Caution");
    assert_eq!(r.extra("percentage_of_expected").unwrap(), 50.3);
    assert_eq!(r.extra("zone").unwrap(), "Yellow Zone");
}

#[test]
fn expected_pef_child_uses_height_formula() {
    let r = calc(
        "expected_peak_expiratory_flow",
        json!({"age_years": 6, "height_cm": 120, "sex": "female", "race_ethnicity": "other"}),
    );
    assert_close(number(&r), 200.0, 1e-9);
    assert_eq!(r.stage, "Expected Value");
    assert_eq!(r.extra("zone_color").unwrap(), "gray");
}

#[test]
fn gold_grade_and_group() {
    let r = calc(
        "gold_copd_criteria",
        json!({
            "fev1_percent_predicted": 45,
            "fvc_fev1_ratio": 0.6,
            "dyspnea_mmrc": 1,
            "exacerbations_last_year": 2,
            "hospitalizations_last_year": 0,
        }),
    );
    assert_eq!(label(&r), "GOLD 3 - Severe COPD, Group E");
    assert_eq!(r.stage_description, "Severe airflow limitation, Group E");
}

#[test]
fn gold_grade_bands_are_contiguous() {
    let r = calc(
        "gold_copd_criteria",
        json!({
            "fev1_percent_predicted": 79.5,
            "fvc_fev1_ratio": 0.6,
            "dyspnea_mmrc": 2,
            "exacerbations_last_year": 0,
            "hospitalizations_last_year": 0,
        }),
    );
    assert_eq!(label(&r), "GOLD 2 - Moderate COPD, Group B");
}

#[test]
fn gold_no_copd_above_ratio() {
    let r = calc(
        "gold_copd_criteria",
        json!({
            "fev1_percent_predicted": 85,
            "fvc_fev1_ratio": 0.70,
            "dyspnea_mmrc": 1,
            "exacerbations_last_year": 0,
            "hospitalizations_last_year": 0,
        }),
    );
    assert_eq!(label(&r), "No COPD - Normal spirometry");
    assert_eq!(r.stage, "No COPD");
}

#[test]
fn gold_cat_score_raises_symptom_group() {
    let r = calc(
        "gold_copd_criteria",
        json!({
            "fev1_percent_predicted": 85,
            "fvc_fev1_ratio": 0.65,
            "dyspnea_mmrc": 0,
            "exacerbations_last_year": 1,
            "hospitalizations_last_year": 0,
            "cat_score": 10,
        }),
    );
    assert_eq!(label(&r), "GOLD 1 - Mild COPD, Group B");
}

#[test]
fn winters_undercompensation() {
    let r = calc(
        "winters_formula_metabolic_acidosis",
        json!({"bicarbonate": 12, "measured_pco2": 30}),
    );
    assert_close(number(&r), 26.0, 1e-9);
    assert_eq!(r.stage, "Undercompensation");
    assert!(r.interpretation.starts_with("The measured pCO₂ (30 mmHg) is 4.0 mmHg higher"));
}

#[test]
fn winters_edges_of_window_are_appropriate() {
    let r = calc(
        "winters_formula_metabolic_acidosis",
        json!({"bicarbonate": 12, "measured_pco2": 28}),
    );
    assert_eq!(r.stage, "Appropriate Compensation");
    let r = calc(
        "winters_formula_metabolic_acidosis",
        json!({"bicarbonate": 12}),
    );
    assert_eq!(r.stage, "Expected Compensation");
    assert_eq!(r.extra("expected_range").unwrap(), &json!({"lower": 24.0, "upper": 28.0}));
}

#[test]
fn winters_rejects_bicarbonate_out_of_range() {
    rejects("winters_formula_metabolic_acidosis", json!({"bicarbonate": 4.9}));
    rejects(
        "winters_formula_metabolic_acidosis",
        json!({"bicarbonate": 12, "measured_pco2": 81}),
    );
}
