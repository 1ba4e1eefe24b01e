//! Framingham (ATP III) 10-year risk of hard coronary heart disease, point
//! method.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};

calculator_input! {
    pub struct FraminghamInput {
        pub age: i64 => 30..=79,
        pub sex: Sex,
        pub total_cholesterol: f64 => 100.0..=400.0,
        pub hdl_cholesterol: f64 => 20.0..=100.0,
        pub systolic_bp: i64 => 90..=200,
        pub bp_treatment: YesNo,
        pub smoking: YesNo,
    }
}

/// Exclusive upper bounds paired with points; the last band is open-ended.
type Bands = [(f64, i64)];

const MALE_AGE: [(f64, i64); 10] = [
    (35.0, -9), (40.0, -4), (45.0, 0), (50.0, 3), (55.0, 6),
    (60.0, 8), (65.0, 10), (70.0, 11), (75.0, 12), (f64::INFINITY, 13),
];
const FEMALE_AGE: [(f64, i64); 10] = [
    (35.0, -7), (40.0, -3), (45.0, 0), (50.0, 3), (55.0, 6),
    (60.0, 8), (65.0, 10), (70.0, 12), (75.0, 14), (f64::INFINITY, 16),
];
const MALE_CHOLESTEROL: [(f64, i64); 5] =
    [(160.0, 0), (200.0, 4), (240.0, 7), (280.0, 9), (f64::INFINITY, 11)];
const FEMALE_CHOLESTEROL: [(f64, i64); 5] =
    [(160.0, 0), (200.0, 4), (240.0, 8), (280.0, 11), (f64::INFINITY, 13)];
const HDL: [(f64, i64); 4] = [(40.0, 2), (50.0, 1), (60.0, 0), (f64::INFINITY, -1)];
const MALE_SBP_UNTREATED: [(f64, i64); 5] =
    [(120.0, 0), (130.0, 0), (140.0, 1), (160.0, 1), (f64::INFINITY, 2)];
const MALE_SBP_TREATED: [(f64, i64); 5] =
    [(120.0, 0), (130.0, 1), (140.0, 2), (160.0, 2), (f64::INFINITY, 3)];
const FEMALE_SBP_UNTREATED: [(f64, i64); 5] =
    [(120.0, 0), (130.0, 1), (140.0, 2), (160.0, 3), (f64::INFINITY, 4)];
const FEMALE_SBP_TREATED: [(f64, i64); 5] =
    [(120.0, 0), (130.0, 3), (140.0, 4), (160.0, 5), (f64::INFINITY, 6)];

/// 10-year risk (%) for totals starting at -2.
const MALE_RISK: [f64; 20] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 16.0,
    20.0, 25.0, 30.0,
];
const FEMALE_RISK: [f64; 23] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 11.0,
    14.0, 17.0, 22.0, 27.0, 30.0, 30.0,
];

fn points_below(value: f64, bands: &Bands) -> i64 {
    bands
        .iter()
        .find(|(upper, _)| value < *upper)
        .map_or(0, |(_, points)| *points)
}

pub fn calculate(input: &FraminghamInput) -> CalcResult {
    let female = input.sex.is_female();
    let treated = input.bp_treatment.is_yes();
    let (age_bands, chol_bands, sbp_bands, smoking_points, risk_table): (
        &Bands,
        &Bands,
        &Bands,
        i64,
        &[f64],
    ) = match (female, treated) {
        (false, false) => (&MALE_AGE, &MALE_CHOLESTEROL, &MALE_SBP_UNTREATED, 8, &MALE_RISK),
        (false, true) => (&MALE_AGE, &MALE_CHOLESTEROL, &MALE_SBP_TREATED, 8, &MALE_RISK),
        (true, false) => (&FEMALE_AGE, &FEMALE_CHOLESTEROL, &FEMALE_SBP_UNTREATED, 9, &FEMALE_RISK),
        (true, true) => (&FEMALE_AGE, &FEMALE_CHOLESTEROL, &FEMALE_SBP_TREATED, 9, &FEMALE_RISK),
    };

    let points = points_below(input.age as f64, age_bands)
        + points_below(input.total_cholesterol, chol_bands)
        + points_below(input.hdl_cholesterol, &HDL)
        + points_below(input.systolic_bp as f64, sbp_bands)
        + input.smoking.points(smoking_points);

    let index = (points + 2).clamp(0, risk_table.len() as i64 - 1) as usize;
    let risk = risk_table[index];

    Ok(CalculatorResponse::new(risk, "%", interpret(risk)).with("total_points", points))
}

fn interpret(risk: f64) -> Interpretation {
    if risk < 5.0 {
        Interpretation::new(
            "Low Risk",
            "Low 10-year CHD risk",
            format!("Low risk with {risk:.1}% 10-year risk of hard coronary heart disease events (MI, coronary death). Continue standard preventive measures including healthy lifestyle modifications (diet, exercise, smoking cessation if applicable). Regular monitoring of cardiovascular risk factors recommended."),
        )
    } else if risk < 10.0 {
        Interpretation::new(
            "Borderline Risk",
            "Borderline 10-year CHD risk",
            format!("Borderline risk with {risk:.1}% 10-year risk of hard coronary heart disease events. Consider additional risk factors and intensive lifestyle modifications (diet, exercise, weight management). May benefit from statin therapy in some cases based on clinical judgment and patient preferences. Consider coronary artery calcium scoring for further risk stratification."),
        )
    } else if risk < 20.0 {
        Interpretation::new(
            "Intermediate Risk",
            "Intermediate 10-year CHD risk",
            format!("Intermediate risk with {risk:.1}% 10-year risk of hard coronary heart disease events. Strong consideration for pharmacotherapy (statins) in addition to intensive lifestyle modifications. Consider additional risk stratification tools if treatment decision uncertain. Target LDL-C <100 mg/dL, consider <70 mg/dL."),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High 10-year CHD risk",
            format!("High risk with {risk:.1}% 10-year risk of hard coronary heart disease events. Definite indication for pharmacotherapy (high-intensity statin) and aggressive risk factor modification. Target LDL-C <70 mg/dL. Consider additional antiplatelet therapy, ACE inhibitors, and other cardioprotective medications as clinically appropriate. Intensive lifestyle counseling and close follow-up recommended."),
        )
    }
}
