//! Caprini (2005) VTE risk assessment for surgical patients.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum AgeCategory {
        Under41 => "under_41",
        From41To60 => "41_to_60",
        From61To74 => "61_to_74",
        From75 => "75_or_older",
    }
}

calculator_input! {
    pub struct CapriniInput {
        pub age_category: AgeCategory,
        pub minor_surgery: YesNo,
        pub major_surgery: YesNo,
        pub hip_knee_arthroplasty: YesNo,
        pub hip_pelvis_leg_fracture: YesNo,
        pub acute_spinal_cord_injury: YesNo,
        pub varicose_veins: YesNo,
        pub current_swollen_legs: YesNo,
        pub central_venous_access: YesNo,
        pub inflammatory_bowel_disease: YesNo,
        pub bmi_over_25: YesNo,
        pub acute_myocardial_infarction: YesNo,
        pub congestive_heart_failure: YesNo,
        pub sepsis: YesNo,
        pub serious_lung_disease: YesNo,
        pub abnormal_pulmonary_function: YesNo,
        pub medical_patient_bed_rest: YesNo,
        pub cast_or_brace: YesNo,
        pub history_of_vte: YesNo,
        pub family_history_thrombosis: YesNo,
        pub factor_v_leiden: YesNo,
        pub prothrombin_20210a: YesNo,
        pub lupus_anticoagulant: YesNo,
        pub anticardiolipin_antibodies: YesNo,
        pub heparin_induced_thrombocytopenia: YesNo,
        pub other_congenital_thrombophilia: YesNo,
        pub malignancy: YesNo,
    }
}

fn weighted(factors: &[YesNo], weight: i64) -> i64 {
    factors.iter().map(|f| f.points(weight)).sum()
}

pub fn calculate(input: &CapriniInput) -> CalcResult {
    let age = match input.age_category {
        AgeCategory::Under41 => 0,
        AgeCategory::From41To60 => 1,
        AgeCategory::From61To74 => 2,
        AgeCategory::From75 => 3,
    };
    let one = weighted(
        &[
            input.minor_surgery,
            input.varicose_veins,
            input.inflammatory_bowel_disease,
            input.bmi_over_25,
            input.current_swollen_legs,
            input.central_venous_access,
        ],
        1,
    );
    let two = weighted(
        &[
            input.major_surgery,
            input.acute_myocardial_infarction,
            input.congestive_heart_failure,
            input.sepsis,
            input.serious_lung_disease,
            input.abnormal_pulmonary_function,
            input.medical_patient_bed_rest,
            input.cast_or_brace,
        ],
        2,
    );
    let three = weighted(
        &[
            input.history_of_vte,
            input.family_history_thrombosis,
            input.factor_v_leiden,
            input.prothrombin_20210a,
            input.lupus_anticoagulant,
            input.anticardiolipin_antibodies,
            input.heparin_induced_thrombocytopenia,
            input.other_congenital_thrombophilia,
        ],
        3,
    );
    let five = weighted(
        &[
            input.hip_knee_arthroplasty,
            input.hip_pelvis_leg_fracture,
            input.acute_spinal_cord_injury,
            input.malignancy,
        ],
        5,
    );
    let score = age + one + two + three + five;

    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        0 => Interpretation::new(
            "Lowest Risk",
            "Minimal risk",
            "Lowest risk of VTE. No specific anticoagulation prophylaxis required. Early ambulation and compression stockings recommended.",
        ),
        1..=2 => Interpretation::new(
            "Low Risk",
            "Minimal risk",
            "Low risk of VTE. No specific anticoagulation prophylaxis required. Early ambulation, compression stockings, and intermittent pneumatic compression recommended.",
        ),
        3..=4 => Interpretation::new(
            "Moderate Risk",
            "0.7% VTE risk",
            "Moderate risk of VTE. Consider intermittent pneumatic compression or low molecular weight heparin. Risk-benefit assessment for chemoprophylaxis recommended.",
        ),
        5..=6 => Interpretation::new(
            "High Risk",
            "1.8% VTE risk",
            "High risk of VTE. Intermittent pneumatic compression AND low molecular weight heparin recommended. Consider extended prophylaxis based on individual risk factors.",
        ),
        7..=8 => Interpretation::new(
            "High Risk",
            "4.0% VTE risk",
            "High risk of VTE. Intermittent pneumatic compression AND low molecular weight heparin strongly recommended. Consider extended prophylaxis for 30 days post-operatively.",
        ),
        _ => Interpretation::new(
            "Highest Risk",
            "10.7% VTE risk",
            "Highest risk of VTE. Aggressive prophylaxis with intermittent pneumatic compression AND low molecular weight heparin mandatory. Extended prophylaxis for 30 days post-operatively strongly recommended. Consider inferior vena cava filter if anticoagulation contraindicated.",
        ),
    }
}
