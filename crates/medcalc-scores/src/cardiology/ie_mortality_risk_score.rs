//! ICE-PCS 6-month mortality risk in infective endocarditis.

use medcalc_core::math::{logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum AgeCategory {
        UpTo45 => "45_or_under",
        From46To60 => "46_to_60",
        From61To70 => "61_to_70",
        Over70 => "over_70",
    }
}

calculator_input! {
    pub struct IeMortalityInput {
        pub age_category: AgeCategory,
        pub history_of_dialysis: YesNo,
        pub nosocomial_ie: YesNo,
        pub prosthetic_ie: YesNo,
        pub symptoms_over_1_month: YesNo,
        pub staphylococcus_aureus: YesNo,
        pub viridans_group_streptococci: YesNo,
        pub aortic_vegetation: YesNo,
        pub mitral_vegetation: YesNo,
        pub nyha_class_3_or_4_hf: YesNo,
        pub stroke: YesNo,
        pub paravalvular_complication: YesNo,
        pub persistent_bacteremia: YesNo,
        pub surgical_treatment: YesNo,
    }
}

pub fn calculate(input: &IeMortalityInput) -> CalcResult {
    let age_points = match input.age_category {
        AgeCategory::UpTo45 => 0,
        AgeCategory::From46To60 => 2,
        AgeCategory::From61To70 => 3,
        AgeCategory::Over70 => 4,
    };
    let score = age_points
        + input.history_of_dialysis.points(3)
        + input.nosocomial_ie.points(2)
        + input.prosthetic_ie.points(1)
        + input.symptoms_over_1_month.points(-1)
        + input.staphylococcus_aureus.points(1)
        + input.viridans_group_streptococci.points(-2)
        + input.aortic_vegetation.points(1)
        + input.mitral_vegetation.points(1)
        + input.nyha_class_3_or_4_hf.points(3)
        + input.stroke.points(2)
        + input.paravalvular_complication.points(2)
        + input.persistent_bacteremia.points(2)
        + input.surgical_treatment.points(-2);

    let s = score as f64;
    let probability = logistic(2.416 * s + 0.109 * s * s - 4.849) * 100.0;

    Ok(
        CalculatorResponse::new(round_to(probability, 1), "%", interpret(probability))
            .with("total_points", score),
    )
}

fn interpret(p: f64) -> Interpretation {
    if p <= 10.0 {
        Interpretation::new(
            "Low Risk",
            format!("Mortality probability {p:.1}% (≤10%)"),
            "Low risk of 6-month mortality. Consider standard medical management with close monitoring.",
        )
    } else if p <= 25.0 {
        Interpretation::new(
            "Moderate Risk",
            format!("Mortality probability {p:.1}% (10-25%)"),
            "Moderate risk of 6-month mortality. Consider intensive medical management and evaluation for surgical intervention if indicated.",
        )
    } else if p <= 50.0 {
        Interpretation::new(
            "High Risk",
            format!("Mortality probability {p:.1}% (25-50%)"),
            "High risk of 6-month mortality. Consider aggressive treatment including surgical evaluation if appropriate. Discuss prognosis with patient and family.",
        )
    } else {
        Interpretation::new(
            "Very High Risk",
            format!("Mortality probability {p:.1}% (>50%)"),
            "Very high risk of 6-month mortality. Consider palliative care consultation and goals of care discussion. Surgical intervention may be considered only in highly selected cases.",
        )
    }
}
