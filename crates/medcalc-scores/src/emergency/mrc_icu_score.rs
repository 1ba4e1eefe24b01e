//! Medication Regimen Complexity-Intensive Care Unit (MRC-ICU) score.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct MrcIcuInput {
        pub aminoglycosides: i64 => 0..=5,
        pub amphotericin_b: YesNo,
        pub antiarrhythmics: i64 => 0..=5,
        pub anticoagulants: i64 => 0..=5,
        pub anticonvulsants: i64 => 0..=5,
        pub argatroban: YesNo,
        pub azole_antifungals: i64 => 0..=5,
        pub blood_products: i64 => 0..=10,
        pub chemotherapy: i64 => 0..=5,
        pub clozapine: YesNo,
        pub digoxin: YesNo,
        pub vancomycin: YesNo,
        pub continuous_infusion_crystalloids: YesNo,
        pub vasopressors_inotropes: i64 => 0..=5,
        pub continuous_opioid_infusions: i64 => 0..=3,
        pub continuous_sedative_infusions: i64 => 0..=3,
        pub parenteral_nutrition: YesNo,
        pub insulin_infusion: YesNo,
        pub prn_opioids: YesNo,
        pub other_high_complexity_meds: i64 => 0..=20,
    }
}

pub fn calculate(input: &MrcIcuInput) -> CalcResult {
    // (count, points per agent)
    let counted = [
        (input.aminoglycosides, 3),
        (input.antiarrhythmics, 1),
        (input.anticoagulants, 1),
        (input.anticonvulsants, 3),
        (input.azole_antifungals, 2),
        (input.blood_products, 2),
        (input.chemotherapy, 3),
        (input.vasopressors_inotropes, 1),
        (input.continuous_opioid_infusions, 2),
        (input.continuous_sedative_infusions, 2),
        (input.other_high_complexity_meds, 2),
    ];
    let mut score = 0;
    for (count, points) in counted {
        score += count * points;
    }

    score += input.amphotericin_b.points(1)
        + input.argatroban.points(2)
        + input.clozapine.points(3)
        + input.digoxin.points(3)
        + input.vancomycin.points(3)
        + input.continuous_infusion_crystalloids.points(1)
        + input.parenteral_nutrition.points(2)
        + input.insulin_infusion.points(1)
        + input.prn_opioids.points(1);

    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..10 => Interpretation::new(
            "Low Complexity",
            "Low medication regimen complexity",
            "Lower MRC-ICU score suggests relatively simple medication regimen with lower anticipated pharmacist workload. Associated with lower mortality risk and shorter ICU length of stay.",
        ),
        10..20 => Interpretation::new(
            "Moderate Complexity",
            "Moderate medication regimen complexity",
            "Moderate MRC-ICU score indicates intermediate medication regimen complexity. Mean score in validation studies was approximately 10.3. Each 1-point increase is associated with 7% increased odds of mortality and 0.25 day increase in ICU LOS.",
        ),
        _ => Interpretation::new(
            "High Complexity",
            "High medication regimen complexity",
            "High MRC-ICU score indicates complex medication regimen requiring intensive pharmacist monitoring and intervention. Associated with significantly increased mortality risk, longer ICU stay, and need for extensive pharmacist workload.",
        ),
    }
}
