//! Rome IV criteria for unspecified functional bowel disorder.
//!
//! Requires both inclusion criteria, exclusion of the four specific
//! functional bowel disorders and absence of all seven alarm features.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

const INCLUSION_REQUIRED: usize = 2;
const FUNCTIONAL_REQUIRED: usize = 4;
const ALARM_REQUIRED: usize = 7;

calculator_input! {
    pub struct UnspecifiedFbdInput {
        pub bowel_symptoms_duration: YesNo,
        pub symptoms_not_organic: YesNo,
        pub exclusion_ibs_criteria: YesNo,
        pub exclusion_functional_constipation: YesNo,
        pub exclusion_functional_diarrhea: YesNo,
        pub exclusion_functional_bloating: YesNo,
        pub exclusion_gi_bleeding: YesNo,
        pub exclusion_iron_deficiency_anemia: YesNo,
        pub exclusion_weight_loss: YesNo,
        pub exclusion_abdominal_mass_lymphadenopathy: YesNo,
        pub exclusion_family_history_colon_cancer: YesNo,
        pub exclusion_age_over_50_without_screening: YesNo,
        pub exclusion_sudden_bowel_habit_change: YesNo,
    }
}

fn count_yes(items: &[YesNo]) -> usize {
    items.iter().filter(|c| c.is_yes()).count()
}

pub fn calculate(input: &UnspecifiedFbdInput) -> CalcResult {
    let inclusion = count_yes(&[input.bowel_symptoms_duration, input.symptoms_not_organic]);
    let functional = count_yes(&[
        input.exclusion_ibs_criteria,
        input.exclusion_functional_constipation,
        input.exclusion_functional_diarrhea,
        input.exclusion_functional_bloating,
    ]);
    let alarm = count_yes(&[
        input.exclusion_gi_bleeding,
        input.exclusion_iron_deficiency_anemia,
        input.exclusion_weight_loss,
        input.exclusion_abdominal_mass_lymphadenopathy,
        input.exclusion_family_history_colon_cancer,
        input.exclusion_age_over_50_without_screening,
        input.exclusion_sudden_bowel_habit_change,
    ]);
    let met = inclusion == INCLUSION_REQUIRED
        && functional == FUNCTIONAL_REQUIRED
        && alarm == ALARM_REQUIRED;

    let interpretation = if met {
        Interpretation::new(
            "Criteria Met",
            "Meets Rome IV criteria",
            "Patient fulfills Rome IV diagnostic criteria for unspecified functional bowel disorder. This diagnosis applies to bowel symptoms not attributable to organic etiology that do not meet criteria for IBS, functional constipation, functional diarrhea, or functional abdominal bloating/distension disorders. Management should be guided by individual patient symptoms and severity. No specific standardized treatment exists, but symptom-directed therapy may include dietary modifications, probiotics, antispasmodics, or other supportive measures as clinically indicated.",
        )
    } else {
        let detail = if inclusion == 0 {
            "Neither temporal criteria nor functional etiology established. ".to_string()
        } else if inclusion < INCLUSION_REQUIRED {
            "One inclusion criterion not met (either temporal requirements or functional etiology). "
                .to_string()
        } else if functional < FUNCTIONAL_REQUIRED {
            "Patient meets criteria for a more specific functional bowel disorder. ".to_string()
        } else {
            format!(
                "{} alarm symptoms present requiring evaluation. ",
                ALARM_REQUIRED - alarm
            )
        };
        Interpretation::new(
            "Criteria Not Met",
            "Does not meet Rome IV criteria",
            format!("Patient does not fulfill Rome IV diagnostic criteria for unspecified functional bowel disorder. {detail}Consider appropriate evaluation based on specific criteria not met. If alarm symptoms are present, further investigation including imaging, endoscopy, and laboratory studies may be indicated."),
        )
    };

    Ok(CalculatorResponse::new(
        if met { "Positive" } else { "Negative" },
        "diagnosis",
        interpretation,
    )
    .with("inclusion_criteria_met", inclusion)
    .with("functional_disorder_exclusions_met", functional)
    .with("alarm_symptom_exclusions_met", alarm))
}
