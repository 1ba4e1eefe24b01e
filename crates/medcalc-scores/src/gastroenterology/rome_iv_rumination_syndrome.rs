//! Rome IV criteria for rumination syndrome: both positive features and
//! absence of all seven alarm features.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

const POSITIVE_REQUIRED: usize = 2;
const EXCLUSIONS_REQUIRED: usize = 7;

calculator_input! {
    pub struct RuminationInput {
        pub persistent_recurrent_regurgitation: YesNo,
        pub regurgitation_not_preceded_by_retching: YesNo,
        pub exclusion_gi_bleeding: YesNo,
        pub exclusion_iron_deficiency_anemia: YesNo,
        pub exclusion_heartburn_reflux: YesNo,
        pub exclusion_weight_loss: YesNo,
        pub exclusion_abdominal_mass_lymphadenopathy: YesNo,
        pub exclusion_dysphagia: YesNo,
        pub exclusion_persistent_vomiting: YesNo,
    }
}

fn count_yes(items: &[YesNo]) -> usize {
    items.iter().filter(|c| c.is_yes()).count()
}

pub fn calculate(input: &RuminationInput) -> CalcResult {
    let positive = count_yes(&[
        input.persistent_recurrent_regurgitation,
        input.regurgitation_not_preceded_by_retching,
    ]);
    let exclusions = count_yes(&[
        input.exclusion_gi_bleeding,
        input.exclusion_iron_deficiency_anemia,
        input.exclusion_heartburn_reflux,
        input.exclusion_weight_loss,
        input.exclusion_abdominal_mass_lymphadenopathy,
        input.exclusion_dysphagia,
        input.exclusion_persistent_vomiting,
    ]);
    let met = positive == POSITIVE_REQUIRED && exclusions == EXCLUSIONS_REQUIRED;

    let interpretation = if met {
        Interpretation::new(
            "Criteria Met",
            "Meets Rome IV criteria",
            "Patient fulfills Rome IV diagnostic criteria for rumination syndrome. Diagnosis is established when all criteria are met including persistent regurgitation of recently ingested food with remastication and reswallowing, effortless regurgitation without retching, and exclusion of organic causes. Treatment focuses on behavioral interventions including diaphragmatic breathing training, habit reversal therapy, and biofeedback. Dietary modifications and psychological support may be beneficial.",
        )
    } else {
        let detail = if positive < POSITIVE_REQUIRED {
            format!("{} essential positive criteria not met. ", POSITIVE_REQUIRED - positive)
        } else {
            format!(
                "{} exclusion criteria not satisfied (alarm symptoms present). ",
                EXCLUSIONS_REQUIRED - exclusions
            )
        };
        Interpretation::new(
            "Criteria Not Met",
            "Does not meet Rome IV criteria",
            format!("Patient does not fulfill Rome IV diagnostic criteria for rumination syndrome. {detail}Consider alternative diagnoses including GERD with regurgitation, gastroparesis, eating disorders, or organic gastrointestinal pathology. Further evaluation may be needed including upper endoscopy, gastric emptying studies, and psychological assessment as clinically indicated."),
        )
    };

    Ok(CalculatorResponse::new(
        if met { "Positive" } else { "Negative" },
        "diagnosis",
        interpretation,
    )
    .with("positive_criteria_met", positive)
    .with("exclusion_criteria_met", exclusions))
}
