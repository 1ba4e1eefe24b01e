//! Rome IV diagnostic criteria for proctalgia fugax. All eight must hold.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct ProctalgiaFugaxInput {
        pub recurrent_rectal_pain_unrelated_defecation: YesNo,
        pub episode_duration_seconds_to_30_minutes: YesNo,
        pub no_anorectal_pain_between_episodes: YesNo,
        pub exclusion_inflammatory_causes: YesNo,
        pub exclusion_structural_anorectal_lesions: YesNo,
        pub exclusion_prostatitis: YesNo,
        pub exclusion_coccygodynia: YesNo,
        pub exclusion_pelvic_floor_alterations: YesNo,
    }
}

const REQUIRED: usize = 8;

pub fn calculate(input: &ProctalgiaFugaxInput) -> CalcResult {
    let met = [
        input.recurrent_rectal_pain_unrelated_defecation,
        input.episode_duration_seconds_to_30_minutes,
        input.no_anorectal_pain_between_episodes,
        input.exclusion_inflammatory_causes,
        input.exclusion_structural_anorectal_lesions,
        input.exclusion_prostatitis,
        input.exclusion_coccygodynia,
        input.exclusion_pelvic_floor_alterations,
    ]
    .into_iter()
    .filter(|c| c.is_yes())
    .count();

    let interpretation = if met == REQUIRED {
        Interpretation::new(
            "Criteria Met",
            "Meets Rome IV criteria",
            "Patient fulfills Rome IV diagnostic criteria for proctalgia fugax. Diagnosis is established when all essential criteria are met, including recurrent episodes of rectal pain lasting seconds to 30 minutes, pain-free intervals between episodes, and exclusion of organic causes. Treatment focuses on reassurance, patient education about the benign nature of the condition, stress management techniques, and symptomatic relief during acute episodes. Consider triggers such as stress, anxiety, or sexual activity. Prognosis is generally excellent with episodes typically occurring less than 5 times per year.",
        )
    } else {
        Interpretation::new(
            "Criteria Not Met",
            "Does not meet Rome IV criteria",
            format!("Patient does not fulfill Rome IV diagnostic criteria for proctalgia fugax ({met}/{REQUIRED} criteria met). One or more essential criteria are not satisfied. Consider alternative diagnoses including levator ani syndrome (chronic pain with puborectalis muscle tenderness on digital rectal examination), unspecified functional anorectal pain (episodes lasting longer than 30 minutes), or organic causes of anorectal pain. Further evaluation may be needed to identify underlying structural pathology, inflammatory conditions, or alternative functional disorders. Complete history, physical examination, and appropriate diagnostic studies should be performed to exclude organic causes."),
        )
    };
    let result = interpretation.stage.clone();

    Ok(CalculatorResponse::new(result, "diagnosis", interpretation).with("criteria_met", met))
}
