//! Simplified modified Rankin Scale questionnaire (mRS-9Q).
//!
//! Questions are walked from the most dependent state down; the first
//! match sets the grade.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct MrsNineQInput {
        pub symptoms_bothering: YesNo,
        pub same_work: YesNo,
        pub keep_hobbies: YesNo,
        pub maintain_social_ties: YesNo,
        pub need_help_basic_tasks: YesNo,
        pub need_help_shopping_travel: YesNo,
        pub need_help_walking: YesNo,
        pub need_help_personal_care: YesNo,
        pub bedridden_nursing_care: YesNo,
    }
}

impl MrsNineQInput {
    fn grade(&self) -> i64 {
        if self.bedridden_nursing_care.is_yes() {
            5
        } else if self.need_help_personal_care.is_yes() || self.need_help_walking.is_yes() {
            4
        } else if self.need_help_basic_tasks.is_yes() || self.need_help_shopping_travel.is_yes() {
            3
        } else if !self.same_work.is_yes() || !self.keep_hobbies.is_yes() || !self.maintain_social_ties.is_yes() {
            2
        } else if self.symptoms_bothering.is_yes() {
            1
        } else {
            0
        }
    }
}

pub fn calculate(input: &MrsNineQInput) -> CalcResult {
    let score = input.grade();
    let (stage, description, guidance) = match score {
        0 => (
            "No Symptoms",
            "No symptoms at all",
            "No symptoms at all. The patient has achieved complete functional recovery with no residual symptoms from their neurological condition. Perfect health with complete independence in all activities of daily living. This represents the best possible outcome following stroke or other neurological injury. No assistance or accommodations are needed for any activities.",
        ),
        1 => (
            "No Significant Disability",
            "Symptoms present but able to carry out all usual duties",
            "No significant disability despite symptoms. The patient has some symptoms that are bothering them but is able to carry out all usual duties and activities. This includes maintaining work, hobbies, and social relationships. Minor symptoms do not interfere with daily function. Excellent functional outcome with minimal impact on quality of life and independence.",
        ),
        2 => (
            "Slight Disability",
            "Unable to carry out all previous activities but independent",
            "Slight disability. The patient is unable to carry out all previous activities but remains able to look after their own affairs without assistance. This may include inability to perform the same work as before, difficulty keeping up with hobbies, or challenges maintaining all social connections. However, basic and instrumental activities of daily living remain independent. Good functional outcome with lifestyle adjustments.",
        ),
        3 => (
            "Moderate Disability",
            "Requires some help but able to walk unassisted",
            "Moderate disability. The patient requires some help with daily activities but is able to walk unassisted. This includes needing assistance with making meals, household chores, balancing finances, shopping, or traveling close to home. While mobility remains independent, complex instrumental activities require support. Benefits from community services and occupational therapy.",
        ),
        4 => (
            "Moderately Severe Disability",
            "Unable to attend to bodily needs without assistance",
            "Moderately severe disability. The patient is unable to attend to their own bodily needs without assistance and/or unable to walk without help from another person. Requires assistance with eating, toileting, bathing, and/or mobility. Significant functional impairment affecting independence in basic activities of daily living. Needs regular caregiver support and may benefit from assisted living or skilled care.",
        ),
        _ => (
            "Severe Disability",
            "Bedridden and requiring constant nursing care",
            "Severe disability. The patient stays in bed most of the day and requires constant nursing care and attention. Complete dependence for all activities of daily living including feeding, positioning, hygiene, and basic medical care. Requires skilled nursing facility care or intensive home care with 24-hour supervision. Significant burden on family caregivers and healthcare system. Focus on comfort care and maintaining dignity.",
        ),
    };
    Ok(CalculatorResponse::new(
        score,
        "points",
        Interpretation::new(stage, description, format!("mRS-9Q Score {score}: {guidance}")),
    ))
}
