//! Edinburgh Postnatal Depression Scale (EPDS).
//!
//! Ten items answered 0-3 by option position. Items 1, 2 and 4 are reverse
//! scored. Any endorsement of self-harm thoughts (item 10) appends a safety
//! directive to the interpretation regardless of the total.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct EpdsInput {
        pub able_to_laugh: i64 => 0..=3,
        pub looked_forward: i64 => 0..=3,
        pub blamed_myself: i64 => 0..=3,
        pub anxious_worried: i64 => 0..=3,
        pub scared_panicky: i64 => 0..=3,
        pub things_on_top: i64 => 0..=3,
        pub unhappy_sleeping: i64 => 0..=3,
        pub sad_miserable: i64 => 0..=3,
        pub unhappy_crying: i64 => 0..=3,
        pub self_harm_thoughts: i64 => 0..=3,
    }
}

impl EpdsInput {
    /// (field, answer, reverse scored)
    fn items(&self) -> [(&'static str, i64, bool); 10] {
        [
            ("able_to_laugh", self.able_to_laugh, true),
            ("looked_forward", self.looked_forward, true),
            ("blamed_myself", self.blamed_myself, false),
            ("anxious_worried", self.anxious_worried, true),
            ("scared_panicky", self.scared_panicky, false),
            ("things_on_top", self.things_on_top, false),
            ("unhappy_sleeping", self.unhappy_sleeping, false),
            ("sad_miserable", self.sad_miserable, false),
            ("unhappy_crying", self.unhappy_crying, false),
            ("self_harm_thoughts", self.self_harm_thoughts, false),
        ]
    }

    fn total(&self) -> i64 {
        self.items()
            .iter()
            .map(|(_, answer, reverse)| if *reverse { 3 - answer } else { *answer })
            .sum()
    }
}

pub fn calculate(input: &EpdsInput) -> CalcResult {
    let total = input.total();

    let (stage, description, mut text) = match total {
        ..=9 => (
            "Low Risk",
            "Minimal depression symptoms",
            String::from("Low risk for depression. Score suggests minimal depressive symptoms. Continue routine care and screening. Provide general postpartum support and education about warning signs of depression."),
        ),
        10..=12 => (
            "Moderate Risk",
            "Possible depression - further assessment needed",
            String::from("Moderate risk for depression. Score suggests possible depressive symptoms requiring further evaluation. Consider clinical assessment by healthcare provider within 2 weeks. Provide mental health resources and support information."),
        ),
        _ => (
            "High Risk",
            "Likely depression - clinical assessment recommended",
            String::from("High risk for depression. Score indicates likely depressive symptoms requiring clinical assessment and potential intervention. Refer to healthcare provider, preferably general practitioner or mental health professional, for comprehensive evaluation and treatment planning."),
        ),
    };

    match input.self_harm_thoughts {
        0 => {}
        1 => text.push_str(" IMPORTANT: Patient endorsed thoughts of self-harm (low frequency). Safety assessment required. Consider same-day clinical evaluation and provide crisis resources and support."),
        2 => text.push_str(" URGENT: Patient endorsed thoughts of self-harm (moderate frequency). Immediate safety assessment required. Arrange prompt clinical evaluation within 24 hours. Provide crisis hotline information and ensure support system activated."),
        _ => text.push_str(" CRITICAL: Patient endorsed frequent thoughts of self-harm. Immediate safety assessment and intervention required. Consider emergency psychiatric evaluation. Do not leave patient alone. Activate crisis protocols and provide immediate crisis resources."),
    }
    if total >= 13 {
        text.push_str(" Recommend rescreening in 2-4 weeks if clinical assessment indicates ongoing monitoring is appropriate.");
    }

    Ok(CalculatorResponse::new(
        total,
        "points",
        Interpretation::new(stage, description, text),
    ))
}
