//! Quick Inventory of Depressive Symptomatology, self-report (QIDS-SR16).
//!
//! Sixteen items map onto the nine DSM criteria. The sleep, appetite/weight
//! and psychomotor domains each contribute only their highest item.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct QidsSr16Input {
        pub sleep_onset: i64 => 0..=3,
        pub sleep_maintenance: i64 => 0..=3,
        pub early_awakening: i64 => 0..=3,
        pub hypersomnia: i64 => 0..=3,
        pub sad_mood: i64 => 0..=3,
        pub appetite_decrease: i64 => 0..=3,
        pub appetite_increase: i64 => 0..=3,
        pub weight_decrease: i64 => 0..=3,
        pub weight_increase: i64 => 0..=3,
        pub concentration: i64 => 0..=3,
        pub self_view: i64 => 0..=3,
        pub suicidal_ideation: i64 => 0..=3,
        pub general_interest: i64 => 0..=3,
        pub energy_level: i64 => 0..=3,
        pub psychomotor_slowing: i64 => 0..=3,
        pub psychomotor_agitation: i64 => 0..=3,
    }
}

impl QidsSr16Input {
    fn total(&self) -> i64 {
        let sleep = self
            .sleep_onset
            .max(self.sleep_maintenance)
            .max(self.early_awakening)
            .max(self.hypersomnia);
        let appetite_weight = self
            .appetite_decrease
            .max(self.appetite_increase)
            .max(self.weight_decrease)
            .max(self.weight_increase);
        let psychomotor = self.psychomotor_slowing.max(self.psychomotor_agitation);
        sleep
            + self.sad_mood
            + appetite_weight
            + self.concentration
            + self.self_view
            + self.suicidal_ideation
            + self.general_interest
            + self.energy_level
            + psychomotor
    }
}

pub fn calculate(input: &QidsSr16Input) -> CalcResult {
    let total = input.total();

    let interpretation = match total {
        ..=5 => Interpretation::new(
            "No Depression",
            "No depression",
            "No depression present. Score indicates absence of clinically significant depressive symptoms. Continue routine monitoring and maintain current well-being strategies. Consider preventive mental health measures and lifestyle factors that support emotional wellness including regular exercise, adequate sleep, social connections, and stress management.",
        ),
        6..=10 => Interpretation::new(
            "Mild Depression",
            "Mild depression",
            "Mild depression. Some depressive symptoms present that may warrant attention and monitoring. Consider lifestyle interventions including exercise, sleep hygiene, stress reduction techniques, and psychoeducation. Supportive counseling or brief therapy may be beneficial. Reassess in 2-4 weeks and monitor for progression of symptoms.",
        ),
        11..=15 => Interpretation::new(
            "Moderate Depression",
            "Moderate depression",
            "Moderate depression. Clinically significant depressive symptoms requiring active treatment. Consider evidence-based psychotherapy (CBT, IPT, behavioral activation), medication evaluation with antidepressants, or combination treatment. Monitor for functional impairment, safety concerns, and treatment response. Reassess every 2-4 weeks initially.",
        ),
        16..=20 => Interpretation::new(
            "Severe Depression",
            "Severe depression",
            "Severe depression. Significant depressive symptoms requiring immediate attention and intensive treatment. Strongly recommend combination of psychotherapy and antidepressant medication. Monitor closely for safety concerns including suicidal ideation (item 12 score ≥2 requires immediate risk assessment). Consider psychiatric consultation and comprehensive treatment planning with close follow-up.",
        ),
        _ => Interpretation::new(
            "Very Severe Depression",
            "Very severe depression",
            "Very severe depression. Requires immediate psychiatric evaluation and intensive treatment intervention. High risk for significant functional impairment and safety concerns. Immediate suicide risk assessment essential. Consider hospitalization if suicidal risk present. Implement comprehensive treatment plan with frequent monitoring, family involvement, and coordinated care team approach.",
        ),
    };

    Ok(CalculatorResponse::new(total, "points", interpretation))
}
