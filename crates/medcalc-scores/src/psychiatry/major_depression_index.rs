//! Major Depression Inventory (MDI): ten items over the past two weeks,
//! each 0-3 for 0-30 in total, with an ICD-10 style criteria check.
//!
//! Endorsing "life not worth living" most of the time or more appends a
//! suicide risk warning to the interpretation.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum Frequency {
        NotAtAll => "not_at_all",
        SomeOfTime => "some_of_time",
        MostOfTime => "most_of_time",
        AllTheTime => "all_the_time",
    }
}

impl Frequency {
    fn points(self) -> i64 {
        match self {
            Frequency::NotAtAll => 0,
            Frequency::SomeOfTime => 1,
            Frequency::MostOfTime => 2,
            Frequency::AllTheTime => 3,
        }
    }

    /// Most of the time or more.
    fn is_persistent(self) -> bool {
        self.points() >= 2
    }
}

calculator_input! {
    pub struct MdiInput {
        pub depressed_mood: Frequency,
        pub lack_of_interest: Frequency,
        pub lack_of_energy: Frequency,
        pub low_self_confidence: Frequency,
        pub bad_conscience: Frequency,
        pub life_not_worth_living: Frequency,
        pub concentration_problems: Frequency,
        pub agitation_restlessness: Frequency,
        pub psychomotor_retardation: Frequency,
        pub sleep_problems: Frequency,
    }
}

struct Criteria {
    met: bool,
    core: i64,
    additional: i64,
}

impl MdiInput {
    fn core(&self) -> [Frequency; 2] {
        [self.depressed_mood, self.lack_of_interest]
    }

    fn additional(&self) -> [Frequency; 8] {
        [
            self.lack_of_energy,
            self.low_self_confidence,
            self.bad_conscience,
            self.life_not_worth_living,
            self.concentration_problems,
            self.agitation_restlessness,
            self.psychomotor_retardation,
            self.sleep_problems,
        ]
    }

    /// At least one core symptom most of the time and five symptoms overall.
    fn criteria(&self) -> Criteria {
        let core = self.core().iter().filter(|f| f.is_persistent()).count() as i64;
        let additional = self
            .additional()
            .iter()
            .filter(|f| f.points() >= 1)
            .count() as i64;
        Criteria {
            met: core >= 1 && core + additional >= 5,
            core,
            additional,
        }
    }
}

pub fn calculate(input: &MdiInput) -> CalcResult {
    let total: i64 = input
        .core()
        .iter()
        .chain(input.additional().iter())
        .map(|f| f.points())
        .sum();
    let criteria = input.criteria();
    let suicide_risk = input.life_not_worth_living.is_persistent();

    let (stage, description, mut text) = match total {
        ..=13 => (
            "No Depression",
            "Minimal or no depressive symptoms",
            String::from("No evidence of clinically significant depression. Continue routine monitoring and preventive care. Consider lifestyle factors and general mental health promotion."),
        ),
        14..=20 => (
            "Mild Depression",
            "Mild depressive symptoms",
            String::from("Mild depression present. Consider watchful waiting, psychosocial interventions, counseling, or brief therapy. Monitor closely for symptom progression. Lifestyle modifications and social support may be beneficial."),
        ),
        21..=25 => (
            "Moderate Depression",
            "Moderate depressive symptoms",
            String::from("Moderate depression requiring treatment. Consider psychotherapy and/or antidepressant medication. Regular follow-up essential. Assess for functional impairment and safety concerns."),
        ),
        _ => (
            "Severe Depression",
            "Severe depressive symptoms",
            String::from("Severe depression requiring immediate treatment. Strong indication for combined therapy (psychotherapy + medication). Assess suicide risk. Consider psychiatric referral and intensive monitoring."),
        ),
    };

    let counts = format!(
        "({} core symptoms, {} additional symptoms)",
        criteria.core, criteria.additional
    );
    if criteria.met {
        text.push_str(&format!(
            " Diagnostic criteria for major depression are met {counts}."
        ));
    } else {
        text.push_str(&format!(
            " Diagnostic criteria for major depression are not fully met {counts}. Clinical interview recommended for comprehensive assessment."
        ));
    }
    if suicide_risk {
        text.push_str(" WARNING: Patient endorsed feeling that life is not worth living. Immediate suicide risk assessment and safety planning required.");
    }

    Ok(
        CalculatorResponse::new(total, "points", Interpretation::new(stage, description, text))
            .with("diagnostic_criteria_met", criteria.met)
            .with("core_symptoms", criteria.core)
            .with("additional_symptoms", criteria.additional)
            .with("suicide_risk_flag", suicide_risk),
    )
}
