//! Geriatric Depression Scale, short form (GDS-15).

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct Gds15Input {
        pub q1_satisfied_with_life: YesNo,
        pub q2_dropped_activities: YesNo,
        pub q3_life_empty: YesNo,
        pub q4_often_bored: YesNo,
        pub q5_good_spirits: YesNo,
        pub q6_afraid_bad_happen: YesNo,
        pub q7_happy_most_time: YesNo,
        pub q8_feel_helpless: YesNo,
        pub q9_prefer_stay_home: YesNo,
        pub q10_memory_problems: YesNo,
        pub q11_wonderful_to_be_alive: YesNo,
        pub q12_feel_worthless: YesNo,
        pub q13_full_of_energy: YesNo,
        pub q14_situation_hopeless: YesNo,
        pub q15_others_better_off: YesNo,
    }
}

impl Gds15Input {
    /// Items where "yes" scores a point.
    fn yes_items(&self) -> [(YesNo, &'static str); 10] {
        [
            (self.q2_dropped_activities, "dropped activities/interests"),
            (self.q3_life_empty, "life feels empty"),
            (self.q4_often_bored, "often bored"),
            (self.q6_afraid_bad_happen, "afraid something bad will happen"),
            (self.q8_feel_helpless, "often feels helpless"),
            (self.q9_prefer_stay_home, "prefers staying home"),
            (self.q10_memory_problems, "memory problems"),
            (self.q12_feel_worthless, "feels worthless"),
            (self.q14_situation_hopeless, "situation feels hopeless"),
            (self.q15_others_better_off, "others are better off"),
        ]
    }

    /// Items where "no" scores a point.
    fn no_items(&self) -> [(YesNo, &'static str); 5] {
        [
            (self.q1_satisfied_with_life, "not satisfied with life"),
            (self.q5_good_spirits, "not in good spirits"),
            (self.q7_happy_most_time, "not happy most of the time"),
            (
                self.q11_wonderful_to_be_alive,
                "does not think it is wonderful to be alive",
            ),
            (self.q13_full_of_energy, "not full of energy"),
        ]
    }

    fn concerning(&self) -> Vec<&'static str> {
        let yes = self
            .yes_items()
            .into_iter()
            .filter(|(answer, _)| answer.is_yes());
        let no = self
            .no_items()
            .into_iter()
            .filter(|(answer, _)| !answer.is_yes());
        yes.chain(no).map(|(_, text)| text).collect()
    }
}

pub fn calculate(input: &Gds15Input) -> CalcResult {
    let concerning = input.concerning();
    let score = concerning.len() as i64;

    let summary = match concerning.len() {
        0 => "No concerning responses identified. ".to_string(),
        1..=3 => format!("Concerning responses: {}. ", concerning.join(", ")),
        n => format!("Multiple concerning responses identified ({n} items). "),
    };
    let head = format!("GDS-15 Score: {score}/15 points. {summary}");

    let interpretation = match score {
        ..=4 => Interpretation::new(
            "Normal",
            "Absence of clinically significant depressive symptoms",
            format!("{head}Normal range - absence of clinically significant depressive symptoms. These are normal scores, depending on age, education, and complaints. Continue routine screening at regular intervals. Monitor for changes in mood, function, or social engagement. Promote healthy aging activities and social connections."),
        ),
        5..=7 => Interpretation::new(
            "Mild Depression",
            "Suggests mild depression",
            format!("{head}Mild depression indicated. Consider formal diagnostic evaluation by qualified mental health professional. Monitor symptoms closely and consider counseling, supportive interventions, or community resources. Assess functional impact and provide patient education about depression in older adults. Follow up in 2-4 weeks."),
        ),
        8..=9 => Interpretation::new(
            "Moderate Depression",
            "Suggests moderate depression",
            format!("{head}Moderate depression indicated. Formal psychiatric evaluation recommended. Consider pharmacological and/or psychotherapeutic interventions. Assess suicide risk and functional impairment. Coordinate care with mental health specialists. Monitor treatment response and adjust interventions as needed. Provide family education and support resources."),
        ),
        _ => Interpretation::new(
            "Severe Depression",
            "Suggests severe depression",
            format!("{head}Severe depression indicated. Urgent psychiatric evaluation required. Assess suicide risk IMMEDIATELY using standardized tools and safety planning. Consider intensive treatment including medication and psychotherapy. May require close monitoring, intensive outpatient programs, or hospitalization if safety concerns. Coordinate care with psychiatry, involve family/caregivers, and ensure appropriate follow-up."),
        ),
    };

    Ok(CalculatorResponse::new(score, "points", interpretation))
}
