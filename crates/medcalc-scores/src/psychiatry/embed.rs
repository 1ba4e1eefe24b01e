//! EMBED (EMergency department-initiated BuprenorphinE for opioid use
//! Disorder) candidacy.
//!
//! Eleven DSM-5 OUD criteria, readiness, pregnancy, prescriber waiver and
//! the COWS score decide between no candidacy, home induction and ED
//! induction.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum TreatmentReadiness {
        Ready => "ready",
        NotReady => "not_ready",
    }
}

calculator_input! {
    pub struct EmbedInput {
        pub opioid_larger_amounts: YesNo,
        pub unsuccessful_cut_down: YesNo,
        pub time_obtaining_using: YesNo,
        pub craving_desire: YesNo,
        pub failure_obligations: YesNo,
        pub continued_despite_problems: YesNo,
        pub activities_given_up: YesNo,
        pub hazardous_situations: YesNo,
        pub physical_psychological_problems: YesNo,
        pub tolerance: YesNo,
        pub withdrawal: YesNo,
        pub cows_score: i64 => 0..=48,
        pub treatment_readiness: TreatmentReadiness,
        pub pregnancy_status: YesNo,
        pub buprenorphine_waiver: YesNo,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidacy {
    NotCandidate,
    HomeInduction,
    EdInduction,
}

impl Candidacy {
    fn token(self) -> &'static str {
        match self {
            Candidacy::NotCandidate => "not_candidate",
            Candidacy::HomeInduction => "candidate_home_induction",
            Candidacy::EdInduction => "candidate_ed_induction",
        }
    }
}

impl EmbedInput {

    fn dsm5_criteria(&self) -> i64 {
        [
            self.opioid_larger_amounts,
            self.unsuccessful_cut_down,
            self.time_obtaining_using,
            self.craving_desire,
            self.failure_obligations,
            self.continued_despite_problems,
            self.activities_given_up,
            self.hazardous_situations,
            self.physical_psychological_problems,
            self.tolerance,
            self.withdrawal,
        ]
        .iter()
        .map(|c| c.points(1))
        .sum()
    }

    /// Pregnancy defers to specialist consultation.
    fn candidacy(&self, dsm5: i64) -> Candidacy {
        if dsm5 < 2
            || self.treatment_readiness != TreatmentReadiness::Ready
            || !self.buprenorphine_waiver.is_yes()
            || self.pregnancy_status.is_yes()
        {
            Candidacy::NotCandidate
        } else if self.cows_score > 12 {
            Candidacy::EdInduction
        } else {
            Candidacy::HomeInduction
        }
    }
}

fn oud_severity(dsm5: i64) -> &'static str {
    match dsm5 {
        6.. => "Severe",
        4..=5 => "Moderate",
        2..=3 => "Mild",
        _ => "No OUD",
    }
}

fn withdrawal_severity(cows: i64) -> &'static str {
    match cows {
        13.. => "Moderate to Severe",
        8..=12 => "Mild to Moderate",
        _ => "None to Mild",
    }
}

pub fn calculate(input: &EmbedInput) -> CalcResult {
    let dsm5 = input.dsm5_criteria();
    let cows = input.cows_score;
    let candidacy = input.candidacy(dsm5);
    let summary = format!(
        "OUD severity: {} ({dsm5}/11 criteria). Withdrawal severity: {} (COWS: {cows}).",
        oud_severity(dsm5),
        withdrawal_severity(cows)
    );

    let interpretation = match candidacy {
        Candidacy::NotCandidate => Interpretation::new(
            "Not Candidate",
            "Not candidate for ED-initiated buprenorphine",
            format!("Patient does not meet criteria for ED-initiated buprenorphine treatment. {summary} Consider alternative treatment options, referral to addiction medicine, or reassessment when circumstances change."),
        ),
        Candidacy::HomeInduction => Interpretation::new(
            "Candidate - Home Induction",
            "Candidate for home induction protocol",
            format!("Patient meets criteria for buprenorphine treatment. {summary} COWS ≤12 indicates home induction protocol is appropriate. Provide patient education, prescription for home induction, clear instructions, and arrange follow-up care."),
        ),
        Candidacy::EdInduction => Interpretation::new(
            "Candidate - ED Induction",
            "Candidate for emergency department induction",
            format!("Patient meets all criteria for ED-initiated buprenorphine induction. {summary} COWS >12 indicates moderate to severe withdrawal suitable for immediate ED induction. Proceed with ED induction protocol, monitor for precipitated withdrawal, and arrange follow-up care."),
        ),
    };

    Ok(CalculatorResponse::new(
        candidacy.token(),
        "recommendation",
        interpretation,
    ))
}
