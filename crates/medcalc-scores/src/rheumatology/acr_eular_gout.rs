//! 2015 ACR/EULAR gout classification criteria.
//!
//! Entry requires at least one episode of peripheral joint or bursa
//! swelling, pain or tenderness. MSU crystals in a symptomatic site are
//! sufficient on their own; otherwise the weighted domains (-6 to 23) must
//! reach 7.
//!
//! Data to verify: the published 2015 criteria classify at 8 points or more.
//! The 7-point cut-off is kept as the calculator has always applied it until
//! it is checked against Neogi et al., Arthritis Rheumatol 2015.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const THRESHOLD: i64 = 7;

choice! {
    pub enum MsuCrystals {
        Yes => "yes",
        No => "no",
        NotTested => "not_tested",
    }
}

choice! {
    pub enum JointPattern {
        /// Joint or bursa other than ankle, midfoot or first MTP.
        Other => "other_joint",
        AnkleMidfoot => "ankle_midfoot",
        FirstMtp => "first_mtp",
    }
}

choice! {
    /// Erythema, intolerable touch or pressure, difficulty walking.
    pub enum EpisodeCharacteristics {
        Zero => "none",
        One => "one",
        Two => "two",
        Three => "three",
    }
}

choice! {
    pub enum TypicalEpisodes {
        Zero => "none",
        One => "one",
        Recurrent => "recurrent",
    }
}

choice! {
    pub enum Finding {
        Absent => "absent",
        Present => "present",
    }
}

choice! {
    /// mg/dL, measured off urate-lowering therapy.
    pub enum SerumUrate {
        Under4 => "under_4",
        From4To6 => "4_to_6",
        From6To8 => "6_to_8",
        From8To10 => "8_to_10",
        Over10 => "over_10",
    }
}

choice! {
    pub enum SynovialFluid {
        NegativeMsu => "negative_msu",
        NotDone => "not_done",
    }
}

calculator_input! {
    pub struct GoutInput {
        pub entry_criterion: YesNo,
        pub msu_crystals_present: MsuCrystals,
        pub joint_pattern: JointPattern,
        pub episode_characteristics: EpisodeCharacteristics,
        pub typical_episodes: TypicalEpisodes,
        pub tophus_evidence: Finding,
        pub serum_urate: SerumUrate,
        pub synovial_fluid_analysis: SynovialFluid,
        pub imaging_urate_deposition: Finding,
        pub imaging_joint_damage: Finding,
    }
}

impl GoutInput {
    fn domains(&self) -> [(&'static str, i64); 8] {
        let joint = match self.joint_pattern {
            JointPattern::Other => 0,
            JointPattern::AnkleMidfoot => 1,
            JointPattern::FirstMtp => 2,
        };
        let characteristics = match self.episode_characteristics {
            EpisodeCharacteristics::Zero => 0,
            EpisodeCharacteristics::One => 1,
            EpisodeCharacteristics::Two => 2,
            EpisodeCharacteristics::Three => 3,
        };
        let episodes = match self.typical_episodes {
            TypicalEpisodes::Zero => 0,
            TypicalEpisodes::One => 1,
            TypicalEpisodes::Recurrent => 2,
        };
        let urate = match self.serum_urate {
            SerumUrate::Under4 => -4,
            SerumUrate::From4To6 => 0,
            SerumUrate::From6To8 => 2,
            SerumUrate::From8To10 => 3,
            SerumUrate::Over10 => 4,
        };
        let synovial = match self.synovial_fluid_analysis {
            SynovialFluid::NegativeMsu => -2,
            SynovialFluid::NotDone => 0,
        };
        [
            ("joint_pattern", joint),
            ("episode_characteristics", characteristics),
            ("typical_episodes", episodes),
            ("tophus_evidence", self.tophus_evidence.points(4)),
            ("serum_urate", urate),
            ("synovial_fluid_analysis", synovial),
            ("imaging_urate_deposition", self.imaging_urate_deposition.points(4)),
            ("imaging_joint_damage", self.imaging_joint_damage.points(4)),
        ]
    }
}

impl Finding {
    fn points(self, points: i64) -> i64 {
        match self {
            Finding::Present => points,
            Finding::Absent => 0,
        }
    }
}

pub fn calculate(input: &GoutInput) -> CalcResult {
    if !input.entry_criterion.is_yes() {
        return Ok(CalculatorResponse::new(
            "Entry criterion not met",
            "classification",
            Interpretation::new(
                "Entry criterion not met",
                "Prerequisites not satisfied",
                "Entry criterion not met. Patient must have ≥1 episode of swelling, pain, or tenderness in a peripheral joint or bursa to proceed with gout classification.",
            ),
        ));
    }

    if input.msu_crystals_present == MsuCrystals::Yes {
        return Ok(CalculatorResponse::new(
            "Definite gout (MSU crystals present)",
            "classification",
            Interpretation::new(
                "Definite gout",
                "MSU crystals present",
                "Definite gout. Presence of monosodium urate (MSU) crystals in symptomatic joint, bursa, or tophus is sufficient for gout diagnosis according to ACR/EULAR 2015 criteria.",
            ),
        ));
    }

    let domains = input.domains();
    let score: i64 = domains.iter().map(|(_, points)| points).sum();
    let breakdown: serde_json::Map<String, serde_json::Value> = domains
        .iter()
        .map(|(name, points)| (name.to_string(), json!(points)))
        .collect();

    let interpretation = if score >= THRESHOLD {
        Interpretation::new(
            "Meets criteria for gout",
            "Meets gout classification criteria",
            format!("Score {score}/23 points. Meets ACR/EULAR 2015 classification criteria for gout. Diagnosis consistent with gout. Consider appropriate urate-lowering therapy and management of acute attacks."),
        )
    } else {
        Interpretation::new(
            "Does not meet criteria",
            "Does not meet gout classification criteria",
            format!("Score {score}/23 points. Does not meet ACR/EULAR 2015 classification criteria for gout (requires ≥7 points). Consider alternative diagnoses such as pseudogout (CPPD crystal arthropathy), septic arthritis, rheumatoid arthritis, or other inflammatory arthropathies."),
        )
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("classification", format!("Score {score}/23 points"))
        .with("domain_scores", breakdown))
}
