//! Leiden clinical prediction rule for progression of undifferentiated
//! arthritis to rheumatoid arthritis within a year (0-14 points).

use medcalc_core::math::{ensure, fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

const LOW_RISK_MAX: f64 = 6.0;
const HIGH_RISK_MIN: f64 = 8.0;

choice! {
    pub enum JointDistribution {
        Other => "other",
        SmallHandsFeet => "small_hands_feet",
        UpperExtremitiesOnly => "upper_extremities_only",
        UpperAndLowerExtremities => "upper_and_lower_extremities",
    }
}

choice! {
    pub enum MorningStiffness {
        LessThan30Min => "less_than_30_min",
        From30To59Min => "30_to_59_min",
        SixtyMinOrMore => "60_min_or_more",
    }
}

choice! {
    pub enum Serology {
        Negative => "negative",
        Positive => "positive",
    }
}

impl Serology {
    fn is_positive(self) -> bool {
        self == Serology::Positive
    }
}

calculator_input! {
    pub struct LeidenInput {
        pub age_years: i64 => 18..=120,
        pub sex: Sex,
        pub joint_distribution: JointDistribution,
        pub symmetric_distribution: YesNo,
        pub morning_stiffness_duration: MorningStiffness,
        pub tender_joints_count: i64 => 0..=68,
        pub swollen_joints_count: i64 => 0..=66,
        /// mg/L
        pub c_reactive_protein: f64,
        pub rheumatoid_factor: Serology,
        pub anti_ccp_antibodies: Serology,
    }
}

impl LeidenInput {
    fn validate(&self) -> CalcResult<()> {
        ensure(
            self.c_reactive_protein.is_finite() && self.c_reactive_protein >= 0.0,
            "C-reactive protein must be a non-negative number",
        )?;
        Ok(())
    }

    fn joint_count_points(count: i64) -> f64 {
        match count {
            ..4 => 0.0,
            4..=10 => 0.5,
            _ => 1.0,
        }
    }

    fn total(&self) -> f64 {
        let distribution = match self.joint_distribution {
            JointDistribution::Other => 0.0,
            JointDistribution::SmallHandsFeet => 0.5,
            JointDistribution::UpperExtremitiesOnly => 1.0,
            JointDistribution::UpperAndLowerExtremities => 1.5,
        };
        let stiffness = match self.morning_stiffness_duration {
            MorningStiffness::LessThan30Min => 0.0,
            MorningStiffness::From30To59Min => 0.5,
            MorningStiffness::SixtyMinOrMore => 1.0,
        };
        let crp = if self.c_reactive_protein < 5.0 {
            0.0
        } else if self.c_reactive_protein <= 50.0 {
            0.5
        } else {
            1.5
        };
        let sum = self.age_years as f64 * 0.02
            + if self.sex.is_female() { 1.0 } else { 0.0 }
            + distribution
            + if self.symmetric_distribution.is_yes() { 0.5 } else { 0.0 }
            + stiffness
            + Self::joint_count_points(self.tender_joints_count)
            + Self::joint_count_points(self.swollen_joints_count)
            + crp
            + if self.rheumatoid_factor.is_positive() { 1.0 } else { 0.0 }
            + if self.anti_ccp_antibodies.is_positive() { 2.0 } else { 0.0 };
        round_to(sum, 1)
    }

    fn contributing_factors(&self) -> Vec<&'static str> {
        let checks = [
            (self.age_years > 50, "older age"),
            (self.sex.is_female(), "female sex"),
            (
                matches!(
                    self.joint_distribution,
                    JointDistribution::SmallHandsFeet | JointDistribution::UpperAndLowerExtremities
                ),
                "typical joint distribution pattern",
            ),
            (self.symmetric_distribution.is_yes(), "symmetric joint involvement"),
            (
                self.morning_stiffness_duration == MorningStiffness::SixtyMinOrMore,
                "prolonged morning stiffness",
            ),
            (
                self.tender_joints_count >= 11 || self.swollen_joints_count >= 11,
                "multiple affected joints",
            ),
            (self.c_reactive_protein >= 5.0, "elevated inflammatory markers"),
            (self.rheumatoid_factor.is_positive(), "positive rheumatoid factor"),
            (self.anti_ccp_antibodies.is_positive(), "positive anti-CCP antibodies"),
        ];
        checks
            .into_iter()
            .filter_map(|(present, label)| present.then_some(label))
            .collect()
    }
}

pub fn calculate(input: &LeidenInput) -> CalcResult {
    input.validate()?;

    let score = input.total();
    let (stage, description, category, recommendations) = if score <= LOW_RISK_MAX {
        (
            "Low Risk",
            "Low risk of progression to rheumatoid arthritis",
            "Low",
            "Low likelihood of progression from undifferentiated arthritis to rheumatoid arthritis within one year. Conservative management with watchful waiting may be appropriate. Regular follow-up recommended to monitor for disease progression. Consider reassessment in 3-6 months or if symptoms worsen.",
        )
    } else if score < HIGH_RISK_MIN {
        (
            "Indeterminate Risk",
            "Indeterminate risk of progression to rheumatoid arthritis",
            "Intermediate",
            "Intermediate likelihood of progression to rheumatoid arthritis. Clinical judgment and additional factors should guide treatment decisions. Consider close monitoring with serial assessments. Early intervention may be considered depending on patient characteristics, symptom severity, and clinical presentation. Rheumatology consultation recommended.",
        )
    } else {
        (
            "High Risk",
            "High risk of progression to rheumatoid arthritis",
            "High",
            "High likelihood of progression from undifferentiated arthritis to rheumatoid arthritis within one year. Early initiation of disease-modifying antirheumatic drugs (DMARDs) should be strongly considered to prevent joint damage and disability. Urgent rheumatology consultation recommended for treatment planning.",
        )
    };

    let factors = input.contributing_factors();
    let mut text = format!(
        "Leiden Clinical Prediction Rule score: {} points. Risk category: {stage}. {recommendations}",
        fixed(score, 1)
    );
    if !factors.is_empty() {
        text.push_str(&format!(
            " Key contributing factors include: {}.",
            factors.join(", ")
        ));
    }
    text.push_str(" This prediction rule is designed for adults with recent-onset undifferentiated arthritis (symptom duration typically <6 months) to guide early treatment decisions. The tool should be used in conjunction with comprehensive clinical assessment and is not intended to replace rheumatological evaluation.");

    Ok(
        CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text))
            .with("risk_category", category)
            .with("contributing_factors", json!(factors)),
    )
}
