//! Clinical Disease Activity Index for rheumatoid arthritis: the sum of
//! the 28-joint tender and swollen counts and the patient and provider
//! global assessments (0-76). No laboratory value is needed.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

calculator_input! {
    pub struct CdaiInput {
        pub tender_joint_count: i64 => 0..=28,
        pub swollen_joint_count: i64 => 0..=28,
        /// 0-10 visual analog scale.
        pub patient_global_activity: f64 => 0.0..=10.0,
        /// 0-10 visual analog scale.
        pub provider_global_activity: f64 => 0.0..=10.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Remission,
    Low,
    Moderate,
    High,
}

impl Activity {
    fn from_score(score: f64) -> Self {
        if score <= 2.8 {
            Activity::Remission
        } else if score <= 10.0 {
            Activity::Low
        } else if score <= 22.0 {
            Activity::Moderate
        } else {
            Activity::High
        }
    }

    fn stage(self) -> &'static str {
        match self {
            Activity::Remission => "Remission",
            Activity::Low => "Low Disease Activity",
            Activity::Moderate => "Moderate Disease Activity",
            Activity::High => "High Disease Activity",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Activity::Remission => "Disease in remission",
            Activity::Low => "Low disease activity",
            Activity::Moderate => "Moderate disease activity",
            Activity::High => "High disease activity",
        }
    }

    fn category(self) -> &'static str {
        match self {
            Activity::Remission => "Remission",
            other => other.description(),
        }
    }

    fn narrative(self) -> &'static str {
        match self {
            Activity::Remission => "Disease in remission. Excellent disease control with minimal inflammatory activity. Maintain current therapy and monitor for sustained remission.",
            Activity::Low => "Low disease activity. Good disease control with acceptable inflammatory activity. Consider maintaining current therapy or carefully tapering if in sustained low activity.",
            Activity::Moderate => "Moderate disease activity. Suboptimal control with significant inflammatory activity. Consider intensifying therapy to achieve low disease activity or remission.",
            Activity::High => "High disease activity. Poor control with severe inflammatory activity. Urgent need to intensify therapy. Consider combination DMARDs or biologics.",
        }
    }

    fn treatment(self) -> [&'static str; 4] {
        match self {
            Activity::Remission => [
                "Maintain current therapy - excellent disease control",
                "Monitor for sustained remission over time",
                "Consider gradual tapering if sustained remission >6 months",
                "Continue regular monitoring to ensure remission maintenance",
            ],
            Activity::Low => [
                "Continue current therapy - good disease control",
                "Consider maintaining current dose or careful tapering",
                "Monitor closely if considering dose reduction",
                "Aim for achieving and maintaining remission if possible",
            ],
            Activity::Moderate => [
                "Consider intensifying therapy - suboptimal control",
                "Evaluate current DMARD therapy effectiveness",
                "Consider combination DMARD therapy or biologic agents",
                "Assess for barriers to treatment adherence",
            ],
            Activity::High => [
                "Urgent need to intensify therapy - poor control",
                "Consider combination DMARDs or biologic therapy",
                "Evaluate for rapidly acting interventions",
                "Consider referral to rheumatology specialist if not already involved",
            ],
        }
    }

    fn monitoring(self) -> &'static str {
        match self {
            Activity::Remission => "Every 3-6 months - monitor for sustained remission",
            Activity::Low => "Every 2-3 months - ensure sustained low disease activity",
            Activity::Moderate => "Every 1-2 months - monitor response to therapy intensification",
            Activity::High => "Every 2-4 weeks - close monitoring until disease control achieved",
        }
    }

    fn targets(self) -> Value {
        let (primary, secondary, long_term) = match self {
            Activity::Remission => (
                "Maintain remission (CDAI ≤2.8)",
                "Prevent disease flares and joint damage",
                "Sustained drug-free remission if possible",
            ),
            Activity::Low => (
                "Achieve remission (CDAI ≤2.8)",
                "Maintain low disease activity (CDAI ≤10)",
                "Prevent disease progression and joint damage",
            ),
            Activity::Moderate | Activity::High => (
                "Achieve low disease activity (CDAI ≤10)",
                "Achieve remission (CDAI ≤2.8) if possible",
                "Prevent irreversible joint damage and disability",
            ),
        };
        json!({
            "primary_target": primary,
            "secondary_target": secondary,
            "long_term_goal": long_term,
        })
    }
}

fn share(part: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{}%", fixed(part / total * 100.0, 1))
    } else {
        "0%".to_string()
    }
}

fn component(value: Value, part: f64, max: i64, total: f64, significance: &str, method: &str) -> Value {
    json!({
        "value": value,
        "max_value": max,
        "contribution": value,
        "percentage": share(part, total),
        "clinical_significance": significance,
        "assessment_method": method,
    })
}

pub fn calculate(input: &CdaiInput) -> CalcResult {
    let score = round_to(
        (input.tender_joint_count + input.swollen_joint_count) as f64
            + input.patient_global_activity
            + input.provider_global_activity,
        1,
    );
    let activity = Activity::from_score(score);
    let text = format!("CDAI Score {}: {}", fixed(score, 1), activity.narrative());

    let breakdown = json!({
        "score_components": {
            "tender_joint_count": component(
                json!(input.tender_joint_count),
                input.tender_joint_count as f64,
                28,
                score,
                "Reflects subjective pain and inflammation from patient perspective",
                "28-joint count including shoulders, elbows, wrists, MCPs, PIPs, knees",
            ),
            "swollen_joint_count": component(
                json!(input.swollen_joint_count),
                input.swollen_joint_count as f64,
                28,
                score,
                "Objective measure of inflammatory joint involvement",
                "28-joint count assessed by palpation and visual inspection",
            ),
            "patient_global_activity": component(
                json!(input.patient_global_activity),
                input.patient_global_activity,
                10,
                score,
                "Patient's overall assessment of disease impact on daily life",
                "0-10 visual analog scale (0 = very well, 10 = very poor)",
            ),
            "provider_global_activity": component(
                json!(input.provider_global_activity),
                input.provider_global_activity,
                10,
                score,
                "Physician's overall assessment of disease activity",
                "0-10 visual analog scale (0 = very well, 10 = very poor)",
            ),
        },
        "score_summary": {
            "total_cdai_score": score,
            "max_possible_score": 76,
            "activity_category": activity.category(),
            "target_score": "≤2.8 for remission, ≤10 for low disease activity",
        },
        "clinical_guidance": {
            "treatment_recommendations": activity.treatment(),
            "monitoring_frequency": activity.monitoring(),
            "treatment_targets": activity.targets(),
        },
        "assessment_advantages": {
            "immediate_availability": "No laboratory tests required - results available immediately",
            "clinical_practicality": "More practical than DAS-28 for routine clinical use",
            "cost_effectiveness": "No additional laboratory costs",
            "patient_engagement": "Incorporates patient perspective in disease assessment",
        },
        "comparison_with_other_indices": {
            "vs_das28": "CDAI shows moderate to good correlation with DAS-28 (Kappa = 0.533)",
            "vs_sdai": "CDAI is SDAI without acute phase reactant (CRP/ESR)",
            "advantages": "Immediate results, no lab dependency, practical for routine use",
            "validation": "Extensively validated and widely accepted in clinical practice",
        },
        "clinical_context": {
            "assessment_timing": "Assess at each clinic visit to monitor treatment response",
            "treat_to_target": "Aim for remission (≤2.8) or low disease activity (≤10)",
            "shared_decision_making": "Include patient perspective in treatment decisions",
            "long_term_outcomes": "Sustained low disease activity prevents joint damage",
        },
    });

    Ok(CalculatorResponse::new(
        score,
        "points",
        Interpretation::new(activity.stage(), activity.description(), text),
    )
    .with("scoring_breakdown", breakdown))
}
