//! DASH score for VTE recurrence after a first unprovoked event.
//!
//! D-dimer abnormal after stopping anticoagulation (+2), age ≤50 (+1),
//! male sex (+1), VTE associated with hormonal therapy in women (−2).

use medcalc_core::math::ensure;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex};
use serde_json::json;

choice! {
    pub enum DDimer {
        Positive => "positive",
        Negative => "negative",
    }
}

choice! {
    pub enum HormonalTherapy {
        Yes => "yes",
        No => "no",
        NotApplicable => "not_applicable",
    }
}

choice! {
    pub enum VteType {
        DvtOnly => "dvt_only",
        PeOnly => "pe_only",
        DvtAndPe => "dvt_and_pe",
        NotSpecified => "not_specified",
    }
}

calculator_input! {
    pub struct DashInput {
        pub d_dimer_positive: DDimer,
        pub age: i64 => 18..=100,
        pub sex: Sex,
        pub hormonal_therapy: HormonalTherapy,
        pub vte_type: Option<VteType>,
        /// Months of anticoagulation completed.
        pub anticoagulation_duration: Option<i64> => 3..=24,
    }
}

struct RiskBand {
    category: &'static str,
    label: &'static str,
    description: &'static str,
    annual_risk: f64,
    confidence_interval: &'static str,
    recommendation: &'static str,
}

const LOW: RiskBand = RiskBand {
    category: "low",
    label: "Low Risk",
    description: "Low annual recurrence risk",
    annual_risk: 3.1,
    confidence_interval: "2.3-3.9%",
    recommendation: "Consider discontinuing anticoagulation",
};

const INTERMEDIATE: RiskBand = RiskBand {
    category: "intermediate",
    label: "Intermediate Risk",
    description: "Moderate annual recurrence risk",
    annual_risk: 6.4,
    confidence_interval: "4.8-7.9%",
    recommendation: "Individualized decision based on bleeding risk",
};

const HIGH: RiskBand = RiskBand {
    category: "high",
    label: "High Risk",
    description: "High annual recurrence risk",
    annual_risk: 12.3,
    confidence_interval: "9.9-14.7%",
    recommendation: "Consider prolonged/indefinite anticoagulation",
};

impl DashInput {
    fn validate(&self) -> CalcResult<()> {
        ensure(
            !(self.sex == Sex::Male && self.hormonal_therapy != HormonalTherapy::NotApplicable),
            "For male patients, hormonal_therapy should be 'not_applicable'",
        )?;
        Ok(())
    }

    fn score(&self) -> i64 {
        let mut score = 0;
        if self.d_dimer_positive == DDimer::Positive {
            score += 2;
        }
        if self.age <= 50 {
            score += 1;
        }
        if self.sex == Sex::Male {
            score += 1;
        }
        if self.sex.is_female() && self.hormonal_therapy == HormonalTherapy::Yes {
            score -= 2;
        }
        score
    }

    fn specific_considerations(&self, band: &RiskBand) -> Vec<String> {
        let mut notes = Vec::new();
        if self.age > 65 {
            if band.category == "low" {
                notes.push("Despite low DASH score, age >65 may warrant extended anticoagulation consideration".to_string());
            }
            notes.push("Enhanced bleeding risk assessment important in elderly patients".to_string());
        }
        if self.age < 40 {
            notes.push("Young age may favor longer anticoagulation if bleeding risk is low".to_string());
        }
        if matches!(self.vte_type, Some(VteType::PeOnly | VteType::DvtAndPe)) {
            notes.push("Pulmonary embolism may warrant more conservative approach to discontinuation".to_string());
        }
        if let Some(months) = self.anticoagulation_duration
            && months >= 6
        {
            notes.push(format!(
                "Already treated for {months} months - consider patient tolerance and preferences"
            ));
        }
        notes
    }
}

fn band_for(score: i64) -> &'static RiskBand {
    match score {
        ..=1 => &LOW,
        2 => &INTERMEDIATE,
        _ => &HIGH,
    }
}

fn primary_recommendations(band: &RiskBand) -> [&'static str; 5] {
    match band.category {
        "low" => [
            "Consider discontinuing anticoagulation after 3-6 months",
            "Monitor for signs and symptoms of VTE recurrence",
            "Patient education about VTE risk factors and prevention",
            "Regular follow-up for risk reassessment",
            "Consider mechanical prophylaxis during high-risk periods",
        ],
        "intermediate" => [
            "Individualized decision-making required",
            "Assess bleeding risk using validated tools (HAS-BLED, HEMORR2HAGES)",
            "Consider patient preferences and quality of life factors",
            "Discuss risks and benefits of continued anticoagulation",
            "May consider extended anticoagulation (6-12 months) with reassessment",
        ],
        _ => [
            "Strong consideration for prolonged anticoagulation",
            "Evaluate for indefinite anticoagulation if bleeding risk acceptable",
            "Regular monitoring for bleeding complications",
            "Periodic reassessment of risk-benefit ratio",
            "Consider newer anticoagulants with improved safety profiles",
        ],
    }
}

pub fn calculate(input: &DashInput) -> CalcResult {
    input.validate()?;
    let score = input.score();
    let band = band_for(score);

    let base = format!(
        "DASH score of {score} indicates {} with {}% annual VTE recurrence risk (95% CI {}).",
        band.label, band.annual_risk, band.confidence_interval
    );
    let guidance = match band.category {
        "low" => "The low recurrence risk justifies discontinuing anticoagulation after 3-6 months of treatment, assuming bleeding risk is not elevated.",
        "intermediate" => "The moderate recurrence risk suggests need for individualized decision-making, carefully weighing thrombotic risk against bleeding risk and considering patient preferences.",
        _ => "The high recurrence risk warrants strong consideration for prolonged or indefinite anticoagulation if bleeding risk is acceptable.",
    };

    let hormonal_points = if input.sex.is_female() && input.hormonal_therapy == HormonalTherapy::Yes { -2 } else { 0 };
    let components = json!([
        {"component": "D-dimer", "points": if input.d_dimer_positive == DDimer::Positive { 2 } else { 0 }, "description": format!("D-dimer {}", input.d_dimer_positive)},
        {"component": "Age", "points": if input.age <= 50 { 1 } else { 0 }, "description": format!("Age {} years ({})", input.age, if input.age <= 50 { "≤50" } else { ">50" })},
        {"component": "Sex", "points": if input.sex == Sex::Male { 1 } else { 0 }, "description": if input.sex.is_female() { "Female sex" } else { "Male sex" }},
        {"component": "Hormonal therapy", "points": hormonal_points, "description": format!("Hormonal therapy: {}", input.hormonal_therapy)},
    ]);

    Ok(CalculatorResponse::new(
        score,
        "DASH score",
        Interpretation::new(band.label, band.description, format!("{base} {guidance}")),
    )
    .with("risk_category", band.category)
    .with("annual_risk", format!("{}%", band.annual_risk))
    .with("annual_risk_numeric", band.annual_risk)
    .with("confidence_interval", band.confidence_interval)
    .with("recommendation", band.recommendation)
    .with(
        "anticoagulation_recommendations",
        json!({
            "primary_recommendations": primary_recommendations(band),
            "specific_considerations": input.specific_considerations(band),
        }),
    )
    .with("score_components", components))
}
