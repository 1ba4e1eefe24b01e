//! Rule of Nines burn surface estimate.
//!
//! Each region is entered as the percentage of that region burned and
//! weighted by the region's share of total body surface area. Children and
//! infants share the same chart.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum AgeGroup {
        Adult => "adult",
        Child => "child",
        Infant => "infant",
    }
}

calculator_input! {
    pub struct RuleOfNinesInput {
        pub patient_age_group: AgeGroup,
        pub head_neck_percentage: f64 => 0.0..=100.0,
        pub anterior_torso_percentage: f64 => 0.0..=100.0,
        pub posterior_torso_percentage: f64 => 0.0..=100.0,
        pub right_arm_percentage: f64 => 0.0..=100.0,
        pub left_arm_percentage: f64 => 0.0..=100.0,
        pub right_leg_percentage: f64 => 0.0..=100.0,
        pub left_leg_percentage: f64 => 0.0..=100.0,
        pub genitalia_percentage: f64 => 0.0..=100.0,
    }
}

/// Region weights in the order head/neck, anterior torso, posterior torso,
/// right arm, left arm, right leg, left leg, genitalia.
const ADULT_CHART: [f64; 8] = [9.0, 18.0, 18.0, 9.0, 9.0, 18.0, 18.0, 1.0];
const PEDIATRIC_CHART: [f64; 8] = [18.0, 18.0, 18.0, 9.0, 9.0, 13.5, 13.5, 1.0];

impl AgeGroup {
    fn chart(self) -> &'static [f64; 8] {
        match self {
            AgeGroup::Adult => &ADULT_CHART,
            AgeGroup::Child | AgeGroup::Infant => &PEDIATRIC_CHART,
        }
    }

    fn fluid_threshold(self) -> f64 {
        match self {
            AgeGroup::Adult => 10.0,
            AgeGroup::Child | AgeGroup::Infant => 5.0,
        }
    }
}

pub fn calculate(input: &RuleOfNinesInput) -> CalcResult {
    let regions = [
        ("head_neck_percentage", input.head_neck_percentage),
        ("anterior_torso_percentage", input.anterior_torso_percentage),
        ("posterior_torso_percentage", input.posterior_torso_percentage),
        ("right_arm_percentage", input.right_arm_percentage),
        ("left_arm_percentage", input.left_arm_percentage),
        ("right_leg_percentage", input.right_leg_percentage),
        ("left_leg_percentage", input.left_leg_percentage),
        ("genitalia_percentage", input.genitalia_percentage),
    ];
    let tbsa: f64 = regions
        .iter()
        .zip(input.patient_age_group.chart())
        .map(|((_, burned), weight)| burned / 100.0 * weight)
        .sum();

    Ok(CalculatorResponse::new(
        round_to(tbsa, 1),
        "%",
        interpret(tbsa, input.patient_age_group),
    ))
}

fn interpret(tbsa: f64, group: AgeGroup) -> Interpretation {
    let threshold = group.fluid_threshold();
    let age_note = match group {
        AgeGroup::Adult => format!(
            "Adult patients require fluid resuscitation at ≥{threshold}% TBSA. Calculate Parkland formula: 4 mL/kg/% TBSA over 24 hours."
        ),
        AgeGroup::Child | AgeGroup::Infant => format!(
            "Pediatric patients require fluid resuscitation at ≥{threshold}% TBSA. Consider early burn center transfer for specialized pediatric burn care."
        ),
    };

    if tbsa < 10.0 {
        Interpretation::new(
            "Minor Burn",
            "Outpatient management usually appropriate",
            format!(
                "Minor burn ({tbsa:.1}% TBSA) typically manageable on outpatient basis with proper wound care and follow-up. \
                 Ensure adequate pain management, tetanus prophylaxis, and wound care education. {age_note} \
                 Consider referral to burn specialist for complex burns involving face, hands, feet, joints, or genitalia even if <10% TBSA."
            ),
        )
    } else if tbsa < 20.0 {
        Interpretation::new(
            "Moderate Burn",
            "Consider hospital admission and burn center consultation",
            format!(
                "Moderate burn ({tbsa:.1}% TBSA) requires careful assessment for hospital admission and burn center consultation. \
                 Initiate fluid resuscitation if ≥{threshold}% TBSA. {age_note} \
                 Monitor urine output, vital signs, and pain control. Establish IV access and begin appropriate fluid management."
            ),
        )
    } else if tbsa < 30.0 {
        Interpretation::new(
            "Major Burn",
            "Hospital admission and burn center transfer required",
            format!(
                "Major burn ({tbsa:.1}% TBSA) requires immediate hospital admission and burn center transfer. \
                 Begin aggressive fluid resuscitation using Parkland formula. Monitor for compartment syndrome, respiratory compromise and burn shock. {age_note} \
                 Early surgical consultation for escharotomy if circumferential burns present."
            ),
        )
    } else {
        Interpretation::new(
            "Severe Burn",
            "Life-threatening injury requiring immediate intensive care",
            format!(
                "Severe burn ({tbsa:.1}% TBSA) represents life-threatening injury requiring immediate intensive care and burn center management. \
                 High mortality risk necessitating aggressive resuscitation, airway management, and multi-organ support. {age_note} \
                 Early intubation may be required for airway protection. Early surgical intervention for escharotomy and burn excision."
            ),
        )
    }
}
