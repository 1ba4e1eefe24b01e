//! Trunk Impairment Scale (Verheyden), 0 to 23 points.
//!
//! Static sitting gates the whole test. Within the dynamic and
//! coordination subscales an item only counts when the item it follows
//! scored above 0.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum SittingBalance {
        FallsOrCannotMaintain => "falls_or_cannot_maintain",
        MaintainsPosition => "maintains_position",
    }
}

choice! {
    pub enum LegCrossing {
        Falls => "falls",
        CannotCrossWithoutArmSupport => "cannot_cross_without_arm_support",
        CrossesWithDisplacementOrAssistance => "crosses_with_displacement_or_assistance",
        CrossesWithoutDisplacement => "crosses_without_displacement",
    }
}

choice! {
    pub enum ElbowTouch {
        FallsNeedsSupportOrNoTouch => "falls_needs_support_or_no_touch",
        MovesActivelyAndTouches => "moves_actively_and_touches",
    }
}

choice! {
    pub enum Shortening {
        NoOrOpposite => "no_or_opposite_shortening",
        Appropriate => "appropriate_shortening",
    }
}

choice! {
    pub enum Compensation {
        Present => "compensation_present",
        Absent => "moves_without_compensation",
    }
}

choice! {
    /// First item of each coordination pair.
    pub enum LeadRotation {
        HemiplegicNotMoved3x => "hemiplegic_not_moved_3x",
        Asymmetrical => "asymmetrical_rotation",
        Symmetrical => "symmetrical_rotation",
    }
}

choice! {
    pub enum Rotation {
        Asymmetrical => "asymmetrical_rotation",
        Symmetrical => "symmetrical_rotation",
    }
}

calculator_input! {
    pub struct TisInput {
        pub static_item_1: YesNo,
        pub static_item_2: SittingBalance,
        pub static_item_3: LegCrossing,
        pub dynamic_item_1: ElbowTouch,
        pub dynamic_item_2: Shortening,
        pub dynamic_item_3: Compensation,
        pub dynamic_item_4: ElbowTouch,
        pub dynamic_item_5: Shortening,
        pub dynamic_item_6: Compensation,
        pub dynamic_item_7: Shortening,
        pub dynamic_item_8: Compensation,
        pub dynamic_item_9: Shortening,
        pub dynamic_item_10: Compensation,
        pub coordination_item_1: LeadRotation,
        pub coordination_item_2: Rotation,
        pub coordination_item_3: LeadRotation,
        pub coordination_item_4: Rotation,
    }
}

fn touch(item: ElbowTouch) -> i64 {
    i64::from(item == ElbowTouch::MovesActivelyAndTouches)
}

fn shortening(item: Shortening) -> i64 {
    i64::from(item == Shortening::Appropriate)
}

fn compensation(item: Compensation) -> i64 {
    i64::from(item == Compensation::Absent)
}

fn lead_rotation(item: LeadRotation) -> i64 {
    match item {
        LeadRotation::HemiplegicNotMoved3x => 0,
        LeadRotation::Asymmetrical => 1,
        LeadRotation::Symmetrical => 2,
    }
}

fn rotation(item: Rotation) -> i64 {
    i64::from(item == Rotation::Symmetrical)
}

/// Sum of a chain where each later item counts only after a non-zero one.
fn chained(items: &[i64]) -> i64 {
    let mut total = 0;
    for &points in items {
        total += points;
        if points == 0 {
            break;
        }
    }
    total
}

impl TisInput {
    fn static_score(&self) -> i64 {
        let crossing = match self.static_item_3 {
            LegCrossing::Falls => 0,
            LegCrossing::CannotCrossWithoutArmSupport => 1,
            LegCrossing::CrossesWithDisplacementOrAssistance => 2,
            LegCrossing::CrossesWithoutDisplacement => 3,
        };
        self.static_item_1.points(2) + 2 * i64::from(self.static_item_2 == SittingBalance::MaintainsPosition) + crossing
    }

    fn dynamic_score(&self) -> i64 {
        chained(&[
            touch(self.dynamic_item_1),
            shortening(self.dynamic_item_2),
            compensation(self.dynamic_item_3),
        ]) + chained(&[
            touch(self.dynamic_item_4),
            shortening(self.dynamic_item_5),
            compensation(self.dynamic_item_6),
        ]) + chained(&[shortening(self.dynamic_item_7), compensation(self.dynamic_item_8)])
            + chained(&[shortening(self.dynamic_item_9), compensation(self.dynamic_item_10)])
    }

    fn coordination_score(&self) -> i64 {
        chained(&[lead_rotation(self.coordination_item_1), rotation(self.coordination_item_2)])
            + chained(&[lead_rotation(self.coordination_item_3), rotation(self.coordination_item_4)])
    }
}

const CANNOT_SIT: (&str, &str, &str) = (
    "Severe Impairment",
    "Unable to maintain starting position",
    "Patient cannot maintain the basic sitting position without support for 10 seconds. This indicates severe trunk impairment requiring intensive rehabilitation and support. Complete assessment cannot be performed due to inability to maintain starting position.",
);

pub fn calculate(input: &TisInput) -> CalcResult {
    let score = if input.static_item_1.is_yes() {
        input.static_score() + input.dynamic_score() + input.coordination_score()
    } else {
        0
    };

    let (stage, description, text) = match score {
        0 => CANNOT_SIT,
        1..=7 => (
            "Severe Impairment",
            "Severe trunk motor impairment",
            "Significant trunk motor impairment with limited static and dynamic sitting balance. Requires intensive rehabilitation focusing on basic trunk control and sitting balance. High risk for falls and functional limitations in daily activities.",
        ),
        8..=15 => (
            "Moderate Impairment",
            "Moderate trunk motor impairment",
            "Moderate trunk impairment with some preserved sitting balance but difficulties with dynamic movements and coordination. May benefit from targeted trunk rehabilitation exercises. Some functional activities may be compromised.",
        ),
        16..=19 => (
            "Mild Impairment",
            "Mild trunk motor impairment",
            "Mild trunk impairment with generally good sitting balance but some deficits in coordination or dynamic movements. Rehabilitation should focus on fine-tuning trunk control and coordination.",
        ),
        _ => (
            "Normal/Near Normal",
            "Normal or near-normal trunk function",
            "Excellent trunk function with minimal or no impairment. Good sitting balance, dynamic control, and coordination. May require minimal intervention or maintenance therapy.",
        ),
    };
    Ok(CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text)))
}
