//! Eczema Area and Severity Index (EASI).

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum AgeCategory {
        Child => "child_0_7",
        Adult => "adult_8_plus",
    }
}

calculator_input! {
    pub struct EasiInput {
        pub age_category: AgeCategory,
        pub head_neck_area: i64 => 0..=6,
        pub head_neck_erythema: i64 => 0..=3,
        pub head_neck_edema: i64 => 0..=3,
        pub head_neck_excoriation: i64 => 0..=3,
        pub head_neck_lichenification: i64 => 0..=3,
        pub upper_extremities_area: i64 => 0..=6,
        pub upper_extremities_erythema: i64 => 0..=3,
        pub upper_extremities_edema: i64 => 0..=3,
        pub upper_extremities_excoriation: i64 => 0..=3,
        pub upper_extremities_lichenification: i64 => 0..=3,
        pub trunk_area: i64 => 0..=6,
        pub trunk_erythema: i64 => 0..=3,
        pub trunk_edema: i64 => 0..=3,
        pub trunk_excoriation: i64 => 0..=3,
        pub trunk_lichenification: i64 => 0..=3,
        pub lower_extremities_area: i64 => 0..=6,
        pub lower_extremities_erythema: i64 => 0..=3,
        pub lower_extremities_edema: i64 => 0..=3,
        pub lower_extremities_excoriation: i64 => 0..=3,
        pub lower_extremities_lichenification: i64 => 0..=3,
    }
}

/// One body region: area score 0-6 and four severity signs 0-3.
struct Region {
    area: i64,
    signs: [i64; 4],
    multiplier: f64,
}

impl Region {
    fn score(&self) -> f64 {
        self.signs.iter().sum::<i64>() as f64 * self.area as f64 * self.multiplier
    }
}

pub fn calculate(input: &EasiInput) -> CalcResult {
    let head_multiplier = match input.age_category {
        AgeCategory::Child => 0.2,
        AgeCategory::Adult => 0.1,
    };
    let regions = [
        Region {
            area: input.head_neck_area,
            signs: [
                input.head_neck_erythema,
                input.head_neck_edema,
                input.head_neck_excoriation,
                input.head_neck_lichenification,
            ],
            multiplier: head_multiplier,
        },
        Region {
            area: input.upper_extremities_area,
            signs: [
                input.upper_extremities_erythema,
                input.upper_extremities_edema,
                input.upper_extremities_excoriation,
                input.upper_extremities_lichenification,
            ],
            multiplier: 0.2,
        },
        Region {
            area: input.trunk_area,
            signs: [
                input.trunk_erythema,
                input.trunk_edema,
                input.trunk_excoriation,
                input.trunk_lichenification,
            ],
            multiplier: 0.3,
        },
        Region {
            area: input.lower_extremities_area,
            signs: [
                input.lower_extremities_erythema,
                input.lower_extremities_edema,
                input.lower_extremities_excoriation,
                input.lower_extremities_lichenification,
            ],
            multiplier: 0.4,
        },
    ];
    let easi = round_to(regions.iter().map(Region::score).sum(), 1);
    Ok(CalculatorResponse::new(easi, "points", interpret(easi)))
}

fn interpret(easi: f64) -> Interpretation {
    if easi == 0.0 {
        Interpretation::new(
            "Clear",
            "No eczema",
            "Clear skin with no signs of atopic dermatitis. Continue maintenance skincare routine with regular moisturizing and environmental management to prevent flares.",
        )
    } else if easi <= 1.0 {
        Interpretation::new(
            "Almost Clear",
            "Almost clear eczema",
            "Almost clear atopic dermatitis with minimal residual signs. Continue current treatment regimen and monitor for improvement or potential relapse. Maintain consistent skincare routine.",
        )
    } else if easi <= 7.0 {
        Interpretation::new(
            "Mild",
            "Mild eczema",
            "Mild atopic dermatitis. First-line treatment with regular moisturizers, low-potency topical corticosteroids (Class VI-VII), and trigger avoidance. Focus on barrier repair and gentle skincare.",
        )
    } else if easi <= 21.0 {
        Interpretation::new(
            "Moderate",
            "Moderate eczema",
            "Moderate atopic dermatitis. Consider medium-potency topical corticosteroids (Class III-V), topical calcineurin inhibitors, or systemic therapy if topical treatments are inadequate. May require specialist referral.",
        )
    } else if easi <= 50.0 {
        Interpretation::new(
            "Severe",
            "Severe eczema",
            "Severe atopic dermatitis requiring intensive treatment. High-potency topical corticosteroids (Class I-II), topical calcineurin inhibitors, systemic immunosuppressants, or biologic therapy may be indicated. Dermatology consultation recommended.",
        )
    } else {
        Interpretation::new(
            "Very Severe",
            "Very severe eczema",
            "Very severe atopic dermatitis requiring aggressive multimodal treatment. Consider systemic immunosuppressants (methotrexate, cyclosporine), biologic therapy (dupilumab, tralokinumab), or referral to dermatology specialist for comprehensive management and quality of life assessment.",
        )
    }
}
