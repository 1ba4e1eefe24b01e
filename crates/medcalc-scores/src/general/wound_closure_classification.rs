//! Wound closure classification: primary, secondary or tertiary (delayed
//! primary) closure.
//!
//! Significant tissue loss and gross contamination are decided first. A
//! clean wound is then checked against its location and vascularity time
//! window for primary closure.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

const IDEAL_HOURS: f64 = 8.0;
const EXTENDED_HOURS: f64 = 24.0;

choice! {
    pub enum Contamination {
        Clean => "clean",
        Contaminated => "contaminated",
        GrosslyContaminated => "grossly_contaminated",
    }
}

choice! {
    pub enum TissueLoss {
        Minimal => "minimal",
        Moderate => "moderate",
        Significant => "significant",
    }
}

choice! {
    pub enum Vascularization {
        Well => "well_vascularized",
        Moderate => "moderately_vascularized",
        Poor => "poorly_vascularized",
    }
}

choice! {
    pub enum WoundLocation {
        FaceScalp => "face_scalp",
        Extremities => "extremities",
        Trunk => "trunk",
        HandsFeet => "hands_feet",
        Joints => "joints",
        Other => "other",
    }
}

calculator_input! {
    pub struct WoundClosureInput {
        pub contamination_level: Contamination,
        pub tissue_loss: TissueLoss,
        pub time_since_injury: f64 => 0.0..=168.0,
        pub vascularization: Vascularization,
        pub wound_location: WoundLocation,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closure {
    Primary,
    Secondary,
    Tertiary,
}

impl WoundClosureInput {
    fn primary_window(&self) -> f64 {
        if self.wound_location == WoundLocation::FaceScalp || self.vascularization == Vascularization::Well {
            EXTENDED_HOURS
        } else {
            IDEAL_HOURS
        }
    }

    /// Rationale for primary closure, or `None` when the wound does not qualify.
    fn primary_rationale(&self) -> Option<String> {
        let hours = self.time_since_injury;
        if self.contamination_level != Contamination::Clean
            || self.tissue_loss == TissueLoss::Significant
            || hours > self.primary_window()
            || (self.vascularization == Vascularization::Poor && hours > IDEAL_HOURS)
        {
            return None;
        }
        let mut reasons = vec![if hours <= IDEAL_HOURS {
            "within ideal time window"
        } else {
            "within acceptable time window"
        }];
        if self.vascularization == Vascularization::Well {
            reasons.push("well-vascularized wound bed");
        }
        if self.wound_location == WoundLocation::FaceScalp {
            reasons.push("facial location with excellent blood supply");
        }
        Some(format!(
            "Clean wound with {} tissue loss, {}",
            self.tissue_loss,
            reasons.join(", ")
        ))
    }

    fn classify(&self) -> (Closure, String) {
        if self.tissue_loss == TissueLoss::Significant {
            return (
                Closure::Secondary,
                "Significant tissue loss prevents tension-free primary closure".into(),
            );
        }
        if self.contamination_level == Contamination::GrosslyContaminated {
            return (
                Closure::Tertiary,
                "Grossly contaminated wound requires debridement and observation to minimize infection risk".into(),
            );
        }
        if let Some(rationale) = self.primary_rationale() {
            return (Closure::Primary, rationale);
        }
        if self.contamination_level == Contamination::Contaminated || self.time_since_injury > EXTENDED_HOURS {
            return (
                Closure::Tertiary,
                "Contaminated wound or delayed presentation - requires observation before closure".into(),
            );
        }
        (
            Closure::Secondary,
            "Wound characteristics favor healing by secondary intention".into(),
        )
    }
}

pub fn calculate(input: &WoundClosureInput) -> CalcResult {
    let (closure, rationale) = input.classify();
    let (token, interpretation, recommendations, timing) = match closure {
        Closure::Primary => (
            "primary_closure",
            Interpretation::new(
                "Primary Closure",
                "Direct surgical closure indicated",
                format!(
                    "PRIMARY CLOSURE recommended. {rationale}. Perform thorough irrigation and debridement before closure. Consider layered closure for deep wounds."
                ),
            ),
            vec![
                "Thorough wound irrigation with normal saline",
                "Adequate anesthesia (local, regional, or systemic)",
                "Careful debridement of devitalized tissue",
                "Layered closure if deep subcutaneous involvement",
                "Appropriate suture selection based on location",
                "Post-procedure wound care instructions",
            ],
            format!("Closure within {EXTENDED_HOURS} hours optimal"),
        ),
        Closure::Secondary => (
            "secondary_closure",
            Interpretation::new(
                "Secondary Closure",
                "Healing by secondary intention",
                format!(
                    "SECONDARY CLOSURE (healing by secondary intention) recommended. {rationale}. Allow wound to heal through granulation tissue formation and wound contraction."
                ),
            ),
            vec![
                "Daily dressing changes with appropriate wound care products",
                "Maintain moist wound environment",
                "Monitor for signs of infection",
                "Nutritional optimization for wound healing",
                "Consider negative pressure wound therapy if appropriate",
                "Regular wound assessment and documentation",
            ],
            "Healing typically 2-6 weeks depending on wound size and patient factors".to_string(),
        ),
        Closure::Tertiary => (
            "tertiary_closure",
            Interpretation::new(
                "Tertiary (Delayed Primary) Closure",
                "Delayed closure after observation",
                format!(
                    "TERTIARY (DELAYED PRIMARY) CLOSURE recommended. {rationale}. Observe wound for 3-7 days before considering surgical closure."
                ),
            ),
            vec![
                "Thorough wound exploration and debridement",
                "Copious irrigation with normal saline",
                "Daily wound assessment and dressing changes",
                "Antibiotic prophylaxis consideration based on contamination",
                "Re-evaluate for closure in 3-7 days",
                "Consider skin grafting if delayed closure not feasible",
            ],
            "Observe for 3-7 days before closure attempt".to_string(),
        ),
    };

    Ok(CalculatorResponse::new(token, "categorical", interpretation)
        .with("rationale", rationale)
        .with("recommendations", recommendations)
        .with("timing_guidance", timing))
}
