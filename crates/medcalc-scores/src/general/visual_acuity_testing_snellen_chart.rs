//! Snellen chart visual acuity.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum Eye {
        Right => "right_eye",
        Left => "left_eye",
        Both => "both_eyes",
    }
}

choice! {
    pub enum SnellenLine {
        Line1 => "line_1_20_200",
        Line2 => "line_2_20_160",
        Line3 => "line_3_20_125",
        Line4 => "line_4_20_100",
        Line5 => "line_5_20_80",
        Line6 => "line_6_20_63",
        Line7 => "line_7_20_50",
        Line8 => "line_8_20_40",
        Line9 => "line_9_20_32",
        Line10 => "line_10_20_25",
        Line11 => "line_11_20_20",
        CountingFingers => "counting_fingers",
        HandMotion => "hand_motion",
        LightPerception => "light_perception",
        NoLightPerception => "no_light_perception",
    }
}

choice! {
    pub enum TestingDistance {
        Feet20 => "20_feet",
        Meters6 => "6_meters",
        MobileFeet4 => "4_feet_mobile",
    }
}

choice! {
    pub enum Correction {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

calculator_input! {
    pub struct SnellenInput {
        pub eye_tested: Eye,
        pub lowest_line_read: SnellenLine,
        pub testing_distance: TestingDistance,
        pub corrective_lenses: Correction,
    }
}

impl SnellenLine {
    /// Snellen notation and its decimal equivalent.
    fn acuity(self) -> (&'static str, f64) {
        match self {
            SnellenLine::Line1 => ("20/200", 0.1),
            SnellenLine::Line2 => ("20/160", 0.125),
            SnellenLine::Line3 => ("20/125", 0.16),
            SnellenLine::Line4 => ("20/100", 0.2),
            SnellenLine::Line5 => ("20/80", 0.25),
            SnellenLine::Line6 => ("20/63", 0.317),
            SnellenLine::Line7 => ("20/50", 0.4),
            SnellenLine::Line8 => ("20/40", 0.5),
            SnellenLine::Line9 => ("20/32", 0.625),
            SnellenLine::Line10 => ("20/25", 0.8),
            SnellenLine::Line11 => ("20/20", 1.0),
            SnellenLine::CountingFingers => ("CF", 0.05),
            SnellenLine::HandMotion => ("HM", 0.025),
            SnellenLine::LightPerception => ("LP", 0.0125),
            SnellenLine::NoLightPerception => ("NLP", 0.0),
        }
    }

    fn is_low_vision_category(self) -> bool {
        matches!(
            self,
            SnellenLine::CountingFingers
                | SnellenLine::HandMotion
                | SnellenLine::LightPerception
                | SnellenLine::NoLightPerception
        )
    }

    fn spoken(self) -> &'static str {
        match self {
            SnellenLine::CountingFingers => "counting fingers",
            SnellenLine::HandMotion => "hand motion",
            SnellenLine::LightPerception => "light perception only",
            SnellenLine::NoLightPerception => "no light perception",
            other => other.acuity().0,
        }
    }
}

pub fn calculate(input: &SnellenInput) -> CalcResult {
    let line = input.lowest_line_read;
    let (notation, decimal) = line.acuity();
    let mobile = input.testing_distance == TestingDistance::MobileFeet4 && !line.is_low_vision_category();
    let result = if mobile {
        format!("{notation} (mobile)")
    } else {
        notation.to_string()
    };

    let mut interpretation = interpret(line, input.eye_tested, input.corrective_lenses);
    if mobile {
        interpretation.text.push_str(
            " Note: This measurement was obtained using mobile device testing, which may be less accurate than standard chart testing.",
        );
    }

    let mut significance = vec![match decimal {
        d if d >= 1.0 => "Normal visual acuity for distance vision",
        d if d >= 0.8 => "Mild reduction in visual acuity",
        d if d >= 0.5 => "Moderate reduction affecting daily activities",
        d if d >= 0.1 => "Severe visual impairment requiring intervention",
        _ => "Profound visual impairment requiring immediate evaluation",
    }];
    if input.corrective_lenses == Correction::No && decimal < 1.0 {
        significance.push("May benefit from corrective lenses");
    }
    if mobile {
        significance.push("Mobile testing limitation - confirmation with standard chart recommended");
    }

    Ok(CalculatorResponse::new(result, "fraction", interpretation)
        .with("decimal_equivalent", decimal)
        .with("legal_blindness_criteria", decimal <= 0.1)
        .with("clinical_significance", significance))
}

fn interpret(line: SnellenLine, eye: Eye, correction: Correction) -> Interpretation {
    let (notation, decimal) = line.acuity();
    let eye = match eye {
        Eye::Right => "right eye",
        Eye::Left => "left eye",
        Eye::Both => "both eyes",
    };
    let correction = match correction {
        Correction::Yes => "with correction",
        Correction::No => "without correction",
        Correction::Unknown => "correction status unknown",
    };

    if line == SnellenLine::Line11 {
        Interpretation::new(
            "Normal",
            "Normal visual acuity",
            format!(
                "Visual acuity of 20/20 in the {eye} represents normal vision {correction}. \
                 No immediate intervention needed unless other visual complaints are present. Continue routine eye care."
            ),
        )
    } else if decimal >= 0.5 {
        Interpretation::new(
            "Mild Impairment",
            "Mild visual impairment",
            format!(
                "Visual acuity of {notation} in the {eye} indicates mild visual impairment {correction}. \
                 Ophthalmologic evaluation recommended to determine need for corrective lenses or rule out early eye disease."
            ),
        )
    } else if decimal >= 0.2 {
        Interpretation::new(
            "Moderate Impairment",
            "Moderate visual impairment",
            format!(
                "Visual acuity of {notation} in the {eye} represents moderate visual impairment {correction}. \
                 Ophthalmologic evaluation indicated to determine underlying cause and appropriate treatment. This level of vision loss impacts daily activities."
            ),
        )
    } else if decimal >= 0.1 {
        let legal = if line == SnellenLine::Line1 {
            "This meets the criteria for legal blindness in the United States. "
        } else {
            ""
        };
        Interpretation::new(
            "Severe Impairment",
            "Severe visual impairment approaching legal blindness",
            format!(
                "Visual acuity of {notation} in the {eye} represents severe visual impairment {correction}. {legal}\
                 Urgent ophthalmologic evaluation required. Consider low vision rehabilitation services and visual aids."
            ),
        )
    } else {
        Interpretation::new(
            "Profound Impairment",
            "Profound visual impairment",
            format!(
                "Visual acuity of {} in the {eye} represents profound visual impairment {correction}. \
                 Immediate ophthalmologic evaluation required to determine if vision loss is reversible and identify any treatable causes.",
                line.spoken()
            ),
        )
    }
}
