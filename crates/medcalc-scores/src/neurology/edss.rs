//! Kurtzke Expanded Disability Status Scale for multiple sclerosis.
//!
//! Scores below 5.0 come from the functional system (FS) grades; from
//! 5.0 upward the ambulation grade dominates. The scale is computed in
//! half-steps so every branch stays on the 0.5 grid.

use std::collections::HashMap;

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct EdssInput {
        pub pyramidal: i64 => 0..=6,
        pub cerebellar: i64 => 0..=5,
        pub brainstem: i64 => 0..=5,
        pub sensory: i64 => 0..=6,
        pub bowel_bladder: i64 => 0..=6,
        pub visual: i64 => 0..=6,
        pub cerebral: i64 => 0..=5,
        pub ambulation: i64 => 0..=10,
    }
}

impl EdssInput {

    /// FS grades with visual and bowel/bladder converted to their
    /// EDSS-equivalent grades.
    fn converted_grades(&self) -> [i64; 7] {
        let visual = self.visual.min(4);
        let bowel_bladder = if self.bowel_bladder == 6 { 5 } else { self.bowel_bladder };
        [
            self.pyramidal,
            self.cerebellar,
            self.brainstem,
            self.sensory,
            bowel_bladder,
            visual,
            self.cerebral,
        ]
    }
}

fn half_steps(grades: &[i64; 7], ambulation: i64) -> i64 {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &grade in grades.iter().filter(|g| **g > 0) {
        *counts.entry(grade).or_default() += 1;
    }
    let count = |grade: i64| counts.get(&grade).copied().unwrap_or(0);
    let max_fs = grades.iter().copied().max().unwrap_or(0);

    if count(2) >= 5 {
        return 10;
    }

    if ambulation < 5 {
        return match max_fs {
            0 => 0,
            1 if count(1) == 1 => 2,
            1 => 3,
            2 if count(2) == 1 && count(1) <= 1 => 4,
            2 => 5,
            3 if count(3) == 1 && count(2) <= 1 => 6,
            3 => 7,
            _ if ambulation >= 4 => 9,
            _ => 8,
        };
    }

    let worse = match ambulation {
        5 | 6 => max_fs >= 4,
        7..=9 => max_fs >= 5,
        _ => return 20,
    };
    ambulation * 2 + i64::from(worse)
}

fn interpret(steps: i64) -> Interpretation {
    let (stage, description, text) = match steps {
        0 => (
            "Normal",
            "Normal neurological exam",
            "Normal neurological examination. All grade 0 in all functional systems.",
        ),
        1..=3 => (
            "Minimal Disability",
            "No disability, minimal signs",
            "No disability, minimal signs in one or more functional systems.",
        ),
        4..=5 => (
            "Mild Disability",
            "Minimal disability in one FS",
            "Minimal disability in one functional system.",
        ),
        6..=7 => (
            "Moderate Disability",
            "Moderate disability in one FS",
            "Moderate disability in one functional system or mild disability in three or four functional systems though fully ambulatory.",
        ),
        8..=9 => (
            "Relatively Severe Disability",
            "Fully ambulatory without aid",
            "Fully ambulatory without aid, self-sufficient, up and about some 12 hours a day despite relatively severe disability. Able to walk without aid or rest for 500m.",
        ),
        10..=11 => (
            "Disability Severe Enough",
            "Ambulatory without aid for 200m",
            "Ambulatory without aid or rest for about 200 meters; disability severe enough to impair full daily activities.",
        ),
        12..=13 => (
            "Assistance Required",
            "Intermittent or constant assistance required",
            "Intermittent or unilateral constant assistance (cane, crutch, brace) required to walk about 100 meters with or without resting.",
        ),
        14..=15 => (
            "Restricted to Wheelchair",
            "Unable to walk beyond 5m",
            "Unable to walk beyond approximately 5 meters even with aid, essentially restricted to wheelchair.",
        ),
        16..=17 => (
            "Restricted to Bed or Chair",
            "Essentially restricted to bed/chair",
            "Essentially restricted to bed or chair or perambulated in wheelchair, but out of bed most of day; retains many self-care functions.",
        ),
        18..=19 => (
            "Helpless Bed Patient",
            "Helpless bed patient",
            "Helpless bed patient; can communicate and eat.",
        ),
        _ => ("Death", "Death due to MS", "Death due to MS."),
    };
    Interpretation::new(stage, description, text)
}

pub fn calculate(input: &EdssInput) -> CalcResult {
    let steps = half_steps(&input.converted_grades(), input.ambulation);
    Ok(CalculatorResponse::new(steps as f64 / 2.0, "points", interpret(steps)))
}
