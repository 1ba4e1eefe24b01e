//! Kruis score for irritable bowel syndrome.
//!
//! Symptom items add points; laboratory and examination red flags subtract
//! them. A total of 44 or more supports the diagnosis.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::{Map, Value};

const THRESHOLD: i64 = 44;

calculator_input! {
    pub struct KruisInput {
        pub symptoms_present: YesNo,
        pub duration_over_2_years: YesNo,
        pub pain_description: YesNo,
        pub alternating_bowel_habits: YesNo,
        pub abnormal_physical_findings: YesNo,
        pub esr_over_10: YesNo,
        pub wbc_over_10000: YesNo,
        pub low_hemoglobin: YesNo,
        pub history_blood_in_stool: YesNo,
    }
}

struct RedFlag {
    field: &'static str,
    flag: &'static str,
    label: &'static str,
    points: i64,
}

const RED_FLAGS: [RedFlag; 5] = [
    RedFlag {
        field: "abnormal_physical_findings",
        flag: "abnormal_physical_findings",
        label: "abnormal physical examination findings",
        points: -47,
    },
    RedFlag {
        field: "esr_over_10",
        flag: "elevated_esr",
        label: "elevated ESR (>10 mm/hr)",
        points: -13,
    },
    RedFlag {
        field: "wbc_over_10000",
        flag: "elevated_wbc",
        label: "elevated WBC count (>10,000/μL)",
        points: -50,
    },
    RedFlag {
        field: "low_hemoglobin",
        flag: "anemia",
        label: "anemia (low hemoglobin)",
        points: -98,
    },
    RedFlag {
        field: "history_blood_in_stool",
        flag: "blood_in_stool",
        label: "history of blood in stool",
        points: -98,
    },
];

pub fn calculate(input: &KruisInput) -> CalcResult {
    let symptoms = [
        ("symptoms_present", input.symptoms_present, 34),
        ("duration_over_2_years", input.duration_over_2_years, 16),
        ("pain_description", input.pain_description, 23),
        ("alternating_bowel_habits", input.alternating_bowel_habits, 14),
    ];
    let flag_answers = [
        input.abnormal_physical_findings,
        input.esr_over_10,
        input.wbc_over_10000,
        input.low_hemoglobin,
        input.history_blood_in_stool,
    ];

    let mut individual = Map::new();
    let mut symptom_score = 0;
    for (field, answer, points) in symptoms {
        let earned = answer.points(points);
        symptom_score += earned;
        individual.insert(field.to_string(), earned.into());
    }

    let mut red_flag_score = 0;
    let mut present = Vec::new();
    for (flag, answer) in RED_FLAGS.iter().zip(flag_answers) {
        let earned = answer.points(flag.points);
        red_flag_score += earned;
        individual.insert(flag.field.to_string(), earned.into());
        if answer.is_yes() {
            present.push(flag);
        }
    }

    let total = symptom_score + red_flag_score;
    let positive = total >= THRESHOLD;
    let interpretation = if positive {
        Interpretation::new(
            "Positive for IBS",
            format!("Score ≥ {THRESHOLD} points"),
            narrative(total, &present),
        )
    } else {
        Interpretation::new(
            "Negative for IBS",
            format!("Score < {THRESHOLD} points"),
            narrative(total, &present),
        )
    };

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("symptom_score", symptom_score)
        .with("red_flag_score", red_flag_score)
        .with("individual_scores", Value::Object(individual))
        .with(
            "red_flags_present",
            present.iter().map(|f| f.flag).collect::<Vec<_>>(),
        )
        .with("diagnostic_threshold", THRESHOLD)
        .with("meets_threshold", positive))
}

fn narrative(total: i64, flags: &[&RedFlag]) -> String {
    let positive = total >= THRESHOLD;
    let mut text = if positive {
        format!(
            "Score of {total} points indicates IBS diagnosis is likely. Patient meets Kruis criteria threshold (≥{THRESHOLD} points) for irritable bowel syndrome. "
        )
    } else {
        format!(
            "Score of {total} points suggests IBS diagnosis is unlikely. Patient does not meet Kruis criteria threshold (≥{THRESHOLD} points). Consider further evaluation for organic gastrointestinal disease. "
        )
    };

    if flags.is_empty() {
        text.push_str("No red flags identified, which supports the diagnostic assessment. ");
    } else {
        let labels = flags.iter().map(|f| f.label).collect::<Vec<_>>().join(", ");
        text.push_str(&format!(
            "IMPORTANT: Red flags present ({labels}). Organic pathology must be excluded through appropriate investigation before diagnosing IBS. Consider colonoscopy, CT scan, or other imaging as clinically indicated. "
        ));
    }

    text.push_str(match (positive, flags.is_empty()) {
        (true, true) => "With positive Kruis criteria and absence of red flags, IBS diagnosis can be made with confidence (81% sensitivity, 91% specificity). Consider initiating IBS management including dietary modifications, symptom-targeted therapies, and patient education. ",
        (true, false) => "Despite positive Kruis score, presence of red flags mandates exclusion of organic disease before IBS diagnosis. ",
        (false, _) => "Consider alternative diagnoses including inflammatory bowel disease, celiac disease, microscopic colitis, or other organic conditions. Clinical correlation and further investigation are recommended. ",
    });
    text.push_str("Note: The Kruis Score (1984) was one of the first validated IBS diagnostic tools but has largely been superseded by Rome criteria in clinical practice.");
    text
}
