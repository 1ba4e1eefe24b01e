//! Manning criteria for irritable bowel syndrome, with red-flag screen.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::{json, Map, Value};

const THRESHOLD: i64 = 3;

calculator_input! {
    pub struct ManningInput {
        pub pain_onset_frequent_bowel_movements: YesNo,
        pub looser_stools_with_pain_onset: YesNo,
        pub pain_relief_with_defecation: YesNo,
        pub noticeable_abdominal_bloating: YesNo,
        pub incomplete_evacuation_sensation: YesNo,
        pub diarrhea_with_mucus: YesNo,
        pub patient_age: i64 => 10..=100,
        pub weight_loss: YesNo,
        pub blood_in_stools: YesNo,
        pub anemia: YesNo,
        pub fever: YesNo,
    }
}

pub fn calculate(input: &ManningInput) -> CalcResult {
    let criteria = [
        ("pain_onset_frequent_bm", input.pain_onset_frequent_bowel_movements),
        ("looser_stools_with_pain", input.looser_stools_with_pain_onset),
        ("pain_relief_defecation", input.pain_relief_with_defecation),
        ("abdominal_bloating", input.noticeable_abdominal_bloating),
        ("incomplete_evacuation", input.incomplete_evacuation_sensation),
        ("diarrhea_with_mucus", input.diarrhea_with_mucus),
    ];
    let red_flags = [
        ("age_over_50", input.patient_age > 50),
        ("weight_loss", input.weight_loss.is_yes()),
        ("blood_in_stools", input.blood_in_stools.is_yes()),
        ("anemia", input.anemia.is_yes()),
        ("fever", input.fever.is_yes()),
    ];

    let criteria_scores: Map<String, Value> = criteria
        .iter()
        .map(|(key, answer)| (key.to_string(), answer.points(1).into()))
        .collect();
    let total = criteria.iter().map(|(_, answer)| answer.points(1)).sum::<i64>();
    let flags: Map<String, Value> = red_flags
        .iter()
        .map(|(key, present)| (key.to_string(), (*present).into()))
        .collect();
    let present: Vec<&str> = red_flags
        .iter()
        .filter(|(_, present)| *present)
        .map(|(key, _)| *key)
        .collect();
    let has_red_flags = !present.is_empty();

    let (likelihood, recommendation) = match (total >= THRESHOLD, has_red_flags) {
        (true, false) => ("IBS diagnosis supported", "Consider IBS treatment and management"),
        (true, true) => (
            "Further evaluation required",
            "Investigate red flag symptoms before IBS diagnosis",
        ),
        (false, _) => ("IBS diagnosis not supported", "Consider alternative diagnoses"),
    };
    let red_flag_summary = if present.is_empty() {
        "None".to_string()
    } else {
        present.join(", ")
    };

    Ok(
        CalculatorResponse::new(total, "criteria", interpret(total, has_red_flags))
            .with("criteria_scores", Value::Object(criteria_scores))
            .with("red_flags", Value::Object(flags))
            .with("has_red_flags", has_red_flags)
            .with(
                "assessment_data",
                json!({
                    "diagnostic_likelihood": likelihood,
                    "recommendation": recommendation,
                    "criteria_threshold": format!("≥{THRESHOLD} criteria needed"),
                    "present_red_flags": red_flag_summary,
                    "sensitivity_range": "63-90%",
                    "specificity_range": "70-93%",
                    "next_steps": "Consider Rome IV criteria and appropriate investigations",
                }),
            ),
    )
}

fn interpret(total: i64, has_red_flags: bool) -> Interpretation {
    if total < THRESHOLD {
        Interpretation::new(
            "IBS Unlikely",
            "Insufficient criteria for IBS diagnosis",
            format!("Only {total} of 6 Manning criteria met (minimum 3 required). IBS diagnosis is unlikely based on current symptom pattern. Consider alternative diagnoses including functional dyspepsia, inflammatory bowel disease, celiac disease, gastroparesis, or other organic gastrointestinal conditions. Further evaluation may be warranted based on clinical presentation including appropriate laboratory studies, imaging, and possibly endoscopic evaluation. Rome IV criteria may provide additional diagnostic guidance."),
        )
    } else if has_red_flags {
        Interpretation::new(
            "Further Evaluation Required",
            "Sufficient criteria but red flags present",
            format!("{total} of 6 Manning criteria met, suggesting possible IBS. However, red flag symptoms are present which require investigation before establishing IBS diagnosis. Red flags may indicate organic gastrointestinal disease requiring specific treatment. Recommended workup may include complete blood count, inflammatory markers (ESR, CRP), celiac serology, stool studies, and consider colonoscopy or other imaging as clinically indicated. IBS diagnosis should only be considered after excluding organic pathology."),
        )
    } else {
        Interpretation::new(
            "IBS Likely",
            "Sufficient criteria for IBS diagnosis with no red flags",
            format!("{total} of 6 Manning criteria met with no red flag symptoms present. This supports a diagnosis of irritable bowel syndrome. Consider initiating symptomatic treatment including dietary modifications (low FODMAP diet), antispasmodics, probiotics, and lifestyle changes. Rome IV criteria provide more current diagnostic standards and may be considered for confirmation. Reassess if symptoms worsen or new concerning features develop. Patient education about chronic nature and symptom management is important."),
        )
    }
}
