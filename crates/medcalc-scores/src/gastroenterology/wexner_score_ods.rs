//! Wexner (Cleveland Clinic) fecal incontinence score.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

const CLINICAL_THRESHOLD: i64 = 10;

calculator_input! {
    pub struct WexnerInput {
        pub incontinence_solid_stool: i64 => 0..=4,
        pub incontinence_liquid_stool: i64 => 0..=4,
        pub incontinence_gas: i64 => 0..=4,
        pub wears_pad: i64 => 0..=4,
        pub lifestyle_alteration: i64 => 0..=4,
    }
}

fn frequency(score: i64) -> &'static str {
    match score {
        0 => "Never",
        1 => "Less than once a month",
        2 => "Less than once a week but at least once a month",
        3 => "Less than once a day but at least once a week",
        _ => "At least once a day",
    }
}

pub fn calculate(input: &WexnerInput) -> CalcResult {
    let items = [
        ("incontinence_solid_stool", "Solid Stool Incontinence", input.incontinence_solid_stool),
        ("incontinence_liquid_stool", "Liquid Stool Incontinence", input.incontinence_liquid_stool),
        ("incontinence_gas", "Gas Incontinence", input.incontinence_gas),
        ("wears_pad", "Protective Pad Use", input.wears_pad),
        ("lifestyle_alteration", "Lifestyle Impact", input.lifestyle_alteration),
    ];
    let total: i64 = items.iter().map(|(_, _, score)| score).sum();
    let components: Map<String, Value> = items
        .iter()
        .map(|(field, label, score)| {
            (
                field.to_string(),
                json!({ "score": score, "frequency": frequency(*score), "description": label }),
            )
        })
        .collect();
    let severe: Vec<&str> = items
        .iter()
        .filter(|(_, _, score)| *score >= 3)
        .map(|(field, _, _)| *field)
        .collect();
    let severe_labels: Vec<&str> = items
        .iter()
        .filter(|(_, _, score)| *score >= 3)
        .map(|(_, label, _)| *label)
        .collect();

    let interpretation = interpret(total);
    let qol = match total {
        0 => "No impact on quality of life",
        1..=5 => "Minimal impact on quality of life",
        6..=9 => "Moderate impact on quality of life",
        10..=15 => "Significant impact on quality of life",
        _ => "Severe impact on quality of life",
    };

    Ok(CalculatorResponse::new(total, "points", interpretation.clone())
        .with("severity_category", interpretation.stage)
        .with("component_scores", Value::Object(components))
        .with("most_severe_components", severe_labels)
        .with("clinical_recommendations", recommendations(input, total, &severe))
        .with("quality_of_life_impact", qol)
        .with("requires_specialist_referral", total >= CLINICAL_THRESHOLD))
}

fn recommendations(input: &WexnerInput, total: i64, severe: &[&str]) -> Vec<&'static str> {
    if total == 0 {
        return vec![
            "No specific treatment required for incontinence",
            "Continue routine gastrointestinal care",
            "Monitor for symptom development",
        ];
    }
    if total < CLINICAL_THRESHOLD {
        let mut recs = vec![
            "Conservative management approach",
            "Dietary modifications and fiber supplementation",
            "Pelvic floor exercises and bowel training",
            "Patient education about bowel function",
        ];
        if input.incontinence_gas >= 2 {
            recs.push("Consider dietary triggers for gas incontinence");
        }
        if input.lifestyle_alteration >= 2 {
            recs.push("Lifestyle counseling and behavioral modifications");
        }
        return recs;
    }

    let mut recs = vec![
        "Comprehensive gastroenterology evaluation",
        "Anorectal physiology testing (manometry, ultrasound)",
        "Consider specialist referral (colorectal surgery)",
    ];
    if total >= 15 {
        recs.extend(["Consider surgical intervention options", "Evaluate for sacral nerve stimulation"]);
    } else if total >= 12 {
        recs.extend(["Advanced conservative therapies", "Biofeedback training evaluation"]);
    }
    for field in severe {
        match *field {
            "incontinence_solid_stool" => recs.push("Evaluate for structural abnormalities"),
            "incontinence_liquid_stool" => recs.push("Assess for inflammatory bowel conditions"),
            "wears_pad" => recs.push("Assess impact on skin integrity and hygiene"),
            "lifestyle_alteration" => recs.extend([
                "Psychological support and counseling",
                "Quality of life assessment and support",
            ]),
            _ => {}
        }
    }
    recs
}

fn interpret(score: i64) -> Interpretation {
    if score == 0 {
        Interpretation::new(
            "Perfect Continence",
            "Perfect continence with no symptoms",
            format!("Wexner score of {score} indicates perfect continence with no fecal incontinence symptoms. No treatment is typically required for incontinence. Continue routine care and lifestyle modifications as appropriate for any underlying gastrointestinal conditions. Regular follow-up may be beneficial to monitor for symptom development."),
        )
    } else if score < CLINICAL_THRESHOLD {
        Interpretation::new(
            "Mild Incontinence",
            "Mild fecal incontinence",
            format!("Wexner score of {score} indicates mild fecal incontinence that may have minimal impact on quality of life. Consider conservative management including dietary modifications (fiber supplementation, avoiding trigger foods), pelvic floor exercises, bowel training programs, and behavioral modifications. Monitor symptoms and reassess regularly. Patient education about normal bowel function and lifestyle modifications may be beneficial."),
        )
    } else {
        Interpretation::new(
            "Clinical Incontinence",
            "Clinically significant fecal incontinence",
            format!("Wexner score of {score} indicates clinically significant fecal incontinence requiring active management. Consider comprehensive evaluation including anorectal physiology testing (manometry, endoanal ultrasound), imaging studies, and gastroenterology or colorectal surgery specialist referral. Treatment options may include advanced conservative therapies, biofeedback training, sacral nerve stimulation, injectable bulking agents, or surgical interventions depending on underlying etiology and patient factors."),
        )
    }
}
