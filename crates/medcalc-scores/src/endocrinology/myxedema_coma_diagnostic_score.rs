//! Popoveniuc diagnostic score for myxedema coma.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum Temperature {
        Normal => "normal_37",
        Mild => "mild_hypothermia_35_37",
        Moderate => "moderate_hypothermia_32_35",
        Severe => "severe_hypothermia_below_32",
    }
}

choice! {
    pub enum CentralNervousSystem {
        Normal => "normal",
        MildLethargy => "mild_lethargy",
        ModerateSomnolence => "moderate_somnolence",
        StuporSemicoma => "stupor_semicoma",
        Coma => "coma",
    }
}

choice! {
    pub enum Cardiovascular {
        Normal => "normal",
        MildBradycardia => "mild_bradycardia",
        ModerateBradycardiaHypotension => "moderate_bradycardia_hypotension",
        SevereShock => "severe_shock",
    }
}

choice! {
    pub enum Gastrointestinal {
        Normal => "normal",
        MildConstipation => "mild_constipation",
        ModerateDistension => "moderate_distension",
        SevereIleus => "severe_ileus",
    }
}

choice! {
    pub enum Metabolic {
        Normal => "normal",
        MildHyponatremia => "mild_hyponatremia",
        ModerateHyponatremia => "moderate_hyponatremia",
        SevereHyponatremiaHypoglycemia => "severe_hyponatremia_hypoglycemia",
    }
}

choice! {
    pub enum Precipitant {
        None => "none",
        MinorStress => "minor_stress",
        ModerateStress => "moderate_stress",
        MajorStress => "major_stress",
    }
}

calculator_input! {
    pub struct MyxedemaInput {
        pub body_temperature: Temperature,
        pub central_nervous_system: CentralNervousSystem,
        pub cardiovascular_dysfunction: Cardiovascular,
        pub gastrointestinal_dysfunction: Gastrointestinal,
        pub metabolic_dysfunction: Metabolic,
        pub precipitating_event: Precipitant,
    }
}

pub fn calculate(input: &MyxedemaInput) -> CalcResult {
    let temperature = match input.body_temperature {
        Temperature::Normal => 0,
        Temperature::Mild => 10,
        Temperature::Moderate => 15,
        Temperature::Severe => 20,
    };
    let cns = match input.central_nervous_system {
        CentralNervousSystem::Normal => 0,
        CentralNervousSystem::MildLethargy => 10,
        CentralNervousSystem::ModerateSomnolence => 20,
        CentralNervousSystem::StuporSemicoma => 25,
        CentralNervousSystem::Coma => 30,
    };
    let cardiovascular = match input.cardiovascular_dysfunction {
        Cardiovascular::Normal => 0,
        Cardiovascular::MildBradycardia => 5,
        Cardiovascular::ModerateBradycardiaHypotension => 10,
        Cardiovascular::SevereShock => 15,
    };
    let gastrointestinal = match input.gastrointestinal_dysfunction {
        Gastrointestinal::Normal => 0,
        Gastrointestinal::MildConstipation => 5,
        Gastrointestinal::ModerateDistension => 10,
        Gastrointestinal::SevereIleus => 15,
    };
    let metabolic = match input.metabolic_dysfunction {
        Metabolic::Normal => 0,
        Metabolic::MildHyponatremia => 5,
        Metabolic::ModerateHyponatremia => 10,
        Metabolic::SevereHyponatremiaHypoglycemia => 15,
    };
    let precipitating = match input.precipitating_event {
        Precipitant::None => 0,
        Precipitant::MinorStress => 5,
        Precipitant::ModerateStress => 10,
        Precipitant::MajorStress => 15,
    };
    let total = temperature + cns + cardiovascular + gastrointestinal + metabolic + precipitating;

    Ok(CalculatorResponse::new(total, "points", interpret(total)).with(
        "component_scores",
        json!({
            "temperature": temperature,
            "cns": cns,
            "cardiovascular": cardiovascular,
            "gastrointestinal": gastrointestinal,
            "metabolic": metabolic,
            "precipitating": precipitating,
        }),
    ))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..25 => Interpretation::new(
            "Unlikely",
            "Myxedema coma unlikely",
            format!("MYXEDEMA COMA UNLIKELY (Score: {score}): Score <25 makes the diagnosis of myxedema coma unlikely. EVALUATION: Consider alternative diagnoses for altered mental status, hypothermia, or cardiovascular dysfunction. MONITORING: If clinical suspicion remains, obtain thyroid function tests (TSH, free T4) and continue supportive care. DIFFERENTIAL: Evaluate for sepsis, drug intoxication, metabolic disorders, or other causes of altered consciousness. FOLLOW-UP: Reassess if clinical condition changes or if thyroid dysfunction is confirmed."),
        ),
        25..45 => Interpretation::new(
            "Possible",
            "Myxedema coma possible but unlikely",
            format!("MYXEDEMA COMA POSSIBLE BUT UNLIKELY (Score: {score}): Low probability of myxedema coma but cannot be excluded. EVALUATION: Continue evaluation for other causes while considering thyroid function assessment. MONITORING: Obtain urgent thyroid function tests (TSH, free T4) and monitor closely. MANAGEMENT: Provide supportive care and address any precipitating factors. REASSESSMENT: Consider repeat scoring if clinical condition deteriorates or new symptoms develop."),
        ),
        45..60 => Interpretation::new(
            "At Risk",
            "Patient at risk for myxedema coma",
            format!("PATIENT AT RISK FOR MYXEDEMA COMA (Score: {score}): Intermediate probability - patient at significant risk for myxedema coma. EVALUATION: Urgent thyroid function testing (TSH, free T4, free T3) and close monitoring required. MANAGEMENT: Consider empirical thyroid hormone therapy if severe hypothyroidism suspected and clinical deterioration evident. MONITORING: Intensive care monitoring recommended. Address precipitating factors and provide aggressive supportive care. ESCALATION: Prepare for potential progression to full myxedema coma."),
        ),
        _ => Interpretation::new(
            "Diagnostic",
            "Highly suggestive of myxedema coma",
            format!("HIGHLY SUGGESTIVE OF MYXEDEMA COMA (Score: {score}): High probability - potentially diagnostic for myxedema coma. IMMEDIATE TREATMENT: Emergency intervention required. Administer IV levothyroxine (200-400 mcg bolus, then 50-100 mcg daily) and IV liothyronine (T3) if available. SUPPORTIVE CARE: Intensive care monitoring, mechanical ventilation if needed, vasopressor support for shock, passive rewarming for hypothermia. MANAGEMENT: Treat precipitating factors, provide stress-dose corticosteroids (hydrocortisone 100-300 mg every 8 hours), correct electrolyte abnormalities. PROGNOSIS: High mortality risk requiring immediate aggressive treatment."),
        ),
    }
}
