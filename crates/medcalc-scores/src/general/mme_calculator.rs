//! Morphine milligram equivalents (MME) across a list of opioid prescriptions.
//!
//! `opioid_medications` is a list of `{medication, dose, frequency_per_day,
//! route?}` objects, given either as a JSON array or as a string holding one.
//! Brand names are mapped to their generic entry; an unrecognised medication
//! converts at a factor of 1.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::params::{FromParam, Params};
use medcalc_core::{calculator_input, CalcError, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

/// One prescription line after parsing and name normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpioidDose {
    pub medication: String,
    pub dose: f64,
    pub frequency_per_day: f64,
    pub route: String,
}

/// Parsed `opioid_medications` parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct OpioidList(pub Vec<OpioidDose>);

calculator_input! {
    pub struct MmeInput {
        pub opioid_medications: OpioidList,
    }
}

const ALIASES: &[(&str, &str)] = &[
    ("morphine", "morphine_oral"),
    ("ms_contin", "morphine_oral"),
    ("oxycontin", "oxycodone"),
    ("percocet", "oxycodone"),
    ("vicodin", "hydrocodone"),
    ("norco", "hydrocodone"),
    ("tylenol_3", "codeine"),
    ("duragesic", "fentanyl_patch"),
    ("dilaudid", "hydromorphone_oral"),
    ("opana", "oxymorphone_oral"),
    ("ultram", "tramadol"),
    ("nucynta", "tapentadol"),
    ("suboxone", "buprenorphine_sublingual"),
    ("butrans", "buprenorphine_patch"),
    ("demerol", "meperidine"),
    ("talwin", "pentazocine"),
];

fn conversion_factor(medication: &str) -> Option<f64> {
    let factor = match medication {
        "morphine_oral" => 1.0,
        "morphine_iv" => 3.0,
        "oxycodone" => 1.5,
        "hydrocodone" => 1.0,
        "codeine" => 0.15,
        "fentanyl_patch" => 2.4,
        "fentanyl_oral" => 0.13,
        "hydromorphone_oral" => 4.0,
        "hydromorphone_iv" => 20.0,
        "oxymorphone_oral" => 3.0,
        "oxymorphone_iv" => 10.0,
        "tramadol" => 0.1,
        "tapentadol" => 0.4,
        "buprenorphine_patch" => 12.6,
        "buprenorphine_sublingual" => 30.0,
        "meperidine" => 0.1,
        "pentazocine" => 0.37,
        _ => return None,
    };
    Some(factor)
}

fn normalise_name(raw: &str) -> String {
    let name = raw.to_lowercase().replace([' ', '-'], "_");
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, generic)| generic.to_string())
        .unwrap_or(name)
}

fn positive_number(entry: &Value, key: &str, index: usize, what: &str) -> Result<f64, CalcError> {
    entry
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| *v > 0.0)
        .ok_or_else(|| CalcError::constraint(format!("Medication {index} {what} must be a positive number")))
}

fn parse_entry(index: usize, entry: &Value) -> Result<OpioidDose, CalcError> {
    let object = entry
        .as_object()
        .ok_or_else(|| CalcError::constraint(format!("Medication {index} must be an object")))?;
    for field in ["medication", "dose", "frequency_per_day"] {
        if !object.contains_key(field) {
            return Err(CalcError::constraint(format!(
                "Medication {index} missing required field: {field}"
            )));
        }
    }
    let medication = object
        .get("medication")
        .and_then(Value::as_str)
        .ok_or_else(|| CalcError::constraint(format!("Medication {index} name must be a string")))?;
    Ok(OpioidDose {
        medication: normalise_name(medication),
        dose: positive_number(entry, "dose", index, "dose")?,
        frequency_per_day: positive_number(entry, "frequency_per_day", index, "frequency")?,
        route: object
            .get("route")
            .and_then(Value::as_str)
            .unwrap_or("oral")
            .to_lowercase(),
    })
}

impl FromParam for OpioidList {
    fn from_param(params: &Params<'_>, name: &str) -> Result<Self, CalcError> {
        let raw = params.required(name)?;
        let parsed;
        let items = match raw {
            Value::Array(items) => items,
            Value::String(text) => {
                parsed = serde_json::from_str::<Value>(text).map_err(|_| {
                    CalcError::constraint("Invalid JSON format for opioid medications")
                })?;
                parsed.as_array().ok_or_else(|| {
                    CalcError::constraint("Medications must be provided as a JSON array")
                })?
            }
            _ => {
                return Err(CalcError::InvalidType {
                    field: name.to_string(),
                    expected: "a list of medications".to_string(),
                });
            }
        };
        if items.is_empty() {
            return Err(CalcError::constraint(
                "At least one opioid medication must be provided",
            ));
        }
        items
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_entry(i + 1, entry))
            .collect::<Result<Vec<_>, _>>()
            .map(OpioidList)
    }
}

impl OpioidDose {
    fn daily_dose(&self) -> f64 {
        self.dose * self.frequency_per_day
    }

    fn mme(&self) -> f64 {
        let med = self.medication.as_str();
        if med == "fentanyl_patch" || med == "buprenorphine_patch" {
            // Patch strengths are mcg/hr; frequency does not apply.
            return self.dose * conversion_factor(med).unwrap_or(1.0);
        }
        let daily = self.daily_dose();
        let factor = if med.starts_with("methadone") {
            match daily {
                d if d <= 20.0 => 4.0,
                d if d <= 40.0 => 8.0,
                d if d <= 60.0 => 10.0,
                _ => 12.0,
            }
        } else if self.route == "iv" || self.route == "intravenous" {
            let base = med.split('_').next().unwrap_or(med);
            conversion_factor(&format!("{base}_iv"))
                .or_else(|| conversion_factor(med))
                .unwrap_or(1.0)
        } else {
            conversion_factor(med).unwrap_or(1.0)
        };
        daily * factor
    }
}

pub fn calculate(input: &MmeInput) -> CalcResult {
    let doses = &input.opioid_medications.0;
    let contributions: Vec<f64> = doses.iter().map(OpioidDose::mme).collect();
    let total: f64 = contributions.iter().sum();

    let summary = doses
        .iter()
        .zip(&contributions)
        .map(|(dose, mme)| {
            format!("{} {}mg/day (MME: {})", dose.medication, dose.daily_dose(), fixed(*mme, 1))
        })
        .collect::<Vec<_>>()
        .join(", ");
    let details: Vec<Value> = doses
        .iter()
        .zip(&contributions)
        .map(|(dose, mme)| {
            json!({
                "medication": dose.medication,
                "dose": dose.dose,
                "frequency": dose.frequency_per_day,
                "route": dose.route,
                "daily_dose": dose.daily_dose(),
                "mme_contribution": round_to(*mme, 1),
            })
        })
        .collect();

    Ok(
        CalculatorResponse::new(round_to(total, 1), "mg/day morphine equivalents", interpret(total, &summary))
            .with("medication_details", details),
    )
}

fn interpret(total: f64, summary: &str) -> Interpretation {
    let head = format!("Total MME: {} mg/day.", fixed(total, 1));
    if total < 50.0 {
        Interpretation::new(
            "Low Risk",
            "Standard monitoring recommended",
            format!(
                "{head} Low-risk opioid dosing. Medications: {summary}. Standard monitoring and counseling on opioid safety recommended. \
                 Educate patient on proper storage, disposal, and signs of overdose. Consider non-opioid and non-pharmacologic therapies. \
                 Avoid concurrent benzodiazepines or alcohol."
            ),
        )
    } else if total < 90.0 {
        Interpretation::new(
            "Moderate Risk",
            "Increased monitoring recommended",
            format!(
                "{head} Moderate-risk opioid dosing. Medications: {summary}. Increased monitoring recommended. \
                 Consider tapering to lower doses if pain and function goals are not being met. Naloxone prescription strongly recommended. \
                 Avoid concurrent benzodiazepines, alcohol, and other CNS depressants. Document rationale for continued therapy at this dose level."
            ),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High-risk dosing requiring careful evaluation",
            format!(
                "{head} High-risk opioid dosing. Medications: {summary}. Careful evaluation of benefits versus risks is essential. \
                 Strong consideration for tapering to lower doses. Naloxone prescription is essential. \
                 Consider referral to pain management or addiction medicine. Implement frequent follow-ups, urine drug testing, and prescription drug monitoring program review."
            ),
        )
    }
}
