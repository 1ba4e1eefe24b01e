//! Cytokine release syndrome (CRS) grading after CAR-T or bispecific therapy.
//!
//! The grade is the worst of the hypotension, oxygen and organ-toxicity
//! components, never below 1.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum Hypotension {
        None => "none",
        ResponsiveToFluids => "responsive_to_fluids",
        LowDoseSinglePressor => "low_dose_single_pressor",
        HighDoseMultiplePressors => "high_dose_multiple_pressors",
    }
}

choice! {
    pub enum OxygenRequirement {
        None => "none",
        LowFlow => "low_flow_oxygen",
        HighFlow40Plus => "high_flow_oxygen_40_plus",
        Ventilator => "ventilator_required",
    }
}

choice! {
    pub enum Comorbidities {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

calculator_input! {
    pub struct CrsInput {
        pub fever_present: YesNo,
        pub hypotension_status: Hypotension,
        pub oxygen_requirement: OxygenRequirement,
        pub organ_toxicity_grade: i64 => 0..=4,
        pub patient_age: Option<i64> => 0..=120,
        pub comorbidities_present: Option<Comorbidities>,
    }
}

impl CrsInput {

    fn grade(&self) -> i64 {
        let hypotension = match self.hypotension_status {
            Hypotension::None => 0,
            Hypotension::ResponsiveToFluids | Hypotension::LowDoseSinglePressor => 2,
            Hypotension::HighDoseMultiplePressors => 3,
        };
        let oxygen = match self.oxygen_requirement {
            OxygenRequirement::None => 0,
            OxygenRequirement::LowFlow => 2,
            OxygenRequirement::HighFlow40Plus => 3,
            OxygenRequirement::Ventilator => 4,
        };
        let organ = match self.organ_toxicity_grade {
            3..=4 => 3,
            2 => 2,
            _ => 0,
        };
        hypotension.max(oxygen).max(organ).max(1)
    }
}

struct Grade {
    label: &'static str,
    description: &'static str,
    severity: &'static str,
    intervention: &'static str,
    treatment: &'static [&'static str],
    urgency: &'static str,
    outlook: (&'static str, &'static str),
    care_setting: &'static str,
    guidance: &'static str,
}

fn grade_info(grade: i64) -> Grade {
    match grade {
        1 => Grade {
            label: "Grade 1 - Mild",
            description: "Mild symptoms",
            severity: "mild",
            intervention: "symptomatic",
            treatment: &[
                "Supportive care with symptomatic treatment",
                "Monitor vital signs and symptoms closely",
                "Adequate hydration and fever management",
                "No specific anti-cytokine therapy required",
            ],
            urgency: "Routine - symptomatic care",
            outlook: ("Excellent", "Expected full recovery with supportive care"),
            care_setting: "Inpatient ward with oncology monitoring",
            guidance: "Patient has mild constitutional symptoms requiring only symptomatic treatment. Prognosis is excellent with supportive care.",
        },
        2 => Grade {
            label: "Grade 2 - Moderate",
            description: "Moderate intervention required",
            severity: "moderate",
            intervention: "supportive",
            treatment: &[
                "Vigilant supportive care with close monitoring",
                "Consider tocilizumab if extensive comorbidities present",
                "Fluid management and low-dose vasopressors if needed",
                "Monitor for progression to higher grades",
            ],
            urgency: "Urgent - close monitoring required",
            outlook: ("Good", "Good prognosis with appropriate management"),
            care_setting: "Inpatient ward with enhanced monitoring or step-down unit",
            guidance: "Patient requires moderate intervention with close monitoring. Consider tocilizumab if comorbidities present. Good prognosis with appropriate management.",
        },
        3 => Grade {
            label: "Grade 3 - Severe",
            description: "Aggressive intervention required",
            severity: "severe",
            intervention: "aggressive",
            treatment: &[
                "Aggressive supportive care, often requiring ICU",
                "Tocilizumab ± corticosteroids recommended",
                "High-dose or multiple vasopressors as needed",
                "Consider corticosteroids if no improvement at 24 hours",
            ],
            urgency: "Emergent - immediate intervention needed",
            outlook: ("Guarded", "Requires intensive management, variable outcome"),
            care_setting: "Intensive care unit (ICU)",
            guidance: "Patient requires aggressive intervention, often in ICU setting. Tocilizumab and corticosteroids recommended. Prognosis is guarded and requires intensive management.",
        },
        _ => Grade {
            label: "Grade 4 - Life-threatening",
            description: "Life-threatening symptoms",
            severity: "life_threatening",
            intervention: "intensive",
            treatment: &[
                "Intensive care management mandatory",
                "Immediate tocilizumab and corticosteroids",
                "Mechanical ventilation and advanced organ support",
                "Multidisciplinary critical care approach",
            ],
            urgency: "Critical - life-threatening, immediate ICU care",
            outlook: ("Poor", "Life-threatening condition with significant morbidity risk"),
            care_setting: "Intensive care unit (ICU) with advanced life support",
            guidance: "Patient has life-threatening condition requiring immediate intensive care. Immediate tocilizumab, corticosteroids, and advanced organ support needed. Prognosis is poor with significant morbidity risk.",
        },
    }
}

fn monitoring_frequency(grade: i64) -> &'static str {
    match grade {
        1 => "Every 4-8 hours",
        2 => "Every 2-4 hours",
        _ => "Continuous monitoring in ICU setting",
    }
}

pub fn calculate(input: &CrsInput) -> CalcResult {
    let grade = input.grade();
    let info = grade_info(grade);

    let mut indicators = Vec::new();
    if input.hypotension_status != Hypotension::None {
        indicators.push(format!("Hypotension: {}", input.hypotension_status));
    }
    if input.oxygen_requirement != OxygenRequirement::None {
        indicators.push(format!("Oxygen requirement: {}", input.oxygen_requirement));
    }
    if input.organ_toxicity_grade > 0 {
        indicators.push(format!("Organ toxicity: Grade {}", input.organ_toxicity_grade));
    }
    let features: &[&str] = match grade {
        1 => &["Fever", "Constitutional symptoms", "Mild discomfort"],
        2 => &["Moderate symptoms", "Cardiovascular involvement", "Respiratory involvement"],
        _ => &["Severe systemic symptoms", "Multi-organ involvement", "Hemodynamic instability"],
    };

    let mut additional = Vec::new();
    match input.patient_age {
        Some(age) if age < 18 => additional.push("Pediatric oncology consultation recommended"),
        Some(age) if age > 65 => additional.push("Consider increased monitoring due to advanced age"),
        _ => {}
    }
    if input.comorbidities_present == Some(Comorbidities::Yes) {
        if grade >= 2 {
            additional.push("Lower threshold for tocilizumab due to comorbidities");
        }
        additional.push("Coordinate care with relevant specialists");
    }
    if grade >= 2 {
        additional.push("Consider tocilizumab 8 mg/kg IV (max 800 mg)");
    }
    if grade >= 3 {
        additional.push("Consider corticosteroids (methylprednisolone 1-2 mg/kg/day)");
    }

    let medications: &[&str] = match grade {
        1 => &["Acetaminophen/paracetamol for fever", "Adequate hydration", "Symptomatic care"],
        2 => &["Tocilizumab (consider if comorbidities)", "IV fluids", "Low-dose vasopressors if needed"],
        _ => &[
            "Tocilizumab 8 mg/kg IV",
            "Corticosteroids (methylprednisolone)",
            "High-dose vasopressors",
            "Advanced organ support",
        ],
    };

    let mut parameters = vec!["Vital signs", "Temperature", "Oxygen saturation", "Mental status"];
    if grade >= 2 {
        parameters.extend(["Blood pressure", "Urine output", "Laboratory studies"]);
    }
    if grade >= 3 {
        parameters.extend([
            "Cardiac monitoring",
            "Arterial blood gas",
            "Lactate levels",
            "Organ function tests",
            "Coagulation studies",
        ]);
    }
    let labs: &[&str] = match grade {
        1 => &["Basic metabolic panel", "Complete blood count"],
        2 => &[
            "Comprehensive metabolic panel",
            "Complete blood count",
            "Liver function tests",
            "Inflammatory markers (CRP, IL-6 if available)",
        ],
        _ => &[
            "Comprehensive metabolic panel",
            "Complete blood count",
            "Liver function tests",
            "Coagulation studies",
            "Arterial blood gas",
            "Lactate",
            "Troponin",
            "Inflammatory markers",
            "Cultures if infection suspected",
        ],
    };

    let text = format!(
        "CRS Grade {grade} ({}) indicates {}. {}",
        info.label,
        info.description.to_lowercase(),
        info.guidance
    );

    Ok(
        CalculatorResponse::new(grade, "CRS grade", Interpretation::new(info.label, info.description, text))
            .with("crs_grade", grade)
            .with("severity_level", info.severity)
            .with("intervention_type", info.intervention)
            .with(
                "clinical_assessment",
                json!({
                    "crs_grade": grade,
                    "severity_indicators": indicators,
                    "risk_factors": [],
                    "clinical_features": features,
                }),
            )
            .with(
                "management_recommendations",
                json!({
                    "primary_interventions": info.treatment,
                    "additional_considerations": additional,
                    "medication_options": medications,
                    "monitoring_frequency": monitoring_frequency(grade),
                }),
            )
            .with(
                "monitoring_requirements",
                json!({
                    "parameters": parameters,
                    "frequency": monitoring_frequency(grade),
                    "laboratory_studies": labs,
                }),
            )
            .with("treatment_urgency", info.urgency)
            .with("prognosis", json!({"outlook": info.outlook.0, "description": info.outlook.1}))
            .with("care_setting", info.care_setting),
    )
}
