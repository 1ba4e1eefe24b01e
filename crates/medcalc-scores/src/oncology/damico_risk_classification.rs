//! D'Amico risk classification for clinically localized prostate cancer.
//!
//! The highest-risk feature among PSA, Gleason score and clinical T stage
//! decides the group.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum ClinicalStage {
        T1a => "T1a",
        T1b => "T1b",
        T1c => "T1c",
        T2a => "T2a",
        T2b => "T2b",
        T2c => "T2c",
        T3a => "T3a",
        T3b => "T3b",
        T4 => "T4",
    }
}

choice! {
    pub enum PlannedTreatment {
        RadicalProstatectomy => "radical_prostatectomy",
        ExternalBeamRadiation => "external_beam_radiation",
        Brachytherapy => "brachytherapy",
        ActiveSurveillance => "active_surveillance",
        NotSpecified => "not_specified",
    }
}

calculator_input! {
    pub struct DamicoInput {
        /// ng/mL
        pub psa_level: f64 => 0.1..=500.0,
        pub gleason_score: i64 => 2..=10,
        pub clinical_stage: ClinicalStage,
        pub patient_age: Option<i64> => 40..=100,
        pub treatment_planned: Option<PlannedTreatment>,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RiskGroup {
    Low,
    Intermediate,
    High,
}

impl RiskGroup {
    fn token(self) -> &'static str {
        match self {
            RiskGroup::Low => "low",
            RiskGroup::Intermediate => "intermediate",
            RiskGroup::High => "high",
        }
    }
}

struct GroupDetails {
    label: &'static str,
    description: &'static str,
    criteria: &'static str,
    recurrence_risk: &'static str,
    five_year_rate: &'static str,
}

fn details(group: RiskGroup) -> GroupDetails {
    match group {
        RiskGroup::Low => GroupDetails {
            label: "Low Risk",
            description: "Low risk of treatment failure",
            criteria: "PSA ≤10 ng/mL AND Gleason score ≤6 AND clinical stage T1-T2a",
            recurrence_risk: "Low (5-15%)",
            five_year_rate: "5-15%",
        },
        RiskGroup::Intermediate => GroupDetails {
            label: "Intermediate Risk",
            description: "Intermediate risk of treatment failure",
            criteria: "PSA 10-20 ng/mL OR Gleason score 7 OR clinical stage T2b",
            recurrence_risk: "Intermediate (15-45%)",
            five_year_rate: "15-45%",
        },
        RiskGroup::High => GroupDetails {
            label: "High Risk",
            description: "High risk of treatment failure",
            criteria: "PSA >20 ng/mL OR Gleason score ≥8 OR clinical stage ≥T2c",
            recurrence_risk: "High (45-65%)",
            five_year_rate: "45-65%",
        },
    }
}

fn psa_risk(psa: f64) -> RiskGroup {
    if psa <= 10.0 {
        RiskGroup::Low
    } else if psa <= 20.0 {
        RiskGroup::Intermediate
    } else {
        RiskGroup::High
    }
}

fn gleason_risk(gleason: i64) -> RiskGroup {
    match gleason {
        ..=6 => RiskGroup::Low,
        7 => RiskGroup::Intermediate,
        _ => RiskGroup::High,
    }
}

fn stage_risk(stage: ClinicalStage) -> RiskGroup {
    match stage {
        ClinicalStage::T1a | ClinicalStage::T1b | ClinicalStage::T1c | ClinicalStage::T2a => {
            RiskGroup::Low
        }
        ClinicalStage::T2b => RiskGroup::Intermediate,
        _ => RiskGroup::High,
    }
}

fn treatment_recommendations(group: RiskGroup) -> &'static [&'static str] {
    match group {
        RiskGroup::Low => &[
            "Active surveillance may be appropriate for select patients",
            "Radical prostatectomy offers excellent cure rates",
            "External beam radiation therapy provides equivalent outcomes",
            "Brachytherapy is an effective option for suitable candidates",
            "Regular PSA monitoring every 3-6 months if on active surveillance",
        ],
        RiskGroup::Intermediate => &[
            "Definitive local therapy typically recommended",
            "Radical prostatectomy with lymph node assessment",
            "External beam radiation with or without short-term androgen deprivation",
            "Consider brachytherapy boost in select cases",
            "Discuss risks and benefits of adjuvant therapy",
        ],
        RiskGroup::High => &[
            "Multimodal therapy often recommended",
            "Radiation therapy with long-term androgen deprivation therapy (18-36 months)",
            "Radical prostatectomy with extended lymph node dissection",
            "Consider neoadjuvant or adjuvant systemic therapy",
            "Close monitoring for local and distant recurrence",
        ],
    }
}

fn multidisciplinary(group: RiskGroup) -> &'static [&'static str] {
    match group {
        RiskGroup::Low => &[
            "Urologist for treatment planning and monitoring",
            "Consider radiation oncologist consultation for treatment options",
            "Patient education and support services",
        ],
        RiskGroup::Intermediate => &[
            "Urologist and radiation oncologist consultation recommended",
            "Medical oncologist if adjuvant therapy considered",
            "Pathology review for Gleason score confirmation",
            "Patient navigator for care coordination",
        ],
        RiskGroup::High => &[
            "Multidisciplinary tumor board review recommended",
            "Urologist, radiation oncologist, and medical oncologist consultation",
            "Pathology expert review for accurate grading",
            "Social work and palliative care if appropriate",
            "Clinical trial eligibility assessment",
        ],
    }
}

fn follow_up(group: RiskGroup) -> &'static str {
    match group {
        RiskGroup::Low => "PSA every 6 months for 2 years, then annually if stable",
        RiskGroup::Intermediate => {
            "PSA every 3-6 months for 2 years, then every 6 months for 3 years, then annually"
        }
        RiskGroup::High => {
            "PSA every 3 months for 2 years, then every 6 months for 3 years, then annually with imaging"
        }
    }
}

fn additional_considerations(input: &DamicoInput, group: RiskGroup) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if let Some(age) = input.patient_age {
        if age < 55 {
            notes.push("Young age favors aggressive treatment for cure");
            if group == RiskGroup::Low {
                notes.push("Consider active surveillance with strict monitoring");
            }
        } else if age > 75 {
            notes.push("Advanced age may favor less aggressive approaches");
            notes.push("Consider life expectancy and comorbidities in treatment selection");
        }
    }
    match input.treatment_planned {
        Some(PlannedTreatment::ActiveSurveillance) => notes.push(if group == RiskGroup::Low {
            "Excellent candidate for active surveillance protocol"
        } else {
            "Active surveillance typically reserved for low-risk disease"
        }),
        Some(PlannedTreatment::RadicalProstatectomy) => {
            notes.push("Surgical approach offers excellent cancer control");
            if group == RiskGroup::High {
                notes.push("Consider extended lymph node dissection");
            }
        }
        Some(PlannedTreatment::ExternalBeamRadiation | PlannedTreatment::Brachytherapy) => {
            notes.push("Radiation therapy provides equivalent outcomes to surgery");
            if group != RiskGroup::Low {
                notes.push("Consider androgen deprivation therapy");
            }
        }
        Some(PlannedTreatment::NotSpecified) | None => {}
    }
    notes
}

fn prognosis(group: RiskGroup, age: Option<i64>) -> serde_json::Value {
    let (prognosis, survival, control, metastasis) = match group {
        RiskGroup::Low => ("Excellent", ">95% at 10 years", "85-95% at 5 years", "Very low (<5%)"),
        RiskGroup::Intermediate => (
            "Good to Very Good",
            "85-95% at 10 years",
            "55-85% at 5 years",
            "Low to moderate (5-15%)",
        ),
        RiskGroup::High => (
            "Guarded to Good",
            "60-85% at 10 years",
            "35-55% at 5 years",
            "Moderate to high (15-35%)",
        ),
    };
    let mut value = json!({
        "prognosis": prognosis,
        "disease_specific_survival": survival,
        "biochemical_control": control,
        "metastasis_risk": metastasis,
    });
    if let Some(age) = age {
        let factor = if age < 60 {
            "Young age associated with longer life expectancy and greater benefit from cure"
        } else if age > 75 {
            "Advanced age may limit treatment options and life expectancy considerations"
        } else {
            "Age appropriate for all standard treatment modalities"
        };
        value["age_factor"] = json!(factor);
    }
    value
}

fn monitoring(group: RiskGroup) -> serde_json::Value {
    let specific: &[&str] = match group {
        RiskGroup::Low => &[
            "Annual assessment if on active surveillance",
            "Consider repeat biopsy in 12-18 months if on active surveillance",
            "Monitor for PSA doubling time",
        ],
        RiskGroup::Intermediate => &[
            "More frequent PSA monitoring in first 2 years",
            "Consider imaging if PSA rises after treatment",
            "Monitor for treatment-related side effects",
        ],
        RiskGroup::High => &[
            "Intensive PSA monitoring",
            "Consider baseline and follow-up imaging",
            "Monitor for local and distant recurrence",
            "Assess for systemic therapy indications",
        ],
    };
    json!({
        "routine_monitoring": ["Serial PSA measurements", "Digital rectal examination", "Clinical assessment"],
        "risk_specific_monitoring": specific,
        "frequency": follow_up(group),
    })
}

fn counseling_points(group: RiskGroup) -> &'static [&'static str] {
    match group {
        RiskGroup::Low => &[
            "Excellent prognosis with low risk of cancer progression",
            "Multiple effective treatment options available",
            "Active surveillance is a reasonable option for many patients",
            "Treatment side effects may outweigh benefits in some cases",
            "Regular monitoring is essential regardless of treatment choice",
        ],
        RiskGroup::Intermediate => &[
            "Good prognosis with appropriate treatment",
            "Definitive treatment typically recommended",
            "Benefits of treatment generally outweigh risks",
            "Multiple treatment modalities offer similar cancer control",
            "Individual patient factors influence optimal treatment choice",
        ],
        RiskGroup::High => &[
            "Significant cancer that requires aggressive treatment",
            "Higher risk of progression without treatment",
            "Multimodal therapy often provides best outcomes",
            "Benefits of aggressive treatment typically outweigh risks",
            "Close monitoring and follow-up are essential",
        ],
    }
}

fn primary_risk_factors(input: &DamicoInput) -> Vec<String> {
    let psa = input.psa_level;
    let gleason = input.gleason_score;
    let stage = input.clinical_stage;
    vec![
        match psa_risk(psa) {
            RiskGroup::High => format!("Elevated PSA: {psa} ng/mL (>20)"),
            RiskGroup::Intermediate => format!("Intermediate PSA: {psa} ng/mL (10-20)"),
            RiskGroup::Low => format!("Low PSA: {psa} ng/mL (≤10)"),
        },
        match gleason_risk(gleason) {
            RiskGroup::High => format!("High-grade cancer: Gleason {gleason} (≥8)"),
            RiskGroup::Intermediate => format!("Intermediate-grade cancer: Gleason {gleason}"),
            RiskGroup::Low => format!("Low-grade cancer: Gleason {gleason} (≤6)"),
        },
        match stage_risk(stage) {
            RiskGroup::High => format!("Advanced local stage: {stage} (≥T2c)"),
            RiskGroup::Intermediate => format!("Intermediate local stage: {stage}"),
            RiskGroup::Low => format!("Early local stage: {stage} (T1-T2a)"),
        },
    ]
}

pub fn calculate(input: &DamicoInput) -> CalcResult {
    let psa = psa_risk(input.psa_level);
    let gleason = gleason_risk(input.gleason_score);
    let stage = stage_risk(input.clinical_stage);
    let group = psa.max(gleason).max(stage);
    let d = details(group);

    let base = format!(
        "D'Amico {} classification based on PSA {} ng/mL, Gleason score {}, and clinical stage {}.",
        d.label, input.psa_level, input.gleason_score, input.clinical_stage
    );
    let text = match group {
        RiskGroup::Low => format!(
            "{base} Patient has excellent prognosis with {} 5-year biochemical recurrence risk. Active surveillance may be appropriate for select patients, though definitive treatment offers excellent cure rates.",
            d.five_year_rate
        ),
        RiskGroup::Intermediate => format!(
            "{base} Patient has good prognosis with {} 5-year biochemical recurrence risk. Definitive local therapy is typically recommended with consideration of adjuvant therapy based on specific risk factors.",
            d.five_year_rate
        ),
        RiskGroup::High => format!(
            "{base} Patient has significant cancer with {} 5-year biochemical recurrence risk. Multimodal therapy is often recommended, including radiation with androgen deprivation therapy or radical surgery with possible adjuvant treatment.",
            d.five_year_rate
        ),
    };

    let clinical_assessment = json!({
        "psa_level": input.psa_level,
        "gleason_score": input.gleason_score,
        "clinical_stage": input.clinical_stage,
        "risk_group": group.token(),
        "primary_risk_factors": primary_risk_factors(input),
        "disease_characteristics": [
            "Clinically localized prostate cancer",
            "Risk stratification based on D'Amico criteria",
            format!("Classified as {} risk for biochemical recurrence", group.token()),
        ],
    });

    Ok(
        CalculatorResponse::new(group.token(), "risk group", Interpretation::new(d.label, d.description, text))
            .with("risk_group", group.token())
            .with("risk_category", d.label)
            .with("criteria_met", d.criteria)
            .with("biochemical_recurrence_risk", d.recurrence_risk)
            .with("five_year_recurrence_rate", d.five_year_rate)
            .with("clinical_assessment", clinical_assessment)
            .with(
                "treatment_recommendations",
                json!({
                    "primary_recommendations": treatment_recommendations(group),
                    "additional_considerations": additional_considerations(input, group),
                    "multidisciplinary_approach": multidisciplinary(group),
                    "follow_up_intensity": follow_up(group),
                }),
            )
            .with("prognosis", prognosis(group, input.patient_age))
            .with("monitoring_recommendations", monitoring(group))
            .with(
                "risk_factors",
                json!({
                    "psa_risk": psa.token(),
                    "gleason_risk": gleason.token(),
                    "stage_risk": stage.token(),
                    "highest_risk_factor": group.token(),
                }),
            )
            .with("counseling_points", counseling_points(group)),
    )
}
