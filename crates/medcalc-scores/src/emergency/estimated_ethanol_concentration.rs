//! Estimated serum concentration after alcohol ingestion.
//!
//! Widmark-style distribution: mass ingested over a 0.6 L/kg volume of
//! distribution. Toxic alcohols are compared against a 20 mg/dL
//! treatment threshold.
//!
//! The result is the concentration in mg/dL; the mmol/L value is an extra.

use medcalc_core::math::{ensure_positive, fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

const VOLUME_OF_DISTRIBUTION: f64 = 0.6;
const TOXIC_THRESHOLD: f64 = 20.0;

choice! {
    pub enum AlcoholType {
        Ethanol => "ethanol",
        Methanol => "methanol",
        EthyleneGlycol => "ethylene_glycol",
        Isopropanol => "isopropanol",
    }
}

impl AlcoholType {
    /// Density in g/mL.
    fn density(self) -> f64 {
        match self {
            AlcoholType::Ethanol => 0.789,
            AlcoholType::Methanol => 0.792,
            AlcoholType::EthyleneGlycol => 1.113,
            AlcoholType::Isopropanol => 0.785,
        }
    }

    /// mg/dL divided by this factor gives mmol/L.
    fn mmol_factor(self) -> f64 {
        match self {
            AlcoholType::Ethanol => 4.6,
            AlcoholType::Methanol => 3.2,
            AlcoholType::EthyleneGlycol => 6.2,
            AlcoholType::Isopropanol => 6.0,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            AlcoholType::Ethanol => "ethanol",
            AlcoholType::Methanol => "methanol",
            AlcoholType::EthyleneGlycol => "ethylene glycol",
            AlcoholType::Isopropanol => "isopropanol",
        }
    }
}

calculator_input! {
    pub struct EthanolConcentrationInput {
        pub alcohol_type: AlcoholType,
        pub amount_ingested_ml: f64 => 0.0..=1000.0,
        pub weight_kg: f64 => 0.0..=300.0,
        pub alcohol_percentage: Option<f64> => 0.0..=100.0,
    }
}

pub fn calculate(input: &EthanolConcentrationInput) -> CalcResult {
    ensure_positive("weight_kg", input.weight_kg)?;

    let kind = input.alcohol_type;
    let pure_ml = input
        .alcohol_percentage
        .map_or(input.amount_ingested_ml, |pct| input.amount_ingested_ml * pct / 100.0);
    let mass_mg = pure_ml * kind.density() * 1000.0;
    let mg_dl = mass_mg / (VOLUME_OF_DISTRIBUTION * input.weight_kg) / 10.0;
    let mmol_l = mg_dl / kind.mmol_factor();

    let lead = format!(
        "Estimated {} concentration: {} mg/dL ({} mmol/L).",
        kind.display_name(),
        fixed(mg_dl, 1),
        fixed(mmol_l, 1)
    );
    let interpretation = match kind {
        AlcoholType::Ethanol => interpret_ethanol(mg_dl, &lead),
        AlcoholType::Methanol | AlcoholType::EthyleneGlycol => interpret_toxic(kind, mg_dl, &lead),
        AlcoholType::Isopropanol => Interpretation::new(
            "Isopropanol Exposure",
            "Monitor for CNS effects",
            format!(
                "{lead} Isopropanol is less toxic than methanol or ethylene glycol but can cause significant CNS depression. Monitor for altered mental status, respiratory depression, and hypotension. Supportive care is usually sufficient. Hemodialysis reserved for severe cases."
            ),
        ),
    };

    Ok(CalculatorResponse::new(round_to(mg_dl, 1), "mg/dL", interpretation)
        .with("concentration_mmol_l", round_to(mmol_l, 1))
        .with("alcohol_type", kind.to_string())
        .with("amount_pure_alcohol_ml", round_to(pure_ml, 1)))
}

fn interpret_ethanol(mg_dl: f64, lead: &str) -> Interpretation {
    let (stage, description, detail) = if mg_dl < 50.0 {
        (
            "Mild Intoxication",
            "Mild effects",
            "Mild intoxication. May cause euphoria, decreased inhibition, and mild impairment of judgment and coordination. Monitor patient and provide supportive care as needed.",
        )
    } else if mg_dl < 100.0 {
        (
            "Moderate Intoxication",
            "Moderate effects",
            "Moderate intoxication. Significant impairment of motor control, reaction time, and judgment. Legal intoxication in most jurisdictions. Monitor closely and provide supportive care.",
        )
    } else if mg_dl < 300.0 {
        (
            "Severe Intoxication",
            "Severe effects",
            "Severe intoxication. Risk of respiratory depression, coma, and death. Requires immediate medical attention and intensive monitoring.",
        )
    } else {
        (
            "Life-threatening",
            "Critical level",
            "Life-threatening alcohol poisoning. High risk of respiratory failure, coma, and death. Requires emergency intervention including possible intubation and hemodialysis.",
        )
    };
    Interpretation::new(stage, description, format!("{lead} {detail}"))
}

fn interpret_toxic(kind: AlcoholType, mg_dl: f64, lead: &str) -> Interpretation {
    if mg_dl >= TOXIC_THRESHOLD {
        let title = match kind {
            AlcoholType::Methanol => "Methanol",
            _ => "Ethylene Glycol",
        };
        Interpretation::new(
            "Treatment Required",
            "Above treatment threshold",
            format!(
                "{lead} Level ≥20 mg/dL requires immediate treatment with fomepizole (preferred) or ethanol, plus hemodialysis. {title} is highly toxic and can cause severe metabolic acidosis and end-organ damage."
            ),
        )
    } else {
        Interpretation::new(
            "Below Treatment Threshold",
            "Monitor closely",
            format!(
                "{lead} Below treatment threshold of 20 mg/dL, but monitor closely for symptoms and obtain serial levels. Consider treatment if patient is symptomatic or has metabolic acidosis."
            ),
        )
    }
}
