//! Glucose infusion rate (GIR) in mg/kg/min from the IV rate, dextrose
//! percentage and body weight.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcError, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct GirInput {
        /// mL/hr
        pub infusion_rate: f64,
        /// Percent dextrose, e.g. 10 for D10W.
        pub dextrose_concentration: f64 => 1.0..=50.0,
        /// kg
        pub weight: f64 => 0.5..=200.0,
    }
}

impl GirInput {
    fn validate(&self) -> CalcResult<()> {
        if !(self.infusion_rate > 0.0 && self.infusion_rate <= 1000.0) {
            return Err(CalcError::out_of_range(
                "infusion_rate",
                self.infusion_rate,
                0.1,
                1000.0,
            ));
        }
        Ok(())
    }
}

/// mL/hr × (% × 10 mg/mL) / (kg × 60 min/hr)
fn gir(rate: f64, dextrose_percent: f64, weight: f64) -> f64 {
    rate * dextrose_percent * 10.0 / (weight * 60.0)
}

pub fn calculate(input: &GirInput) -> CalcResult {
    input.validate()?;

    let rate = input.infusion_rate;
    let dextrose = input.dextrose_concentration;
    let weight = input.weight;
    let value = gir(rate, dextrose, weight);
    // The bedside shortcut: % dextrose × mL/kg/hr / 6.
    let shortcut = dextrose * (rate / weight) / 6.0;

    let summary = format!(
        "Infusion parameters: {rate} mL/hr of D{dextrose}W ({dextrose}% dextrose) in {weight} kg patient. Calculated GIR: {} mg/kg/min. Verification (simplified formula): {} mg/kg/min.",
        fixed(value, 2),
        fixed(shortcut, 2),
    );

    let interpretation = match value {
        v if v < 4.0 => Interpretation::new(
            "Below Normal Range",
            "Insufficient glucose delivery",
            format!("{summary} GIR below 4.0 mg/kg/min may be insufficient to prevent hypoglycemia in neonates and infants not feeding orally. Risk of hypoglycemia, especially in preterm infants or those with increased metabolic demands. Recommendations: Consider increasing dextrose concentration (e.g., from D5W to D10W) or infusion rate. Monitor blood glucose closely every 2-4 hours. Ensure GIR ≥4 mg/kg/min as minimum. Evaluate for signs of hypoglycemia (jitteriness, lethargy, seizures). Consider enteral feeding if appropriate."),
        ),
        v if v <= 8.0 => Interpretation::new(
            "Normal/Physiologic Range",
            "Appropriate glucose delivery",
            format!("{summary} GIR 4.0-8.0 mg/kg/min represents normal glucose utilization rate. This range covers baseline glucose needs and is appropriate for maintaining euglycemia in most neonates and infants receiving IV fluids without enteral nutrition. Recommendations: Continue current regimen with routine glucose monitoring every 4-6 hours. Appropriate for maintenance therapy in stable patients. Monitor for clinical signs of hypo- or hyperglycemia. Consider advancing to enteral feeds when clinically appropriate."),
        ),
        v if v <= 12.0 => Interpretation::new(
            "Moderate/Therapeutic Range",
            "Enhanced glucose delivery",
            format!("{summary} GIR 8.1-12.0 mg/kg/min provides enhanced glucose delivery for growth and anabolism. Common in parenteral nutrition protocols for adequate caloric intake. Recommendations: Monitor blood glucose every 4-6 hours for hyperglycemia. May require Level 3 NICU care for close monitoring. Consider insulin therapy if blood glucose consistently >150-180 mg/dL. Ensure adequate protein and lipid intake to balance nutrition. Monitor for signs of glucose intolerance."),
        ),
        v if v <= 18.0 => Interpretation::new(
            "High Therapeutic Range",
            "High glucose delivery for nutrition",
            format!("{summary} GIR 12.1-18.0 mg/kg/min represents high glucose delivery typically used in full parenteral nutrition. Optimal for growth in premature infants with high metabolic demands. Recommendations: Frequent glucose monitoring (every 2-4 hours). Likely requires insulin co-administration to prevent hyperglycemia. Monitor for signs of glucose intolerance, increased CO2 production, and respiratory burden. Consider central line access for safe administration of high-concentration dextrose. Balance with appropriate protein and lipid calories."),
        ),
        _ => Interpretation::new(
            "Excessive Range",
            "Risk of metabolic complications",
            format!("{summary} GIR >18.0 mg/kg/min is excessive and increases risk of hyperglycemia, lipogenesis, fatty liver deposits, and increased CO2 production. Associated with respiratory burden and metabolic complications. Recommendations: IMMEDIATE reduction in glucose load by decreasing dextrose concentration or infusion rate. Implement insulin therapy if blood glucose >180 mg/dL. Increase lipid contribution to total calories (up to 3-4 g/kg/day). Monitor arterial blood gases for increased CO2. Assess liver function tests. Consider consultation with neonatal nutrition specialist. Target GIR reduction to <18 mg/kg/min."),
        ),
    };

    Ok(CalculatorResponse::new(round_to(value, 2), "mg/kg/min", interpretation))
}
