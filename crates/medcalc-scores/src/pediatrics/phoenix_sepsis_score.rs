//! Phoenix Sepsis Score (2024 international pediatric sepsis criteria).
//!
//! Four organ systems: respiratory 0-3, cardiovascular 0-6, coagulation 0-2
//! and neurologic 0-2. Sepsis is a score of 2 or more with suspected
//! infection; septic shock adds at least one cardiovascular point.

use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum RespiratorySupport {
        None => "none",
        SupplementalOxygen => "supplemental_oxygen",
        HighFlowNasalCannula => "high_flow_nasal_cannula",
        NonInvasiveVentilation => "non_invasive_ventilation",
        InvasiveMechanicalVentilation => "invasive_mechanical_ventilation",
    }
}

choice! {
    pub enum PupilReactivity {
        BothReactive => "both_reactive",
        OneFixed => "one_fixed",
        BothFixed => "both_fixed",
    }
}

calculator_input! {
    pub struct PhoenixInput {
        /// Years, 0-17.
        pub age: i64 => 0..=17,
        pub suspected_infection: YesNo,
        pub respiratory_support: RespiratorySupport,
        pub pao2_fio2_ratio: Option<f64>,
        pub spo2_fio2_ratio: Option<f64>,
        pub vasoactive_medications: i64,
        /// mmol/L
        pub lactate: Option<f64>,
        /// mmHg
        pub mean_arterial_pressure: Option<i64>,
        /// ×10³/µL
        pub platelets: Option<i64>,
        pub inr: Option<f64>,
        /// mg/L FEU
        pub d_dimer: Option<f64>,
        /// g/L
        pub fibrinogen: Option<f64>,
        pub glasgow_coma_scale: i64 => 3..=15,
        pub pupil_reactivity: PupilReactivity,
    }
}

impl PhoenixInput {
    fn validate(&self) -> CalcResult<()> {
        if self.vasoactive_medications < 0 {
            return Err(CalcError::constraint(
                "Vasoactive medications must be a non-negative integer",
            ));
        }
        Ok(())
    }

    /// PaO2:FiO2 takes precedence over SpO2:FiO2 when both are given.
    fn respiratory(&self) -> i64 {
        let support = match self.respiratory_support {
            RespiratorySupport::None => 0,
            RespiratorySupport::SupplementalOxygen => 1,
            RespiratorySupport::HighFlowNasalCannula => 2,
            RespiratorySupport::NonInvasiveVentilation
            | RespiratorySupport::InvasiveMechanicalVentilation => 3,
        };
        let ratio = if let Some(pf) = self.pao2_fio2_ratio {
            match pf {
                r if r < 100.0 => 3,
                r if r < 200.0 => 2,
                r if r < 300.0 => 1,
                _ => 0,
            }
        } else if let Some(sf) = self.spo2_fio2_ratio {
            match sf {
                r if r < 150.0 => 3,
                r if r < 220.0 => 2,
                r if r < 300.0 => 1,
                _ => 0,
            }
        } else {
            0
        };
        support.max(ratio).min(3)
    }

    fn cardiovascular(&self) -> i64 {
        let vasoactive = self.vasoactive_medications.min(2);
        let lactate = match self.lactate {
            Some(l) if l >= 11.0 => 2,
            Some(l) if l >= 5.0 => 1,
            _ => 0,
        };
        let map = match self.mean_arterial_pressure {
            Some(map) if map < map_threshold(self.age) => 2,
            _ => 0,
        };
        (vasoactive + lactate + map).min(6)
    }

    fn coagulation(&self) -> i64 {
        let flags = [
            self.platelets.is_some_and(|p| p < 100),
            self.inr.is_some_and(|v| v > 1.3),
            self.d_dimer.is_some_and(|v| v > 2.0),
            self.fibrinogen.is_some_and(|v| v < 1.0),
        ];
        (flags.iter().filter(|f| **f).count() as i64).min(2)
    }

    fn neurologic(&self) -> i64 {
        let gcs = i64::from(self.glasgow_coma_scale < 11);
        let pupils = match self.pupil_reactivity {
            PupilReactivity::BothReactive => 0,
            PupilReactivity::OneFixed => 1,
            PupilReactivity::BothFixed => 2,
        };
        (gcs + pupils).min(2)
    }
}

/// Age-specific MAP floor in mmHg.
fn map_threshold(age: i64) -> i64 {
    match age {
        ..1 => 31,
        1..5 => 32,
        5..12 => 36,
        _ => 44,
    }
}

pub fn calculate(input: &PhoenixInput) -> CalcResult {
    input.validate()?;

    if !input.suspected_infection.is_yes() {
        return Ok(CalculatorResponse::new(
            0,
            "points",
            Interpretation::new(
                "Not Applicable",
                "No suspected infection",
                "Phoenix Sepsis Score cannot be calculated without suspected infection. Sepsis criteria require suspected or confirmed infection.",
            ),
        )
        .with(
            "component_scores",
            json!({
                "respiratory_score": 0,
                "cardiovascular_score": 0,
                "coagulation_score": 0,
                "neurologic_score": 0,
            }),
        ));
    }

    let respiratory = input.respiratory();
    let cardiovascular = input.cardiovascular();
    let coagulation = input.coagulation();
    let neurologic = input.neurologic();
    let total = respiratory + cardiovascular + coagulation + neurologic;

    let sepsis = total >= 2;
    let septic_shock = sepsis && cardiovascular >= 1;

    let interpretation = if septic_shock {
        Interpretation::new(
            "Septic Shock",
            "Meets criteria for septic shock",
            format!("Phoenix Sepsis Score: {total} points. Meets criteria for SEPTIC SHOCK (sepsis with cardiovascular dysfunction). This indicates potentially life-threatening organ dysfunction requiring immediate intensive care management, aggressive fluid resuscitation, and vasoactive support."),
        )
    } else if sepsis {
        Interpretation::new(
            "Sepsis",
            "Meets criteria for sepsis",
            format!("Phoenix Sepsis Score: {total} points. Meets criteria for SEPSIS indicating potentially life-threatening organ dysfunction. Requires urgent medical evaluation, immediate antibiotic therapy, fluid resuscitation, and close monitoring for progression to septic shock."),
        )
    } else {
        Interpretation::new(
            "No Sepsis",
            "Score does not meet sepsis criteria",
            format!("Phoenix Sepsis Score: {total} points. Does not meet criteria for sepsis (requires ≥2 points with suspected infection). Continue monitoring for clinical deterioration and reassess if condition changes."),
        )
    };

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with(
            "component_scores",
            json!({
                "respiratory_score": respiratory,
                "cardiovascular_score": cardiovascular,
                "coagulation_score": coagulation,
                "neurologic_score": neurologic,
            }),
        )
        .with(
            "clinical_status",
            json!({"sepsis": sepsis, "septic_shock": septic_shock}),
        ))
}
