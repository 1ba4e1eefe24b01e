//! WHO 2016 diagnostic criteria for polycythemia vera.
//!
//! Diagnosis needs all three major criteria, or the first two major criteria
//! plus the minor criterion (subnormal erythropoietin).

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex};
use serde_json::json;

choice! {
    pub enum RedCellMass {
        Yes => "yes",
        No => "no",
        NotMeasured => "not_measured",
    }
}

choice! {
    pub enum MarrowFinding {
        Yes => "yes",
        No => "no",
        NotPerformed => "not_performed",
    }
}

choice! {
    pub enum Jak2Status {
        V617fPositive => "jak2v617f_positive",
        Exon12Positive => "jak2_exon12_positive",
        Negative => "negative",
        NotTested => "not_tested",
    }
}

choice! {
    pub enum EpoLevel {
        Subnormal => "subnormal",
        Normal => "normal",
        Elevated => "elevated",
        NotMeasured => "not_measured",
    }
}

calculator_input! {
    pub struct PolycythemiaVeraInput {
        pub gender: Sex,
        /// g/dL
        pub hemoglobin: f64 => 5.0..=25.0,
        /// %
        pub hematocrit: f64 => 10.0..=80.0,
        pub red_cell_mass_elevated: RedCellMass,
        pub bone_marrow_hypercellular: MarrowFinding,
        pub jak2_mutation: Jak2Status,
        pub erythropoietin_level: EpoLevel,
    }
}

struct Criterion {
    name: &'static str,
    met: bool,
    details: String,
}

impl PolycythemiaVeraInput {
    fn red_cell_criterion(&self) -> Criterion {
        let (hgb_threshold, hct_threshold) = if self.gender.is_female() { (16.0, 48.0) } else { (16.5, 49.0) };
        let mut details = Vec::new();
        if self.hemoglobin > hgb_threshold {
            details.push(format!("Hemoglobin criteria met: {} > {hgb_threshold} g/dL", self.hemoglobin));
        }
        if self.hematocrit > hct_threshold {
            details.push(format!("Hematocrit criteria met: {} > {hct_threshold}%", self.hematocrit));
        }
        if self.red_cell_mass_elevated == RedCellMass::Yes {
            details.push("Red cell mass >25% above normal".to_string());
        }
        let met = !details.is_empty();
        if !met {
            details.push("None of the hemoglobin, hematocrit, or red cell mass criteria are met".to_string());
        }
        Criterion {
            name: "Major Criterion 1",
            met,
            details: details.join("; "),
        }
    }

    fn marrow_criterion(&self) -> Criterion {
        let (met, details) = match self.bone_marrow_hypercellular {
            MarrowFinding::Yes => (true, "Bone marrow biopsy shows hypercellularity with trilineage growth"),
            MarrowFinding::No => (false, "Bone marrow biopsy does not show characteristic hypercellularity"),
            MarrowFinding::NotPerformed => (false, "Bone marrow biopsy not performed - criterion cannot be assessed"),
        };
        Criterion {
            name: "Major Criterion 2",
            met,
            details: details.to_string(),
        }
    }

    fn jak2_criterion(&self) -> Criterion {
        let (met, details) = match self.jak2_mutation {
            Jak2Status::V617fPositive => (true, "JAK2V617F mutation detected"),
            Jak2Status::Exon12Positive => (true, "JAK2 exon 12 mutation detected"),
            Jak2Status::Negative => (false, "No JAK2 mutations detected"),
            Jak2Status::NotTested => (false, "JAK2 mutation testing not performed - criterion cannot be assessed"),
        };
        Criterion {
            name: "Major Criterion 3",
            met,
            details: details.to_string(),
        }
    }

    fn epo_criterion(&self) -> Criterion {
        let (met, details) = match self.erythropoietin_level {
            EpoLevel::Subnormal => (true, "Serum erythropoietin level is subnormal"),
            EpoLevel::Normal => (false, "Serum erythropoietin level is normal"),
            EpoLevel::Elevated => (false, "Serum erythropoietin level is elevated"),
            EpoLevel::NotMeasured => (false, "Serum erythropoietin level not measured - criterion cannot be assessed"),
        };
        Criterion {
            name: "Minor Criterion 1",
            met,
            details: details.to_string(),
        }
    }
}

const MANAGEMENT: &str = "Initiate appropriate management including phlebotomy, cytoreductive therapy as indicated, \
    and monitoring for thrombotic complications.";

pub fn calculate(input: &PolycythemiaVeraInput) -> CalcResult {
    let major = [input.red_cell_criterion(), input.marrow_criterion(), input.jak2_criterion()];
    let minor = input.epo_criterion();
    let major_met = major.iter().filter(|c| c.met).count();
    let minor_met = usize::from(minor.met);

    let (status, interpretation) = if major_met >= 3 {
        (
            "diagnosis_met",
            Interpretation::new(
                "Polycythemia Vera Diagnosed",
                "WHO 2016 criteria met - diagnosis confirmed",
                format!(
                    "WHO 2016 diagnostic criteria for polycythemia vera are MET. Patient fulfills {major_met} of 3 major criteria. \
                     Diagnosis of polycythemia vera is confirmed. {MANAGEMENT}"
                ),
            ),
        )
    } else if major_met >= 2 && minor_met >= 1 {
        (
            "diagnosis_met",
            Interpretation::new(
                "Polycythemia Vera Diagnosed",
                "WHO 2016 criteria met - diagnosis confirmed",
                format!(
                    "WHO 2016 diagnostic criteria for polycythemia vera are MET. Patient fulfills {major_met} of 3 major criteria \
                     and {minor_met} minor criterion. Diagnosis of polycythemia vera is confirmed. {MANAGEMENT}"
                ),
            ),
        )
    } else if major_met >= 2 {
        (
            "probable_pv",
            Interpretation::new(
                "Probable Polycythemia Vera",
                "Some criteria met but additional testing needed",
                format!(
                    "Patient fulfills {major_met} of 3 major criteria but lacks minor criteria. Consider measuring serum erythropoietin \
                     level to complete diagnostic workup. If EPO is subnormal, diagnosis of polycythemia vera would be confirmed."
                ),
            ),
        )
    } else if major_met >= 1 {
        (
            "probable_pv",
            Interpretation::new(
                "Insufficient Criteria",
                "Partial criteria met - additional testing needed",
                format!(
                    "Patient fulfills {major_met} of 3 major criteria. Additional testing needed to establish diagnosis. Consider completing \
                     missing evaluations (bone marrow biopsy, JAK2 mutation testing, erythropoietin level) to fully assess WHO criteria."
                ),
            ),
        )
    } else {
        (
            "criteria_not_met",
            Interpretation::new(
                "Criteria Not Met",
                "WHO criteria for polycythemia vera not fulfilled",
                "Current findings do not meet WHO 2016 diagnostic criteria for polycythemia vera. Consider alternative causes of \
                 erythrocytosis including secondary polycythemia, other myeloproliferative neoplasms, or relative polycythemia.",
            ),
        )
    };

    let breakdown: Vec<_> = major
        .iter()
        .chain(std::iter::once(&minor))
        .map(|c| {
            json!({
                "criterion": c.name,
                "status": if c.met { "Met" } else { "Not Met" },
                "details": c.details,
            })
        })
        .collect();

    Ok(CalculatorResponse::new(status, "categorical", interpretation)
        .with("major_criteria_met", major_met)
        .with("minor_criteria_met", minor_met)
        .with("total_major_criteria", 3)
        .with("total_minor_criteria", 1)
        .with("criteria_details", breakdown))
}
