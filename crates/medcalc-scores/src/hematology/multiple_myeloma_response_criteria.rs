//! IMWG uniform response criteria for multiple myeloma.
//!
//! Categories are tried from deepest to shallowest: sCR, CR, VGPR, PR, and
//! stable disease as the fallback.

use medcalc_core::math::ensure;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

const NORMAL_FLC_RATIO: std::ops::RangeInclusive<f64> = 0.26..=1.65;
const CR_PLASMA_CELLS_MAX: f64 = 5.0;

choice! {
    pub enum Immunofixation {
        Negative => "negative",
        Positive => "positive",
    }
}

choice! {
    pub enum Presence {
        Absent => "absent",
        Present => "present",
    }
}

calculator_input! {
    pub struct MyelomaResponseInput {
        pub serum_immunofixation: Immunofixation,
        pub urine_immunofixation: Immunofixation,
        pub bone_marrow_plasma_cells: f64 => 0.0..=100.0,
        pub soft_tissue_plasmacytomas: Presence,
        pub free_light_chain_ratio: Option<f64>,
        pub clonal_cells_bone_marrow: Option<Presence>,
        /// Percent reduction from baseline.
        pub serum_m_protein_reduction: Option<f64> => 0.0..=100.0,
        /// mg/24h
        pub urine_m_protein_24h: Option<f64>,
        pub serum_electrophoresis_detectable: Option<YesNo>,
        pub plasmacytoma_reduction: Option<f64> => 0.0..=100.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Response {
    StringentComplete,
    Complete,
    VeryGoodPartial,
    Partial,
    Stable,
}

impl MyelomaResponseInput {
    fn validate(&self) -> CalcResult<()> {
        if let Some(ratio) = self.free_light_chain_ratio {
            ensure(ratio > 0.0, "Free light chain ratio must be a positive number")?;
        }
        if let Some(urine) = self.urine_m_protein_24h {
            ensure(urine >= 0.0, "Urine M protein 24h must be a non-negative number")?;
        }
        Ok(())
    }

    fn response(&self) -> Response {
        let complete = self.serum_immunofixation == Immunofixation::Negative
            && self.urine_immunofixation == Immunofixation::Negative
            && self.bone_marrow_plasma_cells < CR_PLASMA_CELLS_MAX
            && self.soft_tissue_plasmacytomas == Presence::Absent;
        if complete {
            let normal_ratio = self.free_light_chain_ratio.is_some_and(|r| NORMAL_FLC_RATIO.contains(&r));
            let no_clonal_cells = self.clonal_cells_bone_marrow == Some(Presence::Absent);
            return if normal_ratio && no_clonal_cells {
                Response::StringentComplete
            } else {
                Response::Complete
            };
        }

        let vgpr_by_immunofixation = self.serum_immunofixation == Immunofixation::Positive
            && self.urine_immunofixation == Immunofixation::Positive
            && self.serum_electrophoresis_detectable == Some(YesNo::No);
        let vgpr_by_reduction = matches!(
            (self.serum_m_protein_reduction, self.urine_m_protein_24h),
            (Some(reduction), Some(urine)) if reduction >= 90.0 && urine < 100.0
        );
        if vgpr_by_immunofixation || vgpr_by_reduction {
            return Response::VeryGoodPartial;
        }

        let serum_ok = self.serum_m_protein_reduction.is_some_and(|r| r >= 50.0);
        let urine_ok = self.urine_m_protein_24h.is_none_or(|u| u < 200.0);
        let plasmacytoma_ok = self.soft_tissue_plasmacytomas == Presence::Absent
            || self.plasmacytoma_reduction.is_some_and(|r| r >= 50.0);
        if serum_ok && urine_ok && plasmacytoma_ok {
            Response::Partial
        } else {
            Response::Stable
        }
    }
}

fn interpret(response: Response) -> Interpretation {
    match response {
        Response::StringentComplete => Interpretation::new(
            "Stringent Complete Response (sCR)",
            "Best possible response",
            "STRINGENT COMPLETE RESPONSE (sCR): The patient has achieved the highest level of response to multiple myeloma treatment. \
             CRITERIA MET: Negative serum and urine immunofixation, <5% bone marrow plasma cells, absence of soft tissue plasmacytomas, \
             normal free light chain ratio (0.26-1.65), and absence of clonal cells in bone marrow. \
             MANAGEMENT: Consider minimal residual disease (MRD) testing if available.",
        ),
        Response::Complete => Interpretation::new(
            "Complete Response (CR)",
            "Complete response",
            "COMPLETE RESPONSE (CR): The patient has achieved complete remission of multiple myeloma. \
             CRITERIA MET: Negative serum and urine immunofixation, <5% bone marrow plasma cells, and disappearance of any soft tissue plasmacytomas. \
             MANAGEMENT: Consider evaluation for stringent CR with free light chain ratio and bone marrow immunohistochemistry if not already performed.",
        ),
        Response::VeryGoodPartial => Interpretation::new(
            "Very Good Partial Response (VGPR)",
            "Very good partial response",
            "VERY GOOD PARTIAL RESPONSE (VGPR): The patient has achieved very good partial remission. \
             CRITERIA MET: Either M component detectable by immunofixation but not electrophoresis, \
             OR ≥90% reduction in serum M component plus urine M component <100 mg per 24 hours. \
             MANAGEMENT: Continue current treatment regimen and monitor for further improvement in response.",
        ),
        Response::Partial => Interpretation::new(
            "Partial Response (PR)",
            "Partial response",
            "PARTIAL RESPONSE (PR): The patient has achieved significant but incomplete response. \
             CRITERIA MET: ≥50% reduction of serum M protein, urinary M protein <200 mg per 24 hours, \
             and if present, ≥50% reduction in soft tissue plasmacytomas. \
             MANAGEMENT: Continue current treatment regimen with goal of achieving deeper response.",
        ),
        Response::Stable => Interpretation::new(
            "Stable Disease (SD)",
            "Stable disease",
            "STABLE DISEASE (SD): The patient has stable disease not meeting criteria for other response categories. \
             MANAGEMENT: Evaluate need for treatment change if this represents lack of response to initial therapy. \
             FOLLOW-UP: Close monitoring every 1-2 months.",
        ),
    }
}

pub fn calculate(input: &MyelomaResponseInput) -> CalcResult {
    input.validate()?;
    let interpretation = interpret(input.response());
    let result = interpretation.stage.clone();
    Ok(CalculatorResponse::new(result, "", interpretation))
}
