//! Modified Brain Injury Guideline (mBIG) triage category, 1 to 3.
//!
//! Any mBIG 3 finding dominates; otherwise any mBIG 2 finding applies.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum SubduralSize {
        None => "none",
        UpTo4mm => "4mm_or_less",
        From4To8mm => "4_to_8mm",
        Over8mm => "8mm_or_more",
    }
}

choice! {
    pub enum IntraparenchymalSize {
        None => "none",
        UpTo4mmSingle => "4mm_or_less_single",
        From4To8mmSingle => "4_to_8mm_single",
        Over8mmOrMultiple => "8mm_or_more_or_multiple",
    }
}

choice! {
    pub enum SubarachnoidExtent {
        None => "none",
        Limited => "limited_1_3mm",
        OneHemisphere => "1_hemisphere_over_3_sulci_1_3mm",
        BihemisphericOrThick => "bihemispheric_or_over_3mm",
    }
}

choice! {
    pub enum BloodAlcohol {
        UnknownOrUnder80 => "unknown_or_under_80",
        Over80 => "over_80_mg_dl",
    }
}

calculator_input! {
    pub struct MbigInput {
        pub anticoagulation_antiplatelet: YesNo,
        pub epidural_hematoma: YesNo,
        pub intraventricular_hemorrhage: YesNo,
        pub displaced_skull_fracture: YesNo,
        pub subdural_hematoma_size: SubduralSize,
        pub intraparenchymal_hemorrhage_size: IntraparenchymalSize,
        pub subarachnoid_hemorrhage_extent: SubarachnoidExtent,
        pub blood_alcohol_level: BloodAlcohol,
        pub nondisplaced_skull_fracture: YesNo,
    }
}

impl MbigInput {
    fn category(&self) -> i64 {
        let mbig3 = self.anticoagulation_antiplatelet.is_yes()
            || self.epidural_hematoma.is_yes()
            || self.intraventricular_hemorrhage.is_yes()
            || self.displaced_skull_fracture.is_yes()
            || self.subdural_hematoma_size == SubduralSize::Over8mm
            || self.intraparenchymal_hemorrhage_size == IntraparenchymalSize::Over8mmOrMultiple
            || self.subarachnoid_hemorrhage_extent == SubarachnoidExtent::BihemisphericOrThick;
        if mbig3 {
            return 3;
        }

        let mbig2 = self.blood_alcohol_level == BloodAlcohol::Over80
            || self.nondisplaced_skull_fracture.is_yes()
            || self.subdural_hematoma_size == SubduralSize::From4To8mm
            || self.intraparenchymal_hemorrhage_size == IntraparenchymalSize::From4To8mmSingle
            || self.subarachnoid_hemorrhage_extent == SubarachnoidExtent::OneHemisphere;
        if mbig2 { 2 } else { 1 }
    }
}

pub fn calculate(input: &MbigInput) -> CalcResult {
    let category = input.category();
    let interpretation = match category {
        1 => Interpretation::new(
            "mBIG 1",
            "Lowest severity - No admission required",
            "mBIG 1 classification indicates lowest severity traumatic brain injury. Management: 6-hour ED observation with Q2 neurological assessments. No repeat head CT required, no neurosurgery consultation needed. Patient can be safely discharged when GCS returns to 15. This approach has been validated to be safe and significantly reduces resource utilization.",
        ),
        2 => Interpretation::new(
            "mBIG 2",
            "Intermediate severity - Hospital admission",
            "mBIG 2 classification indicates intermediate severity traumatic brain injury. Management: Hospital admission to general medical floor for 24-48 hours. Q2 neurological assessments required. No repeat head CT needed, no neurosurgery consultation required. Discharge when GCS returns to 15. This category balances safety with resource conservation.",
        ),
        _ => Interpretation::new(
            "mBIG 3",
            "Highest severity - Standard of care",
            "mBIG 3 classification indicates highest severity traumatic brain injury. Management: Continue with standard of care at your institution. Requires neurosurgical consultation and intensive monitoring. These patients have significant intracranial pathology requiring full neurosurgical evaluation and management.",
        ),
    };
    Ok(CalculatorResponse::new(category, "", interpretation))
}
