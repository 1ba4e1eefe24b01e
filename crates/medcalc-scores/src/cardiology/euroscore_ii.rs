//! EuroSCORE II: predicted in-hospital mortality after cardiac surgery.

use medcalc_core::math::{logistic, round_to};
use medcalc_core::{
    calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo,
};

choice! {
    pub enum RenalFunction {
        Normal => "greater_than_85",
        Moderate => "51_to_85",
        Severe => "50_or_less",
        Dialysis => "on_dialysis",
    }
}

choice! {
    pub enum NyhaClass {
        I => "class_1",
        II => "class_2",
        III => "class_3",
        IV => "class_4",
    }
}

choice! {
    pub enum LvFunction {
        Good => "good_51_or_more",
        Moderate => "moderate_31_to_50",
        Poor => "poor_21_to_30",
        VeryPoor => "very_poor_20_or_less",
    }
}

choice! {
    pub enum Urgency {
        Elective => "elective",
        Urgent => "urgent",
        Emergency => "emergency",
        Salvage => "salvage",
    }
}

choice! {
    pub enum InterventionWeight {
        SingleNonCabg => "single_non_cabg",
        TwoProcedures => "two_procedures",
        ThreeOrMore => "three_or_more_procedures",
    }
}

calculator_input! {
    pub struct EuroScoreIiInput {
        pub age_years: i64 => 18..=110,
        pub sex: Sex,
        pub insulin_dependent_diabetes: YesNo,
        pub chronic_pulmonary_dysfunction: YesNo,
        pub mobility_dysfunction: YesNo,
        pub creatinine_clearance: RenalFunction,
        pub critical_preoperative_state: YesNo,
        pub nyha_class: NyhaClass,
        pub ccs_class_4: YesNo,
        pub extracardiac_arteriopathy: YesNo,
        pub previous_cardiac_surgery: YesNo,
        pub active_endocarditis: YesNo,
        pub left_ventricular_function: LvFunction,
        pub recent_mi: YesNo,
        pub pulmonary_hypertension: YesNo,
        pub urgency: Urgency,
        pub weight_of_intervention: InterventionWeight,
        pub surgery_on_thoracic_aorta: YesNo,
    }
}

const CONSTANT: f64 = -5.324537;

fn flag(present: YesNo, coefficient: f64) -> f64 {
    if present.is_yes() { coefficient } else { 0.0 }
}

pub fn calculate(input: &EuroScoreIiInput) -> CalcResult {
    let mut y = CONSTANT;
    if input.age_years > 60 {
        y += 0.0285181 * (input.age_years - 60) as f64;
    }
    if input.sex.is_female() {
        y += 0.2196434;
    }
    y += flag(input.insulin_dependent_diabetes, 0.3542749);
    y += flag(input.chronic_pulmonary_dysfunction, 0.1886564);
    y += flag(input.mobility_dysfunction, 0.2407181);
    y += match input.creatinine_clearance {
        RenalFunction::Normal => 0.0,
        RenalFunction::Moderate => 0.303553,
        RenalFunction::Severe => 0.8592256,
        RenalFunction::Dialysis => 0.6421508,
    };
    y += flag(input.critical_preoperative_state, 1.086517);
    y += match input.nyha_class {
        NyhaClass::I => 0.0,
        NyhaClass::II => 0.1070545,
        NyhaClass::III => 0.2958358,
        NyhaClass::IV => 0.5597929,
    };
    y += flag(input.ccs_class_4, 0.2226147);
    y += flag(input.extracardiac_arteriopathy, 0.5360268);
    y += flag(input.previous_cardiac_surgery, 1.118599);
    y += flag(input.active_endocarditis, 0.6194522);
    y += match input.left_ventricular_function {
        LvFunction::Good => 0.0,
        LvFunction::Moderate => 0.3150652,
        LvFunction::Poor => 0.8084096,
        LvFunction::VeryPoor => 0.9346919,
    };
    y += flag(input.recent_mi, 0.1528943);
    y += flag(input.pulmonary_hypertension, 0.1788899);
    y += match input.urgency {
        Urgency::Elective => 0.0,
        Urgency::Urgent => 0.3174673,
        Urgency::Emergency => 0.7039121,
        Urgency::Salvage => 1.362947,
    };
    y += match input.weight_of_intervention {
        InterventionWeight::SingleNonCabg => 0.0,
        InterventionWeight::TwoProcedures => 0.5521478,
        InterventionWeight::ThreeOrMore => 0.9724533,
    };
    y += flag(input.surgery_on_thoracic_aorta, 0.6527205);

    let mortality = logistic(y) * 100.0;
    let interpretation = interpret(mortality);
    let category = interpretation.stage.clone();

    Ok(
        CalculatorResponse::new(round_to(mortality, 2), "percentage", interpretation)
            .with("risk_category", category)
            .with("logistic_score", round_to(y, 4)),
    )
}

fn interpret(mortality: f64) -> Interpretation {
    let lead = format!("EuroSCORE II predicted in-hospital mortality: {mortality:.2}%.");
    if mortality < 2.0 {
        Interpretation::new(
            "Low Risk",
            "Low operative risk",
            format!("{lead} LOW RISK for cardiac surgery. Standard perioperative care and monitoring recommended. Excellent expected outcomes with routine management protocols."),
        )
    } else if mortality < 5.0 {
        Interpretation::new(
            "Medium Risk",
            "Medium operative risk",
            format!("{lead} MEDIUM RISK for cardiac surgery. Enhanced perioperative monitoring and care planning recommended. Consider optimization of modifiable risk factors."),
        )
    } else if mortality < 10.0 {
        Interpretation::new(
            "High Risk",
            "High operative risk",
            format!("{lead} HIGH RISK for cardiac surgery. Intensive perioperative care, multidisciplinary team approach, and careful risk-benefit assessment recommended. Consider alternative treatments if appropriate."),
        )
    } else {
        Interpretation::new(
            "Very High Risk",
            "Very high operative risk",
            format!("{lead} VERY HIGH RISK for cardiac surgery. Requires detailed discussion with patient and family regarding risks and benefits. Consider alternative treatments, intensive perioperative support, and specialized cardiac surgery centers."),
        )
    }
}
