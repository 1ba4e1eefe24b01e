//! IDF-DAR risk stratification for fasting during Ramadan in diabetes.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum DiabetesType {
        Type2 => "type_2",
        Type1 => "type_1",
    }
}

choice! {
    pub enum YearsSinceDiagnosis {
        UnderTen => "less_than_10",
        TenOrMore => "10_or_more",
    }
}

choice! {
    pub enum Hypoglycemia {
        None => "none",
        LessThanWeekly => "less_than_weekly",
        MultipleWeekly => "multiple_weekly",
        RecentSevere => "recent_severe",
        Unawareness => "unawareness",
    }
}

choice! {
    pub enum Hba1cLevel {
        Below7_5 => "less_than_7_5",
        From7_5To9 => "7_5_to_9",
        Above9 => "greater_than_9",
    }
}

choice! {
    pub enum Treatment {
        Other => "other_therapy",
        ShortActingSulfonylurea => "short_acting_sulfonylurea",
        LongActingSulfonylurea => "long_acting_sulfonylurea",
        BasalInsulin => "basal_insulin",
        MixedInsulin => "mixed_insulin",
        IntensiveInsulin => "intensive_insulin",
    }
}

choice! {
    pub enum Monitoring {
        Regular => "regular",
        Irregular => "irregular",
        None => "none",
    }
}

choice! {
    pub enum Pregnancy {
        PregnantBreastfeeding => "pregnant_breastfeeding",
        NotApplicable => "not_applicable",
    }
}

choice! {
    pub enum Cognition {
        Impaired => "impaired",
        Normal => "normal",
    }
}

choice! {
    pub enum PhysicalLabor {
        Intense => "intense",
        Moderate => "moderate",
        Light => "light",
    }
}

choice! {
    pub enum RamadanExperience {
        Successful => "successful",
        Unsuccessful => "unsuccessful",
        NeverFasted => "never_fasted",
    }
}

choice! {
    pub enum FastingHours {
        UnderFifteen => "less_than_15",
        FifteenOrMore => "15_or_more",
    }
}

calculator_input! {
    pub struct IdfDarInput {
        pub diabetes_type: DiabetesType,
        pub years_since_diagnosis: YearsSinceDiagnosis,
        pub hypoglycemia_frequency: Hypoglycemia,
        pub hba1c_level: Hba1cLevel,
        pub treatment_type: Treatment,
        pub self_monitoring_frequency: Monitoring,
        pub acute_complications: YesNo,
        pub macrovascular_disease: YesNo,
        pub renal_complications: YesNo,
        pub pregnancy_status: Pregnancy,
        pub frailty_cognitive_function: Cognition,
        pub physical_labor: PhysicalLabor,
        pub previous_ramadan_experience: RamadanExperience,
        pub fasting_hours: FastingHours,
    }
}

fn yes(answer: YesNo) -> f64 {
    if answer.is_yes() { 1.0 } else { 0.0 }
}

pub fn calculate(input: &IdfDarInput) -> CalcResult {
    let score = match input.diabetes_type {
        DiabetesType::Type2 => 0.0,
        DiabetesType::Type1 => 1.0,
    } + match input.years_since_diagnosis {
        YearsSinceDiagnosis::UnderTen => 0.0,
        YearsSinceDiagnosis::TenOrMore => 1.0,
    } + match input.hypoglycemia_frequency {
        Hypoglycemia::None => 0.0,
        Hypoglycemia::LessThanWeekly => 1.0,
        Hypoglycemia::MultipleWeekly => 3.5,
        Hypoglycemia::RecentSevere => 5.5,
        Hypoglycemia::Unawareness => 6.5,
    } + match input.hba1c_level {
        Hba1cLevel::Below7_5 => 0.0,
        Hba1cLevel::From7_5To9 => 1.0,
        Hba1cLevel::Above9 => 2.0,
    } + match input.treatment_type {
        Treatment::Other => 0.0,
        Treatment::ShortActingSulfonylurea => 0.5,
        Treatment::LongActingSulfonylurea => 1.0,
        Treatment::BasalInsulin => 1.5,
        Treatment::MixedInsulin => 2.5,
        Treatment::IntensiveInsulin => 3.0,
    } + match input.self_monitoring_frequency {
        Monitoring::Regular => 0.0,
        Monitoring::Irregular => 0.5,
        Monitoring::None => 1.0,
    } + yes(input.acute_complications)
        + yes(input.macrovascular_disease)
        + yes(input.renal_complications)
        + match input.pregnancy_status {
            Pregnancy::PregnantBreastfeeding => 2.0,
            Pregnancy::NotApplicable => 0.0,
        }
        + match input.frailty_cognitive_function {
            Cognition::Impaired => 1.0,
            Cognition::Normal => 0.0,
        }
        + match input.physical_labor {
            PhysicalLabor::Intense => 1.0,
            PhysicalLabor::Moderate => 0.5,
            PhysicalLabor::Light => 0.0,
        }
        + match input.previous_ramadan_experience {
            RamadanExperience::Successful => 0.0,
            RamadanExperience::Unsuccessful => 0.5,
            RamadanExperience::NeverFasted => 1.0,
        }
        + match input.fasting_hours {
            FastingHours::UnderFifteen => 0.0,
            FastingHours::FifteenOrMore => 0.5,
        };
    let score = round_to(score, 1);

    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: f64) -> Interpretation {
    if score <= 3.0 {
        Interpretation::new(
            "Low Risk",
            "Fasting probably safe",
            "Low risk for complications during Ramadan fasting. Patient can likely fast safely with appropriate education and monitoring. Recommend pre-Ramadan counseling on meal timing, glucose monitoring, and recognition of hypoglycemia symptoms. Consider adjusting medication timing but major therapy changes usually not required. Monitor for breakthrough hypoglycemia and maintain regular follow-up.",
        )
    } else if score <= 6.0 {
        Interpretation::new(
            "Moderate Risk",
            "Fasting safety uncertain",
            "Moderate risk for complications during Ramadan fasting. Requires careful evaluation and enhanced monitoring. Consider medication adjustments, intensified glucose monitoring, and structured diabetes education. Patients should have clear action plans for hypoglycemia and hyperglycemia. Close supervision by healthcare team recommended. May fast with medical supervision if patient strongly desires.",
        )
    } else {
        Interpretation::new(
            "High Risk",
            "Fasting probably unsafe",
            "High risk for serious complications during Ramadan fasting. Generally advised against fasting due to significant risk of hypoglycemia, hyperglycemia, diabetic ketoacidosis, or other acute complications. If patient insists on fasting despite medical advice, requires intensive monitoring, immediate access to medical care, and detailed emergency action plans. Consider alternative spiritual practices and emphasize that health preservation is a religious priority.",
        )
    }
}
