//! VA COVID-19 (VACO) Index: 30-day mortality after a positive SARS-CoV-2 test,
//! from age, sex and a Charlson comorbidity tally.

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};

const BASE_COEFFICIENT: f64 = -5.645;
const CCI_COEFFICIENT: f64 = 0.254;
const MALE_COEFFICIENT: f64 = 0.322291449;

choice! {
    pub enum Diabetes {
        None => "none",
        Uncomplicated => "uncomplicated",
        Complicated => "complicated",
    }
}

choice! {
    pub enum RenalDisease {
        None => "none",
        MildModerate => "mild_moderate",
        Severe => "severe",
    }
}

choice! {
    pub enum Cancer {
        None => "none",
        LocalizedSolid => "localized_solid",
        MetastaticSolid => "metastatic_solid",
        Leukemia => "leukemia",
        Lymphoma => "lymphoma",
    }
}

choice! {
    pub enum LiverDisease {
        None => "none",
        Mild => "mild",
        ModerateSevere => "moderate_severe",
    }
}

calculator_input! {
    pub struct VacoInput {
        pub age: i64 => 20..=115,
        pub sex: Sex,
        pub diabetes: Diabetes,
        pub chronic_pulmonary_disease: YesNo,
        pub renal_disease: RenalDisease,
        pub peripheral_vascular_disease: YesNo,
        pub congestive_heart_failure: YesNo,
        pub dementia: YesNo,
        pub cancer: Cancer,
        pub cerebrovascular_accident: YesNo,
        pub liver_disease: LiverDisease,
        pub myocardial_infarction: YesNo,
        pub peptic_ulcer_disease: YesNo,
        pub paralysis: YesNo,
        pub aids: YesNo,
        pub rheumatologic_disease: YesNo,
    }
}

fn age_coefficient(age: i64) -> f64 {
    match age {
        ..=49 => -2.228678713,
        50..=54 => 0.0,
        55..=59 => 0.400599289,
        60..=64 => 0.941322019,
        65..=69 => 1.295007128,
        70..=74 => 1.629533438,
        75..=79 => 1.763345763,
        80..=89 => 1.927443543,
        _ => 2.018752269,
    }
}

impl VacoInput {
    fn charlson_score(&self) -> i64 {
        let diabetes = match self.diabetes {
            Diabetes::None => 0,
            Diabetes::Uncomplicated => 1,
            Diabetes::Complicated => 2,
        };
        let renal = match self.renal_disease {
            RenalDisease::None => 0,
            RenalDisease::MildModerate => 1,
            RenalDisease::Severe => 2,
        };
        let cancer = match self.cancer {
            Cancer::None => 0,
            Cancer::LocalizedSolid | Cancer::Leukemia | Cancer::Lymphoma => 2,
            Cancer::MetastaticSolid => 6,
        };
        let liver = match self.liver_disease {
            LiverDisease::None => 0,
            LiverDisease::Mild => 1,
            LiverDisease::ModerateSevere => 3,
        };
        diabetes
            + renal
            + cancer
            + liver
            + self.chronic_pulmonary_disease.points(1)
            + self.peripheral_vascular_disease.points(1)
            + self.congestive_heart_failure.points(1)
            + self.dementia.points(1)
            + self.cerebrovascular_accident.points(1)
            + self.myocardial_infarction.points(1)
            + self.peptic_ulcer_disease.points(1)
            + self.paralysis.points(2)
            + self.aids.points(6)
            + self.rheumatologic_disease.points(1)
    }
}

pub fn calculate(input: &VacoInput) -> CalcResult {
    let cci = input.charlson_score();
    let sex_coefficient = if input.sex.is_female() { 0.0 } else { MALE_COEFFICIENT };
    let x = BASE_COEFFICIENT + age_coefficient(input.age) + sex_coefficient + CCI_COEFFICIENT * cci as f64;
    let risk = round_to(logistic(x) * 100.0, 1);
    let shown = fixed(risk, 1);

    let interpretation = if risk <= 8.7 {
        Interpretation::new(
            "Lower Risk",
            "Lower risk of 30-day mortality",
            format!(
                "Lower risk ({shown}%) of death within 30 days of COVID-19 infection. Continue standard preventive \
                 measures and consult healthcare provider if symptoms develop."
            ),
        )
    } else if risk <= 16.0 {
        Interpretation::new(
            "Moderate Risk",
            "Moderate risk of 30-day mortality",
            format!(
                "Moderate risk ({shown}%) of death within 30 days of COVID-19 infection. Enhanced preventive measures \
                 recommended. Seek medical attention promptly if COVID-19 symptoms develop."
            ),
        )
    } else if risk <= 21.2 {
        Interpretation::new(
            "High Risk",
            "High risk of 30-day mortality",
            format!(
                "High risk ({shown}%) of death within 30 days of COVID-19 infection. Strict preventive measures strongly \
                 recommended. Consider discussing additional protective strategies with healthcare provider."
            ),
        )
    } else {
        Interpretation::new(
            "Extreme Risk",
            "Extreme risk of 30-day mortality",
            format!(
                "Extreme risk ({shown}%) of death within 30 days of COVID-19 infection. Maximum preventive measures \
                 essential. Immediate medical consultation recommended for risk mitigation strategies."
            ),
        )
    };

    Ok(CalculatorResponse::new(risk, "percentage", interpretation).with("charlson_comorbidity_score", cci))
}
