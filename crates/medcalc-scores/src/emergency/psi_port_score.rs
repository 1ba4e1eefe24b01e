//! Pneumonia Severity Index (PSI/PORT).
//!
//! Class I is assigned before any points are summed: age under 50, no
//! comorbidity and no abnormal exam or laboratory finding.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};

calculator_input! {
    pub struct PsiPortInput {
        pub age: i64 => 18..=120,
        pub sex: Sex,
        pub nursing_home_resident: YesNo,
        pub neoplastic_disease: YesNo,
        pub liver_disease: YesNo,
        pub congestive_heart_failure: YesNo,
        pub cerebrovascular_disease: YesNo,
        pub renal_disease: YesNo,
        pub altered_mental_status: YesNo,
        pub respiratory_rate: i64 => 5..=60,
        pub systolic_blood_pressure: i64 => 50..=250,
        pub temperature: f64 => 30.0..=45.0,
        pub pulse: i64 => 30..=200,
        pub bun: f64 => 1.0..=200.0,
        pub sodium: f64 => 100.0..=170.0,
        pub glucose: f64 => 30.0..=800.0,
        pub hematocrit: f64 => 10.0..=70.0,
        pub pleural_effusion: YesNo,
        pub ph: Option<f64> => 6.5..=8.0,
        pub pao2: Option<f64> => 20.0..=200.0,
    }
}

impl PsiPortInput {

    fn comorbidity_points(&self) -> i64 {
        self.nursing_home_resident.points(10)
            + self.neoplastic_disease.points(30)
            + self.liver_disease.points(20)
            + self.congestive_heart_failure.points(10)
            + self.cerebrovascular_disease.points(10)
            + self.renal_disease.points(10)
    }

    fn finding_points(&self) -> i64 {
        let mut points = self.altered_mental_status.points(20);
        if self.respiratory_rate >= 30 {
            points += 20;
        }
        if self.systolic_blood_pressure < 90 {
            points += 20;
        }
        if self.temperature < 35.0 || self.temperature >= 40.0 {
            points += 15;
        }
        if self.pulse >= 125 {
            points += 10;
        }
        if self.ph.is_some_and(|ph| ph < 7.35) {
            points += 30;
        }
        if self.bun >= 30.0 {
            points += 20;
        }
        if self.sodium < 130.0 {
            points += 20;
        }
        if self.glucose >= 250.0 {
            points += 10;
        }
        if self.hematocrit < 30.0 {
            points += 10;
        }
        if self.pao2.is_some_and(|pao2| pao2 < 60.0) {
            points += 10;
        }
        points + self.pleural_effusion.points(10)
    }
}

pub fn calculate(input: &PsiPortInput) -> CalcResult {
    let comorbidities = input.comorbidity_points();
    let findings = input.finding_points();

    if input.age < 50 && comorbidities == 0 && findings == 0 {
        return Ok(CalculatorResponse::new(
            0,
            "points",
            Interpretation::new(
                "Class I (Low Risk)",
                "Low mortality risk",
                "Low risk for mortality. Outpatient treatment recommended. 30-day mortality rate <1%. Consider outpatient oral antibiotics and close follow-up.",
            ),
        ));
    }

    let demographics = if input.sex.is_female() { input.age - 10 } else { input.age };
    let score = demographics + comorbidities + findings;
    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..=70 => Interpretation::new(
            "Class II (Low Risk)",
            "Low mortality risk",
            "Low risk for mortality. Outpatient treatment recommended. 30-day mortality rate <3%. Consider outpatient oral antibiotics and close follow-up.",
        ),
        71..=90 => Interpretation::new(
            "Class III (Low Risk)",
            "Low mortality risk",
            "Low risk for mortality. Outpatient treatment vs. observation admission. 30-day mortality rate <3%. Consider brief hospitalization or intensive outpatient monitoring.",
        ),
        91..=130 => Interpretation::new(
            "Class IV (Moderate Risk)",
            "Moderate mortality risk",
            "Moderate risk for mortality. Inpatient admission recommended. 30-day mortality rate 8-9%. Requires hospitalization with standard care and monitoring.",
        ),
        _ => Interpretation::new(
            "Class V (High Risk)",
            "High mortality risk",
            "High risk for mortality. Inpatient admission with consideration for ICU care. 30-day mortality rate 27-31%. Requires aggressive treatment and close monitoring.",
        ),
    }
}
