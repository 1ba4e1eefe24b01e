//! IMPACT prognostic models for traumatic brain injury (core, extended, lab).
//!
//! Each model is a logistic regression for 6-month mortality; the
//! unfavourable-outcome probability is a model-specific multiple of it,
//! capped at 95%.

use medcalc_core::math::{ensure_range, fixed, logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum MotorScore {
        ObeysCommands => "obeys_commands",
        LocalizesPain => "localizes_pain",
        WithdrawsFromPain => "withdraws_from_pain",
        AbnormalFlexion => "abnormal_flexion",
        AbnormalExtension => "abnormal_extension",
        NoMotorResponse => "no_motor_response",
    }
}

impl MotorScore {
    fn gcs_motor(self) -> f64 {
        match self {
            MotorScore::ObeysCommands => 6.0,
            MotorScore::LocalizesPain => 5.0,
            MotorScore::WithdrawsFromPain => 4.0,
            MotorScore::AbnormalFlexion => 3.0,
            MotorScore::AbnormalExtension => 2.0,
            MotorScore::NoMotorResponse => 1.0,
        }
    }
}

choice! {
    pub enum PupillaryReactivity {
        BothReactive => "both_reactive",
        OneReactive => "one_reactive",
        BothNonreactive => "both_nonreactive",
    }
}

impl PupillaryReactivity {
    fn value(self) -> f64 {
        match self {
            PupillaryReactivity::BothReactive => 0.0,
            PupillaryReactivity::OneReactive => 1.0,
            PupillaryReactivity::BothNonreactive => 2.0,
        }
    }
}

choice! {
    pub enum MarshallCt {
        DiffuseInjuryI => "diffuse_injury_i",
        DiffuseInjuryIi => "diffuse_injury_ii",
        DiffuseInjuryIii => "diffuse_injury_iii",
        DiffuseInjuryIv => "diffuse_injury_iv",
        EvacuatedMassLesion => "evacuated_mass_lesion",
        NonEvacuatedMassLesion => "non_evacuated_mass_lesion",
    }
}

impl MarshallCt {
    fn class(self) -> f64 {
        match self {
            MarshallCt::DiffuseInjuryI => 1.0,
            MarshallCt::DiffuseInjuryIi => 2.0,
            MarshallCt::DiffuseInjuryIii => 3.0,
            MarshallCt::DiffuseInjuryIv => 4.0,
            MarshallCt::EvacuatedMassLesion => 5.0,
            MarshallCt::NonEvacuatedMassLesion => 6.0,
        }
    }
}

choice! {
    pub enum ModelType {
        Core => "core",
        Extended => "extended",
        Lab => "lab",
    }
}

calculator_input! {
    pub struct ImpactInput {
        pub age: i64 => 14..=100,
        pub motor_score: MotorScore,
        pub pupillary_reactivity: PupillaryReactivity,
        pub model_type: ModelType,
        pub hypoxia: Option<YesNo>,
        pub hypotension: Option<YesNo>,
        pub marshall_ct_classification: Option<MarshallCt>,
        pub traumatic_sah: Option<YesNo>,
        pub epidural_hematoma: Option<YesNo>,
        /// mg/dL
        pub glucose: Option<f64>,
        /// g/dL
        pub hemoglobin: Option<f64>,
    }
}

/// Secondary insults and CT findings used by the extended and lab models.
struct Extended {
    hypoxia: YesNo,
    hypotension: YesNo,
    marshall: MarshallCt,
    traumatic_sah: YesNo,
    epidural_hematoma: YesNo,
}

struct Coefficients {
    intercept: f64,
    age: f64,
    motor: f64,
    pupil: f64,
    hypoxia: f64,
    hypotension: f64,
    marshall: f64,
    traumatic_sah: f64,
    epidural_hematoma: f64,
    glucose: f64,
    hemoglobin: f64,
    unfavorable_ratio: f64,
}

const CORE: Coefficients = Coefficients {
    intercept: -1.65,
    age: 0.032,
    motor: -0.45,
    pupil: 0.38,
    hypoxia: 0.0,
    hypotension: 0.0,
    marshall: 0.0,
    traumatic_sah: 0.0,
    epidural_hematoma: 0.0,
    glucose: 0.0,
    hemoglobin: 0.0,
    unfavorable_ratio: 1.6,
};

const EXTENDED: Coefficients = Coefficients {
    intercept: -2.12,
    age: 0.034,
    motor: -0.48,
    pupil: 0.42,
    hypoxia: 0.35,
    hypotension: 0.28,
    marshall: 0.15,
    traumatic_sah: 0.22,
    epidural_hematoma: -0.18,
    glucose: 0.0,
    hemoglobin: 0.0,
    unfavorable_ratio: 1.5,
};

const LAB: Coefficients = Coefficients {
    intercept: -2.45,
    age: 0.036,
    motor: -0.52,
    pupil: 0.45,
    hypoxia: 0.38,
    hypotension: 0.31,
    marshall: 0.18,
    traumatic_sah: 0.25,
    epidural_hematoma: -0.15,
    glucose: 0.002,
    hemoglobin: -0.08,
    unfavorable_ratio: 1.4,
};

impl ImpactInput {
    fn validate(&self) -> CalcResult<(Option<Extended>, Option<(f64, f64)>)> {
        if self.model_type == ModelType::Core {
            return Ok((None, None));
        }

        let (Some(hypoxia), Some(hypotension), Some(marshall), Some(traumatic_sah), Some(epidural_hematoma)) = (
            self.hypoxia,
            self.hypotension,
            self.marshall_ct_classification,
            self.traumatic_sah,
            self.epidural_hematoma,
        ) else {
            return Err(CalcError::constraint(
                "Extended and Lab models require hypoxia, hypotension, marshall_ct_classification, traumatic_sah, and epidural_hematoma",
            ));
        };
        let extended = Extended { hypoxia, hypotension, marshall, traumatic_sah, epidural_hematoma };
        if self.model_type == ModelType::Extended {
            return Ok((Some(extended), None));
        }

        let (Some(glucose), Some(hemoglobin)) = (self.glucose, self.hemoglobin) else {
            return Err(CalcError::constraint("Lab model requires glucose and hemoglobin values"));
        };
        ensure_range("glucose", glucose, 50.0, 800.0)?;
        ensure_range("hemoglobin", hemoglobin, 5.0, 20.0)?;
        Ok((Some(extended), Some((glucose, hemoglobin))))
    }
}

fn flag(answer: YesNo) -> f64 {
    answer.points(1) as f64
}

pub fn calculate(input: &ImpactInput) -> CalcResult {
    let (extended, labs) = input.validate()?;
    let c = match input.model_type {
        ModelType::Core => &CORE,
        ModelType::Extended => &EXTENDED,
        ModelType::Lab => &LAB,
    };

    let mut lp = c.intercept
        + c.age * input.age as f64
        + c.motor * input.motor_score.gcs_motor()
        + c.pupil * input.pupillary_reactivity.value();
    if let Some(e) = &extended {
        lp += c.hypoxia * flag(e.hypoxia)
            + c.hypotension * flag(e.hypotension)
            + c.marshall * e.marshall.class()
            + c.traumatic_sah * flag(e.traumatic_sah)
            + c.epidural_hematoma * flag(e.epidural_hematoma);
    }
    if let Some((glucose, hemoglobin)) = labs {
        lp += c.glucose * glucose + c.hemoglobin * hemoglobin;
    }

    let mortality = logistic(lp) * 100.0;
    let unfavorable = (mortality * c.unfavorable_ratio).min(95.0);

    let (stage, text) = if mortality < 10.0 {
        (
            "Very Low Risk",
            "Excellent prognosis. Very low probability of death or severe disability at 6 months. Aggressive treatment strongly indicated. Good functional recovery expected.",
        )
    } else if mortality < 25.0 {
        (
            "Low Risk",
            "Good prognosis. Low to moderate probability of adverse outcomes. Aggressive treatment recommended. Majority likely to achieve functional independence.",
        )
    } else if mortality < 50.0 {
        (
            "Moderate Risk",
            "Moderate prognosis. Significant risk of death or severe disability. Treatment decisions should involve family discussion. Variable functional outcomes expected.",
        )
    } else if mortality < 75.0 {
        (
            "High Risk",
            "Poor prognosis. High probability of death or severe disability. Treatment decisions require careful family consultation regarding goals of care. Limited functional recovery expected.",
        )
    } else {
        (
            "Very High Risk",
            "Very poor prognosis. Very high probability of death or severe disability. Consider comfort care measures. Family counseling essential regarding realistic expectations.",
        )
    };
    let description = format!(
        "Mortality {}%, Unfavorable outcome {}%",
        fixed(mortality, 1),
        fixed(unfavorable, 1)
    );

    Ok(
        CalculatorResponse::new(round_to(mortality, 1), "percentage", Interpretation::new(stage, description, text))
            .with("unfavorable_outcome_probability", round_to(unfavorable, 1))
            .with("model_used", input.model_type.to_string().to_uppercase()),
    )
}
