//! CRASH score: Chemotherapy Risk Assessment Scale for High-age patients.
//!
//! Two subscores (hematologic and nonhematologic toxicity) plus a combined
//! score that takes the larger of the two chemotherapy-risk items.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum DiastolicBp {
        AtMost72 => "lte_72",
        Above72 => "gt_72",
    }
}

choice! {
    pub enum IadlScore {
        From26To29 => "26_to_29",
        From10To25 => "10_to_25",
    }
}

choice! {
    pub enum Ldh {
        Normal => "0_to_459",
        Above459 => "gt_459",
    }
}

choice! {
    pub enum HematologicChemoRisk {
        Low => "0_to_0.44",
        Intermediate => "0.45_to_0.57",
        High => "gt_0.57",
    }
}

choice! {
    pub enum EcogPs {
        Zero => "0",
        OneToTwo => "1_to_2",
        ThreeToFour => "3_to_4",
    }
}

choice! {
    pub enum Mmse {
        Perfect => "30",
        Below30 => "lt_30",
    }
}

choice! {
    pub enum Mna {
        Normal => "28_to_30",
        Below28 => "lt_28",
    }
}

choice! {
    pub enum NonhematologicChemoRisk {
        Zero => "0",
        One => "1",
        Two => "2",
    }
}

calculator_input! {
    pub struct CrashInput {
        pub diastolic_bp: DiastolicBp,
        pub iadl_score: IadlScore,
        pub ldh: Ldh,
        pub chemo_risk_hematologic: HematologicChemoRisk,
        pub ecog_ps: EcogPs,
        pub mmse: Mmse,
        pub mna: Mna,
        pub chemo_risk_nonhematologic: NonhematologicChemoRisk,
    }
}

struct Points {
    diastolic_bp: i64,
    iadl: i64,
    ldh: i64,
    chemo_hematologic: i64,
    ecog: i64,
    mmse: i64,
    mna: i64,
    chemo_nonhematologic: i64,
}

impl CrashInput {
    fn points(&self) -> Points {
        Points {
            diastolic_bp: i64::from(self.diastolic_bp == DiastolicBp::Above72),
            iadl: i64::from(self.iadl_score == IadlScore::From10To25),
            ldh: if self.ldh == Ldh::Above459 { 2 } else { 0 },
            chemo_hematologic: match self.chemo_risk_hematologic {
                HematologicChemoRisk::Low => 0,
                HematologicChemoRisk::Intermediate => 1,
                HematologicChemoRisk::High => 2,
            },
            ecog: match self.ecog_ps {
                EcogPs::Zero => 0,
                EcogPs::OneToTwo => 1,
                EcogPs::ThreeToFour => 2,
            },
            mmse: if self.mmse == Mmse::Below30 { 2 } else { 0 },
            mna: if self.mna == Mna::Below28 { 2 } else { 0 },
            chemo_nonhematologic: match self.chemo_risk_nonhematologic {
                NonhematologicChemoRisk::Zero => 0,
                NonhematologicChemoRisk::One => 1,
                NonhematologicChemoRisk::Two => 2,
            },
        }
    }
}

fn hematologic_risk(score: i64) -> (&'static str, &'static str) {
    match score {
        ..=1 => ("Low", "Low risk (~7%) of grade 4 hematologic toxicity"),
        2..=3 => ("Low-Intermediate", "Low-intermediate risk (~23%) of grade 4 hematologic toxicity"),
        4..=5 => ("Intermediate-High", "Intermediate-high risk (~54%) of grade 4 hematologic toxicity"),
        _ => ("High", "High risk (~100%) of grade 4 hematologic toxicity"),
    }
}

fn nonhematologic_risk(score: i64) -> (&'static str, &'static str) {
    match score {
        ..=2 => ("Low", "Low risk (~33%) of grade 3/4 nonhematologic toxicity"),
        3..=4 => ("Low-Intermediate", "Low-intermediate risk (~46%) of grade 3/4 nonhematologic toxicity"),
        5..=6 => ("Intermediate-High", "Intermediate-high risk (~67%) of grade 3/4 nonhematologic toxicity"),
        _ => ("High", "High risk (~93%) of grade 3/4 nonhematologic toxicity"),
    }
}

pub fn calculate(input: &CrashInput) -> CalcResult {
    let p = input.points();
    let hematologic = p.diastolic_bp + p.iadl + p.ldh + p.chemo_hematologic;
    let nonhematologic = p.ecog + p.mmse + p.mna + p.chemo_nonhematologic;
    let combined = p.diastolic_bp
        + p.iadl
        + p.ldh
        + p.ecog
        + p.mmse
        + p.mna
        + p.chemo_hematologic.max(p.chemo_nonhematologic);

    let interpretation = match combined {
        ..=3 => Interpretation::new(
            "Low",
            "Low risk",
            "Low risk for severe chemotherapy toxicity. Standard chemotherapy dosing may be appropriate with routine monitoring.",
        ),
        4..=6 => Interpretation::new(
            "Low-Intermediate",
            "Low-intermediate risk",
            "Low-intermediate risk for severe chemotherapy toxicity. Consider close monitoring and early intervention strategies.",
        ),
        7..=9 => Interpretation::new(
            "Intermediate-High",
            "Intermediate-high risk",
            "Intermediate-high risk for severe chemotherapy toxicity. Consider dose reduction, prophylactic measures, or alternative therapies.",
        ),
        _ => Interpretation::new(
            "High",
            "High risk",
            "High risk for severe chemotherapy toxicity. Strongly consider dose reduction, alternative less toxic regimens, or supportive care alone.",
        ),
    };

    let (heme_risk, heme_text) = hematologic_risk(hematologic);
    let (nonheme_risk, nonheme_text) = nonhematologic_risk(nonhematologic);

    Ok(CalculatorResponse::new(combined, "points", interpretation)
        .with("hematologic_score", hematologic)
        .with("nonhematologic_score", nonhematologic)
        .with(
            "subscores",
            json!({
                "hematologic": {"score": hematologic, "risk": heme_risk, "interpretation": heme_text},
                "nonhematologic": {"score": nonhematologic, "risk": nonheme_risk, "interpretation": nonheme_text},
            }),
        ))
}
