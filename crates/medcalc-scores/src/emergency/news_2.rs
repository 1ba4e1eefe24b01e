//! National Early Warning Score 2.
//!
//! SpO₂ is read against scale 1, or against scale 2 for patients with
//! hypercapnic respiratory failure. Both scales' bands are accepted on the
//! wire and translated onto the scale in use.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum RespiratoryRateBand {
        Le8 => "8_or_less",
        From9To11 => "9_to_11",
        From12To20 => "12_to_20",
        From21To24 => "21_to_24",
        Ge25 => "25_or_more",
    }
}

choice! {
    pub enum Spo2Band {
        Le91 => "91_or_less",
        From92To93 => "92_to_93",
        From94To95 => "94_to_95",
        Ge96 => "96_or_more",
        Le83 => "83_or_less",
        From84To85 => "84_to_85",
        From86To87 => "86_to_87",
        From88To92 => "88_to_92",
        From93To94 => "93_to_94",
        From95To96 => "95_to_96",
        Ge97 => "97_or_more",
    }
}

choice! {
    pub enum TemperatureBand {
        Le35 => "35_or_less",
        From35To36 => "35_1_to_36",
        From36To38 => "36_1_to_38",
        From38To39 => "38_1_to_39",
        Ge39 => "39_1_or_more",
    }
}

choice! {
    pub enum SystolicBand {
        Le90 => "90_or_less",
        From91To100 => "91_to_100",
        From101To110 => "101_to_110",
        From111To219 => "111_to_219",
        Ge220 => "220_or_more",
    }
}

choice! {
    pub enum HeartRateBand {
        Le40 => "40_or_less",
        From41To50 => "41_to_50",
        From51To90 => "51_to_90",
        From91To110 => "91_to_110",
        From111To130 => "111_to_130",
        Ge131 => "131_or_more",
    }
}

choice! {
    pub enum Consciousness {
        Alert => "alert",
        Altered => "altered",
    }
}

calculator_input! {
    pub struct News2Input {
        pub respiratory_rate: RespiratoryRateBand,
        pub hypercapnic_respiratory_failure: YesNo,
        pub oxygen_saturation: Spo2Band,
        pub supplemental_oxygen: YesNo,
        pub temperature: TemperatureBand,
        pub systolic_bp: SystolicBand,
        pub heart_rate: HeartRateBand,
        pub consciousness: Consciousness,
    }
}

fn spo2_points(band: Spo2Band, hypercapnic: bool, on_oxygen: bool) -> i64 {
    use Spo2Band::*;
    if hypercapnic {
        match band {
            Le83 | Le91 => 3,
            From84To85 => 2,
            From86To87 => 1,
            From88To92 | From92To93 => 0,
            From93To94 if on_oxygen => 1,
            From95To96 if on_oxygen => 2,
            Ge97 if on_oxygen => 3,
            // 93% and above on room air.
            _ => 0,
        }
    } else {
        match band {
            Le91 | Le83 | From84To85 | From86To87 => 3,
            From92To93 | From88To92 => 2,
            From94To95 | From93To94 => 1,
            Ge96 | Ge97 | From95To96 => 0,
        }
    }
}

pub fn calculate(input: &News2Input) -> CalcResult {
    let respiratory = match input.respiratory_rate {
        RespiratoryRateBand::Le8 | RespiratoryRateBand::Ge25 => 3,
        RespiratoryRateBand::From9To11 => 1,
        RespiratoryRateBand::From12To20 => 0,
        RespiratoryRateBand::From21To24 => 2,
    };
    let spo2 = spo2_points(
        input.oxygen_saturation,
        input.hypercapnic_respiratory_failure.is_yes(),
        input.supplemental_oxygen.is_yes(),
    );
    let oxygen = input.supplemental_oxygen.points(2);
    let temperature = match input.temperature {
        TemperatureBand::Le35 => 3,
        TemperatureBand::From35To36 | TemperatureBand::From38To39 => 1,
        TemperatureBand::From36To38 => 0,
        TemperatureBand::Ge39 => 2,
    };
    let systolic = match input.systolic_bp {
        SystolicBand::Le90 | SystolicBand::Ge220 => 3,
        SystolicBand::From91To100 => 2,
        SystolicBand::From101To110 => 1,
        SystolicBand::From111To219 => 0,
    };
    let heart_rate = match input.heart_rate {
        HeartRateBand::Le40 | HeartRateBand::Ge131 => 3,
        HeartRateBand::From41To50 | HeartRateBand::From91To110 => 1,
        HeartRateBand::From51To90 => 0,
        HeartRateBand::From111To130 => 2,
    };
    let consciousness = match input.consciousness {
        Consciousness::Alert => 0,
        Consciousness::Altered => 3,
    };

    let score = respiratory + spo2 + oxygen + temperature + systolic + heart_rate + consciousness;
    let red_score = [respiratory, spo2, temperature, systolic, heart_rate, consciousness].contains(&3);

    Ok(CalculatorResponse::new(score, "points", interpret(score, red_score))
        .with("red_score", red_score))
}

fn interpret(score: i64, red_score: bool) -> Interpretation {
    if red_score && score < 5 {
        return Interpretation::new(
            "Low-Medium Risk",
            "RED score - Individual parameter scoring 3",
            "Urgent review by ward-based doctor required. Minimum monitoring frequency every hour.",
        );
    }
    match score {
        0 => Interpretation::new(
            "Low Risk",
            "Very low early warning score",
            "Continue routine monitoring. Minimum monitoring frequency every 12 hours.",
        ),
        1..=4 => Interpretation::new(
            "Low Risk",
            "Low early warning score",
            "Assessment by competent registered nurse. Minimum monitoring frequency every 4-6 hours.",
        ),
        5..=6 => Interpretation::new(
            "Medium Risk",
            "Medium early warning score",
            "Urgent review by ward-based doctor or acute team nurse to decide if critical care team assessment needed.",
        ),
        _ => Interpretation::new(
            "High Risk",
            "High early warning score",
            "Emergent assessment by clinical team or critical care team. Continuous monitoring of vital signs. Usually requires transfer to higher level of care.",
        ),
    }
}
