//! Gail model: estimated 5-year invasive breast cancer risk.
//!
//! Simplified multiplicative form. An age-bracket baseline hazard is scaled
//! by the product of the reproductive, family, biopsy and ethnicity relative
//! risks. The absolute risk is capped at 50%.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum MenarcheAge {
        Unknown => "unknown",
        From7To11 => "7_to_11",
        From12To13 => "12_to_13",
        Over13 => "over_13",
    }
}

choice! {
    pub enum FirstBirthAge {
        Unknown => "unknown",
        NoBirths => "no_births",
        Under20 => "under_20",
        From20To24 => "20_to_24",
        From25To29 => "25_to_29",
        ThirtyOrOver => "30_or_over",
    }
}

choice! {
    /// Count bucket shared by affected relatives and previous biopsies.
    pub enum CountBucket {
        Unknown => "unknown",
        Zero => "0",
        One => "1",
        MoreThanOne => "more_than_1",
    }
}

choice! {
    pub enum AtypicalHyperplasia {
        Unknown => "unknown",
        No => "no",
        Yes => "yes",
    }
}

choice! {
    pub enum RaceEthnicity {
        White => "white",
        AfricanAmerican => "african_american",
        Hispanic => "hispanic",
        AsianAmerican => "asian_american",
        AmericanIndianAlaskanNative => "american_indian_alaskan_native",
        Unknown => "unknown",
    }
}

choice! {
    pub enum AsianSubrace {
        Chinese => "chinese",
        Japanese => "japanese",
        Filipino => "filipino",
        Hawaiian => "hawaiian",
        PacificIslander => "pacific_islander",
    }
}

calculator_input! {
    pub struct GailInput {
        pub age: i64 => 35..=85,
        pub age_at_menarche: MenarcheAge,
        pub age_at_first_birth: FirstBirthAge,
        pub relatives_with_breast_cancer: CountBucket,
        pub previous_biopsies: CountBucket,
        pub atypical_hyperplasia: AtypicalHyperplasia,
        pub race_ethnicity: RaceEthnicity,
        /// Only consulted for `asian_american`.
        pub asian_subrace: Option<AsianSubrace>,
    }
}

impl GailInput {

    fn relative_risk(&self) -> f64 {
        let menarche = match self.age_at_menarche {
            MenarcheAge::From7To11 => 1.21,
            MenarcheAge::From12To13 => 1.10,
            MenarcheAge::Over13 | MenarcheAge::Unknown => 1.00,
        };
        let first_birth = match self.age_at_first_birth {
            FirstBirthAge::NoBirths => 1.24,
            FirstBirthAge::Under20 => 1.00,
            FirstBirthAge::From20To24 => 1.10,
            FirstBirthAge::From25To29 => 1.25,
            FirstBirthAge::ThirtyOrOver => 1.62,
            FirstBirthAge::Unknown => 1.13,
        };
        let relatives = match self.relatives_with_breast_cancer {
            CountBucket::Zero => 1.00,
            CountBucket::One => 2.30,
            CountBucket::MoreThanOne => 4.30,
            CountBucket::Unknown => 1.15,
        };
        let biopsies = match self.previous_biopsies {
            CountBucket::Zero | CountBucket::Unknown => 1.00,
            CountBucket::One => 1.70,
            CountBucket::MoreThanOne => 2.88,
        };
        let had_biopsy = matches!(
            self.previous_biopsies,
            CountBucket::One | CountBucket::MoreThanOne
        );
        let hyperplasia = if had_biopsy && self.atypical_hyperplasia == AtypicalHyperplasia::Yes {
            4.17
        } else {
            1.00
        };
        let race = match self.race_ethnicity {
            RaceEthnicity::White | RaceEthnicity::Unknown => 1.00,
            RaceEthnicity::AfricanAmerican => 0.78,
            RaceEthnicity::Hispanic => 0.73,
            RaceEthnicity::AsianAmerican => 0.50,
            RaceEthnicity::AmericanIndianAlaskanNative => 0.85,
        };
        let subrace = match (self.race_ethnicity, self.asian_subrace) {
            (RaceEthnicity::AsianAmerican, Some(subrace)) => match subrace {
                AsianSubrace::Chinese => 0.9,
                AsianSubrace::Japanese | AsianSubrace::PacificIslander => 1.1,
                AsianSubrace::Filipino => 1.2,
                AsianSubrace::Hawaiian => 1.3,
            },
            _ => 1.0,
        };
        menarche * first_birth * relatives * biopsies * hyperplasia * race * subrace
    }
}

/// Annual baseline incidence by 5-year age bracket.
fn baseline_risk(age: i64) -> f64 {
    match age {
        ..=39 => 0.00088,
        40..=44 => 0.00152,
        45..=49 => 0.00231,
        50..=54 => 0.00262,
        55..=59 => 0.00346,
        60..=64 => 0.00412,
        65..=69 => 0.00453,
        70..=74 => 0.00455,
        75..=79 => 0.00433,
        _ => 0.00386,
    }
}

const CHEMOPREVENTION_THRESHOLD: f64 = 1.67;

pub fn calculate(input: &GailInput) -> CalcResult {
    let relative_risk = input.relative_risk();
    let five_year = (5.0 * baseline_risk(input.age) * relative_risk * 100.0).min(50.0);
    let risk = round_to(five_year, 2);

    let interpretation = if five_year < CHEMOPREVENTION_THRESHOLD {
        Interpretation::new(
            "Low Risk",
            "Low risk for breast cancer",
            format!(
                "5-year breast cancer risk of {risk}% is below the 1.67% threshold for chemoprevention consideration. Continue routine screening mammography according to guidelines. Discuss general risk reduction strategies including maintaining healthy weight, regular physical activity, limiting alcohol consumption, and avoiding unnecessary hormone therapy. Consider lifestyle modifications and routine surveillance."
            ),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High risk for breast cancer",
            format!(
                "5-year breast cancer risk of {risk}% meets or exceeds the 1.67% threshold. Consider discussing chemoprevention options (tamoxifen, raloxifene, or aromatase inhibitors) with patient after evaluating benefits and risks. Enhanced screening strategies may be appropriate including earlier screening initiation, shorter screening intervals, or consideration of breast MRI. Genetic counseling may be considered if family history is significant. Discuss risk-benefit ratio of preventive interventions."
            ),
        )
    };

    Ok(CalculatorResponse::new(risk, "percentage", interpretation)
        .with("relative_risk", round_to(relative_risk, 3)))
}
