//! Montreal classification of Crohn's disease and ulcerative colitis.
//!
//! Produces a categorical code such as `A2L3B2p` or `A3E2S1`.

use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum DiseaseType {
        CrohnsDisease => "crohns_disease",
        UlcerativeColitis => "ulcerative_colitis",
    }
}

choice! {
    pub enum CrohnsLocation {
        Ileal => "L1_ileal",
        Colonic => "L2_colonic",
        Ileocolonic => "L3_ileocolonic",
        UpperGi => "L4_upper_gi",
    }
}

choice! {
    pub enum CrohnsBehavior {
        Inflammatory => "B1_inflammatory",
        Stricturing => "B2_stricturing",
        Penetrating => "B3_penetrating",
    }
}

choice! {
    pub enum UcExtent {
        Proctitis => "E1_proctitis",
        LeftSided => "E2_left_sided",
        Extensive => "E3_extensive",
    }
}

choice! {
    pub enum UcSeverity {
        Remission => "S0_remission",
        Mild => "S1_mild",
        Moderate => "S2_moderate",
        Severe => "S3_severe",
    }
}

calculator_input! {
    pub struct MontrealInput {
        pub disease_type: DiseaseType,
        pub age_at_diagnosis: i64 => 0..=120,
        pub crohns_location: Option<CrohnsLocation>,
        pub crohns_behavior: Option<CrohnsBehavior>,
        pub perianal_disease: Option<YesNo>,
        pub uc_extent: Option<UcExtent>,
        pub uc_severity: Option<UcSeverity>,
    }
}

fn age_class(age: i64) -> (&'static str, &'static str) {
    match age {
        ..=16 => ("A1", "Pediatric onset (<17 years)"),
        17..=40 => ("A2", "Young adult onset (17-40 years)"),
        _ => ("A3", "Older adult onset (>40 years)"),
    }
}

impl CrohnsLocation {
    fn code(self) -> &'static str {
        match self {
            CrohnsLocation::Ileal => "L1",
            CrohnsLocation::Colonic => "L2",
            CrohnsLocation::Ileocolonic => "L3",
            CrohnsLocation::UpperGi => "L4",
        }
    }

    fn description(self) -> &'static str {
        match self {
            CrohnsLocation::Ileal => "Ileal (terminal ileum ± cecum)",
            CrohnsLocation::Colonic => "Colonic (any colonic location between cecum and rectum)",
            CrohnsLocation::Ileocolonic => "Ileocolonic (terminal ileum + any colonic location)",
            CrohnsLocation::UpperGi => "Upper gastrointestinal (proximal to terminal ileum)",
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            CrohnsLocation::Ileal => "Ileal disease may require surveillance for small bowel complications. Consider nutritional assessment.",
            CrohnsLocation::Colonic => "Colonic disease may present with bloody diarrhea. Colonoscopic surveillance recommended.",
            CrohnsLocation::Ileocolonic => "Ileocolonic disease has highest risk for surgical complications. Close monitoring needed.",
            CrohnsLocation::UpperGi => "Upper GI involvement may cause growth retardation in pediatric patients. Nutritional support important.",
        }
    }
}

impl CrohnsBehavior {
    fn code(self) -> &'static str {
        match self {
            CrohnsBehavior::Inflammatory => "B1",
            CrohnsBehavior::Stricturing => "B2",
            CrohnsBehavior::Penetrating => "B3",
        }
    }

    fn description(self) -> &'static str {
        match self {
            CrohnsBehavior::Inflammatory => "Inflammatory (non-stricturing, non-penetrating)",
            CrohnsBehavior::Stricturing => "Stricturing (intestinal stenosis)",
            CrohnsBehavior::Penetrating => "Penetrating (fistula, abscess, perforation)",
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            CrohnsBehavior::Inflammatory => "Inflammatory behavior may respond well to medical therapy. Monitor for disease progression.",
            CrohnsBehavior::Stricturing => "Stricturing behavior may require endoscopic or surgical intervention. Assess for obstruction.",
            CrohnsBehavior::Penetrating => "Penetrating behavior requires aggressive management. Screen for abscesses and fistulas.",
        }
    }
}

impl UcExtent {
    fn code(self) -> &'static str {
        match self {
            UcExtent::Proctitis => "E1",
            UcExtent::LeftSided => "E2",
            UcExtent::Extensive => "E3",
        }
    }

    fn description(self) -> &'static str {
        match self {
            UcExtent::Proctitis => "Proctitis (rectum only)",
            UcExtent::LeftSided => "Left-sided colitis (distal to splenic flexure)",
            UcExtent::Extensive => "Extensive colitis (proximal to splenic flexure)",
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            UcExtent::Proctitis => "Proctitis has excellent prognosis with topical therapy often sufficient. Low cancer risk.",
            UcExtent::LeftSided => "Left-sided colitis may require combination oral and topical therapy. Moderate cancer risk after 15-20 years.",
            UcExtent::Extensive => "Extensive colitis requires systemic therapy. Highest cancer risk - surveillance colonoscopy recommended.",
        }
    }
}

impl UcSeverity {
    fn code(self) -> &'static str {
        match self {
            UcSeverity::Remission => "S0",
            UcSeverity::Mild => "S1",
            UcSeverity::Moderate => "S2",
            UcSeverity::Severe => "S3",
        }
    }

    fn description(self) -> &'static str {
        match self {
            UcSeverity::Remission => "Clinical remission",
            UcSeverity::Mild => "Mild activity",
            UcSeverity::Moderate => "Moderate activity",
            UcSeverity::Severe => "Severe activity",
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            UcSeverity::Remission => "Clinical remission - maintain with appropriate therapy and monitor for relapse.",
            UcSeverity::Mild => "Mild activity may respond to topical or mild systemic therapy. Monitor closely.",
            UcSeverity::Moderate => "Moderate activity requires systemic therapy. Consider hospitalization if poor response.",
            UcSeverity::Severe => "Severe activity requires hospitalization and intensive medical therapy. Consider surgery if refractory.",
        }
    }
}

fn missing(message: &str) -> CalcError {
    CalcError::constraint(message)
}

pub fn calculate(input: &MontrealInput) -> CalcResult {
    let (age_code, age_desc) = age_class(input.age_at_diagnosis);

    match input.disease_type {
        DiseaseType::CrohnsDisease => {
            let (Some(location), Some(behavior)) = (input.crohns_location, input.crohns_behavior)
            else {
                return Err(missing("Crohn's disease requires location and behavior parameters"));
            };
            let perianal = input.perianal_disease.is_some_and(YesNo::is_yes);
            let suffix = if perianal { "p" } else { "" };
            let code = format!("{age_code}{}{}{suffix}", location.code(), behavior.code());

            let mut text = format!(
                "Montreal Classification {}{}{suffix}. {} {}",
                location.code(),
                behavior.code(),
                location.guidance(),
                behavior.guidance()
            );
            if perianal {
                text.push_str(" Perianal disease modifier indicates need for specialized management and MRI assessment.");
            }
            text.push_str(" This classification helps predict disease course and guide therapeutic decisions.");

            let perianal_text = if perianal { " with perianal disease" } else { "" };
            let description = format!(
                "Crohn's Disease: {age_desc}, {}, {}{perianal_text}",
                location.description(),
                behavior.description()
            );
            Ok(CalculatorResponse::new(
                code,
                "Montreal Classification",
                Interpretation::new("Crohn's Disease Classification", description, text),
            ))
        }
        DiseaseType::UlcerativeColitis => {
            let (Some(extent), Some(severity)) = (input.uc_extent, input.uc_severity) else {
                return Err(missing("Ulcerative colitis requires extent and severity parameters"));
            };
            let code = format!("{age_code}{}{}", extent.code(), severity.code());
            let text = format!(
                "Montreal Classification {}{}. {} {} This classification guides treatment intensity and surveillance strategies.",
                extent.code(),
                severity.code(),
                extent.guidance(),
                severity.guidance()
            );
            let description = format!(
                "Ulcerative Colitis: {age_desc}, {}, {}",
                extent.description(),
                severity.description()
            );
            Ok(CalculatorResponse::new(
                code,
                "Montreal Classification",
                Interpretation::new("Ulcerative Colitis Classification", description, text),
            ))
        }
    }
}
