//! IWG-2 research criteria for Alzheimer's disease.
//!
//! A symptomatic diagnosis needs both the clinical phenotype and at least
//! one pathophysiological biomarker.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum ClinicalPhenotype {
        TypicalAd => "typical_ad",
        AtypicalAd => "atypical_ad",
        MixedAd => "mixed_ad",
        Asymptomatic => "asymptomatic",
    }
}

choice! {
    pub enum Presence {
        Present => "present",
        Absent => "absent",
    }
}

choice! {
    pub enum CognitiveDomains {
        SingleDomain => "single_domain",
        MultipleDomains => "multiple_domains",
    }
}

choice! {
    pub enum CsfAmyloidBeta {
        Normal => "normal",
        Decreased => "decreased",
        NotAvailable => "not_available",
    }
}

choice! {
    pub enum CsfTau {
        Normal => "normal",
        Elevated => "elevated",
        NotAvailable => "not_available",
    }
}

choice! {
    pub enum AmyloidPet {
        Negative => "negative",
        Positive => "positive",
        NotAvailable => "not_available",
    }
}

choice! {
    pub enum FunctionalDecline {
        Present => "present",
        Absent => "absent",
        Mild => "mild",
    }
}

calculator_input! {
    pub struct Iwg2Input {
        pub clinical_phenotype: ClinicalPhenotype,
        pub memory_impairment: Presence,
        pub cognitive_domains_affected: CognitiveDomains,
        pub csf_amyloid_beta: CsfAmyloidBeta,
        pub csf_tau: CsfTau,
        pub csf_ptau: CsfTau,
        pub amyloid_pet: AmyloidPet,
        pub functional_decline: FunctionalDecline,
    }
}

impl Iwg2Input {
    fn biomarker_positive(&self) -> bool {
        self.csf_amyloid_beta == CsfAmyloidBeta::Decreased
            || self.csf_tau == CsfTau::Elevated
            || self.csf_ptau == CsfTau::Elevated
            || self.amyloid_pet == AmyloidPet::Positive
    }

    fn clinical_criteria_met(&self) -> bool {
        let declining = self.functional_decline != FunctionalDecline::Absent;
        match self.clinical_phenotype {
            ClinicalPhenotype::TypicalAd => self.memory_impairment == Presence::Present && declining,
            ClinicalPhenotype::AtypicalAd | ClinicalPhenotype::MixedAd => {
                self.cognitive_domains_affected == CognitiveDomains::MultipleDomains && declining
            }
            ClinicalPhenotype::Asymptomatic => false,
        }
    }
}

pub fn calculate(input: &Iwg2Input) -> CalcResult {
    let biomarkers = input.biomarker_positive();
    let diagnosis = match input.clinical_phenotype {
        ClinicalPhenotype::Asymptomatic if biomarkers => "asymptomatic_at_risk",
        ClinicalPhenotype::Asymptomatic => "insufficient_criteria",
        phenotype if biomarkers && input.clinical_criteria_met() => match phenotype {
            ClinicalPhenotype::TypicalAd => "typical_ad",
            ClinicalPhenotype::AtypicalAd => "atypical_ad",
            _ => "mixed_ad",
        },
        _ => "insufficient_criteria",
    };

    let (stage, description, text) = match diagnosis {
        "typical_ad" => (
            "Typical AD",
            "Meets criteria for typical Alzheimer's disease",
            "Diagnosis of typical Alzheimer's disease confirmed. Clinical phenotype shows characteristic episodic memory impairment with pathophysiological biomarker evidence. Recommend standard AD treatment protocols, monitoring for disease progression, and consideration for appropriate clinical trials. Discuss prognosis and long-term care planning with patient and family.",
        ),
        "atypical_ad" => (
            "Atypical AD",
            "Meets criteria for atypical Alzheimer's disease",
            "Diagnosis of atypical Alzheimer's disease confirmed. Non-amnestic presentation with pathophysiological biomarker evidence of AD pathology. Consider specialized management for atypical presentations. Monitor for progression and adapt treatment strategies accordingly. Clinical trial enrollment may be appropriate.",
        ),
        "mixed_ad" => (
            "Mixed AD",
            "Meets criteria for mixed Alzheimer's disease",
            "Diagnosis of mixed Alzheimer's disease confirmed. AD pathology coexisting with other neurodegenerative processes. Comprehensive management addressing multiple pathologies may be needed. Consider interdisciplinary approach and targeted interventions for mixed presentations.",
        ),
        "asymptomatic_at_risk" => (
            "Asymptomatic at Risk",
            "Asymptomatic at risk for Alzheimer's disease",
            "Positive amyloid biomarkers in cognitively normal individual. Increased lifetime risk of developing symptomatic AD. Consider enrollment in prevention trials. Regular cognitive monitoring recommended. Lifestyle interventions and risk factor management may be beneficial.",
        ),
        _ => (
            "Insufficient Criteria",
            "Does not meet IWG-2 criteria for AD diagnosis",
            "Insufficient evidence to diagnose AD by IWG-2 criteria. Either clinical phenotype or pathophysiological biomarkers do not support AD diagnosis. Consider alternative diagnoses, additional testing, or monitoring for development of diagnostic criteria over time.",
        ),
    };

    Ok(CalculatorResponse::new(diagnosis, "diagnosis", Interpretation::new(stage, description, text)))
}
