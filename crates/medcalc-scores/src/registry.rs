//! Static registration table: score identifier → catalog metadata and
//! entry point.
//!
//! The set of calculators is fixed at build time. Dispatch parses the flat
//! JSON parameter object into the calculator's typed input, then runs it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use medcalc_core::{CalcError, CalcResult, FromParams, Params};

/// Clinical specialty a calculator is filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Specialty {
    Anesthesiology,
    Cardiology,
    Dermatology,
    Emergency,
    Endocrinology,
    Gastroenterology,
    General,
    Geriatrics,
    Gynecology,
    Hematology,
    InfectiousDisease,
    Nephrology,
    Neurology,
    Oncology,
    Ophthalmology,
    Pediatrics,
    Psychiatry,
    Pulmonology,
    Rheumatology,
}

impl Specialty {
    pub const ALL: [Specialty; 19] = [
        Specialty::Anesthesiology,
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Emergency,
        Specialty::Endocrinology,
        Specialty::Gastroenterology,
        Specialty::General,
        Specialty::Geriatrics,
        Specialty::Gynecology,
        Specialty::Hematology,
        Specialty::InfectiousDisease,
        Specialty::Nephrology,
        Specialty::Neurology,
        Specialty::Oncology,
        Specialty::Ophthalmology,
        Specialty::Pediatrics,
        Specialty::Psychiatry,
        Specialty::Pulmonology,
        Specialty::Rheumatology,
    ];

    /// Wire token, e.g. `"infectious_disease"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Specialty::Anesthesiology => "anesthesiology",
            Specialty::Cardiology => "cardiology",
            Specialty::Dermatology => "dermatology",
            Specialty::Emergency => "emergency",
            Specialty::Endocrinology => "endocrinology",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::General => "general",
            Specialty::Geriatrics => "geriatrics",
            Specialty::Gynecology => "gynecology",
            Specialty::Hematology => "hematology",
            Specialty::InfectiousDisease => "infectious_disease",
            Specialty::Nephrology => "nephrology",
            Specialty::Neurology => "neurology",
            Specialty::Oncology => "oncology",
            Specialty::Ophthalmology => "ophthalmology",
            Specialty::Pediatrics => "pediatrics",
            Specialty::Psychiatry => "psychiatry",
            Specialty::Pulmonology => "pulmonology",
            Specialty::Rheumatology => "rheumatology",
        }
    }

    /// Case-insensitive lookup by wire token.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog metadata for one calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreInfo {
    pub id: String,
    pub title: String,
    pub specialty: Specialty,
}

type Runner = fn(&Params<'_>) -> CalcResult;

struct Registration {
    id: &'static str,
    title: &'static str,
    specialty: Specialty,
    run: Runner,
}

impl Registration {
    fn info(&self) -> ScoreInfo {
        ScoreInfo {
            id: self.id.to_string(),
            title: self.title.to_string(),
            specialty: self.specialty,
        }
    }
}

fn run<I: FromParams>(params: &Params<'_>, calculate: fn(&I) -> CalcResult) -> CalcResult {
    let input = I::from_params(params)?;
    calculate(&input)
}

macro_rules! score {
    ($specialty:ident, $group:ident :: $module:ident, $title:literal) => {
        Registration {
            id: stringify!($module),
            title: $title,
            specialty: Specialty::$specialty,
            run: |params| run(params, crate::$group::$module::calculate),
        }
    };
}

static REGISTRY: &[Registration] = &[
    score!(Anesthesiology, anesthesiology::macocha_score, "MACOCHA Score"),
    score!(Cardiology, cardiology::acc_aha_hf_staging, "ACC/AHA Heart Failure Staging"),
    score!(Cardiology, cardiology::adhere_algorithm, "ADHERE Algorithm"),
    score!(Cardiology, cardiology::cha2ds2_va_score, "CHA₂DS₂-VA Score"),
    score!(Cardiology, cardiology::chads2_score, "CHADS₂ Score"),
    score!(Cardiology, cardiology::chads_65, "CCS CHADS-65 Algorithm"),
    score!(Cardiology, cardiology::crusade_bleeding_risk, "CRUSADE Bleeding Risk"),
    score!(
        Cardiology,
        cardiology::emergency_heart_failure_mortality_risk_grade_ehmrg,
        "Emergency Heart Failure Mortality Risk Grade (EHMRG)"
    ),
    score!(Cardiology, cardiology::euroscore_ii, "EuroSCORE II"),
    score!(Cardiology, cardiology::framingham_risk_score, "Framingham Risk Score"),
    score!(Cardiology, cardiology::garfield_af, "GARFIELD-AF Risk Tool"),
    score!(Cardiology, cardiology::grace_acs_risk, "GRACE ACS Risk Score"),
    score!(
        Cardiology,
        cardiology::gwtg_heart_failure_risk_score,
        "GWTG-Heart Failure Risk Score"
    ),
    score!(Cardiology, cardiology::ie_mortality_risk_score, "Infective Endocarditis Mortality Risk Score"),
    score!(Cardiology, cardiology::ldl_calculated, "LDL Calculated (Friedewald)"),
    score!(Cardiology, cardiology::maggic_risk_calculator, "MAGGIC Risk Calculator"),
    score!(Cardiology, cardiology::score2, "SCORE2"),
    score!(Dermatology, dermatology::eczema_area_severity_index, "Eczema Area and Severity Index (EASI)"),
    score!(Emergency, emergency::abc_score, "ABC Score for Massive Transfusion"),
    score!(Emergency, emergency::apache_ii_score, "APACHE II Score"),
    score!(Emergency, emergency::basic_statistics_calc, "Basic Statistics Calculator"),
    score!(Emergency, emergency::burch_wartofsky_point_scale, "Burch-Wartofsky Point Scale"),
    score!(Emergency, emergency::cam_icu, "CAM-ICU"),
    score!(Emergency, emergency::canadian_ct_head_rule, "Canadian CT Head Rule"),
    score!(Emergency, emergency::caprini_score_2005, "Caprini Score (2005)"),
    score!(Emergency, emergency::cedocs_score, "CEDOCS Score"),
    score!(Emergency, emergency::chip_prediction_rule, "CHIP Prediction Rule"),
    score!(Emergency, emergency::chosen_covid_discharge, "CHOSEN COVID-19 Discharge Score"),
    score!(
        Emergency,
        emergency::cincinnati_prehospital_stroke_severity_scale,
        "Cincinnati Prehospital Stroke Severity Scale"
    ),
    score!(Emergency, emergency::covid_inpatient_risk_calculator, "COVID-19 Inpatient Risk Calculator (CIRC)"),
    score!(Emergency, emergency::cpot_pain_observation, "Critical-Care Pain Observation Tool (CPOT)"),
    score!(Emergency, emergency::danger_assessment_tool, "Danger Assessment Tool"),
    score!(Emergency, emergency::estimated_ethanol_concentration, "Estimated Ethanol Concentration"),
    score!(Emergency, emergency::go_far_score, "GO-FAR Score"),
    score!(Emergency, emergency::gupta_mica, "Gupta Perioperative MICA Risk"),
    score!(
        Emergency,
        emergency::gupta_postoperative_pneumonia_risk,
        "Gupta Postoperative Pneumonia Risk"
    ),
    score!(
        Emergency,
        emergency::gupta_postoperative_respiratory_failure_risk,
        "Gupta Postoperative Respiratory Failure Risk"
    ),
    score!(
        Emergency,
        emergency::kings_college_criteria_acetaminophen,
        "King's College Criteria for Acetaminophen Toxicity"
    ),
    score!(Emergency, emergency::lrinec_score, "LRINEC Score"),
    score!(Emergency, emergency::lung_injury_prediction_score, "Lung Injury Prediction Score (LIPS)"),
    score!(Emergency, emergency::mangled_extremity_severity_score, "Mangled Extremity Severity Score (MESS)"),
    score!(Emergency, emergency::mrc_icu_score, "MRC-ICU Score"),
    score!(Emergency, emergency::news_2, "National Early Warning Score 2 (NEWS2)"),
    score!(Emergency, emergency::psi_port_score, "PSI/PORT Score"),
    score!(Emergency, emergency::rems_score, "Rapid Emergency Medicine Score (REMS)"),
    score!(Emergency, emergency::rule_of_nines, "Rule of Nines"),
    score!(Emergency, emergency::utah_covid19_risk_score, "Utah COVID-19 Risk Score"),
    score!(
        Emergency,
        emergency::wisconsin_criteria_maxillofacial_trauma,
        "Wisconsin Criteria for Maxillofacial Trauma CT"
    ),
    score!(Emergency, emergency::woman_abuse_screening_tool, "Woman Abuse Screening Tool (WAST)"),
    score!(Endocrinology, endocrinology::diabetes_distress_scale, "Diabetes Distress Scale (DDS17)"),
    score!(Endocrinology, endocrinology::dka_mpm_score, "DKA Mortality Prediction Model"),
    score!(
        Endocrinology,
        endocrinology::idf_dar_fasting_risk_assessment,
        "IDF-DAR Fasting Risk Assessment"
    ),
    score!(Endocrinology, endocrinology::myxedema_coma_diagnostic_score, "Myxedema Coma Diagnostic Score"),
    score!(Gastroenterology, gastroenterology::apri, "AST to Platelet Ratio Index (APRI)"),
    score!(Gastroenterology, gastroenterology::bisap_score, "BISAP Score"),
    score!(Gastroenterology, gastroenterology::cdai_crohns, "Crohn's Disease Activity Index (CDAI)"),
    score!(Gastroenterology, gastroenterology::child_pugh_score, "Child-Pugh Score"),
    score!(Gastroenterology, gastroenterology::choles_score, "CholeS Score"),
    score!(Gastroenterology, gastroenterology::clif_c_aclf, "CLIF-C ACLF Score"),
    score!(Gastroenterology, gastroenterology::fatty_liver_index, "Fatty Liver Index"),
    score!(Gastroenterology, gastroenterology::fib_4, "FIB-4 Index"),
    score!(
        Gastroenterology,
        gastroenterology::glasgow_blatchford_bleeding_score,
        "Glasgow-Blatchford Bleeding Score"
    ),
    score!(
        Gastroenterology,
        gastroenterology::glasgow_imrie_pancreatitis,
        "Glasgow-Imrie Criteria for Pancreatitis"
    ),
    score!(Gastroenterology, gastroenterology::i_see_score, "I-SEE Score"),
    score!(Gastroenterology, gastroenterology::kruis_score_ibs, "Kruis Score for IBS"),
    score!(Gastroenterology, gastroenterology::manning_criteria_ibs, "Manning Criteria for IBS"),
    score!(Gastroenterology, gastroenterology::meld_combined, "MELD Score (MELD, MELD-Na, MELD 3.0)"),
    score!(
        Gastroenterology,
        gastroenterology::montreal_classification_ibd,
        "Montreal Classification for IBD"
    ),
    score!(Gastroenterology, gastroenterology::mumtaz_score, "Mumtaz Score"),
    score!(
        Gastroenterology,
        gastroenterology::rome_iv_proctalgia_fugax,
        "Rome IV Criteria for Proctalgia Fugax"
    ),
    score!(
        Gastroenterology,
        gastroenterology::rome_iv_rumination_syndrome,
        "Rome IV Criteria for Rumination Syndrome"
    ),
    score!(
        Gastroenterology,
        gastroenterology::rome_iv_unspecified_functional_bowel_disorder,
        "Rome IV Criteria for Unspecified Functional Bowel Disorder"
    ),
    score!(Gastroenterology, gastroenterology::wexner_score_ods, "Wexner Score"),
    score!(General, general::mme_calculator, "Morphine Milligram Equivalents (MME)"),
    score!(
        General,
        general::visual_acuity_testing_snellen_chart,
        "Visual Acuity Testing (Snellen Chart)"
    ),
    score!(General, general::wound_closure_classification, "Wound Closure Classification"),
    score!(Geriatrics, geriatrics::charlson_comorbidity_index, "Charlson Comorbidity Index"),
    score!(Geriatrics, geriatrics::cirs_g, "Cumulative Illness Rating Scale - Geriatric (CIRS-G)"),
    score!(Geriatrics, geriatrics::clinical_frailty_scale, "Clinical Frailty Scale"),
    score!(Gynecology, gynecology::fetal_bpp, "Fetal Biophysical Profile"),
    score!(Hematology, hematology::cryoprecipitate_dosing, "Cryoprecipitate Dosing"),
    score!(Hematology, hematology::dash_prediction_score, "DASH Prediction Score"),
    score!(Hematology, hematology::gelf_criteria, "GELF Criteria for Follicular Lymphoma"),
    score!(Hematology, hematology::geneva_vte_prophylaxis, "Geneva Risk Score for VTE Prophylaxis"),
    score!(Hematology, hematology::gipss_primary_myelofibrosis, "GIPSS for Primary Myelofibrosis"),
    score!(
        Hematology,
        hematology::icc_pmf_diagnostic_criteria,
        "ICC Diagnostic Criteria for Primary Myelofibrosis"
    ),
    score!(Hematology, hematology::impede_vte, "IMPEDE VTE Score"),
    score!(
        Hematology,
        hematology::isth_scc_bleeding_assessment_tool,
        "ISTH-SCC Bleeding Assessment Tool"
    ),
    score!(
        Hematology,
        hematology::mantle_cell_lymphoma_international_prognostic_index,
        "Mantle Cell Lymphoma International Prognostic Index (MIPI)"
    ),
    score!(
        Hematology,
        hematology::mascc_risk_index_febrile_neutropenia,
        "MASCC Risk Index for Febrile Neutropenia"
    ),
    score!(
        Hematology,
        hematology::maternal_fetal_hemorrhage_rhd_immune_globulin_dosage,
        "Maternal-Fetal Hemorrhage Rh(D) Immune Globulin Dosage"
    ),
    score!(
        Hematology,
        hematology::maximum_allowable_blood_loss_without_transfusion,
        "Maximum Allowable Blood Loss Without Transfusion"
    ),
    score!(
        Hematology,
        hematology::mayo_alliance_prognostic_system_maps_score,
        "Mayo Alliance Prognostic System (MAPS)"
    ),
    score!(Hematology, hematology::mipss70, "MIPSS70 / MIPSS70+"),
    score!(
        Hematology,
        hematology::multiple_myeloma_diagnostic_criteria,
        "Multiple Myeloma Diagnostic Criteria (IMWG)"
    ),
    score!(
        Hematology,
        hematology::multiple_myeloma_response_criteria,
        "Multiple Myeloma Response Criteria (IMWG)"
    ),
    score!(Hematology, hematology::reticulocyte_production_index, "Reticulocyte Production Index"),
    score!(Hematology, hematology::vte_bleed_score, "VTE-BLEED Score"),
    score!(
        Hematology,
        hematology::who_polycythemia_vera_criteria,
        "WHO Criteria for Polycythemia Vera"
    ),
    score!(
        Hematology,
        hematology::who_systemic_mastocytosis_criteria,
        "WHO Criteria for Systemic Mastocytosis"
    ),
    score!(Hematology, hematology::wpss_mds, "WPSS for Myelodysplastic Syndromes"),
    score!(
        InfectiousDisease,
        infectious_disease::covid_gram_critical_illness,
        "COVID-GRAM Critical Illness Risk Score"
    ),
    score!(InfectiousDisease, infectious_disease::denver_hiv_risk_score, "Denver HIV Risk Score"),
    score!(
        InfectiousDisease,
        infectious_disease::indications_for_paxlovid,
        "Indications for Paxlovid"
    ),
    score!(InfectiousDisease, infectious_disease::vaco_index_covid19, "VACO Index COVID-19 Mortality Risk"),
    score!(InfectiousDisease, infectious_disease::vacs_2_0_index, "VACS 2.0 Index"),
    score!(InfectiousDisease, infectious_disease::vacs_cci, "VACS-CCI Index"),
    score!(Nephrology, nephrology::akin, "AKIN Classification"),
    score!(Nephrology, nephrology::body_fluid_balance, "Body Fluid Balance"),
    score!(
        Nephrology,
        nephrology::ckd_prediction_hiv_patients,
        "CKD Prediction in HIV-Positive Patients"
    ),
    score!(Nephrology, nephrology::ckid_u25_egfr, "CKiD U25 eGFR"),
    score!(
        Nephrology,
        nephrology::international_igan_prediction_tool,
        "International IgA Nephropathy Prediction Tool"
    ),
    score!(Nephrology, nephrology::kinetic_egfr, "Kinetic eGFR"),
    score!(Nephrology, nephrology::ktv_dialysis_adequacy, "Kt/V Dialysis Adequacy"),
    score!(Neurology, neurology::abcd2_score, "ABCD² Score"),
    score!(Neurology, neurology::cerebral_perfusion_pressure, "Cerebral Perfusion Pressure"),
    score!(Neurology, neurology::edss, "Expanded Disability Status Scale (EDSS)"),
    score!(
        Neurology,
        neurology::embolic_stroke_undetermined_source_esus_criteria,
        "ESUS Criteria"
    ),
    score!(Neurology, neurology::fisher_grade, "Fisher Grade"),
    score!(Neurology, neurology::impact_score, "IMPACT Score"),
    score!(Neurology, neurology::iwg2_alzheimer_criteria, "IWG-2 Criteria for Alzheimer's Disease"),
    score!(
        Neurology,
        neurology::mcdonald_criteria_multiple_sclerosis_2017_revision,
        "McDonald Criteria for Multiple Sclerosis (2017)"
    ),
    score!(Neurology, neurology::moca, "Montreal Cognitive Assessment (MoCA)"),
    score!(Neurology, neurology::modified_brain_injury_guideline, "Modified Brain Injury Guideline (mBIG)"),
    score!(Neurology, neurology::modified_nih_stroke_scale, "Modified NIH Stroke Scale"),
    score!(Neurology, neurology::modified_rankin_score_9q, "Modified Rankin Scale 9-Question (mRS-9Q)"),
    score!(Neurology, neurology::trunk_impairment_scale, "Trunk Impairment Scale"),
    score!(Oncology, oncology::crash_score, "CRASH Score"),
    score!(Oncology, oncology::crs_grading, "Cytokine Release Syndrome Grading"),
    score!(Oncology, oncology::ctcae, "CTCAE Hematologic Grading"),
    score!(Oncology, oncology::damico_risk_classification, "D'Amico Risk Classification"),
    score!(Oncology, oncology::gail_model_breast_cancer_risk, "Gail Model Breast Cancer Risk"),
    score!(Oncology, oncology::gi_gpa, "GI Graded Prognostic Assessment (GI-GPA)"),
    score!(Oncology, oncology::gleason_score_prostate, "Gleason Score"),
    score!(Oncology, oncology::leibovich_2018_rcc, "Leibovich 2018 RCC Model"),
    score!(Oncology, oncology::lent_prognostic_score, "LENT Prognostic Score"),
    score!(
        Oncology,
        oncology::manchester_score_prognosis_sclc,
        "Manchester Score for Small Cell Lung Cancer"
    ),
    score!(Oncology, oncology::psa_doubling_time_calculator, "PSA Doubling Time"),
    score!(Ophthalmology, ophthalmology::color_vision_screening, "Color Vision Screening (Ishihara)"),
    score!(Pediatrics, pediatrics::brue, "BRUE Criteria"),
    score!(Pediatrics, pediatrics::brue_2_0, "BRUE 2.0 Risk"),
    score!(Pediatrics, pediatrics::capd, "Cornell Assessment of Pediatric Delirium (CAPD)"),
    score!(Pediatrics, pediatrics::cheops_pain_scale, "CHEOPS Pain Scale"),
    score!(Pediatrics, pediatrics::dhaka_score, "DHAKA Score"),
    score!(Pediatrics, pediatrics::glucose_infusion_rate, "Glucose Infusion Rate"),
    score!(Pediatrics, pediatrics::phoenix_sepsis_score, "Phoenix Sepsis Score"),
    score!(
        Pediatrics,
        pediatrics::wat_1_pediatric_withdrawal,
        "Withdrawal Assessment Tool (WAT-1)"
    ),
    score!(
        Psychiatry,
        psychiatry::bush_francis_catatonia_rating_scale,
        "Bush-Francis Catatonia Rating Scale"
    ),
    score!(Psychiatry, psychiatry::cas, "Coronavirus Anxiety Scale (CAS)"),
    score!(Psychiatry, psychiatry::ciwa_ar_alcohol_withdrawal, "CIWA-Ar for Alcohol Withdrawal"),
    score!(Psychiatry, psychiatry::comm, "Current Opioid Misuse Measure (COMM)"),
    score!(Psychiatry, psychiatry::cows_opiate_withdrawal, "Clinical Opiate Withdrawal Scale (COWS)"),
    score!(
        Psychiatry,
        psychiatry::edinburgh_postnatal_depression_scale,
        "Edinburgh Postnatal Depression Scale (EPDS)"
    ),
    score!(Psychiatry, psychiatry::embed, "EMBED for ED-Initiated Buprenorphine"),
    score!(Psychiatry, psychiatry::gds_15, "Geriatric Depression Scale (GDS-15)"),
    score!(Psychiatry, psychiatry::major_depression_index, "Major Depression Inventory (MDI)"),
    score!(Psychiatry, psychiatry::qids_sr16, "QIDS-SR16"),
    score!(Pulmonology, pulmonology::abg_analyzer, "Arterial Blood Gas Analyzer"),
    score!(Pulmonology, pulmonology::curb_65, "CURB-65"),
    score!(Pulmonology, pulmonology::decaf_score, "DECAF Score"),
    score!(
        Pulmonology,
        pulmonology::expected_peak_expiratory_flow,
        "Expected Peak Expiratory Flow"
    ),
    score!(Pulmonology, pulmonology::gold_copd_criteria, "GOLD COPD Criteria"),
    score!(
        Pulmonology,
        pulmonology::winters_formula_metabolic_acidosis,
        "Winters' Formula for Metabolic Acidosis"
    ),
    score!(Rheumatology, rheumatology::acr_eular_gout, "ACR/EULAR Gout Classification Criteria"),
    score!(
        Rheumatology,
        rheumatology::cdai_rheumatoid_arthritis,
        "Clinical Disease Activity Index (CDAI) for RA"
    ),
    score!(
        Rheumatology,
        rheumatology::leiden_clinical_prediction_rule,
        "Leiden Clinical Prediction Rule"
    ),
];

fn lookup(id: &str) -> Option<&'static Registration> {
    REGISTRY.iter().find(|r| r.id == id)
}

/// Every registered calculator in registration order.
pub fn all() -> Vec<ScoreInfo> {
    REGISTRY.iter().map(Registration::info).collect()
}

pub fn find(id: &str) -> Option<ScoreInfo> {
    lookup(id).map(Registration::info)
}

pub fn by_specialty(specialty: Specialty) -> Vec<ScoreInfo> {
    REGISTRY
        .iter()
        .filter(|r| r.specialty == specialty)
        .map(Registration::info)
        .collect()
}

/// Case-insensitive substring match on identifier or title.
pub fn search(term: &str) -> Vec<ScoreInfo> {
    let needle = term.trim().to_lowercase();
    REGISTRY
        .iter()
        .filter(|r| r.id.contains(&needle) || r.title.to_lowercase().contains(&needle))
        .map(Registration::info)
        .collect()
}

/// Specialties with at least one registered calculator, sorted.
pub fn specialties() -> Vec<Specialty> {
    let mut out: Vec<Specialty> = REGISTRY.iter().map(|r| r.specialty).collect();
    out.sort();
    out.dedup();
    out
}

/// Parse `params` for calculator `id` and run it.
pub fn calculate(id: &str, params: &Map<String, Value>) -> CalcResult {
    let registration = lookup(id).ok_or_else(|| CalcError::UnknownScore(id.to_string()))?;
    tracing::debug!(score_id = id, "dispatching calculation");

    let result = (registration.run)(&Params::new(params));
    if let Err(e) = &result {
        tracing::warn!(score_id = id, error = %e, "calculation rejected");
    }
    result
}
