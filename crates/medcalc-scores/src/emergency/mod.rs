mod gupta;
pub mod abc_score;
pub mod apache_ii_score;
pub mod basic_statistics_calc;
pub mod burch_wartofsky_point_scale;
pub mod cam_icu;
pub mod canadian_ct_head_rule;
pub mod caprini_score_2005;
pub mod cedocs_score;
pub mod chip_prediction_rule;
pub mod chosen_covid_discharge;
pub mod cincinnati_prehospital_stroke_severity_scale;
pub mod covid_inpatient_risk_calculator;
pub mod cpot_pain_observation;
pub mod danger_assessment_tool;
pub mod estimated_ethanol_concentration;
pub mod go_far_score;
pub mod gupta_mica;
pub mod gupta_postoperative_pneumonia_risk;
pub mod gupta_postoperative_respiratory_failure_risk;
pub mod kings_college_criteria_acetaminophen;
pub mod lrinec_score;
pub mod lung_injury_prediction_score;
pub mod mangled_extremity_severity_score;
pub mod mrc_icu_score;
pub mod news_2;
pub mod psi_port_score;
pub mod rems_score;
pub mod rule_of_nines;
pub mod utah_covid19_risk_score;
pub mod wisconsin_criteria_maxillofacial_trauma;
pub mod woman_abuse_screening_tool;
