mod hiv_labs;
pub mod covid_gram_critical_illness;
pub mod denver_hiv_risk_score;
pub mod indications_for_paxlovid;
pub mod vaco_index_covid19;
pub mod vacs_2_0_index;
pub mod vacs_cci;
