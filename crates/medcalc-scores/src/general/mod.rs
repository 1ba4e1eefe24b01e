pub mod mme_calculator;
pub mod visual_acuity_testing_snellen_chart;
pub mod wound_closure_classification;
