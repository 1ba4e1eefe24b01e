pub mod abcd2_score;
pub mod cerebral_perfusion_pressure;
pub mod edss;
pub mod embolic_stroke_undetermined_source_esus_criteria;
pub mod fisher_grade;
pub mod impact_score;
pub mod iwg2_alzheimer_criteria;
pub mod mcdonald_criteria_multiple_sclerosis_2017_revision;
pub mod moca;
pub mod modified_brain_injury_guideline;
pub mod modified_nih_stroke_scale;
pub mod modified_rankin_score_9q;
pub mod trunk_impairment_scale;
