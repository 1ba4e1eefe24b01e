pub mod apri;
pub mod bisap_score;
pub mod cdai_crohns;
pub mod child_pugh_score;
pub mod choles_score;
pub mod clif_c_aclf;
pub mod fatty_liver_index;
pub mod fib_4;
pub mod glasgow_blatchford_bleeding_score;
pub mod glasgow_imrie_pancreatitis;
pub mod i_see_score;
pub mod kruis_score_ibs;
pub mod manning_criteria_ibs;
pub mod meld_combined;
pub mod montreal_classification_ibd;
pub mod mumtaz_score;
pub mod rome_iv_proctalgia_fugax;
pub mod rome_iv_rumination_syndrome;
pub mod rome_iv_unspecified_functional_bowel_disorder;
pub mod wexner_score_ods;
