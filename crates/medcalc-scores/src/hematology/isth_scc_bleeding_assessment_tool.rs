//! ISTH-SCC Bleeding Assessment Tool (ISTH-BAT).
//!
//! Thirteen bleeding domains scored 0-4 plus CNS bleeding; abnormal cutoffs
//! depend on the age group (child ≥3, adult male ≥4, adult female ≥6).

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex};

choice! {
    pub enum CnsBleeding {
        Never => "never",
        Subdural => "subdural",
        Intracerebral => "intracerebral",
    }
}

choice! {
    pub enum AgeGroup {
        Child => "child",
        AdultMale => "adult_male",
        AdultFemale => "adult_female",
    }
}

calculator_input! {
    pub struct IsthBatInput {
        pub epistaxis: i64 => 0..=4,
        pub cutaneous_bleeding: i64 => 0..=4,
        pub minor_wounds: i64 => 0..=4,
        pub oral_cavity: i64 => 0..=4,
        pub gi_bleeding: i64 => 0..=4,
        pub hematuria: i64 => 0..=4,
        pub tooth_extraction: i64 => 0..=4,
        pub surgery: i64 => 0..=4,
        pub menorrhagia: i64 => 0..=4,
        pub postpartum_hemorrhage: i64 => 0..=4,
        pub muscle_hematomas: i64 => 0..=4,
        pub hemarthrosis: i64 => 0..=4,
        pub cns_bleeding: CnsBleeding,
        pub other_bleeding: i64 => 0..=4,
        pub age_group: AgeGroup,
        pub gender: Sex,
    }
}

impl IsthBatInput {
    fn domains(&self) -> [(&'static str, i64); 13] {
        [
            ("epistaxis", self.epistaxis),
            ("cutaneous_bleeding", self.cutaneous_bleeding),
            ("minor_wounds", self.minor_wounds),
            ("oral_cavity", self.oral_cavity),
            ("gi_bleeding", self.gi_bleeding),
            ("hematuria", self.hematuria),
            ("tooth_extraction", self.tooth_extraction),
            ("surgery", self.surgery),
            ("menorrhagia", self.menorrhagia),
            ("postpartum_hemorrhage", self.postpartum_hemorrhage),
            ("muscle_hematomas", self.muscle_hematomas),
            ("hemarthrosis", self.hemarthrosis),
            ("other_bleeding", self.other_bleeding),
        ]
    }
}

impl AgeGroup {
    /// Highest score still considered typical.
    fn typical_max(self) -> i64 {
        match self {
            AgeGroup::Child => 2,
            AgeGroup::AdultMale => 3,
            AgeGroup::AdultFemale => 5,
        }
    }
}

pub fn calculate(input: &IsthBatInput) -> CalcResult {
    let mut score = 0;
    for (_, value) in input.domains() {
        score += value;
    }
    score += match input.cns_bleeding {
        CnsBleeding::Never => 0,
        CnsBleeding::Subdural => 3,
        CnsBleeding::Intracerebral => 4,
    };

    let typical_max = input.age_group.typical_max();
    let atypical_min = typical_max + 1;
    let interpretation = match (score <= typical_max, input.age_group) {
        (true, AgeGroup::Child) => Interpretation::new(
            "Child - Typical",
            "Typical bleeding pattern for children",
            format!(
                "Score {score} points for children <18 years: Typical bleeding pattern. Low likelihood of inherited bleeding disorder. \
                 No immediate hematologic evaluation required unless strong clinical suspicion or positive family history."
            ),
        ),
        (true, AgeGroup::AdultMale) => Interpretation::new(
            "Adult Male - Typical",
            "Typical bleeding pattern for adult males",
            format!(
                "Score {score} points for adult males: Typical bleeding pattern. Low likelihood of inherited bleeding disorder. \
                 Routine hematologic screening is not indicated unless there are specific clinical concerns or positive family history."
            ),
        ),
        (true, AgeGroup::AdultFemale) => Interpretation::new(
            "Adult Female - Typical",
            "Typical bleeding pattern for adult females",
            format!(
                "Score {score} points for adult females: Typical bleeding pattern. Low likelihood of inherited bleeding disorder. \
                 This score falls within the normal range for adult females, accounting for menstrual and reproductive bleeding."
            ),
        ),
        (false, AgeGroup::Child) => Interpretation::new(
            "Child - Atypical",
            "Atypical bleeding pattern for children",
            format!(
                "Score {score} points for children <18 years: Atypical bleeding pattern. Increased likelihood of inherited bleeding disorder. \
                 This score exceeds the typical range for pediatric patients (≥{atypical_min} points). Recommend hematologic evaluation \
                 including complete blood count with platelet count, PT/PTT, and von Willebrand disease studies."
            ),
        ),
        (false, AgeGroup::AdultMale) => Interpretation::new(
            "Adult Male - Atypical",
            "Atypical bleeding pattern for adult males",
            format!(
                "Score {score} points for adult males: Atypical bleeding pattern. Increased likelihood of inherited bleeding disorder. \
                 This score exceeds the typical range for adult males (≥{atypical_min} points). Recommend comprehensive hematologic evaluation \
                 including coagulation studies (PT/PTT), von Willebrand disease panel, and platelet function studies."
            ),
        ),
        (false, AgeGroup::AdultFemale) => Interpretation::new(
            "Adult Female - Atypical",
            "Atypical bleeding pattern for adult females",
            format!(
                "Score {score} points for adult females: Atypical bleeding pattern. Increased likelihood of inherited bleeding disorder. \
                 This score exceeds the typical range for adult females (≥{atypical_min} points). Recommend von Willebrand disease studies \
                 and platelet function testing."
            ),
        ),
    };

    Ok(CalculatorResponse::new(score, "points", interpretation))
}
