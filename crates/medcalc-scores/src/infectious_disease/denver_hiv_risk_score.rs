//! Denver HIV Risk Score: targets HIV screening by estimated prevalence of
//! undiagnosed infection.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::{json, Value};

choice! {
    pub enum AgeGroup {
        Under22 => "under_22",
        From22To25 => "22_25",
        From26To32 => "26_32",
        From33To46 => "33_46",
        From47To54 => "47_54",
        From55To60 => "55_60",
        Over60 => "over_60",
    }
}

impl AgeGroup {
    fn points(self) -> i64 {
        match self {
            AgeGroup::Under22 => 2,
            AgeGroup::From22To25 => 4,
            AgeGroup::From26To32 => 6,
            AgeGroup::From33To46 => 12,
            AgeGroup::From47To54 => 8,
            AgeGroup::From55To60 => 3,
            AgeGroup::Over60 => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeGroup::Under22 => "Age <22 years",
            AgeGroup::From22To25 => "Age 22-25 years",
            AgeGroup::From26To32 => "Age 26-32 years",
            AgeGroup::From33To46 => "Age 33-46 years",
            AgeGroup::From47To54 => "Age 47-54 years",
            AgeGroup::From55To60 => "Age 55-60 years",
            AgeGroup::Over60 => "Age >60 years",
        }
    }
}

choice! {
    pub enum SexualPractice {
        SexWithMale => "sex_with_male",
        ReceptiveAnalIntercourse => "receptive_anal_intercourse",
        VaginalIntercourse => "vaginal_intercourse",
        None => "none",
    }
}

impl SexualPractice {
    fn points(self) -> i64 {
        match self {
            SexualPractice::SexWithMale => 22,
            SexualPractice::ReceptiveAnalIntercourse => 8,
            SexualPractice::VaginalIntercourse => -10,
            SexualPractice::None => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SexualPractice::SexWithMale => "Sex with male partner",
            SexualPractice::ReceptiveAnalIntercourse => "Receptive anal intercourse",
            SexualPractice::VaginalIntercourse => "Vaginal intercourse",
            SexualPractice::None => "No specified sexual practices",
        }
    }

    fn is_high_risk(self) -> bool {
        matches!(self, SexualPractice::SexWithMale | SexualPractice::ReceptiveAnalIntercourse)
    }
}

choice! {
    pub enum RaceEthnicity {
        Black => "black",
        Hispanic => "hispanic",
        White => "white",
        Asian => "asian",
        Other => "other",
    }
}

impl RaceEthnicity {
    fn points(self) -> i64 {
        match self {
            RaceEthnicity::Black => 9,
            RaceEthnicity::Hispanic => 3,
            RaceEthnicity::White | RaceEthnicity::Asian => 0,
            RaceEthnicity::Other => 1,
        }
    }
}

calculator_input! {
    pub struct DenverHivInput {
        pub age_group: AgeGroup,
        pub gender: Sex,
        pub sexual_practices: SexualPractice,
        pub injection_drug_use: YesNo,
        pub past_hiv_testing: YesNo,
        pub race_ethnicity: Option<RaceEthnicity>,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Category {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Category {
    fn from_score(score: i64) -> Self {
        match score {
            ..=19 => Category::VeryLow,
            20..=29 => Category::Low,
            30..=39 => Category::Moderate,
            40..=49 => Category::High,
            _ => Category::VeryHigh,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Category::VeryLow => "very_low",
            Category::Low => "low",
            Category::Moderate => "moderate",
            Category::High => "high",
            Category::VeryHigh => "very_high",
        }
    }

    fn is_elevated(self) -> bool {
        matches!(self, Category::Moderate | Category::High | Category::VeryHigh)
    }

    /// (label, description, prevalence, recommendation)
    fn details(self) -> (&'static str, &'static str, f64, &'static str) {
        match self {
            Category::VeryLow => (
                "Very Low Risk",
                "Very low probability of undiagnosed HIV infection",
                0.31,
                "Consider routine screening per guidelines",
            ),
            Category::Low => (
                "Low Risk",
                "Low probability of undiagnosed HIV infection",
                0.41,
                "Offer HIV testing and prevention counseling",
            ),
            Category::Moderate => (
                "Moderate Risk",
                "Moderate probability of undiagnosed HIV infection",
                0.99,
                "Strongly recommend HIV testing",
            ),
            Category::High => (
                "High Risk",
                "High probability of undiagnosed HIV infection",
                1.59,
                "Urgent HIV testing recommended",
            ),
            Category::VeryHigh => (
                "Very High Risk",
                "Very high probability of undiagnosed HIV infection",
                3.59,
                "Immediate HIV testing essential",
            ),
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            Category::VeryLow => {
                "Routine screening may be considered based on clinical judgment and standard guidelines. \
                 Focus on general prevention education."
            }
            Category::Low => {
                "Offer HIV testing and basic prevention counseling. Consider periodic rescreening based on ongoing risk factors."
            }
            Category::Moderate => {
                "Strongly recommend HIV testing with comprehensive prevention counseling. \
                 Consider PrEP evaluation and frequent rescreening."
            }
            Category::High => {
                "Urgent HIV testing recommended with expedited results. \
                 Provide comprehensive prevention services and strong PrEP consideration."
            }
            Category::VeryHigh => {
                "Immediate HIV testing essential with same-day results when possible. \
                 Prioritize for comprehensive prevention services and PrEP initiation."
            }
        }
    }

    fn screening(self) -> (&'static [&'static str], &'static str) {
        match self {
            Category::VeryLow => (
                &[
                    "Consider routine screening per CDC guidelines",
                    "Provide general HIV prevention education",
                    "Document risk assessment in medical record",
                    "Follow standard screening intervals if no risk factors",
                ],
                "Follow standard CDC guidelines (typically annual if sexually active)",
            ),
            Category::Low => (
                &[
                    "Offer HIV testing with informed consent",
                    "Provide risk reduction counseling",
                    "Consider annual screening if ongoing low-level risk",
                    "Educate about HIV transmission and prevention",
                ],
                "Annual testing if ongoing risk factors present",
            ),
            Category::Moderate => (
                &[
                    "Strongly recommend HIV testing",
                    "Provide comprehensive prevention counseling",
                    "Consider more frequent screening (every 3-6 months)",
                    "Discuss risk reduction strategies and safer practices",
                    "Consider PrEP evaluation if appropriate",
                ],
                "Every 3-6 months if ongoing risk factors",
            ),
            Category::High => (
                &[
                    "Urgent HIV testing with expedited results",
                    "Comprehensive risk assessment and counseling",
                    "Frequent screening (every 3 months) if negative",
                    "Strong consideration for PrEP evaluation",
                    "Linkage to HIV prevention services",
                ],
                "Every 3 months if negative and ongoing risk",
            ),
            Category::VeryHigh => (
                &[
                    "Immediate HIV testing with same-day results if possible",
                    "Comprehensive prevention services engagement",
                    "Frequent screening (monthly to quarterly) if negative",
                    "Prioritize for PrEP evaluation and initiation",
                    "Intensive case management and support services",
                ],
                "Monthly to quarterly if negative and ongoing high-risk behavior",
            ),
        }
    }
}

impl DenverHivInput {
    fn gender_points(&self) -> i64 {
        if self.gender.is_female() { 0 } else { 21 }
    }

    fn score(&self) -> i64 {
        self.age_group.points()
            + self.gender_points()
            + self.sexual_practices.points()
            + self.injection_drug_use.points(9)
            + self.past_hiv_testing.points(-4)
            + self.race_ethnicity.map_or(0, RaceEthnicity::points)
    }

    fn clinical_assessment(&self, score: i64, category: Category) -> Value {
        let gender_label = if self.gender.is_female() { "Female" } else { "Male" };
        let mut components = vec![
            format!("{} ({} points)", self.age_group.label(), self.age_group.points()),
            format!("{gender_label} gender ({} points)", self.gender_points()),
            format!("{} ({} points)", self.sexual_practices.label(), self.sexual_practices.points()),
            format!("Injection drug use: {} ({} points)", self.injection_drug_use, self.injection_drug_use.points(9)),
            format!("Past HIV testing: {} ({} points)", self.past_hiv_testing, self.past_hiv_testing.points(-4)),
        ];
        if let Some(race) = self.race_ethnicity {
            components.push(format!("Race/ethnicity: {race} ({} points)", race.points()));
        }

        let mut risk_factors = Vec::new();
        if !self.gender.is_female() {
            risk_factors.push("Male gender associated with higher HIV acquisition risk");
        }
        match self.sexual_practices {
            SexualPractice::SexWithMale => {
                risk_factors.push("Sex with male partners increases HIV transmission risk");
            }
            SexualPractice::ReceptiveAnalIntercourse => {
                risk_factors.push("Receptive anal intercourse carries highest per-act transmission risk");
            }
            _ => {}
        }
        if self.injection_drug_use.is_yes() {
            risk_factors.push("Injection drug use increases HIV transmission through shared equipment");
        }

        let mut protective = Vec::new();
        if self.past_hiv_testing.is_yes() {
            protective.push("Previous HIV testing indicates health-seeking behavior and awareness");
        }
        if self.sexual_practices == SexualPractice::VaginalIntercourse {
            protective.push("Vaginal intercourse carries lower transmission risk than anal intercourse");
        }

        let (_, _, prevalence, recommendation) = category.details();
        json!({
            "hiv_risk_score": score,
            "risk_category": category.key(),
            "score_components": components,
            "risk_factors": risk_factors,
            "protective_factors": protective,
            "clinical_considerations": [
                format!("Patient assessed with Denver HIV Risk Score of {score}"),
                format!("Risk category: {} with {prevalence}% estimated prevalence", category.key()),
                format!("Screening approach: {}", recommendation.to_lowercase()),
            ],
        })
    }

    fn score_breakdown(&self) -> Vec<Value> {
        let item = |component: &str, value: String, points: i64, description: &str| {
            json!({ "component": component, "value": value, "points": points, "description": description })
        };
        let mut items = vec![
            item("Age Group", self.age_group.to_string(), self.age_group.points(), "Age group risk factor"),
            item("Gender", self.gender.to_string(), self.gender_points(), "Gender-based risk factor"),
            item(
                "Sexual Practices",
                self.sexual_practices.to_string(),
                self.sexual_practices.points(),
                "Sexual behavior risk factor",
            ),
            item(
                "Injection Drug Use",
                self.injection_drug_use.to_string(),
                self.injection_drug_use.points(9),
                "Substance use risk factor",
            ),
            item(
                "Past HIV Testing",
                self.past_hiv_testing.to_string(),
                self.past_hiv_testing.points(-4),
                "Previous testing history",
            ),
        ];
        if let Some(race) = self.race_ethnicity {
            items.push(item("Race/Ethnicity", race.to_string(), race.points(), "Demographic risk factor"));
        }
        items
    }

    fn prevention_guidance(&self, category: Category) -> Value {
        let mut specific = Vec::new();
        if self.sexual_practices.is_high_risk() {
            specific.extend([
                "Consider pre-exposure prophylaxis (PrEP) evaluation",
                "Use of appropriate lubrication during anal intercourse",
                "Post-exposure prophylaxis (PEP) awareness for high-risk exposures",
            ]);
        }
        let harm_reduction: &[&str] = if self.injection_drug_use.is_yes() {
            &[
                "Access to clean needle and syringe programs",
                "Substance use treatment referrals",
                "Safe injection practices education",
                "Overdose prevention and naloxone training",
            ]
        } else {
            &[]
        };
        let prep: &[&str] = if category.is_elevated() {
            &[
                "Evaluate for PrEP candidacy based on ongoing risk",
                "Discuss benefits and risks of daily oral PrEP",
                "Consider long-acting injectable PrEP options",
                "Ensure comprehensive monitoring if PrEP initiated",
            ]
        } else {
            &[]
        };
        json!({
            "general_prevention": [
                "Consistent condom use during sexual activity",
                "Limiting number of sexual partners",
                "Regular STD screening and treatment",
                "Open communication with partners about HIV status",
            ],
            "specific_interventions": specific,
            "harm_reduction": harm_reduction,
            "prep_considerations": prep,
        })
    }

    fn prep_considerations(&self, category: Category) -> Value {
        let mut factors = Vec::new();
        let (candidacy, evaluation_needed) = match category {
            c if c.is_elevated() => {
                if self.sexual_practices.is_high_risk() {
                    factors.push("High-risk sexual behavior supports PrEP indication");
                }
                if self.injection_drug_use.is_yes() {
                    factors.push("Injection drug use is indication for PrEP");
                }
                ("Strong candidate for PrEP evaluation", true)
            }
            Category::Low => ("Consider PrEP evaluation based on individual circumstances", false),
            _ => ("PrEP generally not indicated based on current risk assessment", false),
        };
        json!({
            "candidacy": candidacy,
            "evaluation_needed": evaluation_needed,
            "specific_factors": factors,
        })
    }
}

fn screening_recommendations(category: Category, score: i64) -> Value {
    let (primary, frequency) = category.screening();
    let mut specific = Vec::new();
    if score >= 50 {
        specific.push("Very high score warrants immediate testing with expedited results");
    } else if score >= 40 {
        specific.push("High score indicates urgent need for HIV testing");
    } else if score >= 30 {
        specific.push("Moderate to high score supports targeted screening approach");
    }
    if category.is_elevated() {
        specific.push("Consider linkage to HIV prevention services regardless of test result");
        specific.push("Provide comprehensive risk reduction counseling");
    }
    let counseling: &[&str] = if category.is_elevated() {
        &[
            "Comprehensive risk assessment and counseling",
            "Detailed prevention strategy development",
            "Risk reduction goal setting",
            "Referral to specialized prevention services",
        ]
    } else {
        &[
            "Basic HIV prevention education",
            "Information about transmission routes",
            "Safe sex practices discussion",
        ]
    };
    json!({
        "primary_recommendations": primary,
        "specific_considerations": specific,
        "testing_frequency": frequency,
        "counseling_requirements": counseling,
    })
}

fn testing_guidance(category: Category) -> Value {
    if category.is_elevated() {
        json!({
            "test_types": [
                "Rapid HIV testing preferred for immediate results",
                "Consider 4th generation HIV testing for improved sensitivity",
            ],
            "timing": "Expedited testing with same-day results when possible",
            "result_management": [
                "Immediate result notification and counseling",
                "Expedited linkage to care if positive",
                "Comprehensive prevention services if negative",
            ],
        })
    } else {
        json!({
            "test_types": ["Standard HIV testing (laboratory-based or rapid)"],
            "timing": "Routine testing schedule",
            "result_management": [
                "Standard result notification procedures",
                "Basic prevention counseling with results",
            ],
        })
    }
}

fn follow_up(category: Category) -> Value {
    match category {
        Category::VeryLow | Category::Low => json!({
            "timing": "Annual or per standard guidelines",
            "components": ["Risk reassessment", "Repeat testing if indicated", "General prevention education"],
        }),
        Category::Moderate => json!({
            "timing": "3-6 months",
            "components": [
                "Comprehensive risk reassessment",
                "PrEP evaluation if appropriate",
                "STD screening",
                "Prevention counseling reinforcement",
            ],
        }),
        Category::High | Category::VeryHigh => json!({
            "timing": "1-3 months",
            "components": [
                "Intensive risk assessment and monitoring",
                "PrEP initiation or monitoring",
                "Comprehensive STD screening",
                "Linkage to prevention services",
                "Case management if needed",
            ],
        }),
    }
}

pub fn calculate(input: &DenverHivInput) -> CalcResult {
    let score = input.score();
    let category = Category::from_score(score);
    let (label, description, prevalence, recommendation) = category.details();

    let text = format!(
        "Denver HIV Risk Score of {score} indicates {label} with approximately {prevalence}% HIV prevalence in similar \
         populations. {}",
        category.guidance(),
    );

    Ok(CalculatorResponse::new(score, "Denver HIV Risk Score", Interpretation::new(label, description, text))
        .with("hiv_risk_score", score)
        .with("risk_category", category.key())
        .with("hiv_prevalence", format!("{prevalence}%"))
        .with("prevalence_numeric", prevalence)
        .with("recommendation", recommendation)
        .with("clinical_assessment", input.clinical_assessment(score, category))
        .with("screening_recommendations", screening_recommendations(category, score))
        .with("prevention_guidance", input.prevention_guidance(category))
        .with("score_components", input.score_breakdown())
        .with("testing_guidance", testing_guidance(category))
        .with("follow_up_recommendations", follow_up(category))
        .with("prep_considerations", input.prep_considerations(category)))
}
