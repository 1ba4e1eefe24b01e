//! WHO classification-based Prognostic Scoring System (WPSS) for myelodysplastic syndromes.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum WhoCategory {
        RaRarsDel5q => "ra_rars_del5q",
        RcmdRcmdRs => "rcmd_rcmd_rs",
        Raeb1 => "raeb_1",
        Raeb2 => "raeb_2",
    }
}

choice! {
    pub enum Karyotype {
        Good => "good",
        Intermediate => "intermediate",
        Poor => "poor",
    }
}

choice! {
    pub enum TransfusionRequirement {
        None => "none",
        Regular => "regular",
    }
}

calculator_input! {
    pub struct WpssInput {
        pub who_category: WhoCategory,
        pub karyotype: Karyotype,
        pub transfusion_requirement: TransfusionRequirement,
    }
}

struct RiskBand {
    risk: &'static str,
    description: &'static str,
    median_months: i64,
    median_years: f64,
    transformation: &'static str,
    urgency: &'static str,
}

fn risk_band(score: i64) -> RiskBand {
    match score {
        0 => RiskBand {
            risk: "Very Low Risk",
            description: "Excellent prognosis",
            median_months: 141,
            median_years: 11.8,
            transformation: "Very low probability of leukemic transformation",
            urgency: "Routine monitoring appropriate",
        },
        1 => RiskBand {
            risk: "Low Risk",
            description: "Good prognosis",
            median_months: 66,
            median_years: 5.5,
            transformation: "Low probability of leukemic transformation",
            urgency: "Regular monitoring with supportive care",
        },
        2 => RiskBand {
            risk: "Intermediate Risk",
            description: "Moderate prognosis",
            median_months: 48,
            median_years: 4.0,
            transformation: "Moderate probability of leukemic transformation",
            urgency: "Close monitoring, consider therapeutic intervention",
        },
        3 | 4 => RiskBand {
            risk: "High Risk",
            description: "Poor prognosis",
            median_months: 26,
            median_years: 2.2,
            transformation: "High probability of leukemic transformation",
            urgency: "Consider intensive treatment strategies",
        },
        _ => RiskBand {
            risk: "Very High Risk",
            description: "Very poor prognosis",
            median_months: 9,
            median_years: 0.8,
            transformation: "Very high probability of leukemic transformation",
            urgency: "Urgent consideration for intensive treatment",
        },
    }
}

impl WpssInput {
    fn who_points(&self) -> i64 {
        match self.who_category {
            WhoCategory::RaRarsDel5q => 0,
            WhoCategory::RcmdRcmdRs => 1,
            WhoCategory::Raeb1 => 2,
            WhoCategory::Raeb2 => 3,
        }
    }

    fn karyotype_points(&self) -> i64 {
        match self.karyotype {
            Karyotype::Good => 0,
            Karyotype::Intermediate => 1,
            Karyotype::Poor => 2,
        }
    }

    fn transfusion_points(&self) -> i64 {
        match self.transfusion_requirement {
            TransfusionRequirement::None => 0,
            TransfusionRequirement::Regular => 1,
        }
    }

    fn recommendations(&self, score: i64) -> serde_json::Value {
        let (mut general, monitoring, treatment): (Vec<&str>, Vec<&str>, Vec<&str>) = match score {
            ..=1 => (
                vec![
                    "Watch and wait approach with regular monitoring",
                    "Supportive care for symptomatic anemia",
                    "Monitor for disease progression",
                    "Quality of life optimization",
                ],
                vec![
                    "Complete blood count every 3-6 months",
                    "Bone marrow assessment annually or if clinical change",
                    "Iron overload monitoring if transfusion dependent",
                ],
                vec![
                    "ESAs (erythropoiesis-stimulating agents) for anemia",
                    "Iron chelation if transfusion dependent",
                    "Clinical trial participation",
                ],
            ),
            2 => (
                vec![
                    "Regular monitoring with consideration for early intervention",
                    "Evaluate for hypomethylating agents",
                    "Support care optimization",
                    "Consider clinical trial participation",
                ],
                vec![
                    "Complete blood count every 2-3 months",
                    "Bone marrow assessment every 6-12 months",
                    "Cytogenetic monitoring for clonal evolution",
                ],
                vec![
                    "Hypomethylating agents (azacitidine, decitabine)",
                    "Lenalidomide for del(5q) cases",
                    "ESAs if appropriate",
                ],
            ),
            _ => (
                vec![
                    "Urgent hematology-oncology consultation",
                    "Consider intensive treatment strategies",
                    "Evaluate for allogeneic stem cell transplantation",
                    "Aggressive supportive care",
                ],
                vec![
                    "Complete blood count monthly or more frequently",
                    "Bone marrow assessment every 3-6 months",
                    "Monitor for AML transformation",
                ],
                vec![
                    "Hypomethylating agents as first-line therapy",
                    "Allogeneic stem cell transplantation evaluation",
                    "Clinical trials for novel agents",
                    "Intensive supportive care including transfusions",
                ],
            ),
        };

        if self.transfusion_requirement == TransfusionRequirement::Regular {
            general.push("Iron overload assessment and chelation therapy consideration");
        }
        if self.karyotype == Karyotype::Poor {
            general.push("Consider more aggressive treatment approach due to poor cytogenetics");
        }
        if self.who_category == WhoCategory::Raeb2 {
            general.push("Close monitoring for AML transformation given high blast count");
        }

        json!({
            "general_recommendations": general,
            "monitoring_schedule": monitoring,
            "treatment_considerations": treatment,
            "follow_up": "WPSS can be recalculated throughout disease course as clinical parameters change",
        })
    }
}

pub fn calculate(input: &WpssInput) -> CalcResult {
    let who_score = input.who_points();
    let karyotype_score = input.karyotype_points();
    let transfusion_score = input.transfusion_points();
    let score = who_score + karyotype_score + transfusion_score;

    let band = risk_band(score);
    let text = format!(
        "WPSS score {score} points indicates {} myelodysplastic syndrome with median overall survival of {} months \
         ({} years). {}.",
        band.risk,
        band.median_months,
        fixed(band.median_years, 1),
        band.description,
    );

    Ok(
        CalculatorResponse::new(score, "points", Interpretation::new(band.risk, band.description, text))
            .with("median_survival_months", band.median_months)
            .with("median_survival_years", band.median_years)
            .with(
                "component_scores",
                json!({
                    "who_category_score": who_score,
                    "karyotype_score": karyotype_score,
                    "transfusion_score": transfusion_score,
                }),
            )
            .with(
                "risk_assessment",
                json!({
                    "risk_category": band.risk,
                    "median_survival": format!("{} months ({} years)", band.median_months, fixed(band.median_years, 1)),
                    "leukemic_transformation_risk": band.transformation,
                    "management_urgency": band.urgency,
                    "prognosis": band.description,
                }),
            )
            .with("clinical_recommendations", input.recommendations(score)),
    )
}
