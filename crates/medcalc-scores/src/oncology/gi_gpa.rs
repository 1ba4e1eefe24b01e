//! GI-GPA: graded prognostic assessment for gastrointestinal cancer with
//! brain metastases. Every item scores in half points, 0.0 to 4.0.

use medcalc_core::math::fixed;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum AgeCategory {
        Under60 => "under_60",
        SixtyOrOver => "60_or_over",
    }
}

choice! {
    pub enum Kps {
        Under80 => "under_80",
        Eighty => "80",
        NinetyTo100 => "90_to_100",
    }
}

choice! {
    pub enum ExtracranialMetastases {
        Present => "present",
        Absent => "absent",
    }
}

choice! {
    pub enum BrainMetastases {
        MoreThan3 => "more_than_3",
        TwoTo3 => "2_to_3",
        One => "1",
    }
}

calculator_input! {
    pub struct GiGpaInput {
        pub age_category: AgeCategory,
        pub kps: Kps,
        pub extracranial_metastases: ExtracranialMetastases,
        pub number_brain_metastases: BrainMetastases,
    }
}

impl GiGpaInput {
    /// Total in half points.
    fn half_points(&self) -> i64 {
        let age = match self.age_category {
            AgeCategory::Under60 => 1,
            AgeCategory::SixtyOrOver => 0,
        };
        let kps = match self.kps {
            Kps::Under80 => 0,
            Kps::Eighty => 2,
            Kps::NinetyTo100 => 4,
        };
        let extracranial = match self.extracranial_metastases {
            ExtracranialMetastases::Present => 0,
            ExtracranialMetastases::Absent => 1,
        };
        let brain = match self.number_brain_metastases {
            BrainMetastases::MoreThan3 => 0,
            BrainMetastases::TwoTo3 => 1,
            BrainMetastases::One => 2,
        };
        age + kps + extracranial + brain
    }

    fn summary(&self) -> String {
        let age = match self.age_category {
            AgeCategory::Under60 => "Age <60 years",
            AgeCategory::SixtyOrOver => "Age ≥60 years",
        };
        let kps = match self.kps {
            Kps::Under80 => "KPS <80",
            Kps::Eighty => "KPS 80",
            Kps::NinetyTo100 => "KPS 90-100",
        };
        let extracranial = match self.extracranial_metastases {
            ExtracranialMetastases::Present => "Extracranial metastases present",
            ExtracranialMetastases::Absent => "No extracranial metastases",
        };
        let brain = match self.number_brain_metastases {
            BrainMetastases::MoreThan3 => ">3 brain metastases",
            BrainMetastases::TwoTo3 => "2-3 brain metastases",
            BrainMetastases::One => "1 brain metastasis",
        };
        format!("Clinical parameters: {age}, {kps}, {extracranial}, {brain}. ")
    }
}

pub fn calculate(input: &GiGpaInput) -> CalcResult {
    let half = input.half_points();
    let score = half as f64 / 2.0;

    let (stage, description, median, recommendations) = match half {
        ..=2 => (
            "Poor Prognosis",
            "Worst survival group",
            "3 months",
            "Very poor prognosis with limited treatment options. Consider palliative care focus and comfort measures. Discuss goals of care with patient and family. Whole brain radiation therapy may be considered for symptom palliation. Avoid aggressive interventions that may worsen quality of life.",
        ),
        3..=4 => (
            "Intermediate-Poor Prognosis",
            "Below average survival",
            "9 months",
            "Below average prognosis. Consider limited aggressive interventions with focus on quality of life. Palliative radiation therapy may be appropriate for symptomatic lesions. Systemic therapy decisions should weigh benefits against potential toxicity. Consider multidisciplinary team discussion.",
        ),
        5..=6 => (
            "Intermediate Prognosis",
            "Average survival",
            "12 months",
            "Moderate prognosis. Consider radiation therapy and/or surgical resection for selected patients with good performance status and limited brain disease. Systemic therapy may be beneficial. Multidisciplinary team approach recommended for treatment planning.",
        ),
        _ => (
            "Good Prognosis",
            "Best survival group",
            "17 months",
            "Best prognosis group. Consider aggressive multimodal therapy including surgical resection for solitary lesions, stereotactic radiosurgery for limited disease, and systemic therapy. These patients may benefit from clinical trial enrollment. Multidisciplinary team approach essential for optimal outcomes.",
        ),
    };

    let text = format!(
        "{}GI-GPA Score: {} points. Prognostic category: {stage} (Median survival: {median}). Clinical recommendations: {recommendations} Important note: This score should be used in conjunction with clinical judgment and patient preferences. Consider patient's overall condition, primary tumor control, and quality of life goals when making treatment decisions.",
        input.summary(),
        fixed(score, 1),
    );

    Ok(
        CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text))
            .with("median_survival", median),
    )
}
