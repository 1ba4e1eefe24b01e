//! Gleason score and ISUP grade group from the primary and secondary
//! histologic patterns.

use medcalc_core::math::ensure_one_of;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct GleasonInput {
        pub primary_grade: i64,
        pub secondary_grade: i64,
    }
}

impl GleasonInput {
    fn validate(&self) -> CalcResult<()> {
        // Patterns 1 and 2 are benign and no longer reported.
        ensure_one_of("primary_grade", self.primary_grade, &[3, 4, 5])?;
        ensure_one_of("secondary_grade", self.secondary_grade, &[3, 4, 5])?;
        Ok(())
    }
}

fn pattern_description(grade: i64) -> &'static str {
    match grade {
        3 => "Well-formed glands with minimal architectural distortion",
        4 => "Fused glands, ill-defined glands, or cribriform pattern",
        _ => "No glandular formation, solid sheets, or comedonecrosis",
    }
}

fn grade_group(primary: i64, total: i64) -> i64 {
    match total {
        ..=6 => 1,
        7 if primary == 3 => 2,
        7 => 3,
        8 => 4,
        _ => 5,
    }
}

pub fn calculate(input: &GleasonInput) -> CalcResult {
    input.validate()?;

    let primary = input.primary_grade;
    let secondary = input.secondary_grade;
    let total = primary + secondary;
    let group = grade_group(primary, total);

    let summary = format!(
        "Gleason Score: {primary}+{secondary}={total}. Grade Group {group} ({primary}+{secondary}). Primary pattern {primary} ({}); Secondary pattern {secondary} ({}).",
        pattern_description(primary),
        pattern_description(secondary),
    );

    let interpretation = match total {
        6 => Interpretation::new(
            "Low-Grade Cancer (Grade Group 1)",
            "Well-differentiated, favorable prognosis",
            format!(
                "{summary} Low-grade prostate cancer with excellent prognosis. Tumor grows slowly and is less likely to spread or metastasize. 10-year cancer-specific survival exceeds 95%. Often managed with active surveillance, especially in older patients (>70 years) or those with limited life expectancy (<10 years). Treatment options include: active surveillance with regular PSA monitoring, radical prostatectomy, or radiation therapy. Decision should consider patient age, comorbidities, PSA levels, clinical stage, and patient preferences. Regular monitoring with PSA, DRE, and repeat biopsies if on surveillance."
            ),
        ),
        7 => {
            let detail = if group == 2 {
                "Grade Group 2 (3+4=7) has more favorable prognosis than Grade Group 3 (4+3=7) due to predominant well-differentiated pattern. "
            } else {
                "Grade Group 3 (4+3=7) has less favorable prognosis than Grade Group 2 (3+4=7) due to predominant poorly-differentiated pattern. "
            };
            Interpretation::new(
                "Intermediate-Grade Cancer (Grade Group 2-3)",
                "Moderately differentiated, intermediate prognosis",
                format!(
                    "{summary} Intermediate-grade prostate cancer with moderate aggressiveness and metastatic potential. {detail}10-year cancer-specific survival ranges 85-95%. Typically requires definitive treatment with curative intent. Treatment options include: radical prostatectomy, external beam radiation therapy (EBRT), brachytherapy, or combination therapies. May benefit from adjuvant hormone therapy depending on risk factors. Consider genetic testing and multidisciplinary consultation. Regular PSA monitoring and imaging surveillance post-treatment essential."
                ),
            )
        }
        8 => Interpretation::new(
            "High-Grade Cancer (Grade Group 4)",
            "Poorly differentiated, unfavorable prognosis",
            format!(
                "{summary} High-grade prostate cancer with aggressive behavior and significant metastatic potential. 10-year cancer-specific survival ranges 60-80%. Requires aggressive multimodal treatment approach. Treatment typically includes: radical prostatectomy with extended lymph node dissection, high-dose radiation therapy with androgen deprivation therapy (ADT), or combination treatments. Consider neoadjuvant/adjuvant hormone therapy for 18-36 months. Advanced imaging (MRI, bone scan, CT) for staging. Genetic counseling and testing recommended. Close monitoring for biochemical recurrence and distant metastases required. Multidisciplinary oncology team management essential."
            ),
        ),
        _ => Interpretation::new(
            "Very High-Grade Cancer (Grade Group 5)",
            "Very poorly differentiated, very unfavorable prognosis",
            format!(
                "{summary} Very high-grade prostate cancer with very aggressive behavior and high likelihood of metastasis. Poor prognosis with 10-year cancer-specific survival 40-60%. Requires immediate aggressive multimodal treatment. Treatment includes: radical prostatectomy with extended lymph node dissection (if localized), high-dose radiation with long-term ADT (2-3 years), or systemic therapy for metastatic disease. Consider docetaxel chemotherapy, abiraterone, or enzalutamide. Advanced imaging and staging essential (CT, bone scan, PSMA PET if available). Genetic counseling and testing strongly recommended. Consider clinical trial enrollment. Multidisciplinary team management with medical oncology, radiation oncology, and urology required. Palliative care consultation for symptom management and quality of life."
            ),
        ),
    };

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("grade_group", group)
        .with("pattern", format!("{primary}+{secondary}")))
}
