//! PSA doubling time from two to five dated PSA measurements.
//!
//! Least-squares slope of ln(PSA) against time in months; the doubling time
//! is ln 2 / slope. A flat or falling PSA reports the 999-month sentinel.

use medcalc_core::math::{ensure, ensure_positive, ensure_range, round_to};
use medcalc_core::{calculator_input, CalcError, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct PsaDoublingInput {
        /// ng/mL
        pub psa_1: f64,
        /// Days from a common reference date.
        pub days_1: i64,
        pub psa_2: f64,
        pub days_2: i64,
        pub psa_3: Option<f64>,
        pub days_3: Option<i64>,
        pub psa_4: Option<f64>,
        pub days_4: Option<i64>,
        pub psa_5: Option<f64>,
        pub days_5: Option<i64>,
    }
}

const DAYS_PER_MONTH: f64 = 30.44;
const NO_DOUBLING: f64 = 999.0;

impl PsaDoublingInput {
    /// Validated (days, psa) pairs sorted by time.
    fn measurements(&self) -> CalcResult<Vec<(i64, f64)>> {
        let slots = [
            ("1", Some(self.psa_1), Some(self.days_1)),
            ("2", Some(self.psa_2), Some(self.days_2)),
            ("3", self.psa_3, self.days_3),
            ("4", self.psa_4, self.days_4),
            ("5", self.psa_5, self.days_5),
        ];
        let mut points = Vec::with_capacity(slots.len());
        for (n, psa, days) in slots {
            match (psa, days) {
                (Some(psa), Some(days)) => {
                    ensure_positive(&format!("psa_{n}"), psa)?;
                    ensure_range(&format!("days_{n}"), days, 0, i64::MAX)?;
                    points.push((days, psa));
                }
                (None, None) => {}
                _ => {
                    return Err(CalcError::constraint(format!(
                        "Both PSA {n} and Days {n} must be provided together"
                    )));
                }
            }
        }

        points.sort_by_key(|(days, _)| *days);
        ensure(
            points.windows(2).all(|w| w[0].0 != w[1].0),
            "All time points must be unique",
        )?;
        Ok(points)
    }
}

fn regression_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (num, den) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(num, den), (x, y)| {
            (num + (x - mean_x) * (y - mean_y), den + (x - mean_x).powi(2))
        });
    num / den
}

fn doubling_time(points: &[(i64, f64)]) -> f64 {
    let months: Vec<f64> = points
        .iter()
        .map(|(days, _)| *days as f64 / DAYS_PER_MONTH)
        .collect();
    let ln_psa: Vec<f64> = points.iter().map(|(_, psa)| psa.ln()).collect();
    let slope = regression_slope(&months, &ln_psa);
    if slope <= 0.0 {
        return NO_DOUBLING;
    }
    (std::f64::consts::LN_2 / slope).min(NO_DOUBLING)
}

pub fn calculate(input: &PsaDoublingInput) -> CalcResult {
    let points = input.measurements()?;
    let psadt = doubling_time(&points);

    let interpretation = match psadt {
        t if t < 3.0 => Interpretation::new(
            "Very High Risk",
            "Rapid PSA progression",
            "Very rapid PSA doubling indicates aggressive disease with high risk of metastasis and mortality. Urgent treatment consideration required including immediate imaging, salvage therapy evaluation, and consideration of systemic therapy. Close monitoring with monthly PSA levels recommended.",
        ),
        t if t < 6.0 => Interpretation::new(
            "High Risk",
            "Fast PSA progression",
            "Rapid PSA doubling associated with increased risk of metastasis and reduced survival. Consider aggressive treatment options including salvage radiation therapy, androgen deprivation therapy, or clinical trial enrollment. Imaging studies recommended to evaluate for metastatic disease.",
        ),
        t if t < 12.0 => Interpretation::new(
            "Intermediate Risk",
            "Moderate PSA progression",
            "Moderate PSA doubling time indicates intermediate risk for progression requiring close monitoring and treatment consideration. Consider salvage therapy options based on patient factors and preferences. Monitor PSA every 3-6 months with imaging if indicated.",
        ),
        t if t < 36.0 => Interpretation::new(
            "Low Risk",
            "Slow PSA progression",
            "Slower PSA doubling associated with better prognosis and lower risk of aggressive disease progression. Active surveillance may be appropriate with regular PSA monitoring every 6 months. Consider treatment if doubling time shortens or other concerning factors develop.",
        ),
        _ => Interpretation::new(
            "Very Low Risk",
            "Very slow PSA progression",
            "Very slow PSA doubling indicates indolent disease with excellent prognosis and low risk of clinically significant progression. Active surveillance is typically appropriate with PSA monitoring every 6-12 months. Treatment may be deferred unless other high-risk features develop.",
        ),
    };

    Ok(
        CalculatorResponse::new(round_to(psadt, 1), "months", interpretation)
            .with("measurements_used", points.len()),
    )
}
