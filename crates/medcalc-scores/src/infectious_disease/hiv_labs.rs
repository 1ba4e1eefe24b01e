//! Derived laboratory markers shared by the VACS indices.

use medcalc_core::{choice, Sex};

choice! {
    pub enum Race {
        Black => "black",
        NonBlack => "non_black",
    }
}

/// FIB-4 = age × AST / (platelets × √ALT)
pub fn fib4(age: i64, ast: i64, alt: i64, platelets: i64) -> f64 {
    (age * ast) as f64 / (platelets as f64 * (alt as f64).sqrt())
}

/// CKD-EPI 2009 creatinine equation with the race coefficient.
pub fn ckd_epi_egfr(creatinine: f64, age: i64, sex: Sex, race: Race) -> f64 {
    let (kappa, scale, alpha) = if sex.is_female() { (0.7, 144.0, -0.329) } else { (0.9, 141.0, -0.411) };
    let exponent = if creatinine <= kappa { alpha } else { -1.209 };
    let egfr = scale * (creatinine / kappa).powf(exponent) * 0.993f64.powi(age as i32);
    if race == Race::Black { egfr * 1.159 } else { egfr }
}
