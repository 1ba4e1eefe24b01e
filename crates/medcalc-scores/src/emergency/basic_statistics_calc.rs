//! Diagnostic test accuracy and treatment effect statistics.
//!
//! Two modes: `diagnostic_test` (from rates or from a 2x2 table) and
//! `treatment` (from event counts in experimental and control arms).
//! Infinite ratios are reported as `null`.

use medcalc_core::math::{ensure, round_to};
use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation};
use serde_json::Value;

choice! {
    pub enum CalculationType {
        DiagnosticTest => "diagnostic_test",
        Treatment => "treatment",
    }
}

choice! {
    pub enum InputMethod {
        Rates => "rates",
        Counts => "counts",
    }
}

calculator_input! {
    pub struct BasicStatisticsInput {
        pub calculation_type: CalculationType,
        pub input_method: Option<InputMethod>,
        pub prevalence: Option<f64> => 0.0..=100.0,
        pub sensitivity: Option<f64> => 0.0..=100.0,
        pub specificity: Option<f64> => 0.0..=100.0,
        pub true_positive: Option<i64> => 0..=i64::MAX,
        pub false_positive: Option<i64> => 0..=i64::MAX,
        pub false_negative: Option<i64> => 0..=i64::MAX,
        pub true_negative: Option<i64> => 0..=i64::MAX,
        pub experimental_with_outcome: Option<i64> => 0..=i64::MAX,
        pub experimental_without_outcome: Option<i64> => 0..=i64::MAX,
        pub control_with_outcome: Option<i64> => 0..=i64::MAX,
        pub control_without_outcome: Option<i64> => 0..=i64::MAX,
    }
}

fn finite(value: f64, places: i32) -> Value {
    if value.is_finite() {
        round_to(value, places).into()
    } else {
        Value::Null
    }
}

pub fn calculate(input: &BasicStatisticsInput) -> CalcResult {
    match input.calculation_type {
        CalculationType::DiagnosticTest => diagnostic(input),
        CalculationType::Treatment => treatment(input),
    }
}

fn diagnostic(input: &BasicStatisticsInput) -> CalcResult {
    let rates = (input.prevalence, input.sensitivity, input.specificity);
    let counts = (
        input.true_positive,
        input.false_positive,
        input.false_negative,
        input.true_negative,
    );
    let use_rates = input.input_method == Some(InputMethod::Rates)
        || matches!(rates, (Some(_), Some(_), Some(_)));

    if use_rates {
        let (Some(prevalence), Some(sensitivity), Some(specificity)) = rates else {
            return Err(CalcError::constraint(
                "prevalence, sensitivity and specificity are required for the rates method",
            ));
        };
        from_rates(prevalence, sensitivity, specificity)
    } else if let (Some(tp), Some(fp), Some(fn_), Some(tn)) = counts {
        from_counts(tp, fp, fn_, tn)
    } else {
        Err(CalcError::constraint(
            "Invalid input parameters for diagnostic test calculation",
        ))
    }
}

fn from_rates(prevalence: f64, sensitivity: f64, specificity: f64) -> CalcResult {
    ensure(
        prevalence > 0.0 && prevalence < 100.0,
        "prevalence must be greater than 0 and less than 100",
    )?;

    let prev = prevalence / 100.0;
    let sens = sensitivity / 100.0;
    let spec = specificity / 100.0;
    let ppv = (sens * prev) / (sens * prev + (1.0 - spec) * (1.0 - prev));
    let npv = (spec * (1.0 - prev)) / ((1.0 - sens) * prev + spec * (1.0 - prev));
    let lr_pos = if spec < 1.0 { sens / (1.0 - spec) } else { f64::INFINITY };
    let lr_neg = if spec > 0.0 { (1.0 - sens) / spec } else { 0.0 };
    let pre_odds = prev / (1.0 - prev);
    let post_prob = |lr: f64| {
        let odds = pre_odds * lr;
        if odds.is_finite() { odds / (1.0 + odds) } else { 1.0 }
    };

    let text = interpret_diagnostic(sens, spec, lr_pos, lr_neg);
    Ok(CalculatorResponse::new(
        round_to(ppv * 100.0, 2),
        "percent/ratio",
        Interpretation::new("Diagnostic Test", "Diagnostic test accuracy from rates", text),
    )
    .with("prevalence", round_to(prevalence, 2))
    .with("sensitivity", round_to(sensitivity, 2))
    .with("specificity", round_to(specificity, 2))
    .with("positive_predictive_value", finite(ppv * 100.0, 2))
    .with("negative_predictive_value", finite(npv * 100.0, 2))
    .with("positive_likelihood_ratio", finite(lr_pos, 2))
    .with("negative_likelihood_ratio", finite(lr_neg, 2))
    .with("pre_test_probability", round_to(prevalence, 2))
    .with("post_test_probability_positive", finite(post_prob(lr_pos) * 100.0, 2))
    .with("post_test_probability_negative", finite(post_prob(lr_neg) * 100.0, 2)))
}

fn from_counts(tp: i64, fp: i64, fn_: i64, tn: i64) -> CalcResult {
    let diseased = (tp + fn_) as f64;
    let healthy = (fp + tn) as f64;
    let total = diseased + healthy;
    ensure(total > 0.0, "Total count cannot be zero")?;

    let ratio = |num: i64, den: f64| if den > 0.0 { num as f64 / den } else { 0.0 };
    let sens = ratio(tp, diseased);
    let spec = ratio(tn, healthy);
    let ppv = ratio(tp, (tp + fp) as f64);
    let npv = ratio(tn, (tn + fn_) as f64);
    let accuracy = (tp + tn) as f64 / total;
    let lr_pos = if fp > 0 && healthy > 0.0 {
        sens / (fp as f64 / healthy)
    } else {
        f64::INFINITY
    };
    let lr_neg = if tn > 0 && healthy > 0.0 && diseased > 0.0 {
        (fn_ as f64 / diseased) / spec
    } else {
        0.0
    };

    let text = interpret_diagnostic(sens, spec, lr_pos, lr_neg);
    Ok(CalculatorResponse::new(
        round_to(ppv * 100.0, 2),
        "percent/ratio",
        Interpretation::new("Diagnostic Test", "Diagnostic test accuracy from a 2x2 table", text),
    )
    .with("true_positive", tp)
    .with("false_positive", fp)
    .with("false_negative", fn_)
    .with("true_negative", tn)
    .with("total", total as i64)
    .with("prevalence", round_to(diseased / total * 100.0, 2))
    .with("sensitivity", round_to(sens * 100.0, 2))
    .with("specificity", round_to(spec * 100.0, 2))
    .with("positive_predictive_value", round_to(ppv * 100.0, 2))
    .with("negative_predictive_value", round_to(npv * 100.0, 2))
    .with("accuracy", round_to(accuracy * 100.0, 2))
    .with("positive_likelihood_ratio", finite(lr_pos, 2))
    .with("negative_likelihood_ratio", finite(lr_neg, 2)))
}

fn treatment(input: &BasicStatisticsInput) -> CalcResult {
    let (Some(a), Some(b), Some(c), Some(d)) = (
        input.experimental_with_outcome,
        input.experimental_without_outcome,
        input.control_with_outcome,
        input.control_without_outcome,
    ) else {
        return Err(CalcError::constraint(
            "All treatment parameters (A, B, C, D) must be provided",
        ));
    };
    ensure(
        a + b > 0 && c + d > 0,
        "Total patients in experimental or control group cannot be zero",
    )?;

    let (af, bf, cf, df) = (a as f64, b as f64, c as f64, d as f64);
    let eer = af / (af + bf);
    let cer = cf / (cf + df);
    let rr = if cer > 0.0 { eer / cer } else { f64::INFINITY };
    let arr = eer - cer;
    let rrr = if cer > 0.0 { (eer - cer) / cer * 100.0 } else { 0.0 };
    let odds_exp = if b > 0 { af / bf } else { f64::INFINITY };
    let odds_ctl = if d > 0 { cf / df } else { f64::INFINITY };
    let odds_ratio = if odds_ctl > 0.0 { odds_exp / odds_ctl } else { f64::INFINITY };
    let nnt = if arr != 0.0 { 1.0 / arr.abs() } else { f64::INFINITY };

    let (rr_ci, or_ci) = if a > 0 && b > 0 && c > 0 && d > 0 {
        let se_rr = (1.0 / af - 1.0 / (af + bf) + 1.0 / cf - 1.0 / (cf + df)).sqrt();
        let se_or = (1.0 / af + 1.0 / bf + 1.0 / cf + 1.0 / df).sqrt();
        let ci = |point: f64, se: f64| {
            format!(
                "({} - {})",
                round_to((point.ln() - 1.96 * se).exp(), 3),
                round_to((point.ln() + 1.96 * se).exp(), 3)
            )
        };
        (ci(rr, se_rr), ci(odds_ratio, se_or))
    } else {
        ("N/A".to_string(), "N/A".to_string())
    };

    let text = interpret_treatment(rr, arr, nnt);
    Ok(CalculatorResponse::new(
        round_to(rr, 3),
        "percent/ratio",
        Interpretation::new("Treatment Effect", "Treatment effect from event counts", text),
    )
    .with("experimental_event_rate", round_to(eer * 100.0, 2))
    .with("control_event_rate", round_to(cer * 100.0, 2))
    .with("relative_risk", finite(rr, 3))
    .with("relative_risk_ci", rr_ci)
    .with("odds_ratio", finite(odds_ratio, 3))
    .with("odds_ratio_ci", or_ci)
    .with("absolute_risk_reduction", round_to(arr * 100.0, 2))
    .with("relative_risk_reduction", round_to(rrr, 2))
    .with("number_needed_to_treat", finite(nnt, 1)))
}

fn interpret_diagnostic(sens: f64, spec: f64, lr_pos: f64, lr_neg: f64) -> String {
    let mut parts = vec![
        if sens >= 0.95 {
            "Very high sensitivity (≥95%): Excellent for ruling out disease when negative."
        } else if sens >= 0.90 {
            "High sensitivity (90-94%): Good for ruling out disease when negative."
        } else if sens >= 0.80 {
            "Moderate sensitivity (80-89%): Reasonable for screening."
        } else {
            "Low sensitivity (<80%): Limited ability to rule out disease."
        },
        if spec >= 0.95 {
            "Very high specificity (≥95%): Excellent for ruling in disease when positive."
        } else if spec >= 0.90 {
            "High specificity (90-94%): Good for ruling in disease when positive."
        } else if spec >= 0.80 {
            "Moderate specificity (80-89%): Reasonable for confirmation."
        } else {
            "Low specificity (<80%): Limited ability to rule in disease."
        },
    ];
    if lr_pos > 10.0 {
        parts.push("LR+ >10: Large and often conclusive increase in disease likelihood.");
    } else if lr_pos > 5.0 {
        parts.push("LR+ 5-10: Moderate increase in disease likelihood.");
    } else if lr_pos > 2.0 {
        parts.push("LR+ 2-5: Small increase in disease likelihood.");
    }
    if lr_neg < 0.1 {
        parts.push("LR- <0.1: Large and often conclusive decrease in disease likelihood.");
    } else if lr_neg < 0.2 {
        parts.push("LR- 0.1-0.2: Moderate decrease in disease likelihood.");
    } else if lr_neg < 0.5 {
        parts.push("LR- 0.2-0.5: Small decrease in disease likelihood.");
    }
    parts.join(" ")
}

fn interpret_treatment(rr: f64, arr: f64, nnt: f64) -> String {
    let mut parts = Vec::new();
    if rr > 1.0 {
        parts.push(format!(
            "RR = {rr:.2}: Treatment increases risk of outcome by {:.1}%.",
            (rr - 1.0) * 100.0
        ));
    } else if rr < 1.0 {
        parts.push(format!(
            "RR = {rr:.2}: Treatment reduces risk of outcome by {:.1}%.",
            (1.0 - rr) * 100.0
        ));
    } else {
        parts.push("RR = 1: No difference in risk between treatment and control.".to_string());
    }
    if arr > 0.0 {
        parts.push(format!("ARR = {:.1}%: Treatment increases absolute risk.", arr * 100.0));
    } else if arr < 0.0 {
        parts.push(format!("ARR = {:.1}%: Treatment reduces absolute risk.", arr.abs() * 100.0));
    }
    if nnt.is_finite() && nnt > 0.0 {
        if arr < 0.0 {
            parts.push(format!(
                "NNT = {nnt:.0}: Need to treat {nnt:.0} patients to prevent one adverse outcome."
            ));
        } else {
            parts.push(format!(
                "NNH = {nnt:.0}: One additional adverse outcome for every {nnt:.0} patients treated."
            ));
        }
    }
    parts.join(" ")
}
