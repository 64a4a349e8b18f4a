/*! Keyness

Compares term frequencies between a target and a reference matrix.

For a term with frequency `a` in the target (`N1` tokens) and `b` in the reference (`N2` tokens):
- the effect size is the log ratio `log2((a / N1) / (b / N2))`, zero frequencies being smoothed to 0.5,
- the significance is either the log-likelihood `G2` or the Yates-corrected chi-squared statistic
  of the 2x2 contingency table, signed positive when the term is relatively more frequent in the target.

Swapping target and reference flips the signs and keeps the magnitudes.
!*/
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::matrix::DocumentTermMatrix;

use super::distribution::chi_squared_sf;

const SMOOTHING: f64 = 0.5;

/// Significance statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// log-likelihood (G2)
    #[default]
    LogLikelihood,
    /// chi-squared with Yates correction
    ChiSquared,
}

impl FromStr for Measure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ll" | "lr" | "g2" | "loglikelihood" => Ok(Measure::LogLikelihood),
            "chi2" | "chisq" => Ok(Measure::ChiSquared),
            other => Err(Error::Custom(format!(
                "unknown keyness measure {other:?} (expected ll or chi2)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeynessRow {
    pub term: String,
    pub target_freq: u64,
    pub reference_freq: u64,
    /// per million tokens
    pub target_norm: f64,
    /// per million tokens
    pub reference_norm: f64,
    /// log ratio
    pub effect: f64,
    /// signed statistic
    pub statistic: f64,
    pub p_value: f64,
}

/// `x * ln(x / expected)`, 0 when `x` is 0.
fn ll_term(observed: f64, expected: f64) -> f64 {
    if observed > 0.0 {
        observed * (observed / expected).ln()
    } else {
        0.0
    }
}

fn log_likelihood(a: f64, b: f64, n1: f64, n2: f64) -> f64 {
    let total = n1 + n2;
    let e1 = n1 * (a + b) / total;
    let e2 = n2 * (a + b) / total;
    2.0 * (ll_term(a, e1) + ll_term(b, e2))
}

fn chi_squared(a: f64, b: f64, n1: f64, n2: f64) -> f64 {
    let (c, d) = (n1 - a, n2 - b);
    let total = n1 + n2;
    let denominator = (a + b) * (c + d) * (a + c) * (b + d);
    if denominator == 0.0 {
        return 0.0;
    }
    let corrected = ((a * d - b * c).abs() - total / 2.0).max(0.0);
    total * corrected.powi(2) / denominator
}

fn log_ratio(a: f64, b: f64, n1: f64, n2: f64) -> f64 {
    let a = if a == 0.0 { SMOOTHING } else { a };
    let b = if b == 0.0 { SMOOTHING } else { b };
    ((a / n1) / (b / n2)).log2()
}

/// Keyness of every term present in `target` or `reference`.
///
/// Rows are sorted by decreasing signed statistic, then by term.
/// Fails if one of the matrices holds no token.
pub fn keyness(
    target: &DocumentTermMatrix,
    reference: &DocumentTermMatrix,
    measure: Measure,
) -> Result<Vec<KeynessRow>, Error> {
    let n1 = target.total();
    let n2 = reference.total();
    if n1 == 0 || n2 == 0 {
        return Err(Error::Custom(format!(
            "cannot compute keyness on empty subsets (target: {n1} tokens, reference: {n2} tokens)"
        )));
    }

    let mut freqs: HashMap<&str, (u64, u64)> = HashMap::new();
    for (term, freq) in target.term_frequencies() {
        freqs.entry(term).or_default().0 += freq;
    }
    for (term, freq) in reference.term_frequencies() {
        freqs.entry(term).or_default().1 += freq;
    }

    let (n1, n2) = (n1 as f64, n2 as f64);
    let mut rows: Vec<KeynessRow> = freqs
        .into_iter()
        .map(|(term, (a, b))| {
            let (af, bf) = (a as f64, b as f64);
            let magnitude = match measure {
                Measure::LogLikelihood => log_likelihood(af, bf, n1, n2),
                Measure::ChiSquared => chi_squared(af, bf, n1, n2),
            };
            let sign = if af / n1 >= bf / n2 { 1.0 } else { -1.0 };

            KeynessRow {
                term: term.to_string(),
                target_freq: a,
                reference_freq: b,
                target_norm: af / n1 * 1_000_000.0,
                reference_norm: bf / n2 * 1_000_000.0,
                effect: log_ratio(af, bf, n1, n2),
                statistic: sign * magnitude,
                p_value: chi_squared_sf(magnitude),
            }
        })
        .collect();

    rows.sort_by(|x, y| {
        y.statistic
            .partial_cmp(&x.statistic)
            .unwrap_or(Ordering::Equal)
            .then_with(|| x.term.cmp(&y.term))
    });

    info!(
        "keyness of {} terms ({:?}, {} target / {} reference tokens)",
        rows.len(),
        measure,
        n1,
        n2
    );
    Ok(rows)
}
