//! Defuzzification of an aggregated output set.

use super::aggregate::FuzzyOutputSet;
use super::config::DefuzzMethod;

/// Tolerance for "equal to the maximum" in the maximum-based methods.
const MAX_EPS: f64 = 1e-10;

/// Collapses the combined output curve to a crisp value.
///
/// Returns `None` when the curve has zero area (no rule fired); the caller
/// decides how to handle that case.
///
/// # Examples
///
/// ```
/// use u_fuzzy::inference::{aggregate, defuzzify, DefuzzMethod};
/// use u_fuzzy::membership::MembershipFunction;
/// use u_fuzzy::rules::RuleFiring;
/// use u_fuzzy::variable::{Domain, LinguisticVariable};
///
/// let out = LinguisticVariable::new("out", Domain::new(0.0, 100.0, 1001).unwrap())
///     .with_set("mid", MembershipFunction::triangular(35.0, 50.0, 65.0).unwrap());
/// let firing = RuleFiring { rule: 0, consequent: 0, strength: 0.8 };
/// let set = aggregate(&[firing], &out, out.domain);
///
/// let score = defuzzify(&set, DefuzzMethod::Centroid).unwrap();
/// assert!((score - 50.0).abs() < 1e-9);
/// ```
pub fn defuzzify(set: &FuzzyOutputSet, method: DefuzzMethod) -> Option<f64> {
    let curve = set.combined();
    let domain = &set.domain;
    match method {
        DefuzzMethod::Centroid => {
            let mut numerator = 0.0;
            let mut denominator = 0.0;
            for (k, &mu) in curve.iter().enumerate() {
                numerator += domain.point(k) * mu;
                denominator += mu;
            }
            if denominator > 0.0 {
                Some(numerator / denominator)
            } else {
                None
            }
        }
        DefuzzMethod::Bisector => {
            let total: f64 = curve.iter().sum();
            if total <= 0.0 {
                return None;
            }
            let half = total / 2.0;
            let mut cumulative = 0.0;
            for (k, &mu) in curve.iter().enumerate() {
                cumulative += mu;
                if cumulative >= half {
                    return Some(domain.point(k));
                }
            }
            Some(domain.max)
        }
        DefuzzMethod::MeanOfMaximum
        | DefuzzMethod::SmallestOfMaximum
        | DefuzzMethod::LargestOfMaximum => {
            let peak = curve.iter().copied().fold(0.0f64, f64::max);
            if peak <= 0.0 {
                return None;
            }
            let at_peak: Vec<usize> = curve
                .iter()
                .enumerate()
                .filter(|&(_, &mu)| (mu - peak).abs() < MAX_EPS)
                .map(|(k, _)| k)
                .collect();
            match method {
                DefuzzMethod::SmallestOfMaximum => at_peak.first().map(|&k| domain.point(k)),
                DefuzzMethod::LargestOfMaximum => at_peak.last().map(|&k| domain.point(k)),
                _ => {
                    let sum: f64 = at_peak.iter().map(|&k| domain.point(k)).sum();
                    Some(sum / at_peak.len() as f64)
                }
            }
        }
    }
}

/// Human-readable form of a label: `very_high` → `very high`.
pub fn display_label(label: &str) -> String {
    label.replace('_', " ")
}
