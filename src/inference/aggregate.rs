//! Aggregation of rule firings into an output fuzzy set.

use crate::rules::RuleFiring;
use crate::variable::{Domain, LinguisticVariable};

/// Aggregated output of one inference, sampled over the output domain.
///
/// For every output label, `curves[label][k]` is the maximum over that
/// label's rules of `min(strength, μ_label(x_k))`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzyOutputSet {
    /// Sampled output domain.
    pub domain: Domain,
    /// Output labels, in the output variable's order.
    pub labels: Vec<String>,
    /// Per-label peak firing strength (the clipping height).
    pub heights: Vec<f64>,
    /// Per-label clipped curves, one value per sample point.
    pub curves: Vec<Vec<f64>>,
}

impl FuzzyOutputSet {
    /// Clipped curve for `label`.
    pub fn curve(&self, label: &str) -> Option<&[f64]> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.curves[i].as_slice())
    }

    /// Clipping height for `label`.
    pub fn height(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.heights[i])
    }

    /// Pointwise maximum across all labels.
    pub fn combined(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.domain.resolution];
        for curve in &self.curves {
            for (o, &v) in out.iter_mut().zip(curve) {
                if v > *o {
                    *o = v;
                }
            }
        }
        out
    }

    /// Whether every curve is identically zero.
    pub fn is_empty(&self) -> bool {
        self.heights.iter().all(|&h| h <= 0.0)
    }
}

/// Aggregates rule firings into a [`FuzzyOutputSet`].
///
/// Each firing clips its consequent's membership function at its strength;
/// rules sharing a consequent are combined by pointwise maximum. Since
/// `max_i min(s_i, μ) == min(max_i s_i, μ)`, each label is clipped once at
/// its strongest firing. Labels with no firing rule yield an all-zero curve.
///
/// `domain` is the sampling grid, normally the output variable's domain.
pub fn aggregate(
    firings: &[RuleFiring],
    output: &LinguisticVariable,
    domain: Domain,
) -> FuzzyOutputSet {
    let mut heights = vec![0.0f64; output.sets.len()];
    for firing in firings {
        if let Some(h) = heights.get_mut(firing.consequent) {
            *h = h.max(firing.strength);
        }
    }

    let curves = output
        .sets
        .iter()
        .zip(&heights)
        .map(|(set, &height)| {
            if height <= 0.0 {
                vec![0.0; domain.resolution]
            } else {
                domain
                    .points()
                    .map(|x| set.function.degree(x).min(height))
                    .collect()
            }
        })
        .collect();

    FuzzyOutputSet {
        domain,
        labels: output.sets.iter().map(|s| s.label.clone()).collect(),
        heights,
        curves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipFunction;

    fn output() -> LinguisticVariable {
        LinguisticVariable::new("out", Domain::new(0.0, 100.0, 101).unwrap())
            .with_set(
                "low",
                MembershipFunction::trapezoidal(0.0, 0.0, 40.0, 60.0).unwrap(),
            )
            .with_set(
                "high",
                MembershipFunction::trapezoidal(40.0, 60.0, 100.0, 100.0).unwrap(),
            )
    }

    fn firing(rule: usize, consequent: usize, strength: f64) -> RuleFiring {
        RuleFiring {
            rule,
            consequent,
            strength,
        }
    }

    #[test]
    fn test_clip_at_strength() {
        let out = output();
        let set = aggregate(&[firing(0, 1, 0.3)], &out, out.domain);

        let high = set.curve("high").unwrap();
        assert_eq!(high[100], 0.3);
        assert_eq!(high[0], 0.0);
        assert!(high.iter().all(|&v| v <= 0.3));
        assert!(set.curve("low").unwrap().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_shared_consequent_takes_max() {
        let out = output();
        let set = aggregate(
            &[firing(0, 0, 0.2), firing(1, 0, 0.7), firing(2, 0, 0.4)],
            &out,
            out.domain,
        );
        assert_eq!(set.height("low"), Some(0.7));
        assert_eq!(set.curve("low").unwrap()[10], 0.7);
    }

    #[test]
    fn test_combined_is_pointwise_max() {
        let out = output();
        let set = aggregate(&[firing(0, 0, 0.6), firing(1, 1, 0.9)], &out, out.domain);
        let combined = set.combined();
        assert_eq!(combined[0], 0.6);
        assert_eq!(combined[100], 0.9);
        // At x = 50 both ramps are at 0.5.
        assert!((combined[50] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_firings_is_empty() {
        let out = output();
        let set = aggregate(&[firing(0, 0, 0.0)], &out, out.domain);
        assert!(set.is_empty());
        assert!(set.combined().iter().all(|&v| v == 0.0));
    }
}
