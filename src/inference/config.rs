//! Inference configuration.

use crate::error::{FuzzyError, FuzzyResult};

/// Method used to collapse the aggregated output curve to a crisp value.
///
/// # References
///
/// Ross (2010), *Fuzzy Logic with Engineering Applications*, §4.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DefuzzMethod {
    /// Center of area: `Σ x·μ(x) / Σ μ(x)` over the sample points.
    #[default]
    Centroid,

    /// Point splitting the area under the curve into two equal halves.
    Bisector,

    /// Mean of the sample points where the curve is maximal.
    MeanOfMaximum,

    /// Leftmost sample point where the curve is maximal.
    SmallestOfMaximum,

    /// Rightmost sample point where the curve is maximal.
    LargestOfMaximum,
}

/// What to do when no rule fires (the aggregated curve has zero area).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NoFirePolicy {
    /// Return the midpoint of the output domain and mark the result as a
    /// fallback. A warning is logged.
    #[default]
    Midpoint,

    /// Fail with [`FuzzyError::NoRuleFired`].
    Strict,
}

/// Configuration for a [`FuzzySystem`](super::FuzzySystem).
///
/// # Examples
///
/// ```
/// use u_fuzzy::inference::{DefuzzMethod, InferenceConfig, NoFirePolicy};
///
/// let config = InferenceConfig::default()
///     .with_resolution(501)
///     .with_method(DefuzzMethod::Bisector)
///     .with_no_fire(NoFirePolicy::Strict);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InferenceConfig {
    /// Number of output sample points.
    ///
    /// `None` uses the output variable's own domain resolution.
    pub resolution: Option<usize>,

    /// Defuzzification method.
    pub method: DefuzzMethod,

    /// Policy when no rule fires.
    pub no_fire: NoFirePolicy,
}

impl InferenceConfig {
    /// Overrides the output sampling resolution.
    pub fn with_resolution(mut self, n: usize) -> Self {
        self.resolution = Some(n);
        self
    }

    /// Sets the defuzzification method.
    pub fn with_method(mut self, method: DefuzzMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the no-fire policy.
    pub fn with_no_fire(mut self, policy: NoFirePolicy) -> Self {
        self.no_fire = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> FuzzyResult<()> {
        if let Some(n) = self.resolution {
            if n < 2 {
                return Err(FuzzyError::InvalidConfig {
                    reason: format!("resolution must be at least 2, got {n}"),
                });
            }
        }
        Ok(())
    }
}
