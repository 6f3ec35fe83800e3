//! Triangular and trapezoidal shapes.

use crate::error::{FuzzyError, FuzzyResult};

/// A piecewise-linear membership function.
///
/// Construct through [`MembershipFunction::triangular`] or
/// [`MembershipFunction::trapezoidal`], which reject out-of-order or
/// non-finite breakpoints. Deserialized values should be checked with
/// [`MembershipFunction::validate`].
///
/// # Examples
///
/// ```
/// use u_fuzzy::membership::MembershipFunction;
///
/// let moderate = MembershipFunction::triangular(3.0, 5.0, 7.0).unwrap();
/// assert_eq!(moderate.degree(5.0), 1.0);
/// assert_eq!(moderate.degree(4.0), 0.5);
/// assert_eq!(moderate.degree(9.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum MembershipFunction {
    /// Triangle with feet at `a`, `c` and peak at `b`.
    Triangular { a: f64, b: f64, c: f64 },

    /// Trapezoid with feet at `a`, `d` and plateau `[b, c]`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Creates a triangular function. Requires `a <= b <= c`.
    pub fn triangular(a: f64, b: f64, c: f64) -> FuzzyResult<Self> {
        let mf = MembershipFunction::Triangular { a, b, c };
        mf.validate()?;
        Ok(mf)
    }

    /// Creates a trapezoidal function. Requires `a <= b <= c <= d`.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> FuzzyResult<Self> {
        let mf = MembershipFunction::Trapezoidal { a, b, c, d };
        mf.validate()?;
        Ok(mf)
    }

    /// Short shape name used in error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            MembershipFunction::Triangular { .. } => "triangular",
            MembershipFunction::Trapezoidal { .. } => "trapezoidal",
        }
    }

    /// Breakpoints in ascending order.
    pub fn breakpoints(&self) -> Vec<f64> {
        match *self {
            MembershipFunction::Triangular { a, b, c } => vec![a, b, c],
            MembershipFunction::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
        }
    }

    /// Checks that breakpoints are finite and ordered.
    pub fn validate(&self) -> FuzzyResult<()> {
        let points = self.breakpoints();
        let invalid = |reason| FuzzyError::InvalidShapeParameters {
            shape: self.shape_name(),
            params: points.clone(),
            reason,
        };

        if points.iter().any(|p| !p.is_finite()) {
            return Err(invalid("breakpoints must be finite"));
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(invalid("breakpoints must be in non-decreasing order"));
        }
        Ok(())
    }

    /// Evaluates the membership degree at `x`.
    ///
    /// Always returns a value in `[0, 1]`. `NaN` maps to `0`.
    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        match *self {
            MembershipFunction::Triangular { a, b, c } => {
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                if x >= b && x <= c {
                    1.0
                } else if x <= a || x >= d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
        }
    }

    /// Center of the region where the function is fully true.
    ///
    /// Used to order labels linguistically and to break ties
    /// toward the "lower" label.
    pub fn center(&self) -> f64 {
        match *self {
            MembershipFunction::Triangular { b, .. } => b,
            MembershipFunction::Trapezoidal { b, c, .. } => (b + c) / 2.0,
        }
    }

    /// Closed interval outside of which the degree is zero.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            MembershipFunction::Triangular { a, c, .. } => (a, c),
            MembershipFunction::Trapezoidal { a, d, .. } => (a, d),
        }
    }
}
