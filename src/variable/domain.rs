//! Crisp universe of discourse.

use crate::error::{FuzzyError, FuzzyResult};

/// A closed interval `[min, max]` sampled at `resolution` evenly spaced points.
///
/// The resolution drives numerical integration during defuzzification and
/// the coverage check during configuration.
///
/// # Examples
///
/// ```
/// use u_fuzzy::variable::Domain;
///
/// let d = Domain::new(0.0, 100.0, 101).unwrap();
/// assert_eq!(d.point(50), 50.0);
/// assert_eq!(d.clamp(120.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Number of sample points, including both bounds.
    pub resolution: usize,
}

impl Domain {
    /// Creates a validated domain.
    pub fn new(min: f64, max: f64, resolution: usize) -> FuzzyResult<Self> {
        let domain = Self {
            min,
            max,
            resolution,
        };
        domain.validate()?;
        Ok(domain)
    }

    /// Returns a copy with a different sampling resolution.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Checks bounds and resolution.
    pub fn validate(&self) -> FuzzyResult<()> {
        let invalid = |reason| FuzzyError::InvalidDomain {
            min: self.min,
            max: self.max,
            resolution: self.resolution,
            reason,
        };
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if self.min >= self.max {
            return Err(invalid("min must be less than max"));
        }
        if self.resolution < 2 {
            return Err(invalid("resolution must be at least 2"));
        }
        Ok(())
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Center of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Whether `x` lies within the bounds.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Clamps `x` into the bounds. `NaN` clamps to `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            self.min
        } else {
            x.clamp(self.min, self.max)
        }
    }

    /// The `k`-th sample point. `point(0) == min`, `point(resolution - 1) == max`.
    pub fn point(&self, k: usize) -> f64 {
        self.min + self.span() * k as f64 / (self.resolution - 1) as f64
    }

    /// Iterator over all sample points in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.resolution).map(move |k| self.point(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_include_bounds() {
        let d = Domain::new(0.0, 30.0, 31).unwrap();
        let pts: Vec<f64> = d.points().collect();
        assert_eq!(pts.len(), 31);
        assert_eq!(pts[0], 0.0);
        assert_eq!(pts[30], 30.0);
        assert!((pts[7] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp() {
        let d = Domain::new(0.0, 10.0, 11).unwrap();
        assert_eq!(d.clamp(-3.0), 0.0);
        assert_eq!(d.clamp(12.0), 10.0);
        assert_eq!(d.clamp(4.5), 4.5);
        assert_eq!(d.clamp(f64::NAN), 0.0);
        assert_eq!(d.clamp(f64::INFINITY), 10.0);
    }

    #[test]
    fn test_midpoint() {
        let d = Domain::new(0.0, 100.0, 2).unwrap();
        assert_eq!(d.midpoint(), 50.0);
    }

    #[test]
    fn test_invalid_domains() {
        assert!(Domain::new(10.0, 0.0, 11).is_err());
        assert!(Domain::new(0.0, 0.0, 11).is_err());
        assert!(Domain::new(0.0, 10.0, 1).is_err());
        assert!(Domain::new(f64::NEG_INFINITY, 10.0, 11).is_err());
    }
}
