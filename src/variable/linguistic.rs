//! Linguistic variable definition and fuzzification.

use super::domain::Domain;
use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::MembershipFunction;

/// A labelled membership function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzySet {
    /// Linguistic label, unique within its variable.
    pub label: String,
    /// Membership function for the label.
    pub function: MembershipFunction,
}

impl FuzzySet {
    pub fn new(label: impl Into<String>, function: MembershipFunction) -> Self {
        Self {
            label: label.into(),
            function,
        }
    }
}

/// A named crisp domain with an ordered list of fuzzy sets.
///
/// Sets are declared in linguistic order (lowest category first); this
/// order is checked by [`validate`](Self::validate) and is the order in
/// which degrees appear in [`Fuzzified`].
///
/// # Examples
///
/// ```
/// use u_fuzzy::membership::MembershipFunction;
/// use u_fuzzy::variable::{Domain, LinguisticVariable};
///
/// let importance = LinguisticVariable::new("importance", Domain::new(0.0, 10.0, 101).unwrap())
///     .with_set("low", MembershipFunction::trapezoidal(0.0, 0.0, 2.0, 4.0).unwrap())
///     .with_set("medium", MembershipFunction::triangular(3.0, 5.0, 7.0).unwrap())
///     .with_set("high", MembershipFunction::trapezoidal(6.0, 8.0, 10.0, 10.0).unwrap());
/// importance.validate().unwrap();
///
/// let f = importance.fuzzify(3.5);
/// assert_eq!(f.get("low"), Some(0.25));
/// assert_eq!(f.get("medium"), Some(0.25));
/// assert_eq!(f.get("high"), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinguisticVariable {
    /// Variable name, unique within a system.
    pub name: String,
    /// Crisp domain.
    pub domain: Domain,
    /// Fuzzy sets in linguistic order.
    pub sets: Vec<FuzzySet>,
}

impl LinguisticVariable {
    /// Creates a variable with no labels.
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        Self {
            name: name.into(),
            domain,
            sets: Vec::new(),
        }
    }

    /// Appends a labelled fuzzy set.
    pub fn with_set(mut self, label: impl Into<String>, function: MembershipFunction) -> Self {
        self.sets.push(FuzzySet::new(label, function));
        self
    }

    /// Label names in declaration order.
    pub fn labels(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.label.as_str()).collect()
    }

    /// Position of `label` in declaration order.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.sets.iter().position(|s| s.label == label)
    }

    /// Membership function registered for `label`.
    pub fn function(&self, label: &str) -> Option<&MembershipFunction> {
        self.sets
            .iter()
            .find(|s| s.label == label)
            .map(|s| &s.function)
    }

    /// Degree of `label` at `value` (clamped into the domain).
    pub fn membership(&self, label: &str, value: f64) -> Option<f64> {
        self.function(label)
            .map(|mf| mf.degree(self.domain.clamp(value)))
    }

    /// Center of `label`'s membership function.
    pub fn center(&self, label: &str) -> Option<f64> {
        self.function(label).map(MembershipFunction::center)
    }

    /// Validates domain, labels, and shapes.
    ///
    /// Checks, in order: domain bounds, non-empty label set, each shape,
    /// label uniqueness, non-decreasing label centers, and full coverage.
    pub fn validate(&self) -> FuzzyResult<()> {
        self.domain.validate()?;

        if self.sets.is_empty() {
            return Err(FuzzyError::EmptyVariable {
                variable: self.name.clone(),
            });
        }

        for (i, set) in self.sets.iter().enumerate() {
            set.function.validate()?;
            if self.sets[..i].iter().any(|s| s.label == set.label) {
                return Err(FuzzyError::DuplicateLabel {
                    variable: self.name.clone(),
                    label: set.label.clone(),
                });
            }
        }

        for pair in self.sets.windows(2) {
            if pair[1].function.center() < pair[0].function.center() {
                return Err(FuzzyError::UnorderedLabels {
                    variable: self.name.clone(),
                    label: pair[1].label.clone(),
                });
            }
        }

        self.check_coverage()
    }

    /// Verifies that every sample point of the domain has at least one
    /// label with a positive degree.
    pub fn check_coverage(&self) -> FuzzyResult<()> {
        for x in self.domain.points() {
            if self.sets.iter().all(|s| s.function.degree(x) <= 0.0) {
                return Err(FuzzyError::IncompleteCoverage {
                    variable: self.name.clone(),
                    value: x,
                });
            }
        }
        Ok(())
    }

    /// Fuzzifies a crisp value.
    ///
    /// Out-of-range values are clamped to the nearest domain bound; `NaN`
    /// is clamped to the lower bound.
    pub fn fuzzify(&self, value: f64) -> Fuzzified {
        let clamped = self.domain.clamp(value);
        if value.is_nan() {
            tracing::warn!(variable = %self.name, clamped, "NaN input clamped to domain minimum");
        } else if clamped != value {
            tracing::debug!(
                variable = %self.name,
                value,
                clamped,
                "input outside domain; clamped"
            );
        }

        let degrees = self
            .sets
            .iter()
            .map(|s| (s.label.clone(), s.function.degree(clamped)))
            .collect();

        Fuzzified {
            variable: self.name.clone(),
            value: clamped,
            clamped: clamped != value || value.is_nan(),
            degrees,
        }
    }

    /// Label with the highest degree at `value`.
    ///
    /// Ties go to the label with the lower center.
    pub fn dominant_label(&self, value: f64) -> Option<&str> {
        let x = self.domain.clamp(value);
        let mut best: Option<(&FuzzySet, f64)> = None;
        for set in &self.sets {
            let degree = set.function.degree(x);
            best = match best {
                None => Some((set, degree)),
                Some((b, bd)) => {
                    let better = degree > bd
                        || (degree == bd && set.function.center() < b.function.center());
                    if better {
                        Some((set, degree))
                    } else {
                        Some((b, bd))
                    }
                }
            };
        }
        best.map(|(s, _)| s.label.as_str())
    }
}

/// Result of fuzzifying one crisp value against one variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fuzzified {
    /// Variable that produced this result.
    pub variable: String,
    /// The crisp value actually evaluated (after clamping).
    pub value: f64,
    /// Whether the caller's value was clamped.
    pub clamped: bool,
    /// `(label, degree)` pairs in the variable's label order.
    pub degrees: Vec<(String, f64)>,
}

impl Fuzzified {
    /// Degree for `label`, if defined.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.degrees
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, d)| d)
    }

    /// Degree at label position `index`.
    pub fn degree_at(&self, index: usize) -> f64 {
        self.degrees.get(index).map_or(0.0, |&(_, d)| d)
    }

    /// Whether any label has a positive degree.
    pub fn is_covered(&self) -> bool {
        self.degrees.iter().any(|&(_, d)| d > 0.0)
    }

    /// Labels with a positive degree.
    pub fn active_labels(&self) -> impl Iterator<Item = (&str, f64)> {
        self.degrees
            .iter()
            .filter(|&&(_, d)| d > 0.0)
            .map(|(l, d)| (l.as_str(), *d))
    }
}
