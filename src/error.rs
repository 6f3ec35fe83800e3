//! Error types for fuzzy system construction and inference.

/// Errors raised while building or evaluating a fuzzy system.
///
/// Everything except [`FuzzyError::NoRuleFired`] and the input-shape
/// variants is a configuration error: it is reported by a `validate()`
/// or `build()` call before any evaluation happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FuzzyError {
    #[error("invalid {shape} parameters {params:?}: {reason}")]
    InvalidShapeParameters {
        shape: &'static str,
        params: Vec<f64>,
        reason: &'static str,
    },

    #[error("invalid domain [{min}, {max}] with resolution {resolution}: {reason}")]
    InvalidDomain {
        min: f64,
        max: f64,
        resolution: usize,
        reason: &'static str,
    },

    #[error("variable '{variable}' defines label '{label}' more than once")]
    DuplicateLabel { variable: String, label: String },

    #[error("variable '{variable}' is defined more than once")]
    DuplicateVariable { variable: String },

    #[error("variable '{variable}' has no labels")]
    EmptyVariable { variable: String },

    #[error("variable '{variable}': label '{label}' is centered before the label declared ahead of it")]
    UnorderedLabels { variable: String, label: String },

    #[error("variable '{variable}' has no label with positive degree at {value}")]
    IncompleteCoverage { variable: String, value: f64 },

    #[error("rule {rule} references unknown variable '{variable}'")]
    UnknownVariable { rule: usize, variable: String },

    #[error("rule {rule} references unknown label '{label}' on variable '{variable}'")]
    UnknownLabel {
        rule: usize,
        variable: String,
        label: String,
    },

    #[error("rule {rule} has an empty antecedent")]
    EmptyAntecedent { rule: usize },

    #[error("rule {rule} has weight {weight}, expected a value in (0, 1]")]
    InvalidWeight { rule: usize, weight: f64 },

    #[error("rule base is empty")]
    EmptyRuleBase,

    #[error("invalid inference config: {reason}")]
    InvalidConfig { reason: String },

    #[error("missing crisp input for variable '{variable}'")]
    MissingInput { variable: String },

    #[error("expected {expected} crisp inputs, got {actual}")]
    InputCountMismatch { expected: usize, actual: usize },

    #[error("no rule fired; aggregated output has zero area")]
    NoRuleFired,
}

/// Result alias used across the crate.
pub type FuzzyResult<T> = Result<T, FuzzyError>;
