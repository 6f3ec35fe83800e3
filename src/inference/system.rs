//! Validated fuzzy system and its builder.

use super::aggregate::{aggregate, FuzzyOutputSet};
use super::config::{InferenceConfig, NoFirePolicy};
use super::defuzzify::{defuzzify, display_label};
use crate::error::{FuzzyError, FuzzyResult};
use crate::rules::{CompiledRuleBase, Rule, RuleBase, RuleFiring};
use crate::variable::{Domain, Fuzzified, LinguisticVariable};

/// Crisp outcome of one inference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inference {
    /// Defuzzified value on the output domain.
    pub score: f64,
    /// Output label with the highest degree at `score`.
    pub label: String,
    /// `(variable, clamped value)` for each input, in declaration order.
    pub inputs: Vec<(String, f64)>,
    /// Whether any input was outside its domain and got clamped.
    pub clamped: bool,
    /// Whether `score` came from the no-fire fallback.
    pub fallback: bool,
}

impl Inference {
    /// `label` with underscores replaced by spaces.
    pub fn display_label(&self) -> String {
        display_label(&self.label)
    }

    /// Clamped value evaluated for `variable`.
    pub fn input(&self, variable: &str) -> Option<f64> {
        self.inputs
            .iter()
            .find(|(name, _)| name == variable)
            .map(|&(_, v)| v)
    }
}

/// Every intermediate stage of one inference, for inspection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InferenceTrace {
    pub fuzzified: Vec<Fuzzified>,
    pub firings: Vec<RuleFiring>,
    pub output_set: FuzzyOutputSet,
    pub inference: Inference,
}

impl InferenceTrace {
    /// Firings with positive strength, strongest first.
    pub fn active_firings(&self) -> Vec<RuleFiring> {
        let mut active: Vec<RuleFiring> =
            self.firings.iter().copied().filter(RuleFiring::fired).collect();
        active.sort_by(|a, b| {
            b.strength
                .partial_cmp(&a.strength)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.rule.cmp(&b.rule))
        });
        active
    }
}

/// An immutable Mamdani fuzzy system.
///
/// Built once through [`FuzzySystem::builder`]; all configuration errors
/// surface from [`FuzzySystemBuilder::build`]. Evaluation only reads the
/// system, so a single instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use u_fuzzy::inference::FuzzySystem;
/// use u_fuzzy::membership::MembershipFunction;
/// use u_fuzzy::rules::Rule;
/// use u_fuzzy::variable::{Domain, LinguisticVariable};
///
/// let temp = LinguisticVariable::new("temp", Domain::new(0.0, 40.0, 81).unwrap())
///     .with_set("cold", MembershipFunction::trapezoidal(0.0, 0.0, 10.0, 20.0).unwrap())
///     .with_set("hot", MembershipFunction::trapezoidal(15.0, 25.0, 40.0, 40.0).unwrap());
/// let fan = LinguisticVariable::new("fan", Domain::new(0.0, 100.0, 101).unwrap())
///     .with_set("slow", MembershipFunction::trapezoidal(0.0, 0.0, 30.0, 60.0).unwrap())
///     .with_set("fast", MembershipFunction::trapezoidal(40.0, 70.0, 100.0, 100.0).unwrap());
///
/// let system = FuzzySystem::builder()
///     .with_input(temp)
///     .with_output(fan)
///     .with_rule(Rule::and([("temp", "cold")], "slow"))
///     .with_rule(Rule::and([("temp", "hot")], "fast"))
///     .build()
///     .unwrap();
///
/// let hot = system.infer(&[35.0]).unwrap();
/// assert_eq!(hot.label, "fast");
/// let cold = system.infer(&[2.0]).unwrap();
/// assert_eq!(cold.label, "slow");
/// ```
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: CompiledRuleBase,
    config: InferenceConfig,
    sampling: Domain,
}

impl FuzzySystem {
    /// Starts a new builder.
    pub fn builder() -> FuzzySystemBuilder {
        FuzzySystemBuilder::new()
    }

    /// Input variables in declaration order.
    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    /// Input variable by name.
    pub fn input(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs.iter().find(|v| v.name == name)
    }

    /// Output variable.
    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    /// Compiled rule base.
    pub fn rules(&self) -> &CompiledRuleBase {
        &self.rules
    }

    /// Inference configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Output sampling grid used for aggregation and defuzzification.
    pub fn sampling(&self) -> Domain {
        self.sampling
    }

    /// Fuzzifies positional crisp inputs.
    pub fn fuzzify(&self, crisp: &[f64]) -> FuzzyResult<Vec<Fuzzified>> {
        if crisp.len() != self.inputs.len() {
            return Err(FuzzyError::InputCountMismatch {
                expected: self.inputs.len(),
                actual: crisp.len(),
            });
        }
        Ok(self
            .inputs
            .iter()
            .zip(crisp)
            .map(|(var, &x)| var.fuzzify(x))
            .collect())
    }

    /// Runs inference on positional crisp inputs.
    ///
    /// # Errors
    ///
    /// - [`FuzzyError::InputCountMismatch`] if `crisp.len()` differs from
    ///   the number of input variables.
    /// - [`FuzzyError::NoRuleFired`] if nothing fired and the policy is
    ///   [`NoFirePolicy::Strict`].
    pub fn infer(&self, crisp: &[f64]) -> FuzzyResult<Inference> {
        self.infer_detailed(crisp).map(|trace| trace.inference)
    }

    /// Runs inference on named crisp inputs, in any order.
    pub fn infer_named(&self, named: &[(&str, f64)]) -> FuzzyResult<Inference> {
        let crisp = self
            .inputs
            .iter()
            .map(|var| {
                named
                    .iter()
                    .find(|(name, _)| *name == var.name)
                    .map(|&(_, v)| v)
                    .ok_or_else(|| FuzzyError::MissingInput {
                        variable: var.name.clone(),
                    })
            })
            .collect::<FuzzyResult<Vec<f64>>>()?;
        self.infer(&crisp)
    }

    /// Runs inference and keeps every intermediate stage.
    pub fn infer_detailed(&self, crisp: &[f64]) -> FuzzyResult<InferenceTrace> {
        let fuzzified = self.fuzzify(crisp)?;
        let firings = self.rules.evaluate(&fuzzified);
        let output_set = aggregate(&firings, &self.output, self.sampling);

        let (score, fallback) = match defuzzify(&output_set, self.config.method) {
            Some(score) => (score, false),
            None => match self.config.no_fire {
                NoFirePolicy::Strict => return Err(FuzzyError::NoRuleFired),
                NoFirePolicy::Midpoint => {
                    let midpoint = self.output.domain.midpoint();
                    tracing::warn!(
                        inputs = ?crisp,
                        fallback = midpoint,
                        "no rule fired; using output domain midpoint"
                    );
                    (midpoint, true)
                }
            },
        };

        let label = self
            .output
            .dominant_label(score)
            .unwrap_or_default()
            .to_string();

        let inference = Inference {
            score,
            label,
            inputs: fuzzified
                .iter()
                .map(|f| (f.variable.clone(), f.value))
                .collect(),
            clamped: fuzzified.iter().any(|f| f.clamped),
            fallback,
        };

        Ok(InferenceTrace {
            fuzzified,
            firings,
            output_set,
            inference,
        })
    }

    /// Searches a regular grid over the input domains for a point where no
    /// rule fires.
    ///
    /// Each input is sampled at `steps` evenly spaced points (including both
    /// bounds). Returns the first uncovered point, or `None` if every grid
    /// point fires at least one rule.
    ///
    /// # Errors
    ///
    /// [`FuzzyError::InvalidConfig`] if the grid has more than `usize::MAX`
    /// points.
    pub fn find_uncovered(&self, steps: usize) -> FuzzyResult<Option<Vec<f64>>> {
        let steps = steps.max(2);
        let grids: Vec<Domain> = self
            .inputs
            .iter()
            .map(|v| v.domain.with_resolution(steps))
            .collect();

        let total = u32::try_from(grids.len())
            .ok()
            .and_then(|dims| steps.checked_pow(dims))
            .ok_or_else(|| FuzzyError::InvalidConfig {
                reason: format!(
                    "coverage grid of {steps}^{} points is too large",
                    grids.len()
                ),
            })?;

        let mut point = vec![0.0; grids.len()];
        for mut n in 0..total {
            for (slot, grid) in point.iter_mut().zip(&grids) {
                *slot = grid.point(n % steps);
                n /= steps;
            }
            let fuzzified = self.fuzzify(&point)?;
            if !self.rules.evaluate(&fuzzified).iter().any(RuleFiring::fired) {
                return Ok(Some(point));
            }
        }
        Ok(None)
    }
}

/// Collects the parts of a [`FuzzySystem`].
#[derive(Debug, Clone, Default)]
pub struct FuzzySystemBuilder {
    inputs: Vec<LinguisticVariable>,
    output: Option<LinguisticVariable>,
    rules: RuleBase,
    config: InferenceConfig,
}

impl FuzzySystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input variable. Declaration order defines positional order.
    pub fn with_input(mut self, variable: LinguisticVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    /// Sets the output variable.
    pub fn with_output(mut self, variable: LinguisticVariable) -> Self {
        self.output = Some(variable);
        self
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules = self.rules.with_rule(rule);
        self
    }

    /// Appends every rule of `rules`.
    pub fn with_rule_base(mut self, rules: RuleBase) -> Self {
        self.rules = self.rules.with_rules(rules.rules().iter().cloned());
        self
    }

    /// Sets the inference configuration.
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates everything and produces the system.
    ///
    /// # Errors
    ///
    /// Any configuration error from the variables, the rule base, or the
    /// inference config. Nothing is evaluated until all checks pass.
    pub fn build(self) -> FuzzyResult<FuzzySystem> {
        self.config.validate()?;

        if self.inputs.is_empty() {
            return Err(FuzzyError::InvalidConfig {
                reason: "at least one input variable is required".into(),
            });
        }
        let output = self.output.ok_or_else(|| FuzzyError::InvalidConfig {
            reason: "output variable is not set".into(),
        })?;

        for (i, var) in self.inputs.iter().enumerate() {
            var.validate()?;
            let clash =
                self.inputs[..i].iter().any(|v| v.name == var.name) || var.name == output.name;
            if clash {
                return Err(FuzzyError::DuplicateVariable {
                    variable: var.name.clone(),
                });
            }
        }
        output.validate()?;

        let rules = self.rules.compile(&self.inputs, &output)?;
        let sampling = match self.config.resolution {
            Some(n) => output.domain.with_resolution(n),
            None => output.domain,
        };

        tracing::debug!(
            inputs = self.inputs.len(),
            output = %output.name,
            rules = rules.len(),
            resolution = sampling.resolution,
            "fuzzy system built"
        );

        Ok(FuzzySystem {
            inputs: self.inputs,
            output,
            rules,
            config: self.config,
            sampling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::DefuzzMethod;
    use crate::membership::MembershipFunction;

    fn level(name: &str) -> LinguisticVariable {
        LinguisticVariable::new(name, Domain::new(0.0, 10.0, 101).unwrap())
            .with_set(
                "lo",
                MembershipFunction::trapezoidal(0.0, 0.0, 4.0, 6.0).unwrap(),
            )
            .with_set(
                "hi",
                MembershipFunction::trapezoidal(4.0, 6.0, 10.0, 10.0).unwrap(),
            )
    }

    fn out() -> LinguisticVariable {
        LinguisticVariable::new("out", Domain::new(0.0, 100.0, 1001).unwrap())
            .with_set(
                "small",
                MembershipFunction::triangular(0.0, 25.0, 50.0).unwrap(),
            )
            .with_set(
                "large",
                MembershipFunction::triangular(50.0, 75.0, 100.0).unwrap(),
            )
    }

    fn partial_system(policy: NoFirePolicy) -> FuzzySystem {
        // Only "a is hi" is covered, so low inputs fire nothing.
        FuzzySystem::builder()
            .with_input(level("a"))
            .with_output(out())
            .with_rule(Rule::and([("a", "hi")], "large"))
            .with_config(InferenceConfig::default().with_no_fire(policy))
            .build()
            .unwrap()
    }

    #[test]
    fn test_infer_single_rule() {
        let system = partial_system(NoFirePolicy::Strict);
        let result = system.infer(&[10.0]).unwrap();
        assert!((result.score - 75.0).abs() < 1e-9);
        assert_eq!(result.label, "large");
        assert!(!result.fallback);
        assert_eq!(result.input("a"), Some(10.0));
    }

    #[test]
    fn test_no_fire_strict() {
        let system = partial_system(NoFirePolicy::Strict);
        assert_eq!(system.infer(&[0.0]).unwrap_err(), FuzzyError::NoRuleFired);
    }

    #[test]
    fn test_no_fire_midpoint() {
        let system = partial_system(NoFirePolicy::Midpoint);
        let result = system.infer(&[0.0]).unwrap();
        assert_eq!(result.score, 50.0);
        assert!(result.fallback);
        assert!(!result.score.is_nan());
    }

    #[test]
    fn test_find_uncovered() {
        let system = partial_system(NoFirePolicy::Midpoint);
        let point = system.find_uncovered(11).unwrap();
        assert_eq!(point, Some(vec![0.0]));
    }

    #[test]
    fn test_find_uncovered_grid_overflow() {
        let system = FuzzySystem::builder()
            .with_input(level("a"))
            .with_input(level("b"))
            .with_input(level("c"))
            .with_output(out())
            .with_rule(Rule::or([("a", "lo"), ("a", "hi")], "small"))
            .build()
            .unwrap();
        let err = system.find_uncovered(usize::MAX / 2).unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidConfig { .. }));
        assert_eq!(system.find_uncovered(5).unwrap(), None);
    }

    #[test]
    fn test_clamped_flag() {
        let system = partial_system(NoFirePolicy::Midpoint);
        assert!(!system.infer(&[10.0]).unwrap().clamped);
        let result = system.infer(&[14.0]).unwrap();
        assert!(result.clamped);
        assert_eq!(result.input("a"), Some(10.0));
    }

    #[test]
    fn test_input_count_mismatch() {
        let system = partial_system(NoFirePolicy::Strict);
        assert_eq!(
            system.infer(&[1.0, 2.0]).unwrap_err(),
            FuzzyError::InputCountMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_infer_named() {
        let system = FuzzySystem::builder()
            .with_input(level("a"))
            .with_input(level("b"))
            .with_output(out())
            .with_rule(Rule::and([("a", "hi"), ("b", "hi")], "large"))
            .with_rule(Rule::or([("a", "lo"), ("b", "lo")], "small"))
            .build()
            .unwrap();

        let named = system.infer_named(&[("b", 10.0), ("a", 10.0)]).unwrap();
        let positional = system.infer(&[10.0, 10.0]).unwrap();
        assert_eq!(named, positional);

        let missing = system.infer_named(&[("a", 1.0)]).unwrap_err();
        assert_eq!(
            missing,
            FuzzyError::MissingInput {
                variable: "b".into()
            }
        );
    }

    #[test]
    fn test_detailed_trace() {
        let system = FuzzySystem::builder()
            .with_input(level("a"))
            .with_output(out())
            .with_rule(Rule::and([("a", "lo")], "small"))
            .with_rule(Rule::and([("a", "hi")], "large"))
            .build()
            .unwrap();

        let trace = system.infer_detailed(&[5.5]).unwrap();
        assert_eq!(trace.fuzzified.len(), 1);
        assert_eq!(trace.firings.len(), 2);
        let active = trace.active_firings();
        assert_eq!(active[0].rule, 1);
        assert!((active[0].strength - 0.75).abs() < 1e-12);
        assert_eq!(trace.output_set.height("small"), Some(0.25));
        assert!(trace.inference.score > 50.0);
    }

    #[test]
    fn test_build_errors() {
        let no_output = FuzzySystem::builder()
            .with_input(level("a"))
            .with_rule(Rule::and([("a", "hi")], "large"))
            .build();
        assert!(matches!(no_output, Err(FuzzyError::InvalidConfig { .. })));

        let no_inputs = FuzzySystem::builder()
            .with_output(out())
            .with_rule(Rule::and([("a", "hi")], "large"))
            .build();
        assert!(matches!(no_inputs, Err(FuzzyError::InvalidConfig { .. })));

        let duplicate = FuzzySystem::builder()
            .with_input(level("a"))
            .with_input(level("a"))
            .with_output(out())
            .with_rule(Rule::and([("a", "hi")], "large"))
            .build();
        assert!(matches!(
            duplicate,
            Err(FuzzyError::DuplicateVariable { .. })
        ));

        let bad_label = FuzzySystem::builder()
            .with_input(level("a"))
            .with_output(out())
            .with_rule(Rule::and([("a", "medium")], "large"))
            .build();
        assert!(matches!(bad_label, Err(FuzzyError::UnknownLabel { .. })));
    }

    #[test]
    fn test_resolution_override() {
        let system = FuzzySystem::builder()
            .with_input(level("a"))
            .with_output(out())
            .with_rule(Rule::and([("a", "hi")], "large"))
            .with_config(
                InferenceConfig::default()
                    .with_resolution(201)
                    .with_method(DefuzzMethod::MeanOfMaximum),
            )
            .build()
            .unwrap();
        assert_eq!(system.sampling().resolution, 201);
        let result = system.infer(&[10.0]).unwrap();
        assert!((result.score - 75.0).abs() < 1e-9);
    }
}
