//! Rule base declaration, compilation, and evaluation.

use super::types::{Connective, Rule};
use crate::error::{FuzzyError, FuzzyResult};
use crate::variable::{Fuzzified, LinguisticVariable};

/// An ordered collection of rules, written against names.
///
/// # Examples
///
/// ```
/// use u_fuzzy::rules::{Rule, RuleBase};
///
/// let rules = RuleBase::new()
///     .with_rule(Rule::and([("deadline_days", "close"), ("importance", "high")], "very_high"))
///     .with_rule(Rule::and([("deadline_days", "far"), ("importance", "low")], "very_low"));
///
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Creates an empty rule base.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several rules.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves every name against the given variables.
    ///
    /// # Errors
    ///
    /// - [`FuzzyError::EmptyRuleBase`] if there are no rules.
    /// - [`FuzzyError::EmptyAntecedent`] for a rule with no terms.
    /// - [`FuzzyError::InvalidWeight`] for a weight outside `(0, 1]`.
    /// - [`FuzzyError::UnknownVariable`] / [`FuzzyError::UnknownLabel`]
    ///   for a term or consequent that does not resolve.
    pub fn compile(
        self,
        inputs: &[LinguisticVariable],
        output: &LinguisticVariable,
    ) -> FuzzyResult<CompiledRuleBase> {
        if self.rules.is_empty() {
            return Err(FuzzyError::EmptyRuleBase);
        }

        let mut compiled = Vec::with_capacity(self.rules.len());
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.terms.is_empty() {
                return Err(FuzzyError::EmptyAntecedent { rule: idx });
            }
            if !(rule.weight > 0.0 && rule.weight <= 1.0) {
                return Err(FuzzyError::InvalidWeight {
                    rule: idx,
                    weight: rule.weight,
                });
            }

            let mut terms = Vec::with_capacity(rule.terms.len());
            for term in &rule.terms {
                let var_idx = inputs
                    .iter()
                    .position(|v| v.name == term.variable)
                    .ok_or_else(|| FuzzyError::UnknownVariable {
                        rule: idx,
                        variable: term.variable.clone(),
                    })?;
                let label_idx = inputs[var_idx].label_index(&term.label).ok_or_else(|| {
                    FuzzyError::UnknownLabel {
                        rule: idx,
                        variable: term.variable.clone(),
                        label: term.label.clone(),
                    }
                })?;
                terms.push(TermIndex { var_idx, label_idx });
            }

            let consequent = output.label_index(&rule.consequent).ok_or_else(|| {
                FuzzyError::UnknownLabel {
                    rule: idx,
                    variable: output.name.clone(),
                    label: rule.consequent.clone(),
                }
            })?;

            compiled.push(CompiledRule {
                terms,
                connective: rule.connective,
                consequent,
                weight: rule.weight,
            });
        }

        Ok(CompiledRuleBase {
            rules: self.rules,
            compiled,
            input_count: inputs.len(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TermIndex {
    var_idx: usize,
    label_idx: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct CompiledRule {
    terms: Vec<TermIndex>,
    connective: Connective,
    consequent: usize,
    weight: f64,
}

/// The firing strength of one rule for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleFiring {
    /// Index of the rule in declaration order.
    pub rule: usize,
    /// Index of the consequent label on the output variable.
    pub consequent: usize,
    /// Firing strength in `[0, 1]`.
    pub strength: f64,
}

impl RuleFiring {
    /// Whether the rule contributes to the output.
    pub fn fired(&self) -> bool {
        self.strength > 0.0
    }
}

/// A rule base whose names have been resolved against concrete variables.
///
/// Obtained from [`RuleBase::compile`]. Evaluation is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRuleBase {
    rules: Vec<Rule>,
    compiled: Vec<CompiledRule>,
    input_count: usize,
}

impl CompiledRuleBase {
    /// Source rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule at `index`.
    pub fn rule(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of input variables this base was compiled against.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Computes the firing strength of every rule, in declaration order.
    ///
    /// `fuzzified` must be aligned with the input variables passed to
    /// [`RuleBase::compile`]; a missing entry counts as degree `0`.
    pub fn evaluate(&self, fuzzified: &[Fuzzified]) -> Vec<RuleFiring> {
        self.compiled
            .iter()
            .enumerate()
            .map(|(idx, rule)| {
                let degrees = rule.terms.iter().map(|t| {
                    fuzzified
                        .get(t.var_idx)
                        .map_or(0.0, |f| f.degree_at(t.label_idx))
                });
                let strength = rule.connective.combine(degrees) * rule.weight;
                tracing::trace!(rule = idx, strength, "rule evaluated");
                RuleFiring {
                    rule: idx,
                    consequent: rule.consequent,
                    strength,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipFunction;
    use crate::variable::Domain;

    fn two_level(name: &str, lo: &str, hi: &str) -> LinguisticVariable {
        LinguisticVariable::new(name, Domain::new(0.0, 10.0, 101).unwrap())
            .with_set(lo, MembershipFunction::trapezoidal(0.0, 0.0, 4.0, 6.0).unwrap())
            .with_set(hi, MembershipFunction::trapezoidal(4.0, 6.0, 10.0, 10.0).unwrap())
    }

    fn inputs() -> Vec<LinguisticVariable> {
        vec![two_level("a", "lo", "hi"), two_level("b", "lo", "hi")]
    }

    fn output() -> LinguisticVariable {
        two_level("out", "small", "large")
    }

    #[test]
    fn test_compile_and_evaluate_and() {
        let base = RuleBase::new()
            .with_rule(Rule::and([("a", "hi"), ("b", "hi")], "large"))
            .compile(&inputs(), &output())
            .unwrap();

        let vars = inputs();
        let fuzzified = vec![vars[0].fuzzify(5.0), vars[1].fuzzify(10.0)];
        let firings = base.evaluate(&fuzzified);

        assert_eq!(firings.len(), 1);
        assert_eq!(firings[0].consequent, 1);
        assert!((firings[0].strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_or_and_weight() {
        let base = RuleBase::new()
            .with_rule(Rule::or([("a", "hi"), ("b", "hi")], "large").with_weight(0.5))
            .compile(&inputs(), &output())
            .unwrap();

        let vars = inputs();
        let fuzzified = vec![vars[0].fuzzify(0.0), vars[1].fuzzify(10.0)];
        let firings = base.evaluate(&fuzzified);
        assert!((firings[0].strength - 0.5).abs() < 1e-12);
        assert!(firings[0].fired());
    }

    #[test]
    fn test_firing_order_matches_declaration() {
        let base = RuleBase::new()
            .with_rule(Rule::and([("a", "lo")], "small"))
            .with_rule(Rule::and([("a", "hi")], "large"))
            .compile(&inputs(), &output())
            .unwrap();

        let vars = inputs();
        let firings = base.evaluate(&[vars[0].fuzzify(0.0), vars[1].fuzzify(0.0)]);
        assert_eq!(firings[0].rule, 0);
        assert_eq!(firings[0].strength, 1.0);
        assert_eq!(firings[1].rule, 1);
        assert!(!firings[1].fired());
    }

    #[test]
    fn test_unknown_label_at_compile() {
        let err = RuleBase::new()
            .with_rule(Rule::and([("a", "huge")], "large"))
            .compile(&inputs(), &output())
            .unwrap_err();
        assert_eq!(
            err,
            FuzzyError::UnknownLabel {
                rule: 0,
                variable: "a".into(),
                label: "huge".into(),
            }
        );
    }

    #[test]
    fn test_unknown_consequent_at_compile() {
        let err = RuleBase::new()
            .with_rule(Rule::and([("a", "hi")], "enormous"))
            .compile(&inputs(), &output())
            .unwrap_err();
        assert!(matches!(err, FuzzyError::UnknownLabel { variable, .. } if variable == "out"));
    }

    #[test]
    fn test_unknown_variable_at_compile() {
        let err = RuleBase::new()
            .with_rule(Rule::and([("a", "hi")], "large"))
            .with_rule(Rule::and([("c", "hi")], "large"))
            .compile(&inputs(), &output())
            .unwrap_err();
        assert!(matches!(err, FuzzyError::UnknownVariable { rule: 1, .. }));
    }

    #[test]
    fn test_structural_errors() {
        let empty = RuleBase::new().compile(&inputs(), &output());
        assert_eq!(empty.unwrap_err(), FuzzyError::EmptyRuleBase);

        let no_terms = RuleBase::new()
            .with_rule(Rule::and(Vec::<(String, String)>::new(), "large"))
            .compile(&inputs(), &output());
        assert_eq!(
            no_terms.unwrap_err(),
            FuzzyError::EmptyAntecedent { rule: 0 }
        );

        let bad_weight = RuleBase::new()
            .with_rule(Rule::and([("a", "hi")], "large").with_weight(1.5))
            .compile(&inputs(), &output());
        assert!(matches!(
            bad_weight.unwrap_err(),
            FuzzyError::InvalidWeight { rule: 0, .. }
        ));
    }
}
