//! Rule, term and connective types.

/// How antecedent terms are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Connective {
    /// Fuzzy AND (minimum).
    #[default]
    And,

    /// Fuzzy OR (maximum).
    Or,
}

impl Connective {
    /// Combines term degrees. An empty slice yields `0.0`.
    pub fn combine(&self, degrees: impl IntoIterator<Item = f64>) -> f64 {
        let mut iter = degrees.into_iter();
        let Some(first) = iter.next() else {
            return 0.0;
        };
        match self {
            Connective::And => iter.fold(first, f64::min),
            Connective::Or => iter.fold(first, f64::max),
        }
    }
}

/// A single `variable is label` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub variable: String,
    pub label: String,
}

impl Term {
    pub fn new(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for Term {
    fn from((variable, label): (V, L)) -> Self {
        Term::new(variable, label)
    }
}

/// An IF-THEN fuzzy rule.
///
/// # Examples
///
/// ```
/// use u_fuzzy::rules::{Connective, Rule};
///
/// // IF deadline_days is close AND importance is high THEN very_high
/// let rule = Rule::and(
///     [("deadline_days", "close"), ("importance", "high")],
///     "very_high",
/// );
/// assert_eq!(rule.connective, Connective::And);
/// assert_eq!(rule.terms.len(), 2);
/// assert_eq!(rule.weight, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Antecedent terms, in declaration order.
    pub terms: Vec<Term>,
    /// How the terms are combined.
    pub connective: Connective,
    /// Output label this rule supports.
    pub consequent: String,
    /// Multiplier applied to the firing strength, in `(0, 1]`.
    pub weight: f64,
}

impl Rule {
    /// Creates a rule with an explicit connective.
    pub fn new<T, I>(connective: Connective, terms: I, consequent: impl Into<String>) -> Self
    where
        T: Into<Term>,
        I: IntoIterator<Item = T>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            connective,
            consequent: consequent.into(),
            weight: 1.0,
        }
    }

    /// Creates a conjunctive (AND) rule.
    pub fn and<T, I>(terms: I, consequent: impl Into<String>) -> Self
    where
        T: Into<Term>,
        I: IntoIterator<Item = T>,
    {
        Self::new(Connective::And, terms, consequent)
    }

    /// Creates a disjunctive (OR) rule.
    pub fn or<T, I>(terms: I, consequent: impl Into<String>) -> Self
    where
        T: Into<Term>,
        I: IntoIterator<Item = T>,
    {
        Self::new(Connective::Or, terms, consequent)
    }

    /// Sets the rule weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joiner = match self.connective {
            Connective::And => " AND ",
            Connective::Or => " OR ",
        };
        write!(f, "IF ")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(joiner)?;
            }
            write!(f, "{} is {}", term.variable, term.label)?;
        }
        write!(f, " THEN {}", self.consequent)?;
        if self.weight != 1.0 {
            write!(f, " (weight {})", self.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_is_min() {
        assert_eq!(Connective::And.combine([0.7, 0.2, 0.9]), 0.2);
    }

    #[test]
    fn test_or_is_max() {
        assert_eq!(Connective::Or.combine([0.7, 0.2, 0.9]), 0.9);
    }

    #[test]
    fn test_empty_combine() {
        assert_eq!(Connective::And.combine(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_display() {
        let rule = Rule::or([("a", "x"), ("b", "y")], "out").with_weight(0.5);
        assert_eq!(rule.to_string(), "IF a is x OR b is y THEN out (weight 0.5)");
    }
}
